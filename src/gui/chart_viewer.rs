//! Chart Viewer Widget
//! Central scrollable panel holding the two chart output slots. The app
//! overwrites a slot whenever its trigger fires; this widget only repaints
//! whatever the slots currently hold.

use crate::charts::{ChartPlotter, PieChartData, ScatterChartData};
use egui::{RichText, ScrollArea};

const CARD_SPACING: f32 = 15.0;
const PIE_SIZE: f32 = 340.0;
const SCATTER_HEIGHT: f32 = 340.0;

pub struct ChartViewer {
    pub pie: PieChartData,
    pub scatter: ScatterChartData,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self {
            pie: PieChartData::default(),
            scatter: ScatterChartData::default(),
        }
    }

    /// Last write wins per slot; the two triggers are independent.
    pub fn set_pie(&mut self, pie: PieChartData) {
        self.pie = pie;
    }

    pub fn set_scatter(&mut self, scatter: ScatterChartData) {
        self.scatter = scatter;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let pie_title = self.pie.title.clone();
                Self::draw_card(ui, &pie_title, |ui| {
                    ui.horizontal(|ui| {
                        for slice in &self.pie.slices {
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(14.0, 14.0),
                                egui::Sense::hover(),
                            );
                            ui.painter().rect_filled(rect, 3.0, slice.color);
                            ui.label(RichText::new(&slice.label).size(12.0));
                            ui.add_space(10.0);
                        }
                    });
                    ui.add_space(8.0);
                    ChartPlotter::draw_pie_chart(ui, &self.pie, PIE_SIZE);
                });

                ui.add_space(CARD_SPACING);

                let scatter_title = self.scatter.title.clone();
                Self::draw_card(ui, &scatter_title, |ui| {
                    ChartPlotter::draw_scatter_chart(ui, &self.scatter, SCATTER_HEIGHT);
                });
            });
    }

    fn draw_card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width() - 10.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                    ui.add_space(8.0);
                    add_contents(ui);
                });
            });
    }
}
