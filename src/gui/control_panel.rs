//! Control Panel Widget
//! Left side panel with the site selector, payload-range controls and actions.

use crate::data::{LaunchData, PayloadRange, SiteSelection, ALL_SITES_LABEL};
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Slider step granularity for the payload range, in kg.
const PAYLOAD_STEP_KG: f64 = 1000.0;

/// Actions triggered by control panel input changes.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SiteChanged,
    PayloadChanged,
    BrowseCsv,
    ExportPng,
}

/// Left side control panel. Holds the two reactive inputs (site selection and
/// payload range) plus the selector options and range bounds derived from the
/// loaded dataset.
pub struct ControlPanel {
    pub selected_site: SiteSelection,
    pub payload_range: PayloadRange,
    sites: Vec<String>,
    bounds: (f64, f64),
    csv_path: Option<PathBuf>,
    status: String,
}

impl ControlPanel {
    pub fn new(data: &LaunchData, csv_path: PathBuf) -> Self {
        let mut panel = Self {
            selected_site: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 0.0),
            sites: Vec::new(),
            bounds: (0.0, 0.0),
            csv_path: Some(csv_path),
            status: "Ready".to_string(),
        };
        panel.reset_for(data);
        panel
    }

    /// Rebuild selector options and range bounds from a freshly loaded
    /// dataset, resetting both inputs to their defaults.
    pub fn reset_for(&mut self, data: &LaunchData) {
        self.sites = data.sites().to_vec();
        self.bounds = data.payload_bounds();
        self.selected_site = SiteSelection::All;
        self.payload_range = PayloadRange::new(self.bounds.0, self.bounds.1);
    }

    pub fn set_csv_path(&mut self, path: PathBuf) {
        self.csv_path = Some(path);
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw the control panel, reporting at most one input change per frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🚀 Launch Records")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Interactive Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());
                    ui.label(RichText::new(&path_text).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Launch Site Section =====
        ui.label(RichText::new("📍 Launch Site").size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("site_select")
            .width(220.0)
            .selected_text(self.selected_site.label().to_string())
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(self.selected_site == SiteSelection::All, ALL_SITES_LABEL)
                    .clicked()
                    && self.selected_site != SiteSelection::All
                {
                    self.selected_site = SiteSelection::All;
                    action = ControlPanelAction::SiteChanged;
                }
                for site in &self.sites {
                    let selected = self.selected_site == SiteSelection::Site(site.clone());
                    if ui.selectable_label(selected, site).clicked() && !selected {
                        self.selected_site = SiteSelection::Site(site.clone());
                        action = ControlPanelAction::SiteChanged;
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Payload Range Section =====
        ui.label(RichText::new("⚖ Payload Range (kg)").size(14.0).strong());
        ui.add_space(5.0);

        let (lower_bound, upper_bound) = self.bounds;

        let min_changed = ui
            .add(
                egui::Slider::new(&mut self.payload_range.min, lower_bound..=upper_bound)
                    .step_by(PAYLOAD_STEP_KG)
                    .text("Min"),
            )
            .changed();
        let max_changed = ui
            .add(
                egui::Slider::new(&mut self.payload_range.max, lower_bound..=upper_bound)
                    .step_by(PAYLOAD_STEP_KG)
                    .text("Max"),
            )
            .changed();

        // The widgets enforce min <= max; the filter engine assumes it.
        if min_changed && self.payload_range.min > self.payload_range.max {
            self.payload_range.min = self.payload_range.max;
        }
        if max_changed && self.payload_range.max < self.payload_range.min {
            self.payload_range.max = self.payload_range.min;
        }
        if (min_changed || max_changed) && action == ControlPanelAction::None {
            action = ControlPanelAction::PayloadChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Actions =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::ExportPng;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}
