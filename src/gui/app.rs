//! Launchboard Main Application
//! Main window wiring the control panel inputs to the chart output slots.

use crate::charts::{build_pie_chart, build_scatter_chart, DashboardExporter};
use crate::data::LaunchData;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use std::path::PathBuf;

/// Main application window. The dataset is immutable after load; each input
/// change re-runs the affected pure computation and overwrites its output slot.
pub struct LaunchBoardApp {
    data: LaunchData,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl LaunchBoardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data: LaunchData, csv_path: PathBuf) -> Self {
        let control_panel = ControlPanel::new(&data, csv_path);
        let mut app = Self {
            data,
            control_panel,
            chart_viewer: ChartViewer::new(),
        };
        app.refresh_pie();
        app.refresh_scatter();
        app.control_panel
            .set_status(format!("Loaded {} records", app.data.records().len()));
        app
    }

    /// Pie trigger: depends on the site selection only.
    fn refresh_pie(&mut self) {
        self.chart_viewer
            .set_pie(build_pie_chart(&self.data, &self.control_panel.selected_site));
    }

    /// Scatter trigger: depends on the site selection and the payload range.
    fn refresh_scatter(&mut self) {
        let scatter = build_scatter_chart(
            &self.data,
            &self.control_panel.selected_site,
            self.control_panel.payload_range,
        );
        log::debug!("scatter recomputed: {} points", scatter.point_count());
        self.chart_viewer.set_scatter(scatter);
    }

    /// Reload the dataset from a user-chosen CSV. On failure the current
    /// dataset stays in place.
    fn handle_browse_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        else {
            return;
        };

        match LaunchData::load(&path) {
            Ok(data) => {
                self.data = data;
                self.control_panel.reset_for(&self.data);
                self.control_panel.set_csv_path(path);
                self.refresh_pie();
                self.refresh_scatter();
                self.control_panel
                    .set_status(format!("Loaded {} records", self.data.records().len()));
            }
            Err(e) => {
                log::warn!("reload failed: {e}");
                self.control_panel.set_status(format!("Error: {e}"));
            }
        }
    }

    /// Render the current output slots into a PNG.
    fn handle_export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("launch_dashboard.png")
            .save_file()
        else {
            return;
        };

        match DashboardExporter::export_png(&self.chart_viewer.pie, &self.chart_viewer.scatter, &path)
        {
            Ok(()) => {
                self.control_panel
                    .set_status(format!("Exported {}", path.display()));
            }
            Err(e) => {
                log::warn!("export failed: {e}");
                self.control_panel.set_status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for LaunchBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - inputs
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::SiteChanged => {
                            // Both charts depend on the site selection.
                            self.refresh_pie();
                            self.refresh_scatter();
                        }
                        ControlPanelAction::PayloadChanged => {
                            // The pie ignores the payload range.
                            self.refresh_scatter();
                        }
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - chart output slots
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
