//! Launchboard - Launch Records Dashboard
//!
//! Reads a static CSV of launch records and renders a site selector, an
//! outcome pie chart and a payload-vs-outcome scatter chart in a reactive UI.

mod charts;
mod data;
mod gui;

use anyhow::Context;
use data::{LaunchData, DEFAULT_DATA_PATH};
use eframe::egui;
use gui::LaunchBoardApp;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A load failure is fatal: the dashboard cannot start without its dataset.
    let data = LaunchData::load(DEFAULT_DATA_PATH)
        .with_context(|| format!("failed to load {DEFAULT_DATA_PATH}"))?;
    let csv_path = PathBuf::from(DEFAULT_DATA_PATH);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Launch Records Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(LaunchBoardApp::new(cc, data, csv_path)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
