//! Static Chart Export Module
//! Renders the current pie and scatter slots side by side into a PNG using
//! plotters. Reads the same chart data the live widgets read; no recomputation.

use crate::charts::{PieChartData, ScatterChartData};
use anyhow::{anyhow, Result};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;

pub const EXPORT_WIDTH: u32 = 1600;
pub const EXPORT_HEIGHT: u32 = 700;

/// Convert an egui color to a plotters color.
fn rgb(color: egui::Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

pub struct DashboardExporter;

impl DashboardExporter {
    /// Write both charts into one PNG at the given path.
    pub fn export_png(
        pie: &PieChartData,
        scatter: &ScatterChartData,
        path: &Path,
    ) -> Result<()> {
        let root =
            BitMapBackend::new(path, (EXPORT_WIDTH, EXPORT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("fill failed: {e}"))?;

        let (left, right) = root.split_horizontally((EXPORT_WIDTH / 2) as i32);
        Self::draw_pie(&left, pie)?;
        Self::draw_scatter(&right, scatter)?;

        root.present().map_err(|e| anyhow!("present failed: {e}"))?;
        log::info!("exported dashboard to {}", path.display());
        Ok(())
    }

    fn draw_pie<DB: DrawingBackend>(area: &DrawingArea<DB, plotters::coord::Shift>, pie: &PieChartData) -> Result<()> {
        let area = area
            .titled(&pie.title, ("sans-serif", 24))
            .map_err(|e| anyhow!("title failed: {e}"))?;

        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;

        if pie.total() <= 0.0 {
            area.draw(&Text::new(
                "No data",
                (center.0 - 30, center.1),
                ("sans-serif", 20),
            ))
            .map_err(|e| anyhow!("text failed: {e}"))?;
            return Ok(());
        }

        let sizes: Vec<f64> = pie.slices.iter().map(|slice| slice.value).collect();
        let colors: Vec<RGBColor> = pie.slices.iter().map(|slice| rgb(slice.color)).collect();
        let labels: Vec<String> = pie.slices.iter().map(|slice| slice.label.clone()).collect();

        let mut element = Pie::new(&center, &radius, &sizes, &colors, &labels);
        element.start_angle(-90.0);
        element.label_style(("sans-serif", 16).into_font());
        element.percentages(("sans-serif", 14).into_font());
        area.draw(&element)
            .map_err(|e| anyhow!("pie draw failed: {e}"))?;
        Ok(())
    }

    fn draw_scatter<DB: DrawingBackend>(
        area: &DrawingArea<DB, plotters::coord::Shift>,
        scatter: &ScatterChartData,
    ) -> Result<()> {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for series in &scatter.series {
            for point in &series.points {
                x_min = x_min.min(point[0]);
                x_max = x_max.max(point[0]);
            }
        }
        // Empty subsets still render valid axes.
        if !x_min.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
        }
        if x_min == x_max {
            x_max = x_min + 1.0;
        }
        let pad = (x_max - x_min) * 0.05;

        let mut chart = ChartBuilder::on(area)
            .caption(&scatter.title, ("sans-serif", 20))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(45)
            .build_cartesian_2d((x_min - pad)..(x_max + pad), -0.2f64..1.2f64)
            .map_err(|e| anyhow!("chart build failed: {e}"))?;

        chart
            .configure_mesh()
            .x_desc("Payload Mass (kg)")
            .y_desc("class")
            .draw()
            .map_err(|e| anyhow!("mesh failed: {e}"))?;

        for series in &scatter.series {
            let color = rgb(series.color);
            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .map(|point| Circle::new((point[0], point[1]), 5, color.filled())),
                )
                .map_err(|e| anyhow!("series draw failed: {e}"))?
                .label(series.category.clone())
                .legend(move |(x, y)| Circle::new((x, y), 5, color.filled()));
        }

        if !scatter.series.is_empty() {
            chart
                .configure_series_labels()
                .border_style(BLACK)
                .background_style(WHITE.mix(0.8))
                .draw()
                .map_err(|e| anyhow!("legend failed: {e}"))?;
        }
        Ok(())
    }
}
