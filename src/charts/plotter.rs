//! Chart Plotter Module
//! Builds chart data from the filter engine and draws it with egui/egui_plot.

use crate::data::{
    filter_by_payload, filter_by_site, outcome_counts, success_counts_by_site, LaunchData,
    PayloadRange, SiteSelection,
};
use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Vec2};
use egui_plot::{Legend, Plot, PlotPoints, Points};

/// Color palette for categorical series (sites, booster versions).
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
pub const FAILURE_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// One pie slice: label, absolute value, fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

/// Output slot of the pie trigger.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieChartData {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChartData {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }
}

/// One scatter series: every surviving record of a booster version category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub category: String,
    pub color: Color32,
    /// [payload mass (kg), outcome class] per record.
    pub points: Vec<[f64; 2]>,
}

/// Output slot of the scatter trigger.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterChartData {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChartData {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}

/// Recompute the pie slot from the current site selection.
pub fn build_pie_chart(data: &LaunchData, selection: &SiteSelection) -> PieChartData {
    match selection {
        SiteSelection::All => {
            let slices = success_counts_by_site(data.records())
                .into_iter()
                .enumerate()
                .map(|(i, (site, successes))| PieSlice {
                    label: site,
                    value: f64::from(successes),
                    color: PALETTE[i % PALETTE.len()],
                })
                .collect();
            PieChartData {
                title: "Total Launch Success by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let (successes, failures) = outcome_counts(data.records(), site);
            PieChartData {
                title: format!("Launch Success vs Failure - {site}"),
                slices: vec![
                    PieSlice {
                        label: "Success".to_string(),
                        value: f64::from(successes),
                        color: SUCCESS_COLOR,
                    },
                    PieSlice {
                        label: "Failure".to_string(),
                        value: f64::from(failures),
                        color: FAILURE_COLOR,
                    },
                ],
            }
        }
    }
}

/// Recompute the scatter slot from the current site selection and payload range.
/// Site filter first, then payload filter; series grouped by booster category
/// in encounter order.
pub fn build_scatter_chart(
    data: &LaunchData,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChartData {
    let subset = filter_by_payload(filter_by_site(data.records(), selection), range);

    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in subset {
        let point = [record.payload_mass_kg, record.class()];
        match series
            .iter_mut()
            .find(|s| s.category == record.booster_category)
        {
            Some(s) => s.points.push(point),
            None => {
                let color = PALETTE[series.len() % PALETTE.len()];
                series.push(ScatterSeries {
                    category: record.booster_category.clone(),
                    color,
                    points: vec![point],
                });
            }
        }
    }

    ScatterChartData {
        title: format!(
            "Correlation between Payload and Success for {}",
            selection.label()
        ),
        series,
    }
}

/// Draws the two dashboard charts into egui.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw a pie chart with the painter. A zero-total pie degrades to a
    /// "No data" placeholder instead of failing.
    pub fn draw_pie_chart(ui: &mut egui::Ui, pie: &PieChartData, size: f32) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = size * 0.42;

        let total = pie.total();
        if total <= 0.0 {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "No data",
                FontId::proportional(16.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        // Start at 12 o'clock, sweep clockwise.
        let mut start_angle = -std::f32::consts::FRAC_PI_2;
        for slice in &pie.slices {
            let sweep = (slice.value / total) as f32 * std::f32::consts::TAU;
            if sweep <= 0.0 {
                continue;
            }
            Self::fill_sector(&painter, center, radius, start_angle, sweep, slice.color);

            // Percentage label at the slice midpoint, skipped for slivers.
            let fraction = slice.value / total;
            if fraction >= 0.04 {
                let mid = start_angle + sweep / 2.0;
                let label_pos = center + radius * 0.6 * Vec2::new(mid.cos(), mid.sin());
                painter.text(
                    label_pos,
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", fraction * 100.0),
                    FontId::proportional(12.0),
                    Color32::WHITE,
                );
            }
            start_angle += sweep;
        }

        painter.circle_stroke(
            center,
            radius,
            Stroke::new(1.0, ui.visuals().widgets.noninteractive.fg_stroke.color),
        );
    }

    /// Fill one circular sector as a fan of convex sub-wedges (the egui
    /// tessellator requires convex polygons, so sweeps are capped at 90°).
    fn fill_sector(
        painter: &egui::Painter,
        center: Pos2,
        radius: f32,
        start_angle: f32,
        sweep: f32,
        color: Color32,
    ) {
        let segments = (sweep / std::f32::consts::FRAC_PI_2).ceil().max(1.0) as usize;
        let segment_sweep = sweep / segments as f32;

        for segment in 0..segments {
            let from = start_angle + segment as f32 * segment_sweep;
            let steps = ((segment_sweep / std::f32::consts::TAU) * 96.0).ceil().max(2.0) as usize;

            let mut points = Vec::with_capacity(steps + 2);
            points.push(center);
            for i in 0..=steps {
                let angle = from + segment_sweep * i as f32 / steps as f32;
                points.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
            }
            painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        }
    }

    /// Draw the payload-vs-outcome scatter with egui_plot. An empty subset
    /// renders empty axes.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, scatter: &ScatterChartData, height: f32) {
        Plot::new("payload_scatter")
            .height(height)
            .legend(Legend::default())
            .x_axis_label("Payload Mass (kg)")
            .y_axis_label("class")
            .include_y(-0.2)
            .include_y(1.2)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for series in &scatter.series {
                    let points: PlotPoints = series.points.iter().copied().collect();
                    plot_ui.points(
                        Points::new(points)
                            .radius(4.0)
                            .color(series.color)
                            .name(&series.category),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LaunchRecord;

    fn record(site: &str, payload: f64, booster: &str, success: bool) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            success,
        }
    }

    fn dataset() -> LaunchData {
        LaunchData::from_records(vec![
            record("A", 1000.0, "v1.0", true),
            record("A", 2000.0, "FT", false),
            record("B", 3000.0, "FT", false),
            record("A", 4000.0, "v1.1", true),
            record("B", 5000.0, "v1.1", false),
            record("B", 6000.0, "FT", false),
        ])
    }

    #[test]
    fn all_sites_pie_has_one_slice_per_site() {
        let pie = build_pie_chart(&dataset(), &SiteSelection::All);
        assert_eq!(pie.title, "Total Launch Success by Site");
        let slices: Vec<(&str, f64)> = pie
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect();
        assert_eq!(slices, vec![("A", 2.0), ("B", 0.0)]);
    }

    #[test]
    fn single_site_pie_has_success_and_failure_slices() {
        let pie = build_pie_chart(&dataset(), &SiteSelection::Site("A".to_string()));
        assert_eq!(pie.title, "Launch Success vs Failure - A");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].label, "Success");
        assert_eq!(pie.slices[0].value, 2.0);
        assert_eq!(pie.slices[1].label, "Failure");
        assert_eq!(pie.slices[1].value, 1.0);
    }

    #[test]
    fn unknown_site_pie_is_zero_total_not_a_failure() {
        let pie = build_pie_chart(&dataset(), &SiteSelection::Site("nowhere".to_string()));
        assert_eq!(pie.total(), 0.0);
    }

    #[test]
    fn scatter_groups_by_booster_category() {
        let data = dataset();
        let (min, max) = data.payload_bounds();
        let scatter =
            build_scatter_chart(&data, &SiteSelection::All, PayloadRange::new(min, max));

        assert_eq!(
            scatter.title,
            "Correlation between Payload and Success for All Sites"
        );
        let categories: Vec<&str> = scatter.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["v1.0", "FT", "v1.1"]);
        assert_eq!(scatter.point_count(), data.records().len());
    }

    #[test]
    fn scatter_applies_site_then_payload_filter() {
        let scatter = build_scatter_chart(
            &dataset(),
            &SiteSelection::Site("B".to_string()),
            PayloadRange::new(3000.0, 5000.0),
        );
        assert_eq!(
            scatter.title,
            "Correlation between Payload and Success for B"
        );
        assert_eq!(scatter.point_count(), 2);
        for series in &scatter.series {
            for point in &series.points {
                assert!(point[0] >= 3000.0 && point[0] <= 5000.0);
                assert_eq!(point[1], 0.0);
            }
        }
    }

    #[test]
    fn narrowed_range_empties_scatter_but_not_pie() {
        let data = dataset();
        let empty_range = PayloadRange::new(9000.0, 10000.0);
        let scatter = build_scatter_chart(&data, &SiteSelection::All, empty_range);
        assert_eq!(scatter.point_count(), 0);

        // Pie ignores the payload range entirely.
        let pie = build_pie_chart(&data, &SiteSelection::All);
        assert_eq!(pie.total(), 2.0);
    }
}
