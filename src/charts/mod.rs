//! Charts module - chart data and rendering

mod export;
mod plotter;

pub use export::DashboardExporter;
pub use plotter::{
    build_pie_chart, build_scatter_chart, ChartPlotter, PieChartData, PieSlice, ScatterChartData,
    ScatterSeries, FAILURE_COLOR, PALETTE, SUCCESS_COLOR,
};
