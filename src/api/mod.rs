mod bar_chart;
mod chart;
mod engine;
mod options;
mod pie_chart;

pub use bar_chart::{BAR_OPACITY, BarChart, HIGHLIGHT_OPACITY, highlight_color};
pub use chart::Chart;
pub use engine::ChartEngine;
pub use options::{
    BarChartConfig, BarChartOptions, PaddingOptions, PieChartConfig, PieChartOptions,
};
pub use pie_chart::PieChart;
