use crate::core::{Series, SurfaceMetrics, Viewport};
use crate::render::{Color, RenderFrame};

use super::bar_chart::BarChart;
use super::options::{BarChartOptions, PieChartOptions};
use super::pie_chart::PieChart;

/// Chart kinds a `ChartEngine` can host.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    Pie(PieChart),
}

impl Chart {
    #[must_use]
    pub fn bar(series: Series, options: &BarChartOptions) -> Self {
        Self::Bar(BarChart::with_options(series, options))
    }

    #[must_use]
    pub fn pie(series: Series, options: &PieChartOptions) -> Self {
        Self::Pie(PieChart::with_options(series, options))
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::Pie(_) => "pie",
        }
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        match self {
            Self::Bar(chart) => chart.series(),
            Self::Pie(chart) => chart.series(),
        }
    }

    #[must_use]
    pub fn highlight_on_hover(&self) -> bool {
        match self {
            Self::Bar(chart) => chart.config().highlight_on_hover,
            Self::Pie(chart) => chart.config().highlight_on_hover,
        }
    }

    #[must_use]
    pub fn background(&self) -> Color {
        match self {
            Self::Bar(chart) => chart.config().background,
            Self::Pie(chart) => chart.config().background,
        }
    }

    /// Item under a surface-local point. Bars only look at `x`.
    #[must_use]
    pub fn hit_test(&self, viewport: Viewport, x: f64, y: f64) -> Option<usize> {
        match self {
            Self::Bar(chart) => chart.hit_test(viewport, x),
            Self::Pie(chart) => chart.hit_test(viewport, x, y),
        }
    }

    #[must_use]
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        match self {
            Self::Bar(chart) => chart.tooltip_text(index),
            Self::Pie(chart) => chart.tooltip_text(index),
        }
    }

    #[must_use]
    pub fn build_render_frame(&self, surface: SurfaceMetrics, hovered: Option<usize>) -> RenderFrame {
        match self {
            Self::Bar(chart) => chart.build_render_frame(surface, hovered),
            Self::Pie(chart) => chart.build_render_frame(surface, hovered),
        }
    }
}

impl From<BarChart> for Chart {
    fn from(chart: BarChart) -> Self {
        Self::Bar(chart)
    }
}

impl From<PieChart> for Chart {
    fn from(chart: PieChart) -> Self {
        Self::Pie(chart)
    }
}
