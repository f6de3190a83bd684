use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{LabelFormat, Padding};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Caller-facing bar chart options. Every key is optional; unknown keys are
/// ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarChartOptions {
    pub bar_color: Option<String>,
    pub fill_color: Option<String>,
    pub hover_color: Option<String>,
    pub grid_color: Option<String>,
    pub bg: Option<String>,
    pub padding: Option<PaddingOptions>,
    pub highlight_on_hover: Option<bool>,
    pub label_format: Option<LabelFormat>,
}

/// Partial padding override; missing sides keep their default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingOptions {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
}

impl PaddingOptions {
    #[must_use]
    pub fn resolve(self, defaults: Padding) -> Padding {
        let side = |value: Option<f64>, fallback: f64| value.filter(|v| v.is_finite()).unwrap_or(fallback);
        Padding {
            left: side(self.left, defaults.left),
            right: side(self.right, defaults.right),
            top: side(self.top, defaults.top),
            bottom: side(self.bottom, defaults.bottom),
        }
    }
}

impl From<Padding> for PaddingOptions {
    fn from(padding: Padding) -> Self {
        Self {
            left: Some(padding.left),
            right: Some(padding.right),
            top: Some(padding.top),
            bottom: Some(padding.bottom),
        }
    }
}

/// Fully resolved bar chart configuration, immutable for a chart's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarChartConfig {
    pub bar_color: Color,
    pub fill_color: Color,
    pub hover_color: Color,
    pub grid_color: Color,
    pub background: Color,
    pub padding: Padding,
    pub highlight_on_hover: bool,
    pub label_format: LabelFormat,
    pub value_axis_text_color: Color,
    pub item_axis_text_color: Color,
    pub bar_border_color: Color,
    pub bubble_color: Color,
    pub bubble_text_color: Color,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            bar_color: Color::from_rgb8(0x1e, 0x40, 0xaf, 1.0),
            fill_color: Color::from_rgb8(59, 130, 246, 0.12),
            hover_color: Color::from_rgb8(0x1e, 0x3a, 0x8a, 1.0),
            grid_color: Color::from_rgb8(0xee, 0xf6, 0xff, 1.0),
            background: Color::WHITE,
            padding: Padding::default(),
            highlight_on_hover: true,
            label_format: LabelFormat::DayMonth,
            value_axis_text_color: Color::from_rgb8(0x6b, 0x72, 0x80, 1.0),
            item_axis_text_color: Color::from_rgb8(0x47, 0x55, 0x69, 1.0),
            bar_border_color: Color::rgba(0.0, 0.0, 0.0, 0.06),
            bubble_color: Color::from_rgb8(15, 23, 42, 0.95),
            bubble_text_color: Color::WHITE,
        }
    }
}

impl BarChartOptions {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse bar options: {e}")))
    }

    /// Layers these overrides on top of `defaults`.
    ///
    /// Unparsable colors are logged and replaced by the default for that key.
    #[must_use]
    pub fn resolve(&self, defaults: &BarChartConfig) -> BarChartConfig {
        BarChartConfig {
            bar_color: resolve_color(self.bar_color.as_deref(), "barColor", defaults.bar_color),
            fill_color: resolve_color(self.fill_color.as_deref(), "fillColor", defaults.fill_color),
            hover_color: resolve_color(
                self.hover_color.as_deref(),
                "hoverColor",
                defaults.hover_color,
            ),
            grid_color: resolve_color(self.grid_color.as_deref(), "gridColor", defaults.grid_color),
            background: resolve_color(self.bg.as_deref(), "bg", defaults.background),
            padding: self
                .padding
                .map_or(defaults.padding, |padding| padding.resolve(defaults.padding)),
            highlight_on_hover: self
                .highlight_on_hover
                .unwrap_or(defaults.highlight_on_hover),
            label_format: self.label_format.unwrap_or(defaults.label_format),
            ..*defaults
        }
    }
}

/// Caller-facing pie chart options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PieChartOptions {
    pub colors: Option<Vec<String>>,
    pub bg: Option<String>,
    pub text_color: Option<String>,
    pub hover_color: Option<String>,
    pub highlight_on_hover: Option<bool>,
}

/// Fully resolved pie chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartConfig {
    /// Slice palette, cycled by item index. Never empty once resolved.
    pub colors: Vec<Color>,
    pub background: Color,
    pub text_color: Color,
    pub hover_color: Color,
    pub highlight_on_hover: bool,
    pub slice_border_color: Color,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::from_rgb8(0x1e, 0x40, 0xaf, 1.0),
                Color::from_rgb8(0x3b, 0x82, 0xf6, 1.0),
                Color::from_rgb8(0x7c, 0x3a, 0xed, 1.0),
                Color::from_rgb8(0xdb, 0x27, 0x77, 1.0),
                Color::from_rgb8(0xf5, 0x9e, 0x0b, 1.0),
            ],
            background: Color::WHITE,
            text_color: Color::from_rgb8(0x1f, 0x29, 0x37, 1.0),
            hover_color: Color::WHITE,
            highlight_on_hover: true,
            slice_border_color: Color::WHITE,
        }
    }
}

impl PieChartConfig {
    /// Palette color of item `index`.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::from_rgb8(0x1e, 0x40, 0xaf, 1.0);
        }
        self.colors[index % self.colors.len()]
    }
}

impl PieChartOptions {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse pie options: {e}")))
    }

    /// Layers these overrides on top of `defaults`.
    ///
    /// Invalid palette entries are dropped; an empty result keeps the
    /// default palette.
    #[must_use]
    pub fn resolve(&self, defaults: &PieChartConfig) -> PieChartConfig {
        let colors = self
            .colors
            .as_ref()
            .map(|colors| {
                colors
                    .iter()
                    .filter_map(|raw| match Color::parse_css(raw) {
                        Ok(color) => Some(color),
                        Err(err) => {
                            warn!(error = %err, "dropping palette entry");
                            None
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|colors| !colors.is_empty())
            .unwrap_or_else(|| defaults.colors.clone());

        PieChartConfig {
            colors,
            background: resolve_color(self.bg.as_deref(), "bg", defaults.background),
            text_color: resolve_color(self.text_color.as_deref(), "textColor", defaults.text_color),
            hover_color: resolve_color(
                self.hover_color.as_deref(),
                "hoverColor",
                defaults.hover_color,
            ),
            highlight_on_hover: self
                .highlight_on_hover
                .unwrap_or(defaults.highlight_on_hover),
            slice_border_color: defaults.slice_border_color,
        }
    }
}

fn resolve_color(raw: Option<&str>, key: &'static str, fallback: Color) -> Color {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return fallback;
    };
    match Color::parse_css(raw) {
        Ok(color) => color,
        Err(err) => {
            warn!(key, error = %err, "falling back to default color");
            fallback
        }
    }
}
