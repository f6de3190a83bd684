use tracing::trace;

use crate::core::primitives::format_value;
use crate::core::{BarGeometry, BarLayout, Series, SurfaceMetrics, Viewport, hit_test_bars, layout_bars};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::options::{BarChartConfig, BarChartOptions};

/// Opacity of the color wash drawn over the hovered item.
pub const HIGHLIGHT_OPACITY: f64 = 0.14;
/// Opacity of the solid bar color over its light fill.
pub const BAR_OPACITY: f64 = 0.95;

const VALUE_AXIS_FONT_PX: f64 = 12.0;
const ITEM_AXIS_FONT_PX: f64 = 11.0;
const VALUE_AXIS_TEXT_X: f64 = 8.0;
const VALUE_AXIS_TEXT_DY: f64 = 4.0;
const ITEM_AXIS_TEXT_DY: f64 = 8.0;
const GRID_LINE_OFFSET: f64 = 0.5;

const BUBBLE_WIDTH: f64 = 80.0;
const BUBBLE_HEIGHT: f64 = 30.0;
const BUBBLE_RADIUS: f64 = 6.0;
const BUBBLE_LIFT: f64 = 10.0;
const BUBBLE_FONT_PX: f64 = 13.0;

/// Vertical bar chart over one immutable series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    series: Series,
    config: BarChartConfig,
}

impl BarChart {
    #[must_use]
    pub fn new(series: Series, config: BarChartConfig) -> Self {
        Self { series, config }
    }

    #[must_use]
    pub fn with_options(series: Series, options: &BarChartOptions) -> Self {
        Self::new(series, options.resolve(&BarChartConfig::default()))
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self, viewport: Viewport) -> Option<BarLayout> {
        layout_bars(
            &self.series,
            viewport,
            self.config.padding,
            self.config.label_format,
        )
    }

    #[must_use]
    pub fn hit_test(&self, viewport: Viewport, x: f64) -> Option<usize> {
        hit_test_bars(&self.series, viewport, self.config.padding, x)
    }

    /// Tooltip content: `<label> — <value>`.
    #[must_use]
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        let point = self.series.get(index)?;
        Some(format!("{} — {}", point.label, format_value(point.value)))
    }

    /// Paints the whole chart, with the highlight overlay for `hovered` when
    /// hover highlighting is enabled.
    #[must_use]
    pub fn build_render_frame(&self, surface: SurfaceMetrics, hovered: Option<usize>) -> RenderFrame {
        let viewport = surface.viewport;
        let mut frame = RenderFrame::new(viewport, surface.device_pixel_ratio, self.config.background);
        let Some(layout) = self.layout(viewport) else {
            trace!(count = self.series.len(), "bar chart has no drawable values");
            return frame;
        };

        self.push_grid(&mut frame, &layout);
        self.push_bars(&mut frame, &layout);
        self.push_item_labels(&mut frame, &layout);

        let hovered_bar = hovered
            .filter(|_| self.config.highlight_on_hover)
            .and_then(|index| layout.bar(index))
            .filter(|bar| bar.is_finite());
        if let Some(bar) = hovered_bar {
            self.push_highlight(&mut frame, bar);
        }

        frame
    }

    fn push_grid(&self, frame: &mut RenderFrame, layout: &BarLayout) {
        let plot = layout.plot;
        for line in &layout.grid {
            let y = line.y + GRID_LINE_OFFSET;
            let primitive = LinePrimitive::new(plot.left, y, plot.right(), y, 1.0, self.config.grid_color);
            if primitive.is_finite() {
                frame.lines.push(primitive);
            }
            if line.y.is_finite() && line.value.is_finite() {
                frame.texts.push(TextPrimitive::new(
                    format_value(line.value),
                    VALUE_AXIS_TEXT_X,
                    line.y + VALUE_AXIS_TEXT_DY,
                    VALUE_AXIS_FONT_PX,
                    self.config.value_axis_text_color,
                    TextHAlign::Left,
                ));
            }
        }
    }

    fn push_bars(&self, frame: &mut RenderFrame, layout: &BarLayout) {
        let mut skipped = 0usize;
        for bar in &layout.bars {
            if !bar.is_finite() {
                skipped += 1;
                continue;
            }
            frame.rects.push(RectPrimitive::new(
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                self.config.fill_color,
            ));
            frame.rects.push(
                RectPrimitive::new(
                    bar.x,
                    bar.y,
                    bar.width,
                    bar.height,
                    self.config.bar_color.faded(BAR_OPACITY),
                )
                .with_border(1.0, self.config.bar_border_color),
            );
        }
        if skipped > 0 {
            trace!(skipped, "skipped bars with non-finite geometry");
        }
    }

    fn push_item_labels(&self, frame: &mut RenderFrame, layout: &BarLayout) {
        let y = layout.plot.bottom() + ITEM_AXIS_TEXT_DY;
        for label in &layout.labels {
            if label.text.is_empty() || !label.x.is_finite() || !y.is_finite() {
                continue;
            }
            frame.texts.push(
                TextPrimitive::new(
                    label.text.clone(),
                    label.x,
                    y,
                    ITEM_AXIS_FONT_PX,
                    self.config.item_axis_text_color,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Top),
            );
        }
    }

    fn push_highlight(&self, frame: &mut RenderFrame, bar: BarGeometry) {
        frame.rects.push(RectPrimitive::new(
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            highlight_color(self.config.hover_color),
        ));

        let Some(point) = self.series.get(bar.index) else {
            return;
        };
        let center_x = bar.x + bar.width / 2.0;
        let center_y = bar.y - BUBBLE_LIFT;
        frame.rects.push(
            RectPrimitive::new(
                center_x - BUBBLE_WIDTH / 2.0,
                center_y - BUBBLE_HEIGHT / 2.0,
                BUBBLE_WIDTH,
                BUBBLE_HEIGHT,
                self.config.bubble_color,
            )
            .with_corner_radius(BUBBLE_RADIUS),
        );
        frame.texts.push(
            TextPrimitive::new(
                format_value(point.value),
                center_x,
                center_y,
                BUBBLE_FONT_PX,
                self.config.bubble_text_color,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Middle)
            .bold(),
        );
    }
}

/// Highlight wash color for a hover color.
#[must_use]
pub fn highlight_color(hover_color: Color) -> Color {
    hover_color.faded(HIGHLIGHT_OPACITY)
}
