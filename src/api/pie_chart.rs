use tracing::trace;

use crate::core::pie_layout::slice_value;
use crate::core::primitives::format_value;
use crate::core::{
    PieLayout, PieSlice, Series, SurfaceMetrics, Viewport, hit_test_pie, layout_pie, pie_total,
};
use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, WedgePrimitive};

use super::bar_chart::highlight_color;
use super::options::{PieChartConfig, PieChartOptions};

const SLICE_BORDER_WIDTH: f64 = 2.0;
const LEGEND_GAP: f64 = 30.0;
const LEGEND_ROW_HEIGHT: f64 = 22.0;
const LEGEND_HALF_ROW: f64 = 10.0;
const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_TEXT_DX: f64 = 18.0;
const LEGEND_TEXT_DY: f64 = 10.0;
const LEGEND_FONT_PX: f64 = 12.0;

/// Pie chart with a vertical legend to the right of the disc.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    series: Series,
    config: PieChartConfig,
}

impl PieChart {
    #[must_use]
    pub fn new(series: Series, config: PieChartConfig) -> Self {
        Self { series, config }
    }

    #[must_use]
    pub fn with_options(series: Series, options: &PieChartOptions) -> Self {
        Self::new(series, options.resolve(&PieChartConfig::default()))
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self, viewport: Viewport) -> Option<PieLayout> {
        layout_pie(&self.series, viewport)
    }

    #[must_use]
    pub fn hit_test(&self, viewport: Viewport, x: f64, y: f64) -> Option<usize> {
        hit_test_pie(&self.series, viewport, x, y)
    }

    /// Tooltip content: `<label>: <value> (<pct>%)`.
    ///
    /// `None` when the series has no positive total.
    #[must_use]
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        let point = self.series.get(index)?;
        let total = pie_total(self.series.values());
        if total.is_nan() || total <= 0.0 {
            return None;
        }
        let value = slice_value(point.value);
        Some(format!(
            "{}: {} ({:.1}%)",
            point.label,
            format_value(value),
            value / total * 100.0
        ))
    }

    /// Paints background, slices and legend. Non-positive totals paint the
    /// background only.
    #[must_use]
    pub fn build_render_frame(&self, surface: SurfaceMetrics, hovered: Option<usize>) -> RenderFrame {
        let viewport = surface.viewport;
        let mut frame = RenderFrame::new(viewport, surface.device_pixel_ratio, self.config.background);
        let Some(layout) = self.layout(viewport) else {
            trace!(count = self.series.len(), "pie total is not positive, skipping slices");
            return frame;
        };

        for slice in &layout.slices {
            if let Some(wedge) = self.wedge(&layout, *slice) {
                frame.wedges.push(wedge);
            }
        }

        let hovered_wedge = hovered
            .filter(|_| self.config.highlight_on_hover)
            .and_then(|index| layout.slice(index))
            .and_then(|slice| self.wedge(&layout, slice));
        if let Some(wedge) = hovered_wedge {
            frame.wedges.push(WedgePrimitive {
                fill_color: highlight_color(self.config.hover_color),
                stroke_width: 0.0,
                ..wedge
            });
        }

        self.push_legend(&mut frame, &layout);
        frame
    }

    fn wedge(&self, layout: &PieLayout, slice: PieSlice) -> Option<WedgePrimitive> {
        let size = slice.size();
        if size.is_nan() || size <= 0.0 {
            return None;
        }
        let wedge = WedgePrimitive {
            center_x: layout.disc.center_x,
            center_y: layout.disc.center_y,
            radius: layout.disc.radius,
            start_angle: slice.start_angle,
            end_angle: slice.end_angle,
            fill_color: self.config.color_for(slice.index),
            stroke_width: SLICE_BORDER_WIDTH,
            stroke_color: self.config.slice_border_color,
        };
        wedge.is_finite().then_some(wedge)
    }

    fn push_legend(&self, frame: &mut RenderFrame, layout: &PieLayout) {
        let legend_x = layout.disc.center_x + layout.disc.radius + LEGEND_GAP;
        let legend_top = layout.disc.center_y - layout.slices.len() as f64 * LEGEND_HALF_ROW;

        for (row, slice) in layout.slices.iter().enumerate() {
            let Some(point) = self.series.get(slice.index) else {
                continue;
            };
            let y = legend_top + row as f64 * LEGEND_ROW_HEIGHT;
            frame.rects.push(RectPrimitive::new(
                legend_x,
                y,
                LEGEND_SWATCH,
                LEGEND_SWATCH,
                self.config.color_for(slice.index),
            ));
            frame.texts.push(TextPrimitive::new(
                format!(
                    "{} {} ({:.1}%)",
                    point.label,
                    format_value(slice.value),
                    slice.percent()
                ),
                legend_x + LEGEND_TEXT_DX,
                y + LEGEND_TEXT_DY,
                LEGEND_FONT_PX,
                self.config.text_color,
                TextHAlign::Left,
            ));
        }
    }
}
