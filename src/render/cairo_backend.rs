use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign,
    WedgePrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub wedges_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can also draw into a Cairo context owned by someone else
/// (a GTK `DrawingArea` draw callback, for instance).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Offscreen rendering goes to an image surface sized in device pixels;
/// `CairoContextRenderer` draws onto an external context instead.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width_px: i32, height_px: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width_px, height_px)?,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let mut file = File::create(path).map_err(|err| {
            ChartError::Backend(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }
}

/// Paints `frame` onto `context`, scaling once by the frame's device pixel
/// ratio. The context state is restored afterwards.
pub fn paint_frame(context: &Context, frame: &RenderFrame) -> ChartResult<CairoRenderStats> {
    frame.validate()?;

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.scale(frame.device_pixel_ratio, frame.device_pixel_ratio);

    apply_color(context, frame.background);
    context.rectangle(0.0, 0.0, frame.viewport.width, frame.viewport.height);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill background", err))?;

    let mut stats = CairoRenderStats::default();

    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for wedge in &frame.wedges {
        draw_wedge(context, *wedge)?;
        stats.wedges_drawn += 1;
    }

    for rect in &frame.rects {
        draw_rect(context, *rect)?;
        stats.rects_drawn += 1;
    }

    for text in &frame.texts {
        draw_text(context, text);
        stats.texts_drawn += 1;
    }

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))?;

    debug!(
        lines = stats.lines_drawn,
        wedges = stats.wedges_drawn,
        rects = stats.rects_drawn,
        texts = stats.texts_drawn,
        "cairo pass complete"
    );
    Ok(stats)
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.last_stats = paint_frame(&context, frame)?;
        Ok(())
    }

    fn resize_backing_store(&mut self, width_px: u32, height_px: u32) -> ChartResult<()> {
        let to_i32 = |px: u32| i32::try_from(px.max(1)).unwrap_or(i32::MAX);
        if self.surface.width() == to_i32(width_px) && self.surface.height() == to_i32(height_px) {
            return Ok(());
        }
        self.surface = create_surface(to_i32(width_px), to_i32(height_px))?;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.last_stats = paint_frame(context, frame)?;
        Ok(())
    }
}

fn create_surface(width_px: i32, height_px: i32) -> ChartResult<ImageSurface> {
    if width_px <= 0 || height_px <= 0 {
        return Err(ChartError::InvalidViewport {
            width: f64::from(width_px),
            height: f64::from(height_px),
        });
    }
    ImageSurface::create(Format::ARgb32, width_px, height_px)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_wedge(context: &Context, wedge: WedgePrimitive) -> ChartResult<()> {
    context.new_path();
    context.move_to(wedge.center_x, wedge.center_y);
    context.arc(
        wedge.center_x,
        wedge.center_y,
        wedge.radius,
        wedge.start_angle,
        wedge.end_angle,
    );
    context.close_path();
    apply_color(context, wedge.fill_color);
    if wedge.stroke_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill wedge", err))?;
        apply_color(context, wedge.stroke_color);
        context.set_line_width(wedge.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke wedge", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill wedge", err))
    }
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    context.new_path();
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string("Sans");
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    if text.bold {
        font_description.set_weight(pango::Weight::Bold);
    }
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };
    let y = match text.v_align {
        TextVAlign::Top => text.y,
        TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
        TextVAlign::Baseline => text.y - f64::from(layout.baseline()) / f64::from(pango::SCALE),
    };

    apply_color(context, text.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
