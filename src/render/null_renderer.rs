use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content, so invalid geometry is caught without
/// a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_wedge_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub backing_store: Option<(u32, u32)>,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_line_count = frame.lines.len();
        self.last_wedge_count = frame.wedges.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn resize_backing_store(&mut self, width_px: u32, height_px: u32) -> ChartResult<()> {
        self.backing_store = Some((width_px, height_px));
        Ok(())
    }
}
