use crate::core::Viewport;
use crate::core::types::normalize_device_pixel_ratio;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive, WedgePrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Coordinates are CSS pixels. Backends scale by `device_pixel_ratio` once
/// per pass, then paint the background followed by lines, wedges, rects and
/// texts, each list in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
    pub background: Color,
    pub lines: Vec<LinePrimitive>,
    pub wedges: Vec<WedgePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, device_pixel_ratio: f64, background: Color) -> Self {
        Self {
            viewport,
            device_pixel_ratio: normalize_device_pixel_ratio(device_pixel_ratio),
            background,
            lines: Vec::new(),
            wedges: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_wedge(mut self, wedge: WedgePrimitive) -> Self {
        self.wedges.push(wedge);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for wedge in &self.wedges {
            wedge.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// True when the frame paints nothing but its background.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.wedges.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.wedges.len() + self.rects.len() + self.texts.len()
    }
}
