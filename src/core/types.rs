use serde::{Deserialize, Serialize};

/// Drawing surface size in CSS (logical) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Surface metrics reported by the host on construction and on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
}

impl SurfaceMetrics {
    #[must_use]
    pub fn new(viewport: Viewport, device_pixel_ratio: f64) -> Self {
        Self {
            viewport,
            device_pixel_ratio: normalize_device_pixel_ratio(device_pixel_ratio),
        }
    }

    /// Backing-store size in device pixels: `round(css * dpr)` per axis.
    #[must_use]
    pub fn backing_store_size(self) -> (u32, u32) {
        let to_device = |css: f64| {
            let px = (css * self.device_pixel_ratio).round();
            if px.is_finite() && px > 0.0 {
                px.min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        };
        (
            to_device(self.viewport.width),
            to_device(self.viewport.height),
        )
    }
}

/// Missing or nonsensical ratios behave as `1`.
#[must_use]
pub fn normalize_device_pixel_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Fixed pixel insets around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(48.0, 20.0, 20.0, 48.0)
    }
}

/// Plotting rectangle left after applying [`Padding`] to a [`Viewport`].
///
/// Width and height may be negative on surfaces smaller than the padding;
/// consumers keep computing with them rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, padding: Padding) -> Self {
        Self {
            left: padding.left,
            top: padding.top,
            width: viewport.width - padding.left - padding.right,
            height: viewport.height - padding.top - padding.bottom,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
