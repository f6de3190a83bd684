use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::scale::pie_total;
use crate::core::series::Series;
use crate::core::types::Viewport;

/// Angle of the first slice's leading edge (12 o'clock).
pub const PIE_START_ANGLE: f64 = -FRAC_PI_2;
pub const PIE_CENTER_X_RATIO: f64 = 0.35;
pub const PIE_CENTER_Y_RATIO: f64 = 0.40;
pub const PIE_RADIUS_RATIO: f64 = 0.25;

/// Disc position for a surface; independent of the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieDisc {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl PieDisc {
    /// The disc sits left of center to leave room for the legend.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            center_x: viewport.width * PIE_CENTER_X_RATIO,
            center_y: viewport.height * PIE_CENTER_Y_RATIO,
            radius: viewport.width.min(viewport.height) * PIE_RADIUS_RATIO,
        }
    }

    #[must_use]
    pub fn distance_to(self, x: f64, y: f64) -> f64 {
        (x - self.center_x).hypot(y - self.center_y)
    }

    /// Clockwise angle of `(x, y)` measured from 12 o'clock, in `[0, 2π)`.
    #[must_use]
    pub fn sweep_angle_of(self, x: f64, y: f64) -> f64 {
        let angle = (y - self.center_y).atan2(x - self.center_x);
        let sweep = (angle - PIE_START_ANGLE).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        if sweep >= TAU { 0.0 } else { sweep }
    }

    #[must_use]
    pub fn point_at(self, angle: f64, distance: f64) -> (f64, f64) {
        (
            self.center_x + distance * angle.cos(),
            self.center_y + distance * angle.sin(),
        )
    }
}

/// Angular span of one item. Angles are absolute canvas angles
/// (`start_angle` begins at `-π/2`), sweeps are relative to 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub index: usize,
    pub value: f64,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    #[must_use]
    pub fn size(self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn mid_angle(self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    #[must_use]
    pub fn start_sweep(self) -> f64 {
        self.start_angle - PIE_START_ANGLE
    }

    #[must_use]
    pub fn end_sweep(self) -> f64 {
        self.end_angle - PIE_START_ANGLE
    }

    /// Percentage of the total, as shown in legends and tooltips.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.fraction * 100.0
    }
}

/// Complete pie geometry for one surface size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub disc: PieDisc,
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

impl PieLayout {
    #[must_use]
    pub fn slice(&self, index: usize) -> Option<PieSlice> {
        self.slices.get(index).copied()
    }
}

/// Value a slice is sized by: non-finite values count as zero.
#[must_use]
pub fn slice_value(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Lays slices out clockwise from 12 o'clock in series order.
///
/// Returns `None` when the total is not positive, which covers empty,
/// all-zero and all-negative series.
#[must_use]
pub fn layout_pie(series: &Series, viewport: Viewport) -> Option<PieLayout> {
    let total = pie_total(series.values());
    if total.is_nan() || total <= 0.0 {
        return None;
    }

    let mut angle = PIE_START_ANGLE;
    let slices = series
        .values()
        .map(slice_value)
        .enumerate()
        .map(|(index, value)| {
            let fraction = value / total;
            let start_angle = angle;
            angle += fraction * TAU;
            PieSlice {
                index,
                value,
                fraction,
                start_angle,
                end_angle: angle,
            }
        })
        .collect();

    Some(PieLayout {
        disc: PieDisc::for_viewport(viewport),
        total,
        slices,
    })
}
