use serde::{Deserialize, Serialize};

use crate::core::primitives::round_half_up;
use crate::core::types::PlotArea;

/// Minimum absolute padding added on both sides of the value span.
pub const MIN_VALUE_PADDING: f64 = 10.0;
/// Relative padding applied to the value span.
pub const VALUE_PADDING_RATIO: f64 = 0.12;

/// Padded value domain of a bar chart's vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Derives the padded range from the finite values of a series.
    ///
    /// Returns `None` when no value is finite. Padding is
    /// `max(10, round(span * 0.12))`; the lower bound never drops below zero.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (vmin, vmax) = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                None => Some((value, value)),
                Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            })?;

        let padding = MIN_VALUE_PADDING.max(round_half_up((vmax - vmin) * VALUE_PADDING_RATIO));
        Some(Self {
            min: (vmin - padding).max(0.0),
            max: vmax + padding,
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Maps values onto the inverted vertical pixel axis of a plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    range: ValueRange,
    plot: PlotArea,
}

impl ValueScale {
    #[must_use]
    pub fn new(range: ValueRange, plot: PlotArea) -> Self {
        Self { range, plot }
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        self.range
    }

    /// `range.max` maps to the plot top, `range.min` to the plot bottom.
    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.range.min) / self.range.span();
        self.plot.top + (1.0 - normalized) * self.plot.height
    }
}

/// Sum used as the pie's angular denominator.
///
/// Non-finite values count as zero.
#[must_use]
pub fn pie_total(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .map(|value| if value.is_finite() { value } else { 0.0 })
        .sum()
}
