use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::primitives::round_half_up;
use crate::core::scale::{ValueRange, ValueScale};
use crate::core::series::Series;
use crate::core::types::{Padding, PlotArea, Viewport};

/// Share of a slot occupied by its bar.
pub const BAR_WIDTH_RATIO: f64 = 0.6;
/// Bars are never drawn narrower than this.
pub const MIN_BAR_WIDTH_PX: f64 = 6.0;
/// Bars are never drawn shorter than this.
pub const MIN_BAR_HEIGHT_PX: f64 = 0.5;
/// Assumed horizontal room needed by one axis label.
pub const MIN_LABEL_SPACING_PX: f64 = 50.0;
/// Number of equal divisions between the top and bottom grid lines.
pub const GRID_DIVISIONS: usize = 4;

/// How item labels are shortened for the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelFormat {
    /// Keep the first two dot-separated tokens (`DD.MM.YYYY` -> `DD.MM`).
    #[default]
    DayMonth,
    /// Use labels verbatim.
    Full,
}

impl LabelFormat {
    #[must_use]
    pub fn apply(self, label: &str) -> String {
        match self {
            Self::Full => label.to_owned(),
            Self::DayMonth => {
                let mut tokens = label.split('.');
                match (tokens.next(), tokens.next()) {
                    (Some(day), Some(month)) => format!("{day}.{month}"),
                    _ => label.to_owned(),
                }
            }
        }
    }
}

/// Horizontal slot arithmetic shared by painting and hit-testing.
///
/// Depends only on item count, surface width and padding, so hit-testing
/// never needs values or a repaint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlots {
    pub plot_left: f64,
    pub plot_width: f64,
    pub count: usize,
    pub slot_width: f64,
    pub bar_width: f64,
}

impl BarSlots {
    /// Returns `None` for an empty series.
    #[must_use]
    pub fn new(count: usize, viewport: Viewport, padding: Padding) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let plot = PlotArea::from_viewport(viewport, padding);
        let slot_width = plot.width / count as f64;
        let bar_width = MIN_BAR_WIDTH_PX.max((slot_width * BAR_WIDTH_RATIO).floor());
        Some(Self {
            plot_left: plot.left,
            plot_width: plot.width,
            count,
            slot_width,
            bar_width,
        })
    }

    /// Left edge of bar `index`: slot start plus half the leftover gutter.
    #[must_use]
    pub fn bar_left(self, index: usize) -> f64 {
        self.plot_left + index as f64 * self.slot_width + (self.slot_width - self.bar_width) / 2.0
    }

    #[must_use]
    pub fn bar_center_x(self, index: usize) -> f64 {
        self.bar_left(index) + self.bar_width / 2.0
    }

    /// First bar whose closed horizontal span `[left, left + width]` holds `x`.
    #[must_use]
    pub fn index_at(self, x: f64) -> Option<usize> {
        (0..self.count).find(|&index| {
            let left = self.bar_left(index);
            x >= left && x <= left + self.bar_width
        })
    }
}

/// Pixel rectangle of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Horizontal grid line with its rounded axis value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub y: f64,
    pub value: f64,
}

/// Axis label for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub index: usize,
    pub x: f64,
    pub text: String,
}

/// Complete bar chart geometry for one surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub plot: PlotArea,
    pub slots: BarSlots,
    pub scale: ValueScale,
    pub bars: Vec<BarGeometry>,
    pub grid: SmallVec<[GridLine; GRID_DIVISIONS + 1]>,
    pub labels: Vec<TickLabel>,
}

impl BarLayout {
    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.scale.range()
    }

    #[must_use]
    pub fn bar(&self, index: usize) -> Option<BarGeometry> {
        self.bars.get(index).copied()
    }
}

/// Computes bar geometry, grid and thinned labels.
///
/// Returns `None` for empty or all-invalid series. Items with non-finite
/// values still occupy their slot but produce non-finite geometry.
#[must_use]
pub fn layout_bars(
    series: &Series,
    viewport: Viewport,
    padding: Padding,
    label_format: LabelFormat,
) -> Option<BarLayout> {
    let slots = BarSlots::new(series.len(), viewport, padding)?;
    let range = ValueRange::from_values(series.values())?;
    let plot = PlotArea::from_viewport(viewport, padding);
    let scale = ValueScale::new(range, plot);
    let bottom = plot.bottom();

    let bars = series
        .values()
        .enumerate()
        .map(|(index, value)| {
            let top = scale.value_to_pixel(value);
            BarGeometry {
                index,
                x: slots.bar_left(index),
                y: top,
                width: slots.bar_width,
                height: MIN_BAR_HEIGHT_PX.max(bottom - top),
            }
        })
        .collect();

    let grid = (0..=GRID_DIVISIONS)
        .map(|step| {
            let ratio = step as f64 / GRID_DIVISIONS as f64;
            GridLine {
                y: plot.top + ratio * plot.height,
                value: round_half_up(range.max - ratio * range.span()),
            }
        })
        .collect();

    let labels = thin_label_indices(series.len(), plot.width)
        .into_iter()
        .filter_map(|index| {
            let point = series.get(index)?;
            Some(TickLabel {
                index,
                x: slots.bar_center_x(index),
                text: label_format.apply(&point.label),
            })
        })
        .collect();

    Some(BarLayout {
        plot,
        slots,
        scale,
        bars,
        grid,
        labels,
    })
}

/// Label stride for `count` items across `plot_width` pixels.
#[must_use]
pub fn label_step(count: usize, plot_width: f64) -> usize {
    let fitting = (plot_width / MIN_LABEL_SPACING_PX).floor();
    let max_labels = if fitting.is_finite() && fitting >= 1.0 {
        fitting as usize
    } else {
        1
    };
    count.div_ceil(max_labels).max(1)
}

/// Indices that receive an axis label: every `step`-th item plus the last one.
#[must_use]
pub fn thin_label_indices(count: usize, plot_width: f64) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let step = label_step(count, plot_width);
    (0..count)
        .filter(|&index| index % step == 0 || index == count - 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_month_format_drops_year() {
        assert_eq!(LabelFormat::DayMonth.apply("03.01.2024"), "03.01");
        assert_eq!(LabelFormat::DayMonth.apply("Q1"), "Q1");
        assert_eq!(LabelFormat::Full.apply("03.01.2024"), "03.01.2024");
    }

    #[test]
    fn narrow_slots_keep_minimum_bar_width() {
        let slots = BarSlots::new(100, Viewport::new(300.0, 150.0), Padding::default())
            .expect("non-empty");
        assert_eq!(slots.bar_width, MIN_BAR_WIDTH_PX);
    }

    #[test]
    fn label_step_never_below_one() {
        assert_eq!(label_step(3, 232.0), 1);
        assert_eq!(label_step(14, 232.0), 4);
        assert_eq!(label_step(5, -40.0), 5);
    }
}
