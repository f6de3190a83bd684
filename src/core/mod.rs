pub mod bar_layout;
pub mod pie_layout;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;

pub use bar_layout::{
    BarGeometry, BarLayout, BarSlots, GridLine, LabelFormat, TickLabel, label_step, layout_bars,
    thin_label_indices,
};
pub use hit_test::{hit_test_bars, hit_test_pie};
pub use pie_layout::{PieDisc, PieLayout, PieSlice, layout_pie};
pub use scale::{ValueRange, ValueScale, pie_total};
pub use series::{DataPoint, Series};
pub use types::{Padding, PlotArea, SurfaceMetrics, Viewport};
