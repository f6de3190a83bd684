//! statchart: bar and pie charts for 2D drawing surfaces.
//!
//! The crate maps a series of labelled values to pixel geometry, paints it
//! through a backend-agnostic `RenderFrame`, and inverts the mapping for
//! pointer hit-testing and hover tooltips.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarChart, BarChartOptions, Chart, ChartEngine, PieChart, PieChartOptions};
pub use crate::core::{DataPoint, Series, SurfaceMetrics, Viewport};
pub use error::{ChartError, ChartResult};
pub use interaction::{HeadlessTooltip, HoverState, PointerEvent, Tooltip};
