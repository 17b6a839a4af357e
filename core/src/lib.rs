//! Core evaluation and figure model for SPL watts charts.
//!
//! The modules cover the numeric side (axes, mesh, power grid) and the
//! presentation model (colour scale, surface figure) that a renderer embeds.

pub mod color;
pub mod figure;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use color::{Band, ColorScale, Rgb};
pub use figure::{FigureLayout, SurfaceFigure};
pub use prelude::{GridConfig, GridError, GridResult};
pub use processing::{GridSummary, PowerGrid};
