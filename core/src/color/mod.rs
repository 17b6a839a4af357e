//! Discrete watts colour banding shared by the figure model and summaries.

pub mod band;
pub mod scale;

pub use band::{Band, BandCounts};
pub use scale::{ColorBar, ColorScale, ColorStop, Rgb};
