pub mod grid;

pub use grid::{GridSummary, PowerGrid};
