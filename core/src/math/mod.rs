pub mod axis;
pub mod mesh;
pub mod power;

pub use axis::AxisRange;
pub use mesh::meshgrid;
pub use power::{required_watts, watts_grid};
