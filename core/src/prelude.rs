use crate::math::axis::AxisRange;
use serde::{Deserialize, Serialize};

/// Default sensitivity axis, dB SPL at 1 W / 1 m.
pub const SENSITIVITY_MIN: i32 = 84;
pub const SENSITIVITY_MAX: i32 = 98;
pub const SENSITIVITY_STEP: i32 = 1;

/// Default target SPL axis, dB.
pub const TARGET_MIN: i32 = 84;
pub const TARGET_MAX: i32 = 124;
pub const TARGET_STEP: i32 = 1;

/// Axis selection for a power grid evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub sensitivity: AxisRange,
    pub target: AxisRange,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            sensitivity: AxisRange::new(SENSITIVITY_MIN, SENSITIVITY_MAX, SENSITIVITY_STEP),
            target: AxisRange::new(TARGET_MIN, TARGET_MAX, TARGET_STEP),
        }
    }
}

/// Common error type for grid evaluation.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error("invalid {axis} range: {reason}")]
    InvalidRange { axis: &'static str, reason: String },
}

pub type GridResult<T> = Result<T, GridError>;
