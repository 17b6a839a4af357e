use crate::prelude::{GridError, GridResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Inclusive integer range with a positive step, in dB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl AxisRange {
    pub fn new(min: i32, max: i32, step: i32) -> Self {
        Self { min, max, step }
    }

    /// Checks the range, naming `axis` in the error.
    pub fn validate(&self, axis: &'static str) -> GridResult<()> {
        if self.step <= 0 {
            return Err(GridError::InvalidRange {
                axis,
                reason: format!("step must be positive, got {}", self.step),
            });
        }
        if self.min > self.max {
            return Err(GridError::InvalidRange {
                axis,
                reason: format!("min {} exceeds max {}", self.min, self.max),
            });
        }
        Ok(())
    }

    /// Number of values the range yields. Zero for an invalid range.
    pub fn len(&self) -> usize {
        if self.step <= 0 || self.min > self.max {
            return 0;
        }
        ((i64::from(self.max) - i64::from(self.min)) / i64::from(self.step)) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materializes `min, min + step, ...` up to and including the last value `<= max`.
    pub fn values(&self, axis: &'static str) -> GridResult<Array1<f64>> {
        self.validate(axis)?;
        let min = f64::from(self.min);
        let step = f64::from(self.step);
        Ok(Array1::from_iter(
            (0..self.len()).map(|index| min + step * index as f64),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sensitivity_axis_has_fifteen_values() {
        let axis = AxisRange::new(84, 98, 1).values("sensitivity").unwrap();
        assert_eq!(axis.len(), 15);
        assert_eq!(axis[0], 84.0);
        assert_eq!(axis[14], 98.0);
    }

    #[test]
    fn step_that_overshoots_stops_before_max() {
        let range = AxisRange::new(84, 98, 4);
        let axis = range.values("sensitivity").unwrap();
        assert_eq!(axis.to_vec(), vec![84.0, 88.0, 92.0, 96.0]);
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn single_point_range_is_allowed() {
        let axis = AxisRange::new(90, 90, 1).values("target").unwrap();
        assert_eq!(axis.to_vec(), vec![90.0]);
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = AxisRange::new(84, 98, 0).values("sensitivity").unwrap_err();
        assert!(err.to_string().contains("sensitivity"));
        assert!(AxisRange::new(84, 98, -1).validate("target").is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let range = AxisRange::new(124, 84, 1);
        assert!(range.validate("target").is_err());
        assert!(range.is_empty());
    }
}
