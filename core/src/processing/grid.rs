use crate::color::BandCounts;
use crate::math::{meshgrid, watts_grid};
use crate::prelude::{GridConfig, GridResult};
use crate::telemetry::log::LogManager;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Required amplifier power evaluated over every (target SPL, sensitivity) pair.
///
/// All 2D arrays share the shape `(target_db.len(), sensitivity.len())`:
/// rows follow target SPL, columns follow sensitivity.
#[derive(Debug, Clone)]
pub struct PowerGrid {
    pub sensitivity: Array1<f64>,
    pub target_db: Array1<f64>,
    pub sensitivity_mesh: Array2<f64>,
    pub target_mesh: Array2<f64>,
    pub watts: Array2<f64>,
}

/// Compact description of an evaluated grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    pub sensitivity_points: usize,
    pub target_points: usize,
    pub min_watts: f64,
    pub max_watts: f64,
    /// Mean of `watts / max_watts` across the grid.
    pub mean_normalized: f64,
    pub bands: BandCounts,
    /// Cells that underflowed to zero or overflowed to infinity.
    pub degenerate_cells: usize,
}

fn count_degenerate(watts: &Array2<f64>) -> usize {
    watts
        .iter()
        .filter(|&&value| !(value > 0.0 && value.is_finite()))
        .count()
}

impl PowerGrid {
    pub fn evaluate(config: &GridConfig) -> GridResult<Self> {
        let logger = LogManager::new("grid");
        let sensitivity = config.sensitivity.values("sensitivity")?;
        let target_db = config.target.values("target")?;

        let (sensitivity_mesh, target_mesh) = meshgrid(sensitivity.view(), target_db.view());
        let watts = watts_grid(target_mesh.view(), sensitivity_mesh.view());

        let (rows, cols) = watts.dim();
        logger.trace(&format!("evaluated {}x{} watts grid", rows, cols));

        let degenerate = count_degenerate(&watts);
        if degenerate > 0 {
            logger.warn(&format!(
                "{} cells are zero or non-finite; the log watts axis cannot show them",
                degenerate
            ));
        }

        Ok(Self {
            sensitivity,
            target_db,
            sensitivity_mesh,
            target_mesh,
            watts,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.watts.dim()
    }

    /// Looks up a cell by its axis values rather than its indices.
    pub fn watts_at(&self, target_db: f64, sensitivity: f64) -> Option<f64> {
        let row = self.target_db.iter().position(|&v| v == target_db)?;
        let col = self.sensitivity.iter().position(|&v| v == sensitivity)?;
        self.watts.get([row, col]).copied()
    }

    pub fn min_watts(&self) -> f64 {
        self.watts.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max_watts(&self) -> f64 {
        self.watts.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Watts scaled by the grid maximum. Returned unchanged when the maximum
    /// is not positive.
    pub fn normalized(&self) -> Array2<f64> {
        let max = self.max_watts();
        if max > 0.0 {
            &self.watts / max
        } else {
            self.watts.clone()
        }
    }

    /// Watts as row-major nested vectors, one inner vector per target SPL.
    pub fn watts_rows(&self) -> Vec<Vec<f64>> {
        self.watts.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn summary(&self) -> GridSummary {
        let (target_points, sensitivity_points) = self.shape();
        GridSummary {
            sensitivity_points,
            target_points,
            min_watts: self.min_watts(),
            max_watts: self.max_watts(),
            mean_normalized: self.normalized().mean().unwrap_or(0.0),
            bands: BandCounts::tally(self.watts.iter()),
            degenerate_cells: count_degenerate(&self.watts),
        }
    }
}
