use ndarray::{Array2, ArrayView2, Zip};

/// Electrical power needed to reach `target_db` from a speaker rated at
/// `sensitivity` dB for 1 W.
pub fn required_watts(target_db: f64, sensitivity: f64) -> f64 {
    10f64.powf((target_db - sensitivity) / 10.0)
}

/// Elementwise [`required_watts`] over matching target/sensitivity meshes.
pub fn watts_grid(target_mesh: ArrayView2<f64>, sensitivity_mesh: ArrayView2<f64>) -> Array2<f64> {
    Zip::from(&target_mesh)
        .and(&sensitivity_mesh)
        .map_collect(|&target, &sensitivity| required_watts(target, sensitivity))
}
