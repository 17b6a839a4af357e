use ndarray::{Array2, ArrayView1};

/// Builds coordinate matrices from two axes, Cartesian (`xy`) indexing.
///
/// Both outputs have shape `(y.len(), x.len())`: every row of the first
/// repeats `x`, every column of the second repeats `y`.
pub fn meshgrid(x: ArrayView1<f64>, y: ArrayView1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (y.len(), x.len());
    let x_mesh = Array2::from_shape_fn(shape, |(_, col)| x[col]);
    let y_mesh = Array2::from_shape_fn(shape, |(row, _)| y[row]);
    (x_mesh, y_mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn meshgrid_repeats_axes_along_opposite_dimensions() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![10.0, 20.0];
        let (xm, ym) = meshgrid(x.view(), y.view());

        assert_eq!(xm.dim(), (2, 3));
        assert_eq!(ym.dim(), (2, 3));
        assert_eq!(xm.row(1).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(ym.column(2).to_vec(), vec![10.0, 20.0]);
        assert_eq!(ym[[1, 0]], 20.0);
    }

    #[test]
    fn meshgrid_shape_follows_axis_lengths() {
        let x = Array1::linspace(84.0, 98.0, 15);
        let y = Array1::linspace(84.0, 124.0, 41);
        let (xm, ym) = meshgrid(x.view(), y.view());
        assert_eq!(xm.dim(), (41, 15));
        assert_eq!(ym.dim(), (41, 15));
        assert_eq!(xm[[40, 14]], 98.0);
        assert_eq!(ym[[40, 14]], 124.0);
    }
}
