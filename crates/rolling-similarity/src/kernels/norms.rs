//! Per-channel Euclidean norm helpers

use crate::matrix::TimeSeriesMatrix;
use crate::window::Window;
use nalgebra::{DMatrix, DVector};
use rolling_core::ComputePrimitives;

/// `n[k] = sqrt(Σ_r window[r][k]²)` via the nalgebra view
pub fn column_norms(window: &Window<'_>) -> DVector<f64> {
    let view = window.view();
    DVector::from_iterator(view.ncols(), view.column_iter().map(|column| column.norm()))
}

/// Same norms, one explicit loop per channel on a primitives backend
pub fn column_norms_with<P: ComputePrimitives>(window: &Window<'_>, primitives: &P) -> Vec<f64> {
    let mut norms = Vec::with_capacity(window.n_channels());
    for k in 0..window.n_channels() {
        norms.push(primitives.norm(window.channel(k)));
    }
    norms
}

/// `N[i][j] = n[i] * n[j]`
pub fn outer_product(norms: &DVector<f64>) -> DMatrix<f64> {
    norms * norms.transpose()
}

/// Largest absolute value of a channel, or 1.0 when that is zero or not finite
///
/// Dividing by it leaves the channel's cosine similarities unchanged.
pub fn scale_factor(values: &[f64]) -> f64 {
    let max = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if max > 0.0 && max.is_finite() {
        max
    } else {
        1.0
    }
}

/// True when `norm` overflowed, or underflowed to zero although `values`
/// has a non-zero entry
pub fn norm_out_of_range(norm: f64, values: &[f64]) -> bool {
    norm.is_infinite() || (norm == 0.0 && values.iter().any(|&v| v != 0.0))
}

/// True when any channel's norm is out of range for direct evaluation
pub fn needs_rescale(window: &Window<'_>, norms: &[f64]) -> bool {
    norms
        .iter()
        .enumerate()
        .any(|(k, &norm)| norm_out_of_range(norm, window.channel(k)))
}

/// Owned copy of the window with every channel divided by its
/// [`scale_factor`]
pub fn rescaled(window: &Window<'_>) -> TimeSeriesMatrix {
    let scales: Vec<f64> = (0..window.n_channels())
        .map(|k| scale_factor(window.channel(k)))
        .collect();
    let data = DMatrix::from_fn(window.len(), window.n_channels(), |r, c| {
        window.value(r, c) / scales[c]
    });
    TimeSeriesMatrix::from_storage(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::TimeSeriesMatrix;
    use approx::assert_relative_eq;
    use rolling_core::ScalarBackend;

    #[test]
    fn test_norm_helpers_agree() {
        let m = TimeSeriesMatrix::from_rows(&[[3.0, 0.0, 1.0], [4.0, 0.0, -1.0], [0.0, 0.0, 2.0]])
            .unwrap();
        let w = m.full_window();

        let nalgebra_norms = column_norms(&w);
        let loop_norms = column_norms_with(&w, &ScalarBackend::new());

        assert_relative_eq!(nalgebra_norms[0], 5.0);
        assert_eq!(nalgebra_norms[1], 0.0);
        assert_relative_eq!(nalgebra_norms[2], 6.0f64.sqrt());
        for k in 0..3 {
            assert_relative_eq!(nalgebra_norms[k], loop_norms[k], epsilon = 1e-15);
        }
    }

    #[test]
    fn test_rescale_detection() {
        let huge = TimeSeriesMatrix::from_rows(&[[1e200, 1.0], [3e200, 2.0]]).unwrap();
        let w = huge.full_window();
        let norms = column_norms(&w);
        assert!(norms[0].is_infinite());
        assert!(needs_rescale(&w, norms.as_slice()));

        let tiny = TimeSeriesMatrix::from_rows(&[[1e-200, 0.0], [2e-200, 0.0]]).unwrap();
        let w = tiny.full_window();
        let norms = column_norms(&w);
        assert_eq!(norms[0], 0.0);
        assert!(norm_out_of_range(norms[0], w.channel(0)));
        assert!(!norm_out_of_range(norms[1], w.channel(1)));

        let plain = TimeSeriesMatrix::from_rows(&[[1.0, 0.0], [2.0, 0.0]]).unwrap();
        let w = plain.full_window();
        assert!(!needs_rescale(&w, column_norms(&w).as_slice()));
    }

    #[test]
    fn test_rescaled_columns() {
        let m = TimeSeriesMatrix::from_rows(&[[-4e200, 0.0, 2.0], [2e200, 0.0, -1.0]]).unwrap();
        let scaled = rescaled(&m.window(0, 2).unwrap());
        assert_eq!(scaled.channel(0).unwrap(), &[-1.0, 0.5]);
        assert_eq!(scaled.channel(1).unwrap(), &[0.0, 0.0]);
        assert_eq!(scaled.channel(2).unwrap(), &[1.0, -0.5]);
        assert_eq!(scale_factor(&[f64::INFINITY, 1.0]), 1.0);
    }

    #[test]
    fn test_outer_product() {
        let n = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let outer = outer_product(&n);
        assert_eq!(outer.shape(), (3, 3));
        assert_eq!(outer[(1, 2)], 6.0);
        assert_eq!(outer[(2, 1)], 6.0);
        assert_eq!(outer[(0, 0)], 1.0);
    }

    #[test]
    fn test_norms_follow_window_rows() {
        let m = TimeSeriesMatrix::from_rows(&[[1.0], [0.0], [0.0], [2.0]]).unwrap();
        let middle = m.window(1, 2).unwrap();
        assert_eq!(column_norms(&middle)[0], 0.0);
        let tail = m.window(2, 2).unwrap();
        assert_relative_eq!(column_norms(&tail)[0], 2.0);
    }
}
