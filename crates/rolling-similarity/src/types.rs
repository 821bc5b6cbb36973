//! Output types: per-window similarity matrices and the rolling sequence

use nalgebra::DMatrix;
use rolling_core::{Error, Result};
use std::ops::{Index, Range};

/// `C × C` cosine similarity matrix for one window
///
/// Entry `(i, j)` is the cosine of the angle between channel `i` and
/// channel `j` restricted to the window. Entries involving a channel with
/// zero norm hold the configured [`ZeroNormPolicy`](crate::ZeroNormPolicy)
/// value (NaN by default).
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    inner: DMatrix<f64>,
}

impl SimilarityMatrix {
    pub(crate) fn from_dmatrix(inner: DMatrix<f64>) -> Self {
        debug_assert_eq!(inner.nrows(), inner.ncols());
        Self { inner }
    }

    #[inline]
    pub fn n_channels(&self) -> usize {
        self.inner.nrows()
    }

    /// Entry `(i, j)`, or `None` if either index is out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.inner.get((i, j)).copied()
    }

    /// Self-similarities; 1.0 for every channel with non-zero norm
    pub fn diagonal(&self) -> Vec<f64> {
        self.inner.diagonal().iter().copied().collect()
    }

    /// True when `|M[i][j] - M[j][i]| <= tolerance` everywhere
    ///
    /// Two NaN entries count as equal.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.n_channels();
        (0..n).all(|i| {
            (i + 1..n).all(|j| {
                let (a, b) = (self.inner[(i, j)], self.inner[(j, i)]);
                (a.is_nan() && b.is_nan()) || (a - b).abs() <= tolerance
            })
        })
    }

    /// True if any entry is NaN (a zero-norm channel under the NaN policy)
    pub fn has_degenerate(&self) -> bool {
        self.inner.iter().any(|v| v.is_nan())
    }

    /// Row-major copy, one `Vec` per channel
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.inner
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.inner
    }

    pub fn into_dmatrix(self) -> DMatrix<f64> {
        self.inner
    }
}

impl Index<(usize, usize)> for SimilarityMatrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.inner[index]
    }
}

/// Ordered similarity matrices, one per window start
///
/// `result[k]` belongs to the window covering rows `[k, k + window_size)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingResult {
    window_size: usize,
    n_channels: usize,
    matrices: Vec<SimilarityMatrix>,
}

impl RollingResult {
    pub(crate) fn new(window_size: usize, n_channels: usize, matrices: Vec<SimilarityMatrix>) -> Self {
        Self {
            window_size,
            n_channels,
            matrices,
        }
    }

    /// Number of windows
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// True when the window was longer than the series
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn n_channels(&self) -> usize {
        self.n_channels
    }

    /// Matrix for the window starting at row `k`
    pub fn get(&self, k: usize) -> Option<&SimilarityMatrix> {
        self.matrices.get(k)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimilarityMatrix> {
        self.matrices.iter()
    }

    /// Rows of the input covered by window `k`
    pub fn window_range(&self, k: usize) -> Option<Range<usize>> {
        (k < self.len()).then(|| k..k + self.window_size)
    }

    /// Similarity of channels `i` and `j` across all windows, in time order
    pub fn pair_series(&self, i: usize, j: usize) -> Result<Vec<f64>> {
        for channel in [i, j] {
            if channel >= self.n_channels {
                return Err(Error::channel_out_of_range(channel, self.n_channels));
            }
        }
        Ok(self.matrices.iter().map(|m| m[(i, j)]).collect())
    }

    /// Indices of windows containing at least one NaN entry
    pub fn degenerate_windows(&self) -> Vec<usize> {
        self.matrices
            .iter()
            .enumerate()
            .filter(|(_, m)| m.has_degenerate())
            .map(|(k, _)| k)
            .collect()
    }

    pub fn into_matrices(self) -> Vec<SimilarityMatrix> {
        self.matrices
    }
}

impl Index<usize> for RollingResult {
    type Output = SimilarityMatrix;

    fn index(&self, k: usize) -> &SimilarityMatrix {
        &self.matrices[k]
    }
}

impl<'a> IntoIterator for &'a RollingResult {
    type Item = &'a SimilarityMatrix;
    type IntoIter = std::slice::Iter<'a, SimilarityMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrices.iter()
    }
}

impl IntoIterator for RollingResult {
    type Item = SimilarityMatrix;
    type IntoIter = std::vec::IntoIter<SimilarityMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.matrices.into_iter()
    }
}
