//! Naive pairwise formulation
//!
//! Every `(i, j)` entry is computed from scratch: one pass for the dot
//! product and one per norm. Quadratic in channels times window length with
//! no reuse; kept as the brute-force reference the faster kernels are
//! checked against.

use super::norms::{norm_out_of_range, scale_factor};
use super::SimilarityKernel;
use crate::config::ZeroNormPolicy;
use crate::types::SimilarityMatrix;
use crate::window::Window;
use nalgebra::DMatrix;

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveKernel;

impl NaiveKernel {
    pub fn new() -> Self {
        Self
    }

    /// Cosine similarity of two channels within the window
    pub fn pair(window: &Window<'_>, i: usize, j: usize, policy: ZeroNormPolicy) -> f64 {
        let (mut dot, mut sq_i, mut sq_j) = Self::accumulate(window, i, j, 1.0, 1.0);
        let (a, b) = (window.channel(i), window.channel(j));
        if norm_out_of_range(sq_i.sqrt(), a) || norm_out_of_range(sq_j.sqrt(), b) {
            (dot, sq_i, sq_j) = Self::accumulate(window, i, j, scale_factor(a), scale_factor(b));
        }

        let (norm_i, norm_j) = (sq_i.sqrt(), sq_j.sqrt());
        if norm_i == 0.0 || norm_j == 0.0 {
            return policy.fill_value();
        }
        dot / (norm_i * norm_j)
    }

    /// Dot product and both sums of squares, each channel divided by its scale
    fn accumulate(window: &Window<'_>, i: usize, j: usize, scale_i: f64, scale_j: f64) -> (f64, f64, f64) {
        let mut dot = 0.0_f64;
        let mut sq_i = 0.0_f64;
        let mut sq_j = 0.0_f64;
        for r in 0..window.len() {
            let a = window.value(r, i) / scale_i;
            let b = window.value(r, j) / scale_j;
            dot += a * b;
            sq_i += a * a;
            sq_j += b * b;
        }
        (dot, sq_i, sq_j)
    }
}

impl SimilarityKernel for NaiveKernel {
    fn compute(&self, window: &Window<'_>, policy: ZeroNormPolicy) -> SimilarityMatrix {
        let n = window.n_channels();
        let similarity = DMatrix::from_fn(n, n, |i, j| Self::pair(window, i, j, policy));
        SimilarityMatrix::from_dmatrix(similarity)
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
