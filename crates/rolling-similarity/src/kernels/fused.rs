//! Explicit-loop formulation
//!
//! No library broadcasting: norms come from one loop per channel, the norm
//! product is formed inline, and only the upper triangle is computed before
//! being mirrored. Every inner operation runs on contiguous channel slices
//! through the engine's primitives backend.

use super::norms::{column_norms_with, needs_rescale, rescaled};
use super::SimilarityKernel;
use crate::config::ZeroNormPolicy;
use crate::types::SimilarityMatrix;
use crate::window::Window;
use nalgebra::DMatrix;
use rolling_core::ComputePrimitives;

#[derive(Debug, Clone, Copy)]
pub struct FusedKernel<P: ComputePrimitives> {
    primitives: P,
}

impl<P: ComputePrimitives> FusedKernel<P> {
    pub fn new(primitives: P) -> Self {
        Self { primitives }
    }

    pub fn primitives(&self) -> &P {
        &self.primitives
    }
}

impl<P: ComputePrimitives> FusedKernel<P> {
    fn similarity(&self, window: &Window<'_>, norms: &[f64], policy: ZeroNormPolicy) -> SimilarityMatrix {
        let n = window.n_channels();
        let fill = policy.fill_value();

        let mut similarity = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            let a = window.channel(i);
            for j in i..n {
                let value = if norms[i] == 0.0 || norms[j] == 0.0 {
                    fill
                } else {
                    self.primitives.dot_product(a, window.channel(j)) / (norms[i] * norms[j])
                };
                similarity[(i, j)] = value;
                similarity[(j, i)] = value;
            }
        }

        SimilarityMatrix::from_dmatrix(similarity)
    }
}

impl<P: ComputePrimitives> SimilarityKernel for FusedKernel<P> {
    fn compute(&self, window: &Window<'_>, policy: ZeroNormPolicy) -> SimilarityMatrix {
        let norms = column_norms_with(window, &self.primitives);
        if needs_rescale(window, &norms) {
            let scaled = rescaled(window);
            let window = scaled.full_window();
            let norms = column_norms_with(&window, &self.primitives);
            return self.similarity(&window, &norms, policy);
        }
        self.similarity(window, &norms, policy)
    }

    fn name(&self) -> &'static str {
        "fused"
    }
}
