//! Gram-matrix formulation
//!
//! Pairwise column dot products are the entries of `Aᵀ·A`, so the whole
//! numerator comes from one matrix product over the window view.

use super::norms::{column_norms, needs_rescale, outer_product, rescaled};
use super::SimilarityKernel;
use crate::config::ZeroNormPolicy;
use crate::types::SimilarityMatrix;
use crate::window::Window;
use nalgebra::{DMatrix, DVector};

#[derive(Debug, Clone, Copy, Default)]
pub struct GramKernel;

impl GramKernel {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityKernel for GramKernel {
    fn compute(&self, window: &Window<'_>, policy: ZeroNormPolicy) -> SimilarityMatrix {
        let norms = column_norms(window);
        if needs_rescale(window, norms.as_slice()) {
            let scaled = rescaled(window);
            let window = scaled.full_window();
            let norms = column_norms(&window);
            return gram_similarity(&window, &norms, policy);
        }
        gram_similarity(window, &norms, policy)
    }

    fn name(&self) -> &'static str {
        "gram"
    }
}

fn gram_similarity(window: &Window<'_>, norms: &DVector<f64>, policy: ZeroNormPolicy) -> SimilarityMatrix {
    let view = window.view();
    let gram = view.tr_mul(&view);
    let mut similarity = gram.component_div(&outer_product(norms));
    mask_zero_norms(&mut similarity, norms.as_slice(), policy);
    SimilarityMatrix::from_dmatrix(similarity)
}

/// Overwrite the row and column of every zero-norm channel
fn mask_zero_norms(similarity: &mut DMatrix<f64>, norms: &[f64], policy: ZeroNormPolicy) {
    let fill = policy.fill_value();
    for (k, &norm) in norms.iter().enumerate() {
        if norm == 0.0 {
            similarity.row_mut(k).fill(fill);
            similarity.column_mut(k).fill(fill);
        }
    }
}
