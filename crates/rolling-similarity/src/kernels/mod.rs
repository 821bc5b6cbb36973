//! Single-window similarity kernels
//!
//! Three formulations of the same matrix:
//!
//! - [`NaiveKernel`]: nested loop over channel pairs, each pair's dot
//!   product and norms computed from scratch
//! - [`GramKernel`]: `G = Aᵀ·A` in one matrix product, divided element-wise
//!   by the outer product of the column norm vector
//! - [`FusedKernel`]: explicit per-column norm loop and upper-triangle dot
//!   products on a [`ComputePrimitives`](rolling_core::ComputePrimitives)
//!   backend, mirrored into the lower triangle
//!
//! All three agree within floating-point tolerance and apply the same
//! [`ZeroNormPolicy`].

mod fused;
mod gram;
mod naive;
pub mod norms;

pub use fused::FusedKernel;
pub use gram::GramKernel;
pub use naive::NaiveKernel;

use crate::config::ZeroNormPolicy;
use crate::types::SimilarityMatrix;
use crate::window::Window;

/// Computes the `C × C` cosine similarity matrix of one window
pub trait SimilarityKernel: Clone + Send + Sync {
    /// Compute the matrix; entries touching a zero-norm channel get
    /// `policy.fill_value()`
    fn compute(&self, window: &Window<'_>, policy: ZeroNormPolicy) -> SimilarityMatrix;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
