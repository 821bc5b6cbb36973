//! Rolling-window cosine similarity for multivariate time series
//!
//! This crate re-exports the workspace crates behind a single dependency:
//!
//! - [`rolling_core`]: errors, compute primitives and execution engines
//! - [`rolling_similarity`]: windowing, kernels and the rolling orchestrator
//!
//! # Quick Start
//!
//! ```rust
//! use rolling_cosine::prelude::*;
//!
//! let matrix = TimeSeriesMatrix::from_rows(&[
//!     [1.0, 0.0],
//!     [0.0, 1.0],
//!     [1.0, 1.0],
//!     [2.0, 2.0],
//! ])
//! .unwrap();
//!
//! let rolling = RollingCosine::new(
//!     scalar_sequential(),
//!     RollingConfig::new(3).with_strategy(SimilarityStrategy::Fused),
//! )
//! .unwrap();
//! let result = rolling.compute(&matrix).unwrap();
//!
//! assert_eq!(result.len(), 2);
//! assert!((result[0][(0, 1)] - 0.5).abs() < 1e-12);
//! ```

pub use rolling_core;
pub use rolling_similarity;

pub use rolling_core::{Error, Result};
pub use rolling_similarity::{
    cosine_similarity_matrix, rolling_cosine_similarity, RollingConfig, RollingCosine,
    RollingResult, SimilarityMatrix, SimilarityStrategy, TimeSeriesMatrix, Window,
    ZeroNormPolicy,
};

/// Common imports
pub mod prelude {
    pub use rolling_core::prelude::*;
    pub use rolling_similarity::{
        cosine_similarity_matrix, rolling_cosine_similarity, RollingConfig, RollingCosine,
        RollingResult, SimilarityMatrix, SimilarityStrategy, TimeSeriesMatrix, Window,
        ZeroNormPolicy,
    };
}
