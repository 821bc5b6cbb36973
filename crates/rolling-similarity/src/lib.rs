//! Sliding-window cosine similarity for multivariate time series
//!
//! Given a `(T, C)` matrix (rows are time steps, columns are channels) and a
//! window size `w`, computes for every start `s` in `0..=T-w` the `C × C`
//! matrix of cosine similarities between channels restricted to rows
//! `[s, s + w)`.
//!
//! # Layers
//!
//! - **Windowing** ([`window`]): zero-copy [`Window`] views, O(1) each
//! - **Kernels** ([`kernels`]): naive pairwise, Gram-matrix and fused
//!   explicit-loop formulations of one window's matrix
//! - **Orchestration** ([`rolling`]): [`RollingCosine`] maps a kernel over
//!   every window through an [`ExecutionEngine`](rolling_core::ExecutionEngine)
//!
//! # Degenerate channels
//!
//! A channel that is all zeros within a window has zero norm, so its
//! cosine similarity is undefined. Every entry in that channel's row and
//! column, for that window only, takes the [`ZeroNormPolicy`] value: NaN by
//! default, or `0.0` with [`ZeroNormPolicy::Zero`].
//!
//! Channels whose sum of squares overflows (values near `1e155` and above)
//! or underflows to zero while still holding non-zero values are divided by
//! their largest absolute value before the window is evaluated. Cosine
//! similarity is unchanged by that scaling, so such channels still get a
//! unit diagonal.
//!
//! # Example
//!
//! ```rust
//! use rolling_similarity::{rolling_cosine_similarity, TimeSeriesMatrix};
//!
//! let matrix = TimeSeriesMatrix::from_rows(&[
//!     [1.0, 0.0],
//!     [0.0, 1.0],
//!     [1.0, 1.0],
//!     [2.0, 2.0],
//!     [1.0, -1.0],
//!     [3.0, 0.0],
//! ])
//! .unwrap();
//!
//! let result = rolling_cosine_similarity(&matrix, 3).unwrap();
//! assert_eq!(result.len(), 4);
//! assert!((result[0][(0, 1)] - 0.5).abs() < 1e-12);
//! ```

pub mod config;
pub mod kernels;
pub mod matrix;
pub mod rolling;
pub mod types;
pub mod window;

pub use config::{RollingConfig, SimilarityStrategy, ZeroNormPolicy};
pub use kernels::{FusedKernel, GramKernel, NaiveKernel, SimilarityKernel};
pub use matrix::TimeSeriesMatrix;
pub use rolling::{cosine_similarity_matrix, rolling_cosine_similarity, RollingCosine};
pub use types::{RollingResult, SimilarityMatrix};
pub use window::{extract_windows, window_count, Window, Windows};
