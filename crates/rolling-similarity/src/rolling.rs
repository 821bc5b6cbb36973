//! Rolling orchestration: one similarity matrix per window start
//!
//! Windows are independent, so the per-window map goes through the
//! engine's indexed batch. Each matrix is written into the slot for its
//! window start; the source matrix is only ever read.

use crate::config::{RollingConfig, SimilarityStrategy, ZeroNormPolicy};
use crate::kernels::{FusedKernel, GramKernel, NaiveKernel, SimilarityKernel};
use crate::matrix::TimeSeriesMatrix;
use crate::types::{RollingResult, SimilarityMatrix};
use crate::window::{window_count, Window};
use rolling_core::{scalar_sequential, ComputePrimitives, Error, ExecutionEngine, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument, Level};

/// Rolling cosine similarity estimator
///
/// # Example
///
/// ```rust
/// use rolling_core::scalar_sequential;
/// use rolling_similarity::{RollingConfig, RollingCosine, TimeSeriesMatrix};
///
/// let matrix = TimeSeriesMatrix::from_rows(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, 2.0]]).unwrap();
/// let rolling = RollingCosine::new(scalar_sequential(), RollingConfig::new(3)).unwrap();
/// let result = rolling.compute(&matrix).unwrap();
///
/// assert_eq!(result.len(), 2);
/// assert!((result[0][(0, 1)] - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct RollingCosine<E: ExecutionEngine> {
    engine: E,
    config: RollingConfig,
    fused: FusedKernel<E::Primitives>,
}

impl<E: ExecutionEngine> RollingCosine<E> {
    /// Validate `config` and bind it to an engine
    pub fn new(engine: E, config: RollingConfig) -> Result<Self> {
        config.validate()?;
        let fused = FusedKernel::new(engine.primitives().clone());
        Ok(Self {
            engine,
            config,
            fused,
        })
    }

    pub fn config(&self) -> &RollingConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Similarity matrix of a single window with the configured strategy
    pub fn similarity(&self, window: &Window<'_>) -> SimilarityMatrix {
        let policy = self.config.zero_norm_policy;
        match self.config.strategy {
            SimilarityStrategy::Naive => NaiveKernel.compute(window, policy),
            SimilarityStrategy::Gram => GramKernel.compute(window, policy),
            SimilarityStrategy::Fused => self.fused.compute(window, policy),
        }
    }

    /// One matrix per window, ordered by window start
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            n_steps = matrix.n_steps(),
            n_channels = matrix.n_channels(),
            window_size = self.config.window_size,
            strategy = self.config.strategy.name(),
        )
    )]
    pub fn compute(&self, matrix: &TimeSeriesMatrix) -> Result<RollingResult> {
        let total = self.window_total(matrix)?;
        let window_size = self.config.window_size;
        debug!(
            total,
            backend = self.engine.primitives().backend_name(),
            threads = self.engine.num_threads(),
            "computing rolling similarity"
        );

        let matrices = self
            .engine
            .execute_batch(total, |k| self.similarity(&Window::at(matrix, k, window_size)));

        Ok(self.finish(matrix, matrices))
    }

    /// Like [`compute`](Self::compute), but stops starting new windows once
    /// `cancel` is set
    ///
    /// Windows already running finish; the rest are skipped and the run
    /// reports [`Error::Cancelled`] with the number that completed.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            n_steps = matrix.n_steps(),
            n_channels = matrix.n_channels(),
            window_size = self.config.window_size,
        )
    )]
    pub fn compute_with_cancel(
        &self,
        matrix: &TimeSeriesMatrix,
        cancel: &AtomicBool,
    ) -> Result<RollingResult> {
        let total = self.window_total(matrix)?;
        let window_size = self.config.window_size;

        let slots = self.engine.execute_batch(total, |k| {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }
            Some(self.similarity(&Window::at(matrix, k, window_size)))
        });

        let completed = slots.iter().filter(|slot| slot.is_some()).count();
        if completed < total {
            debug!(completed, total, "rolling similarity cancelled");
            return Err(Error::Cancelled { completed, total });
        }

        Ok(self.finish(matrix, slots.into_iter().flatten().collect()))
    }

    fn window_total(&self, matrix: &TimeSeriesMatrix) -> Result<usize> {
        let window_size = self.config.window_size;
        let total = window_count(matrix.n_steps(), window_size);
        if total == 0 && !self.config.allow_empty_result {
            return Err(Error::InsufficientData {
                expected: window_size,
                actual: matrix.n_steps(),
            });
        }
        Ok(total)
    }

    fn finish(&self, matrix: &TimeSeriesMatrix, matrices: Vec<SimilarityMatrix>) -> RollingResult {
        let result = RollingResult::new(self.config.window_size, matrix.n_channels(), matrices);
        if tracing::enabled!(Level::DEBUG) {
            debug!(
                windows = result.len(),
                degenerate = result.degenerate_windows().len(),
                "rolling similarity complete"
            );
        }
        result
    }
}

/// Cosine similarity matrix of one window (Gram formulation, NaN for
/// zero-norm channels)
pub fn cosine_similarity_matrix(window: &Window<'_>) -> SimilarityMatrix {
    GramKernel.compute(window, ZeroNormPolicy::Nan)
}

/// Sequential rolling cosine similarity with default settings
pub fn rolling_cosine_similarity(
    matrix: &TimeSeriesMatrix,
    window_size: usize,
) -> Result<RollingResult> {
    RollingCosine::new(scalar_sequential(), RollingConfig::new(window_size))?.compute(matrix)
}
