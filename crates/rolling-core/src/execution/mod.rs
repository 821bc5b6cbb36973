//! Execution engines for controlling computation strategy
//!
//! An engine pairs a primitives backend (scalar vs SIMD) with an execution
//! strategy (sequential vs parallel). Per-window similarity work has no
//! cross-window state, so every engine exposes it as an indexed batch:
//! item `i` is computed independently and lands in slot `i` of the output.

use crate::primitives::ComputePrimitives;
#[cfg(feature = "parallel")]
use crate::Result;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Trait for execution engines that control how computations are performed
pub trait ExecutionEngine: Clone + Send + Sync {
    /// The type of primitives used by this engine
    type Primitives: ComputePrimitives;

    /// Get the primitives for low-level operations
    fn primitives(&self) -> &Self::Primitives;

    /// Evaluate `f(0)..f(count)` and collect the results in index order
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(self.strategy(), ExecutionStrategy::Parallel)
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Debug)]
pub struct SequentialEngine<P: ComputePrimitives> {
    primitives: P,
}

impl<P: ComputePrimitives> SequentialEngine<P> {
    /// Create a new sequential engine with the given primitives
    pub fn new(primitives: P) -> Self {
        Self { primitives }
    }
}

impl<P: ComputePrimitives> ExecutionEngine for SequentialEngine<P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's thread pool.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug)]
pub struct ParallelEngine<P: ComputePrimitives> {
    primitives: P,
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl<P: ComputePrimitives> ParallelEngine<P> {
    /// Create a new parallel engine with default thread pool
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            thread_pool: None,
        }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(primitives: P, pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            primitives,
            thread_pool: Some(pool),
        }
    }

    /// Create with a specific number of threads
    pub fn with_num_threads(primitives: P, num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(crate::Error::InvalidParameter(
                "num_threads must be at least 1, got 0".to_string(),
            ));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            primitives,
            thread_pool: Some(std::sync::Arc::new(pool)),
        })
    }
}

#[cfg(feature = "parallel")]
impl<P: ComputePrimitives> ExecutionEngine for ParallelEngine<P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Create a sequential scalar engine
pub fn scalar_sequential() -> SequentialEngine<crate::primitives::ScalarBackend> {
    SequentialEngine::new(crate::primitives::ScalarBackend)
}

/// Create a sequential SIMD engine
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub fn simd_sequential() -> SequentialEngine<crate::primitives::Avx2Backend> {
    SequentialEngine::new(crate::primitives::Avx2Backend::new())
}

/// Create a sequential SIMD engine (fallback to scalar if AVX2 not compiled in)
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
pub fn simd_sequential() -> SequentialEngine<crate::primitives::ScalarBackend> {
    SequentialEngine::new(crate::primitives::ScalarBackend)
}

/// Create a parallel scalar engine
#[cfg(feature = "parallel")]
pub fn scalar_parallel() -> ParallelEngine<crate::primitives::ScalarBackend> {
    ParallelEngine::new(crate::primitives::ScalarBackend)
}

/// Create a parallel SIMD engine
#[cfg(all(feature = "parallel", target_arch = "x86_64", feature = "avx2"))]
pub fn simd_parallel() -> ParallelEngine<crate::primitives::Avx2Backend> {
    ParallelEngine::new(crate::primitives::Avx2Backend::new())
}

/// Create a parallel SIMD engine (fallback to scalar if AVX2 not compiled in)
#[cfg(all(feature = "parallel", not(all(target_arch = "x86_64", feature = "avx2"))))]
pub fn simd_parallel() -> ParallelEngine<crate::primitives::ScalarBackend> {
    ParallelEngine::new(crate::primitives::ScalarBackend)
}

/// Create an auto-selected engine based on available features
pub fn auto_engine() -> impl ExecutionEngine {
    #[cfg(feature = "parallel")]
    {
        simd_parallel()
    }
    #[cfg(not(feature = "parallel"))]
    {
        simd_sequential()
    }
}
