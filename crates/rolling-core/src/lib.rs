//! Core types and execution infrastructure for rolling similarity analysis
//!
//! This crate provides the two lower layers that the similarity kernels
//! build on.
//!
//! # Architecture Overview
//!
//! 1. **Layer 1: Primitives** - vector operations with zero-cost backend dispatch
//! 2. **Layer 2: Execution Engines** - sequential or parallel indexed batches
//!
//! Algorithm crates supply the third layer (kernels and orchestration).
//!
//! # Example
//!
//! ```rust
//! use rolling_core::{
//!     execution::{scalar_sequential, ExecutionEngine},
//!     ComputePrimitives,
//! };
//!
//! let engine = scalar_sequential();
//!
//! let a = vec![1.0, 2.0, 3.0];
//! let b = vec![4.0, 5.0, 6.0];
//! let dot = engine.primitives().dot_product(&a, &b);
//! assert_eq!(dot, 32.0);
//!
//! let doubled = engine.execute_batch(3, |i| i * 2);
//! assert_eq!(doubled, vec![0, 2, 4]);
//! ```

pub mod error;
pub mod execution;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{
    auto_engine, scalar_sequential, simd_sequential, ExecutionEngine, ExecutionStrategy,
    SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{scalar_parallel, simd_parallel, ParallelEngine};

pub use primitives::{
    best_backend_name, scalar_backend, Avx2Backend, ComputePrimitives, ScalarBackend,
};

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use primitives::avx2_backend;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ComputePrimitives, ExecutionEngine, ExecutionStrategy, Result, ScalarBackend,
        SequentialEngine,
    };

    pub use crate::error::Error;

    #[cfg(feature = "parallel")]
    pub use crate::execution::{scalar_parallel, simd_parallel, ParallelEngine};
    pub use crate::execution::{auto_engine, scalar_sequential, simd_sequential};
}
