//! Computational primitives with compile-time dispatch
//!
//! # Architecture
//!
//! - Single `ComputePrimitives` trait for the vector operations the
//!   similarity kernels need (dot product, sum of squares, norm)
//! - Concrete backend types: `ScalarBackend`, `Avx2Backend`
//! - Compile-time backend selection with runtime validation
//!
//! # Usage
//!
//! ```rust
//! use rolling_core::{ComputePrimitives, ScalarBackend};
//!
//! let backend = ScalarBackend::new();
//! let dot = backend.dot_product(&[1.0, 0.0, 1.0], &[0.0, 1.0, 1.0]);
//! assert_eq!(dot, 1.0);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{Avx2Backend, ScalarBackend};
pub use traits::ComputePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create an AVX2 backend (panics if not supported)
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub fn avx2_backend() -> Avx2Backend {
    Avx2Backend::new()
}

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    {
        if Avx2Backend::is_available() {
            return "avx2";
        }
    }
    "scalar"
}
