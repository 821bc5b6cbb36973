//! Scalar backend implementation
//!
//! This backend uses the default trait bodies and never touches SIMD
//! instructions, so it is available on every target.

use crate::primitives::ComputePrimitives;

/// Scalar backend - always available
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ComputePrimitives for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}
