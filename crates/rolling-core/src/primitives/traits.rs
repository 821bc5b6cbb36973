//! Compute primitives trait
//!
//! The default method bodies are the scalar reference; SIMD backends
//! override the hot paths.

/// Low-level vector operations used by the similarity kernels
///
/// Implementations are plain `Copy` types selected at compile time,
/// so kernels generic over `P: ComputePrimitives` pay no dispatch cost.
pub trait ComputePrimitives: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of elements processed in parallel)
    fn simd_width(&self) -> usize {
        1
    }

    /// Compute dot product of two vectors
    ///
    /// Only the common prefix is used when lengths differ.
    fn dot_product(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "Vectors must have same length");
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| x * y)
            .fold(0.0, |acc, x| acc + x)
    }

    /// Compute sum of squares
    fn sum_of_squares(&self, data: &[f64]) -> f64 {
        data.iter().map(|&x| x * x).fold(0.0, |acc, x| acc + x)
    }

    /// Euclidean (L2) norm
    fn norm(&self, data: &[f64]) -> f64 {
        self.sum_of_squares(data).sqrt()
    }
}
