//! AVX2 backend implementation
//!
//! Processes four `f64` lanes per iteration with fused multiply-add.
//! Runtime CPU detection happens once, in [`Avx2Backend::new`].

use crate::primitives::ComputePrimitives;

/// AVX2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend;

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if !(is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")) {
                panic!("AVX2 backend requested but CPU doesn't support AVX2/FMA instructions");
            }
            Self
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            panic!("AVX2 backend not available: not compiled with AVX2 support");
        }
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl ComputePrimitives for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2"
    }

    fn simd_width(&self) -> usize {
        4
    }

    fn dot_product(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len(), "Vectors must have same length");
        // Safety: We checked CPU support in new()
        unsafe { ops::dot_product_f64(a, b) }
    }

    fn sum_of_squares(&self, data: &[f64]) -> f64 {
        // Safety: We checked CPU support in new()
        unsafe { ops::dot_product_f64(data, data) }
    }
}

// Fallback for non-AVX2 builds
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl ComputePrimitives for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod ops {
    use std::arch::x86_64::*;

    /// Dot product over the common prefix of `a` and `b`
    #[target_feature(enable = "avx2", enable = "fma")]
    pub unsafe fn dot_product_f64(a: &[f64], b: &[f64]) -> f64 {
        let n = a.len().min(b.len());
        if n == 0 {
            return 0.0;
        }

        let chunks = n / 4;
        let mut sum_vec = _mm256_setzero_pd();

        for i in 0..chunks {
            let offset = i * 4;
            let a_vec = _mm256_loadu_pd(a.as_ptr().add(offset));
            let b_vec = _mm256_loadu_pd(b.as_ptr().add(offset));
            sum_vec = _mm256_fmadd_pd(a_vec, b_vec, sum_vec);
        }

        let lanes = std::mem::transmute::<__m256d, [f64; 4]>(sum_vec);
        let mut sum = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);

        for i in (chunks * 4)..n {
            sum += a[i] * b[i];
        }

        sum
    }
}
