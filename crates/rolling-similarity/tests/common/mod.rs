//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rolling_similarity::{SimilarityMatrix, TimeSeriesMatrix};

/// Tolerance for comparing formulations against each other
pub const TOLERANCE: f64 = 1e-8;

/// Cumulative sum of Gaussian steps per channel, seeded
pub fn random_walk(n_steps: usize, n_channels: usize, seed: u64) -> TimeSeriesMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();

    let columns: Vec<Vec<f64>> = (0..n_channels)
        .map(|_| {
            let mut level = 0.0;
            (0..n_steps)
                .map(|_| {
                    level += normal.sample(&mut rng);
                    level
                })
                .collect()
        })
        .collect();

    TimeSeriesMatrix::from_columns(&columns).unwrap()
}

/// Independent standard normal draws, seeded
pub fn gaussian_noise(n_steps: usize, n_channels: usize, seed: u64) -> TimeSeriesMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let values: Vec<f64> = (0..n_steps * n_channels)
        .map(|_| normal.sample(&mut rng))
        .collect();
    TimeSeriesMatrix::from_row_major(n_steps, n_channels, &values).unwrap()
}

/// Combined absolute + relative closeness; NaN matches only NaN
pub fn close(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    (a - b).abs() <= tolerance + tolerance * a.abs().max(b.abs())
}

/// Assert two similarity matrices agree entry by entry
pub fn assert_matrices_close(
    actual: &SimilarityMatrix,
    expected: &SimilarityMatrix,
    tolerance: f64,
    context: &str,
) {
    assert_eq!(
        actual.n_channels(),
        expected.n_channels(),
        "channel count mismatch for {context}"
    );
    let n = actual.n_channels();
    for i in 0..n {
        for j in 0..n {
            let (a, e) = (actual[(i, j)], expected[(i, j)]);
            assert!(
                close(a, e, tolerance),
                "{context}: entry ({i}, {j}) differs: {a} vs {e} (diff {:e})",
                (a - e).abs()
            );
        }
    }
}
