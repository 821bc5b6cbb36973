//! End-to-end checks through the facade crate, with tracing enabled

use anyhow::Result;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rolling_cosine::prelude::*;
use std::sync::atomic::AtomicBool;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn correlated_channels(n_steps: usize, seed: u64) -> Result<TimeSeriesMatrix> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0)?;
    let rows: Vec<[f64; 3]> = (0..n_steps)
        .map(|_| {
            let base = normal.sample(&mut rng);
            [base, 2.0 * base, normal.sample(&mut rng)]
        })
        .collect();
    Ok(TimeSeriesMatrix::from_rows(&rows)?)
}

#[test]
fn test_config_driven_run() -> Result<()> {
    init_tracing();

    let config = RollingConfig::from_json(r#"{"window_size": 20, "strategy": "fused"}"#)?;
    let matrix = correlated_channels(200, 3)?;
    let rolling = RollingCosine::new(auto_engine(), config)?;
    let result = rolling.compute(&matrix)?;

    assert_eq!(result.len(), 181);
    tracing::info!(windows = result.len(), "config-driven run finished");

    // channel 1 is an exact multiple of channel 0
    for value in result.pair_series(0, 1)? {
        assert_relative_eq!(value, 1.0, epsilon = 1e-12);
    }
    for m in &result {
        assert!(m.is_symmetric(1e-12));
        for d in m.diagonal() {
            assert_relative_eq!(d, 1.0, epsilon = 1e-12);
        }
    }
    Ok(())
}

#[test]
fn test_facade_matches_direct_call() -> Result<()> {
    init_tracing();

    let matrix = correlated_channels(60, 8)?;
    let via_facade = rolling_cosine_similarity(&matrix, 7)?;
    let via_crate = rolling_cosine::rolling_similarity::rolling_cosine_similarity(&matrix, 7)?;
    assert_eq!(via_facade, via_crate);

    let window = matrix.window(0, 7)?;
    assert_eq!(&via_facade[0], &cosine_similarity_matrix(&window));
    Ok(())
}

#[test]
fn test_errors_convert_to_anyhow() {
    init_tracing();

    let err: anyhow::Error = RollingConfig::from_json(r#"{"window_size": 5, "strategy": "fft"}"#)
        .unwrap_err()
        .into();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::Config(_))
    ));

    let err: anyhow::Error = RollingConfig::from_json(r#"{"window_size": 0}"#)
        .unwrap_err()
        .into();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InvalidWindowSize { window_size: 0 })
    ));
}

#[test]
fn test_cancelled_run() -> Result<()> {
    init_tracing();

    let matrix = correlated_channels(50, 1)?;
    let rolling = RollingCosine::new(scalar_sequential(), RollingConfig::new(5))?;
    let cancel = AtomicBool::new(true);

    match rolling.compute_with_cancel(&matrix, &cancel) {
        Err(Error::Cancelled { completed, total }) => {
            assert_eq!(completed, 0);
            assert_eq!(total, 46);
        }
        other => panic!("expected Cancelled, got {other:?}"),
    }
    Ok(())
}
