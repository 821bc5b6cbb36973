//! Configuration types for rolling similarity runs

use rolling_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Kernel used to compute each window's matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityStrategy {
    /// Pairwise loop, norms recomputed for every pair
    Naive,
    /// `Aᵀ·A` Gram matrix divided by the outer product of column norms
    #[default]
    Gram,
    /// Explicit per-column loops over the engine's compute primitives
    Fused,
}

impl SimilarityStrategy {
    /// Get the name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Gram => "gram",
            Self::Fused => "fused",
        }
    }
}

/// Value written where a channel is all zeros within the window
///
/// Applies to every entry in that channel's row and column, diagonal
/// included, and only for the affected window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroNormPolicy {
    /// Not-a-number, as plain `0 / 0` division produces
    #[default]
    Nan,
    /// Treat the degenerate channel as orthogonal to everything
    Zero,
}

impl ZeroNormPolicy {
    #[inline]
    pub fn fill_value(self) -> f64 {
        match self {
            Self::Nan => f64::NAN,
            Self::Zero => 0.0,
        }
    }
}

fn default_allow_empty_result() -> bool {
    true
}

/// Parameters for a rolling cosine similarity run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingConfig {
    /// Rows per window (at least 1)
    pub window_size: usize,

    #[serde(default)]
    pub strategy: SimilarityStrategy,

    #[serde(default)]
    pub zero_norm_policy: ZeroNormPolicy,

    /// Return an empty result (rather than an error) when the window is
    /// longer than the series
    #[serde(default = "default_allow_empty_result")]
    pub allow_empty_result: bool,
}

impl RollingConfig {
    /// Defaults for everything except the window size
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            strategy: SimilarityStrategy::default(),
            zero_norm_policy: ZeroNormPolicy::default(),
            allow_empty_result: default_allow_empty_result(),
        }
    }

    pub fn with_strategy(mut self, strategy: SimilarityStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_zero_norm_policy(mut self, policy: ZeroNormPolicy) -> Self {
        self.zero_norm_policy = policy;
        self
    }

    pub fn with_allow_empty_result(mut self, allow: bool) -> Self {
        self.allow_empty_result = allow;
        self
    }

    /// Check parameters that can be checked without the input
    pub fn validate(&self) -> Result<()> {
        if self.window_size < 1 {
            return Err(Error::InvalidWindowSize {
                window_size: self.window_size,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// ```rust
    /// use rolling_similarity::{RollingConfig, SimilarityStrategy};
    ///
    /// let config = RollingConfig::from_json(r#"{"window_size": 20, "strategy": "fused"}"#).unwrap();
    /// assert_eq!(config.window_size, 20);
    /// assert_eq!(config.strategy, SimilarityStrategy::Fused);
    /// assert!(config.allow_empty_result);
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| Error::Config(format!("invalid rolling config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Config(format!("cannot serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RollingConfig::new(5);
        assert_eq!(config.strategy, SimilarityStrategy::Gram);
        assert_eq!(config.zero_norm_policy, ZeroNormPolicy::Nan);
        assert!(config.allow_empty_result);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_window_invalid() {
        match RollingConfig::new(0).validate() {
            Err(Error::InvalidWindowSize { window_size }) => assert_eq!(window_size, 0),
            other => panic!("expected InvalidWindowSize, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_methods() {
        let config = RollingConfig::new(3)
            .with_strategy(SimilarityStrategy::Naive)
            .with_zero_norm_policy(ZeroNormPolicy::Zero)
            .with_allow_empty_result(false);
        assert_eq!(config.strategy.name(), "naive");
        assert_eq!(config.zero_norm_policy.fill_value(), 0.0);
        assert!(!config.allow_empty_result);
    }

    #[test]
    fn test_json_round_trip() {
        let config = RollingConfig::new(12)
            .with_strategy(SimilarityStrategy::Fused)
            .with_zero_norm_policy(ZeroNormPolicy::Zero);
        let text = config.to_json().unwrap();
        assert!(text.contains("\"fused\""));
        assert!(text.contains("\"zero\""));
        assert_eq!(RollingConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            RollingConfig::from_json(r#"{"window_size": 4, "strategy": "fft"}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            RollingConfig::from_json(r#"{"strategy": "gram"}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            RollingConfig::from_json(r#"{"window_size": 0}"#),
            Err(Error::InvalidWindowSize { window_size: 0 })
        ));
    }

    #[test]
    fn test_nan_fill_value() {
        assert!(ZeroNormPolicy::Nan.fill_value().is_nan());
    }
}
