//! Error types for rolling similarity analysis
//!
//! Provides a unified error type for all rolling-cosine crates.

use thiserror::Error;

/// Core error type for rolling similarity operations
#[derive(Error, Debug)]
pub enum Error {
    /// Window length outside the accepted range
    #[error("Invalid window size: {window_size} (must be at least 1)")]
    InvalidWindowSize { window_size: usize },

    /// Input matrix is empty, ragged or does not match its declared shape
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Row, channel or window index outside the valid range
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Run stopped by a cancellation request
    #[error("Cancelled after {completed} of {total} windows")]
    Cancelled { completed: usize, total: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a row whose length differs from the first row
    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch(format!(
            "row {row} has {actual} columns, expected {expected}"
        ))
    }

    /// Create an error for a matrix with no rows or no columns
    pub fn empty_matrix(rows: usize, cols: usize) -> Self {
        Self::ShapeMismatch(format!(
            "matrix must have at least 1 row and 1 column, got {rows}x{cols}"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::ShapeMismatch(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a channel index past the last column
    pub fn channel_out_of_range(channel: usize, n_channels: usize) -> Self {
        Self::IndexOutOfRange(format!(
            "channel {channel} out of range for {n_channels} channels"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidWindowSize { window_size: 0 };
        assert_eq!(err.to_string(), "Invalid window size: 0 (must be at least 1)");

        let err = Error::ShapeMismatch("matrix is ragged".to_string());
        assert_eq!(err.to_string(), "Shape mismatch: matrix is ragged");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 10 samples, got 5");

        let err = Error::IndexOutOfRange("window 7".to_string());
        assert_eq!(err.to_string(), "Index out of range: window 7");

        let err = Error::InvalidParameter("num_threads must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: num_threads must be positive");

        let err = Error::Config("unknown strategy".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown strategy");

        let err = Error::Execution("thread pool exhausted".to_string());
        assert_eq!(err.to_string(), "Execution error: thread pool exhausted");

        let err = Error::Cancelled { completed: 3, total: 8 };
        assert_eq!(err.to_string(), "Cancelled after 3 of 8 windows");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::ragged_row(2, 3, 4);
        assert_eq!(err.to_string(), "Shape mismatch: row 2 has 4 columns, expected 3");

        let err = Error::empty_matrix(0, 3);
        assert_eq!(
            err.to_string(),
            "Shape mismatch: matrix must have at least 1 row and 1 column, got 0x3"
        );

        let err = Error::size_mismatch(12, 11, "row-major buffer");
        assert_eq!(
            err.to_string(),
            "Shape mismatch: Size mismatch in row-major buffer: expected 12, got 11"
        );

        let err = Error::channel_out_of_range(5, 2);
        assert!(matches!(err, Error::IndexOutOfRange(_)));
        assert!(err.to_string().contains("channel 5"));
        assert!(err.to_string().contains("2 channels"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_patterns() {
        // Pattern 1: reject zero-length windows before any work
        fn check_window(window_size: usize) -> Result<()> {
            if window_size < 1 {
                return Err(Error::InvalidWindowSize { window_size });
            }
            Ok(())
        }

        assert!(check_window(0).is_err());
        assert!(check_window(1).is_ok());

        // Pattern 2: the offending value survives into the error
        match check_window(0) {
            Err(Error::InvalidWindowSize { window_size }) => assert_eq!(window_size, 0),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::InvalidWindowSize { window_size: 0 };
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidWindowSize"));
        assert!(debug_str.contains("window_size"));
    }
}
