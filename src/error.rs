//! Error types for the Bayesic library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`BayesicError`] enum. Errors are fatal to the call that raised them;
//! the library never retries on its own.
//!
//! # Examples
//!
//! ```
//! use bayesic::error::{BayesicError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BayesicError::no_training_data("classifier has not been trained"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Bayesic operations.
#[derive(Error, Debug)]
pub enum BayesicError {
    /// I/O errors (reading datasets from disk).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A feature count supplied to the classifier is not a non-negative integer.
    #[error("invalid feature value for '{feature}': {value} (feature counts must be >= 0)")]
    InvalidFeatureValue { feature: String, value: i64 },

    /// An estimator or prediction was requested before any training data was seen.
    #[error("no training data: {0}")]
    NoTrainingData(String),

    /// A metric denominator was zero during evaluation.
    #[error("undefined metric: {0}")]
    UndefinedMetric(String),

    /// Invalid classifier configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BayesicError.
pub type Result<T> = std::result::Result<T, BayesicError>;

impl BayesicError {
    /// Create a new invalid feature value error.
    pub fn invalid_feature_value<S: Into<String>>(feature: S, value: i64) -> Self {
        BayesicError::InvalidFeatureValue {
            feature: feature.into(),
            value,
        }
    }

    /// Create a new no training data error.
    pub fn no_training_data<S: Into<String>>(msg: S) -> Self {
        BayesicError::NoTrainingData(msg.into())
    }

    /// Create a new undefined metric error.
    pub fn undefined_metric<S: Into<String>>(msg: S) -> Self {
        BayesicError::UndefinedMetric(msg.into())
    }

    /// Create a new invalid configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BayesicError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BayesicError::invalid_feature_value("word", -3);
        assert_eq!(
            err.to_string(),
            "invalid feature value for 'word': -3 (feature counts must be >= 0)"
        );

        let err = BayesicError::undefined_metric("precision: no positive predictions");
        assert!(err.to_string().starts_with("undefined metric:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing dataset");
        let err: BayesicError = io_err.into();
        assert!(matches!(err, BayesicError::Io(_)));
    }
}
