//! # Bayesic
//!
//! A lightweight multinomial Naive Bayes classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Bag-of-features model over integer occurrence counts
//! - Laplace-smoothed priors and likelihoods (tunable constant)
//! - Log-space scoring to avoid floating point underflow
//! - Incremental (streaming) training
//! - Generation-tagged memoization of estimator results
//! - Precision/recall/F1 evaluation harness
//!
//! ## Example
//!
//! ```
//! use bayesic::prelude::*;
//!
//! # fn main() -> bayesic::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.train(&[
//!     DataPoint::new("spam").with_feature("winner", 3).with_feature("free", 2),
//!     DataPoint::new("ham").with_feature("meeting", 2).with_feature("agenda", 1),
//! ])?;
//!
//! let message = DataPoint::new("?").with_feature("free", 1);
//! assert_eq!(classifier.predict(&message)?, "spam");
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod data;
pub mod error;
pub mod evaluate;

pub mod prelude {
    pub use crate::classifier::{DEFAULT_SMOOTHING, NaiveBayesClassifier};
    pub use crate::data::{DataPoint, load_data_points};
    pub use crate::error::{BayesicError, Result};
    pub use crate::evaluate::{ConfusionMatrix, Metrics, evaluate};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
