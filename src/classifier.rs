//! Naive Bayes classification.
//!
//! The classifier accumulates integer sufficient statistics from labeled
//! data points and ranks classes by Laplace-smoothed log-posterior scores.
//! Estimator results are memoized per counter generation, so repeated
//! predictions over a dataset do not recompute priors and likelihoods.

pub(crate) mod cache;
pub mod naive_bayes;

pub use naive_bayes::{DEFAULT_SMOOTHING, NaiveBayesClassifier};
