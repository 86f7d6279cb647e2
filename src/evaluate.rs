//! Classifier evaluation: confusion matrix and precision/recall/F1.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::NaiveBayesClassifier;
use crate::data::DataPoint;
use crate::error::{BayesicError, Result};

/// Data points between progress log lines during evaluation.
const PROGRESS_INTERVAL: usize = 1000;

/// Binary confusion matrix relative to a single class of interest.
///
/// Outcomes are bucketed by whether the prediction matched the ground
/// truth and whether the prediction named the class of interest:
///
/// - true positive: actual == predicted == class of interest
/// - true negative: actual == predicted, predicted != class of interest
/// - false positive: actual != predicted, predicted == class of interest
/// - false negative: actual != predicted, predicted != class of interest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: u64,
    pub false_positives: u64,
    pub true_negatives: u64,
    pub false_negatives: u64,
}

impl ConfusionMatrix {
    /// Create an empty confusion matrix.
    pub fn new() -> Self {
        ConfusionMatrix::default()
    }

    /// Record one prediction outcome.
    pub fn record(&mut self, actual: &str, predicted: &str, class_of_interest: &str) {
        if actual == predicted {
            if predicted == class_of_interest {
                self.true_positives += 1;
            } else {
                self.true_negatives += 1;
            }
        } else if predicted == class_of_interest {
            self.false_positives += 1;
        } else {
            self.false_negatives += 1;
        }
    }

    /// Total number of recorded outcomes.
    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// Precision: `tp / (tp + fp)`.
    ///
    /// Fails with [`BayesicError::UndefinedMetric`] when nothing was
    /// predicted as the class of interest.
    pub fn precision(&self) -> Result<f64> {
        let denominator = self.true_positives + self.false_positives;
        if denominator == 0 {
            return Err(BayesicError::undefined_metric(
                "precision: no data point was predicted as the class of interest",
            ));
        }
        Ok(self.true_positives as f64 / denominator as f64)
    }

    /// Recall: `tp / (tp + fn)`.
    ///
    /// Fails with [`BayesicError::UndefinedMetric`] when the denominator
    /// is zero.
    pub fn recall(&self) -> Result<f64> {
        let denominator = self.true_positives + self.false_negatives;
        if denominator == 0 {
            return Err(BayesicError::undefined_metric(
                "recall: no true positives or false negatives were recorded",
            ));
        }
        Ok(self.true_positives as f64 / denominator as f64)
    }

    /// F1 score: the harmonic mean of precision and recall.
    ///
    /// Fails with [`BayesicError::UndefinedMetric`] when either component
    /// is undefined or both are zero.
    pub fn f1(&self) -> Result<f64> {
        let precision = self.precision()?;
        let recall = self.recall()?;
        if precision + recall == 0.0 {
            return Err(BayesicError::undefined_metric(
                "f1: precision and recall are both zero",
            ));
        }
        Ok(2.0 * precision * recall / (precision + recall))
    }
}

/// Evaluation metrics for one class of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// Fraction of positive predictions that were correct.
    pub precision: f64,
    /// Fraction of actual positives that were found.
    pub recall: f64,
}

/// Evaluate a trained classifier against labeled data.
///
/// Predicts every data point, tallies outcomes into a [`ConfusionMatrix`]
/// relative to `class_of_interest`, and returns the derived metrics.
/// Prediction errors and undefined metrics (zero denominators) are
/// surfaced rather than reported as NaN or infinity.
///
/// # Examples
///
/// ```
/// use bayesic::classifier::NaiveBayesClassifier;
/// use bayesic::data::DataPoint;
/// use bayesic::evaluate::evaluate;
///
/// # fn main() -> bayesic::error::Result<()> {
/// let mut classifier = NaiveBayesClassifier::new();
/// classifier.train(&[
///     DataPoint::new("pos").with_feature("good", 2),
///     DataPoint::new("neg").with_feature("bad", 2),
/// ])?;
///
/// let held_out = vec![
///     DataPoint::new("pos").with_feature("good", 1),
///     DataPoint::new("neg").with_feature("bad", 3),
/// ];
/// let metrics = evaluate(&classifier, "pos", &held_out)?;
/// assert_eq!(metrics.f1, 1.0);
/// # Ok(())
/// # }
/// ```
pub fn evaluate(
    classifier: &NaiveBayesClassifier,
    class_of_interest: &str,
    evaluation_data: &[DataPoint],
) -> Result<Metrics> {
    let mut matrix = ConfusionMatrix::new();
    for (count, data_point) in evaluation_data.iter().enumerate() {
        if (count + 1) % PROGRESS_INTERVAL == 0 {
            debug!("evaluation progress: {} / {}", count + 1, evaluation_data.len());
        }
        let prediction = classifier.predict(data_point)?;
        matrix.record(&data_point.klass, &prediction, class_of_interest);
    }

    let precision = matrix.precision()?;
    let recall = matrix.recall()?;
    let f1 = matrix.f1()?;
    debug!(
        "evaluated {} data points for class '{}': precision {:.4}, recall {:.4}, f1 {:.4}",
        matrix.total(),
        class_of_interest,
        precision,
        recall,
        f1
    );

    Ok(Metrics { f1, precision, recall })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_from_outcomes(outcomes: &[(&str, &str)], class_of_interest: &str) -> ConfusionMatrix {
        let mut matrix = ConfusionMatrix::new();
        for (actual, predicted) in outcomes {
            matrix.record(actual, predicted, class_of_interest);
        }
        matrix
    }

    #[test]
    fn test_record_buckets() {
        // Predictions [pos, pos, neg, neg] against actuals [pos, neg, neg, neg].
        let matrix = matrix_from_outcomes(
            &[("pos", "pos"), ("neg", "pos"), ("neg", "neg"), ("neg", "neg")],
            "pos",
        );
        assert_eq!(matrix.true_positives, 1);
        assert_eq!(matrix.false_positives, 1);
        assert_eq!(matrix.true_negatives, 2);
        assert_eq!(matrix.false_negatives, 0);
        assert_eq!(matrix.total(), 4);
    }

    #[test]
    fn test_metrics_from_known_counts() {
        let matrix = matrix_from_outcomes(
            &[("pos", "pos"), ("neg", "pos"), ("neg", "neg"), ("neg", "neg")],
            "pos",
        );
        assert_eq!(matrix.precision().unwrap(), 0.5);
        assert_eq!(matrix.recall().unwrap(), 1.0);
        let f1 = matrix.f1().unwrap();
        assert!((f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_missed_positive_is_false_negative() {
        let matrix = matrix_from_outcomes(&[("pos", "neg")], "pos");
        assert_eq!(matrix.false_negatives, 1);
        assert_eq!(matrix.true_positives, 0);
    }

    #[test]
    fn test_undefined_precision() {
        // The class of interest never appears in actuals or predictions.
        let matrix = matrix_from_outcomes(&[("a", "a"), ("b", "a")], "pos");
        assert!(matches!(
            matrix.precision(),
            Err(BayesicError::UndefinedMetric(_))
        ));
        assert!(matches!(matrix.f1(), Err(BayesicError::UndefinedMetric(_))));
    }

    #[test]
    fn test_undefined_recall() {
        // Predicted positive once, but no actual positives and no false
        // negatives means recall is 0/0.
        let matrix = matrix_from_outcomes(&[("neg", "pos")], "pos");
        assert!(matrix.precision().is_ok());
        assert!(matches!(
            matrix.recall(),
            Err(BayesicError::UndefinedMetric(_))
        ));
    }

    #[test]
    fn test_zero_f1_is_undefined() {
        // Precision and recall both defined but zero: tp=0, fp>0, fn>0.
        let matrix = matrix_from_outcomes(&[("neg", "pos"), ("pos", "neg")], "pos");
        assert_eq!(matrix.precision().unwrap(), 0.0);
        assert_eq!(matrix.recall().unwrap(), 0.0);
        assert!(matches!(matrix.f1(), Err(BayesicError::UndefinedMetric(_))));
    }
}
