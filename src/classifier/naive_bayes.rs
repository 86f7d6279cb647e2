//! Multinomial Naive Bayes classifier with Laplace smoothing.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};
use parking_lot::Mutex;

use crate::classifier::cache::EstimatorCache;
use crate::data::DataPoint;
use crate::error::{BayesicError, Result};

/// Default Laplace smoothing constant.
pub const DEFAULT_SMOOTHING: f64 = 0.01;

/// A multinomial Naive Bayes classifier over integer feature counts.
///
/// Training accumulates sufficient statistics (total, per-class, and
/// per-class-per-feature counts); prediction ranks classes by the sum of
/// the log prior and the log likelihood of every observed feature
/// occurrence. All probability estimates are Laplace-smoothed, so unseen
/// (feature, class) pairs keep a strictly positive probability.
///
/// Training is incremental: each [`train`](Self::train) call adds to the
/// existing counters, so training on two batches is equivalent to training
/// once on their concatenation.
///
/// # Examples
///
/// ```
/// use bayesic::classifier::NaiveBayesClassifier;
/// use bayesic::data::DataPoint;
///
/// # fn main() -> bayesic::error::Result<()> {
/// let mut classifier = NaiveBayesClassifier::new();
/// classifier.train(&[
///     DataPoint::new("pos").with_feature("good", 2),
///     DataPoint::new("neg").with_feature("bad", 2),
/// ])?;
///
/// let prediction = classifier.predict(&DataPoint::new("?").with_feature("good", 1))?;
/// assert_eq!(prediction, "pos");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NaiveBayesClassifier {
    /// Total number of data points seen.
    total_count: u64,
    /// Data points seen per class. Ordered so class enumeration during
    /// prediction is lexicographic, which makes argmax tie-breaks stable.
    class_counts: BTreeMap<String, u64>,
    /// Per-class cumulative feature occurrence counts.
    feature_counts: BTreeMap<String, BTreeMap<String, u64>>,
    /// Laplace smoothing constant, fixed at construction.
    smoothing: f64,
    /// Counter version, bumped on every mutation. Tags cache entries.
    generation: u64,
    /// Memoized estimator results for the current generation.
    cache: Mutex<EstimatorCache>,
}

impl NaiveBayesClassifier {
    /// Create a classifier with the default smoothing constant.
    pub fn new() -> Self {
        NaiveBayesClassifier {
            total_count: 0,
            class_counts: BTreeMap::new(),
            feature_counts: BTreeMap::new(),
            smoothing: DEFAULT_SMOOTHING,
            generation: 0,
            cache: Mutex::new(EstimatorCache::new()),
        }
    }

    /// Create a classifier with a custom Laplace smoothing constant.
    ///
    /// The constant must be finite and strictly positive; zero smoothing
    /// would assign zero probability to unseen features and make the
    /// estimator denominators data-dependent zeros.
    pub fn with_smoothing(smoothing: f64) -> Result<Self> {
        if !smoothing.is_finite() || smoothing <= 0.0 {
            return Err(BayesicError::config(format!(
                "smoothing constant must be finite and > 0, got {smoothing}"
            )));
        }
        let mut classifier = NaiveBayesClassifier::new();
        classifier.smoothing = smoothing;
        Ok(classifier)
    }

    /// The configured Laplace smoothing constant.
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Total number of data points trained on.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of data points trained on for the given class.
    pub fn class_count(&self, klass: &str) -> u64 {
        self.class_counts.get(klass).copied().unwrap_or(0)
    }

    /// Class labels observed during training, in lexicographic order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_counts.keys().map(|k| k.as_str())
    }

    /// Whether any training data has been seen.
    pub fn is_trained(&self) -> bool {
        self.total_count > 0
    }

    /// Train on a batch of labeled data points.
    ///
    /// Counters accumulate across calls; there is no reset. Fails with
    /// [`BayesicError::InvalidFeatureValue`] on the first negative feature
    /// count; the offending data point is not applied, but points earlier
    /// in the batch remain counted.
    pub fn train(&mut self, dataset: &[DataPoint]) -> Result<()> {
        for data_point in dataset {
            self.apply_data_point(data_point)?;
        }
        debug!(
            "training complete: {} data points, {} classes, vocabulary size {}",
            self.total_count,
            self.class_counts.len(),
            self.vocabulary_size()
        );
        Ok(())
    }

    /// Validate and apply a single data point, bumping the generation.
    fn apply_data_point(&mut self, data_point: &DataPoint) -> Result<()> {
        for (feature, &value) in &data_point.features {
            if value < 0 {
                return Err(BayesicError::invalid_feature_value(feature, value));
            }
        }

        self.total_count += 1;
        *self
            .class_counts
            .entry(data_point.klass.clone())
            .or_insert(0) += 1;

        let class_features = self
            .feature_counts
            .entry(data_point.klass.clone())
            .or_default();
        for (feature, &value) in &data_point.features {
            *class_features.entry(feature.clone()).or_insert(0) += value as u64;
        }

        // Any cached estimator value is now stale.
        self.generation += 1;
        Ok(())
    }

    /// Smoothed prior probability of a class.
    ///
    /// `(α + class_count) / (K·α + total_count)` with K the number of
    /// observed classes. Always in (0, 1]. Fails with
    /// [`BayesicError::NoTrainingData`] before any training.
    pub fn prior(&self, klass: &str) -> Result<f64> {
        if self.class_counts.is_empty() {
            return Err(BayesicError::no_training_data(
                "prior requested before any training data was seen",
            ));
        }

        let mut cache = self.cache.lock();
        cache.sync(self.generation);
        if let Some(value) = cache.prior(klass) {
            return Ok(value);
        }

        let class_count = self.class_counts.get(klass).copied().unwrap_or(0);
        let numerator = self.smoothing + class_count as f64;
        let denominator =
            self.class_counts.len() as f64 * self.smoothing + self.total_count as f64;
        let value = numerator / denominator;

        cache.store_prior(klass, value);
        Ok(value)
    }

    /// Number of distinct feature names observed across all classes.
    pub fn vocabulary_size(&self) -> usize {
        let mut cache = self.cache.lock();
        cache.sync(self.generation);
        if let Some(value) = cache.vocabulary_size() {
            return value;
        }

        let mut vocabulary: BTreeSet<&str> = BTreeSet::new();
        for class_features in self.feature_counts.values() {
            vocabulary.extend(class_features.keys().map(|f| f.as_str()));
        }
        let value = vocabulary.len();

        cache.store_vocabulary_size(value);
        value
    }

    /// Smoothed likelihood of a feature given a class.
    ///
    /// `(α + feature_count) / (V·α + class_total_feature_count)` with V the
    /// vocabulary size. Unseen (feature, class) pairs get the strictly
    /// positive smoothed value rather than zero. Always in (0, 1). Fails
    /// with [`BayesicError::NoTrainingData`] before any training.
    pub fn likelihood(&self, feature: &str, klass: &str) -> Result<f64> {
        if self.class_counts.is_empty() {
            return Err(BayesicError::no_training_data(
                "likelihood requested before any training data was seen",
            ));
        }

        {
            let mut cache = self.cache.lock();
            cache.sync(self.generation);
            if let Some(value) = cache.likelihood(feature, klass) {
                return Ok(value);
            }
        }

        // The cache lock is not held here: vocabulary_size takes it again.
        let vocabulary_size = self.vocabulary_size();

        let class_features = self.feature_counts.get(klass);
        let feature_count = class_features
            .and_then(|by_feature| by_feature.get(feature))
            .copied()
            .unwrap_or(0);
        let class_total: u64 = class_features
            .map(|by_feature| by_feature.values().sum())
            .unwrap_or(0);

        let numerator = self.smoothing + feature_count as f64;
        let denominator = vocabulary_size as f64 * self.smoothing + class_total as f64;
        let value = numerator / denominator;

        self.cache.lock().store_likelihood(feature, klass, value);
        Ok(value)
    }

    /// Predict the most probable class for a data point.
    ///
    /// Scores every observed class with the log prior plus one log
    /// likelihood term per feature occurrence (a feature counted n times
    /// contributes n terms). Scores are combined in log space to avoid
    /// underflow from multiplying many small probabilities. On exactly
    /// equal scores the lexicographically smallest class label wins.
    ///
    /// The ground-truth label on the data point, if any, is ignored.
    pub fn predict(&self, data_point: &DataPoint) -> Result<String> {
        if self.class_counts.is_empty() {
            return Err(BayesicError::no_training_data(
                "predict called before any training data was seen",
            ));
        }

        // Sorted feature order keeps the floating-point sum reproducible
        // regardless of the data point's map iteration order.
        let mut features: Vec<(&str, i64)> = data_point
            .features
            .iter()
            .map(|(feature, &value)| (feature.as_str(), value))
            .collect();
        features.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for &(feature, value) in &features {
            if value < 0 {
                return Err(BayesicError::invalid_feature_value(feature, value));
            }
        }

        let mut best: Option<(&str, f64)> = None;
        for klass in self.class_counts.keys() {
            let mut score = self.prior(klass)?.ln();
            for &(feature, value) in &features {
                if value == 0 {
                    continue;
                }
                score += value as f64 * self.likelihood(feature, klass)?.ln();
            }
            trace!("class '{klass}' log score {score}");

            // Strictly greater, so ties keep the earlier (smaller) label.
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((klass, score)),
            }
        }

        let (prediction, _) = best.ok_or_else(|| {
            BayesicError::no_training_data("predict called before any training data was seen")
        })?;
        trace!("predicted class '{prediction}'");
        Ok(prediction.to_string())
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        NaiveBayesClassifier::new()
    }
}
