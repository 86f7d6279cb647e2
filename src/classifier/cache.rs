//! Generation-tagged memoization for estimator results.
//!
//! Priors, likelihoods, and the vocabulary size are pure functions of the
//! classifier's counters, so their values can be reused across the many
//! estimator calls a single prediction pass makes. Reuse is only sound
//! while the counters are unchanged: every cached value is tagged with the
//! counter generation it was computed under, and a lookup against a newer
//! generation drops the whole cache first. Values cached before a training
//! call can therefore never be served after it.

use ahash::AHashMap;

/// Memoized estimator results, valid for a single counter generation.
#[derive(Debug, Default)]
pub(crate) struct EstimatorCache {
    /// Counter generation the stored values were computed under.
    generation: u64,
    /// Class label -> smoothed prior.
    priors: AHashMap<String, f64>,
    /// Class label -> feature name -> smoothed likelihood.
    likelihoods: AHashMap<String, AHashMap<String, f64>>,
    /// Distinct feature names across all classes.
    vocabulary_size: Option<usize>,
}

impl EstimatorCache {
    pub(crate) fn new() -> Self {
        EstimatorCache::default()
    }

    /// Align the cache with the given counter generation, dropping every
    /// stored value if it was computed under an older one.
    ///
    /// Must be called before any lookup or store.
    pub(crate) fn sync(&mut self, generation: u64) {
        if self.generation != generation {
            self.priors.clear();
            self.likelihoods.clear();
            self.vocabulary_size = None;
            self.generation = generation;
        }
    }

    pub(crate) fn prior(&self, klass: &str) -> Option<f64> {
        self.priors.get(klass).copied()
    }

    pub(crate) fn store_prior(&mut self, klass: &str, value: f64) {
        self.priors.insert(klass.to_string(), value);
    }

    pub(crate) fn likelihood(&self, feature: &str, klass: &str) -> Option<f64> {
        self.likelihoods
            .get(klass)
            .and_then(|by_feature| by_feature.get(feature))
            .copied()
    }

    pub(crate) fn store_likelihood(&mut self, feature: &str, klass: &str, value: f64) {
        self.likelihoods
            .entry(klass.to_string())
            .or_default()
            .insert(feature.to_string(), value);
    }

    pub(crate) fn vocabulary_size(&self) -> Option<usize> {
        self.vocabulary_size
    }

    pub(crate) fn store_vocabulary_size(&mut self, value: usize) {
        self.vocabulary_size = Some(value);
    }
}
