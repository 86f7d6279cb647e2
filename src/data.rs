//! Labeled data points for training and evaluation.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A labeled data point: a class label plus a bag of feature counts.
///
/// Feature values are occurrence counts and must be non-negative. The field
/// is signed so that malformed external data (e.g. a hand-edited JSON
/// dataset) surfaces as an [`InvalidFeatureValue`] error at training or
/// prediction time instead of wrapping silently during deserialization.
///
/// [`InvalidFeatureValue`]: crate::error::BayesicError::InvalidFeatureValue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Class label.
    pub klass: String,
    /// Feature name -> occurrence count.
    pub features: HashMap<String, i64>,
}

impl DataPoint {
    /// Create a new data point with the given class label and no features.
    pub fn new<S: Into<String>>(klass: S) -> Self {
        DataPoint {
            klass: klass.into(),
            features: HashMap::new(),
        }
    }

    /// Add a feature count, consuming and returning the data point.
    ///
    /// Adding the same feature twice accumulates the counts.
    pub fn with_feature<S: Into<String>>(mut self, name: S, count: i64) -> Self {
        *self.features.entry(name.into()).or_insert(0) += count;
        self
    }
}

/// Load data points from a JSON file containing an array of data points.
pub fn load_data_points<P: AsRef<Path>>(path: P) -> Result<Vec<DataPoint>> {
    let content = std::fs::read_to_string(path)?;
    let data_points: Vec<DataPoint> = serde_json::from_str(&content)?;
    Ok(data_points)
}
