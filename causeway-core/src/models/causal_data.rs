use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time-stamped multivariate observation.
///
/// Immutable once constructed: the engine never mutates ingested samples,
/// which is what makes concurrent analyses over the same data safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalData {
    /// Observation time.
    pub timestamp: DateTime<Utc>,
    /// Variable name → numeric value. Keys are unique per sample.
    pub variables: HashMap<String, f64>,
    /// Free-form metadata attached by the producer.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Where the sample came from (collector, feed, subsystem).
    #[serde(default)]
    pub source: String,
    /// Context label (environment, project, run id).
    #[serde(default)]
    pub context: String,
}

impl CausalData {
    /// Create a sample with just a timestamp and variable values.
    pub fn new(timestamp: DateTime<Utc>, variables: HashMap<String, f64>) -> Self {
        Self {
            timestamp,
            variables,
            metadata: HashMap::new(),
            source: String::new(),
            context: String::new(),
        }
    }

    /// Attach a source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Attach a context label.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
