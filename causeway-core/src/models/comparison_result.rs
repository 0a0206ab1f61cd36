use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis_result::CausalAnalysisResult;

/// A relationship present in only one of the two compared datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipDelta {
    /// Relationship label (`cause->effect`).
    pub label: String,
    /// Strength in the run where the relationship exists.
    pub strength: f64,
    pub confidence: f64,
}

/// Output of comparing causal structure across two datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalComparisonResult {
    pub baseline: CausalAnalysisResult,
    pub comparison: CausalAnalysisResult,
    /// Jaccard similarity of the two relationship sets, in [0, 1].
    pub similarity: f64,
    /// Relationships present only in the comparison run, strongest first.
    pub added: Vec<RelationshipDelta>,
    /// Relationships present only in the baseline run, strongest first.
    pub removed: Vec<RelationshipDelta>,
    /// Label → (comparison strength − baseline strength) over common
    /// relationships.
    pub strength_deltas: HashMap<String, f64>,
    /// Directional recommendation from the overall-confidence delta.
    pub recommendation: String,
    pub compared_at: DateTime<Utc>,
}
