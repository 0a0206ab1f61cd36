use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A variable associated with both sides of one or more relationships,
/// capable of making them spurious.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfoundingFactor {
    /// The confounding variable.
    pub variable: String,
    /// Ids of the relationships this variable confounds.
    pub affected_relationships: Vec<String>,
    /// Control impact in [0, 1]: how much the cause–effect correlation
    /// moves when this variable is controlled for.
    pub impact: f64,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
    /// How the confounder was detected.
    pub detection_method: String,
    /// Human-readable evidence lines.
    pub evidence: Vec<String>,
    /// Auxiliary statistics (association p-values, partial correlation, ...).
    pub statistics: HashMap<String, f64>,
}

/// Aggregate metrics over a confounding scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfoundingMetrics {
    /// Number of distinct confounders found.
    pub confounder_count: usize,
    pub average_impact: f64,
    pub max_impact: f64,
    pub average_confidence: f64,
    /// Fraction of analyzed relationships affected by at least one confounder.
    pub affected_relationship_ratio: f64,
    /// Confounders with impact above 0.7.
    pub high_impact_count: usize,
}
