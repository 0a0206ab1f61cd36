use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confounding::{ConfoundingFactor, ConfoundingMetrics};
use super::equation::StructuralEquation;
use super::graph::CausalGraph;
use super::intervention::InterventionEffect;
use super::relationship::CausalRelationship;

/// Per-relationship statistical validation outcome.
///
/// Four checks, each scored in [0, 1]: statistical significance of the raw
/// correlation, temporal precedence, confounding-control robustness, and
/// dose-response monotonicity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub relationship_id: String,
    /// Score per named check.
    pub checks: HashMap<String, f64>,
    /// Mean of the check scores.
    pub overall_score: f64,
    /// Whether the overall score cleared the validation threshold.
    pub passed: bool,
}

/// Aggregate fit statistics across all fitted structural equations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelStatistics {
    /// Mean R² across equations.
    pub overall_fit: f64,
    /// Mean adjusted R² across equations.
    pub overall_adjusted_fit: f64,
    pub equation_count: usize,
    /// Total fitted parameters, intercepts included.
    pub parameter_count: usize,
    /// Mean residual standard error across equations.
    pub mean_std_error: f64,
}

/// Kind of generated insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    StrongCausality,
    ConfoundingDetected,
    InterventionOpportunity,
}

/// A generated, human-readable analysis insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub description: String,
    /// Score backing the insight (mean strength, max impact, ...).
    pub score: f64,
    /// Ids of the artifacts the insight refers to.
    pub related_ids: Vec<String>,
}

/// A generated, actionable recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Short action label ("optimize", "investigate").
    pub action: String,
    /// Variable or relationship the action targets.
    pub target: String,
    pub rationale: String,
    /// Priority in [0, 1], higher is more urgent.
    pub priority: f64,
}

/// Complete output of one single-shot causal analysis.
///
/// A pure function of (dataset, config): nothing is carried over between
/// calls and identical inputs reproduce identical results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalAnalysisResult {
    pub relationships: Vec<CausalRelationship>,
    pub graph: CausalGraph,
    pub equations: Vec<StructuralEquation>,
    pub interventions: Vec<InterventionEffect>,
    pub confounders: Vec<ConfoundingFactor>,
    pub confounding_metrics: ConfoundingMetrics,
    /// Relationship id → blended causal strength.
    pub causal_strengths: HashMap<String, f64>,
    pub validation: Vec<ValidationOutcome>,
    pub model_statistics: ModelStatistics,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
    /// Mean of average strength, average validation score, and overall fit.
    pub overall_confidence: f64,
    pub analyzed_at: DateTime<Utc>,
    pub sample_count: usize,
}

impl CausalAnalysisResult {
    /// Labels (`cause->effect`) of all relationships, for set comparisons.
    pub fn relationship_labels(&self) -> std::collections::HashSet<String> {
        self.relationships.iter().map(|r| r.label()).collect()
    }

    /// Look up a relationship by id.
    pub fn relationship(&self, id: &str) -> Option<&CausalRelationship> {
        self.relationships.iter().find(|r| r.id == id)
    }
}
