use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a discovered relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CausalDirection {
    /// Cause precedes and drives effect.
    Forward,
    /// Evidence points the other way.
    Backward,
    /// Influence runs both ways.
    Bidirectional,
    /// Orientation could not be resolved.
    Unknown,
}

/// A directed cause → effect relationship with its supporting evidence.
///
/// Relationships found by multiple detectors for the same (cause, effect)
/// pair are merged into one record rather than kept as duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalRelationship {
    /// Deterministic id: `{cause}->{effect}`. Identical input data and
    /// config therefore produce identical ids across runs.
    pub id: String,
    /// Cause variable name.
    pub cause: String,
    /// Effect variable name.
    pub effect: String,
    /// Relationship strength in [0, 1].
    pub strength: f64,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
    /// Labels of the detectors that found this relationship.
    pub methods: Vec<String>,
    /// Orientation of the edge.
    pub direction: CausalDirection,
    /// Human-readable evidence lines, one per supporting detector finding.
    pub evidence: Vec<String>,
    /// When discovery ran.
    pub discovered_at: DateTime<Utc>,
    /// Auxiliary statistics (correlation, best lag, p-value, ...).
    pub statistics: HashMap<String, f64>,
}

impl CausalRelationship {
    /// Deterministic relationship id for a (cause, effect) pair.
    pub fn make_id(cause: &str, effect: &str) -> String {
        format!("{cause}->{effect}")
    }

    /// Create a relationship found by a single detector.
    pub fn new(
        cause: impl Into<String>,
        effect: impl Into<String>,
        strength: f64,
        confidence: f64,
        method: impl Into<String>,
    ) -> Self {
        let cause = cause.into();
        let effect = effect.into();
        Self {
            id: Self::make_id(&cause, &effect),
            cause,
            effect,
            strength: strength.clamp(0.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
            methods: vec![method.into()],
            direction: CausalDirection::Forward,
            evidence: Vec::new(),
            discovered_at: Utc::now(),
            statistics: HashMap::new(),
        }
    }

    /// Attach an evidence line.
    pub fn with_evidence(mut self, line: impl Into<String>) -> Self {
        self.evidence.push(line.into());
        self
    }

    /// Attach an auxiliary statistic.
    pub fn with_statistic(mut self, key: impl Into<String>, value: f64) -> Self {
        self.statistics.insert(key.into(), value);
        self
    }

    /// Label used for set comparisons (stability, dataset diffs).
    pub fn label(&self) -> String {
        Self::make_id(&self.cause, &self.effect)
    }
}
