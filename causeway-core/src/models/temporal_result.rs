use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis_result::CausalAnalysisResult;

/// One analyzed sliding window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalWindow {
    /// Zero-based window index.
    pub index: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Single-shot analysis of the window's samples.
    pub result: CausalAnalysisResult,
    /// Jaccard similarity of this window's relationship set against the
    /// previous window. The first window is defined as 1.0.
    pub stability_score: f64,
}

/// A detected shift in causal structure between adjacent windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalChangePoint {
    /// Index of the window where stability crossed below the threshold.
    pub window_index: usize,
    /// Start time of that window.
    pub timestamp: DateTime<Utc>,
    /// The stability score that triggered the change point.
    pub stability_score: f64,
    pub description: String,
}

/// Aggregate stability across all windows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StabilityStatistics {
    pub mean: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

/// Output of sliding-window temporal causal analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalCausalAnalysisResult {
    pub windows: Vec<TemporalWindow>,
    pub change_points: Vec<CausalChangePoint>,
    pub stability: StabilityStatistics,
    pub analyzed_at: DateTime<Utc>,
}
