//! Two-dataset comparison: run the pipeline independently on a baseline
//! and a comparison dataset, then diff the discovered structure.

use std::collections::HashMap;

use chrono::Utc;

use causeway_core::{
    stats, AnalysisResult, CancellationToken, CausalAnalysisResult, CausalComparisonResult,
    CausalData, Dataset, RelationshipDelta,
};

use crate::CausalAnalysisEngine;

/// Overall-confidence delta below which the two runs count as equivalent.
const CONFIDENCE_MARGIN: f64 = 0.05;

pub(crate) fn run(
    engine: &CausalAnalysisEngine,
    baseline_data: &[CausalData],
    comparison_data: &[CausalData],
    token: &CancellationToken,
) -> AnalysisResult<CausalComparisonResult> {
    let baseline = engine.run_pipeline(&Dataset::new(baseline_data), token)?;
    let comparison = engine.run_pipeline(&Dataset::new(comparison_data), token)?;

    let baseline_labels = baseline.relationship_labels();
    let comparison_labels = comparison.relationship_labels();
    let similarity = stats::jaccard(&baseline_labels, &comparison_labels);

    let added = deltas_from(&comparison, |label| !baseline_labels.contains(label));
    let removed = deltas_from(&baseline, |label| !comparison_labels.contains(label));

    let strength_deltas: HashMap<String, f64> = comparison
        .relationships
        .iter()
        .filter(|r| baseline_labels.contains(&r.label()))
        .filter_map(|r| {
            baseline
                .relationship(&r.id)
                .map(|b| (r.label(), r.strength - b.strength))
        })
        .collect();

    let recommendation = recommend(&baseline, &comparison, similarity);

    Ok(CausalComparisonResult {
        baseline,
        comparison,
        similarity,
        added,
        removed,
        strength_deltas,
        recommendation,
        compared_at: Utc::now(),
    })
}

/// Relationships of `result` matching the filter, strongest first.
fn deltas_from(
    result: &CausalAnalysisResult,
    keep: impl Fn(&str) -> bool,
) -> Vec<RelationshipDelta> {
    let mut deltas: Vec<RelationshipDelta> = result
        .relationships
        .iter()
        .filter(|r| keep(&r.label()))
        .map(|r| RelationshipDelta {
            label: r.label(),
            strength: r.strength,
            confidence: r.confidence,
        })
        .collect();
    deltas.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    deltas
}

fn recommend(
    baseline: &CausalAnalysisResult,
    comparison: &CausalAnalysisResult,
    similarity: f64,
) -> String {
    let delta = comparison.overall_confidence - baseline.overall_confidence;
    if delta > CONFIDENCE_MARGIN {
        format!(
            "causal structure improved (confidence {:.2} → {:.2}, similarity \
             {similarity:.2}); favor the comparison conditions",
            baseline.overall_confidence, comparison.overall_confidence
        )
    } else if delta < -CONFIDENCE_MARGIN {
        format!(
            "causal structure degraded (confidence {:.2} → {:.2}, similarity \
             {similarity:.2}); investigate what changed",
            baseline.overall_confidence, comparison.overall_confidence
        )
    } else {
        format!(
            "causal structure is stable (confidence {:.2} → {:.2}, similarity {similarity:.2})",
            baseline.overall_confidence, comparison.overall_confidence
        )
    }
}
