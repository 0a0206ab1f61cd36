//! Aggregate metrics over a confounding scan.

use std::collections::HashSet;

use causeway_core::{ConfoundingFactor, ConfoundingMetrics};

/// Impact above which a confounder counts as high-impact.
const HIGH_IMPACT: f64 = 0.7;

/// Summarize merged confounders against the analyzed relationship count.
pub fn compute_metrics(
    confounders: &[ConfoundingFactor],
    relationship_count: usize,
) -> ConfoundingMetrics {
    if confounders.is_empty() {
        return ConfoundingMetrics::default();
    }

    let count = confounders.len();
    let average_impact = confounders.iter().map(|c| c.impact).sum::<f64>() / count as f64;
    let max_impact = confounders.iter().map(|c| c.impact).fold(0.0, f64::max);
    let average_confidence = confounders.iter().map(|c| c.confidence).sum::<f64>() / count as f64;
    let high_impact_count = confounders.iter().filter(|c| c.impact > HIGH_IMPACT).count();

    let affected: HashSet<&String> = confounders
        .iter()
        .flat_map(|c| c.affected_relationships.iter())
        .collect();
    let affected_relationship_ratio = if relationship_count > 0 {
        affected.len() as f64 / relationship_count as f64
    } else {
        0.0
    };

    ConfoundingMetrics {
        confounder_count: count,
        average_impact,
        max_impact,
        average_confidence,
        affected_relationship_ratio: affected_relationship_ratio.clamp(0.0, 1.0),
        high_impact_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(variable: &str, impact: f64, rels: &[&str]) -> ConfoundingFactor {
        ConfoundingFactor {
            variable: variable.to_string(),
            affected_relationships: rels.iter().map(|r| r.to_string()).collect(),
            impact,
            confidence: 0.5,
            detection_method: "partial correlation".to_string(),
            evidence: Vec::new(),
            statistics: Default::default(),
        }
    }

    #[test]
    fn empty_scan_yields_default_metrics() {
        let metrics = compute_metrics(&[], 4);
        assert_eq!(metrics.confounder_count, 0);
        assert_eq!(metrics.affected_relationship_ratio, 0.0);
    }

    #[test]
    fn metrics_aggregate_impact_and_coverage() {
        let confounders = vec![
            factor("z", 0.8, &["a->b", "c->d"]),
            factor("w", 0.2, &["a->b"]),
        ];
        let metrics = compute_metrics(&confounders, 4);
        assert_eq!(metrics.confounder_count, 2);
        assert!((metrics.average_impact - 0.5).abs() < 1e-9);
        assert_eq!(metrics.max_impact, 0.8);
        assert_eq!(metrics.high_impact_count, 1);
        assert!((metrics.affected_relationship_ratio - 0.5).abs() < 1e-9);
    }
}
