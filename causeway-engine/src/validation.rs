//! Statistical validation: four checks per relationship.
//!
//! Each check scores in [0, 1]; the outcome passes when the mean clears
//! `causal_validation_threshold`.

use std::collections::HashMap;

use causeway_core::{
    stats, CausalAnalysisConfig, CausalRelationship, Dataset, ValidationOutcome,
};

use crate::strength;

/// Candidate confounders examined by the robustness check.
const ROBUSTNESS_CANDIDATES: usize = 5;

pub const CHECK_SIGNIFICANCE: &str = "statistical_significance";
pub const CHECK_TEMPORAL: &str = "temporal_precedence";
pub const CHECK_ROBUSTNESS: &str = "confounding_robustness";
pub const CHECK_DOSE_RESPONSE: &str = "dose_response";

/// Run all four checks for one relationship.
pub fn validate(
    dataset: &Dataset,
    relationship: &CausalRelationship,
    config: &CausalAnalysisConfig,
) -> ValidationOutcome {
    let mut checks = HashMap::new();
    checks.insert(
        CHECK_SIGNIFICANCE.to_string(),
        significance_score(dataset, relationship),
    );
    checks.insert(
        CHECK_TEMPORAL.to_string(),
        strength::temporal_strength(
            dataset,
            &relationship.cause,
            &relationship.effect,
            config.max_lag_for_granger,
        ),
    );
    checks.insert(
        CHECK_ROBUSTNESS.to_string(),
        robustness_score(dataset, relationship),
    );
    checks.insert(
        CHECK_DOSE_RESPONSE.to_string(),
        dose_response_score(dataset, relationship),
    );

    let overall_score = checks.values().sum::<f64>() / checks.len() as f64;
    ValidationOutcome {
        relationship_id: relationship.id.clone(),
        checks,
        overall_score,
        passed: overall_score >= config.causal_validation_threshold,
    }
}

/// 1 − p of the raw correlation's t-statistic.
fn significance_score(dataset: &Dataset, relationship: &CausalRelationship) -> f64 {
    let (xs, ys) = dataset.aligned_pair(&relationship.cause, &relationship.effect);
    let r = stats::pearson(&xs, &ys);
    let p = stats::two_sided_p_value(stats::correlation_t_statistic(r, xs.len()));
    (1.0 - p).clamp(0.0, 1.0)
}

/// How little the correlation moves when controlling for the most
/// associated other variables: 1 − mean |raw − partial| over the top 5
/// candidates ranked by association with the cause. No candidates means
/// nothing can confound, scored 1.0.
fn robustness_score(dataset: &Dataset, relationship: &CausalRelationship) -> f64 {
    let mut candidates: Vec<(f64, &String)> = dataset
        .variables()
        .iter()
        .filter(|v| **v != relationship.cause && **v != relationship.effect)
        .map(|candidate| {
            let (zs, xs, _) =
                dataset.aligned_triple(candidate, &relationship.cause, &relationship.effect);
            (stats::pearson(&zs, &xs).abs(), candidate)
        })
        .collect();
    if candidates.is_empty() {
        return 1.0;
    }
    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut differences = Vec::new();
    for (_, candidate) in candidates.into_iter().take(ROBUSTNESS_CANDIDATES) {
        let (xs, ys, zs) =
            dataset.aligned_triple(&relationship.cause, &relationship.effect, candidate);
        if xs.len() < 3 {
            continue;
        }
        let raw = stats::pearson(&xs, &ys);
        let partial = stats::partial_correlation(&xs, &ys, &zs);
        differences.push((raw - partial).abs());
    }
    if differences.is_empty() {
        return 1.0;
    }
    (1.0 - stats::mean(&differences)).clamp(0.0, 1.0)
}

/// Fraction of adjacent pairs, sorted by cause value, where the effect
/// increases.
fn dose_response_score(dataset: &Dataset, relationship: &CausalRelationship) -> f64 {
    let (xs, ys) = dataset.aligned_pair(&relationship.cause, &relationship.effect);
    if xs.len() < 3 {
        return 0.0;
    }

    let mut pairs: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let increases = pairs
        .windows(2)
        .filter(|w| w[1].1 > w[0].1)
        .count();
    increases as f64 / (pairs.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use causeway_core::CausalRelationship;

    #[test]
    fn monotone_positive_pair_scores_high_everywhere() {
        let data = test_fixtures::regression_pair(30, "x", "y", 1.0, 2.0, 0.05, 3);
        let dataset = Dataset::new(&data);
        let relationship = CausalRelationship::new("x", "y", 0.9, 0.9, "PC Algorithm");
        let config = CausalAnalysisConfig::default();

        let outcome = validate(&dataset, &relationship, &config);
        assert!(outcome.checks[CHECK_SIGNIFICANCE] > 0.9);
        assert!(outcome.checks[CHECK_DOSE_RESPONSE] > 0.8);
        // Only x and y exist, so nothing can confound the pair.
        assert_eq!(outcome.checks[CHECK_ROBUSTNESS], 1.0);
        assert!(outcome.overall_score > 0.5);
        assert!(outcome.passed);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let data = test_fixtures::confounded_triple(25, 9);
        let dataset = Dataset::new(&data);
        let relationship = CausalRelationship::new("x", "y", 0.5, 0.5, "PC Algorithm");
        let config = CausalAnalysisConfig::default();

        let outcome = validate(&dataset, &relationship, &config);
        for (name, score) in &outcome.checks {
            assert!((0.0..=1.0).contains(score), "{name} out of range: {score}");
        }
    }
}
