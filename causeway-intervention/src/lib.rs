//! # causeway-intervention
//!
//! Estimates the expected effect on a target variable of hypothetically
//! fixing a cause variable (do-operator style): fit the simple regression
//! effect = α + β·cause over the historical samples and probe a one-sigma
//! intervention. Relationships without enough usable samples are omitted
//! entirely rather than reported with near-zero confidence.

use std::collections::HashMap;

use causeway_core::constants::{EPSILON, Z_95};
use causeway_core::{
    stats, CausalAnalysisConfig, CausalRelationship, Dataset, InterventionEffect,
};

/// Estimate intervention effects for all relationships.
///
/// Only effects whose magnitude clears `intervention_effect_threshold`
/// are surfaced; under-sampled relationships are skipped silently (a
/// debug line, not a warning — this is expected gating, not a failure).
pub fn estimate(
    dataset: &Dataset,
    relationships: &[CausalRelationship],
    config: &CausalAnalysisConfig,
) -> Vec<InterventionEffect> {
    let mut effects: Vec<InterventionEffect> = relationships
        .iter()
        .filter_map(|relationship| estimate_single(dataset, relationship, config))
        .collect();

    effects.sort_by(|a, b| {
        b.expected_effect
            .abs()
            .partial_cmp(&a.expected_effect.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    effects
}

fn estimate_single(
    dataset: &Dataset,
    relationship: &CausalRelationship,
    config: &CausalAnalysisConfig,
) -> Option<InterventionEffect> {
    let (xs, ys) = dataset.aligned_pair(&relationship.cause, &relationship.effect);
    let n = xs.len();
    if n < config.min_intervention_samples {
        tracing::debug!(
            relationship = relationship.id.as_str(),
            samples = n,
            needed = config.min_intervention_samples,
            "intervention omitted: insufficient samples"
        );
        return None;
    }

    let mean_x = stats::mean(&xs);
    let std_x = stats::std_dev(&xs);
    let std_y = stats::std_dev(&ys);
    if std_x < EPSILON || std_y < EPSILON {
        return None;
    }

    // Simple regression: β = Sxy / Sxx, α = ȳ − β·x̄.
    let mean_y = stats::mean(&ys);
    let sxx: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    let sxy: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    if sxx < EPSILON {
        return None;
    }
    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    // Slope standard error from the residual variance.
    let sse: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| {
            let predicted = intercept + slope * x;
            (y - predicted).powi(2)
        })
        .sum();
    let dof = (n - 2).max(1) as f64;
    let slope_se = (sse / dof / sxx).sqrt();
    let t = if slope_se > EPSILON { slope / slope_se } else { 0.0 };
    let p = stats::two_sided_p_value(t);

    // One-sigma probe: set the cause to mean + one standard deviation and
    // report the standardized response of the target.
    let intervention_value = mean_x + std_x;
    let raw_effect = slope * std_x;
    let expected_effect = (raw_effect / std_y).clamp(-1.0, 1.0);
    if expected_effect.abs() <= config.intervention_effect_threshold {
        return None;
    }

    let half_width = Z_95 * slope_se * std_x / std_y;
    let confidence_interval = (expected_effect - half_width, expected_effect + half_width);

    // Sensitivity: how the standardized estimate moves under a ±20% slope
    // perturbation and a no-intercept refit.
    let mut sensitivity = HashMap::new();
    sensitivity.insert(
        "slope_plus_20pct".to_string(),
        ((slope * 1.2) * std_x / std_y).clamp(-1.0, 1.0),
    );
    sensitivity.insert(
        "slope_minus_20pct".to_string(),
        ((slope * 0.8) * std_x / std_y).clamp(-1.0, 1.0),
    );
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();
    if sum_x2 > EPSILON {
        let slope_no_intercept = xs.iter().zip(&ys).map(|(x, y)| x * y).sum::<f64>() / sum_x2;
        sensitivity.insert(
            "no_intercept_refit".to_string(),
            (slope_no_intercept * std_x / std_y).clamp(-1.0, 1.0),
        );
    }

    Some(InterventionEffect {
        variable: relationship.cause.clone(),
        target: relationship.effect.clone(),
        intervention_value,
        expected_effect,
        confidence_interval,
        probability: (1.0 - p).clamp(0.0, 1.0),
        intervention_type: "do-operator (one sigma above mean)".to_string(),
        assumptions: vec![
            "linear response of the target to the intervened variable".to_string(),
            "no unobserved confounding of the fitted pair".to_string(),
            "historical slope remains valid under intervention".to_string(),
        ],
        sensitivity,
    })
}
