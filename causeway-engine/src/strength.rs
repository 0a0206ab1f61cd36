//! Blended causal strength.
//!
//! Per relationship: 0.3·correlation + 0.4·temporal + 0.3·interventional,
//! clamped to [0, 1]. Each component degrades to 0.0 on insufficient data
//! rather than failing.

use causeway_core::constants::{BLEND_CORRELATION, BLEND_INTERVENTIONAL, BLEND_TEMPORAL};
use causeway_core::{stats, Dataset};

/// Minimum time-sorted samples for the temporal component.
const MIN_TEMPORAL_SAMPLES: usize = 10;

/// Minimum large-change intervals for the interventional component.
const MIN_CHANGE_INTERVALS: usize = 3;

/// Absolute contemporaneous correlation of the pair.
pub fn correlation_strength(dataset: &Dataset, cause: &str, effect: &str) -> f64 {
    let (xs, ys) = dataset.aligned_pair(cause, effect);
    stats::pearson(&xs, &ys).abs()
}

/// Best absolute lagged correlation over lags 1..=`max_lag` — the same
/// quantity the Granger detector scores, reused as temporal-precedence
/// strength. Fewer than 10 samples yields 0.0.
pub fn temporal_strength(dataset: &Dataset, cause: &str, effect: &str, max_lag: usize) -> f64 {
    let (xs, ys) = dataset.aligned_pair(cause, effect);
    if xs.len() < MIN_TEMPORAL_SAMPLES {
        return 0.0;
    }
    (1..=max_lag.min(xs.len().saturating_sub(3)))
        .map(|lag| stats::lagged_correlation(&xs, &ys, lag).abs())
        .fold(0.0, f64::max)
}

/// Quasi-interventional strength from observed large changes: collect the
/// sample-to-sample deltas where the cause moved by more than one standard
/// deviation of its deltas, and correlate cause deltas with effect deltas
/// over those intervals. Fewer than 3 such intervals yields 0.0.
pub fn interventional_strength(dataset: &Dataset, cause: &str, effect: &str) -> f64 {
    let (xs, ys) = dataset.aligned_pair(cause, effect);
    if xs.len() < 2 {
        return 0.0;
    }

    let cause_deltas: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let effect_deltas: Vec<f64> = ys.windows(2).map(|w| w[1] - w[0]).collect();
    let threshold = stats::std_dev(&cause_deltas);
    if threshold <= 0.0 {
        return 0.0;
    }

    let mut large_cause = Vec::new();
    let mut large_effect = Vec::new();
    for i in 0..cause_deltas.len() {
        if cause_deltas[i].abs() > threshold {
            large_cause.push(cause_deltas[i]);
            large_effect.push(effect_deltas[i]);
        }
    }
    if large_cause.len() < MIN_CHANGE_INTERVALS {
        return 0.0;
    }
    stats::pearson(&large_cause, &large_effect).abs()
}

/// The blended strength for one relationship.
pub fn blended_strength(dataset: &Dataset, cause: &str, effect: &str, max_lag: usize) -> f64 {
    let correlation = correlation_strength(dataset, cause, effect);
    let temporal = temporal_strength(dataset, cause, effect, max_lag);
    let interventional = interventional_strength(dataset, cause, effect);

    (BLEND_CORRELATION * correlation
        + BLEND_TEMPORAL * temporal
        + BLEND_INTERVENTIONAL * interventional)
        .clamp(0.0, 1.0)
}
