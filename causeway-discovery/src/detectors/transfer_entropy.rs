//! Information-theoretic detector.
//!
//! Approximates mutual information from correlation as `-0.5·ln(1-r²)`
//! and treats the maximum lagged MI over lags 1..min(3, N/5) as a
//! transfer-entropy estimate of directed information flow. Like the
//! Granger scan, ordered pairs are independent and run as a parallel map.

use rayon::prelude::*;

use causeway_core::constants::METHOD_TRANSFER_ENTROPY;
use causeway_core::{
    stats, AnalysisResult, CancellationToken, CausalAnalysisConfig, CausalRelationship, Dataset,
};

/// Detect directed information flow above `transfer_entropy_threshold`.
pub fn detect(
    dataset: &Dataset,
    config: &CausalAnalysisConfig,
    token: &CancellationToken,
) -> AnalysisResult<Vec<CausalRelationship>> {
    let variables = dataset.variables();
    let pairs: Vec<(&str, &str)> = variables
        .iter()
        .flat_map(|c| {
            variables
                .iter()
                .filter(move |e| *e != c)
                .map(move |e| (c.as_str(), e.as_str()))
        })
        .collect();

    let found: Vec<CausalRelationship> = pairs
        .par_iter()
        .filter_map(|(cause, effect)| {
            if token.is_cancelled() {
                return None;
            }
            test_pair(dataset, cause, effect, config)
        })
        .collect();

    token.bail()?;
    Ok(found)
}

fn test_pair(
    dataset: &Dataset,
    cause: &str,
    effect: &str,
    config: &CausalAnalysisConfig,
) -> Option<CausalRelationship> {
    let (xs, ys) = dataset.aligned_pair(cause, effect);
    let n = xs.len();
    let max_lag = (n / 5).min(3);
    if max_lag == 0 {
        return None;
    }

    let mut best_lag = 0usize;
    let mut transfer_entropy = 0.0f64;
    for lag in 1..=max_lag {
        let r = stats::lagged_correlation(&xs, &ys, lag);
        let mi = stats::mutual_information_from_correlation(r);
        if mi > transfer_entropy {
            transfer_entropy = mi;
            best_lag = lag;
        }
    }

    if transfer_entropy <= config.transfer_entropy_threshold {
        return None;
    }

    // Map the MI estimate back to the correlation magnitude it implies,
    // so strength lives on the same [0, 1] scale as the other detectors.
    let strength = stats::correlation_from_mutual_information(transfer_entropy).min(1.0);
    let confidence = (strength * 1.2).min(1.0);
    let mutual_information =
        stats::mutual_information_from_correlation(stats::pearson(&xs, &ys));

    Some(
        CausalRelationship::new(cause, effect, strength, confidence, METHOD_TRANSFER_ENTROPY)
            .with_evidence(format!(
                "transfer entropy {transfer_entropy:.3} at lag {best_lag} exceeds threshold {:.3}",
                config.transfer_entropy_threshold
            ))
            .with_statistic("te_transfer_entropy", transfer_entropy)
            .with_statistic("te_best_lag", best_lag as f64)
            .with_statistic("te_mutual_information", mutual_information),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_dataset_yields_nothing() {
        let config = CausalAnalysisConfig::default();
        let dataset = Dataset::new(&[]);
        let token = CancellationToken::new();
        assert!(detect(&dataset, &config, &token).unwrap().is_empty());
    }
}
