//! Shared statistics kernels.
//!
//! Every subsystem computes its scores from these primitives so the
//! epsilon guards and insufficient-data behavior stay uniform:
//! too little data yields a zero/neutral score, never an error.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::constants::EPSILON;

/// Arithmetic mean. Empty input yields 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (n - 1 denominator). Fewer than 2 values yields 0.0.
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Pearson correlation coefficient.
///
/// Returns 0.0 for mismatched/short inputs or degenerate (constant) series.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }
    let mx = mean(x);
    let my = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..x.len() {
        let dx = x[i] - mx;
        let dy = y[i] - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom < EPSILON || !denom.is_finite() {
        return 0.0;
    }
    (cov / denom).clamp(-1.0, 1.0)
}

/// Lagged Pearson correlation: cause(t - lag) against effect(t).
///
/// Returns 0.0 when the overlap after shifting is shorter than 2.
pub fn lagged_correlation(cause: &[f64], effect: &[f64], lag: usize) -> f64 {
    let len = cause.len().min(effect.len());
    if lag == 0 || lag >= len || len - lag < 2 {
        return 0.0;
    }
    pearson(&cause[..len - lag], &effect[lag..len])
}

/// First-order partial correlation of x and y controlling for z.
///
/// Formula: (r_xy - r_xz·r_yz) / √((1 - r_xz²)(1 - r_yz²)).
/// Degenerate denominators yield the raw r_xy (no control possible).
pub fn partial_correlation(x: &[f64], y: &[f64], z: &[f64]) -> f64 {
    let r_xy = pearson(x, y);
    let r_xz = pearson(x, z);
    let r_yz = pearson(y, z);

    let denom = ((1.0 - r_xz * r_xz) * (1.0 - r_yz * r_yz)).sqrt();
    if denom < EPSILON || !denom.is_finite() {
        return r_xy;
    }
    ((r_xy - r_xz * r_yz) / denom).clamp(-1.0, 1.0)
}

/// t-statistic of a correlation coefficient: r·√((n-2)/(1-r²)).
///
/// Returns 0.0 when n < 3; saturates for |r| ≈ 1 via the epsilon guard.
pub fn correlation_t_statistic(r: f64, n: usize) -> f64 {
    if n < 3 {
        return 0.0;
    }
    let denom = 1.0 - r * r;
    if denom < EPSILON {
        // Perfectly correlated: report a large but finite statistic.
        return r.signum() * ((n - 2) as f64 / EPSILON).sqrt();
    }
    r * ((n - 2) as f64 / denom).sqrt()
}

/// Approximate two-sided p-value of a test statistic under the standard
/// normal. Used where the original analysis used a normal approximation
/// in place of the exact t distribution. An infinite statistic is fully
/// significant; a NaN statistic carries no evidence and maps to 1.0.
pub fn two_sided_p_value(statistic: f64) -> f64 {
    if statistic.is_nan() {
        return 1.0;
    }
    if statistic.is_infinite() {
        return 0.0;
    }
    match Normal::new(0.0, 1.0) {
        Ok(normal) => (2.0 * (1.0 - normal.cdf(statistic.abs()))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

/// Gaussian mutual information implied by a correlation: -0.5·ln(1 - r²).
pub fn mutual_information_from_correlation(r: f64) -> f64 {
    let r2 = (r * r).min(1.0 - EPSILON);
    -0.5 * (1.0 - r2).ln()
}

/// Correlation magnitude implied by a Gaussian mutual information value.
/// Inverse of [`mutual_information_from_correlation`]; maps MI back into
/// a [0, 1] strength.
pub fn correlation_from_mutual_information(mi: f64) -> f64 {
    if mi <= 0.0 {
        return 0.0;
    }
    (1.0 - (-2.0 * mi).exp()).max(0.0).sqrt()
}

/// Jaccard similarity of two string sets. Both empty counts as 1.0.
pub fn jaccard<S: std::hash::BuildHasher>(
    a: &std::collections::HashSet<String, S>,
    b: &std::collections::HashSet<String, S>,
) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    if union == 0.0 {
        1.0
    } else {
        intersection / union
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pearson_constant_series_is_zero() {
        let x = [3.0, 3.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(pearson(&x, &y), 0.0);
    }

    #[test]
    fn lagged_correlation_finds_shifted_signal() {
        // effect(t) = cause(t-1)
        let cause = [1.0, 5.0, 2.0, 8.0, 3.0, 9.0, 4.0, 7.0];
        let effect = [0.0, 1.0, 5.0, 2.0, 8.0, 3.0, 9.0, 4.0];
        assert!(lagged_correlation(&cause, &effect, 1) > 0.99);
        assert!(lagged_correlation(&cause, &effect, 2).abs() < 0.9);
    }

    #[test]
    fn partial_correlation_removes_common_driver() {
        // x and y are both copies of z plus distinct offsets, so the raw
        // correlation is ~1 but controlling for z collapses it.
        let z: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let x: Vec<f64> = z.iter().map(|v| v * 2.0 + 1.0).collect();
        let y: Vec<f64> = z.iter().map(|v| v * -1.5 + 4.0).collect();
        let raw = pearson(&x, &y).abs();
        let partial = partial_correlation(&x, &y, &z).abs();
        assert!(raw > 0.99);
        assert!(partial < raw);
    }

    #[test]
    fn p_value_monotone_in_statistic() {
        assert!(two_sided_p_value(0.5) > two_sided_p_value(2.0));
        assert!(two_sided_p_value(2.0) > two_sided_p_value(4.0));
        assert!((two_sided_p_value(0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn p_value_non_finite_statistics() {
        // No evidence is neutral, overwhelming evidence is significant.
        assert_eq!(two_sided_p_value(f64::NAN), 1.0);
        assert_eq!(two_sided_p_value(f64::INFINITY), 0.0);
        assert_eq!(two_sided_p_value(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn mutual_information_round_trip() {
        for r in [0.0, 0.3, 0.7, 0.95] {
            let mi = mutual_information_from_correlation(r);
            let back = correlation_from_mutual_information(mi);
            assert!((back - r).abs() < 1e-6, "r={r} back={back}");
        }
    }

    #[test]
    fn jaccard_edge_cases() {
        let empty: HashSet<String> = HashSet::new();
        let ab: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let bc: HashSet<String> = ["b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(jaccard(&empty, &empty), 1.0);
        assert_eq!(jaccard(&ab, &ab), 1.0);
        assert!((jaccard(&ab, &bc) - 1.0 / 3.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn correlation_and_p_value_stay_in_range(
            pairs in prop::collection::vec(
                (-1.0e9..1.0e9f64, -1.0e9..1.0e9f64),
                0..64,
            )
        ) {
            let xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
            let ys: Vec<f64> = pairs.iter().map(|(_, y)| *y).collect();
            let r = pearson(&xs, &ys);
            prop_assert!((-1.0..=1.0).contains(&r));
            let p = two_sided_p_value(correlation_t_statistic(r, xs.len()));
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
