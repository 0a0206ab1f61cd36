//! Synthetic dataset generators for Causeway tests.
//!
//! Everything here is seeded and fully deterministic so tests that assert
//! determinism of the pipeline can rely on byte-identical inputs.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use causeway_core::CausalData;

/// Deterministic splitmix64 noise source. Good enough for fixtures;
/// not a statistical RNG.
pub struct Noise {
    state: u64,
}

impl Noise {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform value in [-1, 1].
    pub fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
    }
}

/// Fixed base time so generated datasets are reproducible.
pub fn base_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

/// Build one observation at `base + index` minutes.
pub fn sample(index: usize, pairs: &[(&str, f64)]) -> CausalData {
    let variables: HashMap<String, f64> =
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    CausalData::new(base_time() + chrono::Duration::minutes(index as i64), variables)
        .with_source("fixture")
}

/// AR(1) driver series around `mean`. The monotonically decaying
/// autocorrelation keeps the lag scans from finding spurious strong
/// correlations at higher lags, which a periodic driver would produce.
pub fn driver_series(n: usize, mean: f64, scale: f64, noise: &mut Noise) -> Vec<f64> {
    let mut series = Vec::with_capacity(n);
    let mut level = 0.0f64;
    for _ in 0..n {
        level = 0.7 * level + scale * noise.unit();
        series.push(mean + level);
    }
    series
}

/// `effect(t) = intercept + slope·cause(t-1) + noise_scale·u(t)`.
///
/// The one-step lag is what lets temporal-precedence orientation and the
/// Granger scan both resolve cause → effect as Forward.
pub fn linear_pair(
    n: usize,
    cause: &str,
    effect: &str,
    intercept: f64,
    slope: f64,
    noise_scale: f64,
    seed: u64,
) -> Vec<CausalData> {
    let mut noise = Noise::new(seed);
    let causes = driver_series(n, 10.0, 2.0, &mut noise);

    (0..n)
        .map(|i| {
            let lagged = if i == 0 { causes[0] } else { causes[i - 1] };
            let e = intercept + slope * lagged + noise_scale * noise.unit();
            sample(i, &[(cause, causes[i]), (effect, e)])
        })
        .collect()
}

/// Contemporaneous regression data: `y = intercept + slope·x + noise`.
/// Used by the structural-modeling tests where no lag is wanted.
pub fn regression_pair(
    n: usize,
    x: &str,
    y: &str,
    intercept: f64,
    slope: f64,
    noise_scale: f64,
    seed: u64,
) -> Vec<CausalData> {
    let mut noise = Noise::new(seed);
    let xs = driver_series(n, 10.0, 2.0, &mut noise);
    (0..n)
        .map(|i| {
            let yv = intercept + slope * xs[i] + noise_scale * noise.unit();
            sample(i, &[(x, xs[i]), (y, yv)])
        })
        .collect()
}

/// Z drives both X and Y; there is no direct X → Y mechanism.
/// The classic confounding triple.
pub fn confounded_triple(n: usize, seed: u64) -> Vec<CausalData> {
    let mut noise = Noise::new(seed);
    let zs = driver_series(n, 10.0, 2.0, &mut noise);
    (0..n)
        .map(|i| {
            let x = 2.0 * zs[i] + 0.3 * noise.unit();
            let y = -1.5 * zs[i] + 0.3 * noise.unit();
            sample(i, &[("z", zs[i]), ("x", x), ("y", y)])
        })
        .collect()
}

/// Stationary two-variable data where `y` tracks lagged `x` throughout.
pub fn stationary(n: usize, seed: u64) -> Vec<CausalData> {
    linear_pair(n, "x", "y", 1.0, 2.0, 0.2, seed)
}

/// A regime change: `y` tracks lagged `x` for the first `shift_at`
/// samples, then decouples into independent noise.
pub fn regime_shift(n: usize, shift_at: usize, seed: u64) -> Vec<CausalData> {
    let mut noise = Noise::new(seed);
    let causes = driver_series(n, 10.0, 2.0, &mut noise);

    (0..n)
        .map(|i| {
            let lagged = if i == 0 { causes[0] } else { causes[i - 1] };
            let y = if i < shift_at {
                1.0 + 2.0 * lagged + 0.2 * noise.unit()
            } else {
                // Decoupled: pure noise around a different level.
                40.0 + 8.0 * noise.unit()
            };
            sample(i, &[("x", causes[i]), ("y", y)])
        })
        .collect()
}

/// The end-to-end scenario: CodeComplexity drives ExecutionTime and
/// MemoryUsage (positive), TestCoverage drives ErrorRate (negative),
/// TeamSize is unrelated noise.
pub fn engineering_scenario(n: usize, seed: u64) -> Vec<CausalData> {
    let mut noise = Noise::new(seed);
    let complexity = driver_series(n, 20.0, 4.0, &mut noise);
    let coverage = driver_series(n, 70.0, 6.0, &mut noise);

    (0..n)
        .map(|i| {
            let prev = if i == 0 { 0 } else { i - 1 };
            let execution_time = 5.0 + 3.0 * complexity[prev] + 0.8 * noise.unit();
            let memory_usage = 100.0 + 12.0 * complexity[prev] + 3.0 * noise.unit();
            let error_rate = 50.0 - 0.5 * coverage[prev] + 0.4 * noise.unit();
            let team_size = 6.0 + 2.0 * noise.unit();
            sample(
                i,
                &[
                    ("CodeComplexity", complexity[i]),
                    ("TestCoverage", coverage[i]),
                    ("ExecutionTime", execution_time),
                    ("MemoryUsage", memory_usage),
                    ("ErrorRate", error_rate),
                    ("TeamSize", team_size),
                ],
            )
        })
        .collect()
}
