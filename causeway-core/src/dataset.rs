//! Time-sorted, read-only view over a collection of observations.
//!
//! Detectors and the regression fitter all read through this view;
//! nothing mutates it after construction, which is what makes the
//! pairwise scans safe to parallelize.

use std::collections::BTreeSet;

use crate::models::CausalData;

/// Immutable, time-sorted view over a slice of observations.
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<CausalData>,
    variables: Vec<String>,
}

impl Dataset {
    /// Build a view: samples are cloned and sorted by timestamp, and the
    /// variable universe is collected across all samples.
    pub fn new(data: &[CausalData]) -> Self {
        let mut samples = data.to_vec();
        samples.sort_by_key(|s| s.timestamp);

        let names: BTreeSet<String> = samples
            .iter()
            .flat_map(|s| s.variables.keys().cloned())
            .collect();

        Self {
            samples,
            variables: names.into_iter().collect(),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time-sorted samples.
    pub fn samples(&self) -> &[CausalData] {
        &self.samples
    }

    /// Every variable name observed anywhere in the dataset, sorted.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Time-ordered values of one variable, skipping samples that lack it.
    pub fn series(&self, variable: &str) -> Vec<f64> {
        self.samples
            .iter()
            .filter_map(|s| s.variables.get(variable).copied())
            .collect()
    }

    /// Time-ordered (a, b) value pairs from samples containing both.
    pub fn aligned_pair(&self, a: &str, b: &str) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for sample in &self.samples {
            if let (Some(&x), Some(&y)) = (sample.variables.get(a), sample.variables.get(b)) {
                xs.push(x);
                ys.push(y);
            }
        }
        (xs, ys)
    }

    /// Time-ordered (a, b, c) triples from samples containing all three.
    pub fn aligned_triple(&self, a: &str, b: &str, c: &str) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let mut zs = Vec::new();
        for sample in &self.samples {
            if let (Some(&x), Some(&y), Some(&z)) = (
                sample.variables.get(a),
                sample.variables.get(b),
                sample.variables.get(c),
            ) {
                xs.push(x);
                ys.push(y);
                zs.push(z);
            }
        }
        (xs, ys, zs)
    }

    /// A sub-view over a contiguous sample range (used by windowed analysis).
    /// The range is clamped to the dataset bounds.
    pub fn window(&self, start: usize, len: usize) -> Dataset {
        let end = (start + len).min(self.samples.len());
        let start = start.min(end);
        Dataset::new(&self.samples[start..end])
    }
}
