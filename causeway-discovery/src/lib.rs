//! # causeway-discovery
//!
//! Causal discovery over a time-sorted dataset. Three independent
//! detectors (constraint-based, Granger causality, transfer entropy)
//! produce raw candidates; `merge` collapses multi-method hits into one
//! combined relationship and `graph` builds the resulting structure.

pub mod detectors;
pub mod graph;
pub mod merge;

use causeway_core::{
    AnalysisResult, CancellationToken, CausalAnalysisConfig, CausalGraph, CausalRelationship,
    Dataset,
};

/// Output of a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryOutput {
    /// Merged relationships, strongest first.
    pub relationships: Vec<CausalRelationship>,
    /// Graph over the full discovered-variable universe.
    pub graph: CausalGraph,
}

/// Discovery engine: runs all three detectors and merges their findings.
///
/// Stateless apart from the config; safe to share across concurrent
/// analyses of independent datasets.
pub struct DiscoveryEngine {
    config: CausalAnalysisConfig,
}

impl DiscoveryEngine {
    pub fn new(config: CausalAnalysisConfig) -> Self {
        Self { config }
    }

    /// Run discovery over the dataset.
    ///
    /// Detector-level insufficient data yields an empty candidate set,
    /// not an error; only cancellation aborts the run.
    pub fn discover(
        &self,
        dataset: &Dataset,
        token: &CancellationToken,
    ) -> AnalysisResult<DiscoveryOutput> {
        let mut raw: Vec<CausalRelationship> = Vec::new();

        let constraint = detectors::constraint_based::detect(dataset, &self.config, token)?;
        tracing::debug!(count = constraint.len(), "constraint-based candidates");
        raw.extend(constraint);

        let granger = detectors::granger::detect(dataset, &self.config, token)?;
        tracing::debug!(count = granger.len(), "granger candidates");
        raw.extend(granger);

        let entropy = detectors::transfer_entropy::detect(dataset, &self.config, token)?;
        tracing::debug!(count = entropy.len(), "transfer-entropy candidates");
        raw.extend(entropy);

        let relationships = merge::merge(raw, self.config.min_causal_strength);
        let graph = graph::build(dataset.variables(), &relationships);

        tracing::debug!(
            relationships = relationships.len(),
            nodes = graph.nodes.len(),
            "discovery complete"
        );

        Ok(DiscoveryOutput {
            relationships,
            graph,
        })
    }
}
