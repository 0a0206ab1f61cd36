//! # causeway-engine
//!
//! The orchestrated analysis pipeline: discovery → structural modeling →
//! intervention analysis → confounding detection → strength blending →
//! statistical validation → insights and recommendations.
//!
//! The engine holds no per-call state; concurrent analyses over
//! independent datasets on one engine instance are safe. The entry points
//! are async for composability even though the work is CPU-bound — the
//! pairwise scans inside discovery and confounding parallelize via rayon.

pub mod comparison;
pub mod insights;
pub mod strength;
pub mod temporal;
pub mod validation;

use std::collections::HashMap;

use chrono::Utc;

use causeway_core::{
    AnalysisResult, CancellationToken, CausalAnalysisConfig, CausalAnalysisResult,
    CausalComparisonResult, CausalData, Dataset, TemporalCausalAnalysisResult,
};
use causeway_discovery::DiscoveryEngine;

/// The stateless causal analysis engine.
pub struct CausalAnalysisEngine {
    config: CausalAnalysisConfig,
}

impl CausalAnalysisEngine {
    pub fn new(config: CausalAnalysisConfig) -> Self {
        Self { config }
    }

    /// Engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CausalAnalysisConfig::default())
    }

    pub fn config(&self) -> &CausalAnalysisConfig {
        &self.config
    }

    /// Single-shot analysis of one dataset.
    pub async fn analyze(&self, data: &[CausalData]) -> AnalysisResult<CausalAnalysisResult> {
        self.analyze_with_token(data, &CancellationToken::new()).await
    }

    /// Single-shot analysis with cooperative cancellation.
    pub async fn analyze_with_token(
        &self,
        data: &[CausalData],
        token: &CancellationToken,
    ) -> AnalysisResult<CausalAnalysisResult> {
        match self.run_pipeline(&Dataset::new(data), token) {
            Ok(result) => Ok(result),
            Err(error) => {
                tracing::error!(%error, "causal analysis failed");
                Err(error)
            }
        }
    }

    /// Sliding-window temporal analysis.
    pub async fn analyze_temporal(
        &self,
        data: &[CausalData],
        token: &CancellationToken,
    ) -> AnalysisResult<TemporalCausalAnalysisResult> {
        match temporal::run(self, data, token) {
            Ok(result) => Ok(result),
            Err(error) => {
                tracing::error!(%error, "temporal causal analysis failed");
                Err(error)
            }
        }
    }

    /// Compare causal structure across two datasets.
    pub async fn compare(
        &self,
        baseline: &[CausalData],
        comparison: &[CausalData],
        token: &CancellationToken,
    ) -> AnalysisResult<CausalComparisonResult> {
        match comparison::run(self, baseline, comparison, token) {
            Ok(result) => Ok(result),
            Err(error) => {
                tracing::error!(%error, "causal comparison failed");
                Err(error)
            }
        }
    }

    /// The synchronous pipeline body. Also used per window by the
    /// temporal analysis and per side by the comparison.
    pub(crate) fn run_pipeline(
        &self,
        dataset: &Dataset,
        token: &CancellationToken,
    ) -> AnalysisResult<CausalAnalysisResult> {
        self.config.validate()?;
        tracing::info!(
            samples = dataset.len(),
            variables = dataset.variables().len(),
            "causal analysis started"
        );

        // Phase 1: discovery.
        let discovery = DiscoveryEngine::new(self.config.clone()).discover(dataset, token)?;
        let relationships = discovery.relationships;

        // Phase 2: structural modeling.
        let modeling = causeway_sem::fit_equations(dataset, &relationships);

        // Phase 3: intervention analysis.
        let interventions = causeway_intervention::estimate(dataset, &relationships, &self.config);

        // Phase 4: confounding detection.
        let confounding =
            causeway_confounding::detect(dataset, &relationships, &self.config, token)?;

        // Phase 5: blended causal strengths.
        let causal_strengths: HashMap<String, f64> = relationships
            .iter()
            .map(|r| {
                (
                    r.id.clone(),
                    strength::blended_strength(
                        dataset,
                        &r.cause,
                        &r.effect,
                        self.config.max_lag_for_granger,
                    ),
                )
            })
            .collect();

        // Phase 6: statistical validation.
        let validation: Vec<_> = relationships
            .iter()
            .map(|r| validation::validate(dataset, r, &self.config))
            .collect();

        // Phase 7: insights and recommendations.
        let insights = insights::generate_insights(
            &relationships,
            &validation,
            &confounding.confounders,
            &interventions,
        );
        let recommendations =
            insights::generate_recommendations(&relationships, &confounding.confounders);

        let overall_confidence = overall_confidence(
            &causal_strengths,
            &validation,
            &modeling.statistics,
        );

        tracing::info!(
            relationships = relationships.len(),
            equations = modeling.equations.len(),
            confounders = confounding.confounders.len(),
            overall_confidence,
            "causal analysis complete"
        );

        Ok(CausalAnalysisResult {
            relationships,
            graph: discovery.graph,
            equations: modeling.equations,
            interventions,
            confounders: confounding.confounders,
            confounding_metrics: confounding.metrics,
            causal_strengths,
            validation,
            model_statistics: modeling.statistics,
            insights,
            recommendations,
            overall_confidence,
            analyzed_at: Utc::now(),
            sample_count: dataset.len(),
        })
    }
}

/// Mean of the available aggregate signals: average blended strength,
/// average validation score, and model fit when equations were fitted.
fn overall_confidence(
    strengths: &HashMap<String, f64>,
    validation: &[causeway_core::ValidationOutcome],
    model: &causeway_core::ModelStatistics,
) -> f64 {
    let mut components = Vec::new();
    if !strengths.is_empty() {
        components.push(strengths.values().sum::<f64>() / strengths.len() as f64);
    }
    if !validation.is_empty() {
        components.push(
            validation.iter().map(|v| v.overall_score).sum::<f64>() / validation.len() as f64,
        );
    }
    if model.equation_count > 0 {
        components.push(model.overall_fit);
    }
    if components.is_empty() {
        return 0.0;
    }
    (components.iter().sum::<f64>() / components.len() as f64).clamp(0.0, 1.0)
}
