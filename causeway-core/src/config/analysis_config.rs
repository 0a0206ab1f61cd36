//! Analysis pipeline configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for a causal analysis run.
///
/// Every field has a default; an omitted config means "defaults apply".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalAnalysisConfig {
    /// Skeleton correlation threshold for the constraint-based detector.
    pub pc_algorithm_alpha: f64,
    /// Minimum time-sorted samples before Granger testing runs at all.
    pub min_data_points_for_granger: usize,
    /// Upper bound of the Granger lag scan.
    pub max_lag_for_granger: usize,
    /// Two-sided p-value cutoff for Granger significance.
    pub granger_significance_level: f64,
    /// Minimum transfer entropy for the information-theoretic detector.
    pub transfer_entropy_threshold: f64,
    /// Acceptance floor for relationships found by a single method.
    pub min_causal_strength: f64,
    /// Overall validation score required for a relationship to pass.
    pub causal_validation_threshold: f64,
    /// Sliding-window size (samples) for temporal analysis.
    pub temporal_window_size: usize,
    /// Stability score below which a change point is recorded.
    pub causal_stability_threshold: f64,
    /// Declared for an iterative SEM fitter. The shipped structural
    /// modeling is closed-form OLS per equation, so this is currently
    /// unused; it is kept for config compatibility.
    pub sem_convergence_threshold: f64,
    /// See `sem_convergence_threshold` — kept for config compatibility.
    pub max_sem_iterations: usize,
    /// Minimum |expected effect| for an intervention to be surfaced.
    pub intervention_effect_threshold: f64,
    /// Minimum complete sample pairs for an intervention estimate.
    pub min_intervention_samples: usize,
    /// Minimum control impact for a candidate to count as a confounder.
    pub confounding_threshold: f64,
    /// Cap on candidate confounders screened per relationship.
    pub max_confounding_variables: usize,
}

impl Default for CausalAnalysisConfig {
    fn default() -> Self {
        Self {
            pc_algorithm_alpha: defaults::DEFAULT_PC_ALGORITHM_ALPHA,
            min_data_points_for_granger: defaults::DEFAULT_MIN_DATA_POINTS_FOR_GRANGER,
            max_lag_for_granger: defaults::DEFAULT_MAX_LAG_FOR_GRANGER,
            granger_significance_level: defaults::DEFAULT_GRANGER_SIGNIFICANCE_LEVEL,
            transfer_entropy_threshold: defaults::DEFAULT_TRANSFER_ENTROPY_THRESHOLD,
            min_causal_strength: defaults::DEFAULT_MIN_CAUSAL_STRENGTH,
            causal_validation_threshold: defaults::DEFAULT_CAUSAL_VALIDATION_THRESHOLD,
            temporal_window_size: defaults::DEFAULT_TEMPORAL_WINDOW_SIZE,
            causal_stability_threshold: defaults::DEFAULT_CAUSAL_STABILITY_THRESHOLD,
            sem_convergence_threshold: defaults::DEFAULT_SEM_CONVERGENCE_THRESHOLD,
            max_sem_iterations: defaults::DEFAULT_MAX_SEM_ITERATIONS,
            intervention_effect_threshold: defaults::DEFAULT_INTERVENTION_EFFECT_THRESHOLD,
            min_intervention_samples: defaults::DEFAULT_MIN_INTERVENTION_SAMPLES,
            confounding_threshold: defaults::DEFAULT_CONFOUNDING_THRESHOLD,
            max_confounding_variables: defaults::DEFAULT_MAX_CONFOUNDING_VARIABLES,
        }
    }
}

impl CausalAnalysisConfig {
    /// Validate threshold ranges. Called once at the orchestration boundary.
    pub fn validate(&self) -> Result<(), crate::errors::AnalysisError> {
        let unit_bounded = [
            ("pc_algorithm_alpha", self.pc_algorithm_alpha),
            ("granger_significance_level", self.granger_significance_level),
            ("min_causal_strength", self.min_causal_strength),
            ("causal_validation_threshold", self.causal_validation_threshold),
            ("causal_stability_threshold", self.causal_stability_threshold),
            ("confounding_threshold", self.confounding_threshold),
        ];
        for (name, value) in unit_bounded {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(crate::errors::AnalysisError::InvalidConfig {
                    reason: format!("{name} must be in [0, 1], got {value}"),
                });
            }
        }
        if self.temporal_window_size < 2 {
            return Err(crate::errors::AnalysisError::InvalidConfig {
                reason: format!(
                    "temporal_window_size must be at least 2, got {}",
                    self.temporal_window_size
                ),
            });
        }
        if self.max_lag_for_granger == 0 {
            return Err(crate::errors::AnalysisError::InvalidConfig {
                reason: "max_lag_for_granger must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(CausalAnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let config = CausalAnalysisConfig {
            min_causal_strength: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = CausalAnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CausalAnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.temporal_window_size, config.temporal_window_size);
        assert_eq!(back.pc_algorithm_alpha, config.pc_algorithm_alpha);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config: CausalAnalysisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_lag_for_granger, 5);
        assert_eq!(config.min_intervention_samples, 10);
    }
}
