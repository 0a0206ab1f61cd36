use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Estimated effect of hypothetically fixing one variable (do-operator style).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionEffect {
    /// The variable being intervened on.
    pub variable: String,
    /// The variable whose response is estimated.
    pub target: String,
    /// The hypothetical value the intervention variable is set to.
    pub intervention_value: f64,
    /// Expected standardized effect on the target, in [-1, 1].
    pub expected_effect: f64,
    /// 95% confidence interval around the expected effect.
    pub confidence_interval: (f64, f64),
    /// Probability that the effect is real (1 − p of the slope).
    pub probability: f64,
    /// Kind of intervention the estimate models.
    pub intervention_type: String,
    /// Assumptions underlying the estimate, for documentation.
    pub assumptions: Vec<String>,
    /// Estimate under alternative modeling choices (perturbed slope,
    /// no-intercept refit).
    pub sensitivity: HashMap<String, f64>,
}
