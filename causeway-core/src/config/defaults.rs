//! Default values for [`super::CausalAnalysisConfig`].

pub const DEFAULT_PC_ALGORITHM_ALPHA: f64 = 0.05;
pub const DEFAULT_MIN_DATA_POINTS_FOR_GRANGER: usize = 10;
pub const DEFAULT_MAX_LAG_FOR_GRANGER: usize = 5;
pub const DEFAULT_GRANGER_SIGNIFICANCE_LEVEL: f64 = 0.05;
pub const DEFAULT_TRANSFER_ENTROPY_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MIN_CAUSAL_STRENGTH: f64 = 0.3;
pub const DEFAULT_CAUSAL_VALIDATION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TEMPORAL_WINDOW_SIZE: usize = 20;
pub const DEFAULT_CAUSAL_STABILITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_SEM_CONVERGENCE_THRESHOLD: f64 = 1e-6;
pub const DEFAULT_MAX_SEM_ITERATIONS: usize = 100;
pub const DEFAULT_INTERVENTION_EFFECT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MIN_INTERVENTION_SAMPLES: usize = 10;
pub const DEFAULT_CONFOUNDING_THRESHOLD: f64 = 0.15;
pub const DEFAULT_MAX_CONFOUNDING_VARIABLES: usize = 10;
