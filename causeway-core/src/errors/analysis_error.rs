/// Causal analysis errors.
///
/// Per-item failures (one confounder candidate, one relationship) are
/// warn-logged and skipped inside the pipeline; only orchestration-level
/// failures surface as one of these variants.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("insufficient data: needed {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("singular design matrix: {context}")]
    Singular { context: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("analysis cancelled")]
    Cancelled,
}

/// Result alias used throughout the workspace.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
