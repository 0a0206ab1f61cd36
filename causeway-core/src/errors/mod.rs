//! Error handling for Causeway.
//! One error enum for the analysis pipeline, `thiserror` only, zero `anyhow`.

pub mod analysis_error;

pub use analysis_error::{AnalysisError, AnalysisResult};
