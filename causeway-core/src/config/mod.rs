//! Configuration for the analysis pipeline.

pub mod analysis_config;
pub mod defaults;

pub use analysis_config::CausalAnalysisConfig;
