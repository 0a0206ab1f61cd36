//! # causeway-core
//!
//! Foundation crate for the Causeway causal analysis engine.
//! Defines the data model, configuration, errors, shared statistics,
//! and cancellation. Every other crate in the workspace depends on this.

pub mod cancel;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod stats;

// Re-export the most commonly used types at the crate root.
pub use cancel::CancellationToken;
pub use config::CausalAnalysisConfig;
pub use dataset::Dataset;
pub use errors::{AnalysisError, AnalysisResult};
pub use models::{
    CausalAnalysisResult, CausalChangePoint, CausalComparisonResult, CausalData, CausalDirection,
    CausalEdge, CausalGraph, CausalNode, CausalRelationship, ConfoundingFactor,
    ConfoundingMetrics, EquationTerm, Insight, InsightKind, InterventionEffect, ModelStatistics,
    Recommendation, RelationshipDelta, StabilityStatistics, StructuralEquation,
    TemporalCausalAnalysisResult, TemporalWindow, ValidationOutcome,
};
