//! Pure value types produced and consumed by the analysis pipeline.
//! One file per model; everything here is serializable and immutable
//! once constructed.

pub mod analysis_result;
pub mod causal_data;
pub mod comparison_result;
pub mod confounding;
pub mod equation;
pub mod graph;
pub mod intervention;
pub mod relationship;
pub mod temporal_result;

pub use analysis_result::{
    CausalAnalysisResult, Insight, InsightKind, ModelStatistics, Recommendation,
    ValidationOutcome,
};
pub use causal_data::CausalData;
pub use comparison_result::{CausalComparisonResult, RelationshipDelta};
pub use confounding::{ConfoundingFactor, ConfoundingMetrics};
pub use equation::{EquationTerm, StructuralEquation};
pub use graph::{CausalEdge, CausalGraph, CausalNode};
pub use intervention::InterventionEffect;
pub use relationship::{CausalDirection, CausalRelationship};
pub use temporal_result::{
    CausalChangePoint, StabilityStatistics, TemporalCausalAnalysisResult, TemporalWindow,
};
