//! # causeway-confounding
//!
//! Screens every other variable as a possible confounder of each
//! discovered relationship: a candidate must be significantly associated
//! with both the cause and the effect, and controlling for it must move
//! the cause–effect correlation by more than the configured threshold.

pub mod detector;
pub mod metrics;

pub use detector::{detect, find_confounder, ConfoundingOutput};
pub use metrics::compute_metrics;
