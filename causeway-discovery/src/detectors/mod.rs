//! The three discovery detectors. Each is a free `detect` function over
//! the shared immutable dataset, returning raw single-method candidates.
//! Statistics keys are prefixed per detector (`pc_`, `granger_`, `te_`)
//! so merged relationships keep every method's numbers.

pub mod constraint_based;
pub mod granger;
pub mod transfer_entropy;
