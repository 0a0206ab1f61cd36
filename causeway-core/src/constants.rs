//! Embedded analysis constants.
//!
//! The method-combination and strength-blend weights are deliberate
//! constants rather than configuration; changing them changes the meaning
//! of every reported strength, so they stay pinned here.

/// Causeway version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Epsilon guard for near-zero denominators in correlation math.
pub const EPSILON: f64 = 1e-10;

/// Method weight for the constraint-based (PC-style) detector.
pub const WEIGHT_PC_ALGORITHM: f64 = 0.4;

/// Method weight for the Granger-causality detector.
pub const WEIGHT_GRANGER: f64 = 0.4;

/// Method weight for the transfer-entropy detector.
pub const WEIGHT_TRANSFER_ENTROPY: f64 = 0.2;

/// Method weight for any detector label not recognized above.
pub const WEIGHT_DEFAULT: f64 = 0.1;

/// Blend weight of the raw-correlation component in causal strength.
pub const BLEND_CORRELATION: f64 = 0.3;

/// Blend weight of the Granger/temporal component in causal strength.
pub const BLEND_TEMPORAL: f64 = 0.4;

/// Blend weight of the interventional component in causal strength.
pub const BLEND_INTERVENTIONAL: f64 = 0.3;

/// Two-sided 95% normal critical value used for confidence intervals.
pub const Z_95: f64 = 1.96;

/// Detector method labels. Merge weights key off these strings.
pub const METHOD_PC: &str = "PC Algorithm";
pub const METHOD_GRANGER: &str = "Granger Causality";
pub const METHOD_TRANSFER_ENTROPY: &str = "Transfer Entropy";

/// Weight assigned to a detector method label when merging.
pub fn method_weight(method: &str) -> f64 {
    match method {
        METHOD_PC => WEIGHT_PC_ALGORITHM,
        METHOD_GRANGER => WEIGHT_GRANGER,
        METHOD_TRANSFER_ENTROPY => WEIGHT_TRANSFER_ENTROPY,
        _ => WEIGHT_DEFAULT,
    }
}
