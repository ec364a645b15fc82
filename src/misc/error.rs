//! Error taxonomy for the calculation engine.

use thiserror::Error;

/// A failure detected while validating or ranking a dataset.
///
/// Every variant carries enough context (policy, outcome, or field name) to
/// locate the offending input. Computations are deterministic, so retrying
/// with unchanged input reproduces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A policy's outcome probabilities don't sum to 1 within tolerance.
    #[error("policy '{policy}': probabilities must sum to 1 (sum is {sum})")]
    ProbabilitySum { policy: String, sum: f64 },

    /// An individual probability is outside [0, 1] or not finite.
    #[error("policy '{policy}', outcome '{outcome}': probability {value} is not in [0, 1]")]
    ProbabilityRange { policy: String, outcome: String, value: f64 },

    /// A required field is absent or didn't parse as a finite number.
    #[error("{location}: missing or non-numeric field '{field}'")]
    MissingField { location: String, field: String },

    /// The CSV layer couldn't read a row at all (bad quoting, uneven
    /// record lengths, I/O failure).
    #[error("malformed input: {0}")]
    Malformed(String),

    /// The dataset has no policies at all.
    #[error("no data to rank")]
    NoData,

    /// A policy exists but has no outcomes. Distinct from a computed
    /// PV(ETNB) of zero, which is a valid result.
    #[error("policy '{policy}': no data to rank")]
    EmptyPolicy { policy: String },

    /// The discount rate is not finite or is <= -1.
    #[error("invalid discount rate {rate}")]
    InvalidDiscountRate { rate: f64 },

    /// Aggregation produced NaN or an infinity.
    #[error("policy '{policy}': PV(ETNB) is not a finite number")]
    NonFinite { policy: String },

    /// The two-period allocation inputs are unusable.
    #[error("invalid allocation input: {reason}")]
    InvalidAllocation { reason: String },

    /// A configuration field is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
