//! Derived, read-only results of a ranking computation.

/// A policy's position in a computed ranking.
///
/// Created fresh on each computation and never mutated in place; a
/// recomputation supersedes the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPolicy {
    pub policy: String,

    /// Present value of expected total net benefits: the
    /// probability-weighted sum of the policy's outcome PV(TNB) values.
    pub pv_etnb: f64,

    /// 1 = best.
    pub rank: usize,
}

/// One outcome's contribution to its policy's PV(ETNB).
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeDetail {
    pub policy: String,
    pub outcome: String,
    pub probability: f64,
    pub pv_tnb: f64,
    pub weighted_pv_tnb: f64,
}
