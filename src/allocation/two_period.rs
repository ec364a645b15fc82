//! Two-period depletable-resource allocation.
//!
//! For linear inverse demand `P = a - b q` in both periods, constant
//! marginal cost, and a fixed total reserve, dynamic efficiency requires
//! `P1 - MC = (P2 - MC) / (1 + r)` with `q1 + q2 = Q`. That system has a
//! closed-form solution, so no iteration is involved.

use crate::Result;
use crate::discount::DiscountRate;
use crate::misc::EngineError;

/// Inputs to the two-period allocation.
#[derive(Debug, Clone, Copy)]
pub struct AllocationInputs {
    /// Demand intercept `a`.
    pub intercept: f64,

    /// Demand slope `b`; must be positive.
    pub slope: f64,

    /// Constant marginal cost of extraction.
    pub marginal_cost: f64,

    /// Discount rate between the two periods.
    pub rate: DiscountRate,

    /// Total reserves `Q` to split across the two periods.
    pub reserves: f64,
}

/// The efficient allocation and the implied prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub q1: f64,
    pub q2: f64,
    pub p1: f64,
    pub p2: f64,
}

/// Solve `P1 - MC = (P2 - MC) / (1 + r)` subject to `q1 + q2 = Q`.
pub fn allocate(inputs: &AllocationInputs) -> Result<Allocation> {
    if !inputs.slope.is_finite() || inputs.slope <= 0.0 {
        return Err(EngineError::InvalidAllocation {
            reason: format!("demand slope must be > 0 (got {})", inputs.slope),
        });
    }

    for (name, value) in [
        ("intercept", inputs.intercept),
        ("marginal cost", inputs.marginal_cost),
        ("reserves", inputs.reserves),
    ] {
        if !value.is_finite() {
            return Err(EngineError::InvalidAllocation {
                reason: format!("{name} must be finite (got {value})"),
            });
        }
    }

    let r = inputs.rate.get();
    let net_intercept = inputs.intercept - inputs.marginal_cost;
    let q1 = (r * net_intercept + inputs.slope * inputs.reserves) / (inputs.slope * (2.0 + r));
    let q2 = inputs.reserves - q1;

    Ok(Allocation {
        q1,
        q2,
        p1: inputs.intercept - inputs.slope * q1,
        p2: inputs.intercept - inputs.slope * q2,
    })
}
