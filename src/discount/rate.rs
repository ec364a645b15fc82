use crate::Result;
use crate::misc::EngineError;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// A per-period discount rate, validated at construction.
///
/// Shared by all stream-to-PV derivations within a run. Must be finite and
/// strictly greater than -1, otherwise the discount factor is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountRate(f64);

impl DiscountRate {
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= -1.0 {
            return Err(EngineError::InvalidDiscountRate { rate });
        }

        Ok(Self(rate))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for DiscountRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
