use crate::discount::{DiscountRate, present_value};

/// Net benefits per period, period 0 first. Fixed length per run; periods
/// absent from the input are stored as 0.
#[derive(Debug, Clone, PartialEq)]
pub struct BenefitStream(Vec<f64>);

impl BenefitStream {
    #[must_use]
    pub const fn new(benefits: Vec<f64>) -> Self {
        Self(benefits)
    }

    #[must_use]
    pub fn benefits(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn periods(&self) -> usize {
        self.0.len()
    }
}

/// How an outcome's PV(TNB) is supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeValue {
    /// PV(TNB) entered directly.
    PresentValue(f64),

    /// A net-benefit stream to be discounted into PV(TNB).
    Stream(BenefitStream),
}

/// One mutually-exclusive possible result under a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub label: String,
    pub probability: f64,
    pub value: OutcomeValue,
}

impl Outcome {
    /// Resolve this outcome's PV(TNB), discounting the stream form.
    #[must_use]
    pub fn present_value(&self, rate: DiscountRate) -> f64 {
        match &self.value {
            OutcomeValue::PresentValue(pv) => *pv,
            OutcomeValue::Stream(stream) => present_value(stream.benefits(), rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_value_ignores_rate() {
        let outcome = Outcome {
            label: "E".into(),
            probability: 1.0,
            value: OutcomeValue::PresentValue(250.0),
        };
        assert_eq!(outcome.present_value(DiscountRate::new(0.3).unwrap()), 250.0);
    }

    #[test]
    fn test_stream_value_is_discounted() {
        let outcome = Outcome {
            label: "E".into(),
            probability: 1.0,
            value: OutcomeValue::Stream(BenefitStream::new(vec![100.0, 100.0])),
        };
        assert_eq!(outcome.present_value(DiscountRate::new(1.0).unwrap()), 150.0);
    }
}
