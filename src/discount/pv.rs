//! Present-value derivation for net-benefit streams.

use crate::discount::DiscountRate;

/// Discount a net-benefit stream to present value.
///
/// `benefits[t]` is the net benefit received in period `t`, with period 0
/// undiscounted: `PV = sum(B_t / (1 + r)^t)`. Positive, negative, and zero
/// benefits are all valid. Pure and deterministic.
#[must_use]
pub fn present_value(benefits: &[f64], rate: DiscountRate) -> f64 {
    let growth = 1.0 + rate.get();

    let mut factor = 1.0;
    let mut pv = 0.0;
    for benefit in benefits {
        pv += benefit / factor;
        factor *= growth;
    }

    pv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(r: f64) -> DiscountRate {
        DiscountRate::new(r).unwrap()
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        assert_eq!(present_value(&[100.0, 100.0, 100.0, 100.0], rate(0.0)), 400.0);
        assert_eq!(present_value(&[5.0, -3.0, 0.5], rate(0.0)), 2.5);
    }

    #[test]
    fn test_period_zero_is_undiscounted() {
        assert_eq!(present_value(&[100.0, 0.0, 0.0, 0.0], rate(1.0)), 100.0);
    }

    #[test]
    fn test_future_periods_are_discounted() {
        // 100/2 + 100/4 at r = 1
        assert_eq!(present_value(&[0.0, 100.0, 100.0], rate(1.0)), 75.0);
    }

    #[test]
    fn test_negative_benefits_are_valid() {
        assert_eq!(present_value(&[-100.0, 0.0], rate(0.25)), -100.0);
        assert!(present_value(&[0.0, -100.0], rate(0.25)) < 0.0);
    }

    #[test]
    fn test_empty_stream_is_zero() {
        assert_eq!(present_value(&[], rate(0.07)), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let stream = [12.5, -7.25, 3.0, 990.0];
        let r = rate(0.035);
        assert_eq!(present_value(&stream, r), present_value(&stream, r));
    }
}
