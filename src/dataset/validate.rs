//! Fail-fast validation of a working dataset.

use crate::Result;
use crate::dataset::Dataset;
use crate::misc::EngineError;

/// Validate a dataset before ranking.
///
/// Iterates policies then outcomes in input order and fails on the first
/// violation, so the reported error is deterministic. `tolerance` bounds
/// how far a policy's probability sum may drift from 1. Pure; no side
/// effects on the dataset.
pub fn validate(dataset: &Dataset, tolerance: f64) -> Result<()> {
    if dataset.is_empty() {
        return Err(EngineError::NoData);
    }

    for policy in &dataset.policies {
        if policy.outcomes.is_empty() {
            return Err(EngineError::EmptyPolicy { policy: policy.id.clone() });
        }

        let mut sum = 0.0;
        for outcome in &policy.outcomes {
            let p = outcome.probability;
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(EngineError::ProbabilityRange {
                    policy: policy.id.clone(),
                    outcome: outcome.label.clone(),
                    value: p,
                });
            }

            sum += p;
        }

        if (sum - 1.0).abs() > tolerance {
            return Err(EngineError::ProbabilitySum {
                policy: policy.id.clone(),
                sum,
            });
        }
    }

    Ok(())
}
