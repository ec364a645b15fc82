use crate::dataset::Outcome;

/// A discrete policy option with its mutually exclusive outcomes.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// Unique identifier within a dataset.
    pub id: String,
    pub outcomes: Vec<Outcome>,
}

/// One run's working set of policies, in input order.
///
/// The ranking engine borrows a dataset read-only and produces a fresh
/// result each invocation; nothing here is mutated by a computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub policies: Vec<Policy>,
}

impl Dataset {
    #[must_use]
    pub const fn new(policies: Vec<Policy>) -> Self {
        Self { policies }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Append one outcome to the named policy, creating the policy at the
    /// end of the list on first sight. Preserves first-appearance order.
    pub fn push_outcome(&mut self, policy_id: &str, outcome: Outcome) {
        if let Some(i) = self.policies.iter().position(|p| p.id == policy_id) {
            self.policies[i].outcomes.push(outcome);
        } else {
            self.policies.push(Policy {
                id: policy_id.to_owned(),
                outcomes: vec![outcome],
            });
        }
    }
}
