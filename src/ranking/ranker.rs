//! Probability-weighted aggregation of outcomes into PV(ETNB) and the
//! ordering of policies by it.

use crate::dataset::Dataset;
use crate::discount::DiscountRate;
use crate::misc::EngineError;
use crate::ranking::{OutcomeDetail, RankedPolicy, TieBreak};
use crate::{RANK_TOLERANCE, Result};

const LOG_TARGET: &str = "greenlight::ranking";

/// Result of ranking a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    /// Policies ordered by rank ascending, then policy id ascending
    /// within a tie.
    pub ranking: Vec<RankedPolicy>,

    /// Per-outcome calculation detail, ordered by policy id then
    /// outcome label.
    pub details: Vec<OutcomeDetail>,
}

/// Ranks policies by PV(ETNB), best first.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    rate: DiscountRate,
    tie_break: TieBreak,
}

impl Ranker {
    #[must_use]
    pub const fn new(rate: DiscountRate, tie_break: TieBreak) -> Self {
        Self { rate, tie_break }
    }

    /// Compute PV(ETNB) for every policy and order them.
    ///
    /// Pure over the borrowed dataset: identical input always yields an
    /// identical outcome, and nothing is retained between invocations.
    /// Every policy in the dataset appears in the result exactly once.
    pub fn rank(&self, dataset: &Dataset) -> Result<RankingOutcome> {
        if dataset.is_empty() {
            return Err(EngineError::NoData);
        }

        let mut details = Vec::new();
        let mut scored = Vec::with_capacity(dataset.policies.len());

        for (position, policy) in dataset.policies.iter().enumerate() {
            // An empty outcome list must fail rather than score 0; a zero
            // PV(ETNB) is a valid result and must stay distinguishable
            // from "no data".
            if policy.outcomes.is_empty() {
                return Err(EngineError::EmptyPolicy { policy: policy.id.clone() });
            }

            let mut pv_etnb = 0.0;
            for outcome in &policy.outcomes {
                let pv_tnb = outcome.present_value(self.rate);
                let weighted = outcome.probability * pv_tnb;
                pv_etnb += weighted;

                details.push(OutcomeDetail {
                    policy: policy.id.clone(),
                    outcome: outcome.label.clone(),
                    probability: outcome.probability,
                    pv_tnb,
                    weighted_pv_tnb: weighted,
                });
            }

            if !pv_etnb.is_finite() {
                return Err(EngineError::NonFinite { policy: policy.id.clone() });
            }

            scored.push(Scored {
                position,
                id: policy.id.clone(),
                pv_etnb,
            });
        }

        scored.sort_by(|a, b| b.pv_etnb.total_cmp(&a.pv_etnb).then_with(|| a.position.cmp(&b.position)));

        let ranking = match self.tie_break {
            TieBreak::Competition => competition_ranking(scored),
            TieBreak::InputOrder => input_order_ranking(scored),
        };

        details.sort_by(|a, b| a.policy.cmp(&b.policy).then_with(|| a.outcome.cmp(&b.outcome)));

        log::debug!(target: LOG_TARGET, "Ranked {} policies with tie break '{}'", ranking.len(), self.tie_break);
        Ok(RankingOutcome { ranking, details })
    }
}

struct Scored {
    position: usize,
    id: String,
    pv_etnb: f64,
}

fn input_order_ranking(scored: Vec<Scored>) -> Vec<RankedPolicy> {
    scored
        .into_iter()
        .enumerate()
        .map(|(i, s)| RankedPolicy {
            policy: s.id,
            pv_etnb: s.pv_etnb,
            rank: i + 1,
        })
        .collect()
}

/// Competition ranking over a descending-sorted list: values within
/// `RANK_TOLERANCE` of their group's leader share the leader's rank, and
/// the next distinct value resumes at its one-based position.
fn competition_ranking(scored: Vec<Scored>) -> Vec<RankedPolicy> {
    let mut ranking: Vec<RankedPolicy> = Vec::with_capacity(scored.len());
    let mut group_start = 0;
    let mut group_score = 0.0;

    for (i, s) in scored.into_iter().enumerate() {
        if i == 0 || (group_score - s.pv_etnb).abs() > RANK_TOLERANCE {
            group_start = i;
            group_score = s.pv_etnb;
        }

        ranking.push(RankedPolicy {
            policy: s.id,
            pv_etnb: s.pv_etnb,
            rank: group_start + 1,
        });
    }

    // Within a tie group the output order is policy id, ascending.
    ranking.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.policy.cmp(&b.policy)));
    ranking
}
