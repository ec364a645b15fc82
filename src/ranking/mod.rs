mod ranked_policy;
mod ranker;
mod tie_break;

pub use ranked_policy::{OutcomeDetail, RankedPolicy};
pub use ranker::{Ranker, RankingOutcome};
pub use tie_break::TieBreak;
