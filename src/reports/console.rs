//! Console report for a computed ranking.

use crate::ranking::RankingOutcome;
use owo_colors::OwoColorize;
use std::io::Write;

/// Print the ranked table, the recommended policy, and optionally the
/// per-outcome calculation detail.
pub fn generate<W: Write>(mut out: W, outcome: &RankingOutcome, show_details: bool, colorize: bool) -> anyhow::Result<()> {
    writeln!(out, "{:>4}  {:<16} {:>14}", "Rank", "Policy", "PV(ETNB)")?;
    for row in &outcome.ranking {
        writeln!(out, "{:>4}  {:<16} {:>14.2}", row.rank, row.policy, row.pv_etnb)?;
    }

    if let Some(best) = outcome.ranking.first() {
        let line = format!("Recommended policy: {} (PV(ETNB) = {:.2})", best.policy, best.pv_etnb);
        if colorize {
            writeln!(out, "\n{}", line.green().bold())?;
        } else {
            writeln!(out, "\n{line}")?;
        }
    }

    if show_details {
        writeln!(out, "\n{:<16} {:<16} {:>8} {:>14} {:>14}", "Policy", "Outcome", "Prob", "PV(TNB)", "Weighted")?;
        for detail in &outcome.details {
            writeln!(
                out,
                "{:<16} {:<16} {:>8.3} {:>14.2} {:>14.2}",
                detail.policy, detail.outcome, detail.probability, detail.pv_tnb, detail.weighted_pv_tnb
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{OutcomeDetail, RankedPolicy};

    fn outcome() -> RankingOutcome {
        RankingOutcome {
            ranking: vec![
                RankedPolicy {
                    policy: "B".into(),
                    pv_etnb: 100.0,
                    rank: 1,
                },
                RankedPolicy {
                    policy: "A".into(),
                    pv_etnb: 40.0,
                    rank: 2,
                },
            ],
            details: vec![OutcomeDetail {
                policy: "A".into(),
                outcome: "E".into(),
                probability: 1.0,
                pv_tnb: 40.0,
                weighted_pv_tnb: 40.0,
            }],
        }
    }

    #[test]
    fn test_recommends_the_top_policy() {
        let mut buffer = Vec::new();
        generate(&mut buffer, &outcome(), false, false).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Recommended policy: B (PV(ETNB) = 100.00)"));
        assert!(!text.contains("Weighted"));
    }

    #[test]
    fn test_details_are_optional() {
        let mut buffer = Vec::new();
        generate(&mut buffer, &outcome(), true, false).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Weighted"));
        assert!(text.contains("E"));
    }
}
