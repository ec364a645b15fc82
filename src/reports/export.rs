//! CSV export of a computed ranking.

use crate::ranking::RankedPolicy;
use anyhow::Context;
use std::io::Write;

/// Write `Policy,PV_ETNB,Rank` rows. The input is already ordered by rank
/// ascending then policy id ascending, and that order is preserved.
pub fn generate<W: Write>(writer: W, ranking: &[RankedPolicy]) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Policy", "PV_ETNB", "Rank"]).context("writing ranking CSV")?;

    for row in ranking {
        csv_writer
            .write_record([row.policy.as_str(), &row.pv_etnb.to_string(), &row.rank.to_string()])
            .context("writing ranking CSV")?;
    }

    csv_writer.flush().context("writing ranking CSV")?;
    Ok(())
}
