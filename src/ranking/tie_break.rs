use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How policies with equal PV(ETNB) receive ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize, Display, EnumString)]
#[value(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Tied policies share the smaller rank and the next distinct value
    /// resumes at its position (1, 1, 3, ...). Ties list by policy id.
    Competition,

    /// Every policy gets a distinct rank 1..n; exact ties keep their
    /// input order.
    InputOrder,
}
