//! The `rank` command: CSV in, ranked policies out.

use crate::config::Config;
use crate::dataset::{read_dataset, validate};
use crate::discount::DiscountRate;
use crate::misc::{ColorMode, InputMode};
use crate::ranking::{Ranker, TieBreak};
use crate::reports::{generate_console, generate_csv};
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;

const LOG_TARGET: &str = "greenlight::commands";

#[derive(Debug, Args)]
pub struct RankArgs {
    /// Input CSV file
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Input shape: direct PV(TNB) per outcome, or per-period benefit streams
    #[arg(long, short = 'm', value_enum, default_value_t = InputMode::Pv)]
    pub mode: InputMode,

    /// Discount rate applied to stream-mode inputs
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub discount_rate: Option<f64>,

    /// Number of benefit periods (columns B0..B{n-1}) expected in stream mode
    #[arg(long)]
    pub periods: Option<usize>,

    /// How policies with equal PV(ETNB) receive ranks
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// Write the ranking as CSV to this file instead of the console table
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Also print the per-outcome calculation detail
    #[arg(long)]
    pub details: bool,

    /// Configuration file (defaults to greenlight.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// When to colorize console output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,
}

pub fn process_rank(args: &RankArgs) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(rate) = args.discount_rate {
        config.discount_rate = rate;
    }
    if let Some(periods) = args.periods {
        config.periods = periods;
    }
    if let Some(tie_break) = args.tie_break {
        config.tie_break = tie_break;
    }
    config.validate()?;

    let file = File::open(&args.input).with_context(|| format!("opening input file '{}'", args.input.display()))?;
    let dataset = read_dataset(file, args.mode, config.periods)?;
    validate(&dataset, config.probability_tolerance)?;

    let rate = DiscountRate::new(config.discount_rate)?;
    let outcome = Ranker::new(rate, config.tie_break).rank(&dataset)?;
    log::info!(target: LOG_TARGET, "Ranked {} policies from '{}'", outcome.ranking.len(), args.input.display());

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating output file '{}'", path.display()))?;
            generate_csv(file, &outcome.ranking)
        }
        None => generate_console(stdout().lock(), &outcome, args.details, args.color.enabled()),
    }
}
