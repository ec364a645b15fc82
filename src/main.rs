//! Ranks policy options by the present value of expected total net benefits.

use clap::{Parser, Subcommand};
use greenlight::commands::{AllocateArgs, PvArgs, RankArgs, process_allocate, process_pv, process_rank};

#[derive(Debug, Parser)]
#[command(name = "greenlight", version, about = "Ranks policy options by PV(ETNB)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank policies by the PV of their expected total net benefits
    Rank(RankArgs),

    /// Discount a net-benefit stream to present value
    Pv(PvArgs),

    /// Solve the two-period depletable-resource allocation
    Allocate(AllocateArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Rank(args) => process_rank(&args),
        Command::Pv(args) => process_pv(&args),
        Command::Allocate(args) => process_allocate(&args),
    }
}
