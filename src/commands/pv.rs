//! The `pv` command: discount a single net-benefit stream.

use crate::discount::{DiscountRate, present_value};
use clap::Args;

#[derive(Debug, Args)]
pub struct PvArgs {
    /// Per-period discount rate
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub rate: f64,

    /// Net benefits per period, starting with the undiscounted period 0
    #[arg(required = true, value_name = "BENEFIT", allow_negative_numbers = true)]
    pub benefits: Vec<f64>,
}

pub fn process_pv(args: &PvArgs) -> anyhow::Result<()> {
    let rate = DiscountRate::new(args.rate)?;
    let pv = present_value(&args.benefits, rate);
    println!("PV(B0..B{}) = {pv:.2}", args.benefits.len() - 1);
    Ok(())
}
