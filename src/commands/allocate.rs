//! The `allocate` command: two-period depletable-resource allocation.

use crate::allocation::{AllocationInputs, allocate};
use crate::discount::DiscountRate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AllocateArgs {
    /// Inverse demand intercept a (P = a - b q)
    #[arg(long = "intercept", short = 'a', allow_negative_numbers = true)]
    pub intercept: f64,

    /// Inverse demand slope b
    #[arg(long = "slope", short = 'b')]
    pub slope: f64,

    /// Constant marginal cost of extraction
    #[arg(long = "mc", allow_negative_numbers = true)]
    pub marginal_cost: f64,

    /// Discount rate between the two periods
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub rate: f64,

    /// Total reserves to split across the two periods
    #[arg(long, short = 'q')]
    pub reserves: f64,
}

pub fn process_allocate(args: &AllocateArgs) -> anyhow::Result<()> {
    let inputs = AllocationInputs {
        intercept: args.intercept,
        slope: args.slope,
        marginal_cost: args.marginal_cost,
        rate: DiscountRate::new(args.rate)?,
        reserves: args.reserves,
    };

    let allocation = allocate(&inputs)?;
    println!("q1* = {:.4}", allocation.q1);
    println!("q2* = {:.4}", allocation.q2);
    println!("P1* = {:.4}, P2* = {:.4}", allocation.p1, allocation.p2);

    let lhs = allocation.p1 - args.marginal_cost;
    let rhs = (allocation.p2 - args.marginal_cost) / (1.0 + args.rate);
    println!("check: P1 - MC = {lhs:.4}, (P2 - MC)/(1 + r) = {rhs:.4}");
    Ok(())
}
