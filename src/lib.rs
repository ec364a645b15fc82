//! Core library for the `greenlight` tool, which ranks discrete policy
//! options by the present value of their expected total net benefits.
//!
//! The calculation pipeline is: raw CSV rows -> [`dataset`] (model +
//! validation) -> [`discount`] (stream-to-PV derivation) -> [`ranking`]
//! (probability-weighted aggregation and ordering) -> [`reports`].

pub mod allocation;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod discount;
pub mod misc;
pub mod ranking;
pub mod reports;

pub type Result<T, E = misc::EngineError> = core::result::Result<T, E>;

/// Tolerance for the per-policy probability-sum check (|sum - 1| must not exceed this).
pub const PROB_TOLERANCE: f64 = 1e-6;

/// Tolerance under which two PV(ETNB) values are considered tied for ranking.
pub const RANK_TOLERANCE: f64 = 1e-6;
