//! Arena balance simulator for Monte Carlo analysis.
//!
//! Runs many automated arena careers to analyze:
//! - How many battles a fresh character survives
//! - Level reached before defeat
//! - Battle length in ticks
//!
//! Battles go through the same `ArenaSession`/`Battle` controller as real
//! play; only the player's input is replaced by an autopilot policy.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunOutcome, RunStats};
