//! Monte Carlo replay of honing plans.
//!
//! Runs thousands of seeded attempt chains against a computed plan to check:
//! - Average attempts against the plan's expected attempts
//! - Average spend against the plan's expected cost
//! - Which attempt usually succeeds

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
