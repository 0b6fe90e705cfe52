//! Replays a plan attempt by attempt with a seeded RNG.

use super::config::SimConfig;
use super::report::SimReport;
use crate::constants::MYRIA;
use crate::strategy::HoningPlan;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Outcome of one simulated attempt chain.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub attempts: u32,
    pub total_cost: f64,
    pub succeeded: bool,
}

/// Run the full simulation and return a report.
pub fn run_simulation(plan: &HoningPlan, config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };
        all_runs.push(simulate_single_run(plan, config.max_attempts_per_run, &mut rng));
    }

    let report = SimReport::from_runs(&all_runs);
    tracing::debug!(
        runs = report.num_runs,
        avg_attempts = report.avg_attempts,
        avg_cost = report.avg_cost,
        "simulation finished"
    );
    report
}

/// Walk the plan: each failure moves to the next step; the last step repeats.
pub fn simulate_single_run<R: Rng>(plan: &HoningPlan, max_attempts: u32, rng: &mut R) -> RunStats {
    let mut stats = RunStats {
        attempts: 0,
        total_cost: 0.0,
        succeeded: false,
    };
    let Some(last) = plan.steps.len().checked_sub(1) else {
        return stats;
    };

    while stats.attempts < max_attempts {
        let step = &plan.steps[(stats.attempts as usize).min(last)];
        stats.attempts += 1;
        stats.total_cost += step.attempt_cost;
        if rng.gen_range(0..MYRIA) < step.success_permyria {
            stats.succeeded = true;
            break;
        }
    }
    stats
}
