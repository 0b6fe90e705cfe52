//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of attempt chains to replay
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Attempts per chain before giving up
    pub max_attempts_per_run: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 10_000,
            seed: None,
            max_attempts_per_run: 10_000,
        }
    }
}

impl SimConfig {
    /// Quick reproducible config for tests
    pub fn seeded(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
