//! Simulation report generation.

use super::runner::RunStats;
use serde::Serialize;

/// Aggregated results from multiple simulated attempt chains.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_succeeded: u32,
    pub avg_attempts: f64,
    pub max_attempts: u32,
    pub avg_cost: f64,
    /// `success_by_attempt[i]` = runs that succeeded on attempt `i + 1`
    pub success_by_attempt: Vec<u32>,
}

impl SimReport {
    pub fn from_runs(runs: &[RunStats]) -> Self {
        let num_runs = runs.len() as u32;
        let runs_succeeded = runs.iter().filter(|r| r.succeeded).count() as u32;
        let max_attempts = runs.iter().map(|r| r.attempts).max().unwrap_or(0);

        let (avg_attempts, avg_cost) = if runs.is_empty() {
            (0.0, 0.0)
        } else {
            (
                runs.iter().map(|r| r.attempts as f64).sum::<f64>() / num_runs as f64,
                runs.iter().map(|r| r.total_cost).sum::<f64>() / num_runs as f64,
            )
        };

        let mut success_by_attempt = vec![0; max_attempts as usize];
        for run in runs.iter().filter(|r| r.succeeded && r.attempts > 0) {
            success_by_attempt[run.attempts as usize - 1] += 1;
        }

        Self {
            num_runs,
            runs_succeeded,
            avg_attempts,
            max_attempts,
            avg_cost,
            success_by_attempt,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  HONING SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} succeeded\n\n",
            self.num_runs, self.runs_succeeded
        ));

        report.push_str("── ATTEMPTS ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Attempts:        {:.3}\n", self.avg_attempts));
        report.push_str(&format!("  Max Attempts:        {}\n", self.max_attempts));
        report.push_str(&format!("  Avg Cost:            {:.2}\n\n", self.avg_cost));

        report.push_str("── SUCCESS BY ATTEMPT ───────────────────────────────────────────\n");
        for (i, &count) in self.success_by_attempt.iter().enumerate() {
            let share = if self.num_runs == 0 {
                0.0
            } else {
                count as f64 / self.num_runs as f64 * 100.0
            };
            report.push_str(&format!("  #{:<3} {:>8}  ({:.1}%)\n", i + 1, count, share));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(attempts: u32, total_cost: f64, succeeded: bool) -> RunStats {
        RunStats {
            attempts,
            total_cost,
            succeeded,
        }
    }

    #[test]
    fn test_from_runs_aggregates() {
        let report = SimReport::from_runs(&[run(1, 10.0, true), run(3, 30.0, true), run(2, 20.0, false)]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_succeeded, 2);
        assert_eq!(report.max_attempts, 3);
        assert!((report.avg_attempts - 2.0).abs() < 1e-12);
        assert!((report.avg_cost - 20.0).abs() < 1e-12);
        assert_eq!(report.success_by_attempt, vec![1, 0, 1]);
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(&[]);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_attempts, 0.0);
        assert!(report.success_by_attempt.is_empty());
        assert!(report.to_text().contains("Runs: 0 total"));
    }

    #[test]
    fn test_to_json_has_fields() {
        let report = SimReport::from_runs(&[run(1, 10.0, true)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["success_by_attempt"][0], 1);
    }
}
