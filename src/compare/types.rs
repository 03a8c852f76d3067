//! Trial records and the aggregated comparison report.

use std::fmt;
use std::time::Duration;

use crate::observer::Algorithm;

/// Outcome of one completed trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    pub algorithm: Algorithm,
    /// Zero-based trial index within its algorithm.
    pub trial: usize,
    /// Whether the final cost was zero.
    pub solved: bool,
    pub cost: usize,
    /// Wall-clock time of the solver call.
    pub elapsed: Duration,
}

/// Aggregate over the completed trials of one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    /// Completed trials; cancelled trials are not counted.
    pub trials: usize,
    pub success_count: usize,
    /// Mean final cost. 0.0 when no trial completed.
    pub avg_cost: f64,
    /// Mean wall-clock time. Zero when no trial completed.
    pub avg_time: Duration,
}

impl AlgorithmSummary {
    /// Builds the summary from every trial of `algorithm` in `trials`.
    ///
    /// Sums are order-independent, so trials may arrive in any order.
    pub fn from_trials(algorithm: Algorithm, trials: &[TrialResult]) -> Self {
        let mut count = 0usize;
        let mut success_count = 0usize;
        let mut total_cost = 0usize;
        let mut total_time = Duration::ZERO;

        for t in trials.iter().filter(|t| t.algorithm == algorithm) {
            count += 1;
            if t.solved {
                success_count += 1;
            }
            total_cost += t.cost;
            total_time += t.elapsed;
        }

        let (avg_cost, avg_time) = if count == 0 {
            (0.0, Duration::ZERO)
        } else {
            (
                total_cost as f64 / count as f64,
                total_time / count as u32,
            )
        };

        Self {
            algorithm,
            trials: count,
            success_count,
            avg_cost,
            avg_time,
        }
    }

    /// Fraction of completed trials that were solved, in [0, 1].
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.success_count as f64 / self.trials as f64
        }
    }

    pub fn avg_time_secs(&self) -> f64 {
        self.avg_time.as_secs_f64()
    }
}

/// Per-algorithm comparison results, built fresh for each comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// One summary per compared algorithm, in comparison order.
    pub summaries: Vec<AlgorithmSummary>,

    /// Every completed trial.
    pub trials: Vec<TrialResult>,

    /// Trials requested per algorithm.
    pub requested_trials: usize,

    /// Whether the run was stopped before all trials completed.
    pub cancelled: bool,
}

impl ComparisonReport {
    pub fn new(
        algorithms: &[Algorithm],
        trials: Vec<TrialResult>,
        requested_trials: usize,
        cancelled: bool,
    ) -> Self {
        let summaries = algorithms
            .iter()
            .map(|&a| AlgorithmSummary::from_trials(a, &trials))
            .collect();
        Self {
            summaries,
            trials,
            requested_trials,
            cancelled,
        }
    }

    pub fn summary(&self, algorithm: Algorithm) -> Option<&AlgorithmSummary> {
        self.summaries.iter().find(|s| s.algorithm == algorithm)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<22}{:>14}{:>15}{:>14}",
            "Algorithm", "Success Rate", "Avg Conflicts", "Avg Time (s)"
        )?;
        for s in &self.summaries {
            writeln!(
                f,
                "{:<22}{:>13.0}%{:>15.2}{:>14.4}",
                s.algorithm.label(),
                s.success_rate() * 100.0,
                s.avg_cost,
                s.avg_time_secs()
            )?;
        }
        if self.cancelled {
            writeln!(f, "(cancelled: partial results)")?;
        }
        Ok(())
    }
}
