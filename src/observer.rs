//! Observer interface between the solvers and whatever presents them.
//!
//! Solvers emit a [`Snapshot`] after every accepted move or round. The
//! observer gets the board by shared reference and cannot alter search
//! state. Rendering, pacing and input handling all live on the observer
//! side.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::Board;
use crate::compare::ComparisonReport;
use crate::error::QueensError;

/// The three local-search heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    HillClimbing,
    SimulatedAnnealing,
    LocalBeamSearch,
}

impl Algorithm {
    /// All algorithms, in comparison order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::HillClimbing,
        Algorithm::SimulatedAnnealing,
        Algorithm::LocalBeamSearch,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::HillClimbing => "Hill Climbing",
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
            Algorithm::LocalBeamSearch => "Local Beam Search",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Algorithm::HillClimbing => 0,
            Algorithm::SimulatedAnnealing => 1,
            Algorithm::LocalBeamSearch => 2,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = QueensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hill" | "hc" | "hill-climbing" | "hill_climbing" => Ok(Algorithm::HillClimbing),
            "sa" | "anneal" | "simulated-annealing" | "simulated_annealing" => {
                Ok(Algorithm::SimulatedAnnealing)
            }
            "beam" | "lbs" | "local-beam-search" | "local_beam_search" => {
                Ok(Algorithm::LocalBeamSearch)
            }
            other => Err(QueensError::invalid(format!("unknown algorithm '{other}'"))),
        }
    }
}

/// How a single solver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Reached a board with zero conflicts.
    Solved,
    /// No neighbor improves on the current cost.
    LocalOptimum,
    /// Iteration, round or temperature budget exhausted.
    BudgetExhausted,
    /// Stopped by an external cancel request.
    Cancelled,
}

/// State handed to the observer after each accepted move or round.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    /// Row whose queen just moved; `None` for an initial state.
    pub row: Option<usize>,
    pub cost: usize,
    pub algorithm: Algorithm,
}

/// Receives search progress. Every method defaults to a no-op.
pub trait SearchObserver {
    fn on_snapshot(&mut self, _snapshot: &Snapshot<'_>) {}

    fn on_trial_progress(&mut self, _algorithm: Algorithm, _trial: usize, _total: usize) {}

    fn on_comparison_complete(&mut self, _report: &ComparisonReport) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that keeps the snapshot stream, for tests and replay.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub snapshots: Vec<(Board, Option<usize>, usize, Algorithm)>,
    pub progress: Vec<(Algorithm, usize, usize)>,
    pub completed: usize,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Costs of all recorded snapshots, in emission order.
    pub fn costs(&self) -> Vec<usize> {
        self.snapshots.iter().map(|s| s.2).collect()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        self.snapshots.push((
            snapshot.board.clone(),
            snapshot.row,
            snapshot.cost,
            snapshot.algorithm,
        ));
    }

    fn on_trial_progress(&mut self, algorithm: Algorithm, trial: usize, total: usize) {
        self.progress.push((algorithm, trial, total));
    }

    fn on_comparison_complete(&mut self, _report: &ComparisonReport) {
        self.completed += 1;
    }
}

/// Whether an optional cancel flag has been raised.
pub(crate) fn is_cancelled(cancel: &Option<Arc<AtomicBool>>) -> bool {
    cancel
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("hill".parse::<Algorithm>().unwrap(), Algorithm::HillClimbing);
        assert_eq!("SA".parse::<Algorithm>().unwrap(), Algorithm::SimulatedAnnealing);
        assert_eq!(
            "local-beam-search".parse::<Algorithm>().unwrap(),
            Algorithm::LocalBeamSearch
        );
        assert!("tabu".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_indices_distinct() {
        let idx: Vec<usize> = Algorithm::ALL.iter().map(|a| a.index()).collect();
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn test_cancel_flag() {
        assert!(!is_cancelled(&None));
        let flag = Arc::new(AtomicBool::new(false));
        let cancel = Some(flag.clone());
        assert!(!is_cancelled(&cancel));
        flag.store(true, Ordering::Relaxed);
        assert!(is_cancelled(&cancel));
    }
}
