//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from a board and compute its cost
//! 2. At each iteration:
//!    a. Evaluate every single-queen neighbor
//!    b. Keep the first neighbor with the strictly lowest cost
//!    c. Stop if it does not beat the current cost (local optimum)
//!    d. Otherwise move to it; stop if it is a solution
//! 3. Stop after `max_iterations` scans

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use super::config::HillConfig;
use crate::board::{all_neighbors, conflicts, Board, Move};
use crate::error::{QueensError, Result};
use crate::observer::{is_cancelled, Algorithm, SearchObserver, Snapshot, Termination};
use crate::random::rng_from_seed;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillResult {
    /// Board the search ended on.
    pub board: Board,

    /// Cost of `board`.
    pub cost: usize,

    /// Cost of the starting board.
    pub initial_cost: usize,

    /// Number of neighborhood scans performed.
    pub iterations: usize,

    pub termination: Termination,

    /// Cost after each accepted move, starting with the initial cost.
    pub cost_history: Vec<usize>,
}

impl HillResult {
    pub fn solved(&self) -> bool {
        self.cost == 0
    }

    pub fn cancelled(&self) -> bool {
        self.termination == Termination::Cancelled
    }

    /// Turns a cancelled run into [`QueensError::Cancelled`].
    pub fn completed(self) -> Result<Self> {
        if self.cancelled() {
            Err(QueensError::Cancelled)
        } else {
            Ok(self)
        }
    }
}

/// Executes steepest-descent hill climbing.
pub struct HillRunner;

impl HillRunner {
    /// Runs hill climbing from a random board, seeded from `config.seed`.
    pub fn run(config: &HillConfig) -> Result<HillResult> {
        let mut observer = crate::observer::NoopObserver;
        Self::run_with_observer(config, &mut observer, None)
    }

    /// Runs with an observer and an optional cancellation token.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        config: &HillConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<HillResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(config, &mut rng, observer, cancel)
    }

    /// Runs from a random board drawn from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized, O: SearchObserver + ?Sized>(
        config: &HillConfig,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<HillResult> {
        config.validate()?;
        let board = Board::random(config.board_size, rng);
        Self::run_from(config, board, observer, cancel)
    }

    /// Runs from a given starting board.
    ///
    /// The board must have `config.board_size` rows.
    pub fn run_from<O: SearchObserver + ?Sized>(
        config: &HillConfig,
        board: Board,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<HillResult> {
        config.validate()?;
        if board.len() != config.board_size {
            return Err(QueensError::invalid(format!(
                "starting board has {} rows, expected {}",
                board.len(),
                config.board_size
            )));
        }

        let mut current = board;
        let mut current_cost = conflicts(&current);
        let initial_cost = current_cost;
        let mut cost_history = vec![current_cost];

        info!(
            event = "solve_start",
            algorithm = "hill_climbing",
            board_size = config.board_size,
            initial_cost,
        );

        observer.on_snapshot(&Snapshot {
            board: &current,
            row: None,
            cost: current_cost,
            algorithm: Algorithm::HillClimbing,
        });

        let mut iterations = 0usize;
        let mut termination = if current_cost == 0 {
            Termination::Solved
        } else {
            Termination::BudgetExhausted
        };

        while current_cost > 0 && iterations < config.max_iterations {
            if is_cancelled(&cancel) {
                termination = Termination::Cancelled;
                break;
            }
            iterations += 1;

            let Some((mv, cost)) = best_improving_neighbor(&current, current_cost) else {
                termination = Termination::LocalOptimum;
                break;
            };

            current = mv.board;
            current_cost = cost;
            cost_history.push(current_cost);

            debug!(event = "step", iteration = iterations, row = mv.row, cost = current_cost);
            observer.on_snapshot(&Snapshot {
                board: &current,
                row: Some(mv.row),
                cost: current_cost,
                algorithm: Algorithm::HillClimbing,
            });

            if current_cost == 0 {
                termination = Termination::Solved;
            }
        }

        info!(
            event = "solve_end",
            algorithm = "hill_climbing",
            cost = current_cost,
            iterations,
            termination = ?termination,
        );

        Ok(HillResult {
            board: current,
            cost: current_cost,
            initial_cost,
            iterations,
            termination,
            cost_history,
        })
    }
}

/// First neighbor, in generation order, with the lowest cost strictly
/// below `current_cost`.
fn best_improving_neighbor(board: &Board, current_cost: usize) -> Option<(Move, usize)> {
    let mut best: Option<(Move, usize)> = None;
    let mut best_cost = current_cost;
    for mv in all_neighbors(board) {
        let cost = conflicts(&mv.board);
        if cost < best_cost {
            best_cost = cost;
            best = Some((mv, cost));
        }
    }
    best
}
