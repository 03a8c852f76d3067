//! N-Queens local search.
//!
//! Places N queens on an N×N board, one per row, so that no two attack
//! each other, using three local-search heuristics:
//!
//! - **Hill Climbing**: steepest descent over the full single-queen
//!   neighborhood, stopping at the first local optimum.
//! - **Simulated Annealing (SA)**: random single-queen moves accepted by
//!   the Metropolis criterion under a geometric cooling schedule.
//! - **Local Beam Search**: keeps the `k` best successors of a pool of
//!   boards each round.
//!
//! The [`compare`] harness runs each heuristic over repeated random starts
//! and reports success count, mean final cost and mean wall-clock time.
//!
//! None of the heuristics is complete: a run may end on a board with
//! conflicts left. That is a normal outcome, reported through the result's
//! cost, not an error.
//!
//! # Architecture
//!
//! Boards are immutable values scored by the conflict evaluator in
//! [`board`]. Solvers take an explicit random source and report progress
//! to a [`observer::SearchObserver`]; rendering and input belong to the
//! observer, never to the search core.
//!
//! ```
//! use u_queens::hill::{HillConfig, HillRunner};
//!
//! let result = HillRunner::run(&HillConfig::default().with_seed(42)).unwrap();
//! assert!(result.cost <= result.initial_cost);
//! ```

pub mod beam;
pub mod board;
pub mod compare;
pub mod config;
pub mod error;
pub mod hill;
pub mod observer;
pub mod random;
pub mod sa;

pub use error::{QueensError, Result};
