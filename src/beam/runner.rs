//! Local beam search execution loop.
//!
//! # Algorithm
//!
//! 1. Draw k random boards
//! 2. Each round:
//!    a. Expand every single-queen neighbor of every beam member
//!    b. Stable-sort the candidates by cost
//!    c. Keep the first k as the new beam
//!    d. Stop if the best member is a solution
//! 3. Stop after `max_rounds` rounds, returning the best member

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::config::BeamConfig;
use crate::board::{all_neighbors, conflicts, Board};
use crate::error::{QueensError, Result};
use crate::observer::{is_cancelled, Algorithm, SearchObserver, Snapshot, Termination};
use crate::random::rng_from_seed;

/// One board held in the beam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeamMember {
    pub board: Board,
    pub cost: usize,
    /// Row changed to reach this board; `None` for an initial board.
    pub row: Option<usize>,
}

impl BeamMember {
    fn new(board: Board) -> Self {
        let cost = conflicts(&board);
        Self {
            board,
            cost,
            row: None,
        }
    }
}

/// Result of a local beam search run.
#[derive(Debug, Clone)]
pub struct BeamResult {
    /// Best board of the final beam.
    pub board: Board,

    /// Cost of `board`.
    pub cost: usize,

    /// Best cost among the initial boards.
    pub initial_cost: usize,

    /// Number of expansion rounds performed.
    pub rounds: usize,

    pub termination: Termination,

    /// Final beam, ascending by cost.
    pub beam: Vec<BeamMember>,

    /// Costs of the beam after each round.
    pub round_costs: Vec<Vec<usize>>,
}

impl BeamResult {
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

/// Executes local beam search.
pub struct BeamRunner;

impl BeamRunner {
    /// Runs beam search from random boards, seeded from `config.seed`.
    pub fn run(config: &BeamConfig) -> Result<BeamResult> {
        let mut observer = crate::observer::NoopObserver;
        Self::run_with_observer(config, &mut observer, None)
    }

    /// Runs with an observer and an optional cancellation token.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        config: &BeamConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BeamResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(config, &mut rng, observer, cancel)
    }

    /// Runs from `beam_width` random boards drawn from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized, O: SearchObserver + ?Sized>(
        config: &BeamConfig,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BeamResult> {
        config.validate()?;
        let states = (0..config.beam_width)
            .map(|_| Board::random(config.board_size, rng))
            .collect();
        Self::run_from(config, states, observer, cancel)
    }

    /// Runs from the given initial boards.
    ///
    /// Exactly `beam_width` boards of `board_size` rows are required.
    pub fn run_from<O: SearchObserver + ?Sized>(
        config: &BeamConfig,
        states: Vec<Board>,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BeamResult> {
        config.validate()?;
        if states.len() != config.beam_width {
            return Err(QueensError::invalid(format!(
                "expected {} initial boards, got {}",
                config.beam_width,
                states.len()
            )));
        }
        if let Some(bad) = states.iter().find(|b| b.len() != config.board_size) {
            return Err(QueensError::invalid(format!(
                "initial board has {} rows, expected {}",
                bad.len(),
                config.board_size
            )));
        }

        let mut beam: Vec<BeamMember> = states.into_iter().map(BeamMember::new).collect();
        let initial = best_member(&beam);
        let initial_cost = initial.cost;

        info!(
            event = "solve_start",
            algorithm = "local_beam_search",
            board_size = config.board_size,
            beam_width = config.beam_width,
            initial_cost,
        );

        observer.on_snapshot(&Snapshot {
            board: &initial.board,
            row: None,
            cost: initial.cost,
            algorithm: Algorithm::LocalBeamSearch,
        });

        let mut rounds = 0usize;
        let mut round_costs = Vec::with_capacity(config.max_rounds);
        let mut termination = if initial_cost == 0 {
            Termination::Solved
        } else {
            Termination::BudgetExhausted
        };

        while termination == Termination::BudgetExhausted && rounds < config.max_rounds {
            if is_cancelled(&cancel) {
                termination = Termination::Cancelled;
                break;
            }
            rounds += 1;

            let mut candidates = expand(&beam, config.parallel);
            trace!(round = rounds, candidates = candidates.len());

            // Stable: equal costs keep state, row, column order.
            candidates.sort_by_key(|c| c.cost);
            candidates.truncate(config.beam_width);
            beam = candidates;

            let best = &beam[0];
            round_costs.push(beam.iter().map(|m| m.cost).collect());

            debug!(event = "round", round = rounds, best_cost = best.cost);
            observer.on_snapshot(&Snapshot {
                board: &best.board,
                row: best.row,
                cost: best.cost,
                algorithm: Algorithm::LocalBeamSearch,
            });

            if best.cost == 0 {
                termination = Termination::Solved;
            }
        }

        beam.sort_by_key(|m| m.cost);
        let best = beam[0].clone();

        info!(
            event = "solve_end",
            algorithm = "local_beam_search",
            cost = best.cost,
            rounds,
            termination = ?termination,
        );

        Ok(BeamResult {
            board: best.board,
            cost: best.cost,
            initial_cost,
            rounds,
            termination,
            beam,
            round_costs,
        })
    }
}

/// Every successor of every beam member, in state, row, column order.
fn expand(beam: &[BeamMember], parallel: bool) -> Vec<BeamMember> {
    let successors = |member: &BeamMember| -> Vec<BeamMember> {
        all_neighbors(&member.board)
            .into_iter()
            .map(|mv| BeamMember {
                cost: conflicts(&mv.board),
                board: mv.board,
                row: Some(mv.row),
            })
            .collect()
    };

    let groups: Vec<Vec<BeamMember>> = if parallel {
        beam.par_iter().map(successors).collect()
    } else {
        beam.iter().map(successors).collect()
    };
    groups.into_iter().flatten().collect()
}

/// First member with the minimum cost.
fn best_member(beam: &[BeamMember]) -> BeamMember {
    let mut best = &beam[0];
    for member in &beam[1..] {
        if member.cost < best.cost {
            best = member;
        }
    }
    best.clone()
}
