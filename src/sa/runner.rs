//! SA execution loop.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::SaConfig;
use crate::board::{conflicts, random_neighbor, Board};
use crate::error::{QueensError, Result};
use crate::observer::{is_cancelled, Algorithm, SearchObserver, Snapshot, Termination};
use crate::random::rng_from_seed;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The returned board: the current one, or the best ever accepted when
    /// `track_best` is set.
    pub board: Board,

    /// Cost of `board`.
    pub cost: usize,

    /// Cost of the starting board.
    pub initial_cost: usize,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    pub termination: Termination,

    /// Current cost after each accepted move, starting with the initial cost.
    pub cost_history: Vec<usize>,
}

impl SaResult {
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

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from a random board, seeded from `config.seed`.
    pub fn run(config: &SaConfig) -> Result<SaResult> {
        let mut observer = crate::observer::NoopObserver;
        Self::run_with_observer(config, &mut observer, None)
    }

    /// Runs SA with an observer and an optional cancellation token.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        config: &SaConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(config, &mut rng, observer, cancel)
    }

    /// Runs SA with an injected random source.
    pub fn run_with_rng<R: Rng + ?Sized, O: SearchObserver + ?Sized>(
        config: &SaConfig,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate()?;
        let board = Board::random(config.board_size, rng);
        Self::run_from(config, board, rng, observer, cancel)
    }

    /// Runs SA from a given starting board.
    pub fn run_from<R: Rng + ?Sized, O: SearchObserver + ?Sized>(
        config: &SaConfig,
        board: Board,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
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
        let mut best: Option<(Board, usize)> = None;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![current_cost];
        let mut termination = Termination::BudgetExhausted;

        info!(
            event = "solve_start",
            algorithm = "simulated_annealing",
            board_size = config.board_size,
            initial_cost,
            initial_temperature = config.initial_temperature,
        );

        observer.on_snapshot(&Snapshot {
            board: &current,
            row: None,
            cost: current_cost,
            algorithm: Algorithm::SimulatedAnnealing,
        });

        if current_cost == 0 {
            termination = Termination::Solved;
        }

        'levels: while termination != Termination::Solved && temperature > config.min_temperature
        {
            for _ in 0..config.iterations_per_temperature {
                if is_cancelled(&cancel) {
                    termination = Termination::Cancelled;
                    break 'levels;
                }

                let mv = random_neighbor(&current, rng);
                let neighbor_cost = conflicts(&mv.board);
                let delta = neighbor_cost as f64 - current_cost as f64;
                total_iterations += 1;

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };
                trace!(iteration = total_iterations, delta, accept);

                if accept {
                    if config.track_best && neighbor_cost > current_cost {
                        let best_cost = best.as_ref().map_or(usize::MAX, |b| b.1);
                        if current_cost < best_cost {
                            best = Some((current.clone(), current_cost));
                        }
                    }

                    current = mv.board;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;
                    cost_history.push(current_cost);

                    debug!(
                        event = "accept",
                        row = mv.row,
                        cost = current_cost,
                        temperature,
                    );
                    observer.on_snapshot(&Snapshot {
                        board: &current,
                        row: Some(mv.row),
                        cost: current_cost,
                        algorithm: Algorithm::SimulatedAnnealing,
                    });
                }

                if current_cost == 0 {
                    termination = Termination::Solved;
                    break 'levels;
                }
            }

            temperature *= config.cooling_rate;
        }

        // Only boards left behind by a worsening move are stashed, so the
        // final board competes here too.
        if let Some((best_board, best_cost)) = best {
            if best_cost < current_cost {
                current = best_board;
                current_cost = best_cost;
            }
        }

        info!(
            event = "solve_end",
            algorithm = "simulated_annealing",
            cost = current_cost,
            iterations = total_iterations,
            accepted_moves,
            final_temperature = temperature,
            termination = ?termination,
        );

        Ok(SaResult {
            board: current,
            cost: current_cost,
            initial_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            termination,
            cost_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NoopObserver, RecordingObserver};
    use crate::random::create_rng;

    #[test]
    fn test_sa_default_terminates() {
        for seed in 0..10 {
            let config = SaConfig::default().with_seed(seed);
            let result = SaRunner::run(&config).unwrap();

            assert!(
                result.iterations <= config.temperature_levels() * config.iterations_per_temperature,
                "ran {} iterations",
                result.iterations
            );
            assert_eq!(result.cost, conflicts(&result.board));
            if !result.solved() {
                assert_eq!(result.termination, Termination::BudgetExhausted);
                assert!(result.final_temperature <= config.min_temperature);
            }
        }
    }

    #[test]
    fn test_sa_cold_start_is_greedy() {
        // exp(-1 / 1e-6) underflows to zero: no uphill move can pass.
        let config = SaConfig::default()
            .with_initial_temperature(1e-6)
            .with_min_temperature(1e-9)
            .with_cooling_rate(0.5)
            .with_iterations_per_temperature(50)
            .with_seed(42);
        let mut observer = RecordingObserver::new();
        let result = SaRunner::run_with_observer(&config, &mut observer, None).unwrap();

        for window in observer.costs().windows(2) {
            assert!(
                window[1] <= window[0],
                "cost increased at low temperature: {} -> {}",
                window[0],
                window[1]
            );
        }
        assert!(result.cost <= result.initial_cost);
    }

    #[test]
    fn test_sa_min_temperature_reached_immediately() {
        let config = SaConfig::default()
            .with_initial_temperature(0.01)
            .with_min_temperature(0.01)
            .with_seed(3);
        let mut observer = RecordingObserver::new();
        let result = SaRunner::run_with_observer(&config, &mut observer, None).unwrap();

        assert_eq!(result.iterations, 0);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(observer.snapshots.len(), 1);
        assert_eq!(result.cost, result.initial_cost);
    }

    #[test]
    fn test_sa_hot_accepts_uphill() {
        // At very high temperature almost every move is accepted.
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling_rate(0.99)
            .with_iterations_per_temperature(200)
            .with_seed(42);
        let result = SaRunner::run(&config).unwrap();

        if !result.solved() {
            let ratio = result.accepted_moves as f64 / result.iterations as f64;
            assert!(ratio > 0.9, "expected high acceptance, got {ratio}");
            assert!(result.accepted_moves > result.improving_moves);
        }
    }

    #[test]
    fn test_sa_snapshots_match_history() {
        let config = SaConfig::default().with_seed(9);
        let mut observer = RecordingObserver::new();
        let result = SaRunner::run_with_observer(&config, &mut observer, None).unwrap();

        assert_eq!(observer.costs(), result.cost_history);
        assert_eq!(observer.snapshots.len(), result.accepted_moves + 1);
        for (board, row, cost, algorithm) in &observer.snapshots[1..] {
            assert!(row.is_some());
            assert_eq!(*cost, conflicts(board));
            assert_eq!(*algorithm, Algorithm::SimulatedAnnealing);
        }
    }

    #[test]
    fn test_sa_track_best_never_worse() {
        for seed in 0..10 {
            let plain = SaRunner::run(&SaConfig::default().with_seed(seed)).unwrap();
            let tracked =
                SaRunner::run(&SaConfig::default().with_seed(seed).with_track_best(true)).unwrap();

            // Tracking does not touch the random stream, so both runs walk the same path.
            assert_eq!(plain.iterations, tracked.iterations);
            assert_eq!(plain.cost_history, tracked.cost_history);
            assert!(tracked.cost <= plain.cost);
            assert_eq!(tracked.cost, *plain.cost_history.iter().min().unwrap());
            assert_eq!(tracked.cost, conflicts(&tracked.board));
        }
    }

    #[test]
    fn test_sa_solved_start_returns_immediately() {
        let config = SaConfig::default().with_board_size(4);
        let mut rng = create_rng(1);
        let start = Board::from_columns(vec![1, 3, 0, 2]).unwrap();
        let result = SaRunner::run_from(&config, start, &mut rng, &mut NoopObserver, None).unwrap();
        assert_eq!(result.termination, Termination::Solved);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_sa_cancellation() {
        let config = SaConfig::default().with_seed(42);
        let cancel = Arc::new(AtomicBool::new(true));
        let mut rng = create_rng(5);
        let start = Board::from_columns(vec![0; 8]).unwrap();
        let result =
            SaRunner::run_from(&config, start, &mut rng, &mut NoopObserver, Some(cancel)).unwrap();
        assert!(result.cancelled());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_sa_rejects_bad_config() {
        let config = SaConfig::default().with_cooling_rate(2.0);
        assert!(matches!(
            SaRunner::run(&config),
            Err(QueensError::InvalidConfiguration(_))
        ));
    }
}
