//! Comparison harness execution.
//!
//! Runs every configured algorithm for `num_trials` independent trials,
//! each from a fresh random start with its own seeded RNG, and aggregates
//! success count, mean final cost and mean wall-clock time per algorithm.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use super::config::CompareConfig;
use super::types::{ComparisonReport, TrialResult};
use crate::beam::BeamRunner;
use crate::error::{QueensError, Result};
use crate::hill::HillRunner;
use crate::observer::{is_cancelled, Algorithm, NoopObserver, SearchObserver};
use crate::random::{create_rng, trial_seed};
use crate::sa::SaRunner;

/// Runs the algorithm comparison.
pub struct CompareRunner;

impl CompareRunner {
    /// Runs the comparison without an observer.
    pub fn run(config: &CompareConfig) -> Result<ComparisonReport> {
        Self::run_with_observer(config, &mut NoopObserver, None)
    }

    /// Runs the comparison, reporting progress to `observer`.
    ///
    /// A trial interrupted by `cancel` is dropped from the report rather
    /// than counted as a failure, and no further trials are started.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        config: &CompareConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ComparisonReport> {
        config.validate()?;

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let total = config.num_trials;
        let mut trials: Vec<TrialResult> = Vec::with_capacity(total * config.algorithms.len());
        let mut cancelled = false;

        info!(
            event = "compare_start",
            algorithms = config.algorithms.len(),
            trials = total,
            parallel = config.parallel,
            base_seed,
        );

        'algorithms: for &algorithm in &config.algorithms {
            if config.parallel {
                if is_cancelled(&cancel) {
                    cancelled = true;
                    break;
                }
                let outcomes = (0..total)
                    .into_par_iter()
                    .map(|trial| {
                        let seed = trial_seed(base_seed, algorithm.index(), trial);
                        run_trial(algorithm, trial, config, seed, &mut NoopObserver, cancel.clone())
                    })
                    .collect::<Result<Vec<Option<TrialResult>>>>()?;

                for (trial, outcome) in outcomes.into_iter().enumerate() {
                    match outcome {
                        Some(result) => {
                            trials.push(result);
                            observer.on_trial_progress(algorithm, trial + 1, total);
                        }
                        None => cancelled = true,
                    }
                }
                if cancelled {
                    break 'algorithms;
                }
            } else {
                for trial in 0..total {
                    if is_cancelled(&cancel) {
                        cancelled = true;
                        break 'algorithms;
                    }
                    let seed = trial_seed(base_seed, algorithm.index(), trial);
                    match run_trial(algorithm, trial, config, seed, observer, cancel.clone())? {
                        Some(result) => trials.push(result),
                        None => {
                            cancelled = true;
                            break 'algorithms;
                        }
                    }
                    observer.on_trial_progress(algorithm, trial + 1, total);
                }
            }
        }

        let report = ComparisonReport::new(&config.algorithms, trials, total, cancelled);

        for s in &report.summaries {
            info!(
                event = "algorithm_summary",
                algorithm = s.algorithm.label(),
                trials = s.trials,
                success_count = s.success_count,
                avg_cost = s.avg_cost,
                avg_time_ms = s.avg_time.as_secs_f64() * 1000.0,
            );
        }
        info!(event = "compare_end", cancelled);

        observer.on_comparison_complete(&report);
        Ok(report)
    }
}

/// Runs one trial. Returns `None` if it was cancelled.
fn run_trial<O: SearchObserver + ?Sized>(
    algorithm: Algorithm,
    trial: usize,
    config: &CompareConfig,
    seed: u64,
    observer: &mut O,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<Option<TrialResult>> {
    let mut rng = create_rng(seed);
    let start = Instant::now();

    let outcome = match algorithm {
        Algorithm::HillClimbing => HillRunner::run_with_rng(&config.hill, &mut rng, observer, cancel)?
            .completed()
            .map(|r| r.cost),
        Algorithm::SimulatedAnnealing => {
            SaRunner::run_with_rng(&config.annealing, &mut rng, observer, cancel)?
                .completed()
                .map(|r| r.cost)
        }
        Algorithm::LocalBeamSearch => {
            BeamRunner::run_with_rng(&config.beam, &mut rng, observer, cancel)?
                .completed()
                .map(|r| r.cost)
        }
    };
    let elapsed = start.elapsed();

    let cost = match outcome {
        Ok(cost) => cost,
        Err(QueensError::Cancelled) => {
            debug!(event = "trial_dropped", algorithm = algorithm.label(), trial);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    debug!(
        event = "trial_end",
        algorithm = algorithm.label(),
        trial,
        cost,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
    );

    Ok(Some(TrialResult {
        algorithm,
        trial,
        solved: cost == 0,
        cost,
        elapsed,
    }))
}
