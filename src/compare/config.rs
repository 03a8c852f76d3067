//! Comparison harness configuration.

use crate::beam::BeamConfig;
use crate::error::{QueensError, Result};
use crate::hill::HillConfig;
use crate::observer::Algorithm;
use crate::sa::SaConfig;

/// Configuration for a comparison run.
///
/// The per-algorithm configs are used as given except for their `seed`,
/// which the harness replaces with a per-trial seed derived from `seed`.
///
/// # Examples
///
/// ```
/// use u_queens::compare::CompareConfig;
///
/// let config = CompareConfig::default()
///     .with_num_trials(20)
///     .with_parallel(true)
///     .with_seed(42);
/// assert_eq!(config.num_trials, 20);
/// ```
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Trials per algorithm.
    pub num_trials: usize,

    /// Algorithms to compare, in report order.
    pub algorithms: Vec<Algorithm>,

    pub hill: HillConfig,
    pub annealing: SaConfig,
    pub beam: BeamConfig,

    /// Whether to run the trials of each algorithm in parallel using rayon.
    ///
    /// Parallel trials do not forward snapshots to the observer.
    pub parallel: bool,

    /// Base seed for the per-trial seeds. `None` draws one at random.
    pub seed: Option<u64>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            num_trials: 10,
            algorithms: Algorithm::ALL.to_vec(),
            hill: HillConfig::default(),
            annealing: SaConfig::default(),
            beam: BeamConfig::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl CompareConfig {
    pub fn with_num_trials(mut self, n: usize) -> Self {
        self.num_trials = n;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_hill(mut self, hill: HillConfig) -> Self {
        self.hill = hill;
        self
    }

    pub fn with_annealing(mut self, annealing: SaConfig) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_beam(mut self, beam: BeamConfig) -> Self {
        self.beam = beam;
        self
    }

    /// Sets the board size for all three algorithms.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.hill.board_size = n;
        self.annealing.board_size = n;
        self.beam.board_size = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the harness settings and every compared algorithm's config.
    pub fn validate(&self) -> Result<()> {
        if self.num_trials == 0 {
            return Err(QueensError::invalid("num_trials must be positive"));
        }
        if self.algorithms.is_empty() {
            return Err(QueensError::invalid("no algorithms to compare"));
        }
        for algorithm in &self.algorithms {
            match algorithm {
                Algorithm::HillClimbing => self.hill.validate()?,
                Algorithm::SimulatedAnnealing => self.annealing.validate()?,
                Algorithm::LocalBeamSearch => self.beam.validate()?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompareConfig::default();
        assert_eq!(config.num_trials, 10);
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_trials() {
        assert!(CompareConfig::default().with_num_trials(0).validate().is_err());
    }

    #[test]
    fn test_validate_checks_sub_configs() {
        let config = CompareConfig::default().with_beam(BeamConfig::default().with_beam_width(0));
        assert!(config.validate().is_err());

        // A broken config for an algorithm that is not compared is ignored.
        let config = config.with_algorithms(vec![Algorithm::HillClimbing]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_board_size_applies_to_all() {
        let config = CompareConfig::default().with_board_size(6);
        assert_eq!(config.hill.board_size, 6);
        assert_eq!(config.annealing.board_size, 6);
        assert_eq!(config.beam.board_size, 6);
    }
}
