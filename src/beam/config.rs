//! Local beam search configuration.

use crate::board::Board;
use crate::error::{QueensError, Result};

/// Configuration for local beam search.
///
/// # Examples
///
/// ```
/// use u_queens::beam::BeamConfig;
///
/// let config = BeamConfig::default()
///     .with_beam_width(10)
///     .with_max_rounds(100);
/// assert_eq!(config.beam_width, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BeamConfig {
    /// Board size N.
    pub board_size: usize,

    /// Number of boards kept after each round (k).
    pub beam_width: usize,

    /// Maximum number of expansion rounds.
    pub max_rounds: usize,

    /// Score the successors of each beam member in parallel using rayon.
    ///
    /// Candidate order, and therefore tie-breaking, is the same either way.
    pub parallel: bool,

    /// Random seed for the initial beam.
    pub seed: Option<u64>,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            beam_width: 5,
            max_rounds: 50,
            parallel: false,
            seed: None,
        }
    }
}

impl BeamConfig {
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    pub fn with_beam_width(mut self, k: usize) -> Self {
        self.beam_width = k;
        self
    }

    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        Board::check_size(self.board_size)?;
        if self.beam_width == 0 {
            return Err(QueensError::invalid("beam_width must be at least 1"));
        }
        if self.max_rounds == 0 {
            return Err(QueensError::invalid("max_rounds must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BeamConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.beam_width, 5);
        assert_eq!(config.max_rounds, 50);
        assert!(!config.parallel);
    }

    #[test]
    fn test_validate_zero_width() {
        assert!(BeamConfig::default().with_beam_width(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_rounds() {
        assert!(BeamConfig::default().with_max_rounds(0).validate().is_err());
    }
}
