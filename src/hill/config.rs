//! Hill climbing configuration.

use crate::board::Board;
use crate::error::{QueensError, Result};

/// Configuration for steepest-descent hill climbing.
///
/// # Examples
///
/// ```
/// use u_queens::hill::HillConfig;
///
/// let config = HillConfig::default()
///     .with_board_size(10)
///     .with_max_iterations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HillConfig {
    /// Board size N.
    pub board_size: usize,

    /// Maximum number of neighborhood scans before giving up.
    pub max_iterations: usize,

    /// Random seed for the initial board.
    pub seed: Option<u64>,
}

impl Default for HillConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl HillConfig {
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        Board::check_size(self.board_size)?;
        if self.max_iterations == 0 {
            return Err(QueensError::invalid("max_iterations must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.max_iterations, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_bad_board_size() {
        assert!(HillConfig::default().with_board_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(HillConfig::default().with_max_iterations(0).validate().is_err());
    }
}
