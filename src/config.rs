//! Environment configuration.
//!
//! [`QueensConfig`] gathers every tunable the search core recognizes and
//! loads them from TOML. Missing keys fall back to the defaults. Each
//! option only affects the algorithm it names.
//!
//! # Examples
//!
//! ```
//! use u_queens::config::QueensConfig;
//!
//! let config = QueensConfig::from_toml_str(r#"
//!     board_size = 10
//!     beam_width = 8
//!     num_comparison_trials = 25
//!
//!     [annealing]
//!     cooling_rate = 0.99
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 10);
//! assert_eq!(config.max_hill_climb_iterations, 100);
//! assert_eq!(config.annealing.iterations_per_temperature, 5);
//! assert_eq!(config.beam().beam_width, 8);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::beam::BeamConfig;
use crate::compare::CompareConfig;
use crate::error::Result;
use crate::hill::HillConfig;
use crate::observer::Algorithm;
use crate::sa::SaConfig;

/// Simulated annealing schedule settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AnnealingSettings {
    pub initial_temperature: f64,
    pub cooling_rate: f64,
    pub min_temperature: f64,
    pub iterations_per_temperature: usize,
    /// Return the best board ever accepted instead of the final one.
    pub track_best: bool,
}

impl Default for AnnealingSettings {
    fn default() -> Self {
        let sa = SaConfig::default();
        Self {
            initial_temperature: sa.initial_temperature,
            cooling_rate: sa.cooling_rate,
            min_temperature: sa.min_temperature,
            iterations_per_temperature: sa.iterations_per_temperature,
            track_best: sa.track_best,
        }
    }
}

/// All options recognized by the search core.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct QueensConfig {
    pub board_size: usize,
    pub beam_width: usize,
    pub max_hill_climb_iterations: usize,
    pub annealing: AnnealingSettings,
    pub beam_max_rounds: usize,
    pub num_comparison_trials: usize,

    /// Run comparison trials in parallel.
    pub parallel: bool,

    /// Random seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            beam_width: 5,
            max_hill_climb_iterations: 100,
            annealing: AnnealingSettings::default(),
            beam_max_rounds: 50,
            num_comparison_trials: 10,
            parallel: false,
            seed: None,
        }
    }
}

impl QueensConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// describes an invalid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_file(path)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects the configuration before any search starts.
    pub fn validate(&self) -> Result<()> {
        self.hill().validate()?;
        self.annealing().validate()?;
        self.beam().validate()?;
        self.compare().validate()
    }

    pub fn hill(&self) -> HillConfig {
        HillConfig {
            board_size: self.board_size,
            max_iterations: self.max_hill_climb_iterations,
            seed: self.seed,
        }
    }

    pub fn annealing(&self) -> SaConfig {
        SaConfig {
            board_size: self.board_size,
            initial_temperature: self.annealing.initial_temperature,
            cooling_rate: self.annealing.cooling_rate,
            min_temperature: self.annealing.min_temperature,
            iterations_per_temperature: self.annealing.iterations_per_temperature,
            track_best: self.annealing.track_best,
            seed: self.seed,
        }
    }

    pub fn beam(&self) -> BeamConfig {
        BeamConfig {
            board_size: self.board_size,
            beam_width: self.beam_width,
            max_rounds: self.beam_max_rounds,
            parallel: false,
            seed: self.seed,
        }
    }

    pub fn compare(&self) -> CompareConfig {
        CompareConfig {
            num_trials: self.num_comparison_trials,
            algorithms: Algorithm::ALL.to_vec(),
            hill: self.hill(),
            annealing: self.annealing(),
            beam: self.beam(),
            parallel: self.parallel,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueensError;

    #[test]
    fn test_defaults_match_algorithm_defaults() {
        let config = QueensConfig::default();
        assert!(config.validate().is_ok());

        let hill = config.hill();
        assert_eq!(hill.board_size, HillConfig::default().board_size);
        assert_eq!(hill.max_iterations, HillConfig::default().max_iterations);

        let beam = config.beam();
        assert_eq!(beam.beam_width, BeamConfig::default().beam_width);
        assert_eq!(beam.max_rounds, BeamConfig::default().max_rounds);

        assert_eq!(config.compare().num_trials, 10);
        assert!((config.annealing().cooling_rate - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = QueensConfig::from_toml_str("").unwrap();
        assert_eq!(config, QueensConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = QueensConfig::from_toml_str(
            r#"
            board_size = 12
            max_hill_climb_iterations = 250
            beam_max_rounds = 80
            parallel = true
            seed = 99

            [annealing]
            initial_temperature = 4.0
            min_temperature = 0.001
            track_best = true
            "#,
        )
        .unwrap();

        assert_eq!(config.hill().max_iterations, 250);
        assert_eq!(config.hill().seed, Some(99));
        assert_eq!(config.beam().max_rounds, 80);
        assert_eq!(config.beam().board_size, 12);
        let sa = config.annealing();
        assert!((sa.initial_temperature - 4.0).abs() < 1e-12);
        assert!((sa.cooling_rate - 0.95).abs() < 1e-12);
        assert!(sa.track_best);
        assert!(config.compare().parallel);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for toml in [
            "board_size = 1",
            "beam_width = 0",
            "num_comparison_trials = 0",
            "[annealing]\ncooling_rate = 1.5",
            "[annealing]\ninitial_temperature = -2.0",
        ] {
            assert!(
                matches!(
                    QueensConfig::from_toml_str(toml),
                    Err(QueensError::InvalidConfiguration(_))
                ),
                "expected rejection for {toml:?}"
            );
        }
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            QueensConfig::from_toml_str("board_size = \"eight\""),
            Err(QueensError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            QueensConfig::load("/nonexistent/u-queens.toml"),
            Err(QueensError::Io(_))
        ));
    }
}
