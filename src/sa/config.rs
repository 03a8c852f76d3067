//! SA configuration.

use crate::board::Board;
use crate::error::{QueensError, Result};

/// Configuration for the Simulated Annealing solver.
///
/// Temperature starts at `initial_temperature`, runs
/// `iterations_per_temperature` random moves at each level, then is
/// multiplied by `cooling_rate` until it is no longer above
/// `min_temperature`.
///
/// # Examples
///
/// ```
/// use u_queens::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(2.0)
///     .with_min_temperature(0.001)
///     .with_cooling_rate(0.98)
///     .with_iterations_per_temperature(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Board size N.
    pub board_size: usize,

    /// Initial temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = cooling_rate * T_k`.
    pub cooling_rate: f64,

    /// The search stops once the temperature is no longer above this.
    pub min_temperature: f64,

    /// Number of random moves tried at each temperature level.
    pub iterations_per_temperature: usize,

    /// Return the best board ever accepted instead of the final one.
    ///
    /// Off by default: the plain solver reports whatever board is current
    /// when the temperature runs out, which can be worse than an earlier one.
    pub track_best: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            initial_temperature: 1.0,
            cooling_rate: 0.95,
            min_temperature: 0.01,
            iterations_per_temperature: 5,
            track_best: false,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_track_best(mut self, track: bool) -> Self {
        self.track_best = track;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of temperature levels the schedule visits.
    pub fn temperature_levels(&self) -> usize {
        let mut t = self.initial_temperature;
        let mut levels = 0;
        while t > self.min_temperature {
            t *= self.cooling_rate;
            levels += 1;
        }
        levels
    }

    /// Validates the configuration.
    ///
    /// An initial temperature at or below the minimum is allowed; the
    /// search then returns its starting board untouched.
    pub fn validate(&self) -> Result<()> {
        Board::check_size(self.board_size)?;
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(QueensError::invalid(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.min_temperature > 0.0 && self.min_temperature.is_finite()) {
            return Err(QueensError::invalid(format!(
                "min_temperature must be positive and finite, got {}",
                self.min_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(QueensError::invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(QueensError::invalid(
                "iterations_per_temperature must be positive",
            ));
        }
        Ok(())
    }
}
