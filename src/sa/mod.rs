//! Simulated Annealing (SA).
//!
//! A single-board trajectory search that draws one random neighbor at a
//! time. Improving moves are always taken; worsening moves are taken with
//! probability `exp(-delta / T)`, where the temperature `T` decays
//! geometrically, so the search can climb out of local optima early on
//! and settles into greedy descent as it cools.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
