//! Steepest-descent hill climbing.
//!
//! Scans the full single-queen neighborhood at every step and moves to the
//! best strictly improving neighbor. Ties go to the first neighbor in
//! generation order. Stops on a solution, a local optimum or the iteration
//! cap.

mod config;
mod runner;

pub use config::HillConfig;
pub use runner::{HillResult, HillRunner};
