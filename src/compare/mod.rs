//! Algorithm comparison harness.
//!
//! Repeats each solver over independent random starts and reports success
//! count, mean final cost and mean wall-clock time per algorithm. Trials
//! share no mutable state, so they can run on the rayon thread pool.

mod config;
mod runner;
mod types;

pub use config::CompareConfig;
pub use runner::CompareRunner;
pub use types::{AlgorithmSummary, ComparisonReport, TrialResult};
