//! Local beam search.
//!
//! Keeps `k` boards at once. Each round pools the full single-queen
//! neighborhood of every board, sorts the pool by cost and keeps the `k`
//! cheapest, so effort flows toward whichever boards look most promising.

mod config;
mod runner;

pub use config::BeamConfig;
pub use runner::{BeamMember, BeamResult, BeamRunner};
