//! Hill Climbing (HC).
//!
//! Greedy first-improvement local search: each iteration samples a single
//! neighbor of the current solution and moves to it only if it strictly
//! lowers the residue. There are no restarts; a stalled search keeps
//! sampling neighbors of the same solution until the budget runs out.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
