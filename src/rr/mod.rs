//! Repeated Random sampling (RR).
//!
//! Plain Monte Carlo search: every iteration draws an independent random
//! solution and only the smallest residue seen is kept. No state is
//! carried between iterations beyond that running minimum.

mod config;
mod runner;

pub use config::RrConfig;
pub use runner::{RrResult, RrRunner};
