//! Number partitioning heuristics.
//!
//! Splits a sequence of non-negative integers into two subsets whose sums
//! differ as little as possible. The difference is the *residue*.
//!
//! - **Karmarkar-Karp (KK)**: deterministic differencing over a bounded
//!   max-heap.
//! - **Repeated Random (RR)**: independent random sampling.
//! - **Hill Climbing (HC)**: greedy single-neighbor local search.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with an
//!   exponential cooling schedule.
//!
//! The three randomized searches are generic over a solution encoding
//! ([`repr::SignSequence`] or [`repr::Prepartition`]) and draw all
//! randomness from a single seedable generator, so a fixed seed always
//! reproduces the same run.
//!
//! # Examples
//!
//! ```
//! use u_partition::hc::{HcConfig, HcRunner};
//! use u_partition::kk::kk;
//! use u_partition::repr::{Prepartition, Solution};
//! use u_partition::Problem;
//!
//! let problem = Problem::new(vec![10, 8, 7, 6, 5]).unwrap();
//! assert_eq!(kk(problem.values()).unwrap(), 2);
//!
//! let config = HcConfig::default().with_max_iterations(2_000).with_seed(42);
//! let result = HcRunner::run::<Prepartition>(&problem, &config).unwrap();
//! assert_eq!(result.best.residue(&problem).unwrap(), result.best_residue);
//! ```

pub mod error;
pub mod hc;
pub mod heap;
pub mod kk;
pub mod problem;
pub mod random;
pub mod repr;
pub mod rr;
pub mod sa;
pub mod solve;

pub use error::{PartitionError, Result};
pub use problem::Problem;

/// Default iteration budget of every randomized search.
pub const DEFAULT_MAX_ITERATIONS: usize = 25_000;
