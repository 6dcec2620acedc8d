//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Draw a random solution; it is both current and best
//! 2. At each iteration:
//!    a. Generate one neighbor of the current solution
//!    b. If its residue is strictly lower, it becomes current and best
//! 3. Stop after the iteration budget

use rand::Rng;
use tracing::{debug, trace};

use super::config::HcConfig;
use crate::error::Result;
use crate::problem::Problem;
use crate::random::create_rng;
use crate::repr::Solution;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Residue of the best solution.
    pub best_residue: u64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Number of neighbors that were adopted.
    pub improving_moves: usize,
    /// Iteration at which the best solution was adopted; `None` when the
    /// initial solution was never improved.
    pub best_iteration: Option<usize>,
    /// Best residue after each iteration.
    pub residue_history: Vec<u64>,
}

/// Hill climbing runner.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::hc::{HcConfig, HcRunner};
    /// use u_partition::repr::SignSequence;
    /// use u_partition::Problem;
    ///
    /// let problem = Problem::new(vec![10, 8, 7, 6, 5]).unwrap();
    /// let config = HcConfig::default().with_max_iterations(1000).with_seed(3);
    /// let result = HcRunner::run::<SignSequence>(&problem, &config).unwrap();
    /// assert!(result.best_residue <= problem.total());
    /// ```
    pub fn run<S: Solution>(problem: &Problem, config: &HcConfig) -> Result<HcResult<S>> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs hill climbing drawing from `rng`.
    pub fn run_with_rng<S: Solution, R: Rng>(
        problem: &Problem,
        config: &HcConfig,
        rng: &mut R,
    ) -> Result<HcResult<S>> {
        config.validate()?;
        debug!(
            representation = S::NAME,
            size = problem.len(),
            iterations = config.max_iterations,
            "starting hill climbing"
        );

        let mut current = S::random(problem.len(), rng);
        let mut best_residue = current.residue(problem)?;
        let mut best_iteration = None;
        let mut improving_moves = 0;
        let mut residue_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            let neighbor = current.neighbor(rng);
            let neighbor_residue = neighbor.residue(problem)?;

            if neighbor_residue < best_residue {
                current = neighbor;
                best_residue = neighbor_residue;
                best_iteration = Some(iteration);
                improving_moves += 1;
                trace!(iteration, best_residue, "new best");
            }

            residue_history.push(best_residue);
        }

        debug!(best_residue, improving_moves, "hill climbing finished");

        Ok(HcResult {
            best: current,
            best_residue,
            iterations: config.max_iterations,
            improving_moves,
            best_iteration,
            residue_history,
        })
    }
}
