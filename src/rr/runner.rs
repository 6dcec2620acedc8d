//! Repeated random sampling loop.

use rand::Rng;
use tracing::{debug, trace};

use super::config::RrConfig;
use crate::error::Result;
use crate::problem::Problem;
use crate::random::create_rng;
use crate::repr::Solution;

/// Result of a repeated random run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RrResult {
    /// Smallest residue over all draws.
    pub best_residue: u64,
    /// Number of solutions drawn.
    pub iterations: usize,
    /// Draw at which the smallest residue first appeared.
    pub best_iteration: usize,
}

/// Repeated random sampling runner.
pub struct RrRunner;

impl RrRunner {
    /// Runs repeated random sampling with a generator seeded from
    /// `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::repr::Prepartition;
    /// use u_partition::rr::{RrConfig, RrRunner};
    /// use u_partition::Problem;
    ///
    /// let problem = Problem::new(vec![4, 4, 4, 4]).unwrap();
    /// let config = RrConfig::default().with_max_iterations(200).with_seed(1);
    /// let result = RrRunner::run::<Prepartition>(&problem, &config).unwrap();
    /// assert_eq!(result.best_residue, 0);
    /// ```
    pub fn run<S: Solution>(problem: &Problem, config: &RrConfig) -> Result<RrResult> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng::<S, _>(problem, config, &mut rng)
    }

    /// Runs repeated random sampling drawing from `rng`.
    pub fn run_with_rng<S: Solution, R: Rng>(
        problem: &Problem,
        config: &RrConfig,
        rng: &mut R,
    ) -> Result<RrResult> {
        config.validate()?;
        debug!(
            representation = S::NAME,
            size = problem.len(),
            iterations = config.max_iterations,
            "starting repeated random"
        );

        let mut best_residue = u64::MAX;
        let mut best_iteration = 0;

        for iteration in 0..config.max_iterations {
            let candidate = S::random(problem.len(), rng);
            let residue = candidate.residue(problem)?;
            if residue < best_residue {
                best_residue = residue;
                best_iteration = iteration;
                trace!(iteration, best_residue, "new best");
            }
        }

        debug!(best_residue, best_iteration, "repeated random finished");

        Ok(RrResult {
            best_residue,
            iterations: config.max_iterations,
            best_iteration,
        })
    }
}
