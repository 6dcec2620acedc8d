//! SA execution loop.

use rand::Rng;
use tracing::{debug, trace};

use super::config::SaConfig;
use crate::error::Result;
use crate::problem::Problem;
use crate::random::create_rng;
use crate::repr::Solution;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Residue of the best solution.
    pub best_residue: u64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature at the last iteration.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Best residue after each iteration.
    pub best_history: Vec<u64>,

    /// Current residue after each iteration.
    pub current_history: Vec<u64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::repr::{SignSequence, Solution};
    /// use u_partition::sa::{SaConfig, SaRunner};
    /// use u_partition::Problem;
    ///
    /// let problem = Problem::new(vec![10, 8, 7, 6, 5]).unwrap();
    /// let config = SaConfig::default().with_max_iterations(500).with_seed(42);
    /// let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();
    /// assert_eq!(result.best.residue(&problem).unwrap(), result.best_residue);
    /// ```
    pub fn run<S: Solution>(problem: &Problem, config: &SaConfig) -> Result<SaResult<S>> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing every random decision from `rng`.
    pub fn run_with_rng<S: Solution, R: Rng>(
        problem: &Problem,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<S>> {
        config.validate()?;
        debug!(
            representation = S::NAME,
            size = problem.len(),
            iterations = config.max_iterations,
            "starting simulated annealing"
        );

        let mut current = S::random(problem.len(), rng);
        let mut current_residue = current.residue(problem)?;
        let mut best = current.clone();
        let mut best_residue = current_residue;

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature = config.cooling.temperature(0);
        let mut best_history = Vec::with_capacity(config.max_iterations);
        let mut current_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            temperature = config.cooling.temperature(iteration);

            let neighbor = current.neighbor(rng);
            let neighbor_residue = neighbor.residue(problem)?;

            // Metropolis acceptance criterion; exp(0) = 1 for equal residues.
            let accept = if neighbor_residue < current_residue {
                improving_moves += 1;
                true
            } else if neighbor_residue == current_residue {
                true
            } else if temperature > 0.0 {
                let delta = (neighbor_residue - current_residue) as f64;
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = neighbor;
                current_residue = neighbor_residue;
                accepted_moves += 1;
            }

            if current_residue < best_residue {
                best = current.clone();
                best_residue = current_residue;
                trace!(iteration, best_residue, "new best");
            }

            best_history.push(best_residue);
            current_history.push(current_residue);
        }

        debug!(
            best_residue,
            accepted_moves, improving_moves, "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            best_residue,
            iterations: config.max_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            best_history,
            current_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{Prepartition, SignSequence};
    use crate::sa::CoolingSchedule;

    fn sample_problem() -> Problem {
        let mut rng = create_rng(Some(2024));
        Problem::random(100, &mut rng).unwrap()
    }

    #[test]
    fn test_sa_best_matches_solution() {
        let problem = sample_problem();
        let config = SaConfig::default().with_max_iterations(2_000).with_seed(42);

        let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();
        assert_eq!(result.best.residue(&problem).unwrap(), result.best_residue);
        assert_eq!(result.iterations, 2_000);
        assert_eq!(result.best_history.len(), 2_000);
    }

    #[test]
    fn test_sa_deterministic_with_seed() {
        let problem = sample_problem();
        let config = SaConfig::default().with_max_iterations(1_000).with_seed(7);

        let a = SaRunner::run::<Prepartition>(&problem, &config).unwrap();
        let b = SaRunner::run::<Prepartition>(&problem, &config).unwrap();
        assert_eq!(a.best_residue, b.best_residue);
        assert_eq!(a.best, b.best);
        assert_eq!(a.current_history, b.current_history);
    }

    #[test]
    fn test_sa_best_history_non_increasing() {
        let problem = sample_problem();
        let config = SaConfig::default().with_max_iterations(3_000).with_seed(42);

        let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();

        for window in result.best_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best residue history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        for (best, current) in result.best_history.iter().zip(&result.current_history) {
            assert!(best <= current);
        }
    }

    #[test]
    fn test_sa_accepts_uphill_at_high_temperature() {
        // The default schedule starts at 1e10, far above any residue change
        // on small values, so nearly every worsening move is accepted.
        let problem = Problem::new((1..=40).collect()).unwrap();
        let config = SaConfig::default().with_max_iterations(1_000).with_seed(42);

        let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();

        assert!(result.accepted_moves > result.improving_moves);
        let rises = result
            .current_history
            .windows(2)
            .filter(|w| w[1] > w[0])
            .count();
        assert!(rises > 0, "current residue never increased");
    }

    #[test]
    fn test_sa_cold_schedule_behaves_greedily() {
        // A tiny temperature makes every worsening move essentially
        // impossible, so the current residue never rises.
        let problem = sample_problem();
        let config = SaConfig::default()
            .with_max_iterations(1_000)
            .with_cooling(CoolingSchedule {
                coefficient: 1e-12,
                base: 0.5,
                period: 1.0,
            })
            .with_seed(3);

        let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();
        for window in result.current_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_sa_final_temperature() {
        let problem = sample_problem();
        let config = SaConfig::default().with_max_iterations(600).with_seed(1);
        let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();
        let expected = config.cooling.temperature(599);
        assert!((result.final_temperature - expected).abs() < 1e-3);
    }

    #[test]
    fn test_sa_rejects_invalid_config() {
        let problem = sample_problem();
        let config = SaConfig::default().with_max_iterations(0);
        assert!(SaRunner::run::<SignSequence>(&problem, &config).is_err());
    }

    #[test]
    fn test_sa_equal_residue_always_accepted() {
        // Every assignment of all-zero values has residue 0, and the
        // temperature underflows to 0 within a few thousand iterations.
        let problem = Problem::new(vec![0, 0, 0, 0]).unwrap();
        let config = SaConfig::default()
            .with_max_iterations(2_000)
            .with_cooling(CoolingSchedule {
                coefficient: 1e-300,
                base: 0.5,
                period: 1.0,
            })
            .with_seed(5);

        let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();
        assert_eq!(result.final_temperature, 0.0);
        assert_eq!(result.accepted_moves, 2_000);
        assert_eq!(result.improving_moves, 0);
    }

    #[test]
    fn test_sa_zero_temperature_rejects_uphill() {
        let problem = Problem::new(vec![3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
        let config = SaConfig::default()
            .with_max_iterations(2_000)
            .with_cooling(CoolingSchedule {
                coefficient: 1e-300,
                base: 0.5,
                period: 1.0,
            })
            .with_seed(8);

        let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();
        for window in result.current_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_sa_intermediate_acceptance_probability() {
        // Problem [1, 1]: residues are 0 or 2, so every uphill move has
        // delta 2. With T held near 2 / ln 2 each one is accepted with
        // probability about 0.5: some are taken and some rejected.
        let problem = Problem::new(vec![1, 1]).unwrap();
        let config = SaConfig::default()
            .with_max_iterations(4_000)
            .with_cooling(CoolingSchedule {
                coefficient: 2.0 / std::f64::consts::LN_2,
                base: 0.999_999,
                period: 1e9,
            })
            .with_seed(12);

        let result = SaRunner::run::<SignSequence>(&problem, &config).unwrap();

        let rises = result
            .current_history
            .windows(2)
            .filter(|w| w[1] > w[0])
            .count();
        assert!(rises > 0, "no uphill move accepted");
        assert!(
            result.accepted_moves < result.iterations,
            "no uphill move rejected"
        );
        assert_eq!(result.best_residue, 0);
    }
}
