//! Algorithm selection.
//!
//! A single entry point that runs any of the four algorithms over either
//! representation, plus the numeric codes used by the command line:
//!
//! | code | algorithm           | representation |
//! |------|---------------------|----------------|
//! | 0    | Karmarkar-Karp      | n/a            |
//! | 1    | repeated random     | sign sequence  |
//! | 2    | hill climbing       | sign sequence  |
//! | 3    | simulated annealing | sign sequence  |
//! | 11   | repeated random     | prepartition   |
//! | 12   | hill climbing       | prepartition   |
//! | 13   | simulated annealing | prepartition   |

use tracing::info;

use crate::error::{PartitionError, Result};
use crate::hc::{HcConfig, HcRunner};
use crate::kk::kk;
use crate::problem::Problem;
use crate::repr::{Prepartition, Representation, SignSequence, Solution};
use crate::rr::{RrConfig, RrRunner};
use crate::sa::{CoolingSchedule, SaConfig, SaRunner};
use crate::DEFAULT_MAX_ITERATIONS;

/// The available partitioning algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    KarmarkarKarp,
    RepeatedRandom,
    HillClimbing,
    SimulatedAnnealing,
}

impl Algorithm {
    /// Decodes a numeric algorithm code (see the module table).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::repr::Representation;
    /// use u_partition::solve::Algorithm;
    ///
    /// let (alg, repr) = Algorithm::from_code(12).unwrap();
    /// assert_eq!(alg, Algorithm::HillClimbing);
    /// assert_eq!(repr, Representation::Prepartition);
    /// assert!(Algorithm::from_code(4).is_err());
    /// ```
    pub fn from_code(code: u32) -> Result<(Algorithm, Representation)> {
        let representation = if code >= 10 {
            Representation::Prepartition
        } else {
            Representation::SignSequence
        };
        let algorithm = match code {
            0 => Algorithm::KarmarkarKarp,
            1 | 11 => Algorithm::RepeatedRandom,
            2 | 12 => Algorithm::HillClimbing,
            3 | 13 => Algorithm::SimulatedAnnealing,
            _ => return Err(PartitionError::UnknownAlgorithm(code)),
        };
        Ok((algorithm, representation))
    }

    /// Inverse of [`from_code`](Algorithm::from_code).
    pub fn code(&self, representation: Representation) -> u32 {
        let base = match self {
            Algorithm::KarmarkarKarp => return 0,
            Algorithm::RepeatedRandom => 1,
            Algorithm::HillClimbing => 2,
            Algorithm::SimulatedAnnealing => 3,
        };
        match representation {
            Representation::SignSequence => base,
            Representation::Prepartition => base + 10,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::KarmarkarKarp => "karmarkar-karp",
            Algorithm::RepeatedRandom => "repeated-random",
            Algorithm::HillClimbing => "hill-climbing",
            Algorithm::SimulatedAnnealing => "simulated-annealing",
        };
        f.write_str(name)
    }
}

/// Settings shared by the randomized algorithms. Ignored by
/// Karmarkar-Karp.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    pub max_iterations: usize,
    pub seed: Option<u64>,
    pub cooling: CoolingSchedule,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
            cooling: CoolingSchedule::default(),
        }
    }
}

impl SolveConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    fn rr(&self) -> RrConfig {
        RrConfig {
            max_iterations: self.max_iterations,
            seed: self.seed,
        }
    }

    fn hc(&self) -> HcConfig {
        HcConfig {
            max_iterations: self.max_iterations,
            seed: self.seed,
        }
    }

    fn sa(&self) -> SaConfig {
        SaConfig {
            max_iterations: self.max_iterations,
            cooling: self.cooling,
            seed: self.seed,
        }
    }
}

/// Residue produced by one [`solve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub algorithm: Algorithm,
    /// `None` for Karmarkar-Karp, which works on the values directly.
    pub representation: Option<Representation>,
    pub residue: u64,
}

/// Runs `algorithm` on `problem`. The representation is ignored for
/// Karmarkar-Karp.
///
/// # Examples
///
/// ```
/// use u_partition::repr::Representation;
/// use u_partition::solve::{solve, Algorithm, SolveConfig};
/// use u_partition::Problem;
///
/// let problem = Problem::new(vec![10, 8, 7, 6, 5]).unwrap();
/// let outcome = solve(
///     &problem,
///     Algorithm::KarmarkarKarp,
///     Representation::SignSequence,
///     &SolveConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(outcome.residue, 2);
/// ```
pub fn solve(
    problem: &Problem,
    algorithm: Algorithm,
    representation: Representation,
    config: &SolveConfig,
) -> Result<Outcome> {
    let residue = match algorithm {
        Algorithm::KarmarkarKarp => kk(problem.values())?,
        _ => match representation {
            Representation::SignSequence => {
                run_search::<SignSequence>(problem, algorithm, config)?
            }
            Representation::Prepartition => {
                run_search::<Prepartition>(problem, algorithm, config)?
            }
        },
    };

    let representation = match algorithm {
        Algorithm::KarmarkarKarp => None,
        _ => Some(representation),
    };
    info!(%algorithm, ?representation, residue, "solved");

    Ok(Outcome {
        algorithm,
        representation,
        residue,
    })
}

fn run_search<S: Solution>(
    problem: &Problem,
    algorithm: Algorithm,
    config: &SolveConfig,
) -> Result<u64> {
    let residue = match algorithm {
        Algorithm::RepeatedRandom => RrRunner::run::<S>(problem, &config.rr())?.best_residue,
        Algorithm::HillClimbing => HcRunner::run::<S>(problem, &config.hc())?.best_residue,
        Algorithm::SimulatedAnnealing => SaRunner::run::<S>(problem, &config.sa())?.best_residue,
        Algorithm::KarmarkarKarp => kk(problem.values())?,
    };
    Ok(residue)
}
