//! Repeated random sampling configuration.

use crate::error::{PartitionError, Result};
use crate::DEFAULT_MAX_ITERATIONS;

/// Configuration parameters for repeated random sampling.
///
/// # Examples
///
/// ```
/// use u_partition::rr::RrConfig;
///
/// let config = RrConfig::default().with_max_iterations(1000).with_seed(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RrConfig {
    /// Number of random solutions drawn.
    pub max_iterations: usize,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for RrConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl RrConfig {
    /// Sets the number of random draws.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(PartitionError::InvalidConfig(
                "max_iterations must be positive".into(),
            ));
        }
        Ok(())
    }
}
