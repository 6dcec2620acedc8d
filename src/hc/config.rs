//! Hill climbing configuration.

use crate::error::{PartitionError, Result};
use crate::DEFAULT_MAX_ITERATIONS;

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use u_partition::hc::HcConfig;
///
/// let config = HcConfig::default().with_max_iterations(5000);
/// assert_eq!(config.max_iterations, 5000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Number of neighbors evaluated. The budget is always used in full,
    /// even after the search stalls.
    pub max_iterations: usize,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the number of neighbor evaluations.
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
