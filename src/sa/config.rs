//! SA configuration and cooling schedule.

use crate::error::{PartitionError, Result};
use crate::DEFAULT_MAX_ITERATIONS;

/// Exponential cooling: `T(i) = coefficient * base^(i / period)`.
///
/// Strictly positive and monotonically decreasing in `i`. The exponent is
/// real-valued, so the temperature decays smoothly rather than in steps of
/// `period` iterations.
///
/// # Examples
///
/// ```
/// use u_partition::sa::CoolingSchedule;
///
/// let schedule = CoolingSchedule::default();
/// assert_eq!(schedule.temperature(0), 1e10);
/// assert!((schedule.temperature(300) - 0.8e10).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoolingSchedule {
    /// Temperature at iteration 0.
    pub coefficient: f64,

    /// Decay factor applied once every `period` iterations, in (0, 1).
    pub base: f64,

    /// Number of iterations over which the temperature falls by `base`.
    pub period: f64,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        Self {
            coefficient: 1e10,
            base: 0.8,
            period: 300.0,
        }
    }
}

impl CoolingSchedule {
    /// Temperature at `iteration`.
    pub fn temperature(&self, iteration: usize) -> f64 {
        self.coefficient * self.base.powf(iteration as f64 / self.period)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.coefficient > 0.0 && self.coefficient.is_finite()) {
            return Err(PartitionError::InvalidConfig(format!(
                "cooling coefficient must be positive and finite, got {}",
                self.coefficient
            )));
        }
        if !(self.base > 0.0 && self.base < 1.0) {
            return Err(PartitionError::InvalidConfig(format!(
                "cooling base must be in (0, 1), got {}",
                self.base
            )));
        }
        if !(self.period > 0.0 && self.period.is_finite()) {
            return Err(PartitionError::InvalidConfig(format!(
                "cooling period must be positive and finite, got {}",
                self.period
            )));
        }
        Ok(())
    }
}

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_partition::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_max_iterations(5_000)
///     .with_cooling(CoolingSchedule { coefficient: 1e6, base: 0.9, period: 100.0 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Number of neighbor evaluations.
    pub max_iterations: usize,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(PartitionError::InvalidConfig(
                "max_iterations must be positive".into(),
            ));
        }
        self.cooling.validate()
    }
}
