//! SA configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Configuration for the Simulated Annealing solver.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_factor(0.99)
///     .with_iterations_per_temperature(500)
///     .with_time_budget(Duration::from_millis(300))
///     .with_seed(1000);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.inner_iterations(40), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaConfig {
    /// Initial temperature `T0`. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The search stops once `T` is no longer above it.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = alpha * T_k`.
    pub cooling_factor: f64,

    /// Number of move proposals at each temperature level.
    ///
    /// `0` selects `20 * n` for an n-city instance.
    pub iterations_per_temperature: usize,

    /// Optional wall-clock budget, checked before each temperature level.
    ///
    /// A run may overshoot by at most one level of inner iterations.
    pub time_budget: Option<Duration>,

    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-6,
            cooling_factor: 0.995,
            iterations_per_temperature: 0,
            time_budget: None,
            seed: 0,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Sets the time budget in seconds. Non-positive or non-finite values
    /// clear the budget.
    pub fn with_max_seconds(mut self, seconds: f64) -> Self {
        self.time_budget = Duration::try_from_secs_f64(seconds)
            .ok()
            .filter(|d| !d.is_zero());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Inner iterations per temperature level for an `n`-city instance.
    pub fn inner_iterations(&self, n: usize) -> usize {
        if self.iterations_per_temperature == 0 {
            20 * n
        } else {
            self.iterations_per_temperature
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(TspError::InvalidConfig(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            )));
        }
        Ok(())
    }
}
