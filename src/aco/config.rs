//! ACO configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Configuration for the Ant Colony Optimization solver.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_iterations(60)
///     .with_beta(3.0)
///     .with_seed(1000);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.colony_size(25), 25);
/// assert_eq!(config.with_ants(10).colony_size(25), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Pheromone exponent (≥ 0).
    pub alpha: f64,

    /// Visibility exponent (≥ 0).
    pub beta: f64,

    /// Evaporation rate in (0, 1).
    pub rho: f64,

    /// Deposit scale: an ant with tour cost `c` deposits `q / c` per edge.
    pub q: f64,

    /// Number of iterations. The only termination condition.
    pub iterations: usize,

    /// Colony size. `0` selects one ant per city.
    pub ants: usize,

    /// Added to distances before taking the reciprocal, so coincident
    /// cities have finite visibility.
    pub epsilon: f64,

    /// Pheromone level every edge starts with.
    pub initial_pheromone: f64,

    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 5.0,
            rho: 0.5,
            q: 100.0,
            iterations: 50,
            ants: 0,
            epsilon: 1e-10,
            initial_pheromone: 1.0,
            seed: 0,
        }
    }
}

impl AcoConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of ants used on an `n`-city instance.
    pub fn colony_size(&self, n: usize) -> usize {
        if self.ants == 0 {
            n
        } else {
            self.ants
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "alpha must be non-negative, got {}",
                self.alpha
            )));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "beta must be non-negative, got {}",
                self.beta
            )));
        }
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(TspError::InvalidConfig(format!(
                "rho must be in (0, 1), got {}",
                self.rho
            )));
        }
        if !(self.q.is_finite() && self.q > 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "q must be positive, got {}",
                self.q
            )));
        }
        if self.iterations == 0 {
            return Err(TspError::InvalidConfig("iterations must be at least 1".into()));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "initial_pheromone must be positive, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}
