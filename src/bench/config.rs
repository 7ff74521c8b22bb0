//! Benchmark configuration.

use serde::{Deserialize, Serialize};

use crate::aco::AcoConfig;
use crate::error::{Result, TspError};
use crate::models::InstanceKind;
use crate::sa::SaConfig;

/// Configuration of a benchmark sweep.
///
/// The solver templates are cloned for each run with the run's seed
/// substituted.
///
/// # Examples
///
/// ```
/// use u_tsp::bench::BenchmarkConfig;
///
/// let config = BenchmarkConfig::default()
///     .with_sizes(vec![10, 20])
///     .with_runs(2)
///     .with_sa_seconds(0.05)
///     .with_aco_iterations(10);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.seed_for_run(1), 1001);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Instance sizes to benchmark.
    pub sizes: Vec<usize>,
    /// Runs (distinct seeds) per size.
    pub runs: usize,
    /// Seed of run 0; run `r` uses `base_seed + r`.
    pub base_seed: u64,
    /// Point distribution.
    pub kind: InstanceKind,
    /// Side length of the square instances are drawn in.
    pub square_size: f64,
    /// SA parameters (seed overridden per run).
    pub sa: SaConfig,
    /// ACO parameters (seed overridden per run).
    pub aco: AcoConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![20, 50, 100],
            runs: 5,
            base_seed: 1000,
            kind: InstanceKind::Uniform,
            square_size: 1000.0,
            sa: SaConfig::default().with_max_seconds(0.3),
            aco: AcoConfig::default().with_iterations(60),
        }
    }
}

impl BenchmarkConfig {
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    pub fn with_kind(mut self, kind: InstanceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_square_size(mut self, size: f64) -> Self {
        self.square_size = size;
        self
    }

    /// Sets the SA wall-clock budget per run. Zero means unbounded.
    pub fn with_sa_seconds(mut self, seconds: f64) -> Self {
        self.sa = self.sa.with_max_seconds(seconds);
        self
    }

    pub fn with_aco_iterations(mut self, iterations: usize) -> Self {
        self.aco = self.aco.with_iterations(iterations);
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_aco(mut self, aco: AcoConfig) -> Self {
        self.aco = aco;
        self
    }

    /// Seed used for the instance and both solvers in run `run`.
    pub fn seed_for_run(&self, run: usize) -> u64 {
        self.base_seed.wrapping_add(run as u64)
    }

    /// SA budget in seconds as reported in the CSV (0 when unbounded).
    pub fn sa_seconds(&self) -> f64 {
        self.sa.time_budget.map_or(0.0, |d| d.as_secs_f64())
    }

    /// Validates the sweep and both solver templates.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(TspError::InvalidConfig("at least one size is required".into()));
        }
        if let Some(&n) = self.sizes.iter().find(|&&n| n < 2) {
            return Err(TspError::InvalidConfig(format!(
                "instance sizes must be at least 2, got {n}"
            )));
        }
        if self.runs == 0 {
            return Err(TspError::InvalidConfig("runs must be at least 1".into()));
        }
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(TspError::InvalidConfig(format!(
                "square_size must be positive, got {}",
                self.square_size
            )));
        }
        self.sa.validate()?;
        self.aco.validate()
    }
}

/// Parses a comma-separated size list such as `"20,50,100"`.
///
/// Blank entries are ignored.
pub fn parse_sizes(s: &str) -> Result<Vec<usize>> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|e| TspError::InvalidConfig(format!("bad size '{part}': {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.sizes, vec![20, 50, 100]);
        assert_eq!(config.runs, 5);
        assert_eq!(config.sa.time_budget, Some(Duration::from_millis(300)));
        assert_eq!(config.aco.iterations, 60);
        assert!((config.sa_seconds() - 0.3).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        assert!(BenchmarkConfig::default().with_sizes(vec![]).validate().is_err());
        assert!(BenchmarkConfig::default().with_sizes(vec![10, 1]).validate().is_err());
        assert!(BenchmarkConfig::default().with_runs(0).validate().is_err());
        assert!(BenchmarkConfig::default().with_square_size(0.0).validate().is_err());
        assert!(BenchmarkConfig::default().with_aco_iterations(0).validate().is_err());
    }

    #[test]
    fn test_zero_seconds_is_unbounded() {
        let config = BenchmarkConfig::default().with_sa_seconds(0.0);
        assert!(config.sa.time_budget.is_none());
        assert_eq!(config.sa_seconds(), 0.0);
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("20,50,100").expect("valid"), vec![20, 50, 100]);
        assert_eq!(parse_sizes(" 7 , ,9,").expect("valid"), vec![7, 9]);
        assert!(parse_sizes("10,x").is_err());
        assert!(parse_sizes("").expect("valid").is_empty());
    }
}
