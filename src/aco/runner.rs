//! ACO iteration loop.

use serde::{Deserialize, Serialize};

use super::colony::Colony;
use super::config::AcoConfig;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{SolverResult, Tour};
use crate::random::create_rng;

/// Iteration and colony-size counts actually used by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcoMeta {
    /// Iterations executed.
    pub iterations: usize,
    /// Ants per iteration.
    pub ants: usize,
}

/// Result of an Ant Colony Optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoResult {
    /// The best tour found by any ant in any iteration.
    pub best_tour: Tour,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Counts used by the run.
    pub meta: AcoMeta,

    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

impl AcoResult {
    /// The best tour and its cost.
    pub fn solution(&self) -> SolverResult {
        SolverResult::new(self.best_tour.clone(), self.best_cost)
    }
}

/// Executes the Ant Colony Optimization loop.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO on the given distance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidConfig`](crate::TspError::InvalidConfig)
    /// for an invalid configuration and
    /// [`TspError::TooFewCities`](crate::TspError::TooFewCities) for fewer
    /// than two cities.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult> {
        Self::run_observed(distances, config, |_, _| {})
    }

    /// Runs ACO, calling `observer` with the iteration index and the colony
    /// after every pheromone update.
    pub fn run_observed<F>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        mut observer: F,
    ) -> Result<AcoResult>
    where
        F: FnMut(usize, &Colony<'_>),
    {
        let mut colony = Colony::new(distances, config)?;
        let n = colony.size();
        let mut rng = create_rng(config.seed);
        tracing::debug!(
            n,
            ants = colony.ants(),
            iterations = config.iterations,
            alpha = config.alpha,
            beta = config.beta,
            rho = config.rho,
            seed = config.seed,
            "starting ant colony optimization"
        );

        let mut best_tour: Tour = (0..n).collect();
        let mut best_cost = f64::INFINITY;
        let mut cost_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            for (tour, cost) in colony.iterate(&mut rng) {
                if cost < best_cost {
                    best_cost = cost;
                    best_tour = tour;
                }
            }
            cost_history.push(best_cost);
            tracing::trace!(iteration, best_cost, "ant colony iteration");
            observer(iteration, &colony);
        }

        tracing::debug!(best_cost, "ant colony optimization finished");

        Ok(AcoResult {
            best_tour,
            best_cost,
            meta: AcoMeta {
                iterations: config.iterations,
                ants: colony.ants(),
            },
            cost_history,
        })
    }
}

/// Solves the TSP with Ant Colony Optimization.
///
/// Convenience wrapper around [`AcoRunner::run`].
///
/// # Examples
///
/// ```
/// use u_tsp::aco::{ant_colony_optimize, AcoConfig};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::generate_uniform_points;
/// use u_tsp::tour::is_permutation;
///
/// let points = generate_uniform_points(12, 1000, 1000.0).unwrap();
/// let dm = DistanceMatrix::from_points(&points);
/// let result = ant_colony_optimize(&dm, &AcoConfig::default().with_iterations(20)).unwrap();
/// assert!(is_permutation(&result.best_tour, 12));
/// assert_eq!(result.meta.ants, 12);
/// assert_eq!(result.meta.iterations, 20);
/// ```
pub fn ant_colony_optimize(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult> {
    AcoRunner::run(distances, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;
    use crate::models::{generate_uniform_points, Point};
    use crate::tour::{is_permutation, mst_lower_bound, tour_length};

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ])
    }

    fn random_instance(n: usize, seed: u64) -> DistanceMatrix {
        DistanceMatrix::from_points(&generate_uniform_points(n, seed, 1000.0).expect("valid"))
    }

    #[test]
    fn test_aco_square_optimal() {
        let config = AcoConfig::default().with_iterations(20).with_seed(42);
        let result = AcoRunner::run(&square(), &config).expect("valid");
        assert!((result.best_cost - 40.0).abs() < 1e-9);
        assert!(is_permutation(&result.best_tour, 4));
    }

    #[test]
    fn test_aco_meta_and_history() {
        let dm = random_instance(15, 3);
        let config = AcoConfig::default().with_iterations(12).with_ants(6).with_seed(3);
        let result = AcoRunner::run(&dm, &config).expect("valid");
        assert_eq!(result.meta, AcoMeta { iterations: 12, ants: 6 });
        assert_eq!(result.cost_history.len(), 12);
        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert_eq!(*result.cost_history.last().expect("non-empty"), result.best_cost);
    }

    #[test]
    fn test_aco_best_cost_matches_tour() {
        let dm = random_instance(20, 4);
        let config = AcoConfig::default().with_iterations(15).with_seed(4);
        let result = AcoRunner::run(&dm, &config).expect("valid");
        assert!(is_permutation(&result.best_tour, 20));
        assert!((tour_length(&result.best_tour, &dm) - result.best_cost).abs() < 1e-9);
        assert!(result.best_cost >= mst_lower_bound(&dm) - 1e-9);
    }

    #[test]
    fn test_aco_deterministic() {
        let dm = random_instance(14, 6);
        let config = AcoConfig::default().with_iterations(10).with_seed(77);
        let a = AcoRunner::run(&dm, &config).expect("valid");
        let b = AcoRunner::run(&dm, &config).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_aco_observer_pheromone_non_negative() {
        let dm = random_instance(10, 8);
        let config = AcoConfig::default().with_iterations(25).with_rho(0.9).with_seed(8);
        let mut seen = 0usize;
        AcoRunner::run_observed(&dm, &config, |iteration, colony| {
            assert_eq!(iteration, seen);
            assert!(colony.pheromone_values().iter().all(|&tau| tau >= 0.0));
            seen += 1;
        })
        .expect("valid");
        assert_eq!(seen, 25);
    }

    #[test]
    fn test_aco_two_cities() {
        let dm = DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(0.0, 2.0)]);
        let result = AcoRunner::run(&dm, &AcoConfig::default().with_iterations(3)).expect("valid");
        assert!((result.best_cost - 4.0).abs() < 1e-12);
        assert_eq!(result.meta.ants, 2);
    }

    #[test]
    fn test_aco_all_points_coincident() {
        let dm = DistanceMatrix::from_points(&[Point::new(5.0, 5.0); 5]);
        let result = AcoRunner::run(&dm, &AcoConfig::default().with_iterations(4)).expect("valid");
        assert_eq!(result.best_cost, 0.0);
        assert!(is_permutation(&result.best_tour, 5));
    }

    #[test]
    fn test_aco_errors() {
        let one = DistanceMatrix::from_points(&[Point::new(0.0, 0.0)]);
        assert!(matches!(
            AcoRunner::run(&one, &AcoConfig::default()),
            Err(TspError::TooFewCities(1))
        ));
        assert!(matches!(
            AcoRunner::run(&square(), &AcoConfig::default().with_rho(2.0)),
            Err(TspError::InvalidConfig(_))
        ));
    }
}
