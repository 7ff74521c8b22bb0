//! Common interface over the solvers.
//!
//! Each solver's configuration is also its solver: a configured `SaConfig`
//! or `AcoConfig` can be handed to anything that drives [`TspSolver`]s, such
//! as the benchmark harness.

use crate::aco::{AcoConfig, AcoRunner};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::SolverResult;
use crate::sa::{SaConfig, SaRunner};

/// A configured TSP solver.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::AcoConfig;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::generate_uniform_points;
/// use u_tsp::sa::SaConfig;
/// use u_tsp::solver::TspSolver;
///
/// let dm = DistanceMatrix::from_points(&generate_uniform_points(10, 1, 100.0).unwrap());
/// let solvers: Vec<Box<dyn TspSolver>> = vec![
///     Box::new(SaConfig::default().with_min_temperature(1e-1)),
///     Box::new(AcoConfig::default().with_iterations(5)),
/// ];
/// for solver in &solvers {
///     let result = solver.solve(&dm).unwrap();
///     assert_eq!(result.best_tour.len(), 10);
/// }
/// ```
pub trait TspSolver: Send + Sync {
    /// Short algorithm name.
    fn name(&self) -> &'static str;

    /// Solves the instance described by `distances`.
    fn solve(&self, distances: &DistanceMatrix) -> Result<SolverResult>;
}

impl TspSolver for SaConfig {
    fn name(&self) -> &'static str {
        "sa"
    }

    fn solve(&self, distances: &DistanceMatrix) -> Result<SolverResult> {
        Ok(SaRunner::run(distances, self)?.solution())
    }
}

impl TspSolver for AcoConfig {
    fn name(&self) -> &'static str {
        "aco"
    }

    fn solve(&self, distances: &DistanceMatrix) -> Result<SolverResult> {
        Ok(AcoRunner::run(distances, self)?.solution())
    }
}
