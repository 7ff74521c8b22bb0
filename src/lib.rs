//! # u-tsp
//!
//! Metaheuristic solvers and a benchmarking harness for the metric
//! Traveling Salesman Problem on synthetic point instances.
//!
//! - **Simulated Annealing (SA)**: nearest-neighbor start, random 2-opt
//!   moves evaluated incrementally, Metropolis acceptance and geometric
//!   cooling, with an optional wall-clock budget.
//! - **Ant Colony Optimization (ACO)**: probabilistic tour construction
//!   guided by pheromone and inverse-distance visibility, followed by
//!   evaporation and cost-proportional deposit every iteration.
//!
//! ## Modules
//!
//! - [`models`] — Points, tours, instances and instance generators
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`tour`] — Tour length, nearest-neighbor construction, MST lower bound
//! - [`local_search`] — 2-opt delta evaluation and hill climbing
//! - [`sa`] — Simulated Annealing solver
//! - [`aco`] — Ant Colony Optimization solver
//! - [`solver`] — Common solver trait used by the harness
//! - [`bench`] — Repeated-run benchmarking, statistics and CSV output
//!
//! # Example
//!
//! ```
//! use u_tsp::distance::DistanceMatrix;
//! use u_tsp::models::Point;
//! use u_tsp::sa::{simulated_annealing_tsp, SaConfig};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 0.0),
//! ];
//! let dm = DistanceMatrix::from_points(&points);
//! let config = SaConfig::default().with_min_temperature(1e-2).with_seed(7);
//! let result = simulated_annealing_tsp(&dm, &config).unwrap();
//! assert!((result.best_cost - 40.0).abs() < 1e-9);
//! ```

pub mod aco;
pub mod bench;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod random;
pub mod sa;
pub mod solver;
pub mod tour;

pub use error::{Result, TspError};
