//! Simulated Annealing (SA) for the TSP.
//!
//! A single-tour trajectory search. Starts from the nearest-neighbor tour,
//! proposes random 2-opt moves evaluated in O(1), and accepts worsening
//! moves with the Metropolis probability `exp(-delta / T)` while the
//! temperature cools geometrically.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{simulated_annealing_tsp, SaResult, SaRunner, SaStep};
