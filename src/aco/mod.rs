//! Ant Colony Optimization (ACO) for the TSP.
//!
//! Ant System variant: every iteration, each ant builds a complete tour by
//! choosing the next city with probability proportional to
//! `tau[i][j]^alpha * eta[i][j]^beta`, where `tau` is the pheromone matrix and
//! `eta = 1 / (d + epsilon)` the visibility. Pheromone then evaporates by a
//! factor `1 - rho` and every ant deposits `q / cost` on the edges it used.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

mod colony;
mod config;
mod runner;

pub use colony::Colony;
pub use config::AcoConfig;
pub use runner::{ant_colony_optimize, AcoMeta, AcoResult, AcoRunner};
