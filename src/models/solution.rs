//! Tour and solver result types.

use serde::{Deserialize, Serialize};

/// An ordered visit sequence: a permutation of `0..n`.
///
/// The return edge from the last city to the first is implicit.
pub type Tour = Vec<usize>;

/// Best tour found by a solver run, with its cyclic cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// Best tour found.
    pub best_tour: Tour,
    /// Length of `best_tour`, closing edge included.
    pub best_cost: f64,
}

impl SolverResult {
    /// Creates a result.
    pub fn new(best_tour: Tour, best_cost: f64) -> Self {
        Self {
            best_tour,
            best_cost,
        }
    }
}
