//! Tour utilities shared by both solvers.
//!
//! - [`tour_length`] — Cyclic tour cost, closing edge included
//! - [`nearest_neighbor_tour`] — Greedy construction, O(n²)
//! - [`mst_lower_bound`] — Prim's minimum spanning tree weight, a lower
//!   bound on any tour cost

mod bounds;
mod construction;
mod length;

pub use bounds::mst_lower_bound;
pub use construction::nearest_neighbor_tour;
pub use length::{is_permutation, tour_length};
