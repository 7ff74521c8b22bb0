//! Domain model types for synthetic TSP instances.
//!
//! Points in the plane, tours as permutations of city indices, generated
//! instances, and the result record every solver produces.

mod instance;
mod point;
mod solution;

pub use instance::{
    generate_clustered_points, generate_uniform_points, ClusterParams, Instance, InstanceKind,
};
pub use point::Point;
pub use solution::{SolverResult, Tour};
