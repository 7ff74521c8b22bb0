//! Distance matrices.
//!
//! Provides the dense, read-only distance matrix consumed by every solver.

mod matrix;

pub use matrix::DistanceMatrix;
