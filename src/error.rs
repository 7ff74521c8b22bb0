//! Error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised at the edges of the solvers and the benchmark harness.
///
/// Numeric degeneracies inside the solvers (zero distances, zero-cost ants,
/// all-zero selection weights) are not errors; they are absorbed by guard
/// values.
#[derive(Error, Debug)]
pub enum TspError {
    /// A solver or harness parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The solvers need at least two cities.
    #[error("at least 2 cities are required, got {0}")]
    TooFewCities(usize),

    /// Distance data does not describe a square matrix.
    #[error("invalid distance matrix: {0}")]
    InvalidDistanceMatrix(String),

    /// Instance generation parameters are unusable.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// Filesystem failure while writing results.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
