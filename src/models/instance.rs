//! Synthetic instance generation.
//!
//! Two point distributions are supported:
//!
//! - **Uniform**: every coordinate drawn independently from `[0, size)`.
//! - **Clustered**: `k` centers drawn uniformly; point `i` is drawn from an
//!   isotropic Gaussian around center `i mod k`, clamped to the square, and
//!   the result is shuffled so cluster membership is not positional.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::{Result, TspError};
use crate::random::create_rng;

/// Point distribution used to generate an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceKind {
    /// Uniform over the square.
    Uniform,
    /// Gaussian clusters around uniformly placed centers.
    Clustered,
}

impl InstanceKind {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Clustered => "clustered",
        }
    }
}

impl fmt::Display for InstanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstanceKind {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Ok(Self::Uniform),
            "clustered" | "cluster" => Ok(Self::Clustered),
            other => Err(TspError::InvalidInstance(format!(
                "unknown instance kind '{other}'"
            ))),
        }
    }
}

/// Parameters of the clustered distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterParams {
    /// Side length of the square the points are clamped to.
    pub square_size: f64,
    /// Number of cluster centers.
    pub k_clusters: usize,
    /// Standard deviation of each cluster.
    pub cluster_spread: f64,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            square_size: 1000.0,
            k_clusters: 4,
            cluster_spread: 60.0,
        }
    }
}

/// A generated TSP instance.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, InstanceKind};
///
/// let inst = Instance::generate(InstanceKind::Clustered, 30, 1000, 1000.0).unwrap();
/// assert_eq!(inst.len(), 30);
/// assert_eq!(inst.name, "clustered-n30-s1000");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Human-readable identifier.
    pub name: String,
    /// City coordinates.
    pub points: Vec<Point>,
    /// Seed the points were drawn with.
    pub seed: u64,
    /// Distribution the points were drawn from.
    pub kind: InstanceKind,
    /// Side length of the bounding square.
    pub square_size: f64,
}

impl Instance {
    /// Generates an instance of `n` cities.
    ///
    /// Clustered instances use [`ClusterParams::default`] with the given
    /// square size.
    pub fn generate(kind: InstanceKind, n: usize, seed: u64, square_size: f64) -> Result<Self> {
        let points = match kind {
            InstanceKind::Uniform => generate_uniform_points(n, seed, square_size)?,
            InstanceKind::Clustered => {
                let params = ClusterParams {
                    square_size,
                    ..ClusterParams::default()
                };
                generate_clustered_points(n, seed, &params)?
            }
        };
        Ok(Self {
            name: format!("{kind}-n{n}-s{seed}"),
            points,
            seed,
            kind,
            square_size,
        })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the instance has no cities.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Draws `n` points uniformly from `[0, square_size)²`.
pub fn generate_uniform_points(n: usize, seed: u64, square_size: f64) -> Result<Vec<Point>> {
    check_square(square_size)?;
    let mut rng = create_rng(seed);
    Ok((0..n)
        .map(|_| {
            let x = rng.random_range(0.0..square_size);
            let y = rng.random_range(0.0..square_size);
            Point::new(x, y)
        })
        .collect())
}

/// Draws `n` points around `k_clusters` uniformly placed centers.
pub fn generate_clustered_points(n: usize, seed: u64, params: &ClusterParams) -> Result<Vec<Point>> {
    check_square(params.square_size)?;
    if params.k_clusters == 0 {
        return Err(TspError::InvalidInstance(
            "k_clusters must be at least 1".into(),
        ));
    }
    if !(params.cluster_spread.is_finite() && params.cluster_spread >= 0.0) {
        return Err(TspError::InvalidInstance(format!(
            "cluster_spread must be non-negative and finite, got {}",
            params.cluster_spread
        )));
    }
    let noise = Normal::new(0.0, params.cluster_spread)
        .map_err(|e| TspError::InvalidInstance(format!("cluster_spread: {e}")))?;

    let size = params.square_size;
    let mut rng = create_rng(seed);
    let centers: Vec<Point> = (0..params.k_clusters)
        .map(|_| {
            let x = rng.random_range(0.0..size);
            let y = rng.random_range(0.0..size);
            Point::new(x, y)
        })
        .collect();

    let mut points: Vec<Point> = (0..n)
        .map(|i| {
            let c = centers[i % centers.len()];
            let x = (c.x + noise.sample(&mut rng)).clamp(0.0, size);
            let y = (c.y + noise.sample(&mut rng)).clamp(0.0, size);
            Point::new(x, y)
        })
        .collect();
    points.shuffle(&mut rng);
    Ok(points)
}

fn check_square(square_size: f64) -> Result<()> {
    if !square_size.is_finite() || square_size <= 0.0 {
        return Err(TspError::InvalidInstance(format!(
            "square_size must be positive and finite, got {square_size}"
        )));
    }
    Ok(())
}
