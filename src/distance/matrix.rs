//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per instance and only read afterwards; solvers borrow it.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// The rows must form a square, symmetric, non-negative matrix with a
    /// zero diagonal (see [`validate`](Self::validate)).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TspError::InvalidDistanceMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        let dm = Self { data, size: n };
        dm.validate(1e-9)?;
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks the metric-TSP input contract: symmetric, finite,
    /// non-negative, zero diagonal.
    pub fn validate(&self, tol: f64) -> Result<()> {
        for i in 0..self.size {
            if self.get(i, i).abs() > tol {
                return Err(TspError::InvalidDistanceMatrix(format!(
                    "diagonal entry ({i}, {i}) is {}",
                    self.get(i, i)
                )));
            }
            for j in 0..self.size {
                let d = self.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::InvalidDistanceMatrix(format!(
                        "entry ({i}, {j}) is {d}"
                    )));
                }
            }
        }
        if !self.is_symmetric(tol) {
            return Err(TspError::InvalidDistanceMatrix("matrix is not symmetric".into()));
        }
        Ok(())
    }

    /// Returns the nearest location to `from` among the given candidates.
    ///
    /// Ties go to the candidate yielded first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor<I>(&self, from: usize, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
