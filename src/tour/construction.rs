//! Nearest-neighbor tour construction.
//!
//! Starting from a given city, always move to the nearest unvisited city.
//! Ties are broken by the lowest city index.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977). "An analysis of several heuristics
//! for the traveling salesman problem", *SIAM J. Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Builds a tour greedily from `start`.
///
/// Returns an empty tour for an empty matrix.
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::tour::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ]);
/// assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Tour {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    visited[start] = true;
    tour.push(start);

    let mut current = start;
    while tour.len() < n {
        let unvisited = (0..n).filter(|&j| !visited[j]);
        let Some(next) = distances.nearest_neighbor(current, unvisited) else {
            break;
        };
        visited[next] = true;
        tour.push(next);
        current = next;
    }
    tour
}
