//! Minimum spanning tree lower bound.
//!
//! Removing any edge from a Hamiltonian cycle leaves a spanning path, which
//! is a spanning tree, so `MST ≤ optimal tour ≤ any tour`. Solver output can
//! be reported as a ratio to this bound.
//!
//! Uses Prim's algorithm on the dense matrix, O(n²).

use crate::distance::DistanceMatrix;

/// Returns the weight of a minimum spanning tree over all locations.
///
/// Zero for matrices with fewer than two locations.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::tour::mst_lower_bound;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ]);
/// assert!((mst_lower_bound(&dm) - 30.0).abs() < 1e-10);
/// ```
pub fn mst_lower_bound(distances: &DistanceMatrix) -> f64 {
    let n = distances.size();
    if n < 2 {
        return 0.0;
    }

    let mut in_tree = vec![false; n];
    // Cheapest known connection of each location to the tree.
    let mut link = distances.row(0).to_vec();
    in_tree[0] = true;

    let mut total = 0.0;
    for _ in 1..n {
        let mut next = None;
        let mut best = f64::INFINITY;
        for v in 0..n {
            if !in_tree[v] && (next.is_none() || link[v] < best) {
                best = link[v];
                next = Some(v);
            }
        }
        let Some(u) = next else {
            break;
        };
        in_tree[u] = true;
        total += best;
        for v in 0..n {
            if !in_tree[v] {
                let d = distances.get(u, v);
                if d < link[v] {
                    link[v] = d;
                }
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn test_line() {
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
        ]);
        assert!((mst_lower_bound(&dm) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_small_matrices() {
        assert_eq!(mst_lower_bound(&DistanceMatrix::new(0)), 0.0);
        assert_eq!(mst_lower_bound(&DistanceMatrix::from_points(&[Point::new(1.0, 1.0)])), 0.0);
        let two = DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(0.0, 2.5)]);
        assert!((mst_lower_bound(&two) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_coincident_points_cost_nothing() {
        let dm = DistanceMatrix::from_points(&[
            Point::new(2.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 4.0),
        ]);
        assert!((mst_lower_bound(&dm) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_bound_below_tour() {
        let dm = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(2.0, 7.0),
            Point::new(9.0, 3.0),
            Point::new(6.0, 6.0),
        ]);
        let tour_cost = crate::tour::tour_length(&[0, 1, 3, 4, 2], &dm);
        assert!(mst_lower_bound(&dm) <= tour_cost + 1e-10);
    }
}
