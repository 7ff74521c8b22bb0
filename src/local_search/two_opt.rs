//! 2-opt on a closed tour.
//!
//! # Algorithm
//!
//! For tour positions `i < k`, a 2-opt move removes edges `(t[i], t[i+1])`
//! and `(t[k], t[k+1])` (indices modulo n) and reconnects the tour by
//! reversing the segment `t[i+1..=k]`:
//!
//! ```text
//! delta = d(t[i], t[k]) + d(t[i+1], t[k+1]) - d(t[i], t[i+1]) - d(t[k], t[k+1])
//! ```
//!
//! Only the four endpoints are touched, so a move is evaluated in O(1).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::models::Tour;
use crate::tour::{nearest_neighbor_tour, tour_length};

/// Returns `true` if the move `(i, k)` leaves every edge unchanged.
///
/// That is the case for adjacent positions (`k == i + 1`) and for the
/// wrap-around pair `(0, n - 1)`, whose reversal only flips direction.
#[inline]
pub fn is_trivial_move(i: usize, k: usize, n: usize) -> bool {
    k == i + 1 || (i == 0 && k == n - 1)
}

/// Computes the cost change of reversing `tour[i+1..=k]`.
///
/// Requires `i < k < tour.len()`.
///
/// Before: `… t[i] → t[i+1] … t[k] → t[k+1] …`
/// After:  `… t[i] → t[k] … t[i+1] → t[k+1] …`
#[inline]
pub fn two_opt_delta(tour: &[usize], i: usize, k: usize, distances: &DistanceMatrix) -> f64 {
    let n = tour.len();
    let a = tour[i];
    let b = tour[i + 1];
    let c = tour[k];
    let e = if k == n - 1 { tour[0] } else { tour[k + 1] };

    let old_cost = distances.get(a, b) + distances.get(c, e);
    let new_cost = distances.get(a, c) + distances.get(b, e);
    new_cost - old_cost
}

/// Applies the move `(i, k)` by reversing `tour[i+1..=k]` in place.
#[inline]
pub fn apply_two_opt(tour: &mut [usize], i: usize, k: usize) {
    tour[i + 1..=k].reverse();
}

/// Improves a tour with first-improvement 2-opt until no improving move
/// remains.
///
/// Returns the improved tour and its length.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ]);
/// // 0→2→1→3 crosses itself
/// let (tour, cost) = two_opt_improve(&[0, 2, 1, 3], &dm);
/// assert!((cost - 40.0).abs() < 1e-10);
/// assert_eq!(tour.len(), 4);
/// ```
pub fn two_opt_improve(tour: &[usize], distances: &DistanceMatrix) -> (Tour, f64) {
    let mut current = tour.to_vec();
    let n = current.len();
    if n < 4 {
        let cost = tour_length(&current, distances);
        return (current, cost);
    }

    let mut improved = true;
    while improved {
        improved = false;
        'scan: for i in 0..n - 1 {
            for k in i + 1..n {
                if is_trivial_move(i, k, n) {
                    continue;
                }
                if two_opt_delta(&current, i, k, distances) < -1e-10 {
                    apply_two_opt(&mut current, i, k);
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    let cost = tour_length(&current, distances);
    (current, cost)
}

/// Greedy baseline: nearest-neighbor tour from city 0, then 2-opt.
pub fn greedy_two_opt(distances: &DistanceMatrix) -> (Tour, f64) {
    let start = nearest_neighbor_tour(distances, 0);
    two_opt_improve(&start, distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use crate::tour::is_permutation;

    fn pentagon_ish() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(2.0, 7.0),
            Point::new(9.0, 3.0),
            Point::new(6.0, 6.0),
            Point::new(1.0, 4.0),
        ])
    }

    #[test]
    fn test_delta_matches_full_recompute() {
        let dm = pentagon_ish();
        let tour = vec![0, 3, 1, 5, 2, 4];
        let n = tour.len();
        let before = tour_length(&tour, &dm);
        for i in 0..n - 1 {
            for k in i + 1..n {
                let mut moved = tour.clone();
                apply_two_opt(&mut moved, i, k);
                let expected = tour_length(&moved, &dm) - before;
                let delta = two_opt_delta(&tour, i, k, &dm);
                assert!(
                    (delta - expected).abs() < 1e-9,
                    "i={i} k={k}: delta {delta} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_trivial_moves() {
        assert!(is_trivial_move(2, 3, 6));
        assert!(is_trivial_move(0, 5, 6));
        assert!(!is_trivial_move(0, 4, 6));
        assert!(!is_trivial_move(1, 5, 6));
    }

    #[test]
    fn test_trivial_moves_have_zero_delta() {
        let dm = pentagon_ish();
        let tour = vec![0, 3, 1, 5, 2, 4];
        assert!(two_opt_delta(&tour, 2, 3, &dm).abs() < 1e-12);
        assert!(two_opt_delta(&tour, 0, 5, &dm).abs() < 1e-12);
    }

    #[test]
    fn test_apply_reverses_segment() {
        let mut tour = vec![0, 1, 2, 3, 4, 5];
        apply_two_opt(&mut tour, 1, 4);
        assert_eq!(tour, vec![0, 1, 4, 3, 2, 5]);
    }

    #[test]
    fn test_improve_does_not_worsen() {
        let dm = pentagon_ish();
        let initial = vec![0, 2, 3, 5, 4, 1];
        let before = tour_length(&initial, &dm);
        let (tour, cost) = two_opt_improve(&initial, &dm);
        assert!(cost <= before + 1e-10);
        assert!(is_permutation(&tour, 6));
        assert!((cost - tour_length(&tour, &dm)).abs() < 1e-10);
    }

    #[test]
    fn test_improve_reaches_local_optimum() {
        let dm = pentagon_ish();
        let (tour, _) = two_opt_improve(&[0, 2, 3, 5, 4, 1], &dm);
        let n = tour.len();
        for i in 0..n - 1 {
            for k in i + 1..n {
                assert!(two_opt_delta(&tour, i, k, &dm) >= -1e-10);
            }
        }
    }

    #[test]
    fn test_improve_small_tours() {
        let dm = pentagon_ish();
        let (tour, cost) = two_opt_improve(&[0, 1, 2], &dm);
        assert_eq!(tour, vec![0, 1, 2]);
        assert!((cost - tour_length(&[0, 1, 2], &dm)).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_two_opt() {
        let dm = pentagon_ish();
        let (tour, cost) = greedy_two_opt(&dm);
        assert!(is_permutation(&tour, 6));
        let nn_cost = tour_length(&nearest_neighbor_tour(&dm, 0), &dm);
        assert!(cost <= nn_cost + 1e-10);
    }
}
