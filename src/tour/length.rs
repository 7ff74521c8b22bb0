//! Tour cost evaluation.

use crate::distance::DistanceMatrix;

/// Computes the cyclic length of a tour: `t[0] → t[1] → … → t[n-1] → t[0]`.
///
/// No validation is performed; the caller guarantees `tour` indexes into
/// `distances`. Empty tours and single-city tours have length zero.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::tour::tour_length;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ]);
/// assert!((tour_length(&[0, 1, 2, 3], &dm) - 40.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let Some(&last) = tour.last() else {
        return 0.0;
    };
    let mut prev = last;
    let mut total = 0.0;
    for &city in tour {
        total += distances.get(prev, city);
        prev = city;
    }
    total
}

/// Returns `true` if `tour` visits every index in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
