//! Property-based tests for the tour utilities and both solvers.

use proptest::prelude::*;
use u_tsp::aco::{AcoConfig, AcoRunner};
use u_tsp::distance::DistanceMatrix;
use u_tsp::local_search::{apply_two_opt, is_trivial_move, two_opt_delta};
use u_tsp::models::Point;
use u_tsp::sa::{SaConfig, SaRunner};
use u_tsp::tour::{is_permutation, mst_lower_bound, nearest_neighbor_tour, tour_length};

// ============================================================================
// Strategies
// ============================================================================

fn random_points(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), min..max)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

/// Points together with a random permutation of their indices.
fn points_and_tour() -> impl Strategy<Value = (Vec<Point>, Vec<usize>)> {
    random_points(2, 25).prop_flat_map(|points| {
        let n = points.len();
        (Just(points), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
    })
}

fn fast_sa(seed: u64) -> SaConfig {
    SaConfig::default()
        .with_initial_temperature(50.0)
        .with_min_temperature(0.5)
        .with_cooling_factor(0.9)
        .with_seed(seed)
}

fn fast_aco(seed: u64) -> AcoConfig {
    AcoConfig::default().with_iterations(8).with_seed(seed)
}

// ============================================================================
// Tour Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_tour_length_rotation_invariant((points, tour) in points_and_tour(), shift in 0usize..25) {
        let dm = DistanceMatrix::from_points(&points);
        let mut rotated = tour.clone();
        rotated.rotate_left(shift % tour.len());
        prop_assert!((tour_length(&tour, &dm) - tour_length(&rotated, &dm)).abs() < 1e-6);
    }

    #[test]
    fn prop_tour_length_reversal_invariant((points, tour) in points_and_tour()) {
        let dm = DistanceMatrix::from_points(&points);
        let reversed: Vec<usize> = tour.iter().rev().copied().collect();
        prop_assert!((tour_length(&tour, &dm) - tour_length(&reversed, &dm)).abs() < 1e-6);
    }

    #[test]
    fn prop_nearest_neighbor_is_permutation(points in random_points(1, 40), start in 0usize..40) {
        let dm = DistanceMatrix::from_points(&points);
        let start = start % points.len();
        let tour = nearest_neighbor_tour(&dm, start);
        prop_assert_eq!(tour[0], start);
        prop_assert!(is_permutation(&tour, points.len()));
    }

    #[test]
    fn prop_two_opt_delta_matches_recompute(
        (points, tour) in points_and_tour(),
        a in 0usize..25,
        b in 0usize..25,
    ) {
        let n = tour.len();
        let (i, k) = {
            let (a, b) = (a % n, b % n);
            (a.min(b), a.max(b))
        };
        prop_assume!(i != k && !is_trivial_move(i, k, n));

        let dm = DistanceMatrix::from_points(&points);
        let before = tour_length(&tour, &dm);
        let delta = two_opt_delta(&tour, i, k, &dm);
        let mut moved = tour.clone();
        apply_two_opt(&mut moved, i, k);
        let after = tour_length(&moved, &dm);

        prop_assert!(is_permutation(&moved, n));
        prop_assert!((delta - (after - before)).abs() < 1e-6);
    }

    #[test]
    fn prop_mst_bounds_any_tour((points, tour) in points_and_tour()) {
        let dm = DistanceMatrix::from_points(&points);
        prop_assert!(mst_lower_bound(&dm) <= tour_length(&tour, &dm) + 1e-9);
    }
}

// ============================================================================
// Solver Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_sa_valid_and_bounded(points in random_points(2, 30), seed in 0u64..1000) {
        let dm = DistanceMatrix::from_points(&points);
        let result = SaRunner::run(&dm, &fast_sa(seed)).unwrap();

        prop_assert!(is_permutation(&result.best_tour, points.len()));
        prop_assert!((tour_length(&result.best_tour, &dm) - result.best_cost).abs() < 1e-6);
        prop_assert!(result.best_cost >= mst_lower_bound(&dm) - 1e-9);
        prop_assert!(result.best_cost <= tour_length(&nearest_neighbor_tour(&dm, 0), &dm) + 1e-9);
    }

    #[test]
    fn prop_sa_best_non_increasing(points in random_points(4, 30), seed in 0u64..1000) {
        let dm = DistanceMatrix::from_points(&points);
        let mut observed = Vec::new();
        let result = SaRunner::run_observed(&dm, &fast_sa(seed), |step| {
            observed.push(step.best_cost);
        })
        .unwrap();

        for pair in observed.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
        for pair in result.cost_history.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn prop_sa_deterministic(points in random_points(2, 25), seed in 0u64..1000) {
        let dm = DistanceMatrix::from_points(&points);
        let a = SaRunner::run(&dm, &fast_sa(seed)).unwrap();
        let b = SaRunner::run(&dm, &fast_sa(seed)).unwrap();
        prop_assert_eq!(a.best_tour, b.best_tour);
        prop_assert_eq!(a.best_cost, b.best_cost);
        prop_assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn prop_aco_valid_and_bounded(points in random_points(2, 25), seed in 0u64..1000) {
        let dm = DistanceMatrix::from_points(&points);
        let result = AcoRunner::run(&dm, &fast_aco(seed)).unwrap();

        prop_assert!(is_permutation(&result.best_tour, points.len()));
        prop_assert!((tour_length(&result.best_tour, &dm) - result.best_cost).abs() < 1e-6);
        prop_assert!(result.best_cost >= mst_lower_bound(&dm) - 1e-9);
    }

    #[test]
    fn prop_aco_pheromone_non_negative(
        points in random_points(2, 20),
        seed in 0u64..1000,
        rho in 0.01..0.99f64,
    ) {
        let dm = DistanceMatrix::from_points(&points);
        let config = fast_aco(seed).with_rho(rho);
        let mut min_seen = f64::INFINITY;
        AcoRunner::run_observed(&dm, &config, |_, colony| {
            let min = colony.pheromone_values().iter().copied().fold(f64::INFINITY, f64::min);
            min_seen = min_seen.min(min);
        })
        .unwrap();
        prop_assert!(min_seen >= 0.0);
    }

    #[test]
    fn prop_aco_deterministic(points in random_points(2, 20), seed in 0u64..1000) {
        let dm = DistanceMatrix::from_points(&points);
        let a = AcoRunner::run(&dm, &fast_aco(seed)).unwrap();
        let b = AcoRunner::run(&dm, &fast_aco(seed)).unwrap();
        prop_assert_eq!(a.best_tour, b.best_tour);
        prop_assert_eq!(a.best_cost, b.best_cost);
        prop_assert_eq!(a.cost_history, b.cost_history);
    }
}
