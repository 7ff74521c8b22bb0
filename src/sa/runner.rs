//! SA execution loop.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::SaConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::local_search::{apply_two_opt, is_trivial_move, two_opt_delta};
use crate::models::{SolverResult, Tour};
use crate::random::create_rng;
use crate::tour::{nearest_neighbor_tour, tour_length};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaResult {
    /// The best tour found.
    pub best_tour: Tour,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Total inner iterations, including skipped trivial moves.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Number of completed temperature levels.
    pub temperature_levels: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Whether the time budget ended the run.
    pub timed_out: bool,

    /// Best cost at the start and after every temperature level.
    pub cost_history: Vec<f64>,
}

impl SaResult {
    /// The best tour and its cost.
    pub fn solution(&self) -> SolverResult {
        SolverResult::new(self.best_tour.clone(), self.best_cost)
    }
}

/// Snapshot passed to the observer after each accepted move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaStep {
    /// Inner iteration counter at acceptance.
    pub iteration: usize,
    /// Current temperature.
    pub temperature: f64,
    /// Cost change of the accepted move.
    pub delta: f64,
    /// Incrementally tracked cost of the working tour.
    pub current_cost: f64,
    /// Best cost so far.
    pub best_cost: f64,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on the given distance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidConfig`] for an invalid configuration and
    /// [`TspError::TooFewCities`] for fewer than two cities.
    pub fn run(distances: &DistanceMatrix, config: &SaConfig) -> Result<SaResult> {
        Self::run_observed(distances, config, |_| {})
    }

    /// Runs SA, calling `observer` after every accepted move.
    pub fn run_observed<F>(
        distances: &DistanceMatrix,
        config: &SaConfig,
        mut observer: F,
    ) -> Result<SaResult>
    where
        F: FnMut(&SaStep),
    {
        config.validate()?;
        let n = distances.size();
        if n < 2 {
            return Err(TspError::TooFewCities(n));
        }

        let mut rng = create_rng(config.seed);
        let inner_iters = config.inner_iterations(n);
        tracing::debug!(
            n,
            inner_iters,
            t0 = config.initial_temperature,
            t_min = config.min_temperature,
            seed = config.seed,
            "starting simulated annealing"
        );

        // Working tour, mutated in place; `best_tour` is always a separate copy.
        let mut tour = nearest_neighbor_tour(distances, 0);
        let mut current_cost = tour_length(&tour, distances);
        let mut best_tour = tour.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature_levels = 0usize;
        let mut timed_out = false;
        let mut cost_history = vec![best_cost];

        let started = Instant::now();

        while temperature > config.min_temperature {
            if let Some(budget) = config.time_budget {
                if started.elapsed() >= budget {
                    timed_out = true;
                    break;
                }
            }

            for _ in 0..inner_iters {
                iterations += 1;

                let (i, k) = sample_cut_points(n, &mut rng);
                if is_trivial_move(i, k, n) {
                    continue;
                }

                let delta = two_opt_delta(&tour, i, k, distances);

                // Metropolis acceptance criterion
                let accept =
                    delta <= 0.0 || rng.random::<f64>() < (-delta / temperature).exp();
                if !accept {
                    continue;
                }

                apply_two_opt(&mut tour, i, k);
                current_cost += delta;
                accepted_moves += 1;
                if delta < 0.0 {
                    improving_moves += 1;
                }
                if current_cost < best_cost {
                    best_cost = current_cost;
                    best_tour.clone_from(&tour);
                }

                observer(&SaStep {
                    iteration: iterations,
                    temperature,
                    delta,
                    current_cost,
                    best_cost,
                });
            }

            temperature *= config.cooling_factor;
            temperature_levels += 1;
            cost_history.push(best_cost);
        }

        tracing::debug!(
            best_cost,
            iterations,
            accepted_moves,
            temperature_levels,
            timed_out,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best_tour,
            best_cost,
            iterations,
            accepted_moves,
            improving_moves,
            temperature_levels,
            final_temperature: temperature,
            timed_out,
            cost_history,
        })
    }
}

/// Solves the TSP with Simulated Annealing.
///
/// Convenience wrapper around [`SaRunner::run`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::generate_uniform_points;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::sa::{simulated_annealing_tsp, SaConfig};
/// use u_tsp::tour::{is_permutation, tour_length};
///
/// let points = generate_uniform_points(15, 1000, 1000.0).unwrap();
/// let dm = DistanceMatrix::from_points(&points);
/// let config = SaConfig::default().with_min_temperature(1e-2).with_seed(1000);
/// let result = simulated_annealing_tsp(&dm, &config).unwrap();
/// assert!(is_permutation(&result.best_tour, 15));
/// assert!((tour_length(&result.best_tour, &dm) - result.best_cost).abs() < 1e-6);
/// ```
pub fn simulated_annealing_tsp(distances: &DistanceMatrix, config: &SaConfig) -> Result<SaResult> {
    SaRunner::run(distances, config)
}

/// Draws two distinct tour positions uniformly and returns them ordered.
fn sample_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
