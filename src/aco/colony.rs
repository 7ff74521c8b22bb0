//! Colony state: pheromone and visibility matrices, tour construction and
//! the pheromone update.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use super::config::AcoConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;
use crate::tour::tour_length;

/// Working state of one ACO run.
///
/// Owns the pheromone matrix (mutated every iteration), the visibility
/// matrix (fixed at construction) and borrows the distance matrix. All
/// matrices are n×n, row-major.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::{AcoConfig, Colony};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::models::Point;
/// use u_tsp::random::create_rng;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ]);
/// let config = AcoConfig::default().with_seed(3);
/// let mut colony = Colony::new(&dm, &config).unwrap();
/// let mut rng = create_rng(config.seed);
/// let tours = colony.iterate(&mut rng);
/// assert_eq!(tours.len(), 3);
/// assert!(colony.pheromone_values().iter().all(|&tau| tau >= 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct Colony<'a> {
    distances: &'a DistanceMatrix,
    n: usize,
    ants: usize,
    alpha: f64,
    beta: f64,
    rho: f64,
    q: f64,
    pheromone: Vec<f64>,
    heuristic: Vec<f64>,
    // tau^alpha * eta^beta, refreshed at the start of every iteration.
    attractiveness: Vec<f64>,
}

impl<'a> Colony<'a> {
    /// Builds the initial colony state.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidConfig`] for an invalid configuration and
    /// [`TspError::TooFewCities`] for fewer than two cities.
    pub fn new(distances: &'a DistanceMatrix, config: &AcoConfig) -> Result<Self> {
        config.validate()?;
        let n = distances.size();
        if n < 2 {
            return Err(TspError::TooFewCities(n));
        }

        let mut heuristic = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    heuristic[i * n + j] = 1.0 / (distances.get(i, j) + config.epsilon);
                }
            }
        }

        Ok(Self {
            distances,
            n,
            ants: config.colony_size(n),
            alpha: config.alpha,
            beta: config.beta,
            rho: config.rho,
            q: config.q,
            pheromone: vec![config.initial_pheromone; n * n],
            heuristic,
            attractiveness: vec![0.0; n * n],
        })
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of ants per iteration.
    pub fn ants(&self) -> usize {
        self.ants
    }

    /// Pheromone on edge `(i, j)`.
    pub fn pheromone(&self, i: usize, j: usize) -> f64 {
        self.pheromone[i * self.n + j]
    }

    /// Visibility `1 / (d(i, j) + epsilon)`, zero on the diagonal.
    pub fn heuristic(&self, i: usize, j: usize) -> f64 {
        self.heuristic[i * self.n + j]
    }

    /// All pheromone values, row-major.
    pub fn pheromone_values(&self) -> &[f64] {
        &self.pheromone
    }

    /// All visibility values, row-major.
    pub fn heuristic_values(&self) -> &[f64] {
        &self.heuristic
    }

    /// Runs one iteration: every ant builds a tour, then pheromone
    /// evaporates and each ant deposits on its edges.
    ///
    /// Returns the constructed tours with their costs, in ant order.
    pub fn iterate<R: Rng>(&mut self, rng: &mut R) -> Vec<(Tour, f64)> {
        self.refresh_attractiveness();

        let mut scratch = Vec::with_capacity(self.n);
        let mut tours = Vec::with_capacity(self.ants);
        for _ in 0..self.ants {
            let tour = self.construct_tour(rng, &mut scratch);
            let cost = tour_length(&tour, self.distances);
            tours.push((tour, cost));
        }

        self.evaporate();
        for (tour, cost) in &tours {
            self.deposit(tour, *cost);
        }
        tours
    }

    /// Builds one ant's tour from a uniformly random start city.
    ///
    /// Reads `attractiveness`, which must be current.
    fn construct_tour<R: Rng>(&self, rng: &mut R, scratch: &mut Vec<f64>) -> Tour {
        let n = self.n;
        let start = rng.random_range(0..n);
        let mut tour = Vec::with_capacity(n);
        tour.push(start);

        let mut unvisited: Vec<usize> = (0..n).filter(|&j| j != start).collect();
        let mut current = start;
        while !unvisited.is_empty() {
            let row = &self.attractiveness[current * n..(current + 1) * n];
            scratch.clear();
            scratch.extend(unvisited.iter().map(|&j| row[j]));

            let next = unvisited.swap_remove(choose_index(scratch, rng));
            tour.push(next);
            current = next;
        }
        tour
    }

    /// Multiplies every pheromone entry by `1 - rho`.
    pub fn evaporate(&mut self) {
        let keep = 1.0 - self.rho;
        for tau in &mut self.pheromone {
            *tau *= keep;
        }
    }

    /// Adds `q / cost` to both directions of every edge of `tour`,
    /// closing edge included. Tours without a positive cost deposit nothing.
    pub fn deposit(&mut self, tour: &[usize], cost: f64) {
        if cost.is_nan() || cost <= 0.0 {
            return;
        }
        let amount = self.q / cost;
        let n = self.n;
        let len = tour.len();
        for idx in 0..len {
            let u = tour[idx];
            let v = tour[(idx + 1) % len];
            self.pheromone[u * n + v] += amount;
            self.pheromone[v * n + u] += amount;
        }
    }

    fn refresh_attractiveness(&mut self) {
        for ((w, &tau), &eta) in self
            .attractiveness
            .iter_mut()
            .zip(&self.pheromone)
            .zip(&self.heuristic)
        {
            *w = tau.powf(self.alpha) * eta.powf(self.beta);
        }
    }
}

/// Draws an index with probability proportional to `weights`.
///
/// Weight vectors that cannot be normalized (all zero, or containing
/// non-finite values) fall back to a uniform draw.
fn choose_index<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if total > 0.0 && total.is_finite() {
        if let Ok(dist) = WeightedIndex::<f64>::new(weights.iter()) {
            return dist.sample(rng);
        }
    }
    rng.random_range(0..weights.len())
}
