//! Benchmark execution: one instance per run, both solvers per instance.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::BenchmarkConfig;
use super::report::BenchmarkRow;
use super::stats::{mean, summarize, Summary};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Instance;
use crate::solver::TspSolver;
use crate::tour::mst_lower_bound;

/// Outcome of a single seeded run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub n: usize,
    pub seed: u64,
    pub sa_cost: f64,
    pub sa_time_s: f64,
    pub aco_cost: f64,
    pub aco_time_s: f64,
    pub mst: f64,
}

/// Solves with `solver`, returning the best cost and wall-clock seconds.
fn timed_solve(solver: &dyn TspSolver, distances: &DistanceMatrix) -> Result<(f64, f64)> {
    let start = Instant::now();
    let result = solver.solve(distances)?;
    let elapsed = start.elapsed().as_secs_f64();
    tracing::trace!(solver = solver.name(), cost = result.best_cost, elapsed, "solver done");
    Ok((result.best_cost, elapsed))
}

/// Generates the instance for run `run` and solves it with both solvers.
///
/// The instance and both solvers share the seed `base_seed + run`.
pub fn run_single(n: usize, run: usize, config: &BenchmarkConfig) -> Result<RunRecord> {
    let seed = config.seed_for_run(run);
    let instance = Instance::generate(config.kind, n, seed, config.square_size)?;
    let distances = DistanceMatrix::from_points(&instance.points);

    let sa_config = config.sa.clone().with_seed(seed);
    let (sa_cost, sa_time_s) = timed_solve(&sa_config, &distances)?;

    let aco_config = config.aco.clone().with_seed(seed);
    let (aco_cost, aco_time_s) = timed_solve(&aco_config, &distances)?;

    let mst = mst_lower_bound(&distances);
    tracing::debug!(
        instance = %instance.name,
        sa_cost,
        aco_cost,
        mst,
        "run finished"
    );

    Ok(RunRecord {
        n,
        seed,
        sa_cost,
        sa_time_s,
        aco_cost,
        aco_time_s,
        mst,
    })
}

#[cfg(feature = "parallel")]
fn collect_runs(n: usize, config: &BenchmarkConfig) -> Result<Vec<RunRecord>> {
    (0..config.runs)
        .into_par_iter()
        .map(|run| run_single(n, run, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_runs(n: usize, config: &BenchmarkConfig) -> Result<Vec<RunRecord>> {
    (0..config.runs).map(|run| run_single(n, run, config)).collect()
}

fn summary_of(records: &[RunRecord], field: impl Fn(&RunRecord) -> f64) -> Result<Summary> {
    let values: Vec<f64> = records.iter().map(field).collect();
    summarize(&values).ok_or_else(|| TspError::InvalidConfig("runs must be at least 1".into()))
}

/// Runs every seed for one instance size and aggregates the results.
pub fn run_size(n: usize, config: &BenchmarkConfig) -> Result<BenchmarkRow> {
    let records = collect_runs(n, config)?;

    let sa = summary_of(&records, |r| r.sa_cost)?;
    let aco = summary_of(&records, |r| r.aco_cost)?;
    let sa_times: Vec<f64> = records.iter().map(|r| r.sa_time_s).collect();
    let aco_times: Vec<f64> = records.iter().map(|r| r.aco_time_s).collect();
    let msts: Vec<f64> = records.iter().map(|r| r.mst).collect();

    let row = BenchmarkRow {
        n,
        runs: records.len(),
        sa_seconds: config.sa_seconds(),
        aco_iters: config.aco.iterations,
        sa_best: sa.best,
        sa_mean: sa.mean,
        sa_stdev: sa.stdev,
        sa_time_mean_s: mean(&sa_times),
        aco_best: aco.best,
        aco_mean: aco.mean,
        aco_stdev: aco.stdev,
        aco_time_mean_s: mean(&aco_times),
        mst_mean: mean(&msts),
    };
    tracing::info!(
        n,
        runs = row.runs,
        sa_mean = row.sa_mean,
        aco_mean = row.aco_mean,
        mst_mean = row.mst_mean,
        "size complete"
    );
    Ok(row)
}

/// Runs the whole sweep, one row per configured size in order.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<Vec<BenchmarkRow>> {
    config.validate()?;
    config
        .sizes
        .iter()
        .map(|&n| run_size(n, config))
        .collect()
}
