//! Benchmark harness: SA vs ACO on generated instances.
//!
//! For every instance size, `runs` instances are generated with seeds
//! `base_seed + r`; both solvers run on each with the same seed, and their
//! costs and wall-clock times are aggregated into one [`BenchmarkRow`].
//!
//! - [`BenchmarkConfig`] — Sizes, run count, instance kind, solver templates
//! - [`run_benchmark`] — Executes every size and returns the rows
//! - [`summarize`] — Min / mean / population standard deviation
//! - [`write_csv`] — Writes rows with a header line

mod config;
mod report;
mod runner;
mod stats;

pub use config::{parse_sizes, BenchmarkConfig};
pub use report::{format_row, write_csv, write_csv_to, BenchmarkRow};
pub use runner::{run_benchmark, run_single, run_size, RunRecord};
pub use stats::{mean, summarize, Summary};
