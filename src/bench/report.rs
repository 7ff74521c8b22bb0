//! Benchmark rows and CSV output.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Aggregated results for one instance size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub n: usize,
    pub runs: usize,
    pub sa_seconds: f64,
    pub aco_iters: usize,
    pub sa_best: f64,
    pub sa_mean: f64,
    pub sa_stdev: f64,
    pub sa_time_mean_s: f64,
    pub aco_best: f64,
    pub aco_mean: f64,
    pub aco_stdev: f64,
    pub aco_time_mean_s: f64,
    /// Mean MST lower bound over the generated instances.
    pub mst_mean: f64,
}

/// One-line console summary of a row.
pub fn format_row(row: &BenchmarkRow) -> String {
    format!(
        "n={:>3} | SA mean={:.2} (best={:.2}) time={:.3}s | ACO mean={:.2} (best={:.2}) time={:.3}s | MST mean={:.2}",
        row.n,
        row.sa_mean,
        row.sa_best,
        row.sa_time_mean_s,
        row.aco_mean,
        row.aco_best,
        row.aco_time_mean_s,
        row.mst_mean,
    )
}

/// Writes rows as CSV (with header) to any writer.
pub fn write_csv_to<W: Write>(writer: W, rows: &[BenchmarkRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes rows as CSV to `path`, creating parent directories as needed.
pub fn write_csv(path: &Path, rows: &[BenchmarkRow]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_csv_to(file, rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote benchmark csv");
    Ok(())
}
