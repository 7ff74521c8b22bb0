//! tsp-bench: SA vs ACO on synthetic TSP instances, written to CSV.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use u_tsp::bench::{format_row, parse_sizes, run_benchmark, write_csv, BenchmarkConfig};
use u_tsp::models::InstanceKind;

#[derive(Parser)]
#[command(name = "tsp-bench")]
#[command(about = "Benchmark simulated annealing and ant colony optimization on the TSP")]
#[command(version)]
struct Cli {
    /// Comma-separated instance sizes
    #[arg(long, default_value = "20,50,100")]
    sizes: String,

    /// Runs (seeds) per size
    #[arg(long, default_value_t = 5)]
    runs: usize,

    /// SA wall-clock budget per run in seconds (0 = unbounded)
    #[arg(long, default_value_t = 0.3)]
    sa_seconds: f64,

    /// ACO iterations per run
    #[arg(long, default_value_t = 60)]
    aco_iters: usize,

    /// Output CSV path
    #[arg(long, default_value = "results/benchmark.csv")]
    out: PathBuf,

    /// Instance distribution: uniform or clustered
    #[arg(long, default_value = "uniform")]
    mode: InstanceKind,

    /// Seed of the first run; run r uses base_seed + r
    #[arg(long, default_value_t = 1000)]
    base_seed: u64,
}

fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = BenchmarkConfig::default()
        .with_sizes(parse_sizes(&cli.sizes)?)
        .with_runs(cli.runs)
        .with_sa_seconds(cli.sa_seconds)
        .with_aco_iterations(cli.aco_iters)
        .with_kind(cli.mode)
        .with_base_seed(cli.base_seed);

    println!("TSP Benchmark ({} instances)", config.kind);
    println!("============================");
    println!(
        "sizes={:?} runs={} sa_seconds={} aco_iters={}",
        config.sizes, config.runs, cli.sa_seconds, cli.aco_iters
    );
    println!();

    let rows = run_benchmark(&config)?;
    for row in &rows {
        println!("{}", format_row(row));
    }

    write_csv(&cli.out, &rows)?;
    println!();
    println!("Saved: {}", cli.out.display());
    Ok(())
}

fn main() {
    enable_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
