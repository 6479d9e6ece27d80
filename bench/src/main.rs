//! Benchmark runner: measures every suite, saves the CSVs and prints the
//! report.
//!
//! Configuration comes from `ALGOBENCH_*` environment variables, optionally
//! via a `.env` file; see [`algobench::config`].
//!
//! Usage:
//!   cargo run --release -p algobench
//!   ALGOBENCH_RUNS=3 ALGOBENCH_FIBONACCI_SIZES=20,25 cargo run --release -p algobench

use algobench::config::BenchConfig;
use algobench::report::print_report;
use algobench::suites::{run_all, save_all};
use anyhow::{Context, Result};
use std::fs;
use std::process;

fn run() -> Result<()> {
    let config = BenchConfig::from_env()?;

    fs::create_dir_all(&config.results_dir)
        .with_context(|| format!("failed to create {}", config.results_dir.display()))?;
    alg_core::initialize_logger(config.log_level, Some(&config.log_file()))?;

    println!("Running algorithm benchmarks...");
    println!("  Runs per size:    {}", config.runs);
    println!("  QuickSort sizes:  {:?}", config.quicksort_sizes);
    println!("  Fibonacci sizes:  {:?}", config.fibonacci_sizes);
    println!("  Matrix sizes:     {:?}", config.matrix_sizes);
    println!("  Results dir:      {}", config.results_dir.display());
    match config.seed {
        Some(seed) => log::info!("Using fixed RNG seed {seed}"),
        None => log::info!("Seeding RNG from entropy"),
    }

    let results = run_all(&config)?;
    let written = save_all(&results, &config.results_dir)?;

    print_report(&results);
    for path in &written {
        println!("Results saved to {}", path.display());
    }
    println!("\nAll benchmarks completed successfully.");

    Ok(())
}

fn main() {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("Failed to load .env: {err}");
        }
    }

    if let Err(err) = run() {
        log::error!("{err:#}");
        eprintln!("Benchmark failed: {err:#}");
        process::exit(1);
    }
}
