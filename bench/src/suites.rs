//! Benchmark suites: one per algorithm, each producing a [`SuiteResult`] per
//! variant it measures.

use crate::config::BenchConfig;
use crate::results::{
    self, ResultRow, FIBONACCI_FILE, MATRIX_NDARRAY_FILE, MATRIX_STANDARD_FILE, QUICKSORT_FILE,
    QUICKSORT_INPLACE_FILE,
};
use crate::timing::time_runs;
use alg_core::matrix::{multiply_ndarray, multiply_standard, random_array2, random_matrix};
use alg_core::sequence::fibonacci;
use alg_core::sorting::{
    quicksort, quicksort_in_place, random_array, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE,
};
use alg_core::stats::SampleStats;
use anyhow::Result;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Timing summary for one input size.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub input_size: u64,
    pub stats: SampleStats,
}

/// All measurements of one algorithm variant, bound to the file it is saved
/// to.
#[derive(Debug, Clone)]
pub struct SuiteResult {
    pub name: String,
    pub file_name: &'static str,
    pub measurements: Vec<Measurement>,
}

impl SuiteResult {
    pub fn new(name: &str, file_name: &'static str) -> Self {
        Self {
            name: name.to_string(),
            file_name,
            measurements: Vec::new(),
        }
    }

    pub fn add(&mut self, input_size: u64, stats: SampleStats) {
        log::info!(
            "{} with input size {}: Average {:.6} seconds over {} runs",
            self.name,
            input_size,
            stats.mean,
            stats.len()
        );
        self.measurements.push(Measurement { input_size, stats });
    }

    /// One CSV row per measurement, carrying the mean time.
    pub fn rows(&self) -> Vec<ResultRow> {
        self.measurements
            .iter()
            .map(|m| ResultRow::new(m.input_size, m.stats.mean))
            .collect()
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name);
        results::write_csv(&path, &self.rows())?;
        Ok(path)
    }
}

/// Both quicksort variants over the same random array per size.
///
/// The in-place variant sorts a fresh copy each run; the copy is part of the
/// timed region.
pub fn run_quicksort_benchmark<R: Rng + ?Sized>(
    sizes: &[usize],
    runs: usize,
    rng: &mut R,
) -> Vec<SuiteResult> {
    println!("\nRunning QuickSort Benchmark...");
    let mut list = SuiteResult::new("QuickSort", QUICKSORT_FILE);
    let mut in_place = SuiteResult::new("QuickSort (in-place)", QUICKSORT_INPLACE_FILE);

    for &size in sizes {
        println!("Testing array size {size}...");
        let arr = random_array(size, DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE, rng);

        let stats = time_runs("quicksort", runs, || (), |()| quicksort(&arr));
        list.add(size as u64, stats);

        let stats = time_runs(
            "quicksort in-place",
            runs,
            || (),
            |()| {
                let mut copy = arr.clone();
                quicksort_in_place(&mut copy);
                copy
            },
        );
        in_place.add(size as u64, stats);
    }

    vec![list, in_place]
}

pub fn run_fibonacci_benchmark(sizes: &[u32], runs: usize) -> SuiteResult {
    println!("\nRunning Fibonacci Benchmark...");
    let mut result = SuiteResult::new("Fibonacci", FIBONACCI_FILE);

    for &n in sizes {
        println!("Testing Fibonacci({n})...");
        let stats = time_runs("fibonacci", runs, || n, fibonacci);
        result.add(u64::from(n), stats);
    }

    result
}

/// Triple-loop and `ndarray` multiplication. Every run multiplies two freshly
/// generated `n x n` matrices; generation is not timed.
pub fn run_matrix_multiplication_benchmark<R: Rng + ?Sized>(
    sizes: &[usize],
    runs: usize,
    rng: &mut R,
) -> Vec<SuiteResult> {
    println!("\nRunning Matrix Multiplication Benchmark...");
    let mut standard = SuiteResult::new("Standard matrix multiplication", MATRIX_STANDARD_FILE);
    let mut library = SuiteResult::new("ndarray matrix multiplication", MATRIX_NDARRAY_FILE);

    for &n in sizes {
        println!("Testing Matrix Size {n}x{n}...");

        // Equal square operands, so the dimension check always passes.
        let stats = time_runs(
            "matrix standard",
            runs,
            || (random_matrix(n, rng), random_matrix(n, rng)),
            |(a, b)| multiply_standard(&a, &b).ok(),
        );
        standard.add(n as u64, stats);

        let stats = time_runs(
            "matrix ndarray",
            runs,
            || (random_array2(n, rng), random_array2(n, rng)),
            |(a, b)| multiply_ndarray(&a, &b),
        );
        library.add(n as u64, stats);
    }

    vec![standard, library]
}

/// Run every suite with the sizes and RNG from `config`. The config is
/// validated first.
pub fn run_all(config: &BenchConfig) -> Result<Vec<SuiteResult>> {
    config.validate()?;

    let mut rng = config.rng();
    let mut results = run_quicksort_benchmark(&config.quicksort_sizes, config.runs, &mut rng);
    results.push(run_fibonacci_benchmark(
        &config.fibonacci_sizes,
        config.runs,
    ));
    results.extend(run_matrix_multiplication_benchmark(
        &config.matrix_sizes,
        config.runs,
        &mut rng,
    ));
    Ok(results)
}

/// Save every suite into `dir`, returning the written paths.
pub fn save_all(results: &[SuiteResult], dir: &Path) -> Result<Vec<PathBuf>> {
    results.iter().map(|result| result.save(dir)).collect()
}
