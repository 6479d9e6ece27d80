//! Algorithm Benchmark Harness
//!
//! Times three textbook algorithms across growing input sizes, averages the
//! repeated samples, and writes one CSV per algorithm variant:
//! - **QuickSort**: list-partitioning and in-place Lomuto variants
//! - **Fibonacci**: naive recursion
//! - **Matrix multiplication**: triple loop, with `ndarray` as reference
//!
//! The `plot_results` utility in `bench/utils` turns the CSVs into plots.
//!
//! Run the harness: `cargo run --release -p algobench`
//! Run benchmarks: `cargo bench`
//! Run tests: `cargo test`

pub mod config;
pub mod report;
pub mod results;
pub mod suites;
pub mod timing;
