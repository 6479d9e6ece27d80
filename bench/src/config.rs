//! Run configuration.
//!
//! Defaults reproduce the sizes the harness has always used. Every field can
//! be overridden through an environment variable (a `.env` file in the working
//! directory is loaded first by the binary):
//!
//! | Variable                    | Meaning                               |
//! |-----------------------------|---------------------------------------|
//! | `ALGOBENCH_RESULTS_DIR`     | output directory for CSVs, log, plots |
//! | `ALGOBENCH_RUNS`            | timed runs per input size             |
//! | `ALGOBENCH_QUICKSORT_SIZES` | comma separated array lengths         |
//! | `ALGOBENCH_FIBONACCI_SIZES` | comma separated `n` values            |
//! | `ALGOBENCH_MATRIX_SIZES`    | comma separated matrix dimensions     |
//! | `ALGOBENCH_SEED`            | fixed RNG seed (entropy when unset)   |
//! | `ALGOBENCH_LOG_LEVEL`       | console log level (`info` default)    |

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_RUNS: usize = 5;
pub const DEFAULT_QUICKSORT_SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];
pub const DEFAULT_FIBONACCI_SIZES: [u32; 3] = [20, 30, 40];
pub const DEFAULT_MATRIX_SIZES: [usize; 3] = [100, 300, 500];

/// Name of the log file written next to the results.
pub const LOG_FILE_NAME: &str = "algobench.log";

const ENV_RESULTS_DIR: &str = "ALGOBENCH_RESULTS_DIR";
const ENV_RUNS: &str = "ALGOBENCH_RUNS";
const ENV_QUICKSORT_SIZES: &str = "ALGOBENCH_QUICKSORT_SIZES";
const ENV_FIBONACCI_SIZES: &str = "ALGOBENCH_FIBONACCI_SIZES";
const ENV_MATRIX_SIZES: &str = "ALGOBENCH_MATRIX_SIZES";
const ENV_SEED: &str = "ALGOBENCH_SEED";
const ENV_LOG_LEVEL: &str = "ALGOBENCH_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub quicksort_sizes: Vec<usize>,
    pub fibonacci_sizes: Vec<u32>,
    pub matrix_sizes: Vec<usize>,
    pub runs: usize,
    pub results_dir: PathBuf,
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            quicksort_sizes: DEFAULT_QUICKSORT_SIZES.to_vec(),
            fibonacci_sizes: DEFAULT_FIBONACCI_SIZES.to_vec(),
            matrix_sizes: DEFAULT_MATRIX_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl BenchConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(ENV_RESULTS_DIR) {
            config.results_dir = PathBuf::from(dir.trim());
        }
        if let Some(raw) = get(ENV_RUNS) {
            config.runs = parse_value(ENV_RUNS, &raw)?;
        }
        if let Some(raw) = get(ENV_QUICKSORT_SIZES) {
            config.quicksort_sizes = parse_list(ENV_QUICKSORT_SIZES, &raw)?;
        }
        if let Some(raw) = get(ENV_FIBONACCI_SIZES) {
            config.fibonacci_sizes = parse_list(ENV_FIBONACCI_SIZES, &raw)?;
        }
        if let Some(raw) = get(ENV_MATRIX_SIZES) {
            config.matrix_sizes = parse_list(ENV_MATRIX_SIZES, &raw)?;
        }
        if let Some(raw) = get(ENV_SEED) {
            config.seed = Some(parse_value(ENV_SEED, &raw)?);
        }
        if let Some(raw) = get(ENV_LOG_LEVEL) {
            config.log_level = parse_value(ENV_LOG_LEVEL, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            bail!("{ENV_RUNS} must be at least 1");
        }
        if self.matrix_sizes.contains(&0) {
            bail!("{ENV_MATRIX_SIZES} entries must be at least 1");
        }
        Ok(())
    }

    /// RNG for input generation: seeded when a seed is configured, otherwise
    /// from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.results_dir.join(LOG_FILE_NAME)
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|err| anyhow::anyhow!("{err}"))
        .with_context(|| format!("invalid value {raw:?} for {key}"))
}

fn parse_list<T>(key: &str, raw: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse_value(key, item))
        .collect()
}
