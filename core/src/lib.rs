//! Textbook algorithms measured by the `algobench` harness, plus the small
//! amount of shared plumbing (sample statistics, logger setup) the harness
//! binaries need.
//!
//! Nothing in here is tuned: the point is to time the plain transcription of
//! each algorithm.

use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use std::path::Path;

pub mod matrix;
pub mod sequence;
pub mod sorting;
pub mod stats;

const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

/// Install the global logger.
///
/// Console output goes to stderr and is filtered at `log_level`. When
/// `file_path` is given, a file appender is added that also records debug
/// output (the per-run timings), regardless of the console level.
pub fn initialize_logger(log_level: LevelFilter, file_path: Option<&Path>) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");
    let mut root_level = log_level;

    if let Some(path) = file_path {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
            .build(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        config_builder =
            config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
        root_level = root_level.max(LevelFilter::Debug);
    }

    let config = config_builder
        .build(root.build(root_level))
        .map_err(|err| anyhow!("invalid logger configuration: {err}"))?;

    log4rs::init_config(config).context("logger already initialised")?;

    Ok(())
}
