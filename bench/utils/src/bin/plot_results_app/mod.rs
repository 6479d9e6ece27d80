pub(crate) mod catalog;
pub(crate) mod charts;

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

use catalog::{Algorithm, AlgorithmSeries};

pub(crate) const SUMMARY_FILE: &str = "all_algorithms_comparison.png";

/// Render every plot whose data exists in `results_dir`, into the same
/// directory. Returns the written image paths.
pub(crate) fn plot_all(results_dir: &Path, use_log_scale: bool) -> Result<Vec<PathBuf>> {
    let loaded = Algorithm::ALL
        .iter()
        .map(|&algorithm| AlgorithmSeries::load(results_dir, algorithm))
        .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::new();

    for data in &loaded {
        if !data.has_data() {
            println!(
                "Not enough data to plot comparison for {}",
                data.algorithm.name()
            );
            continue;
        }

        let path = results_dir.join(data.algorithm.output_file());
        charts::render_comparison(&path, data, data.comparison_axes(use_log_scale))
            .map_err(|err| anyhow!("failed to render {}: {err}", path.display()))?;
        log::info!("Plot saved to {}", path.display());
        written.push(path);
    }

    if loaded.iter().any(AlgorithmSeries::has_data) {
        let panels: Vec<(&AlgorithmSeries, charts::Axes)> = loaded
            .iter()
            .map(|data| (data, data.summary_axes(use_log_scale)))
            .collect();
        let path = results_dir.join(SUMMARY_FILE);
        charts::render_summary(&path, &panels)
            .map_err(|err| anyhow!("failed to render {}: {err}", path.display()))?;
        log::info!("Plot saved to {}", path.display());
        written.push(path);
    } else {
        log::warn!(
            "No benchmark results found in {}; nothing to plot",
            results_dir.display()
        );
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::{plot_all, SUMMARY_FILE};
    use algobench::results::{
        write_csv, ResultRow, FIBONACCI_FILE, MATRIX_STANDARD_FILE, QUICKSORT_FILE,
    };
    use std::path::Path;

    fn write(dir: &Path, file: &str, rows: &[(u64, f64)]) {
        let rows: Vec<ResultRow> = rows.iter().map(|&(n, t)| ResultRow::new(n, t)).collect();
        write_csv(&dir.join(file), &rows).expect("write");
    }

    fn assert_png(path: &Path) {
        let bytes = std::fs::read(path).expect("read png");
        assert!(bytes.starts_with(b"\x89PNG"), "{} is not a PNG", path.display());
    }

    #[test]
    fn empty_results_directory_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let written = plot_all(dir.path(), true).expect("plot");
        assert!(written.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn malformed_results_abort_plotting() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(algobench::results::QUICKSORT_FILE),
            "Input Size,Execution Time (seconds)\n10;0.5\n",
        )
        .unwrap();

        assert!(plot_all(dir.path(), true).is_err());
    }

    #[test]
    fn renders_every_comparison_and_the_summary() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), QUICKSORT_FILE, &[(1000, 0.0005), (100_000, 0.08)]);
        write(dir.path(), FIBONACCI_FILE, &[(20, 0.002), (30, 0.25)]);
        write(dir.path(), MATRIX_STANDARD_FILE, &[(100, 0.01), (300, 0.3)]);

        let written = plot_all(dir.path(), true).expect("plot");

        let expected: Vec<_> = [
            "quicksort_comparison.png",
            "fibonacci_comparison.png",
            "matrix_multiplication_comparison.png",
            SUMMARY_FILE,
        ]
        .iter()
        .map(|file| dir.path().join(file))
        .collect();
        assert_eq!(written, expected);
        for path in &expected {
            assert_png(path);
        }
    }

    #[test]
    fn renders_only_algorithms_with_data() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), FIBONACCI_FILE, &[(20, 0.002), (30, 0.25)]);

        let written = plot_all(dir.path(), false).expect("plot");

        assert_eq!(
            written,
            vec![
                dir.path().join("fibonacci_comparison.png"),
                dir.path().join(SUMMARY_FILE),
            ]
        );
        assert!(!dir.path().join("quicksort_comparison.png").exists());
        assert!(!dir.path().join("matrix_multiplication_comparison.png").exists());
        for path in &written {
            assert_png(path);
        }
    }
}
