//! Report module: prints a human-readable summary of every suite.

use crate::suites::{Measurement, SuiteResult};
use chrono::Local;

/// Print a formatted report of all suite results.
pub fn print_report(results: &[SuiteResult]) {
    println!("\n{}", "=".repeat(80));
    println!("  Algorithm Benchmark Report");
    println!("  Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(80));

    for result in results {
        println!("\n  {} -> {}", result.name, result.file_name);
        println!("  {}", "-".repeat(87));
        println!("  {}", table_header());

        for m in &result.measurements {
            println!("  {}", format_row(m));
        }
    }

    // Growth between consecutive sizes makes the complexity class visible.
    println!("\n  Growth Summary:");
    println!("  {:36} {:>14} {:>14}", "Variant", "Sizes", "Time ratio");
    println!("  {}", "-".repeat(66));
    for result in results {
        for pair in result.measurements.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let ratio = growth_ratio(prev.stats.mean, next.stats.mean);
            println!(
                "  {:36} {:>14} {:>14}",
                result.name,
                format!("{} -> {}", prev.input_size, next.input_size),
                ratio.map_or_else(|| "n/a".to_string(), |r| format!("{r:.1}x")),
            );
        }
    }

    println!();
}

fn table_header() -> String {
    format!(
        "{:>10} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Size", "Runs", "Mean (s)", "Min (s)", "Max (s)", "Std (s)", "p95 (s)"
    )
}

fn format_row(m: &Measurement) -> String {
    format!(
        "{:>10} {:>6} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
        m.input_size,
        m.stats.len(),
        m.stats.mean,
        m.stats.min,
        m.stats.max,
        m.stats.std,
        m.stats.percentile(95.0),
    )
}

fn growth_ratio(prev: f64, next: f64) -> Option<f64> {
    (prev > 0.0).then(|| next / prev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alg_core::stats::SampleStats;

    #[test]
    fn growth_ratio_guards_against_zero() {
        assert_eq!(growth_ratio(0.0, 1.0), None);
        assert_eq!(growth_ratio(0.5, 2.0), Some(4.0));
    }

    #[test]
    fn row_lists_every_statistic_under_its_header() {
        let m = Measurement {
            input_size: 20,
            stats: SampleStats::from_secs(vec![0.1, 0.3]),
        };

        let header: Vec<String> = table_header()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        assert_eq!(
            header,
            vec!["Size", "Runs", "Mean", "(s)", "Min", "(s)", "Max", "(s)", "Std", "(s)", "p95", "(s)"]
        );

        let columns: Vec<String> = format_row(&m)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        assert_eq!(
            columns,
            vec!["20", "2", "0.200000", "0.100000", "0.300000", "0.100000", "0.300000"]
        );
    }

    #[test]
    fn row_and_header_share_column_widths() {
        let m = Measurement {
            input_size: 1_000_000,
            stats: SampleStats::from_secs(vec![1.5]),
        };
        assert_eq!(format_row(&m).len(), table_header().len());
    }

    #[test]
    fn print_report_handles_empty_and_populated_results() {
        print_report(&[]);

        let mut result = SuiteResult::new("Fibonacci", "rust_fibonacci_results.csv");
        result.add(10, SampleStats::from_secs(vec![0.001, 0.002]));
        result.add(20, SampleStats::from_secs(vec![0.1, 0.12]));
        assert_eq!(result.measurements.len(), 2);
        print_report(&[result]);
    }
}
