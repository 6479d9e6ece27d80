//! Results files: one CSV per algorithm variant, `(input size, mean seconds)`
//! per row under a one-line header.

use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub const CSV_HEADER: &str = "Input Size,Execution Time (seconds)";

// Series produced by this harness.
pub const QUICKSORT_FILE: &str = "rust_quicksort_results.csv";
pub const QUICKSORT_INPLACE_FILE: &str = "rust_quicksort_inplace_results.csv";
pub const FIBONACCI_FILE: &str = "rust_fibonacci_results.csv";
pub const MATRIX_STANDARD_FILE: &str = "rust_matrix_mult_standard_results.csv";
pub const MATRIX_NDARRAY_FILE: &str = "rust_matrix_mult_ndarray_results.csv";

// Series other implementations of the same benchmarks drop into the results
// directory. The plotter overlays them when present.
pub const PYTHON_QUICKSORT_FILE: &str = "python_quicksort_results.csv";
pub const PYTHON_FIBONACCI_FILE: &str = "python_fibonacci_results.csv";
pub const PYTHON_MATRIX_STANDARD_FILE: &str = "python_matrix_mult_standard_results.csv";
pub const PYTHON_MATRIX_NUMPY_FILE: &str = "python_matrix_mult_numpy_results.csv";
pub const CPP_QUICKSORT_FILE: &str = "cpp_quicksort_results.csv";
pub const CPP_FIBONACCI_FILE: &str = "cpp_fibonacci_results.csv";
pub const CPP_MATRIX_FILE: &str = "cpp_matrix_mult_results.csv";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub input_size: u64,
    pub seconds: f64,
}

impl ResultRow {
    pub fn new(input_size: u64, seconds: f64) -> Self {
        Self {
            input_size,
            seconds,
        }
    }
}

/// Rows loaded from one results file, labelled for a plot legend.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub rows: Vec<ResultRow>,
}

impl Series {
    pub fn new(label: impl Into<String>, rows: Vec<ResultRow>) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }

    pub fn empty(label: impl Into<String>) -> Self {
        Self::new(label, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(size, seconds)` pairs as `f64`, ready for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.input_size as f64, row.seconds))
            .collect()
    }

    pub fn max_input_size(&self) -> Option<u64> {
        self.rows.iter().map(|row| row.input_size).max()
    }
}

/// Write `rows` to `path`, creating the parent directory when needed.
///
/// Times are written with the shortest representation that parses back to
/// the same `f64`.
pub fn write_csv(path: &Path, rows: &[ResultRow]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, rows).with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    log::info!("Results saved to {}", path.display());
    Ok(())
}

fn write_rows<W: Write>(writer: &mut W, rows: &[ResultRow]) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(writer, "{},{}", row.input_size, row.seconds)?;
    }
    Ok(())
}

/// Read a results file. The first line is taken as the header and skipped;
/// blank lines are ignored and any other malformed line is an error.
pub fn read_csv(path: &Path) -> Result<Vec<ResultRow>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_csv(BufReader::new(file)).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_csv<R: BufRead>(reader: R) -> Result<Vec<ResultRow>> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(parse_row(line).with_context(|| format!("line {}: {line:?}", idx + 1))?);
    }

    Ok(rows)
}

fn parse_row(line: &str) -> Result<ResultRow> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [size, seconds] = fields.as_slice() else {
        bail!("expected 2 fields, found {}", fields.len());
    };

    let input_size = size
        .parse::<u64>()
        .with_context(|| format!("invalid input size {size:?}"))?;
    let seconds = seconds
        .parse::<f64>()
        .with_context(|| format!("invalid execution time {seconds:?}"))?;

    Ok(ResultRow::new(input_size, seconds))
}

/// Load `dir/file_name` as a labelled series.
///
/// A missing file is logged and produces an empty series; any other failure
/// (unreadable file, malformed row) is returned.
pub fn load_series(dir: &Path, file_name: &str, label: &str) -> Result<Series> {
    let path = dir.join(file_name);
    match File::open(&path) {
        Ok(file) => {
            let rows = parse_csv(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))?;
            Ok(Series::new(label, rows))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::warn!("File {} not found.", path.display());
            Ok(Series::empty(label))
        }
        Err(err) => Err(err).with_context(|| format!("failed to open {}", path.display())),
    }
}
