//! Which results files belong to which plot.

use algobench::results::{
    load_series, Series, CPP_FIBONACCI_FILE, CPP_MATRIX_FILE, CPP_QUICKSORT_FILE, FIBONACCI_FILE,
    MATRIX_NDARRAY_FILE, MATRIX_STANDARD_FILE, PYTHON_FIBONACCI_FILE, PYTHON_MATRIX_NUMPY_FILE,
    PYTHON_MATRIX_STANDARD_FILE, PYTHON_QUICKSORT_FILE, QUICKSORT_FILE, QUICKSORT_INPLACE_FILE,
};
use anyhow::Result;
use std::path::Path;

use super::charts::Axes;

/// Matrix plots switch to log-log only once sizes pass this.
const MATRIX_LOG_THRESHOLD: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Algorithm {
    QuickSort,
    Fibonacci,
    MatrixMultiplication,
}

impl Algorithm {
    pub(crate) const ALL: [Algorithm; 3] = [
        Algorithm::QuickSort,
        Algorithm::Fibonacci,
        Algorithm::MatrixMultiplication,
    ];

    /// `(file, legend label)` pairs. The first entry is the primary series:
    /// without it the algorithm is not plotted at all.
    fn sources(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Algorithm::QuickSort => &[
                (QUICKSORT_FILE, "Rust"),
                (QUICKSORT_INPLACE_FILE, "Rust (in-place)"),
                (PYTHON_QUICKSORT_FILE, "Python"),
                (CPP_QUICKSORT_FILE, "C++"),
            ],
            Algorithm::Fibonacci => &[
                (FIBONACCI_FILE, "Rust"),
                (PYTHON_FIBONACCI_FILE, "Python"),
                (CPP_FIBONACCI_FILE, "C++"),
            ],
            Algorithm::MatrixMultiplication => &[
                (MATRIX_STANDARD_FILE, "Rust (Standard)"),
                (MATRIX_NDARRAY_FILE, "Rust (ndarray)"),
                (PYTHON_MATRIX_STANDARD_FILE, "Python (Standard)"),
                (PYTHON_MATRIX_NUMPY_FILE, "Python (NumPy)"),
                (CPP_MATRIX_FILE, "C++"),
            ],
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Algorithm::QuickSort => "QuickSort",
            Algorithm::Fibonacci => "Fibonacci",
            Algorithm::MatrixMultiplication => "Matrix Multiplication",
        }
    }

    pub(crate) fn output_file(self) -> &'static str {
        match self {
            Algorithm::QuickSort => "quicksort_comparison.png",
            Algorithm::Fibonacci => "fibonacci_comparison.png",
            Algorithm::MatrixMultiplication => "matrix_multiplication_comparison.png",
        }
    }

    /// X axis label on the standalone comparison plot.
    pub(crate) fn x_desc(self) -> &'static str {
        match self {
            Algorithm::QuickSort => "Array Size",
            Algorithm::Fibonacci => "n",
            Algorithm::MatrixMultiplication => "Matrix Size (n x n)",
        }
    }

    /// X axis label on the summary panel.
    pub(crate) fn panel_x_desc(self) -> &'static str {
        match self {
            Algorithm::MatrixMultiplication => "Matrix Size",
            other => other.x_desc(),
        }
    }
}

/// Every known series of one algorithm, primary first.
#[derive(Debug, Clone)]
pub(crate) struct AlgorithmSeries {
    pub(crate) algorithm: Algorithm,
    pub(crate) series: Vec<Series>,
}

impl AlgorithmSeries {
    /// Load all series from `dir`. Missing files become empty series.
    pub(crate) fn load(dir: &Path, algorithm: Algorithm) -> Result<Self> {
        let series = algorithm
            .sources()
            .iter()
            .map(|(file, label)| load_series(dir, file, label))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { algorithm, series })
    }

    pub(crate) fn has_data(&self) -> bool {
        self.series.first().is_some_and(|primary| !primary.is_empty())
    }

    /// Series with at least one row.
    pub(crate) fn present(&self) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(|s| !s.is_empty())
    }

    /// Axis scaling for the standalone comparison plot.
    pub(crate) fn comparison_axes(&self, use_log_scale: bool) -> Axes {
        match self.algorithm {
            Algorithm::QuickSort => Axes::log_x(use_log_scale),
            Algorithm::Fibonacci => Axes::LINEAR,
            Algorithm::MatrixMultiplication => {
                let large = self
                    .series
                    .first()
                    .and_then(Series::max_input_size)
                    .is_some_and(|max| max > MATRIX_LOG_THRESHOLD);
                Axes::log_log(use_log_scale && large)
            }
        }
    }

    /// Axis scaling for the summary panel.
    pub(crate) fn summary_axes(&self, use_log_scale: bool) -> Axes {
        match self.algorithm {
            Algorithm::QuickSort => Axes::log_x(use_log_scale),
            Algorithm::Fibonacci => Axes::LINEAR,
            Algorithm::MatrixMultiplication => Axes::log_log(use_log_scale),
        }
    }
}
