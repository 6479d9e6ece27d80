//! Dense matrix multiplication: a triple loop, and `ndarray` as the
//! library-backed reference point.

use anyhow::{Result, bail};
use ndarray::Array2;
use rand::Rng;
use std::ops::{Index, IndexMut};

/// Dense row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(row_count * cols);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                bail!("row {i} has {} columns, expected {cols}", row.len());
            }
            data.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_array2(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.rows, self.cols), |(i, j)| self[(i, j)])
    }

    pub fn from_array2(array: &Array2<f64>) -> Self {
        let (rows, cols) = array.dim();
        Self {
            rows,
            cols,
            data: array.iter().copied().collect(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }
}

/// Multiply with the textbook triple loop, accumulating each dot product in
/// place.
pub fn multiply_standard(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols != b.rows {
        bail!(
            "cannot multiply {}x{} by {}x{}",
            a.rows,
            a.cols,
            b.rows,
            b.cols
        );
    }

    let mut c = Matrix::zeros(a.rows, b.cols);
    for i in 0..a.rows {
        for j in 0..b.cols {
            for k in 0..a.cols {
                c[(i, j)] += a[(i, k)] * b[(k, j)];
            }
        }
    }

    Ok(c)
}

/// Multiply through `ndarray`'s `dot`.
///
/// Panics if the inner dimensions differ, as `dot` does.
pub fn multiply_ndarray(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    a.dot(b)
}

/// `n x n` matrix with entries uniform in `[0, 1)`.
pub fn random_matrix<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Matrix {
    Matrix {
        rows: n,
        cols: n,
        data: (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect(),
    }
}

/// `n x n` `ndarray` matrix with entries uniform in `[0, 1)`.
pub fn random_array2<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |_| rng.gen_range(0.0..1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TOLERANCE: f64 = 1e-9;

    fn assert_matrices_close(actual: &Matrix, expected: &Matrix) {
        assert_eq!(actual.rows(), expected.rows());
        assert_eq!(actual.cols(), expected.cols());
        for (a, e) in actual.as_slice().iter().zip(expected.as_slice()) {
            assert!((a - e).abs() <= TOLERANCE, "expected {e}, got {a}");
        }
    }

    #[test]
    fn multiplies_known_2x2() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = multiply_standard(&a, &b).unwrap();

        let expected = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn multiplies_rectangular() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]])
            .unwrap();
        let c = multiply_standard(&a, &b).unwrap();

        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 2);
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn identity_is_neutral() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = random_matrix(6, &mut rng);
        let c = multiply_standard(&a, &Matrix::identity(6)).unwrap();
        assert_matrices_close(&c, &a);
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let err = multiply_standard(&a, &b).unwrap_err();
        assert!(err.to_string().contains("2x3 by 2x3"));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn standard_matches_ndarray_reference() {
        let mut rng = StdRng::seed_from_u64(0xABCD);
        for n in [1, 2, 5, 16, 33] {
            let a = random_matrix(n, &mut rng);
            let b = random_matrix(n, &mut rng);

            let standard = multiply_standard(&a, &b).unwrap();
            let reference = multiply_ndarray(&a.to_array2(), &b.to_array2());

            assert_matrices_close(&standard, &Matrix::from_array2(&reference));
        }
    }

    #[test]
    fn array2_round_trip_preserves_layout() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let array = a.to_array2();

        assert_eq!(array[[0, 2]], 3.0);
        assert_eq!(array[[1, 0]], 4.0);
        assert_eq!(Matrix::from_array2(&array), a);
    }

    #[test]
    fn random_entries_are_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        let m = random_matrix(20, &mut rng);
        assert!(m.as_slice().iter().all(|v| (0.0..1.0).contains(v)));

        let arr = random_array2(20, &mut rng);
        assert_eq!(arr.dim(), (20, 20));
        assert!(arr.iter().all(|v| (0.0..1.0).contains(v)));
    }
}
