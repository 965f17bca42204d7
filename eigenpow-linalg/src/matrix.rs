#![allow(clippy::needless_range_loop)]
//! Dense row-major matrix.
//!
//! Every arithmetic method returns a freshly allocated matrix; the one
//! exception is `rank1_update`, which accumulates into `self`. Shape
//! checks happen before any allocation, so a failed operation leaves
//! its operands untouched.
//!
//! A matrix always has at least one row and one column. The infallible
//! constructors panic on a zero extent; `from_rows` reports it as
//! `EmptyMatrix`.

use std::fmt;
use std::ops::{Index, IndexMut};

use faer::Mat;

use crate::buffer::DenseBuffer;
use crate::error::LinalgError;
use crate::vector::{ColVector, RowVector};

/// A dense `rows x cols` matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    buf: DenseBuffer,
}

fn assert_extent(nrows: usize, ncols: usize) {
    assert!(
        nrows > 0 && ncols > 0,
        "matrix must have at least one row and one column, got {}x{}",
        nrows,
        ncols
    );
}

impl Matrix {
    /// Create a new matrix filled with zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        assert_extent(nrows, ncols);
        Self {
            buf: DenseBuffer::zeros(nrows, ncols),
        }
    }

    /// Create a matrix from a row-major slice.
    pub fn from_row_major(nrows: usize, ncols: usize, data: &[f64]) -> Self {
        assert_extent(nrows, ncols);
        assert_eq!(data.len(), nrows * ncols);
        Self {
            buf: DenseBuffer::from_vec(nrows, ncols, data.to_vec()),
        }
    }

    /// Copy a caller-supplied 2-D source, one `Vec` per row.
    ///
    /// Fails with `EmptyMatrix` if there are no rows or the first row is
    /// empty, and with `RaggedRows` if the rows differ in length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LinalgError> {
        let ncols = rows.first().map_or(0, Vec::len);
        if ncols == 0 {
            return Err(LinalgError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != ncols {
                return Err(LinalgError::RaggedRows {
                    row,
                    expected: ncols,
                    got: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self {
            buf: DenseBuffer::from_vec(rows.len(), ncols, data),
        })
    }

    /// Build a matrix by evaluating `f(i, j)` for every element.
    pub fn from_fn<F>(nrows: usize, ncols: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        assert_extent(nrows, ncols);
        Self {
            buf: DenseBuffer::from_fn(nrows, ncols, f),
        }
    }

    /// Create an identity matrix of size n x n.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Create a diagonal matrix from a slice.
    pub fn from_diag(diag: &[f64]) -> Self {
        let n = diag.len();
        Self::from_fn(n, n, |i, j| if i == j { diag[i] } else { 0.0 })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.buf.rows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.buf.cols()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Get element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.buf.get(row, col)
    }

    /// Set element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.buf.set(row, col, value);
    }

    /// Row-major view of all elements.
    pub fn as_slice(&self) -> &[f64] {
        self.buf.as_slice()
    }

    /// Extract row `i`.
    pub fn row(&self, i: usize) -> RowVector {
        let n = self.ncols();
        RowVector::from_slice(&self.as_slice()[i * n..(i + 1) * n])
    }

    /// Extract column `j`.
    pub fn col(&self, j: usize) -> ColVector {
        let mut v = ColVector::zeros(self.nrows());
        for i in 0..self.nrows() {
            v.set(i, self.get(i, j));
        }
        v
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<(), LinalgError> {
        LinalgError::check_dim(self.nrows(), other.nrows())?;
        LinalgError::check_dim(self.ncols(), other.ncols())
    }

    /// Element-wise addition: self + other.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.check_same_shape(other)?;
        Ok(Matrix {
            buf: self.buf.zip_map(&other.buf, |a, b| a + b),
        })
    }

    /// Element-wise subtraction: self - other.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.check_same_shape(other)?;
        Ok(Matrix {
            buf: self.buf.zip_map(&other.buf, |a, b| a - b),
        })
    }

    /// Negation.
    pub fn neg(&self) -> Matrix {
        Matrix {
            buf: self.buf.map(|x| -x),
        }
    }

    /// Scalar multiplication.
    pub fn scale(&self, s: f64) -> Matrix {
        Matrix {
            buf: self.buf.map(|x| s * x),
        }
    }

    /// Scalar division. Fails only for an exact zero divisor.
    pub fn div(&self, s: f64) -> Result<Matrix, LinalgError> {
        if s == 0.0 {
            return Err(LinalgError::DivideByZero);
        }
        Ok(Matrix {
            buf: self.buf.map(|x| x / s),
        })
    }

    /// Matrix-matrix product: self * other.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        LinalgError::check_dim(self.ncols(), other.nrows())?;
        let mut result = Matrix::zeros(self.nrows(), other.ncols());
        for i in 0..self.nrows() {
            for j in 0..other.ncols() {
                let mut sum = 0.0;
                for k in 0..self.ncols() {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result.set(i, j, sum);
            }
        }
        Ok(result)
    }

    /// Matrix-vector product: self * v.
    pub fn mat_vec(&self, v: &ColVector) -> Result<ColVector, LinalgError> {
        LinalgError::check_dim(self.ncols(), v.len())?;
        let mut result = ColVector::zeros(self.nrows());
        for i in 0..self.nrows() {
            let mut sum = 0.0;
            for j in 0..self.ncols() {
                sum += self.get(i, j) * v.get(j);
            }
            result.set(i, sum);
        }
        Ok(result)
    }

    /// Transpose.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols(), self.nrows(), |i, j| self.get(j, i))
    }

    /// self += k * cv * rv, without allocating the outer product.
    ///
    /// Takes `&mut self`, so the accumulation cannot alias another live
    /// matrix.
    pub fn rank1_update(
        &mut self,
        k: f64,
        cv: &ColVector,
        rv: &RowVector,
    ) -> Result<(), LinalgError> {
        LinalgError::check_dim(self.nrows(), cv.len())?;
        LinalgError::check_dim(self.ncols(), rv.len())?;
        for i in 0..self.nrows() {
            let kc = k * cv.get(i);
            for j in 0..self.ncols() {
                let updated = self.get(i, j) + kc * rv.get(j);
                self.set(i, j, updated);
            }
        }
        Ok(())
    }

    /// Frobenius norm.
    pub fn frobenius_norm(&self) -> f64 {
        self.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Copy into a faer matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self.get(i, j))
    }

    /// Copy out of a faer matrix. Panics if `mat` has a zero extent.
    pub fn from_faer(mat: &Mat<f64>) -> Self {
        Self::from_fn(mat.nrows(), mat.ncols(), |i, j| mat.read(i, j))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.buf.as_slice()[self.buf.offset(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let k = self.buf.offset(i, j);
        &mut self.buf.as_mut_slice()[k]
    }
}

/// Rows of space-terminated values, one row per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                write!(f, "{} ", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
