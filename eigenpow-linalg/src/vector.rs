#![allow(clippy::needless_range_loop)]
//! Column and row vectors.
//!
//! Both orientations share one generic type, `Vector<O>`, tagged by a
//! zero-sized marker. The tag decides which products are legal:
//! `Matrix * ColVector`, `RowVector * Matrix`, `RowVector * ColVector`
//! (a scalar) and `ColVector * RowVector` (an outer product).

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::buffer::DenseBuffer;
use crate::error::LinalgError;
use crate::matrix::Matrix;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Column {}
    impl Sealed for super::Row {}
}

/// Vector orientation marker.
pub trait Orientation: sealed::Sealed + fmt::Debug + Clone + Copy + PartialEq {
    /// Orientation produced by `transpose`.
    type Flipped: Orientation;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row;

impl Orientation for Column {
    type Flipped = Row;
}

impl Orientation for Row {
    type Flipped = Column;
}

/// A dense vector of `f64` with a fixed orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<O: Orientation> {
    buf: DenseBuffer,
    _orientation: PhantomData<O>,
}

pub type ColVector = Vector<Column>;
pub type RowVector = Vector<Row>;

impl<O: Orientation> Vector<O> {
    fn from_buffer(buf: DenseBuffer) -> Self {
        Self {
            buf,
            _orientation: PhantomData,
        }
    }

    /// Zero vector of length `size`.
    pub fn zeros(size: usize) -> Self {
        Self::from_buffer(DenseBuffer::zeros(1, size))
    }

    /// Vector filled with a constant value.
    pub fn full(size: usize, value: f64) -> Self {
        Self::from_vec(vec![value; size])
    }

    /// Copy elements from a slice.
    pub fn from_slice(data: &[f64]) -> Self {
        Self::from_vec(data.to_vec())
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::from_buffer(DenseBuffer::from_vec(1, data.len(), data))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn get(&self, i: usize) -> f64 {
        self.buf.as_slice()[i]
    }

    pub fn set(&mut self, i: usize, value: f64) {
        self.buf.as_mut_slice()[i] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        self.buf.as_slice()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.buf.as_slice().to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.buf.as_slice().iter()
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        LinalgError::check_dim(self.len(), other.len())?;
        Ok(Self::from_buffer(self.buf.zip_map(&other.buf, |a, b| a + b)))
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Self) -> Result<Self, LinalgError> {
        LinalgError::check_dim(self.len(), other.len())?;
        Ok(Self::from_buffer(self.buf.zip_map(&other.buf, |a, b| a - b)))
    }

    /// Sign-flipped copy.
    pub fn neg(&self) -> Self {
        Self::from_buffer(self.buf.map(|x| -x))
    }

    /// Scalar multiplication.
    pub fn scale(&self, k: f64) -> Self {
        Self::from_buffer(self.buf.map(|x| k * x))
    }

    /// Scalar division. Only an exact zero divisor is rejected.
    pub fn div(&self, k: f64) -> Result<Self, LinalgError> {
        if k == 0.0 {
            return Err(LinalgError::DivideByZero);
        }
        Ok(Self::from_buffer(self.buf.map(|x| x / k)))
    }

    /// Inner product with a vector of the same orientation.
    pub fn dot(&self, other: &Self) -> Result<f64, LinalgError> {
        LinalgError::check_dim(self.len(), other.len())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// y = y + k*x, in place.
    ///
    /// Takes `&mut self`, so no other live value can observe the update.
    pub fn axpy(&mut self, k: f64, x: &Self) -> Result<(), LinalgError> {
        LinalgError::check_dim(self.len(), x.len())?;
        let y = self.buf.as_mut_slice();
        for i in 0..y.len() {
            y[i] += k * x.get(i);
        }
        Ok(())
    }

    /// Sum of absolute values.
    pub fn norm1(&self) -> f64 {
        self.iter().map(|x| x.abs()).sum()
    }

    /// Euclidean norm, scaled by the largest magnitude so that squaring
    /// does not overflow or underflow. NaN if any element is NaN.
    pub fn norm2(&self) -> f64 {
        let scale = self.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        if scale == 0.0 || scale.is_infinite() {
            return if self.iter().any(|x| x.is_nan()) {
                f64::NAN
            } else {
                scale
            };
        }
        let sum: f64 = self.iter().map(|x| (x / scale) * (x / scale)).sum();
        scale * sum.sqrt()
    }

    /// Largest absolute value.
    pub fn norm_max(&self) -> Result<f64, LinalgError> {
        let first = self.iter().next().ok_or(LinalgError::EmptyVector)?;
        Ok(self.iter().fold(first.abs(), |m, x| m.max(x.abs())))
    }

    /// Same elements, opposite orientation.
    pub fn transpose(&self) -> Vector<O::Flipped> {
        Vector::from_buffer(self.buf.clone())
    }
}

impl ColVector {
    /// Outer product `self * rv`, shape `(self.len(), rv.len())`.
    ///
    /// Any pair of lengths is legal, but an empty operand has no matrix
    /// and fails with `EmptyVector`.
    pub fn outer(&self, rv: &RowVector) -> Result<Matrix, LinalgError> {
        if self.is_empty() || rv.is_empty() {
            return Err(LinalgError::EmptyVector);
        }
        Ok(Matrix::from_fn(self.len(), rv.len(), |i, j| {
            self.get(i) * rv.get(j)
        }))
    }
}

impl RowVector {
    /// Scalar product `self * cv`.
    pub fn inner(&self, cv: &ColVector) -> Result<f64, LinalgError> {
        LinalgError::check_dim(self.len(), cv.len())?;
        let mut sum = 0.0;
        for i in 0..self.len() {
            sum += self.get(i) * cv.get(i);
        }
        Ok(sum)
    }

    /// Left multiplication `self * m`; `result[i] = sum_j self[j] * m[j, i]`.
    pub fn vec_mat(&self, m: &Matrix) -> Result<RowVector, LinalgError> {
        LinalgError::check_dim(m.nrows(), self.len())?;
        let mut result = RowVector::zeros(m.ncols());
        for i in 0..m.ncols() {
            let mut sum = 0.0;
            for j in 0..self.len() {
                sum += self.get(j) * m.get(j, i);
            }
            result.set(i, sum);
        }
        Ok(result)
    }
}

impl<O: Orientation> Index<usize> for Vector<O> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.buf.as_slice()[i]
    }
}

impl<O: Orientation> IndexMut<usize> for Vector<O> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.buf.as_mut_slice()[i]
    }
}

impl<O: Orientation> From<Vec<f64>> for Vector<O> {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

/// One element per line.
impl fmt::Display for ColVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in self.iter() {
            writeln!(f, "{}", x)?;
        }
        Ok(())
    }
}

/// Space-separated on a single line, no trailing newline.
impl fmt::Display for RowVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in self.iter() {
            write!(f, "{} ", x)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = ColVector::from_slice(&[1.0, 2.0, 3.0]);
        let b = ColVector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(a.add(&b).unwrap().as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!(b.sub(&a).unwrap().as_slice(), &[3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_add_size_mismatch() {
        let a = RowVector::from_slice(&[1.0, 2.0]);
        let b = RowVector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(
            a.add(&b),
            Err(LinalgError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );
        assert!(a.sub(&b).is_err());
    }

    #[test]
    fn test_neg_and_scale() {
        let v = RowVector::from_slice(&[1.0, -2.0]);
        assert_eq!(v.neg().as_slice(), &[-1.0, 2.0]);
        assert_eq!(v.scale(3.0).as_slice(), &[3.0, -6.0]);
    }

    #[test]
    fn test_div() {
        let v = ColVector::from_slice(&[2.0, 4.0]);
        assert_eq!(v.div(2.0).unwrap().as_slice(), &[1.0, 2.0]);
        assert_eq!(v.div(0.0), Err(LinalgError::DivideByZero));
        // tiny but nonzero divisors are accepted
        assert!(v.div(1e-300).is_ok());
    }

    #[test]
    fn test_axpy() {
        let mut y = ColVector::from_slice(&[1.0, 1.0, 1.0]);
        let x = ColVector::from_slice(&[1.0, 2.0, 3.0]);
        y.axpy(2.0, &x).unwrap();
        assert_eq!(y.as_slice(), &[3.0, 5.0, 7.0]);

        let short = ColVector::from_slice(&[1.0]);
        assert!(y.axpy(1.0, &short).is_err());
        // failed update leaves the receiver untouched
        assert_eq!(y.as_slice(), &[3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_norms() {
        let v = RowVector::from_slice(&[3.0, -4.0]);
        assert!((v.norm1() - 7.0).abs() < 1e-12);
        assert!((v.norm2() - 5.0).abs() < 1e-12);
        assert!((v.norm_max().unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_norm_max_empty() {
        let v = ColVector::zeros(0);
        assert_eq!(v.norm_max(), Err(LinalgError::EmptyVector));
        assert_eq!(v.norm1(), 0.0);
        assert_eq!(v.norm2(), 0.0);
    }

    #[test]
    fn test_norm2_extreme_magnitudes() {
        let big = ColVector::from_slice(&[1e200, 1e200]);
        let expected = 1e200 * 2.0_f64.sqrt();
        assert!(big.norm2().is_finite());
        assert!((big.norm2() - expected).abs() / expected < 1e-12);

        let tiny = ColVector::from_slice(&[3e-200, 4e-200]);
        assert!((tiny.norm2() - 5e-200).abs() / 5e-200 < 1e-12);
    }

    #[test]
    fn test_norm2_non_finite() {
        assert!(ColVector::from_slice(&[1.0, f64::NAN]).norm2().is_nan());
        assert!(ColVector::from_slice(&[f64::NAN, f64::INFINITY]).norm2().is_nan());
        assert_eq!(
            ColVector::from_slice(&[1.0, f64::NEG_INFINITY]).norm2(),
            f64::INFINITY
        );
    }

    #[test]
    fn test_inner_and_dot() {
        let rv = RowVector::from_slice(&[1.0, 2.0, 3.0]);
        let cv = ColVector::from_slice(&[4.0, 5.0, 6.0]);
        assert!((rv.inner(&cv).unwrap() - 32.0).abs() < 1e-12);
        assert!((cv.dot(&cv).unwrap() - 77.0).abs() < 1e-12);
        assert!(rv.inner(&ColVector::zeros(2)).is_err());
    }

    #[test]
    fn test_outer() {
        let cv = ColVector::from_slice(&[1.0, 2.0]);
        let rv = RowVector::from_slice(&[3.0, 4.0, 5.0]);
        let m = cv.outer(&rv).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.get(1, 2), 10.0);
        assert_eq!(m.get(0, 0), 3.0);
    }

    #[test]
    fn test_outer_empty_operand() {
        let cv = ColVector::zeros(0);
        let rv = RowVector::from_slice(&[1.0, 2.0]);
        assert_eq!(cv.outer(&rv), Err(LinalgError::EmptyVector));
        let cv = ColVector::from_slice(&[1.0]);
        assert_eq!(cv.outer(&RowVector::zeros(0)), Err(LinalgError::EmptyVector));
    }

    #[test]
    fn test_vec_mat_scenario() {
        let m = Matrix::from_rows(&[
            vec![2.0, 4.0, 6.0],
            vec![3.0, 6.0, 9.0],
            vec![4.0, 8.0, 12.0],
        ])
        .unwrap();
        let rv = RowVector::from_slice(&[3.0, 6.0, 9.0]);
        let result = rv.vec_mat(&m).unwrap();
        assert_eq!(result.as_slice(), &[60.0, 120.0, 180.0]);
    }

    #[test]
    fn test_vec_mat_non_square() {
        // [1, 1] * [[1, 2, 3], [4, 5, 6]] = [5, 7, 9]
        let m = Matrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let rv = RowVector::from_slice(&[1.0, 1.0]);
        assert_eq!(rv.vec_mat(&m).unwrap().as_slice(), &[5.0, 7.0, 9.0]);
        assert!(RowVector::zeros(3).vec_mat(&m).is_err());
    }

    #[test]
    fn test_transpose_retags() {
        let cv = ColVector::from_slice(&[1.0, 2.0]);
        let rv: RowVector = cv.transpose();
        assert_eq!(rv.as_slice(), cv.as_slice());
        assert_eq!(rv.transpose(), cv);
    }

    #[test]
    fn test_display() {
        let cv = ColVector::from_slice(&[1.0, 2.5]);
        assert_eq!(cv.to_string(), "1\n2.5\n");
        let rv = RowVector::from_slice(&[60.0, 120.0, 180.0]);
        assert_eq!(rv.to_string(), "60 120 180 ");
    }

    #[test]
    fn test_index() {
        let mut v = ColVector::zeros(2);
        v[1] = 4.0;
        assert_eq!(v[1], 4.0);
        assert_eq!(v.get(0), 0.0);
    }
}
