//! Core dense matrix type.
//!
//! This module provides the `Matrix` type every other part of the crate
//! operates on: a row-major buffer of scalars with an immutable shape.

use crate::{
    error::{LinalgError, Result},
    scalar::Scalar,
};
use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Index, IndexMut};

/// A dense two-dimensional matrix.
///
/// Entries are stored row-major: entry `(i, j)` lives at `i * cols + j`.
/// A matrix with one row is a row vector and one with one column is a column
/// vector; the orientation decides how broadcasting treats it.
///
/// The shape is fixed for the life of the value. Operations either return a
/// new matrix or, for the `_inplace` variants, overwrite the contents of the
/// receiver without touching its shape.
///
/// # Type Parameters
///
/// * `T`: The scalar type, `f64` unless stated otherwise.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawMatrix<T>", bound(deserialize = "T: Scalar + serde::Deserialize<'de>"))
)]
pub struct Matrix<T = f64> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Matrix::new(raw.data, raw.rows, raw.cols)
    }
}

impl<T: Scalar> Matrix<T> {
    /// Creates a matrix from row-major values.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `values.len() != rows * cols`.
    ///
    /// # Example
    /// ```
    /// use fea_linalg::Matrix;
    ///
    /// let a = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    /// assert_eq!(a[(0, 1)], 2.0);
    /// assert!(Matrix::new(vec![1.0, 2.0, 3.0], 2, 2).is_err());
    /// ```
    pub fn new(values: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        match rows.checked_mul(cols) {
            Some(len) if len == values.len() => {}
            Some(len) => {
                return Err(LinalgError::shape_mismatch(vec![len], vec![values.len()]));
            }
            // the requested shape cannot be addressed at all
            None => {
                return Err(LinalgError::shape_mismatch(
                    vec![rows, cols],
                    vec![values.len()],
                ));
            }
        }
        Ok(Self {
            data: values,
            rows,
            cols,
        })
    }

    /// Creates a matrix by copying row-major values out of a slice.
    pub fn from_slice(values: &[T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(values.to_vec(), rows, cols)
    }

    /// Creates a matrix from a list of rows.
    ///
    /// An empty list gives a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the rows do not all have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(LinalgError::shape_mismatch(vec![cols], vec![row.len()]));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a matrix whose entry `(i, j)` is `f(i, j)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Creates a matrix filled with `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    /// Creates an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Creates a `1 x n` row vector.
    pub fn row_vector(values: Vec<T>) -> Self {
        let cols = values.len();
        Self {
            data: values,
            rows: 1,
            cols,
        }
    }

    /// Creates an `n x 1` column vector.
    pub fn column_vector(values: Vec<T>) -> Self {
        let rows = values.len();
        Self {
            data: values,
            rows,
            cols: 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_row_vector(&self) -> bool {
        self.rows == 1
    }

    pub fn is_column_vector(&self) -> bool {
        self.cols == 1
    }

    /// Row-major view of the entries.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the entries. The shape cannot be changed
    /// through it.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the matrix and reinterprets its entries with a new shape.
    ///
    /// The receiver's shape never changes; this hands back a different matrix
    /// that owns the same buffer.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `rows * cols` differs from `self.len()`.
    pub fn into_shape(self, rows: usize, cols: usize) -> Result<Self> {
        Self::new(self.data, rows, cols)
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(LinalgError::index_out_of_range(row, self.rows, 0));
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(LinalgError::index_out_of_range(col, self.cols, 1));
        }
        Ok(())
    }

    /// Returns entry `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is outside the shape.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Overwrites entry `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if either index is outside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        let idx = self.offset(row, col);
        self.data[idx] = value;
        Ok(())
    }

    /// Copies row `i` into a new `1 x cols` matrix.
    ///
    /// The copy does not alias the source: write it back with
    /// [`set_row`](Self::set_row) to make changes visible.
    ///
    /// ```
    /// use fea_linalg::matrix;
    ///
    /// let mut a = matrix![[1.0, 2.0], [3.0, 4.0]];
    /// let mut r = a.row(0).unwrap();
    /// r.add_inplace(&matrix![[11.0, 13.0]]).unwrap();
    /// assert_eq!(a[(0, 0)], 1.0);
    ///
    /// a.set_row(0, &r).unwrap();
    /// assert_eq!(a, matrix![[12.0, 15.0], [3.0, 4.0]]);
    /// ```
    pub fn row(&self, i: usize) -> Result<Self> {
        self.check_row(i)?;
        let start = i * self.cols;
        Ok(Self::row_vector(self.data[start..start + self.cols].to_vec()))
    }

    /// Copies column `j` into a new `rows x 1` matrix.
    pub fn column(&self, j: usize) -> Result<Self> {
        self.check_col(j)?;
        let values = (0..self.rows).map(|i| self.data[self.offset(i, j)]).collect();
        Ok(Self::column_vector(values))
    }

    /// Overwrites row `i` with a `1 x cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad row and `ShapeMismatch` if `row`
    /// is not `1 x cols`.
    pub fn set_row(&mut self, i: usize, row: &Self) -> Result<&mut Self> {
        self.check_row(i)?;
        if row.shape() != (1, self.cols) {
            return Err(LinalgError::shape_mismatch(
                vec![1, self.cols],
                vec![row.rows, row.cols],
            ));
        }
        let start = i * self.cols;
        self.data[start..start + self.cols].copy_from_slice(&row.data);
        Ok(self)
    }

    /// Overwrites column `j` with a `rows x 1` matrix.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad column and `ShapeMismatch` if
    /// `column` is not `rows x 1`.
    pub fn set_column(&mut self, j: usize, column: &Self) -> Result<&mut Self> {
        self.check_col(j)?;
        if column.shape() != (self.rows, 1) {
            return Err(LinalgError::shape_mismatch(
                vec![self.rows, 1],
                vec![column.rows, column.cols],
            ));
        }
        for i in 0..self.rows {
            let idx = self.offset(i, j);
            self.data[idx] = column.data[i];
        }
        Ok(self)
    }

    /// Main diagonal as a column vector of length `min(rows, cols)`.
    pub fn diagonal(&self) -> Self {
        let n = self.rows.min(self.cols);
        Self::column_vector((0..n).map(|i| self.data[self.offset(i, i)]).collect())
    }

    /// Compares shapes and then every entry within an absolute tolerance.
    ///
    /// NaN entries never compare equal.
    pub fn approx_eq(&self, other: &Self, tol: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::zeros(0, 0)
    }
}

/// Equality within [`DEFAULT_TOLERANCE`](crate::DEFAULT_TOLERANCE) per entry.
impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, T::default_tolerance())
    }
}

/// Panics if the index is outside the shape; use [`Matrix::get`] for a
/// checked read.
impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        let cols = self.cols;
        &mut self.data[row * cols + col]
    }
}

impl<T> AbsDiffEq for Matrix<T>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_checks_length() {
        let a = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(a.shape(), (2, 2));

        let err = Matrix::new(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                expected: vec![4],
                actual: vec![3]
            }
        );
    }

    #[test]
    fn test_new_rejects_overflowing_shape() {
        let err = Matrix::<f64>::new(vec![1.0, 2.0], usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                expected: vec![usize::MAX, 2],
                actual: vec![2]
            }
        );
        assert!(Matrix::<f64>::from_slice(&[1.0], 2, usize::MAX).is_err());
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            Matrix::from_rows(&rows),
            Err(LinalgError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_identity_and_zeros() {
        let i = Matrix::<f64>::identity(3);
        assert_eq!(i.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

        let z = Matrix::<f64>::zeros(2, 3);
        assert_eq!(z.shape(), (2, 3));
        assert!(z.as_slice().iter().all(|&x| x == 0.0));

        let empty = Matrix::<f64>::identity(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut a = matrix![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(a.get(1, 0).unwrap(), 3.0);

        a.set(1, 0, 7.0).unwrap();
        assert_eq!(a[(1, 0)], 7.0);

        assert_eq!(
            a.get(2, 0).unwrap_err(),
            LinalgError::IndexOutOfRange { index: 2, bound: 2, axis: 0 }
        );
        assert_eq!(
            a.set(0, 5, 1.0).unwrap_err(),
            LinalgError::IndexOutOfRange { index: 5, bound: 2, axis: 1 }
        );
    }

    #[test]
    fn test_row_and_column_are_copies() {
        let a = matrix![[1.0, 2.0], [3.0, 4.0]];

        let mut r = a.row(1).unwrap();
        assert_eq!(r.shape(), (1, 2));
        r[(0, 0)] = 100.0;
        assert_eq!(a[(1, 0)], 3.0);

        let c = a.column(1).unwrap();
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.as_slice(), &[2.0, 4.0]);

        assert!(a.row(2).is_err());
        assert!(a.column(2).is_err());
    }

    #[test]
    fn test_set_row_and_column() {
        let mut a = matrix![[1.0, 2.0], [3.0, 4.0]];
        a.set_row(1, &matrix![[9.0, 8.0]]).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 9.0, 8.0]);

        a.set_column(0, &matrix![[5.0], [6.0]]).unwrap();
        assert_eq!(a.as_slice(), &[5.0, 2.0, 6.0, 8.0]);

        // A row vector is not accepted as a column.
        assert!(matches!(
            a.set_column(0, &matrix![[5.0, 6.0]]),
            Err(LinalgError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_into_shape() {
        let r = matrix![[11.0, 13.0]];
        let c = r.into_shape(2, 1).unwrap();
        assert!(c.is_column_vector());
        assert!(c.clone().into_shape(3, 1).is_err());
    }

    #[test]
    fn test_equality_is_tolerant() {
        let a = matrix![[285.8333, -76.6667]];
        let b = matrix![[285.833333333, -76.666666667]];
        assert_eq!(a, b);
        assert_ne!(a, matrix![[285.8, -76.6667]]);
        assert_ne!(a, matrix![[285.8333], [-76.6667]]);

        let nan = matrix![[f64::NAN]];
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn test_approx_traits() {
        let a = matrix![[1.0, 2.0]];
        let b = matrix![[1.0 + 1e-12, 2.0]];
        assert_abs_diff_eq!(a, b, epsilon = 1e-10);
    }

    #[test]
    fn test_diagonal() {
        let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(a.diagonal().as_slice(), &[1.0, 5.0]);
    }
}
