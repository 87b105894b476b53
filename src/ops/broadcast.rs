//! Row- and column-vector broadcasting.
//!
//! A `1 x C` row vector is applied to every row of an `R x C` matrix and an
//! `R x 1` column vector to every column. Any other operand shape is a
//! `ShapeMismatch`; there is no general n-d broadcasting.

use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

fn check_row_vector<T: Scalar>(matrix: &Matrix<T>, row: &Matrix<T>) -> Result<()> {
    if row.rows != 1 || row.cols != matrix.cols {
        return Err(LinalgError::shape_mismatch(
            vec![1, matrix.cols],
            vec![row.rows, row.cols],
        ));
    }
    Ok(())
}

fn check_column_vector<T: Scalar>(matrix: &Matrix<T>, col: &Matrix<T>) -> Result<()> {
    if col.cols != 1 || col.rows != matrix.rows {
        return Err(LinalgError::shape_mismatch(
            vec![matrix.rows, 1],
            vec![col.rows, col.cols],
        ));
    }
    Ok(())
}

/// Combine every row of `matrix` with `row` in place.
pub fn broadcast_row_inplace<T, F>(matrix: &mut Matrix<T>, row: &Matrix<T>, f: F) -> Result<()>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    check_row_vector(matrix, row)?;
    if matrix.cols == 0 {
        return Ok(());
    }
    for chunk in matrix.data.chunks_exact_mut(row.cols) {
        for (a, &b) in chunk.iter_mut().zip(&row.data) {
            *a = f(*a, b);
        }
    }
    Ok(())
}

/// Combine every column of `matrix` with `col` in place.
pub fn broadcast_column_inplace<T, F>(matrix: &mut Matrix<T>, col: &Matrix<T>, f: F) -> Result<()>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    check_column_vector(matrix, col)?;
    if matrix.cols == 0 {
        return Ok(());
    }
    let cols = matrix.cols;
    for (chunk, &b) in matrix.data.chunks_exact_mut(cols).zip(&col.data) {
        for a in chunk.iter_mut() {
            *a = f(*a, b);
        }
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// Adds a `1 x cols` row vector to every row.
    ///
    /// ```
    /// use fea_linalg::matrix;
    ///
    /// let a = matrix![[1.0, 2.0], [3.0, 4.0]];
    /// let b = a.add_row_vector(&matrix![[11.0, 13.0]]).unwrap();
    /// assert_eq!(b, matrix![[12.0, 15.0], [14.0, 17.0]]);
    /// ```
    pub fn add_row_vector(&self, row: &Self) -> Result<Self> {
        let mut out = self.clone();
        broadcast_row_inplace(&mut out, row, |a, b| a + b)?;
        Ok(out)
    }

    pub fn sub_row_vector(&self, row: &Self) -> Result<Self> {
        let mut out = self.clone();
        broadcast_row_inplace(&mut out, row, |a, b| a - b)?;
        Ok(out)
    }

    /// Scales column `j` of every row by `row[j]`.
    pub fn mul_row_vector(&self, row: &Self) -> Result<Self> {
        let mut out = self.clone();
        broadcast_row_inplace(&mut out, row, |a, b| a * b)?;
        Ok(out)
    }

    pub fn add_row_vector_inplace(&mut self, row: &Self) -> Result<&mut Self> {
        broadcast_row_inplace(self, row, |a, b| a + b)?;
        Ok(self)
    }

    /// Adds a `rows x 1` column vector to every column.
    ///
    /// ```
    /// use fea_linalg::matrix;
    ///
    /// let a = matrix![[1.0, 2.0], [3.0, 4.0]];
    /// let b = a.add_column_vector(&matrix![[11.0], [13.0]]).unwrap();
    /// assert_eq!(b, matrix![[12.0, 13.0], [16.0, 17.0]]);
    /// ```
    pub fn add_column_vector(&self, col: &Self) -> Result<Self> {
        let mut out = self.clone();
        broadcast_column_inplace(&mut out, col, |a, b| a + b)?;
        Ok(out)
    }

    pub fn sub_column_vector(&self, col: &Self) -> Result<Self> {
        let mut out = self.clone();
        broadcast_column_inplace(&mut out, col, |a, b| a - b)?;
        Ok(out)
    }

    /// Scales row `i` by `col[i]`.
    pub fn mul_column_vector(&self, col: &Self) -> Result<Self> {
        let mut out = self.clone();
        broadcast_column_inplace(&mut out, col, |a, b| a * b)?;
        Ok(out)
    }

    pub fn add_column_vector_inplace(&mut self, col: &Self) -> Result<&mut Self> {
        broadcast_column_inplace(self, col, |a, b| a + b)?;
        Ok(self)
    }
}
