//! Element-wise engine shared by the arithmetic and broadcast operations.

use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

/// Apply a function element-wise to a matrix.
pub fn map<T, F>(matrix: &Matrix<T>, f: F) -> Matrix<T>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    Matrix {
        data: matrix.data.iter().map(|&x| f(x)).collect(),
        rows: matrix.rows,
        cols: matrix.cols,
    }
}

/// Apply a function element-wise to two matrices of the same shape.
pub fn zip_with<T, F>(lhs: &Matrix<T>, rhs: &Matrix<T>, f: F) -> Result<Matrix<T>>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    check_same_shape(lhs, rhs)?;
    Ok(Matrix {
        data: lhs
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(&a, &b)| f(a, b))
            .collect(),
        rows: lhs.rows,
        cols: lhs.cols,
    })
}

pub(crate) fn check_same_shape<T: Scalar>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<()> {
    if lhs.shape() != rhs.shape() {
        return Err(LinalgError::shape_mismatch(
            vec![lhs.rows, lhs.cols],
            vec![rhs.rows, rhs.cols],
        ));
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// Returns a new matrix with `f` applied to every entry.
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        map(self, f)
    }

    /// Applies `f` to every entry of the receiver.
    pub fn map_inplace<F: Fn(T) -> T>(&mut self, f: F) -> &mut Self {
        for x in self.data.iter_mut() {
            *x = f(*x);
        }
        self
    }

    /// Combines two equally shaped matrices entry by entry.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn zip_with<F: Fn(T, T) -> T>(&self, other: &Self, f: F) -> Result<Self> {
        zip_with(self, other, f)
    }

    /// In-place form of [`zip_with`](Self::zip_with); the receiver is left
    /// untouched on error.
    pub fn zip_with_inplace<F: Fn(T, T) -> T>(&mut self, other: &Self, f: F) -> Result<&mut Self> {
        check_same_shape(self, other)?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a = f(*a, b);
        }
        Ok(self)
    }
}
