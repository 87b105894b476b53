//! Matrix transpose operations.

use crate::{matrix::Matrix, scalar::Scalar};

/// Transpose a matrix into a new `cols x rows` matrix.
pub fn transpose<T: Scalar>(matrix: &Matrix<T>) -> Matrix<T> {
    let m = matrix.rows;
    let n = matrix.cols;

    let mut result = vec![T::zero(); m * n];
    for i in 0..m {
        for j in 0..n {
            result[j * m + i] = matrix.data[i * n + j];
        }
    }

    Matrix {
        data: result,
        rows: n,
        cols: m,
    }
}

impl<T: Scalar> Matrix<T> {
    /// Returns the transpose; the receiver is unchanged.
    pub fn transpose(&self) -> Self {
        transpose(self)
    }

    /// `true` if the matrix is square and `|a[i][j] - a[j][i]| <= tol` for
    /// every pair.
    pub fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows;
        (0..n).all(|i| {
            (i + 1..n).all(|j| (self.data[i * n + j] - self.data[j * n + i]).abs() <= tol)
        })
    }
}
