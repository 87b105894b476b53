//! Reduction operations for matrices.

use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

impl<T: Scalar> Matrix<T> {
    /// Sum of all entries. Zero for an empty matrix.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Sum of the main diagonal.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` for a non-square matrix.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(LinalgError::shape_mismatch(
                vec![self.rows, self.rows],
                vec![self.rows, self.cols],
            ));
        }
        Ok((0..self.rows).fold(T::zero(), |acc, i| acc + self.data[self.offset(i, i)]))
    }

    /// Largest absolute entry. Zero for an empty matrix; NaN entries are
    /// skipped.
    pub fn max_abs(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc.max(x.abs()))
    }

    /// Frobenius norm, scaled by the largest entry to avoid overflow.
    pub fn frobenius_norm(&self) -> T {
        let scale = self.max_abs();
        if scale.is_zero() || !scale.is_finite() {
            return scale;
        }
        let sum_sq = self.data.iter().fold(T::zero(), |acc, &x| {
            let y = x / scale;
            acc + y * y
        });
        scale * sum_sq.sqrt()
    }
}
