//! Matrix inverse and determinant operations.

use super::lu::{lu, LuOptions};
use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

/// Compute the determinant of a square matrix through partially pivoted LU.
///
/// A singular matrix yields zero rather than an error.
pub fn determinant<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    match lu(a, LuOptions::partial_pivoting()) {
        Ok(f) => Ok(f.determinant()),
        Err(LinalgError::SingularPivot { .. }) => Ok(T::zero()),
        Err(e) => Err(e),
    }
}

/// Compute the inverse of a square matrix.
///
/// # Errors
///
/// * `ShapeMismatch` if `a` is not square.
/// * `SingularPivot` if `a` is singular.
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    let f = lu(a, LuOptions::partial_pivoting())?;
    f.solve(&Matrix::identity(a.rows()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_determinant_2x2() {
        let a = matrix![[1.0, 2.0], [3.0, 4.0]];
        assert_relative_eq!(determinant(&a).unwrap(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_3x3_singular() {
        let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_abs_diff_eq!(determinant(&a).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_determinant_empty_and_non_square() {
        assert_eq!(determinant(&Matrix::<f64>::zeros(0, 0)).unwrap(), 1.0);
        assert!(determinant(&Matrix::<f64>::zeros(2, 3)).is_err());
    }

    #[test]
    fn test_inverse_2x2() {
        let a = matrix![[4.0, 7.0], [2.0, 6.0]];
        let a_inv = inverse(&a).unwrap();

        assert_abs_diff_eq!(a_inv.clone(), matrix![[0.6, -0.7], [-0.2, 0.4]], epsilon = 1e-12);
        assert_abs_diff_eq!(a.matmul(&a_inv).unwrap(), Matrix::identity(2), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_singular() {
        let a = matrix![[1.0, 2.0], [2.0, 4.0]];
        assert!(matches!(inverse(&a), Err(LinalgError::SingularPivot { .. })));
    }
}
