//! General square solves.

use super::lu::{lu, LuOptions};
use crate::{error::Result, matrix::Matrix, scalar::Scalar};

/// Solves `A * x = b` for square `A` with partially pivoted LU.
///
/// `b` may hold several right-hand sides as columns.
///
/// # Errors
///
/// * `ShapeMismatch` if `A` is not square or `b` has the wrong number of rows.
/// * `SingularPivot` if `A` is singular.
///
/// ```
/// use fea_linalg::{matrix, linalg::solve};
///
/// let a = matrix![[0.0, 2.0], [1.0, 1.0]];
/// let x = solve(&a, &matrix![[4.0], [3.0]]).unwrap();
/// assert_eq!(x, matrix![[1.0], [2.0]]);
/// ```
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    lu(a, LuOptions::partial_pivoting())?.solve(b)
}
