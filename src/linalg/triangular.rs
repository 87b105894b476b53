//! Forward and back substitution against triangular matrices.

use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

fn check_system<T: Scalar>(t: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if !t.is_square() {
        return Err(LinalgError::shape_mismatch(
            vec![t.rows, t.rows],
            vec![t.rows, t.cols],
        ));
    }
    if b.rows != t.rows {
        return Err(LinalgError::shape_mismatch(
            vec![t.rows, b.cols],
            vec![b.rows, b.cols],
        ));
    }
    Ok(())
}

/// Solves `t * x = b` for `x`, overwriting `b` with the solution.
///
/// Only the triangle selected by `lower` is read, so `t` may be a packed
/// LU matrix. On error `b` holds a partially substituted result.
pub fn triangular_solve_inplace<T: Scalar>(
    t: &Matrix<T>,
    b: &mut Matrix<T>,
    lower: bool,
    unit_diagonal: bool,
) -> Result<()> {
    check_system(t, b)?;

    let n = t.rows;
    let k = b.cols;

    for step in 0..n {
        let i = if lower { step } else { n - 1 - step };
        let solved = if lower { 0..i } else { (i + 1)..n };

        for j in solved {
            let tij = t.data[i * n + j];
            for c in 0..k {
                let xj = b.data[j * k + c];
                b.data[i * k + c] -= tij * xj;
            }
        }

        if !unit_diagonal {
            let d = t.data[i * n + i];
            if d.is_zero() {
                log::debug!("triangular solve hit a zero diagonal at row {}", i);
                return Err(LinalgError::SingularPivot { index: i });
            }
            for c in 0..k {
                b.data[i * k + c] /= d;
            }
        }
    }

    Ok(())
}

/// Solves `t * x = b` where `t` is triangular.
///
/// * `lower` - forward substitution over the lower triangle when `true`,
///   back substitution over the upper triangle otherwise.
/// * `unit_diagonal` - treat the diagonal of `t` as all ones and never divide
///   by it.
///
/// `b` may carry several right-hand sides as columns.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `t` is not square or `b` has the wrong number of
/// rows, and `SingularPivot` if a diagonal divisor is zero.
///
/// ```
/// use fea_linalg::{matrix, linalg::triangular_solve};
///
/// let l = matrix![[2.0, 0.0], [1.0, 4.0]];
/// let b = matrix![[2.0], [9.0]];
/// let x = triangular_solve(&l, &b, true, false).unwrap();
/// assert_eq!(x, matrix![[1.0], [2.0]]);
/// ```
pub fn triangular_solve<T: Scalar>(
    t: &Matrix<T>,
    b: &Matrix<T>,
    lower: bool,
    unit_diagonal: bool,
) -> Result<Matrix<T>> {
    let mut x = b.clone();
    triangular_solve_inplace(t, &mut x, lower, unit_diagonal)?;
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_forward_substitution() {
        let l = matrix![[2.0, 0.0, 0.0], [6.0, 1.0, 0.0], [-8.0, 5.0, 3.0]];
        let b = matrix![[10.0], [20.0], [30.0]];
        let y = triangular_solve(&l, &b, true, false).unwrap();
        assert_abs_diff_eq!(y, matrix![[5.0], [-10.0], [40.0]], epsilon = 1e-12);
        assert_abs_diff_eq!(l.matmul(&y).unwrap(), b, epsilon = 1e-12);
    }

    #[test]
    fn test_back_substitution() {
        let u = matrix![[2.0, 1.0], [0.0, 4.0]];
        let b = matrix![[4.0], [8.0]];
        let x = triangular_solve(&u, &b, false, false).unwrap();
        assert_abs_diff_eq!(x, matrix![[1.0], [2.0]], epsilon = 1e-12);
    }

    #[test]
    fn test_unit_diagonal_ignores_stored_diagonal() {
        // the diagonal holds U entries in packed LU storage
        let packed = matrix![[5.0, 9.0], [0.5, 7.0]];
        let b = matrix![[2.0], [3.0]];
        let y = triangular_solve(&packed, &b, true, true).unwrap();
        assert_abs_diff_eq!(y, matrix![[2.0], [2.0]], epsilon = 1e-12);
    }

    #[test]
    fn test_multiple_right_hand_sides() {
        let u = matrix![[1.0, 2.0], [0.0, 2.0]];
        let b = matrix![[5.0, 3.0], [4.0, 2.0]];
        let x = triangular_solve(&u, &b, false, false).unwrap();
        assert_abs_diff_eq!(x, matrix![[1.0, 1.0], [2.0, 1.0]], epsilon = 1e-12);
    }

    #[test]
    fn test_zero_diagonal_is_singular() {
        let u = matrix![[1.0, 2.0], [0.0, 0.0]];
        let b = matrix![[1.0], [1.0]];
        assert_eq!(
            triangular_solve(&u, &b, false, false).unwrap_err(),
            LinalgError::SingularPivot { index: 1 }
        );
        // unit diagonal never divides
        assert!(triangular_solve(&u, &b, false, true).is_ok());
    }

    #[test]
    fn test_shape_checks() {
        let t = matrix![[1.0, 0.0], [1.0, 1.0]];
        assert!(matches!(
            triangular_solve(&t, &matrix![[1.0], [2.0], [3.0]], true, false),
            Err(LinalgError::ShapeMismatch { .. })
        ));
        let wide = matrix![[1.0, 0.0, 0.0], [1.0, 1.0, 0.0]];
        assert!(matches!(
            triangular_solve(&wide, &matrix![[1.0], [2.0]], true, false),
            Err(LinalgError::ShapeMismatch { .. })
        ));
    }
}
