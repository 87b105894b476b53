//! Cholesky decomposition of symmetric positive-definite matrices.

use super::triangular::triangular_solve_inplace;
use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

/// Lower-triangular `L` with `A = L * L^T`.
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition<T: Scalar = f64> {
    l: Matrix<T>,
}

/// Cholesky decomposition of a symmetric positive-definite matrix.
///
/// Only the lower triangle of `a` is read; symmetry is the caller's
/// responsibility and is not checked.
///
/// # Errors
///
/// * `ShapeMismatch` if `a` is not square.
/// * `NotPositiveDefinite` if a diagonal radicand is not strictly positive.
pub fn cholesky<T: Scalar>(a: &Matrix<T>) -> Result<CholeskyDecomposition<T>> {
    if !a.is_square() {
        return Err(LinalgError::shape_mismatch(
            vec![a.rows, a.rows],
            vec![a.rows, a.cols],
        ));
    }

    let n = a.rows;
    log::debug!("Cholesky decomposition of {}x{} matrix", n, n);

    let mut l = vec![T::zero(); n * n];

    for j in 0..n {
        let mut sum = T::zero();
        for k in 0..j {
            sum += l[j * n + k] * l[j * n + k];
        }

        let diag = a.data[j * n + j] - sum;
        // written so that NaN also fails
        if !(diag > T::zero()) {
            log::debug!(
                "Cholesky decomposition failed: radicand {} at index {}",
                diag,
                j
            );
            return Err(LinalgError::NotPositiveDefinite { index: j });
        }
        let ljj = diag.sqrt();
        l[j * n + j] = ljj;

        for i in (j + 1)..n {
            let mut sum = T::zero();
            for k in 0..j {
                sum += l[i * n + k] * l[j * n + k];
            }
            l[i * n + j] = (a.data[i * n + j] - sum) / ljj;
        }
    }

    Ok(CholeskyDecomposition {
        l: Matrix::new(l, n, n)?,
    })
}

impl<T: Scalar> CholeskyDecomposition<T> {
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    pub fn into_l(self) -> Matrix<T> {
        self.l
    }

    /// Solves `A * x = b` by forward substitution with `L` then back
    /// substitution with `L^T`.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        let mut x = b.clone();
        triangular_solve_inplace(&self.l, &mut x, true, false)?;
        triangular_solve_inplace(&self.l.transpose(), &mut x, false, false)?;
        Ok(x)
    }

    /// Determinant of `A`, the squared product of the diagonal of `L`.
    pub fn determinant(&self) -> T {
        let n = self.l.rows;
        let p = (0..n).fold(T::one(), |acc, i| acc * self.l.data[i * n + i]);
        p * p
    }
}
