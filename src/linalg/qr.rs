//! QR decomposition by Householder reflections.
//!
//! Sign convention: each reflector maps its column onto a non-negative
//! multiple of the first unit vector, with the reflector built by Parlett's
//! formula so no cancellation occurs. A column that is already zero below the
//! diagonal is not reflected, so its diagonal entry in R keeps whatever sign
//! it has. For a square input the last column is therefore never reflected.

use super::triangular::triangular_solve_inplace;
use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

/// Size of the factors returned by [`qr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QrMode {
    /// Q is `m x m`, R is `m x n`.
    #[default]
    Full,
    /// Economy size: Q is `m x k`, R is `k x n` with `k = min(m, n)`.
    Thin,
}

/// `true` selects [`QrMode::Thin`].
impl From<bool> for QrMode {
    fn from(thin: bool) -> Self {
        if thin {
            QrMode::Thin
        } else {
            QrMode::Full
        }
    }
}

/// `A = Q * R` with orthonormal columns in Q and R upper-triangular.
#[derive(Debug, Clone)]
pub struct QrDecomposition<T: Scalar = f64> {
    q: Matrix<T>,
    r: Matrix<T>,
    mode: QrMode,
}

/// Householder vector for `x` (with `v[0] = 1`) and its `beta`, such that
/// `(I - beta v v^T) x = |x| e1`. `None` when `x` has nothing below its
/// first entry.
fn householder<T: Scalar>(x: &[T]) -> Option<(Vec<T>, T)> {
    let x0 = x[0];
    let sigma = x[1..].iter().fold(T::zero(), |acc, &v| acc + v * v);
    if sigma.is_zero() {
        return None;
    }

    let mu = (x0 * x0 + sigma).sqrt();
    let v0 = if x0 <= T::zero() {
        x0 - mu
    } else {
        -sigma / (x0 + mu)
    };
    let two = T::one() + T::one();
    let beta = two * v0 * v0 / (sigma + v0 * v0);

    let mut v = Vec::with_capacity(x.len());
    v.push(T::one());
    v.extend(x[1..].iter().map(|&xi| xi / v0));
    Some((v, beta))
}

/// QR decomposition of an `m x n` matrix.
///
/// `mode` accepts a [`QrMode`] or a `bool` where `true` means thin.
///
/// ```
/// use fea_linalg::{matrix, linalg::qr, Matrix};
///
/// let a: Matrix = matrix![[3.0, 1.0], [4.0, 2.0]];
/// let f = qr(&a, true).unwrap();
/// assert_eq!(f.q().matmul(f.r()).unwrap(), a);
/// assert!((f.r()[(0, 0)] - 5.0).abs() < 1e-12);
/// ```
pub fn qr<T: Scalar>(a: &Matrix<T>, mode: impl Into<QrMode>) -> Result<QrDecomposition<T>> {
    let mode = mode.into();
    let m = a.rows;
    let n = a.cols;
    let steps = m.min(n);
    log::debug!("QR decomposition of {}x{} matrix, {:?}", m, n, mode);

    let mut r = a.clone();
    let mut q = Matrix::<T>::identity(m);

    for k in 0..steps {
        let x: Vec<T> = (k..m).map(|i| r.data[i * n + k]).collect();
        let Some((v, beta)) = householder(&x) else {
            log::trace!("QR step {}: column already reduced", k);
            continue;
        };
        log::trace!("QR step {}: beta = {}", k, beta);

        // R <- H R on columns k..n
        for j in k..n {
            let dot = v
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (t, &vt)| acc + vt * r.data[(k + t) * n + j]);
            let w = beta * dot;
            for (t, &vt) in v.iter().enumerate() {
                r.data[(k + t) * n + j] -= w * vt;
            }
        }
        for i in (k + 1)..m {
            r.data[i * n + k] = T::zero();
        }

        // Q <- Q H
        for i in 0..m {
            let row = &mut q.data[i * m + k..(i + 1) * m];
            let dot = row
                .iter()
                .zip(&v)
                .fold(T::zero(), |acc, (&qi, &vt)| acc + qi * vt);
            let w = beta * dot;
            for (qi, &vt) in row.iter_mut().zip(&v) {
                *qi -= w * vt;
            }
        }
    }

    let (q, r) = match mode {
        QrMode::Full => (q, r),
        QrMode::Thin => (
            Matrix::from_fn(m, steps, |i, j| q.data[i * m + j]),
            Matrix::from_fn(steps, n, |i, j| r.data[i * n + j]),
        ),
    };

    Ok(QrDecomposition { q, r, mode })
}

impl<T: Scalar> QrDecomposition<T> {
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    pub fn mode(&self) -> QrMode {
        self.mode
    }

    /// Returns `(Q, R)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.q, self.r)
    }

    /// Least-squares solution of `A * x = b` for `m >= n`; the exact
    /// solution when `A` is square and non-singular.
    ///
    /// # Errors
    ///
    /// * `ShapeMismatch` if `A` has fewer rows than columns or `b` has the
    ///   wrong number of rows.
    /// * `SingularPivot` if R has a zero on its diagonal (rank-deficient `A`).
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        let m = self.q.rows;
        let n = self.r.cols;
        if m < n {
            return Err(LinalgError::shape_mismatch(vec![n, n], vec![m, n]));
        }
        if b.rows != m {
            return Err(LinalgError::shape_mismatch(
                vec![m, b.cols],
                vec![b.rows, b.cols],
            ));
        }

        let qtb = self.q.transpose().matmul(b)?;
        let mut x = Matrix::from_fn(n, b.cols, |i, j| qtb[(i, j)]);
        let r_top = Matrix::from_fn(n, n, |i, j| self.r[(i, j)]);
        triangular_solve_inplace(&r_top, &mut x, false, false)?;
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn wiki() -> Matrix {
        matrix![
            [12.0, -51.0, 4.0],
            [6.0, 167.0, -68.0],
            [-4.0, 24.0, -41.0],
        ]
    }

    #[test]
    fn test_qr_reference_values() {
        let a = wiki();
        let f = qr(&a, true).unwrap();

        let q = matrix![
            [6.0 / 7.0, -69.0 / 175.0, 58.0 / 175.0],
            [3.0 / 7.0, 158.0 / 175.0, -6.0 / 175.0],
            [-2.0 / 7.0, 6.0 / 35.0, 33.0 / 35.0],
        ];
        let r = matrix![[14.0, 21.0, -14.0], [0.0, 175.0, -70.0], [0.0, 0.0, -35.0]];

        assert_abs_diff_eq!(f.q().clone(), q, epsilon = 1e-10);
        assert_abs_diff_eq!(f.r().clone(), r, epsilon = 1e-10);
        assert_abs_diff_eq!(f.q().matmul(f.r()).unwrap(), a, epsilon = 1e-10);
    }

    #[test]
    fn test_qr_orthogonal() {
        let f = qr(&wiki(), QrMode::Full).unwrap();
        let qtq = f.q().transpose().matmul(f.q()).unwrap();
        assert_abs_diff_eq!(qtq, Matrix::identity(3), epsilon = 1e-12);

        // R is upper triangular
        for i in 0..3 {
            for j in 0..i {
                assert_eq!(f.r()[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_qr_tall_full_and_thin() {
        let a = matrix![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]];

        let full = qr(&a, QrMode::Full).unwrap();
        assert_eq!(full.q().shape(), (4, 4));
        assert_eq!(full.r().shape(), (4, 2));
        assert_abs_diff_eq!(full.q().matmul(full.r()).unwrap(), a, epsilon = 1e-10);

        let thin = qr(&a, QrMode::Thin).unwrap();
        assert_eq!(thin.q().shape(), (4, 2));
        assert_eq!(thin.r().shape(), (2, 2));
        assert_abs_diff_eq!(thin.q().matmul(thin.r()).unwrap(), a, epsilon = 1e-10);
        let qtq = thin.q().transpose().matmul(thin.q()).unwrap();
        assert_abs_diff_eq!(qtq, Matrix::identity(2), epsilon = 1e-12);

        // every reflected column ends up with a positive diagonal
        assert!(thin.r()[(0, 0)] > 0.0);
        assert!(thin.r()[(1, 1)] > 0.0);
    }

    #[test]
    fn test_qr_wide() {
        let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let f = qr(&a, true).unwrap();
        assert_eq!(f.q().shape(), (2, 2));
        assert_eq!(f.r().shape(), (2, 3));
        assert_abs_diff_eq!(f.q().matmul(f.r()).unwrap(), a, epsilon = 1e-10);
    }

    #[test]
    fn test_qr_negative_pivot_no_cancellation() {
        let a = matrix![[-3.0, 1.0], [4.0, 1.0]];
        let f = qr(&a, true).unwrap();
        assert_abs_diff_eq!(f.r()[(0, 0)], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.q().matmul(f.r()).unwrap(), a, epsilon = 1e-12);
    }

    #[test]
    fn test_qr_already_triangular_is_untouched() {
        let a = matrix![[2.0, 1.0], [0.0, -3.0]];
        let (q, r) = qr(&a, false).unwrap().into_parts();
        assert_abs_diff_eq!(q, Matrix::identity(2), epsilon = 0.0);
        assert_abs_diff_eq!(r, a, epsilon = 0.0);
    }

    #[test]
    fn test_least_squares() {
        // y = c0 + c1 * x through (0, 1), (1, 2), (2, 4)
        let a = matrix![[1.0, 0.0], [1.0, 1.0], [1.0, 2.0]];
        let b = matrix![[1.0], [2.0], [4.0]];
        for mode in [QrMode::Full, QrMode::Thin] {
            let x = qr(&a, mode).unwrap().solve(&b).unwrap();
            assert_abs_diff_eq!(x, matrix![[5.0 / 6.0], [1.5]], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_solve_rank_deficient() {
        let a = matrix![[1.0, 0.0], [0.0, 0.0], [0.0, 0.0]];
        let f = qr(&a, true).unwrap();
        assert_eq!(
            f.solve(&matrix![[1.0], [1.0], [1.0]]).unwrap_err(),
            LinalgError::SingularPivot { index: 1 }
        );
    }

    #[test]
    fn test_solve_wide_rejected() {
        let f = qr(&matrix![[1.0, 2.0, 3.0]], true).unwrap();
        assert!(matches!(
            f.solve(&matrix![[1.0]]),
            Err(LinalgError::ShapeMismatch { .. })
        ));
    }
}
