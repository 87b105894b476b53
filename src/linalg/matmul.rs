//! Matrix multiplication.

use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

/// Matrix product of `lhs` (m x k) and `rhs` (k x n).
///
/// Row-vector times matrix and matrix times column-vector are ordinary
/// instances of this product.
pub fn matmul<T: Scalar>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    if lhs.cols != rhs.rows {
        return Err(LinalgError::shape_mismatch(
            vec![lhs.rows, lhs.cols],
            vec![rhs.rows, rhs.cols],
        ));
    }

    let m = lhs.rows;
    let n = rhs.cols;
    let k = lhs.cols;

    let mut result = vec![T::zero(); m * n];

    // i-k-j order walks both row-major operands contiguously
    for i in 0..m {
        let out_row = &mut result[i * n..(i + 1) * n];
        for l in 0..k {
            let a = lhs.data[i * k + l];
            let rhs_row = &rhs.data[l * n..(l + 1) * n];
            for (c, &b) in out_row.iter_mut().zip(rhs_row) {
                *c += a * b;
            }
        }
    }

    Matrix::new(result, m, n)
}

impl<T: Scalar> Matrix<T> {
    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `self.cols() == other.rows()`.
    ///
    /// ```
    /// use fea_linalg::matrix;
    ///
    /// let a = matrix![[1.0, 2.0], [3.0, 4.0]];
    /// let b = matrix![[5.0, 6.0], [7.0, 8.0]];
    /// assert_eq!(a.matmul(&b).unwrap(), matrix![[19.0, 22.0], [43.0, 50.0]]);
    /// ```
    #[doc(alias = "multiply")]
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        matmul(self, other)
    }
}
