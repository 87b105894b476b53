//! Macros for writing matrices out row by row.

/// Creates a [`Matrix`](crate::Matrix) from nested row literals.
///
/// Every row must have the same number of entries; a jagged literal panics,
/// like an out-of-bounds slice index. Use
/// [`Matrix::from_rows`](crate::Matrix::from_rows) to get a `Result` instead.
///
/// # Examples
/// ```
/// use fea_linalg::matrix;
///
/// let a = matrix![[1.0, 2.0], [3.0, 4.0]];
/// assert_eq!(a.shape(), (2, 2));
/// assert_eq!(a[(1, 0)], 3.0);
///
/// // Column vector
/// let b = matrix![[11.0], [13.0]];
/// assert!(b.is_column_vector());
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),+ $(,)?]),+ $(,)?) => {{
        let rows = vec![$(vec![$($x),+]),+];
        match $crate::Matrix::from_rows(&rows) {
            Ok(m) => m,
            Err(e) => panic!("Inconsistent dimensions in matrix macro: {}", e),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_matrix_macro_2d() {
        let m = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_matrix_macro_row_vector() {
        let m = matrix![[11.0, 13.0]];
        assert!(m.is_row_vector());
        assert_eq!(m.cols(), 2);
    }

    #[test]
    #[should_panic(expected = "Inconsistent dimensions")]
    fn test_matrix_macro_jagged() {
        let _ = matrix![[1.0, 2.0], [3.0]];
    }
}
