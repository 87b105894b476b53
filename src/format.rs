//! Text rendering of matrices for logs and reports.

use crate::{matrix::Matrix, scalar::Scalar};
use std::fmt;

const FIELD_WIDTH: usize = 10;
const PRECISION: usize = 4;

/// Renders the matrix as bracketed rows of right-aligned fields.
///
/// Exact zeros print as `0`; everything else prints with four decimals.
///
/// ```
/// use fea_linalg::matrix;
///
/// let a = matrix![[1.0, 2.0], [3.0, 4.0]];
/// assert_eq!(
///     a.to_string(),
///     "[[    1.0000,    2.0000], \n [    3.0000,    4.0000]]"
/// );
/// ```
impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ", \n ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ",")?;
                }
                let value = self.data[self.offset(i, j)];
                if value.is_zero() {
                    write!(f, "{:>width$}", 0, width = FIELD_WIDTH)?;
                } else {
                    write!(f, "{:>width$.prec$}", value, width = FIELD_WIDTH, prec = PRECISION)?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl<T: Scalar> Matrix<T> {
    /// Same text as the `Display` impl.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_2x2() {
        let a = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(
            a.to_display_string(),
            "[[    1.0000,    2.0000], \n [    3.0000,    4.0000]]"
        );
    }

    #[test]
    fn test_display_zeros() {
        let z = Matrix::<f64>::zeros(10, 10);
        let row = vec!["         0"; 10].join(",");
        let expected = format!("[[{}]]", vec![row; 10].join("], \n ["));
        assert_eq!(z.to_string(), expected);
    }

    #[test]
    fn test_display_identity() {
        let s = Matrix::<f64>::identity(10).to_string();
        let lines: Vec<&str> = s.split('\n').collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("[[    1.0000,         0,"));
        assert!(lines[9].ends_with("         0,    1.0000]]"));
        assert_eq!(s.matches("1.0000").count(), 10);
    }

    #[test]
    fn test_display_fields_are_ten_wide() {
        let s = matrix![[1.0, -2.5, 0.0, 123.0]].to_string();
        let inner = s.trim_start_matches("[[").trim_end_matches("]]");
        for field in inner.split(',') {
            assert_eq!(field.len(), 10, "field {:?}", field);
        }
        assert_eq!(s, "[[    1.0000,   -2.5000,         0,  123.0000]]");
    }

    #[test]
    fn test_display_negative_and_empty() {
        let a = matrix![[-0.5]];
        assert_eq!(a.to_string(), "[[   -0.5000]]");
        assert_eq!(Matrix::<f64>::zeros(0, 0).to_string(), "[]");
    }
}
