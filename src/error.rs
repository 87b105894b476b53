use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("Index out of range: {index} for dimension of size {bound} at axis {axis}")]
    IndexOutOfRange {
        index: usize,
        bound: usize,
        axis: usize,
    },
    #[error("Zero pivot encountered at index {index}")]
    SingularPivot { index: usize },
    #[error("Matrix is not positive definite: non-positive radicand at index {index}")]
    NotPositiveDefinite { index: usize },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LinalgError {
    pub fn shape_mismatch(expected: impl Into<Vec<usize>>, actual: impl Into<Vec<usize>>) -> Self {
        LinalgError::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn index_out_of_range(index: usize, bound: usize, axis: usize) -> Self {
        LinalgError::IndexOutOfRange { index, bound, axis }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        LinalgError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;
