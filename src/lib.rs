//! Dense matrix kernel for finite element work.
//!
//! `fea_linalg` provides a row-major [`Matrix`] of floating-point values with
//! elementwise arithmetic, row/column broadcasting, matrix multiplication and
//! transpose, plus LU, Cholesky and QR decompositions feeding a triangular
//! solver.
//!
//! ```
//! use fea_linalg::{matrix, linalg, Matrix};
//!
//! let a: Matrix = matrix![
//!     [4.0, 12.0, -16.0],
//!     [12.0, 37.0, -43.0],
//!     [-16.0, -43.0, 98.0],
//! ];
//! let b = matrix![[10.0], [20.0], [30.0]];
//!
//! let chol = linalg::cholesky(&a).unwrap();
//! let x = chol.solve(&b).unwrap();
//! assert!((x[(2, 0)] - 13.3333).abs() < 1e-4);
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod scalar;

mod format;
#[cfg(feature = "rand")]
mod random;

pub use error::{LinalgError, Result};
pub use linalg::{
    CholeskyDecomposition, LinearAlgebra, LuDecomposition, LuFactors, LuLayout, LuOptions, Pivoting,
    QrDecomposition, QrMode,
};
pub use matrix::Matrix;
pub use scalar::Scalar;

/// Absolute per-entry tolerance used when comparing matrices with `==`.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;
