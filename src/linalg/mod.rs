//! Linear algebra operations for matrices.
//! Multiplication, transpose, triangular solves and the LU, Cholesky and QR
//! decompositions built on them.

mod cholesky;
mod inverse;
mod lu;
mod matmul;
mod qr;
mod solve;
mod transpose;
mod triangular;

pub use cholesky::*;
pub use inverse::*;
pub use lu::*;
pub use matmul::*;
pub use qr::*;
pub use solve::*;
pub use transpose::*;
pub use triangular::*;

use crate::{error::Result, matrix::Matrix, scalar::Scalar};

/// Method-call access to the decompositions and solvers of this module.
pub trait LinearAlgebra<T: Scalar>: Sized {
    /// Matrix transpose.
    fn t(&self) -> Self;

    /// Matrix inverse.
    fn inv(&self) -> Result<Self>;

    /// Matrix determinant.
    fn det(&self) -> Result<T>;

    /// Solves `self * x = b` with partially pivoted LU.
    fn solve(&self, b: &Self) -> Result<Self>;

    /// LU decomposition with the given options.
    fn lu(&self, options: LuOptions) -> Result<LuDecomposition<T>>;

    /// Cholesky decomposition.
    fn cholesky(&self) -> Result<CholeskyDecomposition<T>>;

    /// Householder QR decomposition.
    fn qr(&self, mode: QrMode) -> Result<QrDecomposition<T>>;
}

impl<T: Scalar> LinearAlgebra<T> for Matrix<T> {
    fn t(&self) -> Self {
        transpose(self)
    }

    fn inv(&self) -> Result<Self> {
        inverse(self)
    }

    fn det(&self) -> Result<T> {
        determinant(self)
    }

    fn solve(&self, b: &Self) -> Result<Self> {
        solve(self, b)
    }

    fn lu(&self, options: LuOptions) -> Result<LuDecomposition<T>> {
        lu(self, options)
    }

    fn cholesky(&self) -> Result<CholeskyDecomposition<T>> {
        cholesky(self)
    }

    fn qr(&self, mode: QrMode) -> Result<QrDecomposition<T>> {
        qr(self, mode)
    }
}
