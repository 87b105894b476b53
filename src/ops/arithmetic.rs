//! Arithmetic operations for matrices.
//!
//! Matrix-matrix operations are element-wise (`mul` is the Hadamard product,
//! not matrix multiplication) and require equal shapes. Scalar operations
//! follow IEEE semantics with no guards: dividing by a zero scalar yields
//! infinities or NaN.

use super::elementwise::{map, zip_with};
use crate::{error::Result, matrix::Matrix, scalar::Scalar};

/// Element-wise addition of two matrices.
pub fn add<T: Scalar>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    zip_with(lhs, rhs, |a, b| a + b)
}

/// Element-wise subtraction of two matrices.
pub fn sub<T: Scalar>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    zip_with(lhs, rhs, |a, b| a - b)
}

/// Element-wise (Hadamard) product of two matrices.
pub fn mul<T: Scalar>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    zip_with(lhs, rhs, |a, b| a * b)
}

/// Element-wise division of two matrices.
pub fn div<T: Scalar>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>> {
    zip_with(lhs, rhs, |a, b| a / b)
}

impl<T: Scalar> Matrix<T> {
    /// Element-wise sum with a matrix of the same shape.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    /// Element-wise difference with a matrix of the same shape.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        sub(self, other)
    }

    /// Hadamard product with a matrix of the same shape.
    ///
    /// For matrix multiplication use [`matmul`](Self::matmul).
    pub fn mul(&self, other: &Self) -> Result<Self> {
        mul(self, other)
    }

    /// Element-wise quotient with a matrix of the same shape.
    pub fn div(&self, other: &Self) -> Result<Self> {
        div(self, other)
    }

    pub fn add_inplace(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_inplace(other, |a, b| a + b)
    }

    pub fn sub_inplace(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_inplace(other, |a, b| a - b)
    }

    pub fn mul_inplace(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_inplace(other, |a, b| a * b)
    }

    pub fn div_inplace(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with_inplace(other, |a, b| a / b)
    }

    /// Adds `s` to every entry.
    pub fn add_scalar(&self, s: T) -> Self {
        map(self, |x| x + s)
    }

    /// Subtracts `s` from every entry.
    pub fn sub_scalar(&self, s: T) -> Self {
        map(self, |x| x - s)
    }

    /// Multiplies every entry by `s`.
    pub fn mul_scalar(&self, s: T) -> Self {
        map(self, |x| x * s)
    }

    /// Divides every entry by `s`. A zero `s` is not special-cased.
    pub fn div_scalar(&self, s: T) -> Self {
        map(self, |x| x / s)
    }

    pub fn add_scalar_inplace(&mut self, s: T) -> &mut Self {
        self.map_inplace(|x| x + s)
    }

    pub fn sub_scalar_inplace(&mut self, s: T) -> &mut Self {
        self.map_inplace(|x| x - s)
    }

    pub fn mul_scalar_inplace(&mut self, s: T) -> &mut Self {
        self.map_inplace(|x| x * s)
    }

    pub fn div_scalar_inplace(&mut self, s: T) -> &mut Self {
        self.map_inplace(|x| x / s)
    }
}

macro_rules! impl_scalar_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $f:ident, $f_inplace:ident) => {
        impl<T: Scalar> std::ops::$op<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: T) -> Matrix<T> {
                self.$f(rhs)
            }
        }

        impl<T: Scalar> std::ops::$assign<T> for Matrix<T> {
            fn $assign_method(&mut self, rhs: T) {
                self.$f_inplace(rhs);
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, add_scalar, add_scalar_inplace);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, sub_scalar, sub_scalar_inplace);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, mul_scalar, mul_scalar_inplace);
impl_scalar_op!(Div, div, DivAssign, div_assign, div_scalar, div_scalar_inplace);

impl<T: Scalar> std::ops::Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        map(self, |x| -x)
    }
}
