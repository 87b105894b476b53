//! LU decomposition by Gaussian elimination.
//!
//! The factors are kept packed in one matrix: the strict lower triangle holds
//! the multipliers of L (whose diagonal is implicitly one) and the upper
//! triangle, diagonal included, holds U.
//!
//! Elimination runs without pivoting unless [`Pivoting::Partial`] is asked
//! for. Unpivoted elimination is only safe for matrices such as diagonally
//! dominant or symmetric positive-definite ones; an exactly zero pivot is
//! reported as `SingularPivot` rather than producing infinities.

use super::triangular::triangular_solve_inplace;
use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};

/// Row pivoting strategy used during elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pivoting {
    /// Eliminate in natural row order.
    #[default]
    None,
    /// Swap the largest-magnitude entry of each column onto the diagonal and
    /// record the row permutation.
    Partial,
}

/// How [`LuDecomposition::factors`] hands the factors back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LuLayout {
    /// One matrix with L below the diagonal and U on and above it.
    #[default]
    Combined,
    /// Two separate matrices, L with an explicit unit diagonal.
    Split,
}

/// Options for [`lu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuOptions {
    pub pivoting: Pivoting,
    pub layout: LuLayout,
}

impl LuOptions {
    /// Default layout with partial pivoting switched on.
    pub fn partial_pivoting() -> Self {
        Self {
            pivoting: Pivoting::Partial,
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: LuLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// LU factors in the layout selected by [`LuOptions::layout`].
#[derive(Debug, Clone, PartialEq)]
pub enum LuFactors<T: Scalar = f64> {
    Combined(Matrix<T>),
    Split { l: Matrix<T>, u: Matrix<T> },
}

/// Result of [`lu`]: `P * A = L * U`, with `P` the identity when no
/// pivoting was requested.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Scalar = f64> {
    packed: Matrix<T>,
    perm: Vec<usize>,
    swaps: usize,
    options: LuOptions,
}

/// Factors a square matrix.
///
/// # Errors
///
/// * `ShapeMismatch` if `a` is not square.
/// * `SingularPivot` if a pivot is exactly zero (unpivoted) or an entire
///   remaining column is zero (partial pivoting).
///
/// ```
/// use fea_linalg::{matrix, linalg::lu, LuOptions};
///
/// let a = matrix![[2.0, 1.0], [1.0, 2.0]];
/// let f = lu(&a, LuOptions::default()).unwrap();
/// assert_eq!(f.packed(), &matrix![[2.0, 1.0], [0.5, 1.5]]);
/// ```
pub fn lu<T: Scalar>(a: &Matrix<T>, options: LuOptions) -> Result<LuDecomposition<T>> {
    if !a.is_square() {
        return Err(LinalgError::shape_mismatch(
            vec![a.rows, a.rows],
            vec![a.rows, a.cols],
        ));
    }

    let n = a.rows;
    log::debug!("LU decomposition of {}x{} matrix, {:?}", n, n, options);

    let mut m = a.clone();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut swaps = 0;

    for k in 0..n {
        if options.pivoting == Pivoting::Partial {
            let mut p = k;
            let mut max = m.data[k * n + k].abs();
            for i in (k + 1)..n {
                let v = m.data[i * n + k].abs();
                if v > max {
                    max = v;
                    p = i;
                }
            }
            if p != k {
                log::trace!("LU step {}: swapping rows {} and {}", k, k, p);
                for j in 0..n {
                    m.data.swap(k * n + j, p * n + j);
                }
                perm.swap(k, p);
                swaps += 1;
            }
        }

        let pivot = m.data[k * n + k];
        if pivot.is_zero() {
            log::debug!("LU decomposition failed: zero pivot at index {}", k);
            return Err(LinalgError::SingularPivot { index: k });
        }

        for i in (k + 1)..n {
            let factor = m.data[i * n + k] / pivot;
            m.data[i * n + k] = factor;
            for j in (k + 1)..n {
                let ukj = m.data[k * n + j];
                m.data[i * n + j] -= factor * ukj;
            }
        }
    }

    Ok(LuDecomposition {
        packed: m,
        perm,
        swaps,
        options,
    })
}

impl<T: Scalar> LuDecomposition<T> {
    /// Packed factors: L below the diagonal, U on and above it.
    pub fn packed(&self) -> &Matrix<T> {
        &self.packed
    }

    /// Unit lower-triangular factor.
    pub fn l(&self) -> Matrix<T> {
        let n = self.packed.rows;
        Matrix::from_fn(n, n, |i, j| match i.cmp(&j) {
            std::cmp::Ordering::Greater => self.packed.data[i * n + j],
            std::cmp::Ordering::Equal => T::one(),
            std::cmp::Ordering::Less => T::zero(),
        })
    }

    /// Upper-triangular factor.
    pub fn u(&self) -> Matrix<T> {
        let n = self.packed.rows;
        Matrix::from_fn(n, n, |i, j| {
            if i <= j {
                self.packed.data[i * n + j]
            } else {
                T::zero()
            }
        })
    }

    /// Factors in the configured layout.
    pub fn factors(&self) -> LuFactors<T> {
        match self.options.layout {
            LuLayout::Combined => LuFactors::Combined(self.packed.clone()),
            LuLayout::Split => LuFactors::Split {
                l: self.l(),
                u: self.u(),
            },
        }
    }

    pub fn options(&self) -> LuOptions {
        self.options
    }

    /// Row permutation: row `i` of `L * U` is row `perm[i]` of `A`.
    ///
    /// `None` when the decomposition ran without pivoting.
    pub fn permutation(&self) -> Option<&[usize]> {
        match self.options.pivoting {
            Pivoting::None => None,
            Pivoting::Partial => Some(&self.perm),
        }
    }

    /// Determinant of the factored matrix.
    pub fn determinant(&self) -> T {
        let n = self.packed.rows;
        let det = (0..n).fold(T::one(), |acc, i| acc * self.packed.data[i * n + i]);
        if self.swaps % 2 == 1 {
            -det
        } else {
            det
        }
    }

    /// Solves `A * x = b` for one or more right-hand-side columns.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `b` does not have as many rows as `A`.
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        let n = self.packed.rows;
        if b.rows != n {
            return Err(LinalgError::shape_mismatch(
                vec![n, b.cols],
                vec![b.rows, b.cols],
            ));
        }

        let k = b.cols;
        let mut x = Matrix::zeros(n, k);
        for (i, &src) in self.perm.iter().enumerate() {
            x.data[i * k..(i + 1) * k].copy_from_slice(&b.data[src * k..(src + 1) * k]);
        }

        triangular_solve_inplace(&self.packed, &mut x, true, true)?;
        triangular_solve_inplace(&self.packed, &mut x, false, false)?;
        Ok(x)
    }
}
