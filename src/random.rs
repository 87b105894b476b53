//! Random matrix constructors.

use crate::{
    error::{LinalgError, Result},
    matrix::Matrix,
    scalar::Scalar,
};
use rand::{
    distributions::{uniform::SampleUniform, Distribution, Uniform},
    Rng,
};
use rand_distr::{Normal, StandardNormal};

impl<T: Scalar> Matrix<T> {
    /// Fills a `rows x cols` matrix with values drawn uniformly from
    /// `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `low < high` and both are finite.
    ///
    /// ```
    /// use fea_linalg::Matrix;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let a = Matrix::<f64>::random_uniform(3, 2, -1.0, 1.0, &mut rng).unwrap();
    /// assert!(a.as_slice().iter().all(|x| (-1.0..1.0).contains(x)));
    /// ```
    pub fn random_uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        low: T,
        high: T,
        rng: &mut R,
    ) -> Result<Self>
    where
        T: SampleUniform,
    {
        if !(low < high) || !low.is_finite() || !high.is_finite() {
            return Err(LinalgError::invalid_input(format!(
                "uniform range [{}, {}) is empty or not finite",
                low, high
            )));
        }
        let dist = Uniform::new(low, high);
        Ok(Self::from_fn(rows, cols, |_, _| dist.sample(rng)))
    }

    /// Fills a `rows x cols` matrix with normally distributed values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `std_dev` is negative or not finite.
    pub fn random_normal<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mean: T,
        std_dev: T,
        rng: &mut R,
    ) -> Result<Self>
    where
        StandardNormal: Distribution<T>,
    {
        if !(std_dev >= T::zero()) || !std_dev.is_finite() || !mean.is_finite() {
            return Err(LinalgError::invalid_input(format!(
                "normal distribution with mean {} and std_dev {}",
                mean, std_dev
            )));
        }
        let dist = Normal::new(mean, std_dev)
            .map_err(|e| LinalgError::invalid_input(format!("normal distribution: {}", e)))?;
        Ok(Self::from_fn(rows, cols, |_, _| dist.sample(rng)))
    }

    /// Random symmetric positive-definite `n x n` matrix, `B * B^T + n * I`
    /// with `B` uniform on `[-1, 1)`.
    pub fn random_spd<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self
    where
        T: SampleUniform,
    {
        let dist = Uniform::new(-T::one(), T::one());
        let b = Self::from_fn(n, n, |_, _| dist.sample(rng));
        let shift = T::from_usize(n).unwrap_or_else(T::one);

        let mut a = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..=i {
                let mut s = T::zero();
                for k in 0..n {
                    s += b.data[i * n + k] * b.data[j * n + k];
                }
                if i == j {
                    s += shift;
                }
                a.data[i * n + j] = s;
                a.data[j * n + i] = s;
            }
        }
        a
    }
}
