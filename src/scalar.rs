//! Element type accepted by [`Matrix`](crate::Matrix).

use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Floating-point scalar stored in a matrix.
///
/// Implemented for `f64` (the reference precision) and `f32`.
pub trait Scalar:
    Float + FromPrimitive + NumAssign + Debug + Display + LowerExp + Default + Send + Sync + 'static
{
    /// Absolute tolerance used by `PartialEq` on matrices of this scalar.
    fn default_tolerance() -> Self;
}

impl Scalar for f64 {
    fn default_tolerance() -> Self {
        crate::DEFAULT_TOLERANCE
    }
}

impl Scalar for f32 {
    fn default_tolerance() -> Self {
        crate::DEFAULT_TOLERANCE as f32
    }
}
