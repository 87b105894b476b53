//! Elementwise operations for matrices.
//! This module provides scalar and matrix-matrix arithmetic, row/column
//! broadcasting and reductions.

mod arithmetic;
mod broadcast;
mod elementwise;
mod reduction;

pub use arithmetic::*;
pub use broadcast::*;
pub use elementwise::*;
