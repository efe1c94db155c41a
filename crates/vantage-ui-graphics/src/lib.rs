//! Pure math/data for geometry & units in Vantage
//!
//! This crate contains the geometric primitives, the affine matrix, and the
//! unit types used throughout the Vantage measurement framework.

mod geometry;
mod matrix;
mod unit;

pub use geometry::*;
pub use matrix::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::matrix::Matrix;
    pub use crate::unit::{Dp, Px};
}
