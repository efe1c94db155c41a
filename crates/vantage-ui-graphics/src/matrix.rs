//! 2D affine transform matrix.
//!
//! Maps a point (x, y) to (a*x + c*y + tx, b*x + d*y + ty). Rotation,
//! scale and skew live in a..d; tx/ty carry the translation. A view's
//! matrix is defined relative to the view's own local origin and is
//! applied before the view's offset into its parent.

use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Exact comparison against the identity, mirroring platform matrix
    /// semantics: the mapper skips the corner mapping only for a matrix
    /// that was never written to.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub const fn from_translation(tx: f32, ty: f32) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    pub const fn from_scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotation about the local origin, in radians. Positive angles
    /// rotate the +x axis toward the +y axis.
    pub fn from_rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Returns the matrix applying `self` first, then `next`.
    pub fn then(&self, next: &Matrix) -> Self {
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            tx: next.a * self.tx + next.c * self.ty + next.tx,
            ty: next.b * self.tx + next.d * self.ty + next.ty,
        }
    }

    pub fn map_point(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.tx,
            y: self.b * p.x + self.d * p.y + self.ty,
        }
    }

    /// Maps `rect` through this matrix in place, replacing it with the
    /// axis-aligned envelope of its four mapped corners. Under rotation or
    /// skew the result grows to cover the tilted quad.
    pub fn map_rect(&self, rect: &mut Rect) {
        let corners = [
            self.map_point(Point::new(rect.left, rect.top)),
            self.map_point(Point::new(rect.right, rect.top)),
            self.map_point(Point::new(rect.right, rect.bottom)),
            self.map_point(Point::new(rect.left, rect.bottom)),
        ];

        let mut left = corners[0].x;
        let mut top = corners[0].y;
        let mut right = corners[0].x;
        let mut bottom = corners[0].y;
        for corner in &corners[1..] {
            left = left.min(corner.x);
            top = top.min(corner.y);
            right = right.max(corner.x);
            bottom = bottom.max(corner.y);
        }

        rect.set(left, top, right, bottom);
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "tests/matrix_tests.rs"]
mod tests;
