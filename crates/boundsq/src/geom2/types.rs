//! Value types and rotation helpers for bounding-square computations.
//!
//! - `rotate`: 2D rotation about the origin (the only pivot used here;
//!   callers pre-translate if they need a different one).
//! - `BoundingSquare`: the sole output record of the square searches.

use nalgebra::Vector2;

/// Rotate `p` by `angle` radians about the origin.
#[inline]
pub fn rotate(p: Vector2<f64>, angle: f64) -> Vector2<f64> {
    let (sin_a, cos_a) = angle.sin_cos();
    Vector2::new(p.x * cos_a - p.y * sin_a, p.x * sin_a + p.y * cos_a)
}

/// A bounding square expressed in the original coordinate frame.
///
/// Invariants:
/// - `corners` form a square (equal sides, right angles) of area `area`
///   containing every input point up to floating-point tolerance.
/// - Corner order is bottom-left, bottom-right, top-right, top-left of the
///   axis-aligned square in the frame rotated by `-angle` (CCW winding).
#[derive(Clone, Copy, Debug)]
pub struct BoundingSquare {
    pub corners: [Vector2<f64>; 4],
    /// Rotation of the square relative to the axes, radians.
    pub angle: f64,
    pub area: f64,
}

impl BoundingSquare {
    /// Side length.
    #[inline]
    pub fn side(&self) -> f64 {
        (self.corners[1] - self.corners[0]).norm()
    }

    /// Center of the square (diagonal midpoint).
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.corners[0] + self.corners[2]) * 0.5
    }

    /// Membership check with custom slack (eps).
    ///
    /// `eps > 0` enlarges the square (permissive), `eps < 0` shrinks it
    /// (strict). The check runs in the frame rotated by `-angle`, where the
    /// square is axis-aligned.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let q = rotate(p, -self.angle);
        let bl = rotate(self.corners[0], -self.angle);
        let tr = rotate(self.corners[2], -self.angle);
        q.x >= bl.x - eps && q.x <= tr.x + eps && q.y >= bl.y - eps && q.y <= tr.y + eps
    }
}
