//! Minimum-area rotated bounding square via hull-edge candidate angles.
//!
//! Candidate rule
//! - For every hull edge, test the edge's angle and that angle + 45°: the
//!   minimum square tends to align either a side or a diagonal with a hull
//!   edge. The side case is the rotating-calipers theorem for minimum-area
//!   rectangles; the diagonal case extends it to squares.
//! - Known limitation: unlike the rectangle case, this candidate set is not
//!   proven minimal for every point configuration. It is kept as-is so
//!   results stay bit-for-bit comparable across ports; do not replace it
//!   with a brute-force angle sweep.

use nalgebra::Vector2;

use super::hull::convex_hull;
use super::types::{rotate, BoundingSquare};

/// Minimum-area rotated bounding square of a point set.
///
/// Returns `None` when fewer than 2 distinct points are supplied (nothing to
/// bound). A collinear set still yields a well-defined degenerate square
/// around its extreme segment. Ties on area keep the earliest candidate
/// (strict `<` comparison, no epsilon).
pub fn min_bounding_square(points: &[Vector2<f64>]) -> Option<BoundingSquare> {
    if points.len() < 2 {
        return None;
    }
    let hull = convex_hull(points);
    if hull.len() < 2 {
        return None;
    }

    let mut candidates: Vec<f64> = Vec::with_capacity(2 * hull.len());
    for k in 0..hull.len() {
        let p = hull[k];
        let q = hull[(k + 1) % hull.len()];
        let edge_angle = (q.y - p.y).atan2(q.x - p.x);
        candidates.push(edge_angle);
        candidates.push(edge_angle + std::f64::consts::FRAC_PI_4);
    }

    let mut best: Option<BoundingSquare> = None;
    for &angle in &candidates {
        // Rotate the full point set (not just the hull) by -angle so the
        // candidate orientation becomes axis-aligned.
        let rotated: Vec<Vector2<f64>> = points.iter().map(|&p| rotate(p, -angle)).collect();
        let min_x = rotated.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = rotated.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = rotated.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = rotated.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let side = (max_x - min_x).max(max_y - min_y);
        let area = side * side;
        if best.as_ref().is_none_or(|b| area < b.area) {
            // Square centered on the rotated box, half-extent side/2; emit
            // corners BL, BR, TR, TL there, then undo the rotation.
            let cx = (min_x + max_x) * 0.5;
            let cy = (min_y + max_y) * 0.5;
            let half = side * 0.5;
            let corners_rot = [
                Vector2::new(cx - half, cy - half),
                Vector2::new(cx + half, cy - half),
                Vector2::new(cx + half, cy + half),
                Vector2::new(cx - half, cy + half),
            ];
            best = Some(BoundingSquare {
                corners: corners_rot.map(|c| rotate(c, angle)),
                angle,
                area,
            });
        }
    }
    best
}

/// Axis-aligned bounding square: the min/max box grown to a square along its
/// shorter dimension (toward +x or +y). Angle is always 0.
///
/// This is the unrotated baseline the rotated search is compared against;
/// `None` for fewer than 2 points, mirroring `min_bounding_square`.
pub fn axis_aligned_bounding_square(points: &[Vector2<f64>]) -> Option<BoundingSquare> {
    if points.len() < 2 {
        return None;
    }
    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let side = (max_x - min_x).max(max_y - min_y);
    let (max_x, max_y) = if max_x - min_x > max_y - min_y {
        (max_x, min_y + side)
    } else {
        (min_x + side, max_y)
    };
    Some(BoundingSquare {
        corners: [
            Vector2::new(min_x, min_y),
            Vector2::new(max_x, min_y),
            Vector2::new(max_x, max_y),
            Vector2::new(min_x, max_y),
        ],
        angle: 0.0,
        area: side * side,
    })
}
