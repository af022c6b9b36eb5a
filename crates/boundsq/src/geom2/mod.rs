//! 2D bounding-square geometry (convex hull + rotated square search).
//!
//! Purpose
//! - Provide the two pure operations backing bounding-square computations:
//!   `convex_hull` (monotone chain, CCW order) and `min_bounding_square`
//!   (minimum-area rotated square over hull-edge candidate angles), plus the
//!   trivial `axis_aligned_bounding_square` for comparison.
//! - Keep the API minimal and numerically explicit: exact dedup, exact strict
//!   minimum comparison, eps only in membership predicates.
//!
//! Code cross-refs: `hull::convex_hull`, `square::min_bounding_square`,
//! `types::BoundingSquare`, `rand::draw_point_cloud`.

mod hull;
pub mod rand;
mod square;
mod types;

pub use hull::convex_hull;
pub use square::{axis_aligned_bounding_square, min_bounding_square};
pub use types::{rotate, BoundingSquare};

#[cfg(test)]
mod tests;
