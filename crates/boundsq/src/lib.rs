//! Bounding-square geometry over finite 2D point sets.
//!
//! Two pure operations form the core:
//! - `geom2::convex_hull`: Andrew's monotone chain over a point slice.
//! - `geom2::min_bounding_square`: minimum-area rotated bounding square via
//!   hull-edge candidate angles.
//!
//! Both are stateless and side-effect free; every returned value is owned by
//! the caller. Degenerate inputs (empty, single point, collinear) are valid
//! and produce degenerate hulls or an explicit `None`, never an error.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Point type used throughout the crate.
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_point_cloud, Bounds2, CloudCfg, PointCount, ReplayToken};
    pub use crate::geom2::{
        axis_aligned_bounding_square, convex_hull, min_bounding_square, rotate, BoundingSquare,
    };
    pub use nalgebra::Vector2 as Vec2;
}
