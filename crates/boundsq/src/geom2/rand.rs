//! Random 2D point clouds (bounded uniform sampling + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for the point sets fed into the
//!   bounding-square searches. The generator is parameterizable,
//!   reproducible, and returns plain point vectors ready for `convex_hull`
//!   and `min_bounding_square`.
//!
//! Model
//! - Draw a point count, then sample coordinates uniformly in an
//!   axis-aligned rectangle. Determinism uses a replay token `(seed, index)`
//!   mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Axis-aligned sampling rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

/// Point-cloud sampler configuration.
///
/// The default draws 2..=5 points inside [100, 500]².
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub point_count: PointCount,
    pub bounds: Bounds2,
}
impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            point_count: PointCount::Uniform { min: 2, max: 5 },
            bounds: Bounds2 {
                min: Vector2::new(100.0, 100.0),
                max: Vector2::new(500.0, 500.0),
            },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a uniform random point cloud inside `cfg.bounds`.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.point_count.sample(&mut rng);
    let span = cfg.bounds.max - cfg.bounds.min;
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            cfg.bounds.min + Vector2::new(u * span.x, v * span.y)
        })
        .collect()
}
