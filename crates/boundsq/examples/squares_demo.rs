//! Console regeneration loop: sample small point clouds and report both
//! bounding squares per draw.
//!
//! Usage:
//!   cargo run -p boundsq --example squares_demo -- [iterations] [seed]

use boundsq::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let iterations: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let cfg = CloudCfg::default();
    for index in 0..iterations {
        let pts = draw_point_cloud(cfg, ReplayToken { seed, index });
        println!("draw {index}: {} points", pts.len());
        let axis = axis_aligned_bounding_square(&pts);
        let rot = min_bounding_square(&pts);
        match (axis, rot) {
            (Some(axis), Some(rot)) => {
                println!("  axis-aligned area: {:.2}", axis.area);
                println!(
                    "  rotated area:      {:.2} (angle {:.2}°)",
                    rot.area,
                    rot.angle.to_degrees()
                );
                println!("  rotated/axis ratio: {:.4}", rot.area / axis.area);
            }
            _ => println!("  fewer than 2 distinct points, nothing to bound"),
        }
        println!("{}", "-".repeat(40));
    }
}
