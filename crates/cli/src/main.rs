use anyhow::{Context, Result};
use boundsq::prelude::*;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "bsq")]
#[command(about = "Bounding squares (axis-aligned and minimum rotated) over 2D point sets")]
struct Cmd {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw random point clouds and report both bounding squares per draw
    Sample {
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        /// First replay index; successive draws increment it
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1)]
        iterations: u64,
        #[arg(long, default_value_t = 2)]
        min_points: usize,
        #[arg(long, default_value_t = 5)]
        max_points: usize,
    },
    /// Read a JSON point list ([[x, y], ...]) from a file and report
    Compute {
        #[arg(long)]
        input: String,
    },
}

/// One JSON report: the input points plus both squares, or `squares: null`
/// when there are fewer than 2 distinct points (absent is not an error).
#[derive(Serialize)]
struct Report {
    points: Vec<[f64; 2]>,
    squares: Option<Squares>,
}

#[derive(Serialize)]
struct Squares {
    axis_aligned: SquareOut,
    rotated: SquareOut,
    /// rotated area / axis-aligned area, <= 1 when the rotation helps
    area_ratio: f64,
}

#[derive(Serialize)]
struct SquareOut {
    corners: [[f64; 2]; 4],
    angle_radians: f64,
    angle_degrees: f64,
    area: f64,
}

impl From<&BoundingSquare> for SquareOut {
    fn from(sq: &BoundingSquare) -> Self {
        Self {
            corners: sq.corners.map(|c| [c.x, c.y]),
            angle_radians: sq.angle,
            angle_degrees: sq.angle.to_degrees(),
            area: sq.area,
        }
    }
}

#[derive(Deserialize)]
struct PointList(Vec<[f64; 2]>);

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            seed,
            index,
            iterations,
            min_points,
            max_points,
        } => sample(seed, index, iterations, min_points, max_points, cmd.pretty),
        Action::Compute { input } => compute(&input, cmd.pretty),
    }
}

fn sample(
    seed: u64,
    first_index: u64,
    iterations: u64,
    min_points: usize,
    max_points: usize,
    pretty: bool,
) -> Result<()> {
    let cfg = CloudCfg {
        point_count: PointCount::Uniform {
            min: min_points,
            max: max_points,
        },
        ..CloudCfg::default()
    };
    for index in first_index..first_index.saturating_add(iterations) {
        let pts = draw_point_cloud(cfg, ReplayToken { seed, index });
        tracing::info!(seed, index, points = pts.len(), "sampled cloud");
        emit(&build_report(&pts), pretty)?;
    }
    Ok(())
}

fn compute(input: &str, pretty: bool) -> Result<()> {
    let raw = std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let pts = parse_points(&raw)?;
    tracing::info!(input, points = pts.len(), "loaded points");
    emit(&build_report(&pts), pretty)
}

fn parse_points(raw: &str) -> Result<Vec<Vec2<f64>>> {
    let PointList(pairs) =
        serde_json::from_str(raw).context("expected a JSON array of [x, y] pairs")?;
    Ok(pairs.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

fn build_report(points: &[Vec2<f64>]) -> Report {
    let squares = match (
        axis_aligned_bounding_square(points),
        min_bounding_square(points),
    ) {
        (Some(axis), Some(rot)) => Some(Squares {
            area_ratio: rot.area / axis.area,
            axis_aligned: SquareOut::from(&axis),
            rotated: SquareOut::from(&rot),
        }),
        _ => None,
    };
    Report {
        points: points.iter().map(|p| [p.x, p.y]).collect(),
        squares,
    }
}

fn emit(report: &Report, pretty: bool) -> Result<()> {
    let line = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{line}");
    Ok(())
}
