use nalgebra::Vector2;

/// Cross product of (b - a) and (c - a).
///
/// Positive for a left turn a→b→c, negative for a right turn, zero when
/// collinear.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[inline]
fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> std::cmp::Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
        std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
        o => o,
    }
}

/// Andrew's monotone chain convex hull (returns hull vertices in CCW order).
///
/// Exact coordinate duplicates collapse before construction; if fewer than 2
/// distinct points remain they are returned as-is (0 or 1 points, open
/// polygon convention throughout). Collinear points interior to a hull edge
/// are excluded: the chains pop on cross <= 0, so only strictly turning
/// vertices survive. The first vertex is the lexicographic minimum.
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup_by(|a, b| a.x == b.x && a.y == b.y);
    if pts.len() < 2 {
        return pts;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    // Each chain ends where the other begins; drop the seam duplicates.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}
