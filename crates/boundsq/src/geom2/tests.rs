use super::*;
use nalgebra::{vector, Vector2};

fn square_corners() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
    ]
}

#[test]
fn hull_of_square_is_ccw_from_lex_min() {
    let hull = convex_hull(&square_corners());
    assert_eq!(hull.len(), 4);
    assert_eq!(hull[0], vector![0.0, 0.0]);
    assert_eq!(hull[1], vector![10.0, 0.0]);
    assert_eq!(hull[2], vector![10.0, 10.0]);
    assert_eq!(hull[3], vector![0.0, 10.0]);
}

#[test]
fn hull_drops_duplicates_and_edge_collinear_points() {
    let mut pts = square_corners();
    // Duplicates and midpoints on two edges must not become vertices.
    pts.push(vector![0.0, 0.0]);
    pts.push(vector![10.0, 10.0]);
    pts.push(vector![5.0, 0.0]);
    pts.push(vector![10.0, 5.0]);
    pts.push(vector![5.0, 5.0]); // interior
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 4);
    for v in &hull {
        assert!(square_corners().contains(v));
    }
}

#[test]
fn hull_degenerate_inputs_pass_through() {
    assert!(convex_hull(&[]).is_empty());
    let one = convex_hull(&[vector![2.0, 3.0]]);
    assert_eq!(one, vec![vector![2.0, 3.0]]);
    // Two identical points collapse to one.
    let dup = convex_hull(&[vector![1.0, 1.0], vector![1.0, 1.0]]);
    assert_eq!(dup, vec![vector![1.0, 1.0]]);
}

#[test]
fn hull_of_collinear_points_keeps_extremes_only() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![2.0, 2.0],
        vector![3.0, 3.0],
    ];
    let hull = convex_hull(&pts);
    assert_eq!(hull, vec![vector![0.0, 0.0], vector![3.0, 3.0]]);
}

#[test]
fn hull_is_idempotent() {
    let pts = vec![
        vector![0.3, -1.2],
        vector![4.0, 0.5],
        vector![2.5, 3.0],
        vector![-1.0, 2.0],
        vector![1.5, 1.0],
        vector![3.1, 2.2],
    ];
    let hull = convex_hull(&pts);
    assert_eq!(convex_hull(&hull), hull);
}

#[test]
fn hull_vertices_turn_strictly_left() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![6.0, -1.0],
        vector![7.0, 4.0],
        vector![3.0, 6.0],
        vector![-2.0, 3.0],
        vector![2.0, 2.0],
        vector![4.0, 1.0],
    ];
    let hull = convex_hull(&pts);
    assert!(hull.len() >= 3);
    for k in 0..hull.len() {
        let a = hull[k];
        let b = hull[(k + 1) % hull.len()];
        let c = hull[(k + 2) % hull.len()];
        assert!(super::hull::cross(a, b, c) > 0.0);
    }
}

#[test]
fn square_points_recover_the_square() {
    let sq = min_bounding_square(&square_corners()).expect("square");
    assert!((sq.area - 100.0).abs() < 1e-9);
    // First candidate (bottom edge, angle 0) wins; the π/2 edge ties on area
    // and strict comparison keeps the earlier angle.
    assert!(sq.angle.abs() < 1e-12);
    for corner in sq.corners {
        assert!(square_corners()
            .iter()
            .any(|p| (p - corner).norm() < 1e-9));
    }
}

#[test]
fn triangle_beats_axis_aligned_square() {
    let tri = vec![vector![0.0, 0.0], vector![10.0, 0.0], vector![5.0, 8.66]];
    let rot = min_bounding_square(&tri).expect("rotated");
    let axis = axis_aligned_bounding_square(&tri).expect("axis");
    assert!((axis.area - 100.0).abs() < 1e-9);
    assert!(rot.area < axis.area);
    // Optimal orientation aligns the square's diagonal with the base edge.
    assert!((rot.angle - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    assert!((rot.area - 93.2978).abs() < 1e-9);
}

#[test]
fn returned_corners_form_a_square() {
    let pts = vec![
        vector![0.3, -1.2],
        vector![4.0, 0.5],
        vector![2.5, 3.0],
        vector![-1.0, 2.0],
        vector![1.5, 1.0],
    ];
    let sq = min_bounding_square(&pts).expect("square");
    let c = sq.corners;
    let sides = [
        (c[1] - c[0]).norm(),
        (c[2] - c[1]).norm(),
        (c[3] - c[2]).norm(),
        (c[0] - c[3]).norm(),
    ];
    for s in sides {
        assert!((s - sq.side()).abs() < 1e-9);
    }
    let d1 = (c[2] - c[0]).norm();
    let d2 = (c[3] - c[1]).norm();
    assert!((d1 - d2).abs() < 1e-9);
    // Diagonals are perpendicular and meet at the center.
    assert!((c[2] - c[0]).dot(&(c[3] - c[1])).abs() < 1e-9);
    assert!(((c[0] + c[2]) * 0.5 - (c[1] + c[3]) * 0.5).norm() < 1e-9);
    assert!((sq.area - sq.side() * sq.side()).abs() < 1e-9);
}

#[test]
fn square_contains_every_input_point() {
    let pts = vec![
        vector![120.0, 430.0],
        vector![355.5, 102.25],
        vector![487.0, 499.0],
        vector![210.0, 210.0],
        vector![266.0, 388.0],
    ];
    let sq = min_bounding_square(&pts).expect("square");
    for p in &pts {
        assert!(sq.contains_eps(*p, 1e-9));
    }
}

#[test]
fn contains_eps_sign_semantics() {
    let sq = min_bounding_square(&square_corners()).expect("square");
    // Boundary point: permissive slack admits it, strict slack rejects it.
    let p = vector![10.0, 5.0];
    assert!(sq.contains_eps(p, 1e-9));
    assert!(!sq.contains_eps(p, -1e-6));
    assert!(!sq.contains_eps(vector![11.0, 5.0], 1e-9));
}

#[test]
fn absent_below_two_distinct_points() {
    assert!(min_bounding_square(&[]).is_none());
    assert!(min_bounding_square(&[vector![1.0, 2.0]]).is_none());
    // Two coincident points dedup to one hull vertex.
    assert!(min_bounding_square(&[vector![1.0, 2.0], vector![1.0, 2.0]]).is_none());
    assert!(axis_aligned_bounding_square(&[]).is_none());
    assert!(axis_aligned_bounding_square(&[vector![1.0, 2.0]]).is_none());
}

#[test]
fn two_point_segment_gets_diagonal_square() {
    let pts = vec![vector![0.0, 0.0], vector![3.0, 4.0]];
    let sq = min_bounding_square(&pts).expect("degenerate hull still bounds");
    // Segment of length 5 along the square's diagonal: side 5/√2, area 12.5.
    assert!((sq.area - 12.5).abs() < 1e-9);
    for p in &pts {
        assert!(sq.contains_eps(*p, 1e-9));
    }
}

#[test]
fn collinear_set_gets_degenerate_square() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![2.0, 2.0],
        vector![3.0, 3.0],
    ];
    let sq = min_bounding_square(&pts).expect("two-vertex hull");
    assert!((sq.area - 9.0).abs() < 1e-9);
    for p in &pts {
        assert!(sq.contains_eps(*p, 1e-9));
    }
}

#[test]
fn axis_square_grows_short_dimension() {
    // Wider than tall: grow +y.
    let wide = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![4.0, 2.0]];
    let sq = axis_aligned_bounding_square(&wide).expect("axis");
    assert_eq!(sq.angle, 0.0);
    assert!((sq.area - 16.0).abs() < 1e-12);
    assert_eq!(sq.corners[0], vector![0.0, 0.0]);
    assert_eq!(sq.corners[2], vector![4.0, 4.0]);
    // Taller than wide: grow +x.
    let tall = vec![vector![0.0, 0.0], vector![1.0, 5.0]];
    let sq = axis_aligned_bounding_square(&tall).expect("axis");
    assert!((sq.area - 25.0).abs() < 1e-12);
    assert_eq!(sq.corners[2], vector![5.0, 5.0]);
}

#[test]
fn rotate_round_trips() {
    let p = vector![2.5, -1.75];
    let th = 0.73;
    let q = rotate(rotate(p, th), -th);
    assert!((p - q).norm() < 1e-12);
    // 90° rotation maps (1, 0) to (0, 1).
    let r = rotate(vector![1.0, 0.0], std::f64::consts::FRAC_PI_2);
    assert!((r - vector![0.0, 1.0]).norm() < 1e-12);
}
