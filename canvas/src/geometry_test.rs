#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use lyon::path::PathEvent;
use proptest::prelude::*;

use super::*;
use crate::viewport::Point;

// Outlines are stored in single precision.
const EPSILON: f64 = 1e-3;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn inside_box(p: Point, w: f64, h: f64) -> bool {
    p.x >= -EPSILON && p.x <= w + EPSILON && p.y >= -EPSILON && p.y <= h + EPSILON
}

// =============================================================
// Determinism and bounds
// =============================================================

#[test]
fn every_kind_is_deterministic() {
    for shape in ShapeType::ALL {
        assert_eq!(synthesize_path(shape, 180.0, 90.0), synthesize_path(shape, 180.0, 90.0), "{shape}");
    }
}

#[test]
fn every_kind_produces_an_outline() {
    for shape in ShapeType::ALL {
        let path = synthesize_path(shape, 120.0, 80.0);
        assert!(!path.is_empty(), "{shape}");
        assert!(matches!(path.events().next(), Some(PathEvent::Begin { .. })), "{shape}");
    }
}

#[test]
fn every_kind_stays_inside_its_box() {
    for shape in ShapeType::ALL {
        let b = synthesize_path(shape, 200.0, 120.0).bounds().unwrap();
        assert!(inside_box(Point::new(b.x, b.y), 200.0, 120.0), "{shape}: {b:?}");
        assert!(inside_box(Point::new(b.x + b.width, b.y + b.height), 200.0, 120.0), "{shape}: {b:?}");
    }
}

#[test]
fn only_stroke_kinds_are_open() {
    for shape in ShapeType::ALL {
        let open = shape.family() == ShapeFamily::Stroke;
        assert_eq!(synthesize_path(shape, 100.0, 100.0).is_closed(), !open, "{shape}");
    }
}

#[test]
fn zero_size_collapses_without_nan() {
    for shape in ShapeType::ALL {
        for (w, h) in [(0.0, 0.0), (0.0, 50.0), (50.0, 0.0)] {
            let path = synthesize_path(shape, w, h);
            for p in path.end_points() {
                assert!(p.x.is_finite() && p.y.is_finite(), "{shape} at {w}x{h}");
                assert!(inside_box(p, w, h), "{shape} at {w}x{h}: {p:?}");
            }
        }
    }
}

#[test]
fn negative_and_nan_sizes_are_treated_as_zero() {
    assert_eq!(synthesize_path(ShapeType::Hexagon, -40.0, f64::NAN), synthesize_path(ShapeType::Hexagon, 0.0, 0.0));
}

// =============================================================
// Regular polygons
// =============================================================

#[test]
fn regular_polygons_have_n_vertices_first_pointing_up() {
    for (shape, n) in [
        (ShapeType::Triangle, 3),
        (ShapeType::Pentagon, 5),
        (ShapeType::Hexagon, 6),
        (ShapeType::Octagon, 8),
    ] {
        let verts = synthesize_path(shape, 100.0, 60.0).vertices();
        assert_eq!(verts.len(), n, "{shape}");
        assert!(approx_eq(verts[0].x, 50.0), "{shape}");
        assert!(approx_eq(verts[0].y, 0.0), "{shape}");
    }
}

#[test]
fn hexagon_matches_formula() {
    let verts = synthesize_path(ShapeType::Hexagon, 100.0, 100.0).vertices();
    assert_eq!(verts.len(), 6);
    for (i, v) in verts.iter().enumerate() {
        let theta = i as f64 * PI / 3.0 - FRAC_PI_2;
        assert!(approx_eq(v.x, 50.0 + 50.0 * theta.cos()), "vertex {i}");
        assert!(approx_eq(v.y, 50.0 + 50.0 * theta.sin()), "vertex {i}");
    }
}

#[test]
fn star_alternates_outer_and_inner_radius() {
    let verts = synthesize_path(ShapeType::Star, 200.0, 100.0).vertices();
    assert_eq!(verts.len(), 10);
    let center = Point::new(100.0, 50.0);
    for (i, v) in verts.iter().enumerate() {
        let expected = if i % 2 == 0 { 50.0 } else { 20.0 };
        assert!(approx_eq(v.distance(center), expected), "vertex {i}");
    }
}

// =============================================================
// Families
// =============================================================

#[test]
fn ellipse_fills_its_box_with_curves() {
    let path = synthesize_path(ShapeType::Oval, 160.0, 60.0);
    assert!(path.events().all(|e| !matches!(e, PathEvent::Line { .. })));
    let b = path.bounds().unwrap();
    assert!(approx_eq(b.x, 0.0) && approx_eq(b.y, 0.0));
    assert!(approx_eq(b.width, 160.0) && approx_eq(b.height, 60.0));
    for p in path.end_points() {
        let (nx, ny) = ((p.x - 80.0) / 80.0, (p.y - 30.0) / 30.0);
        assert!(approx_eq(nx * nx + ny * ny, 1.0), "{p:?}");
    }
}

#[test]
fn ellipse_contains_centre_but_not_corners() {
    let path = synthesize_path(ShapeType::Circle, 100.0, 100.0);
    assert!(path.contains(Point::new(50.0, 50.0)));
    assert!(!path.contains(Point::new(3.0, 3.0)));
}

#[test]
fn rounded_rectangle_radius_tracks_short_side() {
    let path = synthesize_path(ShapeType::RoundedRectangle, 300.0, 100.0);
    assert_eq!(path.vertices()[0], Point::new(10.0, 0.0));
}

#[test]
fn arrow_head_reaches_right_edge_at_mid_height() {
    let verts = synthesize_path(ShapeType::Arrow, 100.0, 40.0).vertices();
    assert!(verts.contains(&Point::new(100.0, 20.0)));
}

#[test]
fn double_arrow_has_heads_at_both_ends() {
    let verts = synthesize_path(ShapeType::DoubleArrow, 100.0, 40.0).vertices();
    assert_eq!(verts.len(), 10);
    assert!(verts.contains(&Point::new(0.0, 20.0)));
    assert!(verts.contains(&Point::new(100.0, 20.0)));
}

#[test]
fn callouts_append_a_tail_below_the_body() {
    for shape in ShapeType::in_category(crate::catalog::ShapeCategory::Callouts) {
        let path = synthesize_path(shape, 100.0, 100.0);
        assert!(path.subpath_count() >= 2, "{shape}");
        assert!(path.end_points().iter().any(|p| p.y > 80.0), "{shape}");
    }
}

#[test]
fn line_is_horizontal_through_middle() {
    let verts = synthesize_path(ShapeType::DashedLine, 120.0, 30.0).vertices();
    assert_eq!(verts, vec![Point::new(0.0, 15.0), Point::new(120.0, 15.0)]);
}

#[test]
fn freeform_templates_scale_non_uniformly() {
    let small = synthesize_path(ShapeType::Heart, 100.0, 100.0);
    let wide = synthesize_path(ShapeType::Heart, 200.0, 50.0);
    let wide_points = wide.all_points();
    assert_eq!(small.all_points().len(), wide_points.len());
    for (a, b) in small.all_points().iter().zip(wide_points) {
        assert!(approx_eq(a.x * 2.0, b.x));
        assert!(approx_eq(a.y * 0.5, b.y));
    }
}

#[test]
fn svg_d_for_diamond() {
    assert_eq!(synthesize_path(ShapeType::Diamond, 100.0, 50.0).to_svg_d(), "M50,0 L100,25 L50,50 L0,25 Z");
}

// =============================================================
// Properties
// =============================================================

fn any_shape() -> impl Strategy<Value = ShapeType> {
    (0..ShapeType::ALL.len()).prop_map(|i| ShapeType::ALL[i])
}

proptest! {
    #[test]
    fn synthesis_is_deterministic(shape in any_shape(), w in 0.0..2000.0f64, h in 0.0..2000.0f64) {
        prop_assert_eq!(synthesize_path(shape, w, h), synthesize_path(shape, w, h));
    }

    #[test]
    fn synthesis_stays_in_box(shape in any_shape(), w in 0.0..2000.0f64, h in 0.0..2000.0f64) {
        let tol = 1e-2;
        if let Some(b) = synthesize_path(shape, w, h).bounds() {
            prop_assert!(b.x >= -tol && b.x + b.width <= w + tol, "{} {:?}", shape, b);
            prop_assert!(b.y >= -tol && b.y + b.height <= h + tol, "{} {:?}", shape, b);
        }
    }
}
