#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_delta_from() {
    let d = Point::new(10.0, 5.0).delta_from(Point::new(4.0, 8.0));
    assert_eq!(d, Point::new(6.0, -3.0));
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

// --- Viewport ---

#[test]
fn viewport_default_is_identity() {
    let v = Viewport::default();
    let p = Point::new(12.5, -7.0);
    assert!(point_approx_eq(v.screen_to_slide(p), p));
    assert!(point_approx_eq(v.slide_to_screen(p), p));
}

#[test]
fn viewport_screen_to_slide_applies_origin_and_zoom() {
    let v = Viewport::new(100.0, 50.0, 2.0);
    let p = v.screen_to_slide(Point::new(300.0, 250.0));
    assert!(point_approx_eq(p, Point::new(100.0, 100.0)));
}

#[test]
fn viewport_round_trip() {
    let v = Viewport::new(-40.0, 18.0, 0.75);
    let slide = Point::new(640.0, 360.0);
    let back = v.screen_to_slide(v.slide_to_screen(slide));
    assert!(point_approx_eq(slide, back));
}

#[test]
fn viewport_screen_dist_scales_by_zoom() {
    let v = Viewport::new(0.0, 0.0, 4.0);
    assert!(approx_eq(v.screen_dist_to_slide(8.0), 2.0));
}

#[test]
fn viewport_zoom_is_clamped_on_construction() {
    assert_eq!(Viewport::new(0.0, 0.0, 0.0).zoom(), 0.25);
    assert_eq!(Viewport::new(0.0, 0.0, -3.0).zoom(), 0.25);
    assert_eq!(Viewport::new(0.0, 0.0, 12.0).zoom(), 4.0);
    assert_eq!(Viewport::new(0.0, 0.0, f64::INFINITY).zoom(), 4.0);
    assert_eq!(Viewport::new(0.0, 0.0, f64::NAN).zoom(), 1.0);
    assert_eq!(Viewport::new(0.0, 0.0, 1.5).zoom(), 1.5);
}

#[test]
fn viewport_set_zoom_clamps() {
    let mut v = Viewport::default();
    v.set_zoom(0.01);
    assert_eq!(v.zoom(), 0.25);
    v.set_zoom(2.0);
    assert_eq!(v.zoom(), 2.0);
}

#[test]
fn viewport_zoom_is_clamped_on_deserialize() {
    let v: Viewport = serde_json::from_str(r#"{"origin_x": 5, "origin_y": 6, "zoom": 0}"#).unwrap();
    assert_eq!(v, Viewport::new(5.0, 6.0, 0.25));
    let v: Viewport = serde_json::from_str(r#"{"origin_x": 0, "origin_y": 0, "zoom": 40}"#).unwrap();
    assert_eq!(v.zoom(), 4.0);
}

#[test]
fn zero_zoom_keeps_screen_distances_finite() {
    let v = Viewport::new(0.0, 0.0, 0.0);
    let p = v.screen_to_slide(Point::new(1.0, 1.0));
    assert!(point_approx_eq(p, Point::new(4.0, 4.0)));
}
