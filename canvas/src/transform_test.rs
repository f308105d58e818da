#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn start() -> Bounds {
    Bounds::new(100.0, 100.0, 100.0, 50.0)
}

fn d(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Resize: unlocked
// =============================================================

#[test]
fn se_grows_both_sides_from_fixed_origin() {
    let b = resize_bounds(ResizeAnchor::Se, start(), d(40.0, 5.0), false, 20.0);
    assert_eq!(b, Bounds::new(100.0, 100.0, 140.0, 55.0));
}

#[test]
fn nw_keeps_bottom_right_corner_fixed() {
    let b = resize_bounds(ResizeAnchor::Nw, start(), d(10.0, -20.0), false, 20.0);
    assert_eq!(b, Bounds::new(110.0, 80.0, 90.0, 70.0));
    assert_eq!(b.x + b.width, 200.0);
    assert_eq!(b.y + b.height, 150.0);
}

#[test]
fn ne_keeps_bottom_left_corner_fixed() {
    let b = resize_bounds(ResizeAnchor::Ne, start(), d(10.0, 10.0), false, 20.0);
    assert_eq!(b, Bounds::new(100.0, 110.0, 110.0, 40.0));
}

#[test]
fn sw_keeps_top_right_corner_fixed() {
    let b = resize_bounds(ResizeAnchor::Sw, start(), d(-10.0, 10.0), false, 20.0);
    assert_eq!(b, Bounds::new(90.0, 100.0, 110.0, 60.0));
}

#[test]
fn edge_handles_move_one_side_only() {
    assert_eq!(resize_bounds(ResizeAnchor::N, start(), d(99.0, -10.0), false, 20.0), Bounds::new(100.0, 90.0, 100.0, 60.0));
    assert_eq!(resize_bounds(ResizeAnchor::S, start(), d(99.0, 10.0), false, 20.0), Bounds::new(100.0, 100.0, 100.0, 60.0));
    assert_eq!(resize_bounds(ResizeAnchor::E, start(), d(10.0, 99.0), false, 20.0), Bounds::new(100.0, 100.0, 110.0, 50.0));
    assert_eq!(resize_bounds(ResizeAnchor::W, start(), d(-10.0, 99.0), false, 20.0), Bounds::new(90.0, 100.0, 110.0, 50.0));
}

#[test]
fn circle_east_handle_without_lock() {
    let circle = Bounds::new(0.0, 0.0, 100.0, 100.0);
    let b = resize_bounds(ResizeAnchor::E, circle, d(150.0, 3.0), false, 20.0);
    assert_eq!((b.width, b.height), (250.0, 100.0));
}

// =============================================================
// Resize: aspect lock
// =============================================================

#[test]
fn se_lock_width_dominant_derives_height() {
    let b = resize_bounds(ResizeAnchor::Se, start(), d(40.0, 5.0), true, 20.0);
    assert_eq!(b.width, 140.0);
    assert_eq!(b.height, 70.0);
    assert_eq!(b.height, b.width / 2.0);
}

#[test]
fn se_lock_height_dominant_derives_width() {
    let b = resize_bounds(ResizeAnchor::Se, start(), d(5.0, 30.0), true, 20.0);
    assert_eq!((b.width, b.height), (160.0, 80.0));
}

#[test]
fn nw_lock_keeps_opposite_corner() {
    let b = resize_bounds(ResizeAnchor::Nw, start(), d(-40.0, -2.0), true, 20.0);
    assert_eq!((b.width, b.height), (140.0, 70.0));
    assert_eq!(b.x + b.width, 200.0);
    assert_eq!(b.y + b.height, 150.0);

    let b = resize_bounds(ResizeAnchor::Nw, start(), d(-2.0, -25.0), true, 20.0);
    assert_eq!((b.width, b.height), (150.0, 75.0));
    assert_eq!(b.x + b.width, 200.0);
    assert_eq!(b.y + b.height, 150.0);
}

#[test]
fn ne_lock_keeps_bottom_left() {
    let b = resize_bounds(ResizeAnchor::Ne, start(), d(40.0, 0.0), true, 20.0);
    assert_eq!((b.x, b.width, b.height), (100.0, 140.0, 70.0));
    assert_eq!(b.y + b.height, 150.0);
}

#[test]
fn sw_lock_keeps_top_right() {
    let b = resize_bounds(ResizeAnchor::Sw, start(), d(0.0, 25.0), true, 20.0);
    assert_eq!((b.y, b.width, b.height), (100.0, 150.0, 75.0));
    assert_eq!(b.x + b.width, 200.0);
}

#[test]
fn top_edge_lock_preserves_horizontal_center() {
    let b = resize_bounds(ResizeAnchor::N, start(), d(0.0, -50.0), true, 20.0);
    assert_eq!((b.width, b.height), (200.0, 100.0));
    assert_eq!(b.center().x, start().center().x);
    assert_eq!(b.y + b.height, 150.0);
}

#[test]
fn east_edge_lock_preserves_vertical_center() {
    let b = resize_bounds(ResizeAnchor::E, start(), d(100.0, 0.0), true, 20.0);
    assert_eq!((b.width, b.height), (200.0, 100.0));
    assert_eq!(b.center().y, start().center().y);
    assert_eq!(b.x, 100.0);
}

#[test]
fn lock_is_skipped_for_degenerate_start() {
    let flat = Bounds::new(0.0, 0.0, 100.0, 0.0);
    let b = resize_bounds(ResizeAnchor::Se, flat, d(40.0, 5.0), true, 0.0);
    assert_eq!((b.width, b.height), (140.0, 5.0));
}

// =============================================================
// Resize: floor
// =============================================================

#[test]
fn floor_applies_when_delta_inverts_box() {
    let b = resize_bounds(ResizeAnchor::Se, start(), d(-500.0, -500.0), false, 20.0);
    assert_eq!((b.width, b.height), (20.0, 20.0));
}

#[test]
fn floor_does_not_reanchor_origin() {
    let b = resize_bounds(ResizeAnchor::Nw, start(), d(500.0, 500.0), false, 20.0);
    assert_eq!((b.width, b.height), (20.0, 20.0));
    assert_eq!((b.x, b.y), (600.0, 600.0));
}

proptest! {
    #[test]
    fn resize_never_goes_below_floor(
        anchor_idx in 0usize..8,
        dx in -5000.0..5000.0f64,
        dy in -5000.0..5000.0f64,
        lock in any::<bool>(),
        w in 1.0..500.0f64,
        h in 1.0..500.0f64,
    ) {
        let anchor = ResizeAnchor::ALL[anchor_idx];
        let b = resize_bounds(anchor, Bounds::new(10.0, 10.0, w, h), Point::new(dx, dy), lock, 20.0);
        prop_assert!(b.width >= 20.0);
        prop_assert!(b.height >= 20.0);
    }
}

// =============================================================
// Rotate / skew / clamp
// =============================================================

#[test]
fn rotation_follows_pointer_angle() {
    let r = rotation_from_pointer(d(0.0, 0.0), d(10.0, 0.0), d(0.0, 10.0), 0.0);
    assert!(approx_eq(r, 90.0));
}

#[test]
fn rotation_is_relative_to_start() {
    let r = rotation_from_pointer(d(50.0, 50.0), d(50.0, 0.0), d(100.0, 50.0), 30.0);
    assert!(approx_eq(r, 120.0));
}

#[test]
fn snap_rounds_to_nearest_step() {
    assert_eq!(snap_rotation(37.0, 15.0), 30.0);
    assert_eq!(snap_rotation(38.0, 15.0), 45.0);
    assert_eq!(snap_rotation(-7.4, 15.0), 0.0);
    assert_eq!(snap_rotation(37.0, 0.0), 37.0);
}

proptest! {
    #[test]
    fn snapped_rotation_is_multiple_of_fifteen(r in -10_000.0..10_000.0f64) {
        let snapped = snap_rotation(r, 15.0);
        prop_assert_eq!(snapped % 15.0, 0.0);
        prop_assert!((snapped - r).abs() <= 7.5 + 1e-9);
    }

    #[test]
    fn clamp_stays_in_extent(v in -1e6..1e6f64) {
        let c = clamp_coord(v, 2000.0);
        prop_assert!((0.0..=2000.0).contains(&c));
    }
}

#[test]
fn skew_is_ten_pixels_per_degree() {
    assert_eq!(skew_delta(25.0, 10.0), 2.5);
    assert_eq!(skew_delta(-30.0, 10.0), -3.0);
    assert_eq!(skew_delta(30.0, 0.0), 0.0);
}

#[test]
fn clamp_coord_bounds() {
    assert_eq!(clamp_coord(-50.0, 2000.0), 0.0);
    assert_eq!(clamp_coord(5000.0, 2000.0), 2000.0);
    assert_eq!(clamp_coord(640.0, 2000.0), 640.0);
}

#[test]
fn normalize_degrees_wraps() {
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(720.0), 0.0);
    assert_eq!(normalize_degrees(359.5), 359.5);
    assert_eq!(normalize_degrees(-1e-20), 0.0);
}

#[test]
fn css_transform_orders_rotate_before_skew() {
    assert_eq!(css_transform(45.0, 10.0, 0.0), "rotate(45deg) skew(10deg, 0deg)");
}

// =============================================================
// Affine
// =============================================================

#[test]
fn rotation_about_center_is_clockwise() {
    let m = Affine::for_bounds(Bounds::new(0.0, 0.0, 100.0, 100.0), 90.0, 0.0, 0.0);
    assert!(point_approx_eq(m.apply(d(100.0, 50.0)), d(50.0, 100.0)));
    assert!(point_approx_eq(m.apply(d(50.0, 50.0)), d(50.0, 50.0)));
}

#[test]
fn skew_x_shears_along_x() {
    let m = Affine::skew(45.0, 0.0);
    assert!(point_approx_eq(m.apply(d(0.0, 10.0)), d(10.0, 10.0)));
}

#[test]
fn skew_is_applied_before_rotation() {
    let center = d(0.0, 0.0);
    let m = Affine::about_center(center, 90.0, 45.0, 0.0);
    // skew (0,10) -> (10,10), then rotate 90° -> (-10,10)
    assert!(point_approx_eq(m.apply(d(0.0, 10.0)), d(-10.0, 10.0)));
}

#[test]
fn invert_round_trips() {
    let m = Affine::for_bounds(Bounds::new(30.0, 40.0, 120.0, 60.0), 33.0, 12.0, -7.0);
    let inv = m.invert().unwrap();
    let p = d(77.0, -12.5);
    assert!(point_approx_eq(inv.apply(m.apply(p)), p));
}

#[test]
fn singular_matrix_has_no_inverse() {
    assert!(Affine::skew(45.0, 45.0).invert().is_none());
}

#[test]
fn identity_svg() {
    assert!(Affine::default().is_identity());
    assert_eq!(Affine::IDENTITY.to_svg(), "matrix(1 0 0 1 0 0)");
    assert_eq!(Affine::translate(5.0, -2.5).to_svg(), "matrix(1 0 0 1 5 -2.5)");
}
