#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::catalog::ShapeType;

fn element() -> Element {
    let mut el = Element::shape(ShapeType::Hexagon, Bounds::new(10.0, 20.0, 100.0, 80.0));
    el.rotation = 30.0;
    el.skew_x = 5.0;
    el
}

// =============================================================
// Modifiers / keys
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
    assert!(!m.precision());
    assert!(!m.command());
}

#[test]
fn precision_is_shift() {
    assert!(Modifiers { shift: true, ..Modifiers::default() }.precision());
    assert!(!Modifiers { alt: true, ..Modifiers::default() }.precision());
}

#[test]
fn command_is_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Modifiers::default() }.command());
    assert!(Modifiers { meta: true, ..Modifiers::default() }.command());
}

#[test]
fn modifiers_deserialize_partial() {
    let m: Modifiers = serde_json::from_str(r#"{"shift": true}"#).unwrap();
    assert!(m.shift);
    assert!(!m.ctrl);
}

#[test]
fn key_name() {
    assert_eq!(Key("Escape".into()).name(), "Escape");
}

// =============================================================
// Preview
// =============================================================

#[test]
fn preview_round_trips_geometry() {
    let el = element();
    let p = Preview::of(&el);
    assert_eq!(p.bounds, el.bounds());
    assert_eq!(p.rotation, 30.0);

    let mut other = Element::shape(ShapeType::Circle, Bounds::default());
    p.apply_to(&mut other);
    assert_eq!(other.bounds(), el.bounds());
    assert_eq!(other.skew_x, 5.0);
}

#[test]
fn partial_per_mode_touches_only_its_fields() {
    let p = Preview::of(&element());

    let resize = p.to_partial(TransformMode::Resize);
    assert_eq!(resize.width, Some(100.0));
    assert!(resize.rotation.is_none());

    let rotate = p.to_partial(TransformMode::Rotate);
    assert_eq!(rotate.rotation, Some(30.0));
    assert!(rotate.x.is_none() && rotate.width.is_none());

    let skew = p.to_partial(TransformMode::Skew);
    assert_eq!((skew.skew_x, skew.skew_y), (Some(5.0), Some(0.0)));

    let drag = p.to_partial(TransformMode::Drag);
    assert_eq!((drag.x, drag.y), (Some(10.0), Some(20.0)));
    assert!(!drag.changes_size());
}

// =============================================================
// TransformSession
// =============================================================

#[test]
fn default_session_is_idle() {
    let s = TransformSession::default();
    assert!(s.is_idle());
    assert!(s.mode().is_none());
    assert!(s.element_id().is_none());
    assert!(s.preview().is_none());
}

#[test]
fn session_starts_with_preview_equal_to_origin() {
    let el = element();
    let session = Session::new(el.id, Preview::of(&el), DragContext { start_pointer: Point::new(0.0, 0.0) });
    assert_eq!(session.origin, session.preview);
}

#[test]
fn session_accessors() {
    let id = Uuid::new_v4();
    let origin = Preview::of(&element());
    let s = TransformSession::Rotating(Session::new(
        id,
        origin,
        RotateContext { center_screen: Point::new(60.0, 60.0), start_pointer: Point::new(60.0, 0.0) },
    ));
    assert!(!s.is_idle());
    assert_eq!(s.mode(), Some(TransformMode::Rotate));
    assert_eq!(s.element_id(), Some(id));
    assert_eq!(s.origin(), Some(origin));
}

#[test]
fn each_variant_reports_its_mode() {
    let id = Uuid::new_v4();
    let origin = Preview::of(&element());
    let p = Point::new(0.0, 0.0);
    let cases = [
        (
            TransformSession::Resizing(Session::new(id, origin, ResizeContext { anchor: ResizeAnchor::Se, start_pointer: p })),
            TransformMode::Resize,
        ),
        (
            TransformSession::Skewing(Session::new(id, origin, SkewContext { axis: SkewAxis::X, start_pointer: p })),
            TransformMode::Skew,
        ),
        (TransformSession::Dragging(Session::new(id, origin, DragContext { start_pointer: p })), TransformMode::Drag),
    ];
    for (session, mode) in cases {
        assert_eq!(session.mode(), Some(mode));
    }
}
