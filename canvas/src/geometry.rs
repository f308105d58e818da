//! Geometry library: shape kind + box size → outline.
//!
//! [`synthesize_path`] is pure and deterministic. It dispatches on the kind's
//! [`ShapeFamily`] and each family owns one construction. Every outline lives
//! in the local box `[0, w] × [0, h]`; shapes stretch non-uniformly with the
//! box. Negative or non-finite sizes are treated as zero, and a zero dimension
//! collapses the outline onto a line or point instead of failing.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::catalog::{ShapeFamily, ShapeType};
use crate::consts::{CALLOUT_BODY_RATIO, CORNER_RADIUS_RATIO, FRAC_PI_5, STAR_INNER_RATIO};
use crate::path::{PathBuilder, PathDescription};

/// Build the outline of `shape` for a `width × height` box.
#[must_use]
pub fn synthesize_path(shape: ShapeType, width: f64, height: f64) -> PathDescription {
    let w = sanitize(width);
    let h = sanitize(height);
    match shape.family() {
        ShapeFamily::Rectangular => rectangular(shape, w, h),
        ShapeFamily::RegularPolygon(n) => regular_polygon(n, w, h),
        ShapeFamily::Star => star(w, h),
        ShapeFamily::Elliptical => ellipse(w, h),
        ShapeFamily::Polygonal => polygonal(shape, w, h),
        ShapeFamily::Directional => directional(shape, w, h),
        ShapeFamily::Stroke => stroke(shape, w, h),
        ShapeFamily::Freeform => freeform(shape, w, h),
        ShapeFamily::Callout => callout(shape, w, h),
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

// =============================================================
// Rectangular
// =============================================================

fn rectangular(shape: ShapeType, w: f64, h: f64) -> PathDescription {
    match shape {
        ShapeType::RoundedRectangle => rounded_rect(w, h),
        ShapeType::Card => card(w, h),
        ShapeType::Document => document(w, h),
        ShapeType::PredefinedProcess => predefined_process(w, h),
        _ => rect(w, h),
    }
}

fn rect(w: f64, h: f64) -> PathDescription {
    let mut b = PathBuilder::unit(w, h);
    b.polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    b.build()
}

fn rounded_rect(w: f64, h: f64) -> PathDescription {
    let r = w.min(h) * CORNER_RADIUS_RATIO;
    let mut b = PathBuilder::absolute();
    b.move_to(r, 0.0)
        .line_to(w - r, 0.0)
        .arc_to(r, r, false, true, w, r)
        .line_to(w, h - r)
        .arc_to(r, r, false, true, w - r, h)
        .line_to(r, h)
        .arc_to(r, r, false, true, 0.0, h - r)
        .line_to(0.0, r)
        .arc_to(r, r, false, true, r, 0.0)
        .close();
    b.build()
}

fn card(w: f64, h: f64) -> PathDescription {
    let cut = w.min(h) * CORNER_RADIUS_RATIO * 2.0;
    let mut b = PathBuilder::absolute();
    b.polygon(&[(cut, 0.0), (w, 0.0), (w, h), (0.0, h), (0.0, cut)]);
    b.build()
}

fn document(w: f64, h: f64) -> PathDescription {
    let mut b = PathBuilder::unit(w, h);
    b.move_to(0.0, 0.0)
        .line_to(1.0, 0.0)
        .line_to(1.0, 0.85)
        .cubic_to(0.75, 0.7, 0.25, 1.0, 0.0, 0.85)
        .close();
    b.build()
}

fn predefined_process(w: f64, h: f64) -> PathDescription {
    let mut b = PathBuilder::unit(w, h);
    b.polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    // Inner bars as degenerate closed subpaths so the outline stays fillable.
    for x in [0.1, 0.9] {
        b.move_to(x, 0.0).line_to(x, 1.0).close();
    }
    b.build()
}

// =============================================================
// Regular polygons and star
// =============================================================

/// Vertex `i` of `n` sits at `θ = i·2π/n − π/2`, so the first points straight up.
fn regular_polygon(n: u32, w: f64, h: f64) -> PathDescription {
    let (cx, cy) = (w / 2.0, h / 2.0);
    let step = TAU / f64::from(n.max(3));
    let points: Vec<(f64, f64)> = (0..n.max(3))
        .map(|i| {
            let theta = f64::from(i) * step - FRAC_PI_2;
            (cx + cx * theta.cos(), cy + cy * theta.sin())
        })
        .collect();
    let mut b = PathBuilder::absolute();
    b.polygon(&points);
    b.build()
}

fn star(w: f64, h: f64) -> PathDescription {
    let (cx, cy) = (w / 2.0, h / 2.0);
    let outer = w.min(h) / 2.0;
    let inner = outer * STAR_INNER_RATIO;
    let points: Vec<(f64, f64)> = (0..10u32)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let theta = f64::from(i) * FRAC_PI_5 - FRAC_PI_2;
            (cx + r * theta.cos(), cy + r * theta.sin())
        })
        .collect();
    let mut b = PathBuilder::absolute();
    b.polygon(&points);
    b.build()
}

fn ellipse(w: f64, h: f64) -> PathDescription {
    let mut b = PathBuilder::absolute();
    b.ellipse(0.0, 0.0, w, h);
    b.build()
}

// =============================================================
// Fixed polygons
// =============================================================

fn polygonal(shape: ShapeType, w: f64, h: f64) -> PathDescription {
    let points: &[(f64, f64)] = match shape {
        ShapeType::Diamond | ShapeType::Decision => &[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5)],
        ShapeType::Trapezoid => &[(0.2, 0.0), (0.8, 0.0), (1.0, 1.0), (0.0, 1.0)],
        ShapeType::Data => &[(0.25, 0.0), (1.0, 0.0), (0.75, 1.0), (0.0, 1.0)],
        ShapeType::Cross => &[
            (0.3, 0.0),
            (0.7, 0.0),
            (0.7, 0.3),
            (1.0, 0.3),
            (1.0, 0.7),
            (0.7, 0.7),
            (0.7, 1.0),
            (0.3, 1.0),
            (0.3, 0.7),
            (0.0, 0.7),
            (0.0, 0.3),
            (0.3, 0.3),
        ],
        _ => return rect(w, h),
    };
    let mut b = PathBuilder::unit(w, h);
    b.polygon(points);
    b.build()
}

// =============================================================
// Arrows
// =============================================================

fn directional(shape: ShapeType, w: f64, h: f64) -> PathDescription {
    let mut b = PathBuilder::unit(w, h);
    match shape {
        ShapeType::Arrow => {
            b.polygon(&[(0.0, 0.25), (0.7, 0.25), (0.7, 0.0), (1.0, 0.5), (0.7, 1.0), (0.7, 0.75), (0.0, 0.75)]);
        }
        ShapeType::ArrowLeft => {
            b.polygon(&[(1.0, 0.25), (0.3, 0.25), (0.3, 0.0), (0.0, 0.5), (0.3, 1.0), (0.3, 0.75), (1.0, 0.75)]);
        }
        ShapeType::DoubleArrow => {
            b.polygon(&[
                (0.0, 0.5),
                (0.3, 0.0),
                (0.3, 0.25),
                (0.7, 0.25),
                (0.7, 0.0),
                (1.0, 0.5),
                (0.7, 1.0),
                (0.7, 0.75),
                (0.3, 0.75),
                (0.3, 1.0),
            ]);
        }
        ShapeType::CurvedArrow => {
            b.move_to(0.0, 1.0)
                .cubic_to(0.0, 0.45, 0.3, 0.3, 0.7, 0.3)
                .line_to(0.7, 0.1)
                .line_to(1.0, 0.45)
                .line_to(0.7, 0.8)
                .line_to(0.7, 0.6)
                .cubic_to(0.45, 0.6, 0.25, 0.7, 0.25, 1.0)
                .close();
        }
        ShapeType::CircularArrow => {
            b.move_to(0.5, 0.1)
                .arc_to(0.4, 0.4, true, true, 0.1, 0.5)
                .line_to(0.25, 0.5)
                .arc_to(0.25, 0.25, true, false, 0.5, 0.25)
                .line_to(0.5, 0.35)
                .line_to(0.3, 0.175)
                .line_to(0.5, 0.0)
                .close();
        }
        _ => return rect(w, h),
    }
    b.build()
}

// =============================================================
// Open strokes
// =============================================================

fn stroke(shape: ShapeType, w: f64, h: f64) -> PathDescription {
    let mut b = PathBuilder::unit(w, h);
    match shape {
        ShapeType::Line | ShapeType::DashedLine => {
            b.move_to(0.0, 0.5).line_to(1.0, 0.5);
        }
        ShapeType::CurvedLine => {
            b.move_to(0.0, 1.0).cubic_to(0.5, 1.0, 0.5, 0.0, 1.0, 0.0);
        }
        ShapeType::Connector => {
            b.move_to(0.0, 0.0).line_to(0.5, 0.0).line_to(0.5, 1.0).line_to(1.0, 1.0);
        }
        ShapeType::Brace => {
            b.move_to(1.0, 0.0)
                .quad_to(0.5, 0.0, 0.5, 0.1)
                .line_to(0.5, 0.4)
                .quad_to(0.5, 0.5, 0.0, 0.5)
                .quad_to(0.5, 0.5, 0.5, 0.6)
                .line_to(0.5, 0.9)
                .quad_to(0.5, 1.0, 1.0, 1.0);
        }
        ShapeType::Bracket => {
            b.move_to(1.0, 0.0)
                .quad_to(0.0, 0.0, 0.0, 0.1)
                .line_to(0.0, 0.9)
                .quad_to(0.0, 1.0, 1.0, 1.0);
        }
        _ => return rect(w, h),
    }
    b.build()
}

// =============================================================
// Freeform templates (authored on a 100 × 100 box)
// =============================================================

fn template(w: f64, h: f64) -> PathBuilder {
    PathBuilder::unit(w / 100.0, h / 100.0)
}

fn freeform(shape: ShapeType, w: f64, h: f64) -> PathDescription {
    match shape {
        ShapeType::Sun => return sun(w, h),
        ShapeType::Database => return database(w, h),
        _ => {}
    }
    let mut b = template(w, h);
    match shape {
        ShapeType::Heart => {
            b.move_to(50.0, 100.0)
                .cubic_to(20.0, 75.0, 0.0, 55.0, 0.0, 30.0)
                .cubic_to(0.0, 10.0, 15.0, 0.0, 30.0, 0.0)
                .cubic_to(42.0, 0.0, 50.0, 8.0, 50.0, 20.0)
                .cubic_to(50.0, 8.0, 58.0, 0.0, 70.0, 0.0)
                .cubic_to(85.0, 0.0, 100.0, 10.0, 100.0, 30.0)
                .cubic_to(100.0, 55.0, 80.0, 75.0, 50.0, 100.0)
                .close();
        }
        ShapeType::Cloud => cloud_outline(&mut b),
        ShapeType::Wave => {
            b.move_to(0.0, 15.0)
                .cubic_to(20.0, 0.0, 30.0, 0.0, 50.0, 15.0)
                .cubic_to(70.0, 30.0, 80.0, 30.0, 100.0, 15.0)
                .line_to(100.0, 85.0)
                .cubic_to(80.0, 100.0, 70.0, 100.0, 50.0, 85.0)
                .cubic_to(30.0, 70.0, 20.0, 70.0, 0.0, 85.0)
                .close();
        }
        ShapeType::Lightning => {
            b.polygon(&[
                (40.0, 0.0),
                (70.0, 0.0),
                (55.0, 35.0),
                (80.0, 35.0),
                (30.0, 100.0),
                (42.0, 55.0),
                (20.0, 55.0),
            ]);
        }
        ShapeType::Moon => {
            b.move_to(70.0, 0.0)
                .cubic_to(30.0, 5.0, 10.0, 30.0, 10.0, 50.0)
                .cubic_to(10.0, 75.0, 35.0, 100.0, 70.0, 100.0)
                .cubic_to(50.0, 85.0, 40.0, 70.0, 40.0, 50.0)
                .cubic_to(40.0, 30.0, 50.0, 15.0, 70.0, 0.0)
                .close();
        }
        ShapeType::Puzzle => {
            b.move_to(0.0, 20.0)
                .line_to(30.0, 20.0)
                .cubic_to(30.0, 0.0, 50.0, 0.0, 50.0, 20.0)
                .line_to(80.0, 20.0)
                .line_to(80.0, 50.0)
                .cubic_to(100.0, 50.0, 100.0, 70.0, 80.0, 70.0)
                .line_to(80.0, 100.0)
                .line_to(0.0, 100.0)
                .close();
        }
        _ => return rect(w, h),
    }
    b.build()
}

fn cloud_outline(b: &mut PathBuilder) {
    b.move_to(25.0, 80.0)
        .cubic_to(5.0, 80.0, 0.0, 60.0, 15.0, 50.0)
        .cubic_to(5.0, 35.0, 20.0, 15.0, 40.0, 22.0)
        .cubic_to(45.0, 5.0, 75.0, 5.0, 78.0, 22.0)
        .cubic_to(95.0, 18.0, 100.0, 40.0, 90.0, 52.0)
        .cubic_to(100.0, 65.0, 90.0, 82.0, 75.0, 80.0)
        .close();
}

/// Disc plus eight triangular rays.
fn sun(w: f64, h: f64) -> PathDescription {
    let mut b = PathBuilder::unit(w, h);
    b.ellipse(0.25, 0.25, 0.5, 0.5);
    let half_base = PI / 16.0;
    let at = |r: f64, a: f64| (0.5 + r * a.cos(), 0.5 + r * a.sin());
    for k in 0..8u32 {
        let a = f64::from(k) * PI / 4.0 - FRAC_PI_2;
        b.polygon(&[at(0.32, a - half_base), at(0.5, a), at(0.32, a + half_base)]);
    }
    b.build()
}

/// Cylinder: a closed top ellipse over a body with a rounded base.
fn database(w: f64, h: f64) -> PathDescription {
    let mut b = PathBuilder::unit(w, h);
    b.ellipse(0.0, 0.0, 1.0, 0.2);
    b.move_to(0.0, 0.1)
        .line_to(0.0, 0.9)
        .arc_to(0.5, 0.1, false, false, 1.0, 0.9)
        .line_to(1.0, 0.1)
        .arc_to(0.5, 0.1, false, true, 0.0, 0.1)
        .close();
    b.build()
}

// =============================================================
// Callouts
// =============================================================

fn callout(shape: ShapeType, w: f64, h: f64) -> PathDescription {
    let body_h = h * CALLOUT_BODY_RATIO;
    let mut b = match shape {
        ShapeType::RectangularCallout => {
            let mut b = PathBuilder::unit(w, body_h);
            b.polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
            b
        }
        ShapeType::OvalCallout => {
            let mut b = PathBuilder::absolute();
            b.ellipse(0.0, 0.0, w, body_h);
            b
        }
        ShapeType::CloudCallout | ShapeType::ThoughtBubble => {
            let mut b = template(w, body_h);
            cloud_outline(&mut b);
            b
        }
        _ => return rect(w, h),
    };

    let mut tail = PathBuilder::unit(w, h);
    if shape == ShapeType::ThoughtBubble {
        tail.ellipse(0.2, 0.8, 0.1, 0.08).ellipse(0.1, 0.92, 0.06, 0.06);
    } else {
        callout_tail(&mut tail);
    }
    b.append(&tail.build());
    b.build()
}

/// Triangular pointer hanging below the body, in unit coordinates of the full box.
fn callout_tail(b: &mut PathBuilder) {
    b.polygon(&[(0.25, 0.7), (0.15, 1.0), (0.4, 0.75)]);
}
