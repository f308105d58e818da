//! Path descriptions: resolution-independent outlines in a shape's local box.
//!
//! A [`PathDescription`] wraps a `lyon` path whose coordinates live in the
//! local space `[0, width] × [0, height]`. It serializes to an SVG `d`
//! attribute for the renderer and exposes its points for hit-testing and
//! inspection. [`PathBuilder`] is the only way the geometry library produces
//! one; it maps either absolute or unit-box coordinates into the local space
//! and feeds lyon's SVG-style builder, which flattens elliptical arcs into
//! Bezier segments.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use std::fmt::{self, Write as _};

use lyon::algorithms::aabb::bounding_box;
use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::{Angle, point, vector};
use lyon::path::builder::{SvgPathBuilder, WithSvg};
use lyon::path::path::BuilderImpl;
use lyon::path::{ArcFlags, FillRule, Path, PathEvent};
use serde::{Deserialize, Serialize};

use crate::doc::Bounds;
use crate::viewport::Point;

/// Flattening tolerance for containment tests, in local units.
const HIT_TOLERANCE: f32 = 0.1;

#[allow(clippy::cast_possible_truncation)]
fn to_lyon(p: Point) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

fn from_lyon(p: lyon::math::Point) -> Point {
    Point::new(f64::from(p.x), f64::from(p.y))
}

/// A complete outline: one or more subpaths.
#[derive(Clone, Serialize, Deserialize)]
pub struct PathDescription {
    path: Path,
}

impl Default for PathDescription {
    fn default() -> Self {
        Self { path: Path::new() }
    }
}

impl PartialEq for PathDescription {
    fn eq(&self, other: &Self) -> bool {
        self.path.iter().eq(other.path.iter())
    }
}

impl fmt::Debug for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathDescription").field(&self.to_svg_d()).finish()
    }
}

impl PathDescription {
    /// Drawing events in order.
    pub fn events(&self) -> impl Iterator<Item = PathEvent> + '_ {
        self.path.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.iter().next().is_none()
    }

    /// Polygon corners: subpath starts and line-segment ends, in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.events()
            .filter_map(|e| match e {
                PathEvent::Begin { at } => Some(from_lyon(at)),
                PathEvent::Line { to, .. } => Some(from_lyon(to)),
                _ => None,
            })
            .collect()
    }

    /// Every on-curve point, including curve end points.
    #[must_use]
    pub fn end_points(&self) -> Vec<Point> {
        self.events()
            .filter_map(|e| match e {
                PathEvent::Begin { at } => Some(from_lyon(at)),
                PathEvent::Line { to, .. } | PathEvent::Quadratic { to, .. } | PathEvent::Cubic { to, .. } => {
                    Some(from_lyon(to))
                }
                PathEvent::End { .. } => None,
            })
            .collect()
    }

    /// Every point the path references, control points included.
    #[must_use]
    pub fn all_points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        for e in self.events() {
            match e {
                PathEvent::Begin { at } => out.push(from_lyon(at)),
                PathEvent::Line { to, .. } => out.push(from_lyon(to)),
                PathEvent::Quadratic { ctrl, to, .. } => out.extend([from_lyon(ctrl), from_lyon(to)]),
                PathEvent::Cubic { ctrl1, ctrl2, to, .. } => {
                    out.extend([from_lyon(ctrl1), from_lyon(ctrl2), from_lyon(to)]);
                }
                PathEvent::End { .. } => {}
            }
        }
        out
    }

    #[must_use]
    pub fn subpath_count(&self) -> usize {
        self.events().filter(|e| matches!(e, PathEvent::Begin { .. })).count()
    }

    /// Whether every subpath is closed. Open outlines are stroked, not filled.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut any = false;
        for e in self.events() {
            if let PathEvent::End { close, .. } = e {
                if !close {
                    return false;
                }
                any = true;
            }
        }
        any
    }

    /// Tight axis-aligned box around the curves, or `None` for an empty path.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        if self.is_empty() {
            return None;
        }
        let b = bounding_box(self.path.iter());
        let (min, max) = (from_lyon(b.min), from_lyon(b.max));
        Some(Bounds::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// Whether a local-space point lies inside the filled outline (non-zero rule).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        hit_test_path(&to_lyon(p), self.path.iter(), FillRule::NonZero, HIT_TOLERANCE)
    }

    /// Serialize to an SVG path `d` attribute.
    #[must_use]
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for e in self.events() {
            match e {
                PathEvent::Begin { at } => {
                    sep(&mut d);
                    d.push('M');
                    push_point(&mut d, at);
                }
                PathEvent::Line { to, .. } => {
                    sep(&mut d);
                    d.push('L');
                    push_point(&mut d, to);
                }
                PathEvent::Quadratic { ctrl, to, .. } => {
                    sep(&mut d);
                    d.push('Q');
                    push_point(&mut d, ctrl);
                    d.push(' ');
                    push_point(&mut d, to);
                }
                PathEvent::Cubic { ctrl1, ctrl2, to, .. } => {
                    sep(&mut d);
                    d.push('C');
                    push_point(&mut d, ctrl1);
                    d.push(' ');
                    push_point(&mut d, ctrl2);
                    d.push(' ');
                    push_point(&mut d, to);
                }
                PathEvent::End { close: true, .. } => {
                    sep(&mut d);
                    d.push('Z');
                }
                PathEvent::End { close: false, .. } => {}
            }
        }
        d
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros.
#[must_use]
pub fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut s = String::new();
    if write!(s, "{rounded:.3}").is_err() {
        return "0".to_owned();
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_owned()
}

fn sep(d: &mut String) {
    if !d.is_empty() {
        d.push(' ');
    }
}

fn push_point(d: &mut String, p: lyon::math::Point) {
    let p = from_lyon(p);
    d.push_str(&fmt_num(p.x));
    d.push(',');
    d.push_str(&fmt_num(p.y));
}

/// Builds a [`PathDescription`], mapping input coordinates into the local box.
///
/// In unit mode (`PathBuilder::unit`) coordinates and radii are fractions of
/// the box, so a template written once against a 1×1 box scales to any size.
pub struct PathBuilder {
    origin: Point,
    sx: f64,
    sy: f64,
    inner: WithSvg<BuilderImpl>,
}

impl PathBuilder {
    /// Coordinates are used as given.
    #[must_use]
    pub fn absolute() -> Self {
        Self::mapped(Point::new(0.0, 0.0), 1.0, 1.0)
    }

    /// Coordinates are fractions of a `width × height` box at the origin.
    #[must_use]
    pub fn unit(width: f64, height: f64) -> Self {
        Self::mapped(Point::new(0.0, 0.0), width, height)
    }

    /// Coordinates are fractions of a `width × height` box whose top-left is `origin`.
    #[must_use]
    pub fn mapped(origin: Point, width: f64, height: f64) -> Self {
        Self { origin, sx: width, sy: height, inner: Path::builder().with_svg() }
    }

    fn map(&self, x: f64, y: f64) -> lyon::math::Point {
        to_lyon(Point::new(self.origin.x + x * self.sx, self.origin.y + y * self.sy))
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let p = self.map(x, y);
        self.inner.move_to(p);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let p = self.map(x, y);
        self.inner.line_to(p);
        self
    }

    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        let (ctrl, to) = (self.map(cx, cy), self.map(x, y));
        self.inner.quadratic_bezier_to(ctrl, to);
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> &mut Self {
        let (ctrl1, ctrl2, to) = (self.map(c1x, c1y), self.map(c2x, c2y), self.map(x, y));
        self.inner.cubic_bezier_to(ctrl1, ctrl2, to);
        self
    }

    /// Elliptical arc with unrotated axes (SVG `A` semantics). Radii are
    /// mapped like coordinates; zero radii degrade to a straight segment.
    #[allow(clippy::cast_possible_truncation)]
    pub fn arc_to(&mut self, rx: f64, ry: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> &mut Self {
        let to = self.map(x, y);
        let radii = vector((rx * self.sx) as f32, (ry * self.sy) as f32);
        self.inner.arc_to(radii, Angle::zero(), ArcFlags { large_arc, sweep }, to);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.inner.close();
        self
    }

    /// Closed polygon through `points`.
    pub fn polygon(&mut self, points: &[(f64, f64)]) -> &mut Self {
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            self.move_to(x, y);
            for &(x, y) in iter {
                self.line_to(x, y);
            }
            self.close();
        }
        self
    }

    /// Closed ellipse inscribed in the box `(x, y, w, h)` as two mirrored arcs.
    pub fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) -> &mut Self {
        let (rx, ry) = (w / 2.0, h / 2.0);
        self.move_to(x, y + ry)
            .arc_to(rx, ry, false, true, x + w, y + ry)
            .arc_to(rx, ry, false, true, x, y + ry)
            .close()
    }

    /// Append an already-built path, such as a callout tail, unmapped.
    pub fn append(&mut self, other: &PathDescription) -> &mut Self {
        for e in other.events() {
            match e {
                PathEvent::Begin { at } => {
                    self.inner.move_to(at);
                }
                PathEvent::Line { to, .. } => {
                    self.inner.line_to(to);
                }
                PathEvent::Quadratic { ctrl, to, .. } => {
                    self.inner.quadratic_bezier_to(ctrl, to);
                }
                PathEvent::Cubic { ctrl1, ctrl2, to, .. } => {
                    self.inner.cubic_bezier_to(ctrl1, ctrl2, to);
                }
                PathEvent::End { close: true, .. } => {
                    self.inner.close();
                }
                PathEvent::End { close: false, .. } => {}
            }
        }
        self
    }

    #[must_use]
    pub fn build(self) -> PathDescription {
        PathDescription { path: self.inner.build() }
    }
}
