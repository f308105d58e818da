//! Transform math: resize, rotate, skew, clamp, and the element affine.
//!
//! Pure functions only. The session state machine in [`crate::engine`] feeds
//! pointer deltas in and writes the results to its working copy.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::doc::Bounds;
use crate::hit::ResizeAnchor;
use crate::viewport::Point;

// =============================================================
// Resize
// =============================================================

/// New box for dragging `anchor` by `delta` (slide units) from `start`.
///
/// Corner handles keep the opposite corner fixed; edge handles keep the
/// opposite edge fixed. With `lock_aspect`, the side whose delta is smaller in
/// magnitude is derived from the other through the start ratio and the origin
/// is re-anchored so the fixed corner or edge centre stays put. The lock is
/// skipped when the start box has no usable ratio. `min_size` is applied last.
#[must_use]
pub fn resize_bounds(anchor: ResizeAnchor, start: Bounds, delta: Point, lock_aspect: bool, min_size: f64) -> Bounds {
    let Bounds { x: sx, y: sy, width: sw, height: sh } = start;
    let (dx, dy) = (delta.x, delta.y);
    let center = start.center();
    let ratio = if lock_aspect { start.aspect_ratio() } else { None };
    let x_dominant = dx.abs() > dy.abs();

    let mut b = start;
    match anchor {
        ResizeAnchor::Nw => {
            b.width = sw - dx;
            b.height = sh - dy;
            b.x = sx + dx;
            b.y = sy + dy;
            if let Some(ar) = ratio {
                if x_dominant {
                    b.height = b.width / ar;
                    b.y = sy + (sh - b.height);
                } else {
                    b.width = b.height * ar;
                    b.x = sx + (sw - b.width);
                }
            }
        }
        ResizeAnchor::N => {
            b.height = sh - dy;
            b.y = sy + dy;
            if let Some(ar) = ratio {
                b.width = b.height * ar;
                b.x = center.x - b.width / 2.0;
            }
        }
        ResizeAnchor::Ne => {
            b.width = sw + dx;
            b.height = sh - dy;
            b.y = sy + dy;
            if let Some(ar) = ratio {
                if x_dominant {
                    b.height = b.width / ar;
                    b.y = sy + (sh - b.height);
                } else {
                    b.width = b.height * ar;
                }
            }
        }
        ResizeAnchor::E => {
            b.width = sw + dx;
            if let Some(ar) = ratio {
                b.height = b.width / ar;
                b.y = center.y - b.height / 2.0;
            }
        }
        ResizeAnchor::Se => {
            b.width = sw + dx;
            b.height = sh + dy;
            if let Some(ar) = ratio {
                if x_dominant {
                    b.height = b.width / ar;
                } else {
                    b.width = b.height * ar;
                }
            }
        }
        ResizeAnchor::S => {
            b.height = sh + dy;
            if let Some(ar) = ratio {
                b.width = b.height * ar;
                b.x = center.x - b.width / 2.0;
            }
        }
        ResizeAnchor::Sw => {
            b.width = sw - dx;
            b.height = sh + dy;
            b.x = sx + dx;
            if let Some(ar) = ratio {
                if x_dominant {
                    b.height = b.width / ar;
                } else {
                    b.width = b.height * ar;
                    b.x = sx + (sw - b.width);
                }
            }
        }
        ResizeAnchor::W => {
            b.width = sw - dx;
            b.x = sx + dx;
            if let Some(ar) = ratio {
                b.height = b.width / ar;
                b.y = center.y - b.height / 2.0;
            }
        }
    }

    b.width = b.width.max(min_size);
    b.height = b.height.max(min_size);
    b
}

// =============================================================
// Rotate / skew / clamp
// =============================================================

/// Angle in radians from `center` to `p`.
#[must_use]
pub fn angle_to(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Rotation after the pointer moved from `initial` to `current` around `center`.
#[must_use]
pub fn rotation_from_pointer(center: Point, initial: Point, current: Point, start_rotation: f64) -> f64 {
    start_rotation + (angle_to(center, current) - angle_to(center, initial)).to_degrees()
}

/// Snap to the nearest multiple of `step` degrees. A non-positive step disables snapping.
#[must_use]
pub fn snap_rotation(degrees: f64, step: f64) -> f64 {
    if step > 0.0 { (degrees / step).round() * step } else { degrees }
}

/// Degrees of skew for a pointer travel of `delta_px` screen pixels.
#[must_use]
pub fn skew_delta(delta_px: f64, px_per_degree: f64) -> f64 {
    if px_per_degree > 0.0 { delta_px / px_per_degree } else { 0.0 }
}

/// Clamp a coordinate into `[0, extent]`. Never panics on odd extents.
#[must_use]
pub fn clamp_coord(v: f64, extent: f64) -> f64 {
    v.min(extent).max(0.0)
}

/// Degrees reduced into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// CSS `transform` value for an element view (origin at its centre).
#[must_use]
pub fn css_transform(rotation: f64, skew_x: f64, skew_y: f64) -> String {
    format!("rotate({rotation}deg) skew({skew_x}deg, {skew_y}deg)")
}

// =============================================================
// Affine
// =============================================================

/// 2-D affine matrix in SVG order: `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[must_use]
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self { e: tx, f: ty, ..Self::IDENTITY }
    }

    /// Clockwise rotation on screen (y axis down).
    #[must_use]
    pub fn rotate(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// Skew by angles in degrees, as CSS `skew(x, y)`.
    #[must_use]
    pub fn skew(x_degrees: f64, y_degrees: f64) -> Self {
        Self { b: y_degrees.to_radians().tan(), c: x_degrees.to_radians().tan(), ..Self::IDENTITY }
    }

    /// `self · other`: `other` is applied first.
    #[must_use]
    pub fn multiply(self, other: Affine) -> Affine {
        Affine {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Skew, then rotate, both about `center`.
    #[must_use]
    pub fn about_center(center: Point, rotation: f64, skew_x: f64, skew_y: f64) -> Self {
        Self::translate(center.x, center.y)
            .multiply(Self::rotate(rotation))
            .multiply(Self::skew(skew_x, skew_y))
            .multiply(Self::translate(-center.x, -center.y))
    }

    /// The element's slide-space transform.
    #[must_use]
    pub fn for_bounds(bounds: Bounds, rotation: f64, skew_x: f64, skew_y: f64) -> Self {
        Self::about_center(bounds.center(), rotation, skew_x, skew_y)
    }

    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }

    /// Inverse transform, or `None` when the matrix is singular (e.g. 90° skew).
    #[must_use]
    pub fn invert(&self) -> Option<Affine> {
        let det = self.a * self.d - self.b * self.c;
        if !det.is_finite() || det.abs() < 1e-12 {
            return None;
        }
        Some(Affine {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// SVG `transform` attribute value.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let r = |v: f64| {
            let v = (v * 1e6).round() / 1e6;
            if v == 0.0 { 0.0 } else { v }
        };
        format!("matrix({} {} {} {} {} {})", r(self.a), r(self.b), r(self.c), r(self.d), r(self.e), r(self.f))
    }
}
