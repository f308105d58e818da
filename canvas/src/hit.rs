//! Selection affordances and hit-testing.
//!
//! The affordance policy decides which handles an element offers; handle
//! positions follow the element's rotation and skew; `hit_test` resolves a
//! screen point to a handle of the selected element or to the top-most body.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::doc::{Bounds, Element, ElementId, Slide};
use crate::input::SkewAxis;
use crate::transform::Affine;
use crate::viewport::{Point, Viewport};

/// Which part of an element was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "part", content = "handle", rename_all = "snake_case")]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
    RotateHandle,
    SkewHandle(SkewAxis),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// All eight anchors, clockwise from the top-left corner.
    pub const ALL: [ResizeAnchor; 8] = [Self::Nw, Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W];

    /// Handle position on an unrotated box.
    #[must_use]
    pub fn position(self, b: Bounds) -> Point {
        let (l, t, r, btm) = (b.x, b.y, b.x + b.width, b.y + b.height);
        let c = b.center();
        match self {
            Self::Nw => Point::new(l, t),
            Self::N => Point::new(c.x, t),
            Self::Ne => Point::new(r, t),
            Self::E => Point::new(r, c.y),
            Self::Se => Point::new(r, btm),
            Self::S => Point::new(c.x, btm),
            Self::Sw => Point::new(l, btm),
            Self::W => Point::new(l, c.y),
        }
    }

    /// CSS cursor shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N => "n-resize",
            Self::Ne => "ne-resize",
            Self::E => "e-resize",
            Self::Se => "se-resize",
            Self::S => "s-resize",
            Self::Sw => "sw-resize",
            Self::W => "w-resize",
            Self::Nw => "nw-resize",
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub element_id: ElementId,
    pub part: HitPart,
}

/// Handles offered for `element`.
///
/// Shapes listed in `config.resize_locked_shapes` get no resize or rotate
/// handles. Every shape gets both skew handles; text, image and chart
/// elements get resize and rotate handles but no skew.
#[must_use]
pub fn handles_for(element: &Element, config: &EngineConfig) -> Vec<HitPart> {
    let mut parts = Vec::with_capacity(11);
    let locked = element.kind.shape_type().is_some_and(|s| config.is_resize_locked(s));
    if !locked {
        parts.extend(ResizeAnchor::ALL.map(HitPart::ResizeHandle));
        parts.push(HitPart::RotateHandle);
    }
    if element.kind.is_shape() {
        parts.push(HitPart::SkewHandle(SkewAxis::X));
        parts.push(HitPart::SkewHandle(SkewAxis::Y));
    }
    parts
}

/// Slide-space positions of every handle `element` offers.
///
/// Offsets for the rotate and skew handles are screen-constant, so they are
/// scaled by the viewport zoom before the element transform is applied.
#[must_use]
pub fn handle_positions(element: &Element, viewport: &Viewport, config: &EngineConfig) -> Vec<(HitPart, Point)> {
    let b = element.bounds();
    let c = b.center();
    let rotate_off = viewport.screen_dist_to_slide(config.rotate_handle_offset_px);
    let skew_off = viewport.screen_dist_to_slide(config.skew_handle_offset_px);
    let m = Affine::for_bounds(b, element.rotation, element.skew_x, element.skew_y);

    handles_for(element, config)
        .into_iter()
        .filter_map(|part| {
            let local = match part {
                HitPart::Body => return None,
                HitPart::ResizeHandle(anchor) => anchor.position(b),
                HitPart::RotateHandle => Point::new(c.x, b.y - rotate_off),
                // Top-centre belongs to the rotate handle.
                HitPart::SkewHandle(SkewAxis::X) => Point::new(c.x, b.y + b.height + skew_off),
                HitPart::SkewHandle(SkewAxis::Y) => Point::new(b.x - skew_off, c.y),
            };
            Some((part, m.apply(local)))
        })
        .collect()
}

/// Whether a slide-space point lies on the element's transformed body.
///
/// Shapes with a closed outline are hit only inside that outline, so the
/// empty corners of a star or an oval fall through to what lies beneath.
/// Open strokes and non-shape elements use their whole box.
#[must_use]
pub fn body_contains(element: &Element, slide_pt: Point) -> bool {
    let b = element.bounds();
    let Some(local) = Affine::for_bounds(b, element.rotation, element.skew_x, element.skew_y)
        .invert()
        .map(|inv| inv.apply(slide_pt))
    else {
        return false;
    };
    if !b.contains(local) {
        return false;
    }
    match element.outline() {
        Some(outline) if outline.is_closed() => outline.contains(local.delta_from(Point::new(b.x, b.y))),
        _ => true,
    }
}

/// Test what is under `screen_pt`: handles of the selected element first,
/// then element bodies from the top of the stack down.
#[must_use]
pub fn hit_test(
    screen_pt: Point,
    slide: &Slide,
    viewport: &Viewport,
    selected_id: Option<ElementId>,
    config: &EngineConfig,
) -> Option<Hit> {
    if let Some(selected) = selected_id.and_then(|id| slide.get(&id)) {
        for (part, pos) in handle_positions(selected, viewport, config) {
            if viewport.slide_to_screen(pos).distance(screen_pt) <= config.handle_radius_px {
                return Some(Hit { element_id: selected.id, part });
            }
        }
    }

    let slide_pt = viewport.screen_to_slide(screen_pt);
    slide
        .elements()
        .iter()
        .rev()
        .find(|el| body_contains(el, slide_pt))
        .map(|el| Hit { element_id: el.id, part: HitPart::Body })
}
