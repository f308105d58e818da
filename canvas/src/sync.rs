//! Selection and property sync between the engine and the properties panel.
//!
//! `PropertySnapshot` is what the panel displays: rounded values, rotation in
//! `[0, 360)`, opacity as a percentage. `PropertyEdit` is what the panel sends
//! back; [`apply_edit`] turns one edit into a sparse element update with the
//! model invariants (size floor, opacity range, slide extent) enforced.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use serde::{Deserialize, Serialize};

use crate::catalog::ShapeType;
use crate::config::EngineConfig;
use crate::doc::{BorderStyle, Element, ElementId, PartialElement, ShadowIntensity};
use crate::input::Preview;
use crate::transform::{clamp_coord, normalize_degrees};

/// Panel view of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    pub id: ElementId,
    #[serde(rename = "shapeType", skip_serializing_if = "Option::is_none")]
    pub shape_type: Option<ShapeType>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Display rotation in `[0, 360)`.
    pub rotation: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    /// Opacity as a whole percentage.
    pub opacity_percent: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub border: BorderStyle,
    pub shadow: ShadowIntensity,
}

impl PropertySnapshot {
    /// Snapshot of the committed element.
    #[must_use]
    pub fn from_element(element: &Element) -> Self {
        Self::from_preview(element, &Preview::of(element))
    }

    /// Snapshot of an element as shown mid-session, using the working copy's geometry.
    #[must_use]
    pub fn from_preview(element: &Element, preview: &Preview) -> Self {
        let b = preview.bounds;
        Self {
            id: element.id,
            shape_type: element.kind.shape_type(),
            x: b.x.round(),
            y: b.y.round(),
            width: b.width.round(),
            height: b.height.round(),
            rotation: normalize_degrees(preview.rotation.round()),
            skew_x: preview.skew_x.round(),
            skew_y: preview.skew_y.round(),
            opacity_percent: (element.style.opacity * 100.0).round(),
            fill: element.style.fill.clone(),
            stroke: element.style.stroke.clone(),
            stroke_width: element.style.stroke_width,
            border: element.style.border,
            shadow: element.style.shadow,
        }
    }
}

/// One edit from the properties panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PropertyEdit {
    X(f64),
    Y(f64),
    /// New width; with `lock_aspect` the height follows the current ratio.
    Width { value: f64, lock_aspect: bool },
    /// New height; with `lock_aspect` the width follows the current ratio.
    Height { value: f64, lock_aspect: bool },
    Rotation(f64),
    OpacityPercent(f64),
    Fill(String),
    Stroke(String),
    StrokeWidth(f64),
    Border(BorderStyle),
    Shadow(ShadowIntensity),
    SkewX(f64),
    SkewY(f64),
}

impl PropertyEdit {
    fn number(&self) -> Option<f64> {
        match *self {
            Self::X(v)
            | Self::Y(v)
            | Self::Width { value: v, .. }
            | Self::Height { value: v, .. }
            | Self::Rotation(v)
            | Self::OpacityPercent(v)
            | Self::StrokeWidth(v)
            | Self::SkewX(v)
            | Self::SkewY(v) => Some(v),
            _ => None,
        }
    }
}

/// Sparse update for `edit` applied to `element`, or `None` for a non-finite number.
#[must_use]
pub fn apply_edit(element: &Element, edit: &PropertyEdit, config: &EngineConfig) -> Option<PartialElement> {
    if edit.number().is_some_and(|v| !v.is_finite()) {
        tracing::debug!(id = %element.id, ?edit, "ignoring non-finite property edit");
        return None;
    }
    let floor = |v: f64| v.max(config.min_size);
    let ratio = element.bounds().aspect_ratio();
    let mut p = PartialElement::default();
    match edit {
        PropertyEdit::X(v) => p.x = Some(clamp_coord(*v, config.slide_extent)),
        PropertyEdit::Y(v) => p.y = Some(clamp_coord(*v, config.slide_extent)),
        PropertyEdit::Width { value, lock_aspect } => {
            p.width = Some(floor(*value));
            if let (true, Some(r)) = (*lock_aspect, ratio) {
                p.height = Some(floor((value / r).round()));
            }
        }
        PropertyEdit::Height { value, lock_aspect } => {
            p.height = Some(floor(*value));
            if let (true, Some(r)) = (*lock_aspect, ratio) {
                p.width = Some(floor((value * r).round()));
            }
        }
        PropertyEdit::Rotation(v) => p.rotation = Some(*v),
        PropertyEdit::OpacityPercent(v) => p.opacity = Some((v / 100.0).clamp(0.0, 1.0)),
        PropertyEdit::Fill(c) => p.fill = Some(c.clone()),
        PropertyEdit::Stroke(c) => p.stroke = Some(c.clone()),
        PropertyEdit::StrokeWidth(v) => p.stroke_width = Some(v.max(0.0)),
        PropertyEdit::Border(b) => p.border = Some(*b),
        PropertyEdit::Shadow(s) => p.shadow = Some(*s),
        PropertyEdit::SkewX(v) => p.skew_x = Some(*v),
        PropertyEdit::SkewY(v) => p.skew_y = Some(*v),
    }
    Some(p)
}
