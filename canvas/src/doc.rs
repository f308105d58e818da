//! Element model: slide elements, their style, and the ordered slide store.
//!
//! This module defines what sits on a slide (`Element`, `ElementKind`), the
//! styling attributes the renderer applies on top of geometry (`Style`), a
//! sparse-update type for property-panel and host edits (`PartialElement`),
//! and the ordered container that owns a slide's elements (`Slide`).
//!
//! Insertion order is z-order: later elements are drawn on top. The transform
//! engine mutates elements only at commit time; between sessions the renderer
//! reads them freely.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ShapeType;
use crate::geometry::synthesize_path;
use crate::path::PathDescription;
use crate::viewport::Point;

/// Unique identifier for a slide element.
pub type ElementId = Uuid;

/// What an element is. Kind-specific content (text runs, image source, chart
/// data) lives in [`Element::props`] and is owned by collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Shape {
        #[serde(rename = "shapeType")]
        shape_type: ShapeType,
    },
    Chart,
}

impl ElementKind {
    /// The catalog kind, for shape elements.
    #[must_use]
    pub fn shape_type(self) -> Option<ShapeType> {
        match self {
            Self::Shape { shape_type } => Some(shape_type),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}

/// Drop-shadow preset applied by the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowIntensity {
    #[default]
    None,
    Light,
    Medium,
    Strong,
}

/// Outline dash style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

/// Paint attributes. None of these alter geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Fill as a CSS color string.
    pub fill: String,
    /// Stroke as a CSS color string.
    pub stroke: String,
    pub stroke_width: f64,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
    pub border: BorderStyle,
    pub shadow: ShadowIntensity,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: "#3498db".to_owned(),
            stroke: "#000000".to_owned(),
            stroke_width: 1.0,
            opacity: 1.0,
            border: BorderStyle::Solid,
            shadow: ShadowIntensity::None,
        }
    }
}

/// Axis-aligned box in slide coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `p` lies inside the box, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// `width / height`, or `None` when it is not a usable positive ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        let ratio = self.width / self.height;
        (ratio.is_finite() && ratio > 0.0).then_some(ratio)
    }
}

/// A slide-resident element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Left edge in slide coordinates.
    pub x: f64,
    /// Top edge in slide coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees about the box center. Stored unnormalized.
    #[serde(default)]
    pub rotation: f64,
    /// Horizontal skew in degrees. Only shape elements are skewed interactively.
    #[serde(default)]
    pub skew_x: f64,
    /// Vertical skew in degrees.
    #[serde(default)]
    pub skew_y: f64,
    #[serde(default)]
    pub style: Style,
    /// Kind-specific fields owned by collaborators (font, source, dataset).
    #[serde(default)]
    pub props: serde_json::Value,
}

impl Element {
    /// New element with a fresh id, no transform, and default style.
    #[must_use]
    pub fn new(kind: ElementKind, bounds: Bounds) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            rotation: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            style: Style::default(),
            props: serde_json::json!({}),
        }
    }

    #[must_use]
    pub fn shape(shape_type: ShapeType, bounds: Bounds) -> Self {
        Self::new(ElementKind::Shape { shape_type }, bounds)
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_bounds(&mut self, b: Bounds) {
        self.x = b.x;
        self.y = b.y;
        self.width = b.width;
        self.height = b.height;
    }

    /// Whether the view is drawn from a synthesized outline. Every shape kind is.
    #[must_use]
    pub fn is_path_based(&self) -> bool {
        self.kind.is_shape()
    }

    /// The synthesized outline for shape elements at their current size.
    #[must_use]
    pub fn outline(&self) -> Option<PathDescription> {
        self.kind
            .shape_type()
            .map(|shape| synthesize_path(shape, self.width, self.height))
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skew_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowIntensity>,
    /// Props keys to merge or remove (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

impl PartialElement {
    /// Geometry-only update from a box.
    #[must_use]
    pub fn from_bounds(b: Bounds) -> Self {
        Self { x: Some(b.x), y: Some(b.y), width: Some(b.width), height: Some(b.height), ..Self::default() }
    }

    /// Whether this update changes width or height.
    #[must_use]
    pub fn changes_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Whether this update touches any paint property.
    #[must_use]
    pub fn changes_paint(&self) -> bool {
        self.fill.is_some()
            || self.stroke.is_some()
            || self.stroke_width.is_some()
            || self.opacity.is_some()
            || self.border.is_some()
            || self.shadow.is_some()
    }
}

/// The ordered element sequence of one slide. Index 0 is the bottom of the stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    elements: Vec<Element>,
}

impl Slide {
    #[must_use]
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Add an element on top. An element with the same id is replaced in place.
    pub fn insert(&mut self, element: Element) {
        if let Some(slot) = self.elements.iter_mut().find(|e| e.id == element.id) {
            *slot = element;
        } else {
            self.elements.push(element);
        }
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let idx = self.index_of(id)?;
        Some(self.elements.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Stack position of an element (0 = bottom).
    #[must_use]
    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    /// Elements in draw order, bottom first.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Replace all elements with a snapshot, keeping its order.
    pub fn load(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// Apply a sparse update. Returns false, changing nothing, if the element
    /// doesn't exist or `props` is present but not an object.
    pub fn apply_partial(&mut self, id: &ElementId, partial: &PartialElement) -> bool {
        let incoming = match &partial.props {
            Some(props) => match props.as_object() {
                Some(map) => Some(map),
                None => return false,
            },
            None => None,
        };
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        if let Some(x) = partial.x {
            el.x = x;
        }
        if let Some(y) = partial.y {
            el.y = y;
        }
        if let Some(w) = partial.width {
            el.width = w;
        }
        if let Some(h) = partial.height {
            el.height = h;
        }
        if let Some(r) = partial.rotation {
            el.rotation = r;
        }
        if let Some(s) = partial.skew_x {
            el.skew_x = s;
        }
        if let Some(s) = partial.skew_y {
            el.skew_y = s;
        }
        if let Some(ref fill) = partial.fill {
            el.style.fill.clone_from(fill);
        }
        if let Some(ref stroke) = partial.stroke {
            el.style.stroke.clone_from(stroke);
        }
        if let Some(w) = partial.stroke_width {
            el.style.stroke_width = w;
        }
        if let Some(o) = partial.opacity {
            el.style.opacity = o;
        }
        if let Some(b) = partial.border {
            el.style.border = b;
        }
        if let Some(s) = partial.shadow {
            el.style.shadow = s;
        }
        if let Some(incoming) = incoming {
            if !el.props.is_object() {
                el.props = serde_json::json!({});
            }

            if let Some(existing) = el.props.as_object_mut() {
                for (k, v) in incoming {
                    if v.is_null() {
                        existing.remove(k);
                    } else {
                        existing.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        true
    }

    /// Swap an element with the one above it. Returns false at the top or if missing.
    pub fn bring_forward(&mut self, id: &ElementId) -> bool {
        match self.index_of(id) {
            Some(i) if i + 1 < self.elements.len() => {
                self.elements.swap(i, i + 1);
                true
            }
            _ => false,
        }
    }

    /// Swap an element with the one below it. Returns false at the bottom or if missing.
    pub fn send_backward(&mut self, id: &ElementId) -> bool {
        match self.index_of(id) {
            Some(i) if i > 0 => {
                self.elements.swap(i, i - 1);
                true
            }
            _ => false,
        }
    }

    /// Clone an element under a new id, shifted by `offset` on both axes and
    /// clamped into `[0, extent]`, and place it on top. Returns the new id.
    pub fn duplicate(&mut self, id: &ElementId, offset: f64, extent: f64) -> Option<ElementId> {
        let mut copy = self.get(id)?.clone();
        copy.id = Uuid::new_v4();
        copy.x = (copy.x + offset).min(extent).max(0.0);
        copy.y = (copy.y + offset).min(extent).max(0.0);
        let new_id = copy.id;
        self.elements.push(copy);
        Some(new_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
