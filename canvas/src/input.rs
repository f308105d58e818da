//! Input model: modifier keys, buttons, and the transform session state machine.
//!
//! `Modifiers`, `Button` and `Key` describe a raw pointer or keyboard event.
//! `TransformSession` is the single session slot owned by the engine: either
//! `Idle` or exactly one open interaction, carrying everything needed to
//! compute the next working copy (`Preview`) from a pointer position and to
//! restore the start geometry on cancel.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Bounds, Element, ElementId, PartialElement};
use crate::hit::ResizeAnchor;
use crate::viewport::Point;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// The precision modifier: aspect lock while resizing, angle snap while rotating.
    #[must_use]
    pub fn precision(self) -> bool {
        self.shift
    }

    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"ArrowLeft"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Which skew handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkewAxis {
    X,
    Y,
}

/// Interaction mode of an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    Resize,
    Rotate,
    Skew,
    Drag,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected element, if any.
    pub selected_id: Option<ElementId>,
}

/// Geometry working copy shown while a session is open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub bounds: Bounds,
    pub rotation: f64,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl Preview {
    /// Snapshot of an element's current geometry.
    #[must_use]
    pub fn of(element: &Element) -> Self {
        Self {
            bounds: element.bounds(),
            rotation: element.rotation,
            skew_x: element.skew_x,
            skew_y: element.skew_y,
        }
    }

    /// Copy this geometry onto an element.
    pub fn apply_to(&self, element: &mut Element) {
        element.set_bounds(self.bounds);
        element.rotation = self.rotation;
        element.skew_x = self.skew_x;
        element.skew_y = self.skew_y;
    }

    /// The sparse update a session of `mode` commits.
    #[must_use]
    pub fn to_partial(&self, mode: TransformMode) -> PartialElement {
        match mode {
            TransformMode::Resize => PartialElement::from_bounds(self.bounds),
            TransformMode::Rotate => PartialElement { rotation: Some(self.rotation), ..PartialElement::default() },
            TransformMode::Skew => {
                PartialElement { skew_x: Some(self.skew_x), skew_y: Some(self.skew_y), ..PartialElement::default() }
            }
            TransformMode::Drag => {
                PartialElement { x: Some(self.bounds.x), y: Some(self.bounds.y), ..PartialElement::default() }
            }
        }
    }
}

/// Resize context captured at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeContext {
    /// Which corner/edge handle is being dragged.
    pub anchor: ResizeAnchor,
    /// Slide-space pointer position at the start of the resize.
    pub start_pointer: Point,
}

/// Rotate context captured at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateContext {
    /// Element centre in screen coordinates; the rotation pivot.
    pub center_screen: Point,
    /// Screen-space pointer position at the start of the gesture.
    pub start_pointer: Point,
}

/// Skew context captured at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewContext {
    pub axis: SkewAxis,
    /// Screen-space pointer position; skew sensitivity is in screen pixels.
    pub start_pointer: Point,
}

/// Drag context captured at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    /// Slide-space pointer position at the start of the drag.
    pub start_pointer: Point,
}

/// One open interaction on one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session<C> {
    /// The element being manipulated.
    pub id: ElementId,
    /// Geometry at session start; restored on cancel.
    pub origin: Preview,
    /// Current working copy.
    pub preview: Preview,
    pub ctx: C,
}

impl<C> Session<C> {
    #[must_use]
    pub fn new(id: ElementId, origin: Preview, ctx: C) -> Self {
        Self { id, origin, preview: origin, ctx }
    }
}

/// The engine's single session slot.
///
/// At most one interaction is open at a time: beginning a new one while this
/// is not `Idle` is refused by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransformSession {
    /// No interaction in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging one of the eight resize handles.
    Resizing(Session<ResizeContext>),
    /// Dragging the rotate handle.
    Rotating(Session<RotateContext>),
    /// Dragging a skew handle.
    Skewing(Session<SkewContext>),
    /// Moving the element body.
    Dragging(Session<DragContext>),
}

impl TransformSession {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn mode(&self) -> Option<TransformMode> {
        match self {
            Self::Idle => None,
            Self::Resizing(_) => Some(TransformMode::Resize),
            Self::Rotating(_) => Some(TransformMode::Rotate),
            Self::Skewing(_) => Some(TransformMode::Skew),
            Self::Dragging(_) => Some(TransformMode::Drag),
        }
    }

    /// The element owned by the open session.
    #[must_use]
    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::Resizing(s) => Some(s.id),
            Self::Rotating(s) => Some(s.id),
            Self::Skewing(s) => Some(s.id),
            Self::Dragging(s) => Some(s.id),
        }
    }

    /// Start geometry of the open session.
    #[must_use]
    pub fn origin(&self) -> Option<Preview> {
        match self {
            Self::Idle => None,
            Self::Resizing(s) => Some(s.origin),
            Self::Rotating(s) => Some(s.origin),
            Self::Skewing(s) => Some(s.origin),
            Self::Dragging(s) => Some(s.origin),
        }
    }

    /// Current working copy of the open session.
    #[must_use]
    pub fn preview(&self) -> Option<Preview> {
        match self {
            Self::Idle => None,
            Self::Resizing(s) => Some(s.preview),
            Self::Rotating(s) => Some(s.preview),
            Self::Skewing(s) => Some(s.preview),
            Self::Dragging(s) => Some(s.preview),
        }
    }
}
