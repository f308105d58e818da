//! Browser bindings for an open transform session.
//!
//! Everything here is a thin, fallible wrapper over `web-sys`; errors are
//! returned as `JsValue` and logged once by [`crate::engine::Engine`].
//! The two scoped resources of a session are RAII guards: dropping
//! [`DocumentListeners`] removes the document-level pointer listeners and
//! dropping [`RotationGuide`] removes the overlay, on every exit path.

use js_sys::Function;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, EventTarget, HtmlElement};

use crate::input::Preview;
use crate::path::fmt_num;
use crate::render::rotation_guide_svg;
use crate::transform::css_transform;
use crate::viewport::Point;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const GUIDE_STYLE: &str =
    "position:fixed;left:0;top:0;width:100%;height:100%;pointer-events:none;overflow:visible;z-index:10000";

/// Document-level pointer listeners installed for the duration of one session.
///
/// `pointerup` and `pointercancel` both route to the release callback so a
/// pointer lost outside the element still ends the session.
pub struct DocumentListeners {
    target: EventTarget,
    on_move: Function,
    on_up: Function,
}

impl DocumentListeners {
    /// Attach `on_move` and `on_up` to `document`.
    ///
    /// # Errors
    ///
    /// Returns the browser error if a listener cannot be attached. Listeners
    /// attached before the failure are removed again.
    pub fn install(document: &Document, on_move: &Function, on_up: &Function) -> Result<Self, JsValue> {
        let target: EventTarget = document.clone().into();
        let guard = Self { target, on_move: on_move.clone(), on_up: on_up.clone() };
        guard.target.add_event_listener_with_callback("pointermove", &guard.on_move)?;
        guard.target.add_event_listener_with_callback("pointerup", &guard.on_up)?;
        guard.target.add_event_listener_with_callback("pointercancel", &guard.on_up)?;
        Ok(guard)
    }

    fn remove(&self) -> Result<(), JsValue> {
        self.target.remove_event_listener_with_callback("pointermove", &self.on_move)?;
        self.target.remove_event_listener_with_callback("pointerup", &self.on_up)?;
        self.target.remove_event_listener_with_callback("pointercancel", &self.on_up)
    }
}

impl Drop for DocumentListeners {
    fn drop(&mut self) {
        if let Err(err) = self.remove() {
            tracing::warn!(?err, "failed to remove document listeners");
        }
    }
}

/// Transient overlay drawn while rotating: a line from the pivot to the
/// pointer and a centre marker. Removed from the document on drop.
pub struct RotationGuide {
    element: Element,
}

impl RotationGuide {
    /// Create the overlay and append it to the document body.
    ///
    /// # Errors
    ///
    /// Returns the browser error if the overlay cannot be created or the
    /// document has no body.
    pub fn show(document: &Document, center: Point, pointer: Point) -> Result<Self, JsValue> {
        let element = document.create_element_ns(Some(SVG_NS), "svg")?;
        element.set_attribute("style", GUIDE_STYLE)?;
        element.set_inner_html(&rotation_guide_svg(center, pointer));
        let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&element)?;
        Ok(Self { element })
    }

    /// Redraw for a new pointer position.
    pub fn update(&self, center: Point, pointer: Point) {
        self.element.set_inner_html(&rotation_guide_svg(center, pointer));
    }
}

impl Drop for RotationGuide {
    fn drop(&mut self) {
        self.element.remove();
    }
}

/// Write a geometry working copy onto an element's view.
///
/// # Errors
///
/// Returns the browser error from the first style write that fails.
pub fn write_preview(view: &HtmlElement, preview: &Preview) -> Result<(), JsValue> {
    let style = view.style();
    let b = preview.bounds;
    style.set_property("left", &px(b.x))?;
    style.set_property("top", &px(b.y))?;
    style.set_property("width", &px(b.width))?;
    style.set_property("height", &px(b.height))?;
    style.set_property("transform", &css_transform(preview.rotation, preview.skew_x, preview.skew_y))
}

/// Set the cursor on a view; an empty string restores the inherited cursor.
///
/// # Errors
///
/// Returns the browser error if the style write fails.
pub fn set_cursor(view: &HtmlElement, cursor: &str) -> Result<(), JsValue> {
    view.style().set_property("cursor", cursor)
}

/// Replace a view's content with fresh markup.
pub fn write_markup(view: &HtmlElement, markup: &str) {
    view.set_inner_html(markup);
}

fn px(v: f64) -> String {
    format!("{}px", fmt_num(v))
}
