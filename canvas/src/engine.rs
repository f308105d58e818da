use std::collections::HashMap;

use js_sys::Function;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::catalog::ShapeType;
use crate::config::EngineConfig;
use crate::doc::{Bounds, Element, ElementId, ElementKind, PartialElement, Slide};
use crate::dom::{self, DocumentListeners, RotationGuide};
use crate::hit::{HitPart, ResizeAnchor, handles_for, hit_test};
use crate::input::{
    Button, DragContext, Key, Modifiers, Preview, ResizeContext, RotateContext, Session, SkewAxis, SkewContext,
    TransformMode, TransformSession, UiState,
};
use crate::path::PathDescription;
use crate::render;
use crate::sync::{PropertyEdit, PropertySnapshot, apply_edit};
use crate::transform::{clamp_coord, resize_bounds, rotation_from_pointer, skew_delta, snap_rotation};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Default box for a new shape element.
const NEW_SHAPE_BOUNDS: Bounds = Bounds { x: 100.0, y: 100.0, width: 200.0, height: 150.0 };

/// Default box for a new text element.
const NEW_TEXT_BOUNDS: Bounds = Bounds { x: 100.0, y: 100.0, width: 300.0, height: 50.0 };

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    ElementCreated(Element),
    ElementUpdated { id: ElementId, fields: PartialElement },
    ElementDeleted { id: ElementId },
    /// Stack position changed; `index` 0 is the bottom.
    OrderChanged { id: ElementId, index: usize },
    /// Working copy for the element's view. The model is untouched.
    Preview { id: ElementId, preview: Preview },
    /// Outline recomputed for the element's committed size.
    Resynthesize { id: ElementId, path: PathDescription },
    PropertiesChanged(PropertySnapshot),
    SelectionChanged { id: Option<ElementId> },
    /// A session opened: route pointer move/up to the engine until released.
    CapturePointer { id: ElementId },
    /// The session closed: remove the document-level listeners.
    ReleasePointer,
    RotationGuide { center: Point, pointer: Point },
    HideRotationGuide,
    SetCursor { cursor: String },
    RenderNeeded,
}

/// Why a session could not be opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a {0:?} session is already open")]
    AlreadyActive(TransformMode),
    #[error("element {0} not found")]
    UnknownElement(ElementId),
    #[error("element {0} does not offer {1:?}")]
    NotOffered(ElementId, HitPart),
}

/// Core engine state: all logic that doesn't touch the DOM.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub slide: Slide,
    pub viewport: Viewport,
    pub ui: UiState,
    pub session: TransformSession,
    pub config: EngineConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the slide's elements.
    pub fn load_slide(&mut self, elements: Vec<Element>) {
        self.slide.load(elements);
        if self.ui.selected_id.is_some_and(|id| !self.slide.contains(&id)) {
            self.ui.selected_id = None;
        }
    }

    /// Apply an element created by a collaborator.
    pub fn apply_create(&mut self, element: Element) {
        self.slide.insert(element);
    }

    /// Apply an update made by a collaborator.
    pub fn apply_update(&mut self, id: &ElementId, fields: &PartialElement) {
        self.slide.apply_partial(id, fields);
    }

    /// Apply a removal made by a collaborator. An open session on the element
    /// stays open and its commit is skipped.
    pub fn apply_delete(&mut self, id: &ElementId) {
        self.slide.remove(id);
        if self.ui.selected_id.as_ref() == Some(id) {
            self.ui.selected_id = None;
        }
    }

    /// Replace the viewport. `Viewport` only ever holds a clamped zoom.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // --- Factories ---

    /// Add a shape with default style, selected. `bounds` defaults to 200×150 at (100, 100).
    pub fn add_shape(&mut self, shape: ShapeType, bounds: Option<Bounds>) -> Vec<Action> {
        if let Some(mode) = self.session.mode() {
            debug!(?mode, %shape, "add ignored: session open");
            return Vec::new();
        }
        self.add_element(Element::shape(shape, bounds.unwrap_or(NEW_SHAPE_BOUNDS)))
    }

    /// Add a text element, selected. `bounds` defaults to 300×50 at (100, 100).
    pub fn add_text(&mut self, bounds: Option<Bounds>) -> Vec<Action> {
        if let Some(mode) = self.session.mode() {
            debug!(?mode, "add ignored: session open");
            return Vec::new();
        }
        self.add_element(Element::new(ElementKind::Text, bounds.unwrap_or(NEW_TEXT_BOUNDS)))
    }

    fn add_element(&mut self, element: Element) -> Vec<Action> {
        let id = element.id;
        debug!(%id, kind = ?element.kind, "element added");
        self.slide.insert(element.clone());
        let mut actions = vec![Action::ElementCreated(element)];
        actions.extend(self.set_selection(Some(id)));
        actions
    }

    // --- Selection ---

    /// Select an element, or clear the selection with `None`. Unknown ids are
    /// ignored, and so is any call while a session is open.
    pub fn select(&mut self, id: Option<ElementId>) -> Vec<Action> {
        if let Some(mode) = self.session.mode() {
            debug!(?mode, "select ignored: session open");
            return Vec::new();
        }
        self.set_selection(id)
    }

    fn set_selection(&mut self, id: Option<ElementId>) -> Vec<Action> {
        if let Some(id) = id {
            if !self.slide.contains(&id) {
                debug!(%id, "select ignored: unknown element");
                return Vec::new();
            }
        }
        self.ui.selected_id = id;
        let mut actions = vec![Action::SelectionChanged { id }];
        if let Some(el) = id.and_then(|id| self.slide.get(&id)) {
            actions.push(Action::PropertiesChanged(PropertySnapshot::from_element(el)));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Session entry ---

    /// Open a resize session on `anchor`. `screen_pt` is the pointer position.
    ///
    /// # Errors
    ///
    /// Fails if a session is open, the element is missing, or it offers no such handle.
    pub fn begin_resize(
        &mut self,
        id: ElementId,
        anchor: ResizeAnchor,
        screen_pt: Point,
    ) -> Result<Vec<Action>, SessionError> {
        let origin = self.check_begin(id, HitPart::ResizeHandle(anchor))?;
        let ctx = ResizeContext { anchor, start_pointer: self.viewport.screen_to_slide(screen_pt) };
        self.session = TransformSession::Resizing(Session::new(id, origin, ctx));
        Ok(self.opened(id, anchor.cursor()))
    }

    /// Open a rotate session. The pivot is the element centre projected to the screen.
    ///
    /// # Errors
    ///
    /// Fails if a session is open, the element is missing, or it offers no rotate handle.
    pub fn begin_rotate(&mut self, id: ElementId, screen_pt: Point) -> Result<Vec<Action>, SessionError> {
        let origin = self.check_begin(id, HitPart::RotateHandle)?;
        let center_screen = self.viewport.slide_to_screen(origin.bounds.center());
        let ctx = RotateContext { center_screen, start_pointer: screen_pt };
        self.session = TransformSession::Rotating(Session::new(id, origin, ctx));
        let mut actions = self.opened(id, "grabbing");
        actions.push(Action::RotationGuide { center: center_screen, pointer: screen_pt });
        Ok(actions)
    }

    /// Open a skew session on one axis.
    ///
    /// # Errors
    ///
    /// Fails if a session is open, the element is missing, or it is not a shape.
    pub fn begin_skew(&mut self, id: ElementId, axis: SkewAxis, screen_pt: Point) -> Result<Vec<Action>, SessionError> {
        let origin = self.check_begin(id, HitPart::SkewHandle(axis))?;
        let ctx = SkewContext { axis, start_pointer: screen_pt };
        self.session = TransformSession::Skewing(Session::new(id, origin, ctx));
        let cursor = match axis {
            SkewAxis::X => "ew-resize",
            SkewAxis::Y => "ns-resize",
        };
        Ok(self.opened(id, cursor))
    }

    /// Open a drag session on the element body.
    ///
    /// # Errors
    ///
    /// Fails if a session is open or the element is missing.
    pub fn begin_drag(&mut self, id: ElementId, screen_pt: Point) -> Result<Vec<Action>, SessionError> {
        let origin = self.check_begin(id, HitPart::Body)?;
        let ctx = DragContext { start_pointer: self.viewport.screen_to_slide(screen_pt) };
        self.session = TransformSession::Dragging(Session::new(id, origin, ctx));
        Ok(self.opened(id, "move"))
    }

    fn check_begin(&self, id: ElementId, part: HitPart) -> Result<Preview, SessionError> {
        if let Some(mode) = self.session.mode() {
            return Err(SessionError::AlreadyActive(mode));
        }
        let el = self.slide.get(&id).ok_or(SessionError::UnknownElement(id))?;
        if part != HitPart::Body && !handles_for(el, &self.config).contains(&part) {
            return Err(SessionError::NotOffered(id, part));
        }
        Ok(Preview::of(el))
    }

    fn opened(&self, id: ElementId, cursor: &str) -> Vec<Action> {
        debug!(%id, mode = ?self.session.mode(), "session begin");
        vec![Action::CapturePointer { id }, Action::SetCursor { cursor: cursor.to_owned() }]
    }

    // --- Input events ---

    /// Resolve what is under the pointer and open the matching session.
    ///
    /// Pressing a body selects it and starts a drag; pressing empty space
    /// clears the selection. Ignored while a session is open.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        if let Some(mode) = self.session.mode() {
            debug!(?mode, "pointer-down ignored: session open");
            return Vec::new();
        }

        let Some(hit) = hit_test(screen_pt, &self.slide, &self.viewport, self.ui.selected_id, &self.config) else {
            return if self.ui.selected_id.is_some() { self.set_selection(None) } else { Vec::new() };
        };

        let id = hit.element_id;
        let begun = match hit.part {
            HitPart::Body => self.begin_drag(id, screen_pt),
            HitPart::ResizeHandle(anchor) => self.begin_resize(id, anchor, screen_pt),
            HitPart::RotateHandle => self.begin_rotate(id, screen_pt),
            HitPart::SkewHandle(axis) => self.begin_skew(id, axis, screen_pt),
        };
        match begun {
            Ok(session_actions) => {
                let mut actions =
                    if self.ui.selected_id == Some(id) { Vec::new() } else { self.set_selection(Some(id)) };
                actions.extend(session_actions);
                actions
            }
            Err(err) => {
                debug!(%err, "pointer-down ignored");
                Vec::new()
            }
        }
    }

    /// Update the working copy of the open session and echo it.
    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let Some((id, preview)) = self.update_preview(screen_pt, modifiers) else {
            return Vec::new();
        };
        let mut actions = vec![Action::Preview { id, preview }];
        if let TransformSession::Rotating(s) = &self.session {
            actions.push(Action::RotationGuide { center: s.ctx.center_screen, pointer: screen_pt });
        }
        if let Some(el) = self.slide.get(&id) {
            actions.push(Action::PropertiesChanged(PropertySnapshot::from_preview(el, &preview)));
        }
        actions
    }

    /// Close the open session and commit its working copy.
    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, modifiers: Modifiers) -> Vec<Action> {
        if self.session.is_idle() {
            return Vec::new();
        }
        self.update_preview(screen_pt, modifiers);
        self.commit()
    }

    /// Keyboard shortcuts. Escape cancels an open session; other keys act on
    /// the selected element and are ignored while a session is open.
    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        if key.name() == "Escape" {
            return if self.session.is_idle() { self.set_selection(None) } else { self.cancel() };
        }
        if !self.session.is_idle() {
            return Vec::new();
        }
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        let Some(el) = self.slide.get(&id) else {
            return Vec::new();
        };

        let step = if modifiers.shift { self.config.nudge_step_large } else { self.config.nudge_step };
        let extent = self.config.slide_extent;
        let fields = match key.name() {
            "ArrowLeft" => PartialElement { x: Some(clamp_coord(el.x - step, extent)), ..PartialElement::default() },
            "ArrowRight" => PartialElement { x: Some(clamp_coord(el.x + step, extent)), ..PartialElement::default() },
            "ArrowUp" => PartialElement { y: Some(clamp_coord(el.y - step, extent)), ..PartialElement::default() },
            "ArrowDown" => PartialElement { y: Some(clamp_coord(el.y + step, extent)), ..PartialElement::default() },
            "Delete" | "Backspace" => return self.delete_selected(),
            "r" | "R" if modifiers.command() => PartialElement { rotation: Some(0.0), ..PartialElement::default() },
            "0" if modifiers.command() => PartialElement { opacity: Some(1.0), ..PartialElement::default() },
            _ => return Vec::new(),
        };
        self.write(id, fields).unwrap_or_default()
    }

    /// Abort the open session: the view snaps back to the start geometry and
    /// nothing is committed.
    pub fn cancel(&mut self) -> Vec<Action> {
        let session = std::mem::take(&mut self.session);
        let (Some(id), Some(mode), Some(origin)) = (session.element_id(), session.mode(), session.origin()) else {
            return Vec::new();
        };
        debug!(%id, ?mode, "session cancelled");
        let mut actions = vec![Action::Preview { id, preview: origin }, Action::ReleasePointer];
        if mode == TransformMode::Rotate {
            actions.push(Action::HideRotationGuide);
        }
        if let Some(el) = self.slide.get(&id) {
            actions.push(Action::PropertiesChanged(PropertySnapshot::from_element(el)));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Roll back a session whose pointer capture could not be installed.
    ///
    /// Without document listeners no pointer-up would ever reach the engine,
    /// so the session is cancelled instead of left open.
    pub fn capture_failed(&mut self) -> Vec<Action> {
        if let Some(mode) = self.session.mode() {
            warn!(?mode, "pointer capture failed; cancelling session");
        }
        self.cancel()
    }

    fn update_preview(&mut self, screen_pt: Point, modifiers: Modifiers) -> Option<(ElementId, Preview)> {
        let precise = modifiers.precision();
        let config = &self.config;
        match &mut self.session {
            TransformSession::Idle => None,
            TransformSession::Resizing(s) => {
                let delta = self.viewport.screen_to_slide(screen_pt).delta_from(s.ctx.start_pointer);
                s.preview.bounds = resize_bounds(s.ctx.anchor, s.origin.bounds, delta, precise, config.min_size);
                Some((s.id, s.preview))
            }
            TransformSession::Rotating(s) => {
                let rotation =
                    rotation_from_pointer(s.ctx.center_screen, s.ctx.start_pointer, screen_pt, s.origin.rotation);
                s.preview.rotation = if precise { snap_rotation(rotation, config.rotation_snap_deg) } else { rotation };
                Some((s.id, s.preview))
            }
            TransformSession::Skewing(s) => {
                let delta = screen_pt.delta_from(s.ctx.start_pointer);
                match s.ctx.axis {
                    SkewAxis::X => s.preview.skew_x = s.origin.skew_x + skew_delta(delta.x, config.skew_px_per_degree),
                    SkewAxis::Y => s.preview.skew_y = s.origin.skew_y + skew_delta(delta.y, config.skew_px_per_degree),
                }
                Some((s.id, s.preview))
            }
            TransformSession::Dragging(s) => {
                let delta = self.viewport.screen_to_slide(screen_pt).delta_from(s.ctx.start_pointer);
                s.preview.bounds.x = s.origin.bounds.x + delta.x;
                s.preview.bounds.y = s.origin.bounds.y + delta.y;
                Some((s.id, s.preview))
            }
        }
    }

    fn commit(&mut self) -> Vec<Action> {
        let session = std::mem::take(&mut self.session);
        let (Some(id), Some(mode), Some(preview)) = (session.element_id(), session.mode(), session.preview()) else {
            return Vec::new();
        };

        let mut actions = vec![Action::ReleasePointer];
        if mode == TransformMode::Rotate {
            actions.push(Action::HideRotationGuide);
        }

        let mut fields = preview.to_partial(mode);
        if mode == TransformMode::Drag {
            fields.x = fields.x.map(|x| clamp_coord(x, self.config.slide_extent));
            fields.y = fields.y.map(|y| clamp_coord(y, self.config.slide_extent));
        }

        let Some(written) = self.write(id, fields) else {
            warn!(%id, ?mode, "commit skipped: element no longer exists");
            return actions;
        };
        debug!(%id, ?mode, "session commit");
        actions.extend(written);

        if mode == TransformMode::Drag {
            self.ui.selected_id = Some(id);
            let at = actions.len() - 1;
            actions.insert(at, Action::SelectionChanged { id: Some(id) });
        }
        actions
    }

    /// Apply `fields` to the model and describe the result. A size change on
    /// a path-based element re-synthesizes its outline. `None` if the element
    /// is missing.
    fn write(&mut self, id: ElementId, fields: PartialElement) -> Option<Vec<Action>> {
        if !self.slide.apply_partial(&id, &fields) {
            return None;
        }
        let el = self.slide.get(&id)?;
        let resynthesized = if fields.changes_size() && el.is_path_based() { el.outline() } else { None };
        let snapshot = PropertySnapshot::from_element(el);

        let mut actions = vec![Action::ElementUpdated { id, fields }];
        if let Some(path) = resynthesized {
            actions.push(Action::Resynthesize { id, path });
        }
        actions.push(Action::PropertiesChanged(snapshot));
        actions.push(Action::RenderNeeded);
        Some(actions)
    }

    // --- Property panel ---

    /// Apply one properties-panel edit to the selected element.
    pub fn apply_property_edit(&mut self, edit: &PropertyEdit) -> Vec<Action> {
        if !self.session.is_idle() {
            debug!(?edit, "property edit ignored: session open");
            return Vec::new();
        }
        let Some(el) = self.ui.selected_id.and_then(|id| self.slide.get(&id)) else {
            return Vec::new();
        };
        let id = el.id;
        let Some(fields) = apply_edit(el, edit, &self.config) else {
            return Vec::new();
        };
        self.write(id, fields).unwrap_or_default()
    }

    // --- Arrange ---

    /// Move the selected element one step up the stack.
    pub fn bring_forward(&mut self) -> Vec<Action> {
        self.reorder(Slide::bring_forward)
    }

    /// Move the selected element one step down the stack.
    pub fn send_backward(&mut self) -> Vec<Action> {
        self.reorder(Slide::send_backward)
    }

    fn reorder(&mut self, op: fn(&mut Slide, &ElementId) -> bool) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        if !op(&mut self.slide, &id) {
            return Vec::new();
        }
        match self.slide.index_of(&id) {
            Some(index) => vec![Action::OrderChanged { id, index }, Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Copy the selected element, offset and on top, and select the copy.
    pub fn duplicate_selected(&mut self) -> Vec<Action> {
        if !self.session.is_idle() {
            return Vec::new();
        }
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        let Some(copy_id) = self.slide.duplicate(&id, self.config.duplicate_offset, self.config.slide_extent) else {
            return Vec::new();
        };
        let Some(copy) = self.slide.get(&copy_id).cloned() else {
            return Vec::new();
        };
        debug!(from = %id, to = %copy_id, "element duplicated");
        let mut actions = vec![Action::ElementCreated(copy)];
        actions.extend(self.set_selection(Some(copy_id)));
        actions
    }

    /// Remove the selected element.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        if !self.session.is_idle() {
            return Vec::new();
        }
        let Some(id) = self.ui.selected_id.take() else {
            return Vec::new();
        };
        if self.slide.remove(&id).is_none() {
            return Vec::new();
        }
        debug!(%id, "element deleted");
        vec![Action::ElementDeleted { id }, Action::SelectionChanged { id: None }, Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected_id
    }

    /// Look up an element by ID.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.slide.get(id)
    }

    /// The open session, or `Idle`.
    #[must_use]
    pub fn session(&self) -> &TransformSession {
        &self.session
    }

    /// Snapshot of the selected element for the properties panel.
    #[must_use]
    pub fn properties(&self) -> Option<PropertySnapshot> {
        self.ui.selected_id.and_then(|id| self.slide.get(&id)).map(PropertySnapshot::from_element)
    }
}

/// The browser engine. Wraps `EngineCore` and mirrors its actions onto the
/// element views registered by the host.
///
/// The host supplies the two callbacks that forward document-level pointer
/// move/up events back into [`Engine::on_pointer_move`] and
/// [`Engine::on_pointer_up`]; they are attached only while a session is open.
pub struct Engine {
    pub core: EngineCore,
    document: Document,
    on_move: Function,
    on_up: Function,
    views: HashMap<ElementId, HtmlElement>,
    listeners: Option<DocumentListeners>,
    guide: Option<RotationGuide>,
    /// View of the session's element, captured once at session start.
    active_view: Option<HtmlElement>,
}

impl Engine {
    #[must_use]
    pub fn new(document: Document, on_move: Function, on_up: Function, config: EngineConfig) -> Self {
        Self {
            core: EngineCore::with_config(config),
            document,
            on_move,
            on_up,
            views: HashMap::new(),
            listeners: None,
            guide: None,
            active_view: None,
        }
    }

    /// Associate an element with the DOM node that displays it.
    pub fn register_view(&mut self, id: ElementId, view: HtmlElement) {
        self.views.insert(id, view);
    }

    pub fn unregister_view(&mut self, id: &ElementId) {
        self.views.remove(id);
    }

    // --- Delegated data inputs ---

    pub fn load_slide(&mut self, elements: Vec<Element>) {
        self.core.load_slide(elements);
    }

    pub fn apply_create(&mut self, element: Element) {
        self.core.apply_create(element);
    }

    pub fn apply_update(&mut self, id: &ElementId, fields: &PartialElement) {
        self.core.apply_update(id, fields);
    }

    pub fn apply_delete(&mut self, id: &ElementId) {
        self.core.apply_delete(id);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.core.set_viewport(viewport);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = self.core.on_pointer_down(screen_pt, button, modifiers);
        self.apply(&mut actions);
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = self.core.on_pointer_move(screen_pt, modifiers);
        self.apply(&mut actions);
        actions
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = self.core.on_pointer_up(screen_pt, button, modifiers);
        self.apply(&mut actions);
        actions
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = self.core.on_key_down(key, modifiers);
        self.apply(&mut actions);
        actions
    }

    pub fn apply_property_edit(&mut self, edit: &PropertyEdit) -> Vec<Action> {
        let mut actions = self.core.apply_property_edit(edit);
        self.apply(&mut actions);
        actions
    }

    pub fn add_shape(&mut self, shape: ShapeType, bounds: Option<Bounds>) -> Vec<Action> {
        self.core.add_shape(shape, bounds)
    }

    pub fn add_text(&mut self, bounds: Option<Bounds>) -> Vec<Action> {
        self.core.add_text(bounds)
    }

    pub fn duplicate_selected(&mut self) -> Vec<Action> {
        self.core.duplicate_selected()
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        let mut actions = self.core.delete_selected();
        self.apply(&mut actions);
        actions
    }

    pub fn bring_forward(&mut self) -> Vec<Action> {
        self.core.bring_forward()
    }

    pub fn send_backward(&mut self) -> Vec<Action> {
        self.core.send_backward()
    }

    // --- DOM ---

    /// Apply actions in order. A failed capture appends the rollback actions,
    /// so callers see the session close.
    fn apply(&mut self, actions: &mut Vec<Action>) {
        let mut i = 0;
        while i < actions.len() {
            if let Err(err) = self.apply_one(&actions[i]) {
                warn!(?err, action = ?actions[i], "DOM update failed");
                if matches!(actions[i], Action::CapturePointer { .. }) {
                    actions.extend(self.core.capture_failed());
                }
            }
            i += 1;
        }
    }

    fn apply_one(&mut self, action: &Action) -> Result<(), JsValue> {
        match action {
            Action::CapturePointer { id } => {
                self.active_view = self.views.get(id).cloned();
                self.listeners = Some(DocumentListeners::install(&self.document, &self.on_move, &self.on_up)?);
            }
            Action::ReleasePointer => {
                self.listeners = None;
                if let Some(view) = self.active_view.take() {
                    dom::set_cursor(&view, "")?;
                }
            }
            Action::SetCursor { cursor } => {
                if let Some(view) = &self.active_view {
                    dom::set_cursor(view, cursor)?;
                }
            }
            Action::Preview { preview, .. } => {
                if let Some(view) = &self.active_view {
                    dom::write_preview(view, preview)?;
                }
            }
            Action::RotationGuide { center, pointer } => {
                if let Some(guide) = &self.guide {
                    guide.update(*center, *pointer);
                } else {
                    self.guide = Some(RotationGuide::show(&self.document, *center, *pointer)?);
                }
            }
            Action::HideRotationGuide => self.guide = None,
            Action::ElementUpdated { id, fields } => {
                if let (Some(view), Some(el)) = (self.views.get(id), self.core.element(id)) {
                    dom::write_preview(view, &Preview::of(el))?;
                    if fields.changes_paint() {
                        if let Some(markup) = render::view_svg(el) {
                            dom::write_markup(view, &markup);
                        }
                    }
                }
            }
            Action::Resynthesize { id, .. } => {
                if let (Some(view), Some(el)) = (self.views.get(id), self.core.element(id)) {
                    if let Some(markup) = render::view_svg(el) {
                        dom::write_markup(view, &markup);
                    }
                }
            }
            Action::ElementDeleted { id } => {
                if let Some(view) = self.views.remove(id) {
                    view.remove();
                }
            }
            Action::ElementCreated(_)
            | Action::OrderChanged { .. }
            | Action::PropertiesChanged(_)
            | Action::SelectionChanged { .. }
            | Action::RenderNeeded => {}
        }
        Ok(())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.core.selection()
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.core.element(id)
    }
}
