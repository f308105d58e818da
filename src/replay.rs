//! Gesture replay: run a scripted input sequence through `EngineCore`.
//!
//! A script is a JSON object with optional starting `elements`, an optional
//! `viewport`, and a list of `steps`, each tagged by `op`:
//!
//! ```json
//! {
//!   "steps": [
//!     { "op": "add_shape", "shape": "hexagon" },
//!     { "op": "pointer_down", "x": 300, "y": 250 },
//!     { "op": "pointer_move", "x": 340, "y": 255, "modifiers": { "shift": true } },
//!     { "op": "pointer_up", "x": 340, "y": 255, "modifiers": { "shift": true } }
//!   ]
//! }
//! ```

use canvas::catalog::ShapeType;
use canvas::config::EngineConfig;
use canvas::doc::{Bounds, Element, ElementId, Slide};
use canvas::engine::{Action, EngineCore};
use canvas::input::{Button, Key, Modifiers};
use canvas::sync::PropertyEdit;
use canvas::viewport::{Point, Viewport};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("step {step}: no element at stack index {index}")]
    NoElementAt { step: usize, index: usize },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub elements: Vec<Element>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    AddShape {
        shape: ShapeType,
        #[serde(default)]
        bounds: Option<Bounds>,
    },
    AddText {
        #[serde(default)]
        bounds: Option<Bounds>,
    },
    Select {
        id: Option<ElementId>,
    },
    /// Select by stack position (0 = bottom), for scripts that add elements.
    SelectIndex {
        index: usize,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Edit {
        edit: PropertyEdit,
    },
    Duplicate,
    Delete,
    BringForward,
    SendBackward,
}

/// Final slide plus every action the engine emitted, in order.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayOutcome {
    pub slide: Slide,
    pub actions: Vec<Action>,
}

/// Run `script` on a fresh engine.
///
/// # Errors
///
/// Returns an error for a `select_index` step that names an empty stack slot.
pub fn run(script: Script, config: EngineConfig) -> Result<ReplayOutcome, ReplayError> {
    let mut core = EngineCore::with_config(config);
    core.load_slide(script.elements);
    if let Some(viewport) = script.viewport {
        core.set_viewport(viewport);
    }

    let mut actions = Vec::new();
    for (i, step) in script.steps.into_iter().enumerate() {
        debug!(step = i, ?step, "replay step");
        let emitted = match step {
            Step::AddShape { shape, bounds } => core.add_shape(shape, bounds),
            Step::AddText { bounds } => core.add_text(bounds),
            Step::Select { id } => core.select(id),
            Step::SelectIndex { index } => {
                let id = core
                    .slide
                    .elements()
                    .get(index)
                    .map(|el| el.id)
                    .ok_or(ReplayError::NoElementAt { step: i, index })?;
                core.select(Some(id))
            }
            Step::PointerDown { x, y, button, modifiers } => core.on_pointer_down(Point::new(x, y), button, modifiers),
            Step::PointerMove { x, y, modifiers } => core.on_pointer_move(Point::new(x, y), modifiers),
            Step::PointerUp { x, y, button, modifiers } => core.on_pointer_up(Point::new(x, y), button, modifiers),
            Step::Key { key, modifiers } => core.on_key_down(Key(key), modifiers),
            Step::Edit { edit } => core.apply_property_edit(&edit),
            Step::Duplicate => core.duplicate_selected(),
            Step::Delete => core.delete_selected(),
            Step::BringForward => core.bring_forward(),
            Step::SendBackward => core.send_backward(),
        };
        actions.extend(emitted);
    }

    Ok(ReplayOutcome { slide: core.slide, actions })
}

#[cfg(test)]
#[path = "replay_test.rs"]
mod tests;
