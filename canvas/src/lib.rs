//! Shape geometry and interactive transform engine for the slide editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! parametric outlines of every shape kind and the state machine that lets a
//! user resize, rotate, skew and drag the selected element: hit-testing the
//! pointer against handles, previewing geometry on every move, and committing
//! one authoritative update on release. The host JavaScript layer wires DOM
//! events to the engine and forwards the resulting [`engine::Action`]s to the
//! rest of the editor.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`catalog`] | Closed set of shape kinds, categories and geometric families |
//! | [`geometry`] | `synthesize_path`: one outline function per family |
//! | [`path`] | Outline description over a lyon path, and its builder |
//! | [`doc`] | Element model and the ordered slide store |
//! | [`input`] | Input event types and the transform session state machine |
//! | [`transform`] | Resize, rotate, skew and clamp math; element affine |
//! | [`hit`] | Selection handles and hit-testing |
//! | [`sync`] | Properties-panel snapshots and edits |
//! | [`render`] | SVG markup for shape elements |
//! | [`dom`] | Browser bindings for an open session |
//! | [`viewport`] | Screen/slide coordinate conversions |
//! | [`config`] | Engine tunables |
//! | [`consts`] | Shared numeric constants (minimum size, slide extent, snap step, etc.) |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod doc;
pub mod dom;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod path;
pub mod render;
pub mod sync;
pub mod transform;
pub mod viewport;
