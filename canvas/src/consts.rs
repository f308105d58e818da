//! Shared numeric constants for the canvas crate.

// ── Math ────────────────────────────────────────────────────────

/// π / 5 (36°): angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

// ── Geometry ────────────────────────────────────────────────────

/// Inner-to-outer radius ratio for the 5-point star.
pub const STAR_INNER_RATIO: f64 = 0.4;

/// Corner radius as a fraction of `min(width, height)` for rounded shapes.
pub const CORNER_RADIUS_RATIO: f64 = 0.1;

/// Fraction of the bounding box height given to a callout's body; the tail uses the rest.
pub const CALLOUT_BODY_RATIO: f64 = 0.8;

// ── Element model ───────────────────────────────────────────────

/// Minimum width and height of an element, in slide units.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Largest x / y an element origin may be committed at, in slide units.
pub const SLIDE_MAX_EXTENT: f64 = 2000.0;

/// Offset applied to a duplicated element relative to its source.
pub const DUPLICATE_OFFSET: f64 = 20.0;

// ── Interaction ─────────────────────────────────────────────────

/// Rotation snap increment in degrees while the precision modifier is held.
pub const ROTATION_SNAP_DEG: f64 = 15.0;

/// Screen pixels of pointer travel per degree of skew.
pub const SKEW_PX_PER_DEGREE: f64 = 10.0;

/// Arrow-key nudge distance.
pub const NUDGE_STEP: f64 = 1.0;

/// Arrow-key nudge distance with Shift held.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// Smallest viewport zoom factor.
pub const MIN_ZOOM: f64 = 0.25;

/// Largest viewport zoom factor.
pub const MAX_ZOOM: f64 = 4.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance from the top edge to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;

/// Distance from the box edge to a skew handle, in screen pixels.
pub const SKEW_HANDLE_OFFSET_PX: f64 = 20.0;
