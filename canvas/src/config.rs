//! Engine configuration.
//!
//! `EngineConfig::default()` reproduces the built-in constants. Hosts may pass
//! a partial JSON object; absent keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::catalog::ShapeType;
use crate::consts::{
    DUPLICATE_OFFSET, HANDLE_RADIUS_PX, MIN_ELEMENT_SIZE, NUDGE_STEP, NUDGE_STEP_LARGE, ROTATE_HANDLE_OFFSET_PX,
    ROTATION_SNAP_DEG, SKEW_HANDLE_OFFSET_PX, SKEW_PX_PER_DEGREE, SLIDE_MAX_EXTENT,
};

/// Tunables for the transform engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Floor for width and height, in slide units.
    pub min_size: f64,
    /// Upper bound for committed x / y, in slide units.
    pub slide_extent: f64,
    /// Rotation snap step in degrees.
    pub rotation_snap_deg: f64,
    /// Screen pixels of pointer travel per degree of skew.
    pub skew_px_per_degree: f64,
    pub nudge_step: f64,
    pub nudge_step_large: f64,
    pub duplicate_offset: f64,
    /// Handle hit radius in screen pixels.
    pub handle_radius_px: f64,
    pub rotate_handle_offset_px: f64,
    pub skew_handle_offset_px: f64,
    /// Shape kinds offered no resize or rotate handles.
    pub resize_locked_shapes: Vec<ShapeType>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_ELEMENT_SIZE,
            slide_extent: SLIDE_MAX_EXTENT,
            rotation_snap_deg: ROTATION_SNAP_DEG,
            skew_px_per_degree: SKEW_PX_PER_DEGREE,
            nudge_step: NUDGE_STEP,
            nudge_step_large: NUDGE_STEP_LARGE,
            duplicate_offset: DUPLICATE_OFFSET,
            handle_radius_px: HANDLE_RADIUS_PX,
            rotate_handle_offset_px: ROTATE_HANDLE_OFFSET_PX,
            skew_handle_offset_px: SKEW_HANDLE_OFFSET_PX,
            resize_locked_shapes: vec![ShapeType::Triangle, ShapeType::Star],
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error when `json` is malformed or a value
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether `shape` is denied resize and rotate handles.
    #[must_use]
    pub fn is_resize_locked(&self, shape: ShapeType) -> bool {
        self.resize_locked_shapes.contains(&shape)
    }
}
