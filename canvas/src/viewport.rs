#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or slide space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Where the slide sits on screen and how much it is scaled.
///
/// `origin_x` / `origin_y` are the screen position (CSS pixels) of the slide's
/// top-left corner. `zoom` is a scale factor (1.0 = one slide unit per pixel),
/// always within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    #[serde(deserialize_with = "deserialize_zoom")]
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, zoom: 1.0 }
    }
}

/// Clamp a zoom factor into range. NaN falls back to 1.0.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() { 1.0 } else { zoom.clamp(MIN_ZOOM, MAX_ZOOM) }
}

fn deserialize_zoom<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_zoom)
}

impl Viewport {
    #[must_use]
    pub fn new(origin_x: f64, origin_y: f64, zoom: f64) -> Self {
        Self { origin_x, origin_y, zoom: clamp_zoom(zoom) }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    /// Convert a screen-space point (CSS pixels) to slide coordinates.
    #[must_use]
    pub fn screen_to_slide(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.origin_x) / self.zoom,
            y: (screen.y - self.origin_y) / self.zoom,
        }
    }

    /// Convert a slide-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn slide_to_screen(&self, slide: Point) -> Point {
        Point {
            x: slide.x * self.zoom + self.origin_x,
            y: slide.y * self.zoom + self.origin_y,
        }
    }

    /// Convert a screen-space distance (pixels) to slide units.
    #[must_use]
    pub fn screen_dist_to_slide(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}
