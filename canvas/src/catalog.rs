//! Shape catalog: the closed set of shape kinds, grouped by category.
//!
//! Every kind maps to exactly one geometric [`ShapeFamily`], which is what the
//! geometry library dispatches on. Names on the wire are kebab-case
//! (`"rounded-rectangle"`, `"arrow-left"`). Unknown names parse leniently to
//! [`ShapeType::Rectangle`] so a stray tag never blocks rendering; use the
//! strict [`FromStr`] impl when the caller wants to reject them.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A shape kind from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeType {
    // Basic
    Rectangle,
    RoundedRectangle,
    Circle,
    Triangle,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Diamond,
    Trapezoid,
    Oval,
    // Arrows and lines
    Arrow,
    ArrowLeft,
    DoubleArrow,
    CurvedArrow,
    CircularArrow,
    Line,
    DashedLine,
    CurvedLine,
    Connector,
    // Flowchart
    Process,
    Decision,
    Document,
    PredefinedProcess,
    Data,
    Database,
    Card,
    // Callouts
    RectangularCallout,
    OvalCallout,
    CloudCallout,
    ThoughtBubble,
    // Special
    Brace,
    Bracket,
    Heart,
    Lightning,
    Sun,
    Moon,
    Cloud,
    Wave,
    Cross,
    Puzzle,
}

/// Shape-picker grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeCategory {
    Basic,
    ArrowsAndLines,
    Flowchart,
    Callouts,
    Special,
}

/// Geometric family used to synthesize a kind's outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFamily {
    /// Straight-edged box, optionally with rounded or cut corners or a wavy base.
    Rectangular,
    /// Regular polygon with the given number of vertices, first vertex pointing up.
    RegularPolygon(u32),
    /// Ten-vertex alternating-radius star.
    Star,
    /// Closed ellipse inscribed in the box.
    Elliptical,
    /// Fixed polygon whose vertices are fractions of the box.
    Polygonal,
    /// Shaft-and-head arrows.
    Directional,
    /// Open strokes (lines, connectors, braces).
    Stroke,
    /// Constant Bezier templates scaled to the box.
    Freeform,
    /// Body outline plus an appended tail.
    Callout,
}

/// Error returned by the strict [`FromStr`] impl.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape type: {0}")]
pub struct ParseShapeError(pub String);

impl ShapeType {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeType; 41] = [
        Self::Rectangle,
        Self::RoundedRectangle,
        Self::Circle,
        Self::Triangle,
        Self::Pentagon,
        Self::Hexagon,
        Self::Octagon,
        Self::Star,
        Self::Diamond,
        Self::Trapezoid,
        Self::Oval,
        Self::Arrow,
        Self::ArrowLeft,
        Self::DoubleArrow,
        Self::CurvedArrow,
        Self::CircularArrow,
        Self::Line,
        Self::DashedLine,
        Self::CurvedLine,
        Self::Connector,
        Self::Process,
        Self::Decision,
        Self::Document,
        Self::PredefinedProcess,
        Self::Data,
        Self::Database,
        Self::Card,
        Self::RectangularCallout,
        Self::OvalCallout,
        Self::CloudCallout,
        Self::ThoughtBubble,
        Self::Brace,
        Self::Bracket,
        Self::Heart,
        Self::Lightning,
        Self::Sun,
        Self::Moon,
        Self::Cloud,
        Self::Wave,
        Self::Cross,
        Self::Puzzle,
    ];

    /// Kebab-case wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::RoundedRectangle => "rounded-rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Octagon => "octagon",
            Self::Star => "star",
            Self::Diamond => "diamond",
            Self::Trapezoid => "trapezoid",
            Self::Oval => "oval",
            Self::Arrow => "arrow",
            Self::ArrowLeft => "arrow-left",
            Self::DoubleArrow => "double-arrow",
            Self::CurvedArrow => "curved-arrow",
            Self::CircularArrow => "circular-arrow",
            Self::Line => "line",
            Self::DashedLine => "dashed-line",
            Self::CurvedLine => "curved-line",
            Self::Connector => "connector",
            Self::Process => "process",
            Self::Decision => "decision",
            Self::Document => "document",
            Self::PredefinedProcess => "predefined-process",
            Self::Data => "data",
            Self::Database => "database",
            Self::Card => "card",
            Self::RectangularCallout => "rectangular-callout",
            Self::OvalCallout => "oval-callout",
            Self::CloudCallout => "cloud-callout",
            Self::ThoughtBubble => "thought-bubble",
            Self::Brace => "brace",
            Self::Bracket => "bracket",
            Self::Heart => "heart",
            Self::Lightning => "lightning",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Cloud => "cloud",
            Self::Wave => "wave",
            Self::Cross => "cross",
            Self::Puzzle => "puzzle",
        }
    }

    /// Human-readable label for pickers and listings.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
            Self::Pentagon => "Pentagon",
            Self::Hexagon => "Hexagon",
            Self::Octagon => "Octagon",
            Self::Star => "Star",
            Self::Diamond => "Diamond",
            Self::Trapezoid => "Trapezoid",
            Self::Oval => "Oval",
            Self::Arrow => "Arrow",
            Self::ArrowLeft => "Left Arrow",
            Self::DoubleArrow => "Double Arrow",
            Self::CurvedArrow => "Curved Arrow",
            Self::CircularArrow => "Circular Arrow",
            Self::Line => "Line",
            Self::DashedLine => "Dashed Line",
            Self::CurvedLine => "Curved Line",
            Self::Connector => "Connector",
            Self::Process => "Process",
            Self::Decision => "Decision",
            Self::Document => "Document",
            Self::PredefinedProcess => "Predefined Process",
            Self::Data => "Data",
            Self::Database => "Database",
            Self::Card => "Card",
            Self::RectangularCallout => "Rectangular Callout",
            Self::OvalCallout => "Oval Callout",
            Self::CloudCallout => "Cloud Callout",
            Self::ThoughtBubble => "Thought Bubble",
            Self::Brace => "Brace",
            Self::Bracket => "Bracket",
            Self::Heart => "Heart",
            Self::Lightning => "Lightning",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Cloud => "Cloud",
            Self::Wave => "Wave",
            Self::Cross => "Cross",
            Self::Puzzle => "Puzzle",
        }
    }

    #[must_use]
    pub fn category(self) -> ShapeCategory {
        match self {
            Self::Rectangle
            | Self::RoundedRectangle
            | Self::Circle
            | Self::Triangle
            | Self::Pentagon
            | Self::Hexagon
            | Self::Octagon
            | Self::Star
            | Self::Diamond
            | Self::Trapezoid
            | Self::Oval => ShapeCategory::Basic,
            Self::Arrow
            | Self::ArrowLeft
            | Self::DoubleArrow
            | Self::CurvedArrow
            | Self::CircularArrow
            | Self::Line
            | Self::DashedLine
            | Self::CurvedLine
            | Self::Connector => ShapeCategory::ArrowsAndLines,
            Self::Process
            | Self::Decision
            | Self::Document
            | Self::PredefinedProcess
            | Self::Data
            | Self::Database
            | Self::Card => ShapeCategory::Flowchart,
            Self::RectangularCallout | Self::OvalCallout | Self::CloudCallout | Self::ThoughtBubble => {
                ShapeCategory::Callouts
            }
            Self::Brace
            | Self::Bracket
            | Self::Heart
            | Self::Lightning
            | Self::Sun
            | Self::Moon
            | Self::Cloud
            | Self::Wave
            | Self::Cross
            | Self::Puzzle => ShapeCategory::Special,
        }
    }

    #[must_use]
    pub fn family(self) -> ShapeFamily {
        match self {
            Self::Rectangle
            | Self::RoundedRectangle
            | Self::Process
            | Self::Card
            | Self::Document
            | Self::PredefinedProcess => ShapeFamily::Rectangular,
            Self::Triangle => ShapeFamily::RegularPolygon(3),
            Self::Pentagon => ShapeFamily::RegularPolygon(5),
            Self::Hexagon => ShapeFamily::RegularPolygon(6),
            Self::Octagon => ShapeFamily::RegularPolygon(8),
            Self::Star => ShapeFamily::Star,
            Self::Circle | Self::Oval => ShapeFamily::Elliptical,
            Self::Diamond | Self::Decision | Self::Trapezoid | Self::Data | Self::Cross => ShapeFamily::Polygonal,
            Self::Arrow | Self::ArrowLeft | Self::DoubleArrow | Self::CurvedArrow | Self::CircularArrow => {
                ShapeFamily::Directional
            }
            Self::Line | Self::DashedLine | Self::CurvedLine | Self::Connector | Self::Brace | Self::Bracket => {
                ShapeFamily::Stroke
            }
            Self::Heart
            | Self::Cloud
            | Self::Wave
            | Self::Lightning
            | Self::Sun
            | Self::Moon
            | Self::Puzzle
            | Self::Database => ShapeFamily::Freeform,
            Self::RectangularCallout | Self::OvalCallout | Self::CloudCallout | Self::ThoughtBubble => {
                ShapeFamily::Callout
            }
        }
    }

    /// Dash pattern intrinsic to the kind, as an SVG `stroke-dasharray` value.
    #[must_use]
    pub fn stroke_dash(self) -> Option<&'static str> {
        match self {
            Self::DashedLine => Some("8 4"),
            _ => None,
        }
    }

    /// Parse a wire name, falling back to [`ShapeType::Rectangle`] for unknown names.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|err: ParseShapeError| {
            tracing::debug!(%err, "falling back to rectangle");
            Self::Rectangle
        })
    }

    /// Kinds in the given category, in catalog order.
    pub fn in_category(category: ShapeCategory) -> impl Iterator<Item = ShapeType> {
        Self::ALL.into_iter().filter(move |s| s.category() == category)
    }
}

impl ShapeCategory {
    /// Every category, in picker order.
    pub const ALL: [ShapeCategory; 5] =
        [Self::Basic, Self::ArrowsAndLines, Self::Flowchart, Self::Callouts, Self::Special];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic Shapes",
            Self::ArrowsAndLines => "Arrows & Lines",
            Self::Flowchart => "Flowchart",
            Self::Callouts => "Callouts",
            Self::Special => "Special Shapes",
        }
    }
}

impl FromStr for ShapeType {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == needle)
            .ok_or_else(|| ParseShapeError(needle.to_owned()))
    }
}

impl From<String> for ShapeType {
    fn from(raw: String) -> Self {
        Self::parse_or_default(&raw)
    }
}

impl From<ShapeType> for String {
    fn from(shape: ShapeType) -> Self {
        shape.as_str().to_owned()
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
