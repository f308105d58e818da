//! Styling layer: SVG markup for shape elements.
//!
//! Paint (fill, stroke, opacity, dash, drop shadow) is applied on top of the
//! synthesized outline without changing it. Rotation and skew are a separate
//! affine about the shape's own centre: standalone markup carries it as a
//! `transform` attribute, while markup placed inside a view leaves it to the
//! view's CSS `transform` (see [`crate::dom`]).

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::doc::{BorderStyle, Element, ShadowIntensity};
use crate::path::fmt_num;
use crate::transform::Affine;
use crate::viewport::Point;

/// Drop-shadow parameters: offset, blur radius, and shadow opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowPreset {
    pub dx: f64,
    pub dy: f64,
    pub blur: f64,
    pub opacity: f64,
}

/// Preset for a shadow intensity tag; `None` draws no shadow.
#[must_use]
pub fn shadow_preset(intensity: ShadowIntensity) -> Option<ShadowPreset> {
    let (dx, dy, blur, opacity) = match intensity {
        ShadowIntensity::None => return None,
        ShadowIntensity::Light => (2.0, 2.0, 3.0, 0.3),
        ShadowIntensity::Medium => (4.0, 4.0, 5.0, 0.4),
        ShadowIntensity::Strong => (6.0, 6.0, 8.0, 0.5),
    };
    Some(ShadowPreset { dx, dy, blur, opacity })
}

/// `stroke-dasharray` for an element. A kind's own dash wins over its border style.
#[must_use]
pub fn dash_array(element: &Element) -> Option<&'static str> {
    if let Some(dash) = element.kind.shape_type().and_then(|s| s.stroke_dash()) {
        return Some(dash);
    }
    match element.style.border {
        BorderStyle::Dashed => Some("8 4"),
        BorderStyle::Dotted => Some("2 2"),
        BorderStyle::Solid | BorderStyle::Double | BorderStyle::None => None,
    }
}

/// Standalone SVG for a shape element, rotation and skew included.
/// Returns `None` for non-shape elements.
#[must_use]
pub fn shape_svg(element: &Element) -> Option<String> {
    render(element, true)
}

/// SVG for the inside of an element's view. The view applies rotation and skew.
#[must_use]
pub fn view_svg(element: &Element) -> Option<String> {
    render(element, false)
}

fn render(element: &Element, with_transform: bool) -> Option<String> {
    let outline = element.outline()?;
    let (w, h) = (fmt_num(element.width), fmt_num(element.height));
    let style = &element.style;
    let shadow = shadow_preset(style.shadow);
    let filter_id = format!("shadow-{}", element.id.simple());

    let mut out = String::with_capacity(512);
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    push_attr(&mut out, "width", &w);
    push_attr(&mut out, "height", &h);
    push_attr(&mut out, "viewBox", &format!("0 0 {w} {h}"));
    out.push_str(r#" preserveAspectRatio="none" overflow="visible">"#);

    if let Some(s) = shadow {
        out.push_str("<defs><filter");
        push_attr(&mut out, "id", &filter_id);
        out.push_str(r#" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow"#);
        push_attr(&mut out, "dx", &fmt_num(s.dx));
        push_attr(&mut out, "dy", &fmt_num(s.dy));
        // CSS blur radius is roughly two standard deviations.
        push_attr(&mut out, "stdDeviation", &fmt_num(s.blur / 2.0));
        push_attr(&mut out, "flood-opacity", &fmt_num(s.opacity));
        out.push_str("/></filter></defs>");
    }

    out.push_str("<path");
    push_attr(&mut out, "d", &outline.to_svg_d());
    let fill = if outline.is_closed() { style.fill.as_str() } else { "none" };
    push_attr(&mut out, "fill", fill);
    let stroke = if style.border == BorderStyle::None { "none" } else { style.stroke.as_str() };
    push_attr(&mut out, "stroke", stroke);
    push_attr(&mut out, "stroke-width", &fmt_num(style.stroke_width));
    push_attr(&mut out, "opacity", &fmt_num(style.opacity));
    if let Some(dash) = dash_array(element) {
        push_attr(&mut out, "stroke-dasharray", dash);
    }
    if shadow.is_some() {
        push_attr(&mut out, "filter", &format!("url(#{filter_id})"));
    }
    if with_transform {
        let center = Point::new(element.width / 2.0, element.height / 2.0);
        let m = Affine::about_center(center, element.rotation, element.skew_x, element.skew_y);
        if !m.is_identity() {
            push_attr(&mut out, "transform", &m.to_svg());
        }
    }
    out.push_str("/></svg>");
    Some(out)
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

/// Escape a string for use inside a double-quoted XML attribute.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Markup for the rotation guide: a line from the pivot to the pointer and a
/// centre marker, in screen coordinates.
#[must_use]
pub fn rotation_guide_svg(center: Point, pointer: Point) -> String {
    let (cx, cy) = (fmt_num(center.x), fmt_num(center.y));
    let (px, py) = (fmt_num(pointer.x), fmt_num(pointer.y));
    format!(
        r##"<line x1="{cx}" y1="{cy}" x2="{px}" y2="{py}" stroke="#3498db" stroke-width="1" stroke-dasharray="4 4"/><circle cx="{cx}" cy="{cy}" r="4" fill="#3498db"/>"##
    )
}
