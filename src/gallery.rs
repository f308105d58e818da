//! SVG contact sheet of every shape kind.

use canvas::catalog::ShapeType;
use canvas::doc::{Bounds, Element};
use canvas::path::fmt_num;
use canvas::render::{escape_attr, shape_svg};

/// Height reserved under each cell for its label.
const LABEL_HEIGHT: f64 = 16.0;

/// Shape inset inside its cell, as a fraction of the cell size.
const INSET: f64 = 0.1;

/// Lay out `shapes` on a grid of `columns` square cells of `cell` units,
/// each shape drawn with the default style and labelled with its name.
#[must_use]
pub fn render_gallery(shapes: &[ShapeType], cell: f64, columns: usize) -> String {
    let columns = columns.max(1);
    let rows = shapes.len().div_ceil(columns);
    let row_height = cell + LABEL_HEIGHT;
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (cell * columns as f64, row_height * rows as f64);

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(width),
        h = fmt_num(height),
    ));
    out.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);

    let inner = cell * (1.0 - 2.0 * INSET);
    for (i, shape) in shapes.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let (col, row) = ((i % columns) as f64, (i / columns) as f64);
        let (x, y) = (col * cell, row * row_height);
        let element = Element::shape(*shape, Bounds::new(0.0, 0.0, inner, inner));
        let Some(markup) = shape_svg(&element) else {
            continue;
        };
        out.push_str(&format!(
            r#"<g transform="translate({} {})">{markup}</g>"#,
            fmt_num(x + cell * INSET),
            fmt_num(y + cell * INSET),
        ));
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="11" text-anchor="middle">{}</text>"#,
            fmt_num(x + cell / 2.0),
            fmt_num(y + cell + LABEL_HEIGHT * 0.75),
            escape_attr(shape.as_str()),
        ));
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
#[path = "gallery_test.rs"]
mod tests;
