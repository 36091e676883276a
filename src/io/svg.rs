use super::{IoError, check_output_path};
use crate::document::{Document, Shape};
use crate::float_types::Real;
use std::path::Path;

use ::svg::node::element::{Line, Polyline as SvgPolyline, Style as SvgStyle};

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Coordinates are written with three decimals.
pub fn format_coordinate(value: Real) -> String {
    format!("{value:.3}")
}

/// Serialises `document` to SVG text.
///
/// The output holds the XML header, a single `<style>` block with one
/// `.class{key:value;...}` rule per defined class (fully resolved against
/// the document's base style), and one element per shape: a `<polyline>`
/// for paths, a group of `<line>`s for segment shapes.
///
/// An empty document is rejected since it has no extents for the view box.
pub fn to_svg(document: &Document) -> Result<String, IoError> {
    let (min, max) = document
        .extents()
        .ok_or_else(|| IoError::MalformedInput("document has no shapes".to_string()))?;
    let width = max.x - min.x;
    let height = max.y - min.y;

    let css: String = document
        .class_names()
        .into_iter()
        .map(|name| format!(".{name}{{{}}}", document.resolve_class(name).to_css()))
        .collect::<Vec<_>>()
        .join("\n");

    let mut svg_doc = ::svg::Document::new()
        .set("width", format_coordinate(width))
        .set("height", format_coordinate(height))
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                format_coordinate(min.x),
                format_coordinate(min.y),
                format_coordinate(width),
                format_coordinate(height)
            ),
        )
        .add(SvgStyle::new(css));

    for element in document.elements() {
        match &element.shape {
            Shape::Path(polyline) => {
                let points = polyline
                    .points
                    .iter()
                    .map(|p| format!("{},{}", format_coordinate(p.x), format_coordinate(p.y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                svg_doc = svg_doc.add(
                    SvgPolyline::new()
                        .set("class", element.class.as_str())
                        .set("points", points),
                );
            },
            Shape::Segments(polyline) => {
                for (a, b) in polyline.segments() {
                    svg_doc = svg_doc.add(
                        Line::new()
                            .set("class", element.class.as_str())
                            .set("x1", format_coordinate(a.x))
                            .set("y1", format_coordinate(a.y))
                            .set("x2", format_coordinate(b.x))
                            .set("y2", format_coordinate(b.y)),
                    );
                }
            },
        }
    }

    Ok(format!("{XML_HEADER}\n{svg_doc}\n"))
}

/// Writes `document` as an SVG file at `path`.
pub fn save_svg(path: impl AsRef<Path>, document: &Document) -> Result<(), IoError> {
    let path = path.as_ref();
    check_output_path(path)?;
    let text = to_svg(document)?;
    std::fs::write(path, text)?;
    log::info!("wrote {}", path.display());
    Ok(())
}
