//! Drawing document: shapes tagged with named style classes.
//!
//! A [`Document`] is an immutable builder. Every `with_*` call consumes the
//! document and returns a new one with one more class or element, so a
//! finished document is a plain value that can be rendered any number of
//! times with the same result. Rendering lives in [`crate::io`].

use crate::float_types::Real;
use crate::polyline::Polyline;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The style properties a document understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKey {
    Stroke,
    StrokeWidth,
    Fill,
    StrokeLinecap,
    StrokeLinejoin,
    Opacity,
}

impl StyleKey {
    /// CSS property name.
    pub const fn css_name(self) -> &'static str {
        match self {
            StyleKey::Stroke => "stroke",
            StyleKey::StrokeWidth => "stroke-width",
            StyleKey::Fill => "fill",
            StyleKey::StrokeLinecap => "stroke-linecap",
            StyleKey::StrokeLinejoin => "stroke-linejoin",
            StyleKey::Opacity => "opacity",
        }
    }
}

/// A set of style properties, at most one value per key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<StyleKey, String>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the style with `key` set to `value`, replacing any previous value.
    pub fn set(mut self, key: StyleKey, value: impl Into<String>) -> Self {
        self.0.insert(key, value.into());
        self
    }

    pub fn get(&self, key: StyleKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &str)> {
        self.0.iter().map(|(&key, value)| (key, value.as_str()))
    }

    /// `key:value;` pairs in key order, e.g. `stroke:red;stroke-width:0.1;`.
    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}:{};", key.css_name(), value))
            .collect()
    }
}

impl FromIterator<(StyleKey, String)> for Style {
    fn from_iter<I: IntoIterator<Item = (StyleKey, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Merges `sources` in order; a key set by a later source wins.
pub fn resolve_style(sources: &[&Style]) -> Style {
    sources
        .iter()
        .flat_map(|source| source.0.iter())
        .map(|(&key, value)| (key, value.clone()))
        .collect()
}

/// Default look of laser-cut geometry: hairline red strokes, no fill.
pub fn cut_style() -> Style {
    Style::new()
        .set(StyleKey::Stroke, "#ff0000")
        .set(StyleKey::StrokeWidth, "0.1")
        .set(StyleKey::Fill, "none")
}

/// How a polyline is drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// one `<polyline>` through every point
    Path(Polyline),
    /// one `<line>` per consecutive point pair
    Segments(Polyline),
}

impl Shape {
    pub const fn polyline(&self) -> &Polyline {
        match self {
            Shape::Path(polyline) | Shape::Segments(polyline) => polyline,
        }
    }
}

/// A shape and the class it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub class: String,
}

/// Shapes plus the style classes they refer to.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    base_style: Style,
    classes: Vec<(String, Style)>,
    elements: Vec<Element>,
    offset: Vector2<Real>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Style::new())
    }
}

impl Document {
    /// A document whose classes all start from `base_style`.
    pub fn new(base_style: Style) -> Self {
        Self {
            base_style,
            classes: Vec::new(),
            elements: Vec::new(),
            offset: Vector2::zeros(),
        }
    }

    /// Defines (or extends) class `name`. Repeated definitions layer on top of
    /// earlier ones.
    pub fn with_class(mut self, name: impl Into<String>, style: Style) -> Self {
        self.classes.push((name.into(), style));
        self
    }

    /// Translation applied to every shape added from now on.
    pub fn with_offset(mut self, offset: Vector2<Real>) -> Self {
        self.offset = offset;
        self
    }

    /// Adds `polyline` as one continuous path.
    pub fn with_polyline(self, polyline: &Polyline, class: impl Into<String>) -> Self {
        let shape = Shape::Path(polyline.translated(&self.offset));
        self.with_element(shape, class.into())
    }

    /// Adds `polyline` as individual line segments.
    pub fn with_segments(self, polyline: &Polyline, class: impl Into<String>) -> Self {
        let shape = Shape::Segments(polyline.translated(&self.offset));
        self.with_element(shape, class.into())
    }

    fn with_element(mut self, shape: Shape, class: String) -> Self {
        self.elements.push(Element { shape, class });
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub const fn base_style(&self) -> &Style {
        &self.base_style
    }

    /// Class names in order of first definition.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (name, _) in &self.classes {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    /// Effective style of class `name`: the base style, then each definition
    /// of the class in the order it was added.
    pub fn resolve_class(&self, name: &str) -> Style {
        let sources: Vec<&Style> = std::iter::once(&self.base_style)
            .chain(
                self.classes
                    .iter()
                    .filter(|(class, _)| class == name)
                    .map(|(_, style)| style),
            )
            .collect();
        resolve_style(&sources)
    }

    /// Extents of all elements as `(min, max)`, `None` for an empty document.
    pub fn extents(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        self.elements
            .iter()
            .filter_map(|element| element.shape.polyline().bounding_box())
            .map(|rect| {
                (
                    Point2::new(rect.min().x, rect.min().y),
                    Point2::new(rect.max().x, rect.max().y),
                )
            })
            .reduce(|(min_a, max_a), (min_b, max_b)| {
                (min_a.inf(&min_b), max_a.sup(&max_b))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_sources_win() {
        let base = Style::new()
            .set(StyleKey::Stroke, "black")
            .set(StyleKey::Fill, "none");
        let over = Style::new().set(StyleKey::Stroke, "blue");
        let resolved = resolve_style(&[&base, &over]);
        assert_eq!(resolved.get(StyleKey::Stroke), Some("blue"));
        assert_eq!(resolved.get(StyleKey::Fill), Some("none"));

        let reversed = resolve_style(&[&over, &base]);
        assert_eq!(reversed.get(StyleKey::Stroke), Some("black"));
    }

    #[test]
    fn css_is_key_value_pairs() {
        let style = Style::new()
            .set(StyleKey::StrokeWidth, "0.5")
            .set(StyleKey::Stroke, "red");
        assert_eq!(style.to_css(), "stroke:red;stroke-width:0.5;");
    }

    #[test]
    fn class_layers_over_base() {
        let doc = Document::new(cut_style())
            .with_class("engrave", Style::new().set(StyleKey::Stroke, "#0000ff"))
            .with_class("engrave", Style::new().set(StyleKey::StrokeWidth, "0.2"))
            .with_class("cut", Style::new());
        let engrave = doc.resolve_class("engrave");
        assert_eq!(engrave.get(StyleKey::Stroke), Some("#0000ff"));
        assert_eq!(engrave.get(StyleKey::StrokeWidth), Some("0.2"));
        assert_eq!(engrave.get(StyleKey::Fill), Some("none"));
        assert_eq!(doc.class_names(), vec!["engrave", "cut"]);
        assert_eq!(doc.resolve_class("cut"), cut_style());
    }

    #[test]
    fn offset_applies_to_later_shapes_only() {
        let square = Polyline::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
        let doc = Document::default()
            .with_polyline(&square, "cut")
            .with_offset(Vector2::new(10.0, 0.0))
            .with_segments(&square, "cut");
        assert_eq!(doc.elements().len(), 2);
        assert_eq!(doc.elements()[0].shape.polyline().points[1].x, 1.0);
        assert_eq!(doc.elements()[1].shape.polyline().points[1].x, 11.0);
        let (min, max) = doc.extents().unwrap();
        assert_eq!(min, Point2::new(0.0, 0.0));
        assert_eq!(max, Point2::new(11.0, 1.0));
    }
}
