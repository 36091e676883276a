//! Ordered point sequences, the common output of every generator.

use crate::float_types::{Real, tolerance};
use geo::{BoundingRect, Coord, LineString, Rect};
use nalgebra::{Point2, Vector2};

/// An ordered sequence of 2D points.
///
/// A polyline is *closed* when its first and last points coincide within
/// [`tolerance`]. Generators never drop the closing point, so closed
/// outlines have one more point than they have distinct corners.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point2<Real>>,
}

impl Polyline {
    pub const fn new(points: Vec<Point2<Real>>) -> Self {
        Self { points }
    }

    pub fn from_xy(points: &[[Real; 2]]) -> Self {
        Self::new(points.iter().map(|&[x, y]| Point2::new(x, y)).collect())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point2<Real>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point2<Real>> {
        self.points.last()
    }

    /// `true` when the first and last points coincide.
    ///
    /// The tolerance is relative to the magnitude of the first point so that
    /// outlines measured in thousandths of an inch behave like ones in mm.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                let scale = first.coords.norm().max(1.0);
                (first - last).norm() <= tolerance() * scale
            },
            _ => false,
        }
    }

    /// Appends the first point again unless the polyline is already closed.
    pub fn closed(mut self) -> Self {
        if !self.is_closed() {
            if let Some(&first) = self.points.first() {
                self.points.push(first);
            }
        }
        self
    }

    /// Axis-aligned bounding box, `None` for an empty polyline.
    pub fn bounding_box(&self) -> Option<Rect<Real>> {
        self.to_line_string().bounding_rect()
    }

    /// Returns a copy with every point moved by `offset`.
    pub fn translated(&self, offset: &Vector2<Real>) -> Self {
        Self::new(self.points.iter().map(|p| p + offset).collect())
    }

    /// Consecutive point pairs, i.e. the individual line segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = (Point2<Real>, Point2<Real>)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn to_line_string(&self) -> LineString<Real> {
        LineString::new(
            self.points
                .iter()
                .map(|p| Coord { x: p.x, y: p.y })
                .collect(),
        )
    }
}

impl From<Polyline> for LineString<Real> {
    fn from(polyline: Polyline) -> Self {
        polyline.to_line_string()
    }
}

impl From<&LineString<Real>> for Polyline {
    fn from(line_string: &LineString<Real>) -> Self {
        Self::new(line_string.coords().map(|c| Point2::new(c.x, c.y)).collect())
    }
}
