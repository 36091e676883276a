//! Sheet layout of generated outlines.

use crate::float_types::Real;
use crate::polyline::Polyline;
use geo::Rect;
use nalgebra::Vector2;

/// Parts per row used by [`arrange`]; six box panels come out as two rows of three.
pub const DEFAULT_COLUMNS: usize = 3;

/// Shelf-packs rectangles into rows of `columns`.
///
/// Returns, for every input rectangle, the translation that moves its min
/// corner onto the packing cursor. Rows are `spacing` apart and as tall as
/// their tallest member, so translated rectangles never overlap as long as
/// `spacing >= 0`.
pub fn tile(bounds: &[Rect<Real>], spacing: Real, columns: usize) -> Vec<Vector2<Real>> {
    let columns = columns.max(1);
    let spacing = spacing.max(0.0);

    let mut offsets = Vec::with_capacity(bounds.len());
    let mut y = 0.0;
    for row in bounds.chunks(columns) {
        let mut x = 0.0;
        let mut row_height: Real = 0.0;
        for rect in row {
            offsets.push(Vector2::new(x - rect.min().x, y - rect.min().y));
            x += rect.width() + spacing;
            row_height = row_height.max(rect.height());
        }
        y += row_height + spacing;
    }
    offsets
}

/// Translates each outline so that none overlap, using [`tile`] on their
/// bounding boxes. Empty outlines are passed through unchanged.
pub fn arrange(polylines: &[Polyline], spacing: Real, columns: usize) -> Vec<Polyline> {
    let placed: Vec<(usize, Rect<Real>)> = polylines
        .iter()
        .enumerate()
        .filter_map(|(i, polyline)| polyline.bounding_box().map(|rect| (i, rect)))
        .collect();
    let bounds: Vec<Rect<Real>> = placed.iter().map(|&(_, rect)| rect).collect();
    let offsets = tile(&bounds, spacing, columns);

    let mut arranged = polylines.to_vec();
    for (&(i, _), offset) in placed.iter().zip(&offsets) {
        arranged[i] = polylines[i].translated(offset);
    }
    arranged
}
