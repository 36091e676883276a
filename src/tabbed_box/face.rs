//! One closed panel outline from four edges.

use super::edge::generate_edge;
use super::tables::FaceSpec;
use crate::errors::ConfigurationError;
use crate::float_types::Real;
use crate::polyline::Polyline;
use nalgebra::{Point2, Vector2};

/// Corners of the unit square, walked counter-clockwise from the origin.
const UNIT_SQUARE: [[Real; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Builds the closed outline of one panel.
///
/// The unit square is scaled by the lengths of the face's two axes; each of
/// its four sides is cut by [`generate_edge`] with `num_tabs[direction]` tabs,
/// or none when the side is flat. The edges are concatenated and the first
/// point is repeated to close the loop.
///
/// A face whose four sides are all flat is emitted as the plain rectangle
/// where its flat edge lines meet (five points, closed).
pub fn assemble_face(
    spec: &FaceSpec,
    box_size: [Real; 3],
    num_tabs: [usize; 3],
    material_thickness: Real,
    tab_fraction: Real,
    tab_tolerance: Real,
) -> Result<Polyline, ConfigurationError> {
    let [d0, d1, d2, d3] = spec.directions;
    if d0 != d2 || d1 != d3 || d0 == d1 || d0 > 2 || d1 > 2 {
        return Err(ConfigurationError::InconsistentFaceSpec(spec.directions));
    }

    let scale = Vector2::new(box_size[d0], box_size[d1]);
    let corners: [Point2<Real>; 4] =
        UNIT_SQUARE.map(|[x, y]| Point2::new(x * scale.x, y * scale.y));

    let mut edges = Vec::with_capacity(4);
    for (i, (&shape, &direction)) in spec.shapes.iter().zip(&spec.directions).enumerate() {
        let corner = corners[i];
        let next = corners[(i + 1) % 4];
        let tabs = if shape.is_flat() { 0 } else { num_tabs[direction] };
        edges.push(generate_edge(
            corner,
            next - corner,
            tabs,
            shape,
            tab_fraction,
            material_thickness,
            tab_tolerance,
        )?);
    }

    if spec.is_flat() {
        return Ok(square_off(&edges));
    }

    let mut points = edges.concat();
    points.push(points[0]);
    Ok(Polyline::new(points))
}

/// Rectangle through the corners where consecutive straight edges meet.
fn square_off(edges: &[Vec<Point2<Real>>]) -> Polyline {
    let n = edges.len();
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..n {
        let before = &edges[(i + n - 1) % n];
        let after = &edges[i];
        let corner = line_intersection(
            before[0],
            before[before.len() - 1] - before[0],
            after[0],
            after[after.len() - 1] - after[0],
        )
        // parallel neighbours only happen on degenerate specs; keep the edge start
        .unwrap_or(after[0]);
        points.push(corner);
    }
    points.push(points[0]);
    Polyline::new(points)
}

/// Intersection of the lines `p + t·r` and `q + u·s`, `None` when parallel.
fn line_intersection(
    p: Point2<Real>,
    r: Vector2<Real>,
    q: Point2<Real>,
    s: Vector2<Real>,
) -> Option<Point2<Real>> {
    let denom = r.perp(&s);
    if denom.abs() <= Real::EPSILON * r.norm() * s.norm() {
        return None;
    }
    let t = (q - p).perp(&s) / denom;
    Some(p + r * t)
}
