//! Tab/gap layout of a single panel edge.

use crate::errors::ConfigurationError;
use crate::float_types::Real;
use crate::rotation::rotate;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Upper bound on the tabs of one edge, keeping its point count representable.
pub const MAX_TABS_PER_EDGE: usize = 1 << 20;

/// Shape of one panel edge.
///
/// `Outie` and `Innie` are the two halves of a finger joint: along a shared
/// box edge one panel is cut `Outie` and its neighbour `Innie`, so the tabs of
/// one land in the gaps of the other. The flat variants carry no tabs and
/// only choose which of the two joint lines the straight cut follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    Outie,
    Innie,
    FlatOut,
    FlatIn,
}

impl EdgeType {
    pub const fn is_flat(self) -> bool {
        matches!(self, EdgeType::FlatOut | EdgeType::FlatIn)
    }

    /// Single-letter code used in the face tables' documentation.
    pub const fn code(self) -> char {
        match self {
            EdgeType::Outie => 'O',
            EdgeType::Innie => 'I',
            EdgeType::FlatOut => 'o',
            EdgeType::FlatIn => 'i',
        }
    }

    /// Innie and FlatOut edges start on the nominal edge line; Outie and
    /// FlatIn edges start one material thickness outside it.
    const fn starts_on_nominal_line(self) -> bool {
        matches!(self, EdgeType::Innie | EdgeType::FlatOut)
    }
}

/// Generates the points of one edge, from near `corner` to near `corner + edge_vector`.
///
/// # Parameters
/// - `corner`: start corner of the nominal edge
/// - `edge_vector`: nominal edge, before material compensation
/// - `num_tabs`: number of tab/gap cycles (0 gives a straight segment)
/// - `edge_type`: tab direction, see [`EdgeType`]
/// - `tab_fraction`: share of each tab+gap cycle taken by the tab, in (0, 1]
/// - `material_thickness`: sheet thickness
/// - `tab_tolerance`: signed amount moved from each tab (after the first) to the following gap
///
/// The edge is first shortened by `material_thickness` at both ends, where
/// the perpendicular neighbouring panels sit. The remaining length is split
/// into `num_tabs + 1` tab segments and `num_tabs` gaps:
///
/// ```text
/// tab = shrunk_length / (1 + num_tabs / tab_fraction)
/// gap = tab · (1 − tab_fraction) / tab_fraction
/// ```
///
/// An edge with `n > 0` tabs yields `4n + 3` points, an edge with no tabs
/// yields exactly two.
pub fn generate_edge(
    corner: Point2<Real>,
    edge_vector: Vector2<Real>,
    num_tabs: usize,
    edge_type: EdgeType,
    tab_fraction: Real,
    material_thickness: Real,
    tab_tolerance: Real,
) -> Result<Vec<Point2<Real>>, ConfigurationError> {
    let length = edge_vector.norm();
    if !(length.is_finite() && length > 0.0) {
        return Err(ConfigurationError::DegenerateEdge);
    }
    if !(tab_fraction > 0.0 && tab_fraction <= 1.0) {
        return Err(ConfigurationError::TabFraction(tab_fraction));
    }
    if !(material_thickness.is_finite() && material_thickness >= 0.0) {
        return Err(ConfigurationError::MaterialThickness(material_thickness));
    }
    if !tab_tolerance.is_finite() {
        return Err(ConfigurationError::TabTolerance(tab_tolerance));
    }
    if num_tabs > MAX_TABS_PER_EDGE {
        return Err(ConfigurationError::TooManyTabs {
            count: num_tabs,
            max: MAX_TABS_PER_EDGE,
        });
    }
    if 2.0 * material_thickness >= length {
        return Err(ConfigurationError::EdgeTooShort {
            length,
            material_thickness,
        });
    }

    if num_tabs == 0 && !edge_type.is_flat() {
        log::warn!("{edge_type:?} edge of length {length:.3} has no tabs, cutting it straight");
    }

    let edge_hat = edge_vector / length;
    let edge_vector = edge_vector - edge_hat * (2.0 * material_thickness);
    let shrunk_length = edge_vector.norm();

    let tab_vector = edge_hat * (shrunk_length / (1.0 + num_tabs as Real / tab_fraction));
    let gap_vector = tab_vector * ((1.0 - tab_fraction) / tab_fraction);

    let (tab_tolerance, in_vector, out_vector, start) = if edge_type.starts_on_nominal_line() {
        let in_vector = rotate(&edge_hat, -1) * material_thickness;
        let out_vector = rotate(&edge_hat, 1) * material_thickness;
        (-tab_tolerance, in_vector, out_vector, edge_hat * material_thickness)
    } else {
        let in_vector = rotate(&edge_hat, 1) * material_thickness;
        let out_vector = rotate(&edge_hat, -1) * material_thickness;
        (
            tab_tolerance,
            in_vector,
            out_vector,
            out_vector + edge_hat * material_thickness,
        )
    };
    // computed directly so accumulated tab steps cannot drift the end point
    let end = start + edge_vector;

    let mut points = Vec::with_capacity(4 * num_tabs + 3);
    let mut cursor = Point2::from(start);
    points.push(cursor);
    for tab in 0..num_tabs {
        let offset = if tab == 0 {
            Vector2::zeros()
        } else {
            edge_hat * tab_tolerance
        };
        cursor += tab_vector - offset;
        points.push(cursor);
        cursor += in_vector;
        points.push(cursor);
        cursor += gap_vector + offset;
        points.push(cursor);
        cursor += out_vector;
        points.push(cursor);
    }
    if num_tabs > 0 {
        cursor += tab_vector;
        points.push(cursor);
    }
    points.push(Point2::from(end));

    log::trace!(
        "{:?} edge from ({:.3}, {:.3}): {} tabs, tab {:.4}, gap {:.4}",
        edge_type,
        corner.x,
        corner.y,
        num_tabs,
        tab_vector.norm(),
        gap_vector.norm()
    );

    Ok(points.into_iter().map(|p| p + corner.coords).collect())
}
