//! Interlocking tabbed box panels.
//!
//! A box is cut as six flat panels whose edges carry alternating tabs and
//! gaps. Where two panels meet, one is cut [`Outie`](EdgeType::Outie) and the
//! other [`Innie`](EdgeType::Innie), so the joint closes without gaps. Edge
//! lengths are compensated for the sheet thickness occupied by the mating
//! panels at each corner.
//!
//! ```
//! use cutpath::tabbed_box::{BoxConfig, generate_box_faces};
//! let faces = generate_box_faces(&BoxConfig::default()).unwrap();
//! assert!(faces.iter().all(|face| face.polyline.is_closed()));
//! ```

pub mod edge;
pub mod face;
pub mod tables;

pub use edge::{EdgeType, MAX_TABS_PER_EDGE, generate_edge};
pub use face::assemble_face;
pub use tables::{FaceSpec, face_specs};

use crate::errors::ConfigurationError;
use crate::float_types::Real;
use crate::polyline::Polyline;
use geo::Rect;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parameters of a tabbed box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    /// outer extents along x, y and z
    pub box_size: [Real; 3],
    /// edge length per tab; each axis gets `ceil(size / thou_per_tab)` tabs
    pub thou_per_tab: Real,
    pub material_thickness: Real,
    /// share of each tab+gap cycle taken by the tab, in (0, 1]
    pub tab_fraction: Real,
    /// signed fit adjustment moved from tabs into gaps
    pub tab_tolerance: Real,
    /// leave the top panel untabbed
    pub door: bool,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            box_size: [6000.0, 7000.0, 8000.0],
            thou_per_tab: 500.0,
            material_thickness: 125.0,
            tab_fraction: 0.5,
            tab_tolerance: 0.0,
            door: false,
        }
    }
}

impl BoxConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (axis, &value) in self.box_size.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigurationError::BoxSize { axis, value });
            }
        }
        if !(self.thou_per_tab.is_finite() && self.thou_per_tab > 0.0) {
            return Err(ConfigurationError::TabPitch(self.thou_per_tab));
        }
        let count = tab_counts(self).into_iter().max().unwrap_or(0);
        if count > MAX_TABS_PER_EDGE {
            return Err(ConfigurationError::TooManyTabs {
                count,
                max: MAX_TABS_PER_EDGE,
            });
        }
        if !(self.tab_fraction > 0.0 && self.tab_fraction <= 1.0) {
            return Err(ConfigurationError::TabFraction(self.tab_fraction));
        }
        if !(self.material_thickness.is_finite() && self.material_thickness >= 0.0) {
            return Err(ConfigurationError::MaterialThickness(self.material_thickness));
        }
        if !self.tab_tolerance.is_finite() {
            return Err(ConfigurationError::TabTolerance(self.tab_tolerance));
        }
        // every panel edge is one of the three box dimensions
        let shortest = self.box_size.iter().copied().fold(Real::INFINITY, Real::min);
        if 2.0 * self.material_thickness >= shortest {
            return Err(ConfigurationError::EdgeTooShort {
                length: shortest,
                material_thickness: self.material_thickness,
            });
        }
        Ok(())
    }
}

/// Per-axis tab count, `ceil(box_size[i] / thou_per_tab)`.
///
/// Counts too large for `usize` saturate; [`BoxConfig::validate`] rejects
/// anything above [`MAX_TABS_PER_EDGE`].
pub fn tab_counts(config: &BoxConfig) -> [usize; 3] {
    config
        .box_size
        .map(|size| (size / config.thou_per_tab).ceil().max(0.0) as usize)
}

/// The six panels, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceName {
    Bottom,
    Top,
    Front,
    Back,
    Left,
    Right,
}

impl FaceName {
    pub const ALL: [FaceName; 6] = [
        FaceName::Bottom,
        FaceName::Top,
        FaceName::Front,
        FaceName::Back,
        FaceName::Left,
        FaceName::Right,
    ];

    /// Box axis the panel is perpendicular to.
    pub const fn normal_axis(self) -> usize {
        match self {
            FaceName::Bottom | FaceName::Top => 2,
            FaceName::Front | FaceName::Back => 1,
            FaceName::Left | FaceName::Right => 0,
        }
    }

    /// `true` for the panel at the far end of its normal axis.
    pub const fn is_far_side(self) -> bool {
        matches!(self, FaceName::Top | FaceName::Back | FaceName::Right)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FaceName::Bottom => "bottom",
            FaceName::Top => "top",
            FaceName::Front => "front",
            FaceName::Back => "back",
            FaceName::Left => "left",
            FaceName::Right => "right",
        }
    }
}

impl std::fmt::Display for FaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated panel: its closed outline and the outline's bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxFace {
    pub name: FaceName,
    pub spec: FaceSpec,
    pub polyline: Polyline,
    pub bounds: Rect<Real>,
}

/// Generates the six closed panel outlines of the box described by `config`.
///
/// The panel table is chosen by `config.door`. The whole configuration is
/// validated before any panel is built.
pub fn generate_box_faces(config: &BoxConfig) -> Result<[BoxFace; 6], ConfigurationError> {
    config.validate()?;

    let specs = face_specs(config.door);
    let num_tabs = tab_counts(config);

    let build = |(name, spec): (FaceName, &FaceSpec)| -> Result<BoxFace, ConfigurationError> {
        let polyline = assemble_face(
            spec,
            config.box_size,
            num_tabs,
            config.material_thickness,
            config.tab_fraction,
            config.tab_tolerance,
        )?;
        let bounds = polyline
            .bounding_box()
            .ok_or(ConfigurationError::InconsistentFaceSpec(spec.directions))?;
        log::trace!("{name} panel: {} points", polyline.len());
        Ok(BoxFace {
            name,
            spec: *spec,
            polyline,
            bounds,
        })
    };

    #[cfg(not(feature = "parallel"))]
    let faces = FaceName::ALL
        .into_iter()
        .zip(specs.iter())
        .map(build)
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "parallel")]
    let faces = FaceName::ALL
        .into_par_iter()
        .zip(specs.par_iter())
        .map(build)
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "box {:?}: tabs per axis {:?}, {} points over six panels",
        config.box_size,
        num_tabs,
        faces.iter().map(|face| face.polyline.len()).sum::<usize>()
    );

    faces
        .try_into()
        .map_err(|_| ConfigurationError::InconsistentFaceSpec([0; 4]))
}
