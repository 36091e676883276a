//! Flat-faceted gear and rack tooth profiles.
//!
//! Teeth are laid out along a straight *stroke* of length `stroke_length`:
//! `y` is the distance travelled along the pitch line and `x` is the offset
//! across it. A rack keeps that layout and gains a rectangular body; a
//! circular gear wraps the stroke once around its pitch circle, turning `y`
//! into an angle and `x` into a radial offset.

use crate::errors::ConfigurationError;
use crate::float_types::{Real, TAU};
use crate::polyline::Polyline;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Upper bound on `num_teeth`, keeping the outline's point count representable.
pub const MAX_TEETH: usize = 1 << 20;

/// Parameters of one gear or rack outline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearConfig {
    /// number of teeth (>= 1)
    pub num_teeth: usize,
    /// crest-to-root distance across the pitch line
    pub tooth_depth: Real,
    /// pitch-line length covered by all teeth (the pitch circumference of a gear)
    pub stroke_length: Real,
    /// share of each tooth period spent on crest and root flats, in [0, 1)
    pub tooth_top_fraction: Real,
    /// wrap onto the pitch circle (`true`) or lay out as a straight rack
    pub circular: bool,
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            num_teeth: 24,
            tooth_depth: 150.0,
            stroke_length: 6000.0,
            tooth_top_fraction: 0.3,
            circular: true,
        }
    }
}

impl GearConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.num_teeth < 1 {
            return Err(ConfigurationError::TooFewTeeth(self.num_teeth));
        }
        if self.num_teeth > MAX_TEETH {
            return Err(ConfigurationError::TooManyTeeth {
                count: self.num_teeth,
                max: MAX_TEETH,
            });
        }
        if !(0.0..1.0).contains(&self.tooth_top_fraction) {
            return Err(ConfigurationError::ToothTopFraction(self.tooth_top_fraction));
        }
        if !(self.stroke_length.is_finite() && self.stroke_length > 0.0) {
            return Err(ConfigurationError::StrokeLength(self.stroke_length));
        }
        if !(self.tooth_depth.is_finite() && self.tooth_depth >= 0.0) {
            return Err(ConfigurationError::ToothDepth(self.tooth_depth));
        }
        Ok(())
    }

    /// Pitch-line length of one tooth (slope, crest, slope, root).
    pub fn tooth_period(&self) -> Real {
        self.stroke_length / self.num_teeth as Real
    }

    /// Radius of the circle whose circumference is the stroke length.
    pub fn pitch_radius(&self) -> Real {
        self.stroke_length / TAU
    }
}

/// Builds the outline described by `config`.
///
/// The outline starts at `(-tooth_depth/2, 0)` and records five points per
/// tooth (the point before the rising flank, then the end of the rising
/// flank, crest, falling flank and root), followed by the final running
/// position.
///
/// - **Rack** (`circular == false`): two more points, `(-r, last_y)` and
///   `(-r, 0)` with `r = stroke_length / 2π`, give the rack its body.
/// - **Gear** (`circular == true`): every point `(x, y)` is mapped to polar
///   coordinates `((r + x)·cos θ, (r + x)·sin θ)` with `θ = 2π·y / stroke_length`.
///   Since the teeth cover exactly one stroke the outline closes on itself.
///
/// # Example
/// ```
/// use cutpath::gear::{GearConfig, generate_gear_profile};
/// let rack = generate_gear_profile(&GearConfig {
///     num_teeth: 4,
///     tooth_depth: 10.0,
///     stroke_length: 40.0,
///     tooth_top_fraction: 0.5,
///     circular: false,
/// })
/// .unwrap();
/// assert_eq!(rack.len(), 23);
/// ```
pub fn generate_gear_profile(config: &GearConfig) -> Result<Polyline, ConfigurationError> {
    config.validate()?;

    let tooth_period = config.tooth_period();
    let depth = config.tooth_depth;
    let top = config.tooth_top_fraction * tooth_period / 2.0;
    let slope_width = (1.0 - config.tooth_top_fraction) * tooth_period / 2.0;

    let tooth = [
        Vector2::new(depth, slope_width),  // rising flank
        Vector2::new(0.0, top),            // crest
        Vector2::new(-depth, slope_width), // falling flank
        Vector2::new(0.0, top),            // root
    ];

    let mut points = Vec::with_capacity(5 * config.num_teeth + 3);
    let mut cursor = Point2::new(-depth / 2.0, 0.0);
    for _ in 0..config.num_teeth {
        points.push(cursor);
        for &step in &tooth {
            cursor += step;
            points.push(cursor);
        }
    }
    points.push(cursor);

    let radius = config.pitch_radius();
    if config.circular {
        let stroke = config.stroke_length;
        for p in points.iter_mut() {
            let theta = TAU * p.y / stroke;
            let r = radius + p.x;
            *p = Point2::new(r * theta.cos(), r * theta.sin());
        }
    } else {
        points.push(Point2::new(-radius, cursor.y));
        points.push(Point2::new(-radius, 0.0));
    }

    log::debug!(
        "{} profile: {} teeth, period {:.4}, {} points",
        if config.circular { "gear" } else { "rack" },
        config.num_teeth,
        tooth_period,
        points.len()
    );

    Ok(Polyline::new(points))
}
