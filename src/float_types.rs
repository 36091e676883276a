//! Scalar type, circle constants, length units and the closing tolerance.

use std::sync::OnceLock;

#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

#[cfg(feature = "f32")]
pub use core::f32::consts::{PI, TAU};
#[cfg(feature = "f64")]
pub use core::f64::consts::{PI, TAU};

/// Lengths carry no unit of their own; these factors convert into millimetres.
pub const MM: Real = 1.0;
pub const INCH: Real = 25.4;
/// A thousandth of an inch. Box and gear defaults are given in thou.
pub const THOU: Real = INCH / 1000.0;

static CLOSING_TOLERANCE: OnceLock<Real> = OnceLock::new();

const fn precision_default() -> Real {
    if cfg!(feature = "f32") { 1e-4 } else { 1e-6 }
}

/// Distance under which two points count as the same when testing whether a
/// polyline is closed.
///
/// Fixed on first use: a value set through [`set_tolerance`] wins, then
/// `CUTPATH_TOLERANCE` as seen at build time, then the precision default
/// (`1e-6` for f64, `1e-4` for f32). Never smaller than `Real::EPSILON`.
pub fn tolerance() -> Real {
    *CLOSING_TOLERANCE.get_or_init(|| {
        option_env!("CUTPATH_TOLERANCE")
            .and_then(|text| text.trim().parse::<Real>().ok())
            .map_or(precision_default(), |value| value.max(Real::EPSILON))
    })
}

/// Fixes the tolerance before anything has read it.
///
/// Returns `false` (and changes nothing) once the tolerance is in use.
pub fn set_tolerance(value: Real) -> bool {
    CLOSING_TOLERANCE.set(value.max(Real::EPSILON)).is_ok()
}
