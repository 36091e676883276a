//! Configuration errors

use crate::float_types::Real;

/// Every way a gear or box configuration can be rejected.
///
/// All checks run before the first point is emitted, so a generator either
/// returns a complete result or one of these, never a partial polyline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// (TooFewTeeth) A gear needs at least one tooth
    #[error("(TooFewTeeth) a gear needs at least one tooth, got {0}")]
    TooFewTeeth(usize),
    /// (TooManyTeeth) The tooth count exceeds what one outline can hold
    #[error("(TooManyTeeth) at most {max} teeth per outline, got {count}")]
    TooManyTeeth { count: usize, max: usize },
    /// (ToothTopFraction) Crest fraction must lie in [0, 1)
    #[error("(ToothTopFraction) tooth top fraction must lie in [0, 1), got {0}")]
    ToothTopFraction(Real),
    /// (StrokeLength) Stroke length must be positive and finite
    #[error("(StrokeLength) stroke length must be positive, got {0}")]
    StrokeLength(Real),
    /// (ToothDepth) Tooth depth must be finite and non-negative
    #[error("(ToothDepth) tooth depth must be finite and non-negative, got {0}")]
    ToothDepth(Real),
    /// (TabFraction) Tab fraction must lie in (0, 1]
    #[error("(TabFraction) tab fraction must lie in (0, 1], got {0}")]
    TabFraction(Real),
    /// (BoxSize) A box dimension is zero, negative or not finite
    #[error("(BoxSize) box dimension {axis} must be positive, got {value}")]
    BoxSize { axis: usize, value: Real },
    /// (TabPitch) Tab pitch must be positive and finite
    #[error("(TabPitch) length per tab must be positive, got {0}")]
    TabPitch(Real),
    /// (TooManyTabs) The tab pitch asks for more tabs than one edge can hold
    #[error("(TooManyTabs) an edge would need {count} tabs, at most {max} are supported")]
    TooManyTabs { count: usize, max: usize },
    /// (MaterialThickness) Thickness must be finite and non-negative
    #[error("(MaterialThickness) material thickness must be finite and non-negative, got {0}")]
    MaterialThickness(Real),
    /// (TabTolerance) Tolerance must be finite
    #[error("(TabTolerance) tab tolerance must be finite, got {0}")]
    TabTolerance(Real),
    /// (EdgeTooShort) Two material thicknesses consume the whole edge
    #[error(
        "(EdgeTooShort) edge of length {length} leaves nothing after removing 2 x {material_thickness} material"
    )]
    EdgeTooShort { length: Real, material_thickness: Real },
    /// (DegenerateEdge) The edge vector has zero or non-finite length
    #[error("(DegenerateEdge) edge vector has no usable direction")]
    DegenerateEdge,
    /// (InconsistentFaceSpec) Opposite edges of a face must run along the same axis
    #[error("(InconsistentFaceSpec) face edge directions {0:?} do not describe a rectangle")]
    InconsistentFaceSpec([usize; 4]),
}
