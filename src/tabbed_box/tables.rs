//! Edge shapes and directions of the six box panels.
//!
//! Faces are listed in [`FaceName`] order: bottom, top, front, back, left,
//! right. A face's four edges run around it starting at its origin corner:
//! edge 0 along its first axis, edge 1 up its second axis, edge 2 back along
//! the first and edge 3 back down the second.
//!
//! ```text
//!            closed box               door box (top is the door)
//!          0  1  2  3  axes         0  1  2  3
//! bottom   O  O  O  O  x y          O  O  O  O
//! top      O  O  O  O  x y          o  o  o  o
//! front    I  O  I  O  x z          I  O  o  O
//! back     I  O  I  O  x z          I  O  o  O
//! left     I  I  I  I  y z          I  I  o  I
//! right    I  I  I  I  y z          I  I  o  I
//! ```
//!
//! (`O` Outie, `I` Innie, `o` FlatOut.) Every physical box edge is shared by
//! two panels and carries `O` on one and `I` on the other. In the door
//! variant the four edges meeting the door are flat on both panels.
//! These values are the joint convention itself; do not re-derive them.

use super::FaceName;
use super::edge::EdgeType::{self, FlatOut, Innie, Outie};

/// Edge shapes and edge axes of one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceSpec {
    pub shapes: [EdgeType; 4],
    /// box axis (0 = x, 1 = y, 2 = z) each edge runs along
    pub directions: [usize; 4],
}

impl FaceSpec {
    pub const fn new(shapes: [EdgeType; 4], directions: [usize; 4]) -> Self {
        Self { shapes, directions }
    }

    /// `true` when no edge carries tabs.
    pub fn is_flat(&self) -> bool {
        self.shapes.iter().all(|shape| shape.is_flat())
    }
}

const XY: [usize; 4] = [0, 1, 0, 1];
const XZ: [usize; 4] = [0, 2, 0, 2];
const YZ: [usize; 4] = [1, 2, 1, 2];

/// Panels of a fully closed box.
pub static CLOSED_FACES: [FaceSpec; 6] = [
    FaceSpec::new([Outie, Outie, Outie, Outie], XY),
    FaceSpec::new([Outie, Outie, Outie, Outie], XY),
    FaceSpec::new([Innie, Outie, Innie, Outie], XZ),
    FaceSpec::new([Innie, Outie, Innie, Outie], XZ),
    FaceSpec::new([Innie, Innie, Innie, Innie], YZ),
    FaceSpec::new([Innie, Innie, Innie, Innie], YZ),
];

/// Panels of a box whose top is an untabbed door.
pub static DOOR_FACES: [FaceSpec; 6] = [
    FaceSpec::new([Outie, Outie, Outie, Outie], XY),
    FaceSpec::new([FlatOut, FlatOut, FlatOut, FlatOut], XY),
    FaceSpec::new([Innie, Outie, FlatOut, Outie], XZ),
    FaceSpec::new([Innie, Outie, FlatOut, Outie], XZ),
    FaceSpec::new([Innie, Innie, FlatOut, Innie], YZ),
    FaceSpec::new([Innie, Innie, FlatOut, Innie], YZ),
];

/// Table for the requested box variant.
pub fn face_specs(door: bool) -> &'static [FaceSpec; 6] {
    if door { &DOOR_FACES } else { &CLOSED_FACES }
}

/// Door panel of the door variant.
pub const DOOR_FACE: FaceName = FaceName::Top;
