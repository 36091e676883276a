//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use cutpath::float_types::Real;
use cutpath::tabbed_box::{EdgeType, FaceName, FaceSpec};
use std::collections::HashMap;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Identifies one of the twelve physical edges of a box.
///
/// Each entry is the position along that axis: `0` near side, `1` far side,
/// `2` for the axis the edge runs along.
pub type PhysicalEdge = [u8; 3];

/// The physical box edge that edge `index` of `face` lies on.
///
/// Edge 0 runs along the face's first axis at the start of its second,
/// edge 1 along the second axis at the end of the first, edge 2 along the
/// first axis at the end of the second, edge 3 along the second axis at the
/// start of the first.
pub fn physical_edge(face: FaceName, spec: &FaceSpec, index: usize) -> PhysicalEdge {
    let first = spec.directions[0];
    let second = spec.directions[1];
    let mut key = [0u8; 3];
    key[face.normal_axis()] = face.is_far_side() as u8;
    match index {
        0 => {
            key[first] = 2;
            key[second] = 0;
        },
        1 => {
            key[second] = 2;
            key[first] = 1;
        },
        2 => {
            key[first] = 2;
            key[second] = 1;
        },
        _ => {
            key[second] = 2;
            key[first] = 0;
        },
    }
    key
}

/// Groups the edges of a six-face table by the physical box edge they sit on.
pub fn shared_edges(table: &[FaceSpec; 6]) -> HashMap<PhysicalEdge, Vec<(FaceName, EdgeType)>> {
    let mut edges: HashMap<PhysicalEdge, Vec<(FaceName, EdgeType)>> = HashMap::new();
    for (name, spec) in FaceName::ALL.into_iter().zip(table.iter()) {
        for index in 0..4 {
            edges
                .entry(physical_edge(name, spec, index))
                .or_default()
                .push((name, spec.shapes[index]));
        }
    }
    edges
}
