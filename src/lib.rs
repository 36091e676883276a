//! Parametric **cut-paths for laser-cut parts**: flat-faceted gear and rack
//! tooth profiles, and the six interlocking panels of a tabbed box.
//!
//! Every generator is a pure function from a configuration to closed
//! [`Polyline`]s; invalid configurations are rejected up front with a
//! [`ConfigurationError`](errors::ConfigurationError). The [`document`],
//! [`layout`] and [`io`] modules turn those polylines into SVG or DXF files.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: serialise documents to SVG through the `svg` crate
//! - **dxf-io**: export polylines as DXF LWPOLYLINE entities
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to generate box panels concurrently

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod polyline;
pub mod rotation;
pub mod gear;
pub mod tabbed_box;
pub mod document;
pub mod layout;
pub mod io;
pub mod settings;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ConfigurationError;
pub use gear::{GearConfig, generate_gear_profile};
pub use polyline::Polyline;
pub use tabbed_box::{BoxConfig, BoxFace, generate_box_faces};
