//! Export of generated outlines: SVG documents and DXF drawings.
//!
//! Each format sits behind its own cargo feature (`svg-io`, `dxf-io`).

use std::path::Path;

#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "dxf-io")]
mod dxf;

#[cfg(feature = "svg-io")]
pub use self::svg::{format_coordinate, save_svg, to_svg};

#[cfg(feature = "dxf-io")]
pub use self::dxf::{save_dxf, to_dxf};

/// Failures while rendering or writing an export.
#[derive(Debug)]
pub enum IoError {
    /// writing the output file failed
    StdIo(std::io::Error),
    /// nothing sensible can be rendered from the input
    MalformedInput(String),
    /// the output path does not name a file
    MalformedPath(String),
    #[cfg(feature = "dxf-io")]
    Dxf(::dxf::DxfError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIo(error) => write!(f, "could not write output: {error}"),
            IoError::MalformedInput(msg) => write!(f, "cannot export: {msg}"),
            IoError::MalformedPath(path) => write!(f, "not a file path: {path:?}"),
            #[cfg(feature = "dxf-io")]
            IoError::Dxf(error) => write!(f, "DXF export failed: {error}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(error: std::io::Error) -> Self {
        IoError::StdIo(error)
    }
}

#[cfg(feature = "dxf-io")]
impl From<::dxf::DxfError> for IoError {
    fn from(error: ::dxf::DxfError) -> Self {
        IoError::Dxf(error)
    }
}

/// Rejects paths that cannot name an output file (empty, or ending in `..`).
#[cfg_attr(not(any(feature = "svg-io", feature = "dxf-io")), allow(dead_code))]
pub(crate) fn check_output_path(path: &Path) -> Result<(), IoError> {
    if path.file_name().is_none() {
        return Err(IoError::MalformedPath(path.display().to_string()));
    }
    Ok(())
}
