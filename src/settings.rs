//! TOML job files for the command-line driver.
//!
//! ```toml
//! output = "parts.svg"
//! spacing = 250.0
//!
//! [gear]
//! num_teeth = 30
//! tooth_depth = 120.0
//! stroke_length = 9000.0
//! tooth_top_fraction = 0.25
//! circular = true
//!
//! [tabbed_box]
//! box_size = [6000.0, 7000.0, 8000.0]
//! thou_per_tab = 500.0
//! material_thickness = 125.0
//! door = true
//!
//! [style]
//! stroke = "#000000"
//! stroke-width = "2"
//! ```
//!
//! Omitted keys inside `[gear]` and `[tabbed_box]` fall back to the
//! configuration defaults.

use crate::document::Style;
use crate::float_types::Real;
use crate::gear::GearConfig;
use crate::tabbed_box::BoxConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything one `cutpath job` run produces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    /// SVG file to write
    pub output: PathBuf,
    /// also write a DXF next to `output`
    #[serde(default)]
    pub dxf: bool,
    /// gap left between laid-out parts
    #[serde(default = "default_spacing")]
    pub spacing: Real,
    #[serde(default)]
    pub gear: Option<GearConfig>,
    #[serde(default)]
    pub tabbed_box: Option<BoxConfig>,
    /// overrides on top of the default cut style
    #[serde(default)]
    pub style: Style,
}

const fn default_spacing() -> Real {
    100.0
}

/// Errors reading a job file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid job file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("job file describes neither a gear nor a box")]
    Empty,
}

impl JobFile {
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let job: JobFile = toml::from_str(text)?;
        if job.gear.is_none() && job.tabbed_box.is_none() {
            return Err(SettingsError::Empty);
        }
        Ok(job)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
