use super::{IoError, check_output_path};
use crate::polyline::Polyline;
use std::path::Path;

use ::dxf::entities::{Entity, EntityType, LwPolyline};
use ::dxf::enums::AcadVersion;
use ::dxf::{Drawing, LwPolylineVertex};

/// Export polylines to DXF, one LWPOLYLINE entity each.
///
/// Closed polylines are written with the closed flag set and without their
/// repeated closing vertex. Empty polylines are skipped.
///
/// # Returns
/// The DXF file as a byte vector, or an error if exporting fails.
pub fn to_dxf(polylines: &[Polyline]) -> Result<Vec<u8>, IoError> {
    let mut drawing = Drawing::new();
    // LWPOLYLINE does not exist before R14 and is dropped from older files
    drawing.header.version = AcadVersion::R2000;

    for polyline in polylines.iter().filter(|p| !p.is_empty()) {
        let closed = polyline.is_closed();
        let count = if closed { polyline.len() - 1 } else { polyline.len() };

        let mut lw = LwPolyline::default();
        #[allow(clippy::unnecessary_cast)]
        lw.vertices.extend(polyline.points[..count].iter().map(|p| LwPolylineVertex {
            x: p.x as f64,
            y: p.y as f64,
            ..Default::default()
        }));
        lw.set_is_closed(closed);
        drawing.add_entity(Entity::new(EntityType::LwPolyline(lw)));
    }

    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    Ok(buffer)
}

/// Writes `polylines` as a DXF file at `path`.
pub fn save_dxf(path: impl AsRef<Path>, polylines: &[Polyline]) -> Result<(), IoError> {
    let path = path.as_ref();
    check_output_path(path)?;
    std::fs::write(path, to_dxf(polylines)?)?;
    log::info!("wrote {}", path.display());
    Ok(())
}
