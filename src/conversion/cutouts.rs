//! Cutout extraction for a solder paste layer

use super::flash::interpret_flashes;
use super::primitive::primitive_to_shape;
use super::stitch::stitch_lines;
use crate::error::Result;
use crate::geometry::Shape;
use crate::gerber::{Layer, PrimitiveKind};
use log::{debug, warn};

/// Every cutout shape of `layer`.
///
/// Order: flashed shapes, closed primitive shapes, then contours stitched
/// from the layer's open lines. Shapes with fewer than two vertices carry
/// no geometry and are dropped.
pub fn create_cutouts(layer: &Layer, simplify_regions: bool) -> Result<Vec<Shape>> {
    let layer = layer.to_metric();
    let mut cutouts = interpret_flashes(&layer.statements)?;
    let mut open_lines: Vec<Shape> = Vec::new();

    for primitive in &layer.primitives {
        if matches!(primitive.kind, PrimitiveKind::Group) {
            warn!("Ignoring primitive group in solder paste layer");
            continue;
        }
        let shape = primitive_to_shape(primitive, false, simplify_regions)?;
        match shape.len() {
            0 | 1 => debug!("Dropping {} with {} vertices", primitive.kind.name(), shape.len()),
            2 => open_lines.push(shape),
            _ => cutouts.push(shape),
        }
    }

    cutouts.extend(stitch_lines(open_lines));
    debug!("Solder paste layer produced {} cutouts", cutouts.len());
    Ok(cutouts)
}
