//! Board outline construction

use super::primitive::primitive_to_shape;
use crate::error::{Result, StencilError};
use crate::geometry::{convex_hull, Shape};
use crate::gerber::{Layer, PrimitiveKind};
use log::{debug, warn};

/// Closed outline of an outline layer.
///
/// The convex hull of every primitive's vertices, or the declared layer
/// bounds when the layer has no primitives.
pub fn outline_shape(layer: &Layer) -> Result<Shape> {
    let layer = layer.to_metric();

    let shape = if layer.primitives.is_empty() {
        match layer.bounds {
            Some(bounds) => {
                debug!("Outline layer has no primitives, using its declared bounds");
                convex_hull(&bounds.to_bounding_box().to_shape())
            }
            None => Vec::new(),
        }
    } else {
        let mut points = Vec::new();
        for primitive in &layer.primitives {
            if matches!(primitive.kind, PrimitiveKind::Group) {
                warn!("Ignoring primitive group in outline layer");
                continue;
            }
            points.extend(primitive_to_shape(primitive, false, false)?);
        }
        convex_hull(&points)
    };

    if shape.len() < 3 {
        return Err(StencilError::EmptyInput("outline layer has no area".into()));
    }
    Ok(shape)
}
