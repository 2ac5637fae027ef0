//! Stencil assembly
//!
//! Turns an outline and a set of cutouts into the final 2D layout
//! (gap, hole adjustment, centering, mirroring, ledge or frame) and then
//! into the printable solid.

use super::config::StencilConfig;
use crate::error::{Result, StencilError};
use crate::geometry::{grow_shape, mirror_shape_x, offset_shape, translate_shape, BoundingBox, Shape, Vector};
use crate::solid::Solid;
use log::{debug, warn};
use serde::Serialize;

/// Width of the alignment ledge around the outline
pub const LEDGE_WIDTH: f64 = 1.2;

/// Ledge ring: `outer` minus the outline, minus `cutter` when present
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgeLayout {
    pub outer: Shape,
    /// Half of the ledge bounding box that is cut away
    pub cutter: Option<Shape>,
}

/// Final 2D geometry, centered on the origin and already mirrored if flipped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StencilLayout {
    pub outline: Shape,
    pub cutouts: Vec<Shape>,
    pub ledge: Option<LedgeLayout>,
    /// Frame rectangle; the outline is subtracted from it
    pub frame: Option<Shape>,
}

/// Lay out a stencil from its outline (if any) and cutout shapes
pub fn assemble(outline: Option<Shape>, cutouts: Vec<Shape>, config: &StencilConfig) -> Result<StencilLayout> {
    config.validate()?;

    let mut outline = match outline {
        Some(shape) if shape.len() >= 3 => shape,
        Some(_) => return Err(StencilError::EmptyInput("outline has fewer than 3 vertices".into())),
        None => synthetic_outline(&cutouts, config)?,
    };

    if config.gap > 0.0 {
        outline = grow_shape(&outline, config.gap);
    }

    let mut cutouts: Vec<Shape> = if config.increase_hole_size_by != 0.0 {
        let count = cutouts.len();
        let adjusted: Vec<Shape> = cutouts
            .into_iter()
            .flat_map(|shape| {
                if shape.len() > 2 {
                    offset_shape(&shape, config.increase_hole_size_by)
                } else {
                    vec![shape]
                }
            })
            .collect();
        if adjusted.len() < count {
            debug!("{} cutouts vanished after shrinking holes", count - adjusted.len());
        }
        adjusted
    } else {
        cutouts
    };

    let bbox = BoundingBox::of(&outline).ok_or_else(|| StencilError::EmptyInput("outline is empty".into()))?;
    let center = -bbox.center();
    let centered = |shape: &Shape| -> Shape { translate_shape(shape, center).into_iter().map(Vector::rounded).collect() };
    outline = centered(&outline);
    cutouts = cutouts.iter().map(centered).collect();

    if config.flip_stencil {
        outline = mirror_shape_x(&outline);
        cutouts = cutouts.iter().map(|s| mirror_shape_x(s)).collect();
    }

    let mut layout = StencilLayout { outline, cutouts, ledge: None, frame: None };

    if config.include_ledge {
        if config.include_frame {
            warn!("Both ledge and frame requested, building the ledge only");
        }
        layout.ledge = Some(ledge_layout(&layout.outline, config.full_ledge));
    } else if config.include_frame {
        let frame = BoundingBox::of(&layout.outline)
            .map(|b| b.with_size(config.frame_width, config.frame_height, 0.0).to_shape())
            .unwrap_or_default();
        layout.frame = Some(frame);
    }

    debug!(
        "Assembled stencil with {} cutouts, ledge: {}, frame: {}",
        layout.cutouts.len(),
        layout.ledge.is_some(),
        layout.frame.is_some()
    );
    Ok(layout)
}

/// Rectangle around all cutouts, sized by the configured width/height or margin
fn synthetic_outline(cutouts: &[Shape], config: &StencilConfig) -> Result<Shape> {
    let bbox = BoundingBox::of_shapes(cutouts)
        .ok_or_else(|| StencilError::EmptyInput("no outline and no cutout geometry".into()))?;
    debug!("No outline given, synthesizing one from the cutout bounds");
    Ok(bbox
        .with_size(config.stencil_width, config.stencil_height, config.stencil_margin)
        .to_shape())
}

/// Ledge around `outline`; unless `full`, only the half on the long side is kept.
///
/// When the ledge is wider than tall the lower half is cut away, otherwise
/// (squares included) the left half.
fn ledge_layout(outline: &Shape, full: bool) -> LedgeLayout {
    let outer = grow_shape(outline, LEDGE_WIDTH);
    if full {
        return LedgeLayout { outer, cutter: None };
    }

    let cutter = BoundingBox::of(&outer).map(|b| {
        let center = b.center();
        let half = if b.width() > b.height() {
            BoundingBox { min: b.min, max: Vector::new(b.max.x, center.y) }
        } else {
            BoundingBox { min: b.min, max: Vector::new(center.x, b.max.y) }
        };
        half.to_shape()
    });
    LedgeLayout { outer, cutter }
}

/// Polygon node, or `None` for shapes without area
fn area_polygon(shape: &Shape) -> Option<Solid> {
    if shape.len() < 3 {
        debug!("Skipping {}-vertex shape in solid", shape.len());
        return None;
    }
    Some(Solid::polygon(shape.clone()))
}

impl StencilLayout {
    /// Extruded, composed and print-oriented body
    pub fn to_solid(&self, config: &StencilConfig) -> Solid {
        let outline = Solid::polygon(self.outline.clone());
        let holes: Vec<Solid> = self.cutouts.iter().filter_map(area_polygon).collect();
        let stencil = outline.clone().difference(Solid::union(holes)).extrude(config.stencil_thickness);

        let mut parts = vec![stencil];
        if let Some(ledge) = &self.ledge {
            let mut ring = Solid::polygon(ledge.outer.clone()).difference(outline.clone());
            if let Some(cutter) = &ledge.cutter {
                ring = ring.difference(Solid::polygon(cutter.clone()));
            }
            parts.push(
                ring.extrude(config.ledge_thickness)
                    .translate([0.0, 0.0, -config.ledge_thickness]),
            );
        } else if let Some(frame) = &self.frame {
            let ring = Solid::polygon(frame.clone()).difference(outline);
            parts.push(
                ring.extrude(config.frame_thickness)
                    .translate([0.0, 0.0, -config.frame_thickness]),
            );
        }

        let body = if parts.len() == 1 {
            parts.remove(0)
        } else {
            Solid::union(parts)
        };
        body.rotate(180.0, [1.0, 0.0, 0.0])
    }
}
