//! Primitive to shape conversion
//!
//! Maps every drawing primitive to an ordered vertex list. Curves are
//! rasterized to roughly [`MAX_SEGMENT_LENGTH`] per segment, and every
//! emitted vertex is rounded to the shared vertex precision so later
//! equality tests (region seams, stitching) line up.

use crate::error::{Result, StencilError};
use crate::geometry::{convex_hull, BoundingBox, Shape, Vector};
use crate::gerber::{Aperture, ArcDirection, Primitive, PrimitiveKind};
use log::{debug, warn};
use std::borrow::Cow;
use std::collections::HashSet;
use std::f64::consts::{PI, SQRT_2, TAU};

/// Target arc length per segment when rasterizing curves, in millimeters
pub const MAX_SEGMENT_LENGTH: f64 = 0.1;

/// Convert one primitive into a shape.
///
/// `in_region` treats lines as bare contour edges regardless of their
/// aperture. `simplify_regions` replaces each region by its bounding box.
/// Primitives not in millimeters are normalized first.
pub fn primitive_to_shape(primitive: &Primitive, in_region: bool, simplify_regions: bool) -> Result<Shape> {
    let primitive = if primitive.is_metric() {
        Cow::Borrowed(primitive)
    } else {
        Cow::Owned(primitive.to_metric())
    };

    let vertices = match &primitive.kind {
        PrimitiveKind::Line { start, end, aperture } => {
            let length = start.distance(*end);
            match aperture {
                Some(aperture) if !in_region && aperture.is_wide(Some(length)) => {
                    rect_from_line(*start, *end, aperture)
                }
                _ => vec![start.rounded(), end.rounded()],
            }
        }
        PrimitiveKind::Circle { position, diameter } => circle_vertices(*position, *diameter),
        PrimitiveKind::Rectangle { lower_left, width, height } => {
            let ll = lower_left.rounded();
            vec![
                ll,
                Vector::new(ll.x, ll.y + height).rounded(),
                Vector::new(ll.x + width, ll.y + height).rounded(),
                Vector::new(ll.x + width, ll.y).rounded(),
            ]
        }
        PrimitiveKind::Region { primitives } => region_vertices(primitives, simplify_regions)?,
        PrimitiveKind::Obround(obround) => {
            // Sub-shapes are convex and overlapping; their hull is the outline
            let mut vertices = Vec::new();
            for sub_shape in obround.sub_shapes() {
                vertices.extend(primitive_to_shape(&sub_shape, false, false)?);
            }
            convex_hull(&vertices)
        }
        PrimitiveKind::Arc { center, radius, start_angle, end_angle, direction } => {
            arc_vertices(*center, *radius, *start_angle, *end_angle, *direction)
        }
        PrimitiveKind::CenterLine { center, width, height, rotation } => {
            let (hw, hh) = (width / 2.0, height / 2.0);
            [
                Vector::new(-hw, -hh),
                Vector::new(hw, -hh),
                Vector::new(hw, hh),
                Vector::new(-hw, hh),
            ]
            .iter()
            .map(|corner| (corner.rotate_degrees(*rotation) + *center).rounded())
            .collect()
        }
        PrimitiveKind::VectorLine { start, end, width } => {
            let side = (*end - *start).normalized() * (width / 2.0);
            vec![
                (*start + side.rotate_degrees(90.0)).rounded(),
                (*start + side.rotate_degrees(-90.0)).rounded(),
                (*end + side.rotate_degrees(-90.0)).rounded(),
                (*end + side.rotate_degrees(90.0)).rounded(),
            ]
        }
        PrimitiveKind::MacroOutline { points } => points.iter().map(|p| p.rounded()).collect(),
        PrimitiveKind::Comment { .. } => Vec::new(),
        PrimitiveKind::Group => {
            warn!("Ignoring unsupported primitive group");
            Vec::new()
        }
        PrimitiveKind::Unknown => {
            return Err(StencilError::UnsupportedPrimitive(primitive.kind.name().to_string()));
        }
    };

    Ok(vertices)
}

/// Upper bound on the segments of a single curve
pub const MAX_CURVE_SEGMENTS: usize = 3600;

/// Number of segments for a curve of `length`, between one and `MAX_CURVE_SEGMENTS`
fn segment_count(length: f64) -> usize {
    ((length / MAX_SEGMENT_LENGTH).round() as usize).clamp(1, MAX_CURVE_SEGMENTS)
}

fn circle_vertices(position: Vector, diameter: f64) -> Shape {
    let radius = diameter / 2.0;
    let segments = segment_count(PI * diameter);
    (0..segments)
        .map(|s| {
            let angle = s as f64 * (TAU / segments as f64);
            (position + Vector::new(angle.cos(), angle.sin()) * radius).rounded()
        })
        .collect()
}

/// Sweep magnitude in degrees going from `start` to `end` in `direction`.
///
/// Equal angles mean a full turn.
fn sweep_degrees(start: f64, end: f64, direction: ArcDirection) -> f64 {
    match direction {
        ArcDirection::CounterClockwise => {
            if end <= start {
                360.0 - (start - end)
            } else {
                end - start
            }
        }
        ArcDirection::Clockwise => {
            if end >= start {
                360.0 - (end - start)
            } else {
                start - end
            }
        }
    }
}

/// Arc vertices from the start angle up to, but excluding, the end point
fn arc_vertices(center: Vector, radius: f64, start_angle: f64, end_angle: f64, direction: ArcDirection) -> Shape {
    let sweep = sweep_degrees(start_angle, end_angle, direction).to_radians();
    let segments = segment_count(radius * sweep);
    let delta = sweep / segments as f64;
    let step = match direction {
        ArcDirection::CounterClockwise => delta,
        ArcDirection::Clockwise => -delta,
    };

    let start = start_angle.to_radians();
    (0..segments)
        .map(|s| {
            let angle = start + step * s as f64;
            (center + Vector::new(angle.cos(), angle.sin()) * radius).rounded()
        })
        .collect()
}

/// Thicken a line drawn with a wide aperture into a rectangle.
///
/// Circular apertures are treated as square: the corners sit `r·√2` away
/// from each endpoint at ±135° (start) and ±45° (end) from the direction.
fn rect_from_line(start: Vector, end: Vector, aperture: &Aperture) -> Shape {
    let r = aperture.effective_size() / 2.0;
    let direction = (end - start).normalized();
    if direction == Vector::ZERO {
        debug!("Thickening zero-length line at ({}, {})", start.x, start.y);
    }
    let corner = direction * (SQRT_2 * r);

    vec![
        (start + corner.rotate_degrees(135.0)).rounded(),
        (start + corner.rotate_degrees(-135.0)).rounded(),
        (end + corner.rotate_degrees(-45.0)).rounded(),
        (end + corner.rotate_degrees(45.0)).rounded(),
    ]
}

/// Concatenate the children's vertices, skipping any vertex already seen
fn region_vertices(primitives: &[Primitive], simplify_regions: bool) -> Result<Shape> {
    let mut vertices: Shape = Vec::new();
    let mut seen: HashSet<(i64, i64)> = HashSet::new();

    for child in primitives {
        for vertex in primitive_to_shape(child, true, false)? {
            if seen.insert(vertex.grid_key()) {
                vertices.push(vertex);
            }
        }
    }

    if simplify_regions {
        return Ok(BoundingBox::of(&vertices).map(|b| b.to_shape()).unwrap_or_default());
    }
    Ok(vertices)
}
