//! Polygon offsetting on top of cavalier_contours
//!
//! Shapes are turned into closed counter-clockwise polylines and offset with
//! `parallel_offset`. Convex corners of an outward offset come back as arcs,
//! which are flattened into short segments again. A rectangle still grows by
//! exactly twice the distance in each axis.

use super::shape::{signed_area, Shape};
use super::vector::Vector;
use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use log::warn;
use std::panic;

/// Longest segment used when flattening offset arcs
const ARC_SEGMENT_LENGTH: f64 = 0.1;

const BULGE_EPSILON: f64 = 1e-9;

/// Offset a closed shape by a signed `delta`: positive grows, negative shrinks.
///
/// Returns every loop of the result. The list is empty when the shape
/// vanishes (shrunk by more than its inradius). Winding is detected from the
/// signed area, so vertex order does not matter. Shapes with fewer than
/// three distinct vertices or without area are returned unchanged.
pub fn offset_shape(shape: &[Vector], delta: f64) -> Vec<Shape> {
    let mut points: Vec<Vector> = Vec::with_capacity(shape.len());
    for &v in shape {
        if points.last() != Some(&v) {
            points.push(v);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    let area = signed_area(&points);
    if points.len() < 3 || area == 0.0 || delta == 0.0 {
        return vec![shape.to_vec()];
    }
    if area < 0.0 {
        points.reverse();
    }

    let mut pline = Polyline::new_closed();
    for v in &points {
        pline.add(v.x, v.y, 0.0);
    }

    // Positive offsets go left of the tangent, i.e. inward on a counter-clockwise loop
    let offsets = match panic::catch_unwind(panic::AssertUnwindSafe(|| pline.parallel_offset(-delta))) {
        Ok(offsets) => offsets,
        Err(_) => {
            warn!("Parallel offset of {}-vertex shape failed, keeping it unchanged", points.len());
            return vec![shape.to_vec()];
        }
    };

    offsets
        .iter()
        .map(flatten_polyline)
        .filter(|loop_shape| loop_shape.len() >= 3)
        .collect()
}

/// Outward offset of a simple shape, keeping its outer loop
pub fn grow_shape(shape: &[Vector], distance: f64) -> Shape {
    offset_shape(shape, distance.abs())
        .into_iter()
        .max_by(|a, b| signed_area(a).abs().total_cmp(&signed_area(b).abs()))
        .unwrap_or_else(|| shape.to_vec())
}

/// Rounded vertices of a closed polyline, arcs replaced by segments
fn flatten_polyline(pline: &Polyline<f64>) -> Shape {
    let count = pline.vertex_count();
    let mut shape: Shape = Vec::with_capacity(count);
    for i in 0..count {
        let v1 = pline.at(i);
        let v2 = pline.at((i + 1) % count);
        shape.push(Vector::new(v1.x, v1.y).rounded());
        if v1.bulge.abs() > BULGE_EPSILON {
            shape.extend(arc_points(v1, v2));
        }
    }

    shape.dedup();
    while shape.len() > 1 && shape.first() == shape.last() {
        shape.pop();
    }
    shape
}

/// Interior points of the arc from `v1` to `v2` described by `v1.bulge`
fn arc_points(v1: PlineVertex<f64>, v2: PlineVertex<f64>) -> Vec<Vector> {
    let start = Vector::new(v1.x, v1.y);
    let chord = Vector::new(v2.x, v2.y) - start;
    let chord_len = chord.length();
    if chord_len < 1e-9 {
        return Vec::new();
    }

    // Positive sweep is counter-clockwise
    let sweep = 4.0 * v1.bulge.atan();
    let half = sweep.abs() / 2.0;
    let radius = chord_len / (2.0 * half.sin());
    let left = Vector::new(-chord.y, chord.x) / chord_len;
    let center = start + chord / 2.0 + left * (radius * half.cos() * sweep.signum());

    let segments = ((radius * sweep.abs() / ARC_SEGMENT_LENGTH).ceil() as usize).max(1);
    let radial = start - center;
    (1..segments)
        .map(|j| (center + radial.rotate(sweep * j as f64 / segments as f64)).rounded())
        .collect()
}
