//! Contour stitching
//!
//! Greedily joins open 2-vertex lines whose endpoints coincide (within
//! [`STITCH_TOLERANCE_SQ`]) into longer contours.

use crate::geometry::{Shape, Vector};
use log::debug;
use std::collections::VecDeque;

/// Squared endpoint distance under which two endpoints are the same point (0.001 mm)
pub const STITCH_TOLERANCE_SQ: f64 = 1e-6;

/// Index of the pool line with an endpoint strictly closest to `point`,
/// plus the line's other endpoint. Ties keep the earliest line.
fn find_closest_line(point: Vector, pool: &VecDeque<Shape>) -> Option<(usize, Vector)> {
    let mut best: Option<(usize, Vector, f64)> = None;
    for (index, line) in pool.iter().enumerate() {
        let (a, b) = (line[0], line[1]);
        for (near, far) in [(a, b), (b, a)] {
            let d = point.distance_squared(near);
            if d < STITCH_TOLERANCE_SQ && best.map_or(true, |(_, _, best_d)| d < best_d) {
                best = Some((index, far, d));
            }
        }
    }
    best.map(|(index, far, _)| (index, far))
}

/// Join open lines into contours.
///
/// Every input must have exactly two vertices; anything else is passed
/// through untouched. A contour that closes on itself drops its repeated
/// last vertex.
pub fn stitch_lines(lines: Vec<Shape>) -> Vec<Shape> {
    let (open, passthrough): (Vec<Shape>, Vec<Shape>) = lines.into_iter().partition(|line| line.len() == 2);
    let input_count = open.len();
    let mut pool = VecDeque::from(open);
    let mut contours = passthrough;

    while let Some(mut contour) = pool.pop_front() {
        loop {
            let first = contour[0];
            if let Some((index, far)) = find_closest_line(first, &pool) {
                pool.remove(index);
                contour.insert(0, far);
                continue;
            }

            let last = contour[contour.len() - 1];
            if let Some((index, far)) = find_closest_line(last, &pool) {
                pool.remove(index);
                contour.push(far);
                continue;
            }
            break;
        }

        if contour.len() > 3 && contour[0].distance_squared(contour[contour.len() - 1]) < STITCH_TOLERANCE_SQ {
            contour.pop();
        }
        contours.push(contour);
    }

    debug!("Stitched {} open lines into {} contours", input_count, contours.len());
    contours
}
