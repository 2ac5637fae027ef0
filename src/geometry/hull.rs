//! Convex hull of a vertex set

use super::shape::{signed_area, Shape};
use super::vector::Vector;
use geo::{ConvexHull, MultiPoint, Point};

/// Counter-clockwise convex hull of `points`.
///
/// Input vertices are rounded first and duplicates collapse. Fewer than
/// three distinct points come back as they are; a collinear set comes back
/// as its two extreme points.
pub fn convex_hull(points: &[Vector]) -> Shape {
    let mut sorted: Vec<Vector> = points.iter().map(|p| p.rounded()).collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let multi_point: MultiPoint<f64> = sorted.iter().map(|v| Point::new(v.x, v.y)).collect::<Vec<_>>().into();
    let polygon = multi_point.convex_hull();

    let mut hull: Shape = polygon.exterior().coords().map(|c| Vector::new(c.x, c.y).rounded()).collect();
    if hull.len() > 1 && hull.first() == hull.last() {
        hull.pop();
    }
    hull.dedup();

    let area = signed_area(&hull);
    if hull.len() < 3 || area == 0.0 {
        return vec![sorted[0], sorted[sorted.len() - 1]];
    }
    if area < 0.0 {
        hull.reverse();
    }
    hull
}
