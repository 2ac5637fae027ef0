//! Shapes and their bounding boxes
//!
//! A shape is an ordered vertex list. With three or more vertices it is a
//! closed contour (the edge from the last vertex back to the first is
//! implicit); with exactly two it is an open line waiting to be stitched.

use super::vector::Vector;
use serde::Serialize;

pub type Shape = Vec<Vector>;

/// Move every vertex by `offset`
pub fn translate_shape(shape: &[Vector], offset: Vector) -> Shape {
    shape.iter().map(|&v| v + offset).collect()
}

/// Mirror across the Y axis by negating every X coordinate
pub fn mirror_shape_x(shape: &[Vector]) -> Shape {
    shape.iter().map(|v| Vector::new(-v.x, v.y)).collect()
}

/// Shoelace area; positive for counter-clockwise winding
pub fn signed_area(shape: &[Vector]) -> f64 {
    if shape.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, &v) in shape.iter().enumerate() {
        let next = shape[(i + 1) % shape.len()];
        twice_area += v.cross(next);
    }
    twice_area / 2.0
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Vector,
    pub max: Vector,
}

impl BoundingBox {
    /// Bounding box of a point set, `None` when empty
    pub fn of(points: &[Vector]) -> Option<Self> {
        let first = *points.first()?;
        let mut bbox = BoundingBox { min: first, max: first };
        for p in &points[1..] {
            bbox.min.x = bbox.min.x.min(p.x);
            bbox.min.y = bbox.min.y.min(p.y);
            bbox.max.x = bbox.max.x.max(p.x);
            bbox.max.y = bbox.max.y.max(p.y);
        }
        Some(bbox)
    }

    /// Bounding box of several shapes at once
    pub fn of_shapes<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Option<Self> {
        shapes
            .into_iter()
            .filter_map(|s| BoundingBox::of(s))
            .reduce(|a, b| BoundingBox {
                min: Vector::new(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
                max: Vector::new(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
            })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vector {
        self.min + (self.max - self.min) / 2.0
    }

    /// Corners in lower-left, upper-left, upper-right, lower-right order
    pub fn corners(&self) -> [Vector; 4] {
        [
            Vector::new(self.min.x, self.min.y),
            Vector::new(self.min.x, self.max.y),
            Vector::new(self.max.x, self.max.y),
            Vector::new(self.max.x, self.min.y),
        ]
    }

    pub fn to_shape(&self) -> Shape {
        self.corners().to_vec()
    }

    /// Resize around the same center.
    ///
    /// A positive `margin` grows every side by that amount. Otherwise a
    /// positive `width` and `height` pair sets the exact size. With neither
    /// the box is returned unchanged.
    pub fn with_size(&self, width: f64, height: f64, margin: f64) -> BoundingBox {
        let (margin_x, margin_y) = if margin > 0.0 {
            (margin, margin)
        } else if width > 0.0 && height > 0.0 {
            ((width - self.width()) / 2.0, (height - self.height()) / 2.0)
        } else {
            return *self;
        };
        BoundingBox {
            min: Vector::new(self.min.x - margin_x, self.min.y - margin_y),
            max: Vector::new(self.max.x + margin_x, self.max.y + margin_y),
        }
    }
}
