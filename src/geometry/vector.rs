//! 2D vector type shared by every shape operation

use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Decimal places every shape vertex is rounded to (1 µm in millimeters).
///
/// This precision defines vertex equality for region deduplication and
/// contour stitching, so it is part of the shape contract.
pub const VERTEX_DECIMALS: i32 = 3;

const VERTEX_SCALE: f64 = 1000.0;

/// A 2D point or direction in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both coordinates to [`VERTEX_DECIMALS`] places
    pub fn rounded(self) -> Self {
        Self {
            x: (self.x * VERTEX_SCALE).round() / VERTEX_SCALE,
            y: (self.y * VERTEX_SCALE).round() / VERTEX_SCALE,
        }
    }

    /// Integer key of the rounded vertex, usable in hash sets
    pub fn grid_key(self) -> (i64, i64) {
        (
            (self.x * VERTEX_SCALE).round() as i64,
            (self.y * VERTEX_SCALE).round() as i64,
        )
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - other.x * self.y
    }

    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance_squared(self, other: Vector) -> f64 {
        (self - other).length_squared()
    }

    pub fn distance(self, other: Vector) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Unit vector in the same direction; the zero vector when the length is zero
    pub fn normalized(self) -> Vector {
        let length = self.length();
        if length == 0.0 {
            debug!("Normalizing zero-length vector, substituting zero direction");
            return Vector::ZERO;
        }
        self / length
    }

    /// Rotate counter-clockwise by `theta` radians
    pub fn rotate(self, theta: f64) -> Vector {
        let (sin, cos) = theta.sin_cos();
        Vector::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    pub fn rotate_degrees(self, degrees: f64) -> Vector {
        self.rotate(degrees.to_radians())
    }

    /// Projection of `p` onto the line through `a` and `b`.
    ///
    /// With `limit_to_segment` the result is clamped to the segment. When
    /// `a == b` the direction is undefined and `a` is returned.
    pub fn project_onto_line(p: Vector, a: Vector, b: Vector, limit_to_segment: bool) -> Vector {
        let d = b - a;
        let l2 = d.length_squared();
        if l2 == 0.0 {
            debug!("Projecting onto degenerate segment at ({}, {})", a.x, a.y);
            return a;
        }

        let t = (p - a).dot(d) / l2;
        if limit_to_segment {
            if t < 0.0 {
                return a;
            }
            if t > 1.0 {
                return b;
            }
        }
        a + d * t
    }

    /// Intersection of the lines `o1 + s*d1` and `o2 + t*d2`.
    ///
    /// Returns `None` for parallel lines or zero-length directions.
    pub fn intersection(o1: Vector, d1: Vector, o2: Vector, d2: Vector) -> Option<Vector> {
        let denom = d1.cross(d2);
        if denom.abs() < 1e-12 {
            return None;
        }
        let s = (o2 - o1).cross(d2) / denom;
        Some(o1 + d1 * s)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector::new(x, y)
    }
}

impl From<Vector> for [f64; 2] {
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, divisor: f64) -> Vector {
        Vector::new(self.x / divisor, self.y / divisor)
    }
}
