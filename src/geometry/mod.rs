//! Geometry module for stencil shapes
//!
//! Plain 2D geometry the conversion engine is built on: vectors, vertex
//! lists and the two shape-level collaborators the assembler needs before
//! anything becomes a solid.
//!
//! # Submodules
//! - `vector` - 2D point/direction maths and vertex rounding
//! - `shape` - Shape type, bounding boxes, translation and mirroring
//! - `hull` - Convex hull of a vertex set
//! - `offset` - Inward/outward polygon offsetting

mod vector;
mod shape;
mod hull;
mod offset;

pub use vector::{
    Vector,
    VERTEX_DECIMALS,
};

pub use shape::{
    Shape,
    BoundingBox,
    translate_shape,
    mirror_shape_x,
    signed_area,
};

pub use hull::convex_hull;

pub use offset::{
    offset_shape,
    grow_shape,
};
