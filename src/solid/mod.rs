//! Solid body representation
//!
//! A small CSG tree: 2D polygons, boolean composition, extrusion and rigid
//! transforms. The assembler only composes these nodes; it never looks
//! inside one again. Bodies serialize to JSON or render to OpenSCAD.
//!
//! # Submodules
//! - `body` - The `Solid` node tree and its builders
//! - `scad` - OpenSCAD source rendering

mod body;
mod scad;

pub use body::Solid;
