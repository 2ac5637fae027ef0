//! Conversion of drawing layers into 2D shapes
//!
//! # Submodules
//! - `primitive` - Rasterizes a single primitive into a shape
//! - `flash` - Replays flash statements into stamped shapes
//! - `stitch` - Joins open lines into contours
//! - `cutouts` - All cutout shapes of a solder paste layer
//! - `outline` - Board outline of an outline layer

mod primitive;
mod flash;
mod stitch;
mod cutouts;
mod outline;

pub use primitive::{
    primitive_to_shape,
    MAX_SEGMENT_LENGTH,
    MAX_CURVE_SEGMENTS,
};

pub use flash::{
    FlashInterpreter,
    interpret_flashes,
};

pub use stitch::{
    stitch_lines,
    STITCH_TOLERANCE_SQ,
};

pub use cutouts::create_cutouts;

pub use outline::outline_shape;
