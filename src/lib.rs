//! Solder paste stencil generation from PCB drawing layers
//!
//! Converts a board outline layer and a solder paste layer into a solid
//! stencil body: primitives become 2D shapes, open lines are stitched into
//! contours, and the assembler composes outline, cutouts and an optional
//! ledge or frame into a print-oriented solid.
//!
//! # Modules
//! - `geometry` - Vectors, shapes, convex hull and offsetting
//! - `gerber` - Typed layer model handed over by the parser
//! - `conversion` - Primitive rasterization, flash replay, stitching
//! - `solid` - CSG body and OpenSCAD rendering
//! - `stencil` - Configuration and assembly
//! - `error` - Error type shared by every stage

pub mod conversion;
pub mod error;
pub mod geometry;
pub mod gerber;
pub mod solid;
pub mod stencil;

pub use error::{Result, StencilError};
pub use gerber::Layer;
pub use solid::Solid;
pub use stencil::{StencilConfig, StencilLayout};

use conversion::{create_cutouts, outline_shape};
use log::debug;

/// Builds the centered, mirrored 2D layout of a stencil
///
/// The outline and solder paste layers are converted in parallel.
///
/// # Arguments
/// * `outline` - Board outline layer; without one the outline is synthesized from the cutouts
/// * `solder_paste` - Layer whose flashes and primitives become cutouts
/// * `config` - Stencil parameters
///
/// # Returns
/// * `Result<StencilLayout>` - The layout, or the first conversion error
pub fn build_layout(outline: Option<&Layer>, solder_paste: &Layer, config: &StencilConfig) -> Result<StencilLayout> {
    let (outline, cutouts) = rayon::join(
        || outline.map(outline_shape).transpose(),
        || create_cutouts(solder_paste, config.simplify_regions),
    );
    let (outline, cutouts) = (outline?, cutouts?);
    debug!(
        "Converted layers: outline {}, {} cutouts",
        if outline.is_some() { "given" } else { "missing" },
        cutouts.len()
    );
    stencil::assemble(outline, cutouts, config)
}

/// Builds the stencil solid body
pub fn build_solid(outline: Option<&Layer>, solder_paste: &Layer, config: &StencilConfig) -> Result<Solid> {
    Ok(build_layout(outline, solder_paste, config)?.to_solid(config))
}

/// Converts the layers into OpenSCAD source for the stencil
///
/// # Example
/// ```ignore
/// let paste = Layer::from_json_file("board.paste.json")?;
/// let scad = process(None, &paste, &StencilConfig::default())?;
/// std::fs::write("stencil.scad", scad)?;
/// ```
pub fn process(outline: Option<&Layer>, solder_paste: &Layer, config: &StencilConfig) -> Result<String> {
    Ok(build_solid(outline, solder_paste, config)?.to_scad())
}
