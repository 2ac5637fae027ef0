//! Typed drawing-file model
//!
//! The layer parser is an external collaborator; this module is the
//! contract it fills in. Everything here is plain data that serializes to
//! and from JSON.
//!
//! # Submodules
//! - `aperture` - Tool definitions and the wide-aperture rule
//! - `primitive` - Drawing primitives and unit normalization
//! - `statement` - Statement stream replayed for flashes
//! - `layer` - One drawing file: statements, primitives, bounds

mod aperture;
mod primitive;
mod statement;
mod layer;

pub use aperture::{
    Aperture,
    WIDE_APERTURE_RATIO,
};

pub use primitive::{
    Units,
    ArcDirection,
    Obround,
    Primitive,
    PrimitiveKind,
    MM_PER_INCH,
};

pub use statement::Statement;

pub use layer::{
    Layer,
    LayerBounds,
};
