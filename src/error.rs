//! Error taxonomy for stencil conversion
//!
//! Every variant here is fatal: the pipeline stops and no partial stencil is
//! produced. Degenerate geometry (zero-length lines, coincident projection
//! endpoints) is not an error; it is recovered where it happens and only
//! logged at debug level.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StencilError {
    /// A drawing primitive the converter has no rasterization for
    #[error("unsupported primitive: {0}")]
    UnsupportedPrimitive(String),

    /// A flash statement arrived before any tool selection
    #[error("no aperture selected before flash")]
    NoApertureSelected,

    /// The selected D-code was never defined in the layer
    #[error("aperture D{0} is not defined")]
    UndefinedAperture(u32),

    /// Flash with an aperture kind that cannot be stamped
    #[error("unsupported flash aperture: {0}")]
    UnsupportedApertureShape(String),

    /// Nothing to build a stencil from
    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("invalid stencil configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, StencilError>;
