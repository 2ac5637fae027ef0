//! Stencil configuration and assembly
//!
//! # Submodules
//! - `config` - Build parameters and their validation
//! - `assembly` - Outline/cutout layout, ledge and frame, solid body

mod config;
mod assembly;

pub use config::StencilConfig;

pub use assembly::{
    assemble,
    LedgeLayout,
    StencilLayout,
    LEDGE_WIDTH,
};
