//! Stencil parameters

use crate::error::{Result, StencilError};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Every knob of a stencil build, in millimeters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StencilConfig {
    pub stencil_thickness: f64,
    pub include_ledge: bool,
    /// Keep the whole ledge ring instead of only its long side
    pub full_ledge: bool,
    pub ledge_thickness: f64,
    /// Outward growth of the outline
    pub gap: f64,
    pub include_frame: bool,
    pub frame_width: f64,
    pub frame_height: f64,
    pub frame_thickness: f64,
    /// Signed growth of every closed cutout; negative shrinks
    pub increase_hole_size_by: f64,
    /// Replace each region by its bounding box
    pub simplify_regions: bool,
    /// Mirror for a bottom-side stencil
    pub flip_stencil: bool,
    /// Synthetic outline size, used only without an outline layer
    pub stencil_width: f64,
    pub stencil_height: f64,
    pub stencil_margin: f64,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            stencil_thickness: 0.2,
            include_ledge: true,
            full_ledge: false,
            ledge_thickness: 1.2,
            gap: 0.0,
            include_frame: false,
            frame_width: 155.0,
            frame_height: 155.0,
            frame_thickness: 1.2,
            increase_hole_size_by: 0.0,
            simplify_regions: false,
            flip_stencil: false,
            stencil_width: 0.0,
            stencil_height: 0.0,
            stencil_margin: 0.0,
        }
    }
}

impl StencilConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<StencilConfig> {
        let config: StencilConfig = serde_json::from_str(json).context("Failed to parse stencil configuration")?;
        config.validate().context("Invalid stencil configuration")?;
        Ok(config)
    }

    /// Reject values no physical stencil can have
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("stencil_thickness", self.stencil_thickness),
            ("ledge_thickness", self.ledge_thickness),
            ("gap", self.gap),
            ("frame_width", self.frame_width),
            ("frame_height", self.frame_height),
            ("frame_thickness", self.frame_thickness),
            ("increase_hole_size_by", self.increase_hole_size_by),
            ("stencil_width", self.stencil_width),
            ("stencil_height", self.stencil_height),
            ("stencil_margin", self.stencil_margin),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if self.stencil_thickness <= 0.0 {
            return Err(invalid(format!("stencil_thickness must be positive, got {}", self.stencil_thickness)));
        }
        if self.include_ledge && self.ledge_thickness <= 0.0 {
            return Err(invalid(format!("ledge_thickness must be positive, got {}", self.ledge_thickness)));
        }
        if self.include_frame {
            for (name, value) in [
                ("frame_width", self.frame_width),
                ("frame_height", self.frame_height),
                ("frame_thickness", self.frame_thickness),
            ] {
                if value <= 0.0 {
                    return Err(invalid(format!("{name} must be positive, got {value}")));
                }
            }
        }
        for (name, value) in [
            ("gap", self.gap),
            ("stencil_width", self.stencil_width),
            ("stencil_height", self.stencil_height),
            ("stencil_margin", self.stencil_margin),
        ] {
            if value < 0.0 {
                return Err(invalid(format!("{name} must not be negative, got {value}")));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> StencilError {
    StencilError::InvalidConfig(message)
}
