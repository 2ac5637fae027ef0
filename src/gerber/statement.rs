//! Raw statement stream of a flash-based layer

use super::aperture::Aperture;
use super::primitive::{Primitive, Units};
use serde::{Deserialize, Serialize};

/// One drawing-language statement, as far as flash replay cares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statement {
    /// Define aperture `d_code`
    ApertureDefinition { d_code: u32, aperture: Aperture },
    /// Define a named aperture macro from its constituent primitives
    MacroDefinition { name: String, primitives: Vec<Primitive> },
    /// Make `d_code` the current tool
    SelectAperture { d_code: u32 },
    /// Move without drawing; omitted axes keep their value
    Move {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    /// Stamp the current aperture, optionally after moving
    Flash {
        #[serde(default)]
        x: Option<f64>,
        #[serde(default)]
        y: Option<f64>,
    },
    /// Anything else; replay ignores it
    #[serde(other)]
    Other,
}

impl Statement {
    /// Copy in millimeters, reading coordinates, sizes and unit-less macro
    /// primitives as `units`
    pub fn to_metric(&self, units: Units) -> Statement {
        let factor = units.to_mm();
        match self {
            Statement::ApertureDefinition { d_code, aperture } => Statement::ApertureDefinition {
                d_code: *d_code,
                aperture: aperture.scaled(factor),
            },
            Statement::MacroDefinition { name, primitives } => Statement::MacroDefinition {
                name: name.clone(),
                primitives: primitives.iter().map(|p| p.to_metric_in(units)).collect(),
            },
            Statement::Move { x, y } => Statement::Move {
                x: x.map(|x| x * factor),
                y: y.map(|y| y * factor),
            },
            Statement::Flash { x, y } => Statement::Flash {
                x: x.map(|x| x * factor),
                y: y.map(|y| y * factor),
            },
            Statement::SelectAperture { .. } | Statement::Other => self.clone(),
        }
    }

    /// False for macro definitions holding primitives that still need scaling
    pub fn is_metric_in(&self, units: Units) -> bool {
        match self {
            Statement::MacroDefinition { primitives, .. } => primitives.iter().all(|p| p.is_metric_in(units)),
            _ => units == Units::Metric,
        }
    }
}
