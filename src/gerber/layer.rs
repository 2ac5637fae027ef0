//! One parsed drawing file (outline or solder paste)

use super::primitive::{Primitive, Units};
use super::statement::Statement;
use crate::geometry::{BoundingBox, Vector};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

/// Declared drawing extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl LayerBounds {
    pub fn to_bounding_box(&self) -> BoundingBox {
        BoundingBox {
            min: Vector::new(self.min_x, self.min_y),
            max: Vector::new(self.max_x, self.max_y),
        }
    }
}

/// Statements and primitives of one layer, as produced by the parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Unit of the statement coordinates, the layer bounds and every
    /// primitive that does not state its own
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub statements: Vec<Statement>,
    /// Ordinary (non-flash) primitives
    #[serde(default)]
    pub primitives: Vec<Primitive>,
    #[serde(default)]
    pub bounds: Option<LayerBounds>,
}

impl Layer {
    pub fn from_json_str(json: &str) -> anyhow::Result<Layer> {
        serde_json::from_str(json).context("Failed to parse layer JSON")
    }

    /// Load a layer previously serialized by the parser front end
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Layer> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layer file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid layer file {}", path.display()))
    }

    /// The layer with statements, primitives and bounds in millimeters
    pub fn to_metric(&self) -> Cow<'_, Layer> {
        let needs_conversion = self.units != Units::Metric
            || self.primitives.iter().any(|p| !p.is_metric_in(self.units))
            || self.statements.iter().any(|s| !s.is_metric_in(self.units));
        if !needs_conversion {
            return Cow::Borrowed(self);
        }

        let factor = self.units.to_mm();
        Cow::Owned(Layer {
            units: Units::Metric,
            statements: self.statements.iter().map(|s| s.to_metric(self.units)).collect(),
            primitives: self.primitives.iter().map(|p| p.to_metric_in(self.units)).collect(),
            bounds: self.bounds.map(|b| LayerBounds {
                min_x: b.min_x * factor,
                max_x: b.max_x * factor,
                min_y: b.min_y * factor,
                max_y: b.max_y * factor,
            }),
        })
    }
}
