//! Aperture (drawing tool) definitions

use serde::{Deserialize, Serialize};

/// A line counts as drawn with a wide aperture when the aperture's size is
/// more than `1 / WIDE_APERTURE_RATIO` of the line length. Tunable.
pub const WIDE_APERTURE_RATIO: f64 = 10.0;

/// Drawing tool shape and size modifiers, in the layer's units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Aperture {
    Circle { diameter: f64 },
    Rectangle { width: f64, height: f64 },
    Obround { width: f64, height: f64 },
    /// Regular polygon tool; defined by the drawing language but never flashed here
    Polygon {
        diameter: f64,
        vertices: u32,
        #[serde(default)]
        rotation: f64,
    },
    /// Reference to an aperture macro by name
    Macro { name: String },
}

impl Aperture {
    pub fn kind(&self) -> &'static str {
        match self {
            Aperture::Circle { .. } => "circle",
            Aperture::Rectangle { .. } => "rectangle",
            Aperture::Obround { .. } => "obround",
            Aperture::Polygon { .. } => "polygon",
            Aperture::Macro { .. } => "macro",
        }
    }

    /// Dominant linear dimension: diameter, else width, else height, else 0
    pub fn effective_size(&self) -> f64 {
        match self {
            Aperture::Circle { diameter } | Aperture::Polygon { diameter, .. } => *diameter,
            Aperture::Rectangle { width, height } | Aperture::Obround { width, height } => {
                if *width != 0.0 {
                    *width
                } else {
                    *height
                }
            }
            Aperture::Macro { .. } => 0.0,
        }
    }

    /// Whether a line of `length` drawn with this tool should be thickened.
    ///
    /// A zero-size aperture is never wide. Without a (non-zero) reference
    /// length any non-zero size is wide.
    pub fn is_wide(&self, length: Option<f64>) -> bool {
        let size = self.effective_size();
        if size == 0.0 {
            return false;
        }
        match length {
            Some(length) if length != 0.0 => size > length / WIDE_APERTURE_RATIO,
            _ => true,
        }
    }

    /// Same aperture with every size modifier multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Aperture {
        match self {
            Aperture::Circle { diameter } => Aperture::Circle { diameter: diameter * factor },
            Aperture::Rectangle { width, height } => Aperture::Rectangle {
                width: width * factor,
                height: height * factor,
            },
            Aperture::Obround { width, height } => Aperture::Obround {
                width: width * factor,
                height: height * factor,
            },
            Aperture::Polygon { diameter, vertices, rotation } => Aperture::Polygon {
                diameter: diameter * factor,
                vertices: *vertices,
                rotation: *rotation,
            },
            Aperture::Macro { name } => Aperture::Macro { name: name.clone() },
        }
    }
}
