//! Typed drawing primitives handed over by the layer parser

use super::aperture::Aperture;
use crate::geometry::Vector;
use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;

/// Coordinate unit of a primitive or layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Factor converting one unit of this kind into millimeters
    pub fn to_mm(self) -> f64 {
        match self {
            Units::Metric => 1.0,
            Units::Imperial => MM_PER_INCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

/// A capsule: a rectangle with semicircular ends on its long axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obround {
    /// Center of the capsule
    pub position: Vector,
    pub width: f64,
    pub height: f64,
}

impl Obround {
    pub fn new(position: Vector, width: f64, height: f64) -> Self {
        Self { position, width, height }
    }

    /// Two end circles plus the rectangle joining their centers.
    ///
    /// All sub-shapes are convex and overlap, so the hull of their vertices
    /// is the capsule outline.
    pub fn sub_shapes(&self) -> Vec<Primitive> {
        let (w, h) = (self.width, self.height);
        let (offset, diameter, body) = if w > h {
            (Vector::new((w - h) / 2.0, 0.0), h, Vector::new(w - h, h))
        } else {
            (Vector::new(0.0, (h - w) / 2.0), w, Vector::new(w, h - w))
        };

        vec![
            Primitive::metric(PrimitiveKind::Circle {
                position: self.position - offset,
                diameter,
            }),
            Primitive::metric(PrimitiveKind::Circle {
                position: self.position + offset,
                diameter,
            }),
            Primitive::metric(PrimitiveKind::Rectangle {
                lower_left: self.position - body / 2.0,
                width: body.x,
                height: body.y,
            }),
        ]
    }
}

/// One drawing primitive together with the unit its numbers are in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// `None` reads the numbers in the enclosing layer's (or region's) units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    #[serde(flatten)]
    pub kind: PrimitiveKind,
}

/// Every primitive variant the converter knows about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveKind {
    Line {
        start: Vector,
        end: Vector,
        #[serde(default)]
        aperture: Option<Aperture>,
    },
    Circle {
        position: Vector,
        diameter: f64,
    },
    Rectangle {
        lower_left: Vector,
        width: f64,
        height: f64,
    },
    /// Closed contour made from its children in order
    Region {
        primitives: Vec<Primitive>,
    },
    Obround(Obround),
    /// Angles in degrees, counter-clockwise from +X
    Arc {
        center: Vector,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    },
    /// Rectangle rotated about its center
    CenterLine {
        center: Vector,
        width: f64,
        height: f64,
        #[serde(default)]
        rotation: f64,
    },
    /// Stroke of a given width with butt ends
    VectorLine {
        start: Vector,
        end: Vector,
        width: f64,
    },
    /// Polygon already given as its outline points
    MacroOutline {
        points: Vec<Vector>,
    },
    Comment {
        #[serde(default)]
        text: String,
    },
    /// Opaque container the parser could not break down
    Group,
    /// Anything the parser produced that has no variant here
    #[serde(other)]
    Unknown,
}

impl PrimitiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Line { .. } => "line",
            PrimitiveKind::Circle { .. } => "circle",
            PrimitiveKind::Rectangle { .. } => "rectangle",
            PrimitiveKind::Region { .. } => "region",
            PrimitiveKind::Obround(_) => "obround",
            PrimitiveKind::Arc { .. } => "arc",
            PrimitiveKind::CenterLine { .. } => "center_line",
            PrimitiveKind::VectorLine { .. } => "vector_line",
            PrimitiveKind::MacroOutline { .. } => "macro_outline",
            PrimitiveKind::Comment { .. } => "comment",
            PrimitiveKind::Group => "group",
            PrimitiveKind::Unknown => "unknown",
        }
    }

    /// Multiply every linear quantity by `factor`; angles are untouched
    fn scaled(&self, factor: f64, units: Units) -> PrimitiveKind {
        match self {
            PrimitiveKind::Line { start, end, aperture } => PrimitiveKind::Line {
                start: *start * factor,
                end: *end * factor,
                aperture: aperture.as_ref().map(|a| a.scaled(factor)),
            },
            PrimitiveKind::Circle { position, diameter } => PrimitiveKind::Circle {
                position: *position * factor,
                diameter: diameter * factor,
            },
            PrimitiveKind::Rectangle { lower_left, width, height } => PrimitiveKind::Rectangle {
                lower_left: *lower_left * factor,
                width: width * factor,
                height: height * factor,
            },
            PrimitiveKind::Region { primitives } => PrimitiveKind::Region {
                primitives: primitives.iter().map(|p| p.to_metric_in(units)).collect(),
            },
            PrimitiveKind::Obround(o) => PrimitiveKind::Obround(Obround::new(
                o.position * factor,
                o.width * factor,
                o.height * factor,
            )),
            PrimitiveKind::Arc { center, radius, start_angle, end_angle, direction } => PrimitiveKind::Arc {
                center: *center * factor,
                radius: radius * factor,
                start_angle: *start_angle,
                end_angle: *end_angle,
                direction: *direction,
            },
            PrimitiveKind::CenterLine { center, width, height, rotation } => PrimitiveKind::CenterLine {
                center: *center * factor,
                width: width * factor,
                height: height * factor,
                rotation: *rotation,
            },
            PrimitiveKind::VectorLine { start, end, width } => PrimitiveKind::VectorLine {
                start: *start * factor,
                end: *end * factor,
                width: width * factor,
            },
            PrimitiveKind::MacroOutline { points } => PrimitiveKind::MacroOutline {
                points: points.iter().map(|&p| p * factor).collect(),
            },
            PrimitiveKind::Comment { .. } | PrimitiveKind::Group | PrimitiveKind::Unknown => self.clone(),
        }
    }
}

impl Primitive {
    pub fn new(units: Units, kind: PrimitiveKind) -> Self {
        Self { units: Some(units), kind }
    }

    /// A primitive whose numbers are already in millimeters
    pub fn metric(kind: PrimitiveKind) -> Self {
        Self::new(Units::Metric, kind)
    }

    /// Own units, or `inherited` when the primitive does not state any
    pub fn units_in(&self, inherited: Units) -> Units {
        self.units.unwrap_or(inherited)
    }

    /// True when this primitive and all nested children are in millimeters
    /// inside a context whose units are `inherited`
    pub fn is_metric_in(&self, inherited: Units) -> bool {
        let units = self.units_in(inherited);
        units == Units::Metric
            && match &self.kind {
                PrimitiveKind::Region { primitives } => primitives.iter().all(|p| p.is_metric_in(units)),
                _ => true,
            }
    }

    pub fn is_metric(&self) -> bool {
        self.is_metric_in(Units::Metric)
    }

    /// Copy of this primitive (and all nested children) in millimeters,
    /// reading unstated units as `inherited`
    pub fn to_metric_in(&self, inherited: Units) -> Primitive {
        let units = self.units_in(inherited);
        Primitive::metric(self.kind.scaled(units.to_mm(), units))
    }

    pub fn to_metric(&self) -> Primitive {
        self.to_metric_in(Units::Metric)
    }
}

/// A primitive in the units of whatever contains it
impl From<PrimitiveKind> for Primitive {
    fn from(kind: PrimitiveKind) -> Self {
        Self { units: None, kind }
    }
}

impl From<Obround> for Primitive {
    fn from(obround: Obround) -> Self {
        Primitive::metric(PrimitiveKind::Obround(obround))
    }
}
