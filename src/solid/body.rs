//! CSG node tree

use crate::geometry::Vector;
use serde::Serialize;

/// One node of a solid body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Solid {
    /// Closed 2D polygon in the XY plane
    Polygon { points: Vec<Vector> },
    Union { children: Vec<Solid> },
    /// First child minus all the others
    Difference { children: Vec<Solid> },
    /// Extrude a 2D child along +Z
    LinearExtrude { height: f64, child: Box<Solid> },
    Translate { offset: [f64; 3], child: Box<Solid> },
    /// Rotate by `angle` degrees about `axis`
    Rotate { angle: f64, axis: [f64; 3], child: Box<Solid> },
}

impl Solid {
    pub fn polygon(points: Vec<Vector>) -> Solid {
        Solid::Polygon { points }
    }

    pub fn union(children: Vec<Solid>) -> Solid {
        Solid::Union { children }
    }

    /// `self` minus `other`; chained differences share one node
    pub fn difference(self, other: Solid) -> Solid {
        match self {
            Solid::Difference { mut children } => {
                children.push(other);
                Solid::Difference { children }
            }
            base => Solid::Difference { children: vec![base, other] },
        }
    }

    pub fn extrude(self, height: f64) -> Solid {
        Solid::LinearExtrude { height, child: Box::new(self) }
    }

    pub fn translate(self, offset: [f64; 3]) -> Solid {
        Solid::Translate { offset, child: Box::new(self) }
    }

    pub fn rotate(self, angle: f64, axis: [f64; 3]) -> Solid {
        Solid::Rotate { angle, axis, child: Box::new(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Solid {
        Solid::polygon(vec![Vector::new(0.0, 0.0), Vector::new(1.0, 0.0), Vector::new(0.0, 1.0)])
    }

    #[test]
    fn test_difference_chains_flat() {
        let body = triangle().difference(triangle()).difference(triangle());
        let Solid::Difference { children } = &body else {
            panic!("expected difference");
        };
        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|c| matches!(c, Solid::Polygon { .. })));
    }

    #[test]
    fn test_builders_nest() {
        let body = Solid::union(vec![triangle(), triangle().extrude(1.0)])
            .translate([0.0, 0.0, -1.0])
            .rotate(180.0, [1.0, 0.0, 0.0]);
        let Solid::Rotate { angle, child, .. } = &body else {
            panic!("expected rotate");
        };
        assert_eq!(*angle, 180.0);
        let Solid::Translate { child, .. } = child.as_ref() else {
            panic!("expected translate");
        };
        assert!(matches!(child.as_ref(), Solid::Union { children } if children.len() == 2));
    }

    #[test]
    fn test_serializes_as_tagged_tree() {
        let json = serde_json::to_value(triangle().extrude(0.2)).unwrap();
        assert_eq!(json["op"], "linear_extrude");
        assert_eq!(json["height"], 0.2);
        assert_eq!(json["child"]["op"], "polygon");
        assert_eq!(json["child"]["points"][1], serde_json::json!([1.0, 0.0]));
    }
}
