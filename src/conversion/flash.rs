//! Flash statement replay
//!
//! Walks a layer's statement stream keeping the current tool and cursor,
//! and stamps one shape per flash (several for macro apertures).

use super::primitive::primitive_to_shape;
use crate::error::{Result, StencilError};
use crate::geometry::{translate_shape, Shape, Vector};
use crate::gerber::{Aperture, Obround, Primitive, PrimitiveKind, Statement};
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;

/// Interpreter registers for one replay pass
#[derive(Debug, Default)]
pub struct FlashInterpreter {
    apertures: HashMap<u32, Aperture>,
    /// Macro name to its constituent shapes, rasterized at the origin
    macros: IndexMap<String, Vec<Shape>>,
    current_aperture: Option<u32>,
    cursor: Vector,
    shapes: Vec<Shape>,
}

impl FlashInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one statement, stamping shapes for flashes
    pub fn apply(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::ApertureDefinition { d_code, aperture } => {
                self.apertures.insert(*d_code, aperture.clone());
            }
            Statement::MacroDefinition { name, primitives } => {
                let mut shapes = Vec::with_capacity(primitives.len());
                for primitive in primitives {
                    let shape = primitive_to_shape(primitive, false, false)?;
                    if shape.len() < 2 {
                        debug!("Dropping {} in macro {} with {} vertices", primitive.kind.name(), name, shape.len());
                        continue;
                    }
                    shapes.push(shape);
                }
                self.macros.insert(name.clone(), shapes);
            }
            Statement::SelectAperture { d_code } => {
                self.current_aperture = Some(*d_code);
            }
            Statement::Move { x, y } => self.move_cursor(*x, *y),
            Statement::Flash { x, y } => {
                let d_code = self.current_aperture.ok_or(StencilError::NoApertureSelected)?;
                self.move_cursor(*x, *y);
                self.flash(d_code)?;
            }
            Statement::Other => {}
        }
        Ok(())
    }

    /// Shapes stamped so far, consuming the interpreter
    pub fn finish(self) -> Vec<Shape> {
        self.shapes
    }

    fn move_cursor(&mut self, x: Option<f64>, y: Option<f64>) {
        if let Some(x) = x {
            self.cursor.x = x;
        }
        if let Some(y) = y {
            self.cursor.y = y;
        }
    }

    fn flash(&mut self, d_code: u32) -> Result<()> {
        let aperture = self
            .apertures
            .get(&d_code)
            .ok_or(StencilError::UndefinedAperture(d_code))?;
        let at = self.cursor;

        match aperture {
            Aperture::Circle { diameter } => {
                let circle = Primitive::metric(PrimitiveKind::Circle { position: at, diameter: *diameter });
                self.shapes.push(primitive_to_shape(&circle, false, false)?);
            }
            Aperture::Rectangle { width, height } => {
                let rectangle = Primitive::metric(PrimitiveKind::Rectangle {
                    lower_left: at - Vector::new(*width, *height) / 2.0,
                    width: *width,
                    height: *height,
                });
                self.shapes.push(primitive_to_shape(&rectangle, false, false)?);
            }
            Aperture::Obround { width, height } => {
                let obround = Obround::new(Vector::ZERO, *width, *height);
                let shape = primitive_to_shape(&obround.into(), false, false)?;
                self.shapes.push(positioned(&shape, at));
            }
            Aperture::Macro { name } => {
                let macro_shapes = self
                    .macros
                    .get(name)
                    .ok_or_else(|| StencilError::UnsupportedApertureShape(name.clone()))?;
                self.shapes.extend(macro_shapes.iter().map(|shape| positioned(shape, at)));
            }
            Aperture::Polygon { .. } => {
                return Err(StencilError::UnsupportedApertureShape(aperture.kind().to_string()));
            }
        }
        Ok(())
    }
}

fn positioned(shape: &[Vector], at: Vector) -> Shape {
    translate_shape(shape, at).into_iter().map(Vector::rounded).collect()
}

/// Replay `statements` (already in millimeters) and return the flashed shapes
pub fn interpret_flashes(statements: &[Statement]) -> Result<Vec<Shape>> {
    let mut interpreter = FlashInterpreter::new();
    for statement in statements {
        interpreter.apply(statement)?;
    }
    let shapes = interpreter.finish();
    debug!("Replayed {} statements into {} flashed shapes", statements.len(), shapes.len());
    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn define(d_code: u32, aperture: Aperture) -> Statement {
        Statement::ApertureDefinition { d_code, aperture }
    }

    fn flash(x: f64, y: f64) -> Statement {
        Statement::Flash { x: Some(x), y: Some(y) }
    }

    fn unit_square_macro() -> Statement {
        Statement::MacroDefinition {
            name: "SQ".into(),
            primitives: vec![Primitive::metric(PrimitiveKind::MacroOutline {
                points: vec![
                    Vector::new(0.0, 0.0),
                    Vector::new(0.0, 1.0),
                    Vector::new(1.0, 1.0),
                    Vector::new(1.0, 0.0),
                ],
            })],
        }
    }

    #[test]
    fn test_macro_flash_translated_to_cursor() {
        let shapes = interpret_flashes(&[
            unit_square_macro(),
            define(20, Aperture::Macro { name: "SQ".into() }),
            Statement::SelectAperture { d_code: 20 },
            flash(5.0, 5.0),
        ])
        .unwrap();
        assert_eq!(
            shapes,
            vec![vec![
                Vector::new(5.0, 5.0),
                Vector::new(5.0, 6.0),
                Vector::new(6.0, 6.0),
                Vector::new(6.0, 5.0),
            ]]
        );
    }

    #[test]
    fn test_macro_comments_leave_no_empty_shapes() {
        let Statement::MacroDefinition { primitives, .. } = unit_square_macro() else {
            unreachable!();
        };
        let mut with_comment = vec![Primitive::metric(PrimitiveKind::Comment { text: "pad 1".into() })];
        with_comment.extend(primitives);

        let shapes = interpret_flashes(&[
            Statement::MacroDefinition { name: "SQ".into(), primitives: with_comment },
            define(20, Aperture::Macro { name: "SQ".into() }),
            Statement::SelectAperture { d_code: 20 },
            flash(2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0][0], Vector::new(2.0, 0.0));
        assert!(shapes.iter().all(|s| s.len() >= 2));
    }

    #[test]
    fn test_rectangle_flash_centered_on_cursor() {
        let shapes = interpret_flashes(&[
            define(10, Aperture::Rectangle { width: 2.0, height: 1.0 }),
            Statement::SelectAperture { d_code: 10 },
            flash(3.0, 4.0),
        ])
        .unwrap();
        assert_eq!(
            shapes[0],
            vec![
                Vector::new(2.0, 3.5),
                Vector::new(2.0, 4.5),
                Vector::new(4.0, 4.5),
                Vector::new(4.0, 3.5),
            ]
        );
    }

    #[test]
    fn test_circle_and_obround_flash_positions() {
        let shapes = interpret_flashes(&[
            define(10, Aperture::Circle { diameter: 1.0 }),
            define(11, Aperture::Obround { width: 2.0, height: 1.0 }),
            Statement::SelectAperture { d_code: 10 },
            flash(1.0, 1.0),
            Statement::SelectAperture { d_code: 11 },
            flash(10.0, -2.0),
        ])
        .unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0][0], Vector::new(1.5, 1.0));

        let bbox = crate::geometry::BoundingBox::of(&shapes[1]).unwrap();
        assert_eq!(bbox.max, Vector::new(11.0, -1.5));
        assert!((bbox.center().x - 10.0).abs() < 0.005);
    }

    #[test]
    fn test_partial_moves_keep_other_axis() {
        let mut interpreter = FlashInterpreter::new();
        interpreter.apply(&Statement::Move { x: Some(3.0), y: Some(7.0) }).unwrap();
        interpreter.apply(&Statement::Move { x: Some(1.0), y: None }).unwrap();
        assert_eq!(interpreter.cursor, Vector::new(1.0, 7.0));

        interpreter.apply(&define(10, Aperture::Circle { diameter: 0.2 })).unwrap();
        interpreter.apply(&Statement::SelectAperture { d_code: 10 }).unwrap();
        interpreter.apply(&Statement::Flash { x: None, y: Some(2.0) }).unwrap();
        assert_eq!(interpreter.cursor, Vector::new(1.0, 2.0));
        assert_eq!(interpreter.current_aperture, Some(10));
        assert_eq!(interpreter.finish().len(), 1);
    }

    #[test]
    fn test_flash_without_aperture_fails() {
        let err = interpret_flashes(&[define(10, Aperture::Circle { diameter: 1.0 }), flash(0.0, 0.0)]).unwrap_err();
        assert_eq!(err, StencilError::NoApertureSelected);
    }

    #[test]
    fn test_flash_with_undefined_aperture_fails() {
        let err = interpret_flashes(&[Statement::SelectAperture { d_code: 42 }, flash(0.0, 0.0)]).unwrap_err();
        assert_eq!(err, StencilError::UndefinedAperture(42));
    }

    #[test]
    fn test_unsupported_flash_shapes_fail() {
        let polygon = interpret_flashes(&[
            define(10, Aperture::Polygon { diameter: 1.0, vertices: 6, rotation: 0.0 }),
            Statement::SelectAperture { d_code: 10 },
            flash(0.0, 0.0),
        ])
        .unwrap_err();
        assert_eq!(polygon, StencilError::UnsupportedApertureShape("polygon".into()));

        let missing_macro = interpret_flashes(&[
            define(11, Aperture::Macro { name: "NOPE".into() }),
            Statement::SelectAperture { d_code: 11 },
            flash(0.0, 0.0),
        ])
        .unwrap_err();
        assert_eq!(missing_macro, StencilError::UnsupportedApertureShape("NOPE".into()));
    }

    #[test]
    fn test_other_statements_ignored() {
        let shapes = interpret_flashes(&[Statement::Other, Statement::Move { x: None, y: None }]).unwrap();
        assert!(shapes.is_empty());
    }
}
