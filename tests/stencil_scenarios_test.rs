// End-to-end stencil scenarios built from in-memory layers
use gerber_stencil::geometry::{BoundingBox, Vector};
use gerber_stencil::gerber::{Aperture, Layer, Primitive, PrimitiveKind, Statement};
use gerber_stencil::{build_layout, build_solid, process, StencilConfig, StencilError};

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: (f64, f64), b: (f64, f64)) -> Primitive {
        Primitive::metric(PrimitiveKind::Line { start: a.into(), end: b.into(), aperture: None })
    }

    fn square_outline(size: f64) -> Layer {
        Layer {
            primitives: vec![
                edge((0.0, 0.0), (size, 0.0)),
                edge((size, 0.0), (size, size)),
                edge((size, size), (0.0, size)),
                edge((0.0, size), (0.0, 0.0)),
            ],
            ..Default::default()
        }
    }

    fn circle_flash_at(x: f64, y: f64, diameter: f64) -> Layer {
        Layer {
            statements: vec![
                Statement::ApertureDefinition { d_code: 10, aperture: Aperture::Circle { diameter } },
                Statement::SelectAperture { d_code: 10 },
                Statement::Flash { x: Some(x), y: Some(y) },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_square_board_with_center_hole_and_ledge() {
        let config = StencilConfig::default();
        let layout = build_layout(Some(&square_outline(10.0)), &circle_flash_at(5.0, 5.0, 1.0), &config)
            .expect("layout should build");

        let outline = BoundingBox::of(&layout.outline).unwrap();
        assert_eq!(outline.width(), 10.0);
        assert_eq!(outline.height(), 10.0);
        assert_eq!(outline.center(), Vector::ZERO);

        assert_eq!(layout.cutouts.len(), 1, "Expected exactly one hole");
        let hole = BoundingBox::of(&layout.cutouts[0]).unwrap();
        assert!(hole.center().length() < 0.01, "Hole should sit at the board center");
        assert!((hole.width() - 1.0).abs() < 0.005);

        // Equal sides take the left-half cut, keeping the ledge on the +X side
        let ledge = layout.ledge.as_ref().expect("ledge enabled by default");
        let cutter = BoundingBox::of(ledge.cutter.as_ref().unwrap()).unwrap();
        assert_eq!(cutter.min, Vector::new(-6.2, -6.2));
        assert_eq!(cutter.max, Vector::new(0.0, 6.2));

        let scad = layout.to_solid(&config).to_scad();
        assert!(scad.starts_with("rotate(a=180, v=[1, 0, 0]) {"));
        assert_eq!(scad.matches("polygon(").count(), 5);
        assert_eq!(scad.matches("linear_extrude(height=0.2)").count(), 1);
        assert_eq!(scad.matches("translate([0, 0, -1.2])").count(), 1);
    }

    #[test]
    fn test_disjoint_lines_stay_open() {
        let paste = Layer {
            primitives: vec![edge((0.0, 0.0), (1.0, 0.0)), edge((5.0, 5.0), (6.0, 5.0))],
            ..Default::default()
        };
        let config = StencilConfig { include_ledge: false, stencil_margin: 1.0, ..Default::default() };
        let layout = build_layout(None, &paste, &config).unwrap();

        assert_eq!(layout.cutouts.len(), 2);
        assert!(layout.cutouts.iter().all(|c| c.len() == 2));

        let outline = BoundingBox::of(&layout.outline).unwrap();
        assert_eq!((outline.width(), outline.height()), (8.0, 7.0));

        // Open lines have no area and never reach the solid
        let solid = build_solid(None, &paste, &config).unwrap();
        assert_eq!(solid.to_scad().matches("polygon(").count(), 1);
    }

    #[test]
    fn test_hole_shrunk_past_its_radius_disappears() {
        let config = StencilConfig { include_ledge: false, increase_hole_size_by: -0.6, ..Default::default() };
        let paste = circle_flash_at(5.0, 5.0, 1.0);

        let layout = build_layout(Some(&square_outline(10.0)), &paste, &config).unwrap();
        assert!(layout.cutouts.is_empty(), "0.5mm radius hole shrunk by 0.6mm must vanish");

        let scad = process(Some(&square_outline(10.0)), &paste, &config).unwrap();
        assert_eq!(scad.matches("polygon(").count(), 1, "only the outline polygon remains");

        // A smaller shrink keeps a smaller hole
        let config = StencilConfig { increase_hole_size_by: -0.2, ..config };
        let layout = build_layout(Some(&square_outline(10.0)), &paste, &config).unwrap();
        let hole = BoundingBox::of(&layout.cutouts[0]).unwrap();
        assert!((hole.width() - 0.6).abs() < 0.01, "hole width {}", hole.width());
    }

    #[test]
    fn test_macro_flash_lands_at_cursor() {
        let paste = Layer {
            statements: vec![
                Statement::MacroDefinition {
                    name: "SQUARE".into(),
                    primitives: vec![Primitive::metric(PrimitiveKind::Rectangle {
                        lower_left: Vector::ZERO,
                        width: 1.0,
                        height: 1.0,
                    })],
                },
                Statement::ApertureDefinition { d_code: 22, aperture: Aperture::Macro { name: "SQUARE".into() } },
                Statement::SelectAperture { d_code: 22 },
                Statement::Flash { x: Some(5.0), y: Some(5.0) },
            ],
            ..Default::default()
        };
        let cutouts = gerber_stencil::conversion::create_cutouts(&paste, false).unwrap();
        assert_eq!(
            cutouts,
            vec![vec![
                Vector::new(5.0, 5.0),
                Vector::new(5.0, 6.0),
                Vector::new(6.0, 6.0),
                Vector::new(6.0, 5.0),
            ]]
        );
    }

    #[test]
    fn test_flip_mirrors_layout() {
        let outline = square_outline(20.0);
        let paste = circle_flash_at(3.0, 15.0, 0.5);
        let plain = build_layout(Some(&outline), &paste, &StencilConfig::default()).unwrap();
        let flipped = build_layout(
            Some(&outline),
            &paste,
            &StencilConfig { flip_stencil: true, ..Default::default() },
        )
        .unwrap();

        let mirrored: Vec<Vector> = flipped.cutouts[0].iter().map(|v| Vector::new(-v.x, v.y)).collect();
        assert_eq!(mirrored, plain.cutouts[0]);
        assert!(BoundingBox::of(&flipped.cutouts[0]).unwrap().center().x > 0.0);
    }

    #[test]
    fn test_errors_abort_the_whole_stencil() {
        let config = StencilConfig::default();

        let no_tool = Layer {
            statements: vec![Statement::Flash { x: Some(1.0), y: Some(1.0) }],
            ..Default::default()
        };
        assert_eq!(
            process(Some(&square_outline(10.0)), &no_tool, &config).unwrap_err(),
            StencilError::NoApertureSelected
        );

        let unknown = Layer {
            primitives: vec![Primitive::metric(PrimitiveKind::Unknown)],
            ..Default::default()
        };
        assert!(matches!(
            process(Some(&square_outline(10.0)), &unknown, &config),
            Err(StencilError::UnsupportedPrimitive(_))
        ));

        assert!(matches!(
            process(None, &Layer::default(), &config),
            Err(StencilError::EmptyInput(_))
        ));
    }
}
