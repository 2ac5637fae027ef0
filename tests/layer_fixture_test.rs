// Stencil generation from layers serialized by the parser front end
use gerber_stencil::conversion::create_cutouts;
use gerber_stencil::geometry::{BoundingBox, Vector};
use gerber_stencil::{build_layout, process, Layer, StencilConfig};

#[cfg(test)]
mod tests {
    use super::*;

    fn load(name: &str) -> Layer {
        let path = format!("tests/fixtures/{}", name);
        let result = Layer::from_json_file(&path);
        assert!(result.is_ok(), "Failed to load {}: {:?}", path, result.err());
        result.unwrap()
    }

    #[test]
    fn test_paste_fixture_cutouts() {
        let paste = load("paste_layer.json");
        let cutouts = create_cutouts(&paste, false).expect("cutouts should convert");

        // Four flashes, then the stitched pad outline
        assert_eq!(cutouts.len(), 5);
        assert_eq!(cutouts[0].len(), 31);
        assert_eq!(
            cutouts[1],
            vec![
                Vector::new(7.25, 1.6),
                Vector::new(7.25, 2.4),
                Vector::new(8.75, 2.4),
                Vector::new(8.75, 1.6),
            ]
        );
        let obround = BoundingBox::of(&cutouts[2]).unwrap();
        assert_eq!(obround.max, Vector::new(9.0, 8.5));
        assert_eq!(cutouts[3][0], Vector::new(5.0, 5.0));

        let mut pad = cutouts[4].clone();
        pad.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        assert_eq!(
            pad,
            vec![
                Vector::new(1.0, 9.0),
                Vector::new(1.0, 10.0),
                Vector::new(3.0, 9.0),
                Vector::new(3.0, 10.0),
            ]
        );
        println!("✓ Paste fixture produced {} cutouts", cutouts.len());
    }

    #[test]
    fn test_imperial_outline_fixture() {
        let outline = load("outline_layer.json");
        let paste = load("paste_layer.json");
        let config = StencilConfig::from_json_str(r#"{"gap": 0.0, "stencil_thickness": 0.15}"#).unwrap();

        let layout = build_layout(Some(&outline), &paste, &config).unwrap();
        let bounds = BoundingBox::of(&layout.outline).unwrap();
        assert_eq!(bounds.width(), 25.4);
        assert_eq!(bounds.height(), 12.7);

        // Wider than tall: the lower half of the ledge is cut away
        let cutter = BoundingBox::of(layout.ledge.as_ref().unwrap().cutter.as_ref().unwrap()).unwrap();
        assert_eq!(cutter.max.y, 0.0);

        let scad = process(Some(&outline), &paste, &config).unwrap();
        assert!(scad.contains("linear_extrude(height=0.15)"));
        assert_eq!(scad.matches("polygon(").count(), 1 + 5 + 3);
    }

    #[test]
    fn test_missing_fixture_reports_path() {
        let err = Layer::from_json_file("tests/fixtures/does_not_exist.json").unwrap_err();
        assert!(format!("{:#}", err).contains("does_not_exist.json"));
    }
}
