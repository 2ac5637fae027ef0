//! OpenSCAD rendering of a solid body

use super::body::Solid;
use std::fmt;

impl Solid {
    /// OpenSCAD source text for this body
    pub fn to_scad(&self) -> String {
        self.to_string()
    }

    fn write_scad(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Solid::Polygon { points } => {
                write!(f, "{:indent$}polygon(points=[", "", indent = depth * 2)?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "[{}, {}]", p.x, p.y)?;
                }
                f.write_str("]);\n")
            }
            Solid::Union { children } => write_block(f, depth, "union()", children),
            Solid::Difference { children } => write_block(f, depth, "difference()", children),
            Solid::LinearExtrude { height, child } => {
                write_block(f, depth, &format!("linear_extrude(height={height})"), std::slice::from_ref(child.as_ref()))
            }
            Solid::Translate { offset, child } => {
                write_block(f, depth, &format!("translate({})", vec3(offset)), std::slice::from_ref(child.as_ref()))
            }
            Solid::Rotate { angle, axis, child } => write_block(
                f,
                depth,
                &format!("rotate(a={angle}, v={})", vec3(axis)),
                std::slice::from_ref(child.as_ref()),
            ),
        }
    }
}

fn vec3(v: &[f64; 3]) -> String {
    format!("[{}, {}, {}]", v[0], v[1], v[2])
}

fn write_block(f: &mut fmt::Formatter<'_>, depth: usize, header: &str, children: &[Solid]) -> fmt::Result {
    writeln!(f, "{:indent$}{header} {{", "", indent = depth * 2)?;
    for child in children {
        child.write_scad(f, depth + 1)?;
    }
    writeln!(f, "{:indent$}}}", "", indent = depth * 2)
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_scad(f, 0)
    }
}
