//! # ASCII STL
//!
//! Writes an assembled scene as ASCII STL text and reads that text back.
//!
//! ```text
//! solid MODEL
//! facet normal <nx> <ny> <nz>
//!   outer loop
//!     vertex <x> <y> <z>
//!     vertex <x> <y> <z>
//!     vertex <x> <y> <z>
//!   endloop
//! endfacet
//! endsolid MODEL
//! ```
//!
//! Numbers are fixed-point with [`STL_DECIMAL_PLACES`] fractional digits.

use crate::error::MeshError;
use crate::mesh::{Mesh, Triangle};
use crate::scene::Scene;
use config::constants::{
    DOWNLOAD_FILE_NAME, GENERATED_FILE_NAME, STL_DECIMAL_PLACES, STL_SOLID_NAME,
};
use glam::DVec3;
use std::fmt::{self, Write};

/// Where the STL text is handed off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportTarget {
    /// Saved directly by the user
    #[default]
    Download,
    /// Uploaded to the generate endpoint, which returns its own copy
    Generated,
}

impl ExportTarget {
    /// File name the text is stored under.
    pub fn file_name(self) -> &'static str {
        match self {
            ExportTarget::Download => DOWNLOAD_FILE_NAME,
            ExportTarget::Generated => GENERATED_FILE_NAME,
        }
    }
}

/// Serializes a scene to ASCII STL.
///
/// # Errors
///
/// [`MeshError::EmptyInput`] if the scene has no solids, and
/// [`MeshError::NonFinite`] if a coordinate is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use blueprint_mesh::{assemble, serialize, MeshError, Solid};
/// use blueprint_shapes::ShapeKind;
/// use glam::DVec3;
///
/// let solid = Solid::new_box(ShapeKind::Door, DVec3::ZERO, DVec3::ONE);
/// let text = serialize(&assemble(vec![solid], 1.0, 0.0)).unwrap();
/// assert!(text.starts_with("solid MODEL\n"));
/// assert_eq!(text.matches("endfacet").count(), 12);
///
/// let empty = assemble(Vec::new(), 1.0, 0.0);
/// assert_eq!(serialize(&empty), Err(MeshError::EmptyInput));
/// ```
pub fn serialize(scene: &Scene) -> Result<String, MeshError> {
    if scene.is_empty() {
        return Err(MeshError::EmptyInput);
    }

    let mesh = scene.triangulate()?;
    // Roughly 260 bytes per facet at six decimal places
    let mut out = String::with_capacity(mesh.triangle_count() * 260 + 32);
    write_ascii_stl(&mut out, &mesh)?;
    Ok(out)
}

/// Writes every facet of `mesh` as ASCII STL into `out`.
///
/// Nothing is written past the first non-finite facet.
pub fn write_ascii_stl<W: Write>(out: &mut W, mesh: &Mesh) -> Result<(), MeshError> {
    writeln!(out, "solid {}", STL_SOLID_NAME)?;

    for (index, facet) in mesh.facets().enumerate() {
        if !facet.is_finite() {
            return Err(MeshError::non_finite(format!("facet {}", index)));
        }

        writeln!(out, "facet normal {}", Coords(facet.normal))?;
        writeln!(out, "  outer loop")?;
        for vertex in facet.vertices {
            writeln!(out, "    vertex {}", Coords(vertex))?;
        }
        writeln!(out, "  endloop")?;
        writeln!(out, "endfacet")?;
    }

    writeln!(out, "endsolid {}", STL_SOLID_NAME)?;
    Ok(())
}

/// Three space-separated fixed-point numbers.
struct Coords(DVec3);

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", Fixed(self.0.x), Fixed(self.0.y), Fixed(self.0.z))
    }
}

/// One fixed-point number; values that round to zero print unsigned.
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.*}", STL_DECIMAL_PLACES, self.0);
        match text.strip_prefix('-') {
            Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
                f.write_str(magnitude)
            }
            _ => f.write_str(&text),
        }
    }
}

/// Parses ASCII STL text back into facets.
///
/// Keywords are matched case-insensitively and indentation is ignored.
/// The text must open with `solid` and close with `endsolid`; anything after
/// `endsolid` is not read.
///
/// # Errors
///
/// [`MeshError::MalformedStl`] for unparseable numbers, keywords out of
/// order (nested facets or loops, vertices outside a loop), facets that do
/// not have exactly three vertices, or a missing header or footer.
pub fn read_ascii_stl(text: &str) -> Result<Vec<Triangle>, MeshError> {
    let mut facets = Vec::new();
    let mut started = false;
    let mut normal: Option<DVec3> = None;
    let mut in_loop = false;
    let mut vertices: Vec<DVec3> = Vec::with_capacity(3);
    let mut last_line = 0;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(keyword) = parts.first() else {
            continue;
        };
        last_line = line_no;
        let keyword = keyword.to_ascii_lowercase();

        if !started {
            if keyword != "solid" {
                return Err(MeshError::malformed(line_no, "expected `solid` header"));
            }
            started = true;
            continue;
        }

        match keyword.as_str() {
            "facet" => {
                if normal.is_some() {
                    return Err(MeshError::malformed(line_no, "facet inside open facet"));
                }
                if parts.get(1).map(|s| s.eq_ignore_ascii_case("normal")) != Some(true) {
                    return Err(MeshError::malformed(line_no, "expected `facet normal`"));
                }
                normal = Some(parse_vec3(&parts[2..], line_no)?);
                vertices.clear();
            }
            "outer" => {
                if parts.get(1).map(|s| s.eq_ignore_ascii_case("loop")) != Some(true)
                    || parts.len() != 2
                {
                    return Err(MeshError::malformed(line_no, "expected `outer loop`"));
                }
                if normal.is_none() || in_loop || !vertices.is_empty() {
                    return Err(MeshError::malformed(line_no, "loop outside facet"));
                }
                in_loop = true;
            }
            "vertex" => {
                if !in_loop {
                    return Err(MeshError::malformed(line_no, "vertex outside loop"));
                }
                vertices.push(parse_vec3(&parts[1..], line_no)?);
            }
            "endloop" => {
                if !in_loop {
                    return Err(MeshError::malformed(line_no, "endloop without loop"));
                }
                in_loop = false;
            }
            "endfacet" => {
                if in_loop {
                    return Err(MeshError::malformed(line_no, "endfacet inside loop"));
                }
                let Some(facet_normal) = normal.take() else {
                    return Err(MeshError::malformed(line_no, "endfacet without facet"));
                };
                let &[v0, v1, v2] = vertices.as_slice() else {
                    return Err(MeshError::malformed(
                        line_no,
                        format!("facet has {} vertices", vertices.len()),
                    ));
                };
                facets.push(Triangle {
                    normal: facet_normal,
                    vertices: [v0, v1, v2],
                });
                vertices.clear();
            }
            "endsolid" => {
                if normal.is_some() {
                    return Err(MeshError::malformed(line_no, "endsolid inside open facet"));
                }
                return Ok(facets);
            }
            other => {
                return Err(MeshError::malformed(
                    line_no,
                    format!("unexpected keyword `{}`", other),
                ));
            }
        }
    }

    if !started {
        return Err(MeshError::malformed(1, "expected `solid` header"));
    }
    Err(MeshError::malformed(last_line, "missing `endsolid`"))
}

fn parse_vec3(parts: &[&str], line_no: usize) -> Result<DVec3, MeshError> {
    let &[x, y, z] = parts else {
        return Err(MeshError::malformed(
            line_no,
            format!("expected 3 numbers, found {}", parts.len()),
        ));
    };

    let parse = |s: &str| {
        s.parse::<f64>()
            .map_err(|e| MeshError::malformed(line_no, format!("`{}`: {}", s, e)))
    };
    Ok(DVec3::new(parse(x)?, parse(y)?, parse(z)?))
}
