//! Hull ingestion from ASCII STL-style listings.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{MeshError, Result};
use crate::geometry::Triangle;
use crate::math::Point3;

use super::Mesh;

/// Loads a hull from a file at `path`.
///
/// # Errors
///
/// Returns [`MeshError::Io`] if the file cannot be opened, otherwise
/// whatever [`read_mesh`] reports.
pub fn load_mesh(path: &Path) -> Result<Mesh> {
    let file = File::open(path).map_err(|e| MeshError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("loading hull from {}", path.display());
    read_mesh(BufReader::new(file))
}

/// Reads a hull from an ASCII STL-style listing.
///
/// Recognizes `vertex x y z` records and `endloop` markers: every group
/// of vertices closed by `endloop` forms one triangle, in input order.
/// All other lines (`solid`, `facet normal`, `outer loop`, `endfacet`,
/// ...) are skipped.
///
/// # Errors
///
/// - [`MeshError::Parse`] for a vertex record without three parseable
///   coordinates.
/// - [`MeshError::MalformedFacet`] when `endloop` closes a group of
///   anything but 3 vertices, or vertices are left open at end of input.
/// - [`MeshError::Empty`] when the input yields no triangles.
pub fn read_mesh<R: BufRead>(reader: R) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    let mut pending: Vec<Point3> = Vec::with_capacity(3);
    let mut line_no = 0_usize;

    for line in reader.lines() {
        line_no += 1;
        let line = line.map_err(|e| MeshError::Parse {
            line: line_no,
            details: e.to_string(),
        })?;

        let mut words = line.split_whitespace();
        match words.next() {
            Some("vertex") => {
                pending.push(parse_vertex(words, line_no)?);
            }
            Some("endloop") => {
                if pending.len() != 3 {
                    return Err(MeshError::MalformedFacet {
                        line: line_no,
                        count: pending.len(),
                    }
                    .into());
                }
                mesh.push_triangle(Triangle::new(pending[0], pending[1], pending[2]));
                pending.clear();
            }
            _ => {}
        }
    }

    if !pending.is_empty() {
        return Err(MeshError::MalformedFacet {
            line: line_no,
            count: pending.len(),
        }
        .into());
    }
    if mesh.is_empty() {
        return Err(MeshError::Empty.into());
    }

    if let Some((lowest, highest)) = mesh.vertical_extent() {
        debug!(
            "read {} triangles, vertical extent [{lowest}, {highest}]",
            mesh.triangle_count()
        );
    }
    Ok(mesh)
}

fn parse_vertex<'a, I>(mut words: I, line_no: usize) -> Result<Point3>
where
    I: Iterator<Item = &'a str>,
{
    let mut coord = |name: &str| -> Result<f64> {
        words
            .next()
            .ok_or_else(|| MeshError::Parse {
                line: line_no,
                details: format!("vertex record is missing the {name} coordinate"),
            })?
            .parse::<f64>()
            .map_err(|e| {
                MeshError::Parse {
                    line: line_no,
                    details: format!("bad {name} coordinate: {e}"),
                }
                .into()
            })
    };
    let x = coord("x")?;
    let y = coord("y")?;
    let z = coord("z")?;
    Ok(Point3::new(x, y, z))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TankError;
    use std::io::Cursor;

    const ONE_FACET: &str = "\
solid tank
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0.5
      vertex 0 1 2
    endloop
  endfacet
endsolid tank
";

    #[test]
    fn reads_single_facet() {
        let mesh = read_mesh(Cursor::new(ONE_FACET)).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertical_extent(), Some((0.0, 2.0)));

        let tri = mesh.triangles()[0];
        assert!((tri.b.x - 1.0).abs() < f64::EPSILON);
        assert!((tri.b.z - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_unrelated_lines() {
        let input = "header junk\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\n";
        let mesh = read_mesh(Cursor::new(input)).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn facet_with_two_vertices_fails() {
        let input = "vertex 0 0 0\nvertex 1 0 0\nendloop\n";
        let err = read_mesh(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            TankError::Mesh(MeshError::MalformedFacet { count: 2, .. })
        ));
    }

    #[test]
    fn facet_with_four_vertices_fails() {
        let input =
            "vertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nvertex 1 1 0\nendloop\n";
        let err = read_mesh(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            TankError::Mesh(MeshError::MalformedFacet { count: 4, .. })
        ));
    }

    #[test]
    fn unterminated_facet_fails() {
        let input = "vertex 0 0 0\nvertex 1 0 0\n";
        let err = read_mesh(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            TankError::Mesh(MeshError::MalformedFacet { count: 2, .. })
        ));
    }

    #[test]
    fn bad_coordinate_fails_with_line() {
        let input = "vertex 0 0 0\nvertex 1 oops 0\nvertex 0 1 0\nendloop\n";
        let err = read_mesh(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            TankError::Mesh(MeshError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn missing_coordinate_fails() {
        let input = "vertex 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\n";
        let err = read_mesh(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, TankError::Mesh(MeshError::Parse { .. })));
    }

    #[test]
    fn empty_input_fails() {
        let err = read_mesh(Cursor::new("solid tank\nendsolid tank\n")).unwrap_err();
        assert!(matches!(err, TankError::Mesh(MeshError::Empty)));
    }
}
