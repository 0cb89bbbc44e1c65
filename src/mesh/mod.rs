mod io;

pub use io::{load_mesh, read_mesh};

use crate::geometry::Triangle;

/// A triangulated tank hull.
///
/// An append-only triangle soup plus the running vertical extent of every
/// vertex pushed so far. Built once by ingestion, then treated as
/// read-only by all volume queries.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    triangles: Vec<Triangle>,
    extent: Option<(f64, f64)>,
}

impl Mesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a triangle, folding its vertices into the vertical extent.
    pub fn push_triangle(&mut self, tri: Triangle) {
        let (mut lowest, mut highest) = self.extent.unwrap_or((tri.a.z, tri.a.z));
        for v in [tri.a, tri.b, tri.c] {
            lowest = lowest.min(v.z);
            highest = highest.max(v.z);
        }
        self.extent = Some((lowest, highest));
        self.triangles.push(tri);
    }

    /// Returns the triangles of the hull.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if the mesh holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns `(lowest, highest)` vertex z over the whole mesh, or
    /// `None` while the mesh is empty.
    #[must_use]
    pub fn vertical_extent(&self) -> Option<(f64, f64)> {
        self.extent
    }
}
