use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::Segment;

/// A triangle in 3D space.
///
/// Vertex order is significant for [`split_at_level`](Triangle::split_at_level)
/// (it defines the edge traversal) but not for area or volume computation.
///
/// A vertex with `z == level` exactly is classified as *below* the level;
/// there is no separate on-plane category. An edge whose endpoints both lie
/// on the plane therefore never counts as a sign change, so no zero-length
/// crossing is ever computed for it.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First vertex.
    pub a: Point3,
    /// Second vertex.
    pub b: Point3,
    /// Third vertex.
    pub c: Point3,
}

impl Triangle {
    /// Creates a new triangle from three vertices.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    fn vertex(&self, i: usize) -> Point3 {
        match i % 3 {
            0 => self.a,
            1 => self.b,
            _ => self.c,
        }
    }

    /// Returns `true` if all three vertices lie at or below the level.
    #[must_use]
    pub fn all_below(&self, level: f64) -> bool {
        self.a.z <= level && self.b.z <= level && self.c.z <= level
    }

    /// Returns `true` if at least one vertex lies at or below the level.
    #[must_use]
    pub fn any_below(&self, level: f64) -> bool {
        self.a.z <= level || self.b.z <= level || self.c.z <= level
    }

    /// Returns `true` if the triangle has vertices on both sides of the
    /// level.
    #[must_use]
    pub fn straddles(&self, level: f64) -> bool {
        self.any_below(level) && !self.all_below(level)
    }

    /// Returns the triangle's area.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.b - self.a).cross(&(self.c - self.a)).norm() / 2.0
    }

    /// Returns the signed volume of the tetrahedron spanned by `apex` and
    /// this triangle: `dot(a - apex, cross(b - apex, c - apex)) / 6`.
    ///
    /// The sign depends on vertex winding relative to the apex. Summed
    /// over a consistently-wound closed mesh the contributions telescope
    /// to the enclosed volume relative to the apex's plane.
    #[must_use]
    pub fn signed_volume_from(&self, apex: Point3) -> f64 {
        (self.a - apex)
            .dot(&(self.b - apex).cross(&(self.c - apex)))
            / 6.0
    }

    fn spans_level(p: Point3, q: Point3, level: f64) -> bool {
        (p.z <= level) != (q.z <= level)
    }

    /// Splits a triangle straddling the level into three sub-triangles
    /// that exactly tile it, each keeping the parent's winding.
    ///
    /// A straddling triangle has exactly one vertex isolated on its side
    /// of the plane, and both edges adjacent to that vertex cross the
    /// level. Walking the oriented edges a→b, b→c, c→a finds the rotation
    /// `(p, q, r)` where `q` is the isolated vertex; `d` is the crossing
    /// on p→q and `e` the crossing on q→r. The sub-triangles are
    /// `(p, d, r)`, `(d, e, r)` (tiling the quad on r's side) and
    /// `(d, q, e)` (the tip on q's side). Preserved winding keeps the
    /// signed tetrahedron contributions of the below-subset consistent
    /// with the rest of the hull, so volume accumulation stays exact.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotStraddling`] when no edge crosses the
    /// level, i.e. the triangle lies entirely on one side. Callers guard
    /// with [`all_below`](Triangle::all_below) /
    /// [`any_below`](Triangle::any_below) first, so in practice this
    /// signals degenerate input.
    pub fn split_at_level(&self, level: f64) -> Result<[Triangle; 3]> {
        for i in 0..3 {
            let p = self.vertex(i);
            let q = self.vertex(i + 1);
            let r = self.vertex(i + 2);
            if Self::spans_level(p, q, level) && Self::spans_level(q, r, level) {
                let d = Segment::new(p, q).crossing_at_level(level)?;
                let e = Segment::new(q, r).crossing_at_level(level)?;
                return Ok([
                    Triangle::new(p, d, r),
                    Triangle::new(d, e, r),
                    Triangle::new(d, q, e),
                ]);
            }
        }
        Err(GeometryError::NotStraddling { level }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn below_predicates() {
        let tri = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 1.0), p(0.0, 1.0, 2.0));
        assert!(tri.any_below(0.5));
        assert!(!tri.all_below(0.5));
        assert!(tri.straddles(0.5));
        assert!(tri.all_below(2.0));
        assert!(!tri.any_below(-0.1));
        assert!(!tri.straddles(3.0));
    }

    #[test]
    fn vertex_on_level_counts_as_below() {
        let tri = Triangle::new(p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(0.0, 1.0, 1.0));
        assert!(tri.all_below(1.0));
        assert!(!tri.straddles(1.0));
    }

    #[test]
    fn split_one_vertex_below() {
        let tri = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 2.0), p(0.0, 1.0, 2.0));
        let parts = tri.split_at_level(1.0).unwrap();

        let total: f64 = parts.iter().map(Triangle::area).sum();
        assert_abs_diff_eq!(total, tri.area(), epsilon = 1e-12);

        let below: Vec<_> = parts.iter().filter(|t| t.all_below(1.0)).collect();
        assert_eq!(below.len(), 1);
        // The submerged tip keeps a quarter of the area (halved in both
        // directions by the midpoint cut).
        assert_abs_diff_eq!(below[0].area(), tri.area() / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn split_two_vertices_below() {
        let tri = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 2.0));
        let parts = tri.split_at_level(1.0).unwrap();

        let total: f64 = parts.iter().map(Triangle::area).sum();
        assert_abs_diff_eq!(total, tri.area(), epsilon = 1e-12);

        let below_area: f64 = parts
            .iter()
            .filter(|t| t.all_below(1.0))
            .map(Triangle::area)
            .sum();
        assert_abs_diff_eq!(below_area, tri.area() * 3.0 / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn split_crossings_lie_on_level() {
        let tri = Triangle::new(p(0.3, -0.2, -1.0), p(1.4, 0.8, 3.0), p(-0.5, 2.0, 2.0));
        let parts = tri.split_at_level(0.5).unwrap();
        for part in &parts {
            for v in [part.a, part.b, part.c] {
                // Every sub-vertex is either an original vertex or a
                // crossing pinned exactly to the level.
                let original = [-1.0, 3.0, 2.0].iter().any(|z| (v.z - z).abs() < 1e-15);
                assert!(original || (v.z - 0.5).abs() < 1e-15, "stray z {}", v.z);
            }
        }
        let total: f64 = parts.iter().map(Triangle::area).sum();
        assert_abs_diff_eq!(total, tri.area(), epsilon = 1e-9);
    }

    #[test]
    fn split_with_on_plane_vertex() {
        // One vertex exactly at the level (below by convention), one
        // strictly below, one above.
        let tri = Triangle::new(p(0.0, 0.0, 1.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 2.0));
        let parts = tri.split_at_level(1.0).unwrap();
        let total: f64 = parts.iter().map(Triangle::area).sum();
        assert_abs_diff_eq!(total, tri.area(), epsilon = 1e-12);
    }

    #[test]
    fn split_non_straddling_fails() {
        let tri = Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.5), p(0.0, 1.0, 1.0));
        assert!(tri.split_at_level(2.0).is_err());
        assert!(tri.split_at_level(-1.0).is_err());
    }

    #[test]
    fn signed_volume_of_unit_tetrahedron() {
        // Triangle spanning the unit right tetrahedron with apex at origin.
        let tri = Triangle::new(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0));
        let vol = tri.signed_volume_from(p(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(vol.abs(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn signed_volume_flips_with_winding() {
        let apex = p(0.0, 0.0, 0.0);
        let tri = Triangle::new(p(1.0, 0.0, 1.0), p(0.0, 1.0, 1.0), p(-1.0, -1.0, 1.0));
        let flipped = Triangle::new(tri.b, tri.a, tri.c);
        assert_abs_diff_eq!(
            tri.signed_volume_from(apex),
            -flipped.signed_volume_from(apex),
            epsilon = 1e-12
        );
    }
}
