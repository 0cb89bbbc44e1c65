use crate::error::{GeometryError, Result};
use crate::math::{Point3, TOLERANCE};

/// A straight edge between two points.
///
/// Used transiently while clipping a triangle against a horizontal plane;
/// never stored in the mesh.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Start point.
    pub a: Point3,
    /// End point.
    pub b: Point3,
}

impl Segment {
    /// Creates a new segment from two endpoints.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    /// Returns the point where the segment crosses the horizontal plane
    /// `z = level`.
    ///
    /// The x and y coordinates are linearly interpolated at parameter
    /// `t = (a.z - level) / (a.z - b.z)`; z is set exactly to `level`.
    /// Only meaningful when the endpoints lie on opposite sides of the
    /// plane, which callers establish before calling.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the segment is horizontal
    /// (`a.z == b.z` within tolerance), where no unique crossing exists.
    pub fn crossing_at_level(&self, level: f64) -> Result<Point3> {
        let dz = self.a.z - self.b.z;
        if dz.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "horizontal segment at z = {} has no unique crossing",
                self.a.z
            ))
            .into());
        }

        let t = (self.a.z - level) / dz;
        Ok(Point3::new(
            self.a.x - (self.a.x - self.b.x) * t,
            self.a.y - (self.a.y - self.b.y) * t,
            level,
        ))
    }
}
