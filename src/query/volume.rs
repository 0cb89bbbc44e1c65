use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh;

use super::ClipMode;

/// Computes the liquid volume enclosed by a hull below a horizontal fill
/// level.
///
/// Sums signed tetrahedron volumes against an apex at `(0, 0, level)`.
/// Over a closed, consistently wound hull the contributions telescope to
/// the volume enclosed between the submerged surface and the level plane:
/// the free-surface cap is coplanar with the apex and contributes
/// nothing. The sign of the total is an artifact of winding and apex
/// choice, so the query returns its absolute value.
pub struct VolumeAtLevel {
    level: f64,
    mode: ClipMode,
}

impl VolumeAtLevel {
    /// Creates a new volume query with exact clipping.
    #[must_use]
    pub fn new(level: f64) -> Self {
        Self {
            level,
            mode: ClipMode::default(),
        }
    }

    /// Sets the clipping mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ClipMode) -> Self {
        self.mode = mode;
        self
    }

    /// Executes the query, returning the submerged volume.
    ///
    /// The result is non-negative and, for a valid closed hull,
    /// monotonically non-decreasing in the level.
    ///
    /// # Errors
    ///
    /// In [`ClipMode::Exact`], propagates a geometry error if a
    /// straddling triangle cannot be split (degenerate input).
    pub fn execute(&self, mesh: &Mesh) -> Result<f64> {
        let apex = Point3::new(0.0, 0.0, self.level);
        let mut sum = 0.0;

        for tri in mesh.triangles() {
            match self.mode {
                ClipMode::Approximate => {
                    if tri.any_below(self.level) {
                        sum += tri.signed_volume_from(apex);
                    }
                }
                ClipMode::Exact => {
                    if tri.all_below(self.level) {
                        sum += tri.signed_volume_from(apex);
                    } else if tri.straddles(self.level) {
                        for part in tri.split_at_level(self.level)? {
                            if part.all_below(self.level) {
                                sum += part.signed_volume_from(apex);
                            }
                        }
                    }
                }
            }
        }

        Ok(sum.abs())
    }
}
