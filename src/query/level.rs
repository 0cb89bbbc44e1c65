use tracing::debug;

use crate::error::{Result, SolverError};
use crate::math::TOLERANCE;
use crate::mesh::Mesh;

use super::{ClipMode, SolverParams, VolumeAtLevel};

/// Finds the fill level producing a target volume by bisection.
///
/// Relies on the submerged volume being monotonically non-decreasing in
/// the level, which holds for a valid closed hull. The bracket is the
/// hull's vertical extent; each iteration halves it, keeping
/// `volume(lower) <= target <= volume(higher)`.
pub struct LevelForVolume {
    target: f64,
    mode: ClipMode,
    params: SolverParams,
}

impl LevelForVolume {
    /// Creates a new solver for `target` volume with exact clipping and
    /// default parameters.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            mode: ClipMode::default(),
            params: SolverParams::default(),
        }
    }

    /// Sets the clipping mode used for volume evaluations.
    #[must_use]
    pub fn with_mode(mut self, mode: ClipMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the convergence tolerance and iteration cap.
    #[must_use]
    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the search, returning the level whose submerged volume
    /// matches the target within the level tolerance.
    ///
    /// Returns the lower end of the final bracket, so a target of zero
    /// yields the hull's lowest point and a target at or above the total
    /// enclosed volume yields (up to tolerance) its highest point.
    ///
    /// # Errors
    ///
    /// - [`SolverError::InvalidParameters`] for a non-positive or
    ///   non-finite tolerance, or a zero iteration cap.
    /// - [`SolverError::EmptyBracket`] for an empty mesh or one with zero
    ///   vertical extent, where no level can be bracketed.
    /// - [`SolverError::NonConvergence`] if the bracket fails to shrink
    ///   below the tolerance within the iteration cap, which indicates
    ///   degenerate (e.g. NaN-ridden) input rather than a slow search:
    ///   halving a finite bracket reaches `1e-6` in well under 100 steps.
    pub fn execute(&self, mesh: &Mesh) -> Result<f64> {
        if !(self.params.tolerance > 0.0 && self.params.tolerance.is_finite()) {
            return Err(SolverError::InvalidParameters(format!(
                "tolerance must be positive and finite, got {}",
                self.params.tolerance
            ))
            .into());
        }
        if self.params.max_iterations == 0 {
            return Err(
                SolverError::InvalidParameters("max_iterations must be at least 1".into()).into(),
            );
        }

        let (mut lower, mut higher) =
            mesh.vertical_extent().ok_or(SolverError::EmptyBracket)?;
        if higher - lower < TOLERANCE {
            return Err(SolverError::EmptyBracket.into());
        }

        for iteration in 0..self.params.max_iterations {
            if higher - lower < self.params.tolerance {
                debug!(
                    "converged to level {lower} after {iteration} iterations for target {}",
                    self.target
                );
                return Ok(lower);
            }
            let mid = (lower + higher) / 2.0;
            let volume = VolumeAtLevel::new(mid).with_mode(self.mode).execute(mesh)?;
            if volume > self.target {
                higher = mid;
            } else {
                lower = mid;
            }
        }

        Err(SolverError::NonConvergence {
            max_iterations: self.params.max_iterations,
        }
        .into())
    }
}
