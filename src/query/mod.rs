mod level;
mod volume;

pub use level::LevelForVolume;
pub use volume::VolumeAtLevel;

/// Selects how triangles straddling the fill level are handled by volume
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipMode {
    /// Include every triangle with at least one vertex below the level
    /// as-is. Fast, but biased near the waterline.
    Approximate,
    /// Clip straddling triangles against the level and include only the
    /// submerged parts. Exact for a closed, consistently wound hull.
    #[default]
    Exact,
}

/// Parameters controlling the bisection level solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverParams {
    /// Absolute convergence tolerance on the level (not on the volume).
    pub tolerance: f64,
    /// Defensive bound on bisection iterations.
    pub max_iterations: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 200,
        }
    }
}
