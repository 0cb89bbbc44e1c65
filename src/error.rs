use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the tankvol solver.
#[derive(Debug, Error)]
pub enum TankError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Splitting was requested for a triangle with all vertices on one
    /// side of the cutting level.
    #[error("triangle does not straddle level z = {level}")]
    NotStraddling { level: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to mesh ingestion.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {details}")]
    Parse { line: usize, details: String },

    #[error("line {line}: facet closed with {count} vertices, expected 3")]
    MalformedFacet { line: usize, count: usize },

    #[error("mesh contains no triangles")]
    Empty,
}

/// Errors related to the fill-level solver.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("invalid solver parameters: {0}")]
    InvalidParameters(String),

    /// The mesh is empty or has zero vertical extent, leaving no bracket
    /// to bisect over.
    #[error("mesh vertical extent is empty, nothing to bisect")]
    EmptyBracket,

    #[error("bisection did not converge within {max_iterations} iterations")]
    NonConvergence { max_iterations: usize },
}

/// Convenience type alias for results using [`TankError`].
pub type Result<T> = std::result::Result<T, TankError>;
