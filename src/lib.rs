pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod query;

pub use error::{Result, TankError};
pub use mesh::Mesh;
pub use query::{ClipMode, LevelForVolume, SolverParams, VolumeAtLevel};
