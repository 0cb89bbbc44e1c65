//! Fill-level report for a tank hull.
//!
//! Usage:
//! ```text
//! cargo run --example report -- <hull.stl> <target-volume>
//! ```
//!
//! Loads the hull, solves the fill level for the target volume with both
//! clipping modes, and re-evaluates both volume fields at each solved
//! level to show the residual between the approximation and the exact
//! computation.

use std::path::Path;
use std::process::ExitCode;

use tankvol::{ClipMode, LevelForVolume, TankError, VolumeAtLevel};

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for tankvol.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tankvol=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tankvol=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(target)) = (args.next(), args.next()) else {
        eprintln!("usage: report <hull.stl> <target-volume>");
        return ExitCode::FAILURE;
    };
    let Ok(target) = target.parse::<f64>() else {
        eprintln!("target volume must be a number, got {target:?}");
        return ExitCode::FAILURE;
    };

    match run(Path::new(&path), target) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, target: f64) -> Result<(), TankError> {
    let mesh = tankvol::mesh::load_mesh(path)?;
    if let Some((lowest, highest)) = mesh.vertical_extent() {
        println!(
            "hull: {} triangles, z in [{lowest:.3}, {highest:.3}]",
            mesh.triangle_count()
        );
    }

    for mode in [ClipMode::Approximate, ClipMode::Exact] {
        let level = LevelForVolume::new(target).with_mode(mode).execute(&mesh)?;
        let no_clip = VolumeAtLevel::new(level)
            .with_mode(ClipMode::Approximate)
            .execute(&mesh)?;
        let exact = VolumeAtLevel::new(level).execute(&mesh)?;
        println!(
            "{mode:?} solve: level {level:.6}; volume there: {no_clip:.6} (no clip), \
             {exact:.6} (exact), residual {:.6}",
            (no_clip - exact).abs()
        );
    }
    Ok(())
}
