//! # Bowlsaver
//!
//! Geometry solver for a lathe bowl-saver jig: a pivoting cutter arm that
//! carves a ring-shaped cut into a turning blank.
//!
//! ## Architecture
//!
//! Bowlsaver is organized as a workspace with multiple crates:
//!
//! 1. **bowlsaver-core** - Angle/vector primitives, arc membership, line–arc intersection
//! 2. **bowlsaver-designer** - Cut model, history, jig geometry and derived state
//! 3. **bowlsaver-settings** - Jig configuration files
//! 4. **bowlsaver** - This facade plus the command-line front end
//!
//! ## Features
//!
//! - **Live arc filtering**: only intersections on the swept part of an arc count
//! - **Tailstock reach**: whether the support arc can still meet the centerline
//! - **Entry point**: where the kerf-offset blade path crosses the front face
//! - **Cut history**: commit placements and re-select one to edit

pub mod types;

pub use bowlsaver_core::{geometry, Error, GeometryError, Result};
pub use bowlsaver_core::{
    compute_intersections, is_angle_between, is_angle_within_arc, normalize_angle, Arc,
    ArcOutline, Intersections, Line, Vector,
};

pub use bowlsaver_designer::{
    Cut, CutHistory, CutterGeometry, Dimension, EntryPoint, JigGeometry, JigReadout, JigState,
    TailstockGeometry, Workpiece,
};

pub use bowlsaver_settings::{Config, ConfigError, CutterSettings, InitialPose, SettingsError};

pub use types::{CliOptions, USAGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so stdout stays machine-readable
/// - RUST_LOG environment variable support (defaults to `warn`)
/// - JSON lines instead of text when `BOWLSAVER_LOG_JSON` is set
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if std::env::var_os("BOWLSAVER_LOG_JSON").is_some() {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
