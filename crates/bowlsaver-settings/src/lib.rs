//! Bowlsaver Settings Crate
//!
//! Loads, saves and validates the jig configuration: workpiece extent,
//! blade and tailstock geometry, kerf width and the starting cutter pose.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, CutterSettings, InitialPose};
pub use error::{ConfigError, SettingsError, SettingsResult};
