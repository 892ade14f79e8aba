//! Jig configuration
//!
//! Describes one physical setup: the blank, the blade, the tailstock range
//! and where the cutter starts. Stored as JSON or TOML, chosen by file
//! extension, and validated on both load and save.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use bowlsaver_core::Vector;
use bowlsaver_designer::{CutterGeometry, JigGeometry, JigState, TailstockGeometry, Workpiece};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Blade settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutterSettings {
    /// Blade start angle at zero arm rotation (degrees)
    pub inherent_rotation: f64,
    /// Angle swept by the blade (degrees)
    pub arc_angle: f64,
    /// Width of material the blade removes (mm)
    pub kerf_width: f64,
}

impl Default for CutterSettings {
    fn default() -> Self {
        let cutter = CutterGeometry::default();
        Self {
            inherent_rotation: cutter.inherent_rotation,
            arc_angle: cutter.arc_angle,
            kerf_width: JigGeometry::DEFAULT_KERF_WIDTH,
        }
    }
}

/// Cutter pose applied when a session starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialPose {
    pub center_x: f64,
    pub center_y: f64,
    pub rotation: f64,
    pub radius: f64,
}

impl Default for InitialPose {
    fn default() -> Self {
        Self {
            center_x: 150.0,
            center_y: 20.0,
            rotation: 0.0,
            radius: 90.0,
        }
    }
}

/// Complete jig configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Blank on the lathe
    pub workpiece: Workpiece,
    /// Blade geometry
    pub cutter: CutterSettings,
    /// Tailstock range arc
    pub tailstock: TailstockGeometry,
    /// Starting cutter pose
    pub initial_pose: InitialPose,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workpiece: Workpiece::default(),
            cutter: CutterSettings::default(),
            tailstock: TailstockGeometry::default(),
            initial_pose: InitialPose::default(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!(path = %path.display(), "loaded jig configuration");
        Ok(config)
    }

    /// Load config from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.jig_geometry()
            .validate()
            .map_err(ConfigError::Geometry)?;

        let pose = &self.initial_pose;
        if !(pose.radius.is_finite() && pose.radius > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "initial_pose.radius".to_string(),
                reason: format!("must be > 0, got {}", pose.radius),
            });
        }
        for (key, value) in [
            ("initial_pose.center_x", pose.center_x),
            ("initial_pose.center_y", pose.center_y),
            ("initial_pose.rotation", pose.rotation),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// The fixed jig description used by [`JigState`]
    pub fn jig_geometry(&self) -> JigGeometry {
        JigGeometry {
            cutter: CutterGeometry {
                inherent_rotation: self.cutter.inherent_rotation,
                arc_angle: self.cutter.arc_angle,
            },
            tailstock: self.tailstock,
            kerf_width: self.cutter.kerf_width,
            workpiece: self.workpiece,
        }
    }

    /// A jig state with the configured geometry and starting pose applied
    pub fn build_state(&self) -> JigState {
        let pose = &self.initial_pose;
        let mut state = JigState::new(self.jig_geometry());
        state.set_radius(pose.radius);
        state.rotate(pose.rotation);
        state.move_to(Vector::new(pose.center_x, pose.center_y));
        state
    }
}

/// Default location of the configuration file
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("bowlsaver").join("config.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform configuration directory".to_string())
        })
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}
