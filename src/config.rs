//! Settings file for the demo application.
//!
//! The file is TOML and every field is optional. A missing file falls back to
//! defaults so the demo always starts. A file that exists but cannot be read or
//! parsed is reported as an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ui::common::StickStyle;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "TOUCH_CONTROLS_CONFIG";

const CONFIG_DIR: &str = "touch-controls";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Layout and look of the demo controls.
///
/// Colors are RGB tuples and fill the generated knob, track and button
/// textures.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Side length of the joystick track in points
    pub joystick_width: f32,
    /// Side length of the action button in points
    pub button_size: f32,
    /// Joystick opacity while idle / dragging
    pub stick_style: StickStyle,
    pub knob_color: (u8, u8, u8),
    pub track_color: (u8, u8, u8),
    pub button_color: (u8, u8, u8),
    /// Maximum number of entries kept in the on-screen event log
    pub log_capacity: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            joystick_width: 180.0,
            button_size: 72.0,
            stick_style: StickStyle::default(),
            knob_color: (50, 200, 20),
            track_color: (90, 90, 90),
            button_color: (200, 50, 20),
            log_capacity: 200,
        }
    }
}

impl DemoConfig {
    /// Location of the config file: `$TOUCH_CONTROLS_CONFIG`, else the
    /// platform config directory.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        let mut path = dirs::config_dir().unwrap_or_else(|| {
            warn!("Could not determine config directory, using current directory");
            PathBuf::from(".")
        });
        path.push(CONFIG_DIR);
        path.push(CONFIG_FILE);
        path
    }

    /// Loads and validates the config at `path`, using defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "Config file {} does not exist, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        debug!("Parsed config: {:?}", config);
        Ok(config)
    }

    /// Writes the config as TOML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.joystick_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "joystick_width must be positive, got {}",
                self.joystick_width
            )));
        }
        if !(self.button_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "button_size must be positive, got {}",
                self.button_size
            )));
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::Invalid(
                "log_capacity must be at least 1".to_string(),
            ));
        }

        let alphas = [
            ("alpha_idle", self.stick_style.alpha_idle),
            ("alpha_active", self.stick_style.alpha_active),
        ];
        for (name, alpha) in alphas {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ConfigError::Invalid(format!(
                    "stick_style.{} must be within 0.0..=1.0, got {}",
                    name, alpha
                )));
            }
        }
        Ok(())
    }
}
