//! Tool settings read from `settings.toml`.
//!
//! ```toml
//! block_size = 512
//! bit_depth = 24
//! volts_per_unit = 10.0
//! ```
//!
//! Every key is optional. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::validation::{ValidationError, ValidationResult};

/// File name of the settings file inside the user config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Defaults for offline processing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Frames per processing block.
    pub block_size: usize,
    /// Output bit depth (16, 24 or 32).
    pub bit_depth: u16,
    /// Volts represented by a full-scale file sample.
    pub volts_per_unit: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            block_size: 512,
            bit_depth: 32,
            volts_per_unit: 10.0,
        }
    }
}

impl Settings {
    /// Load settings from `path`, returning defaults if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::read_file(path, e)),
        };
        let settings = Self::from_toml(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load the settings file from the user config directory.
    #[cfg(feature = "std")]
    pub fn load_user() -> Result<Self, ConfigError> {
        Self::load(crate::paths::user_config_dir().join(SETTINGS_FILE))
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the settings to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }
        std::fs::write(path, self.to_toml()?).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();
        if self.block_size == 0 {
            errors.push(ValidationError::InvalidFormat {
                param: "block_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if ![16, 24, 32].contains(&self.bit_depth) {
            errors.push(ValidationError::InvalidFormat {
                param: "bit_depth".to_string(),
                reason: format!("{} is not one of 16, 24, 32", self.bit_depth),
            });
        }
        if !(self.volts_per_unit.is_finite() && self.volts_per_unit > 0.0) {
            errors.push(ValidationError::InvalidFormat {
                param: "volts_per_unit".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }
        ValidationError::collect(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let settings = Settings::from_toml("bit_depth = 16").unwrap();
        assert_eq!(settings.bit_depth, 16);
        assert_eq!(settings.block_size, 512);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let settings = Settings {
            block_size: 64,
            bit_depth: 24,
            volts_per_unit: 5.0,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn save_creates_missing_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vclamp").join(SETTINGS_FILE);
        let settings = Settings {
            bit_depth: 16,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "block_size = 0\nbit_depth = 20\n").unwrap();
        match Settings::load(&path) {
            Err(ConfigError::Validation(ValidationError::Multiple(errors))) => {
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
