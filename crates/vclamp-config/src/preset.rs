//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use vclamp_core::ParameterInfo;

use crate::error::ConfigError;
use crate::validation::{self, ValidationResult};

/// A named set of panel settings.
///
/// Presets are stored as TOML files. Keys in `[params]` are parameter string
/// ids (or names, matched loosely); values are stored values, not display
/// values, so the gain is linear and buttons are `0.0`/`1.0`.
///
/// # TOML Format
///
/// ```toml
/// name = "Linked 5V"
/// description = "Symmetric ±5 V window, knobs linked"
///
/// [params]
/// clamp_max = 5.0
/// clamp_min = -5.0
/// clamp_link = 0.0
/// ```
///
/// Parameters not listed keep whatever value the target already holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameter values keyed by string id.
    #[serde(default)]
    pub params: BTreeMap<String, f32>,
}

impl Preset {
    /// Create a new empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: BTreeMap::new(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add or replace a stored value.
    pub fn with_param(mut self, key: impl Into<String>, value: f32) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Get a stored value by its exact key.
    pub fn get_param(&self, key: &str) -> Option<f32> {
        self.params.get(key).copied()
    }

    /// Number of parameters the preset sets.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the preset sets nothing.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Snapshot every parameter of `source` into a new preset.
    pub fn capture<P: ParameterInfo + ?Sized>(name: impl Into<String>, source: &P) -> Self {
        let params = (0..source.param_count())
            .filter_map(|i| {
                source
                    .param_info(i)
                    .map(|desc| (desc.string_id.to_string(), source.get_param(i)))
            })
            .collect();
        Self {
            name: name.into(),
            description: None,
            params,
        }
    }

    /// Parse display text for `key` and store it under the canonical string id.
    ///
    /// Used for `key=value` overrides typed by a user.
    pub fn set_param_text<P: ParameterInfo + ?Sized>(
        &mut self,
        target: &P,
        key: &str,
        text: &str,
    ) -> Result<(), ConfigError> {
        let index = validation::resolve_param(target, key)
            .ok_or_else(|| ConfigError::UnknownParameter(key.to_string()))?;
        let (_, value) = validation::parse_param_value(target, key, text)?;
        if let Some(desc) = target.param_info(index) {
            self.params.retain(|existing, _| {
                validation::resolve_param(target, existing) != Some(index)
            });
            self.params.insert(desc.string_id.to_string(), value);
        }
        Ok(())
    }

    /// Validate every entry against `target`'s descriptors.
    pub fn validate<P: ParameterInfo + ?Sized>(&self, target: &P) -> ValidationResult<()> {
        validation::validate_preset(self, target)
    }

    /// Write the preset's values into `target`.
    ///
    /// Nothing is written unless every entry validates.
    pub fn apply_to<P: ParameterInfo + ?Sized>(&self, target: &mut P) -> Result<(), ConfigError> {
        self.validate(target)?;
        for (key, &value) in &self.params {
            let index = validation::validate_param(target, key, value)?;
            target.set_param(index, value);
        }
        tracing::debug!(preset = %self.name, params = self.params.len(), "preset applied");
        Ok(())
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "preset loaded");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "preset saved");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vclamp_core::{Clamp, ClampParam};

    #[test]
    fn test_preset_from_toml() {
        let toml = r#"
name = "Test"
description = "A test preset"

[params]
clamp_max = 4
"Input Gain" = 2.0
"#;
        let preset = Preset::from_toml(toml).unwrap();
        assert_eq!(preset.name, "Test");
        assert_eq!(preset.description.as_deref(), Some("A test preset"));
        assert_eq!(preset.get_param("clamp_max"), Some(4.0));

        let mut clamp = Clamp::new();
        preset.apply_to(&mut clamp).unwrap();
        assert_eq!(clamp.get(ClampParam::Max), 4.0);
        assert_eq!(clamp.get(ClampParam::Gain), 2.0);
    }

    #[test]
    fn test_preset_to_toml() {
        let toml = Preset::new("Out")
            .with_description("desc")
            .with_param("clamp_min", -2.5)
            .to_toml()
            .unwrap();
        assert!(toml.contains("name = \"Out\""));
        assert!(toml.contains("[params]"));
        assert!(toml.contains("clamp_min = -2.5"));
    }

    #[test]
    fn test_missing_sections_default() {
        let preset = Preset::from_toml("name = \"bare\"").unwrap();
        assert!(preset.is_empty());
        assert!(preset.description.is_none());
        assert!(Preset::from_toml("description = \"no name\"").is_err());
    }

    #[test]
    fn test_capture_round_trips_through_apply() {
        let mut source = Clamp::new();
        source.set_bounds(3.0, -1.0);
        source.set_snap(2, true);
        let preset = Preset::capture("snap", &source);
        assert_eq!(preset.len(), source.param_count());
        assert_eq!(preset.get_param("clamp_snap_3"), Some(1.0));

        let mut target = Clamp::new();
        preset.apply_to(&mut target).unwrap();
        for i in 0..target.param_count() {
            assert_eq!(target.get_param(i), source.get_param(i));
        }
    }

    #[test]
    fn test_invalid_preset_applies_nothing() {
        let preset = Preset::new("bad")
            .with_param("clamp_max", 2.0)
            .with_param("clamp_min", -11.0);
        let mut clamp = Clamp::new();
        let err = preset.apply_to(&mut clamp).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(clamp.get(ClampParam::Max), 10.0);
    }

    #[test]
    fn test_set_param_text_canonicalises_key() {
        let clamp = Clamp::new();
        let mut preset = Preset::new("p").with_param("Max", 1.0);
        preset.set_param_text(&clamp, "clamp-max", "7.5").unwrap();
        assert_eq!(preset.params.len(), 1);
        assert_eq!(preset.get_param("clamp_max"), Some(7.5));

        let err = preset.set_param_text(&clamp, "drive", "1").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownParameter(ref k) if k == "drive"));
        let err = preset.set_param_text(&clamp, "gain", "+30 dB").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
