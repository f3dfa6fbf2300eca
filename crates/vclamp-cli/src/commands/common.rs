//! Shared CLI helpers used across multiple commands.

use vclamp_config::{ConfigError, Preset, find_preset, get_factory_preset};
use vclamp_core::Clamp;

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!(
            "Invalid parameter format: '{}' (expected key=value)",
            s
        )),
    }
}

/// Load a preset by name or path.
///
/// Searches in this order:
/// 1. Factory presets (by name)
/// 2. Existing file path, then user presets (by name)
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    if let Some(path) = find_preset(name) {
        return Ok(Preset::load(&path)?);
    }

    Err(ConfigError::PresetNotFound(format!(
        "{name} (use 'vclamp presets list' to see available presets)"
    ))
    .into())
}

/// Start from an optional preset, then layer `key=value` overrides on top.
///
/// Override values are display text: volts, dB for the gain, `on`/`off`
/// for buttons.
pub fn build_preset(
    base: Option<&str>,
    overrides: &[(String, String)],
    target: &Clamp,
) -> anyhow::Result<Preset> {
    let mut preset = match base {
        Some(name) => load_preset(name)?,
        None => Preset::new("command line"),
    };
    for (key, value) in overrides {
        preset.set_param_text(target, key, value)?;
    }
    Ok(preset)
}

/// Human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
