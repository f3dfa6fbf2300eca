//! Platform-specific paths for presets and configuration.
//!
//! - **User config**: `~/.config/vclamp/` (Linux), `~/Library/Application Support/vclamp/` (macOS), `%APPDATA%\vclamp\` (Windows)
//! - **User presets**: the `presets/` subdirectory of the user config directory
//!
//! # Example
//!
//! ```rust,no_run
//! use vclamp_config::paths;
//!
//! if let Some(path) = paths::find_preset("my_window") {
//!     println!("Found preset at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Application name used for directory paths.
const APP_NAME: &str = "vclamp";

/// Subdirectory name for presets.
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user-specific configuration directory.
///
/// Falls back to `./vclamp` if the platform config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user-specific presets directory.
pub fn user_presets_dir() -> PathBuf {
    user_config_dir().join(PRESETS_SUBDIR)
}

/// Find a preset file by name.
///
/// `name` may be a path to an existing file, or a preset name (with or
/// without `.toml`) looked up in the user presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    find_preset_in(name, &user_presets_dir())
}

fn find_preset_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let user_path = dir.join(filename);
    user_path.is_file().then_some(user_path)
}

/// Ensure the user presets directory exists.
pub fn ensure_user_presets_dir() -> Result<PathBuf, ConfigError> {
    ensure_dir(user_presets_dir())
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, ConfigError> {
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
        tracing::info!(path = %dir.display(), "created directory");
    }
    Ok(dir)
}

/// List all preset files in the user presets directory, sorted by path.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    presets.sort();
    presets
}

/// Get the preset name from a file path.
///
/// ```rust
/// use vclamp_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/path/to/wide_window.toml"));
/// assert_eq!(name, Some("wide_window".to_string()));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
