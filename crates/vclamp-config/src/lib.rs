//! Configuration and preset management for vclamp.
//!
//! # Features
//!
//! - **Preset System**: Load and save panel presets from TOML files
//! - **Validation**: Check parameter keys and values against the module's descriptors
//! - **Factory Presets**: Built-in starting points that need no files
//! - **Paths**: Platform-specific preset and config directories (`std` feature)
//! - **Settings**: Defaults for offline processing from `settings.toml`
//!
//! # Example
//!
//! ```rust,no_run
//! use vclamp_config::{Preset, user_presets_dir};
//! use vclamp_core::Clamp;
//!
//! let mut clamp = Clamp::new();
//! clamp.set_bounds(5.0, 0.0);
//!
//! let preset = Preset::capture("Unipolar 5V", &clamp)
//!     .with_description("0 to 5 V window");
//! preset.save(user_presets_dir().join("unipolar_5v.toml")).unwrap();
//!
//! let loaded = Preset::load(user_presets_dir().join("unipolar_5v.toml")).unwrap();
//! loaded.apply_to(&mut clamp).unwrap();
//! ```

mod error;
mod preset;

/// Platform-specific paths for presets and configuration.
#[cfg(feature = "std")]
pub mod paths;

/// Parameter and preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

/// Tool settings.
pub mod settings;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
#[cfg(feature = "std")]
pub use paths::{
    ensure_user_presets_dir, find_preset, list_user_presets, preset_name_from_path,
    user_config_dir, user_presets_dir,
};
pub use preset::Preset;
pub use settings::{SETTINGS_FILE, Settings};
pub use validation::{
    ValidationError, ValidationResult, parse_param_value, resolve_param, validate_param,
    validate_preset,
};
