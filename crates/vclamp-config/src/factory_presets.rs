//! Factory presets bundled with vclamp.
//!
//! Always available without any files on disk. Each one starts from the
//! panel defaults and lists every control it relies on.

use crate::Preset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "ceiling",
    "linked-5v",
    "unipolar",
    "invert",
    "double",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("ceiling", CEILING_PRESET),
    ("linked-5v", LINKED_5V_PRESET),
    ("unipolar", UNIPOLAR_PRESET),
    ("invert", INVERT_PRESET),
    ("double", DOUBLE_PRESET),
];

const INIT_PRESET: &str = r#"
name = "Init"
description = "Panel defaults: ±10 V window, unity gain"

[params]
clamp_max = 10.0
clamp_ceiling = 0.0
clamp_min = -10.0
clamp_link = 1.0
clamp_mult = 1.0
clamp_gain = 1.0
clamp_snap_1 = 0.0
clamp_snap_2 = 0.0
clamp_snap_3 = 0.0
clamp_snap_4 = 0.0
"#;

const CEILING_PRESET: &str = r#"
name = "Ceiling"
description = "Window pinned just under ±10 V"

[params]
clamp_ceiling = 1.0
"#;

const LINKED_5V_PRESET: &str = r#"
name = "Linked 5V"
description = "Symmetric ±5 V window with the bound knobs linked"

[params]
clamp_max = 5.0
clamp_min = -5.0
clamp_link = 0.0
"#;

const UNIPOLAR_PRESET: &str = r#"
name = "Unipolar"
description = "Pass only the positive half, 0 to 10 V"

[params]
clamp_max = 10.0
clamp_min = 0.0
"#;

const INVERT_PRESET: &str = r#"
name = "Invert"
description = "Attenuverter snapped to -1"

[params]
clamp_multiplier = -1.0
clamp_snap_1 = 1.0
"#;

const DOUBLE_PRESET: &str = r#"
name = "Double"
description = "Attenuverter snapped to +2 under the safety ceiling"

[params]
clamp_multiplier = 2.0
clamp_snap_4 = 1.0
clamp_ceiling = 1.0
"#;

/// Get all factory presets.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by key or display name (case-insensitive).
///
/// ```rust
/// use vclamp_config::get_factory_preset;
///
/// assert!(get_factory_preset("linked-5v").is_some());
/// assert!(get_factory_preset("Linked 5V").is_some());
/// assert!(get_factory_preset("fuzz").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    let name_lower = name.to_lowercase();

    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(key, toml)| Some((*key, Preset::from_toml(toml).ok()?)))
        .find(|(key, preset)| *key == name_lower || preset.name.to_lowercase() == name_lower)
        .map(|(_, preset)| preset)
}

/// Get the list of factory preset names.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESET_NAMES.to_vec()
}

/// Check if a name refers to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
