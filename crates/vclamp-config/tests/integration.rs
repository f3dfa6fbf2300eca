//! Integration tests for vclamp-config.
//!
//! Presets travel through files and land on a running clamp.

use tempfile::TempDir;
use vclamp_config::{ConfigError, Preset, ValidationError, factory_presets, get_factory_preset};
use vclamp_core::{Clamp, ClampParam, Effect};

#[test]
fn saved_preset_drives_clamp() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("window.toml");

    let clamp = Clamp::new();
    let mut preset = Preset::new("Window").with_description("±2 V");
    preset.set_param_text(&clamp, "max", "2 V").unwrap();
    preset.set_param_text(&clamp, "min", "-2").unwrap();
    preset.save(&path).unwrap();

    let loaded = Preset::load(&path).unwrap();
    assert_eq!(loaded, preset);

    let mut clamp = Clamp::new();
    loaded.apply_to(&mut clamp).unwrap();
    assert_eq!(clamp.process_stereo(5.0, -5.0), (2.0, -2.0));
}

#[test]
fn linked_factory_preset_mirrors() {
    let mut clamp = Clamp::new();
    get_factory_preset("linked-5v")
        .unwrap()
        .apply_to(&mut clamp)
        .unwrap();
    assert!(clamp.linked());
    clamp.process_stereo(0.0, 0.0);

    clamp.set(ClampParam::Max, 3.0);
    clamp.process_stereo(0.0, 0.0);
    assert_eq!(clamp.get(ClampParam::Min), -3.0);
    assert_eq!(clamp.process_stereo(7.0, -7.0), (3.0, -3.0));
}

#[test]
fn every_factory_preset_processes() {
    for preset in factory_presets() {
        let mut clamp = Clamp::new();
        preset.apply_to(&mut clamp).unwrap();
        for x in [-20.0, -1.0, 0.0, 1.0, 20.0] {
            let (l, r) = clamp.process_stereo(x, x);
            let (lo, hi) = clamp.window();
            assert!(l >= lo && l <= hi, "{}: {l}", preset.name);
            assert!(r >= lo && r <= hi, "{}: {r}", preset.name);
        }
    }
}

#[test]
fn broken_file_reports_every_problem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        "name = \"Broken\"\n[params]\nclamp_max = 40.0\nwarmth = 1.0\n",
    )
    .unwrap();

    let preset = Preset::load(&path).unwrap();
    let mut clamp = Clamp::new();
    match preset.apply_to(&mut clamp) {
        Err(ConfigError::Validation(ValidationError::Multiple(errors))) => {
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected two validation errors, got {other:?}"),
    }
}

#[test]
fn fractional_button_in_preset_is_rejected() {
    let preset = Preset::from_toml("name = \"Half\"\n[params]\nclamp_ceiling = 0.3\n").unwrap();
    let mut clamp = Clamp::new();
    assert!(matches!(
        preset.apply_to(&mut clamp),
        Err(ConfigError::Validation(ValidationError::InvalidFormat { .. }))
    ));
    assert!(!clamp.ceiling());
}

#[test]
fn unreadable_and_malformed_files() {
    let dir = TempDir::new().unwrap();
    let missing = Preset::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(missing, ConfigError::ReadFile { .. }));

    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "name = [unterminated").unwrap();
    assert!(matches!(Preset::load(&path).unwrap_err(), ConfigError::TomlParse(_)));
}
