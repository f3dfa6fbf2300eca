//! Preset management commands.

use clap::{Args, Subcommand};
use vclamp_config::{
    Preset, ensure_user_presets_dir, factory_presets, get_factory_preset, list_user_presets,
    preset_name_from_path, resolve_param, user_config_dir, user_presets_dir,
};
use vclamp_core::{Clamp, ParameterInfo};

use super::common::{build_preset, load_preset, parse_key_val};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show the values a preset sets
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save a new user preset
    Save {
        /// Name for the new preset
        name: String,

        /// Start from an existing preset
        #[arg(long)]
        from: Option<String>,

        /// Control values (e.g., "max=5", "gain=6dB", "ceiling=on")
        #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
        param: Vec<(String, String)>,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if preset already exists
        #[arg(long)]
        force: bool,
    },

    /// Show preset directories
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            from,
            param,
            description,
            force,
        } => save_preset(&name, from.as_deref(), &param, description, force),
        PresetsCommand::Paths => show_paths(),
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    if !user_only {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {:20} - {}", preset.name, desc);
        }
        println!();
    }

    if !factory_only {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create a preset with: vclamp presets save <name> --param max=5\n");
        } else {
            for path in user_presets {
                let name =
                    preset_name_from_path(&path).unwrap_or_else(|| path.display().to_string());
                match Preset::load(&path) {
                    Ok(preset) => {
                        let desc = preset.description.as_deref().unwrap_or("");
                        println!("  {:20} - {}", name, desc);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "unreadable preset");
                        println!("  {:20} - (error loading)", name);
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    let clamp = Clamp::new();

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
        println!();
    }

    println!("Parameters ({}):", preset.len());
    for (key, &value) in &preset.params {
        let shown = resolve_param(&clamp, key)
            .and_then(|i| clamp.param_info(i))
            .map(|desc| desc.format_value(value))
            .unwrap_or_else(|| format!("{value} (unknown parameter)"));
        println!("  {:16} = {}", key, shown);
    }

    if let Err(e) = preset.validate(&clamp) {
        println!();
        println!("Warning: {e}");
    }

    Ok(())
}

fn save_preset(
    name: &str,
    from: Option<&str>,
    params: &[(String, String)],
    description: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    if get_factory_preset(name).is_some() {
        anyhow::bail!("'{}' is a factory preset name. Choose another name.", name);
    }

    ensure_user_presets_dir()?;
    let preset_path = user_presets_dir().join(format!("{}.toml", name));

    if preset_path.exists() && !force {
        anyhow::bail!(
            "Preset '{}' already exists. Use --force to overwrite.",
            name
        );
    }

    let clamp = Clamp::new();
    let mut preset = build_preset(from, params, &clamp)?;
    preset.name = name.to_string();
    if description.is_some() {
        preset.description = description;
    }
    preset.validate(&clamp)?;
    preset.save(&preset_path)?;

    println!("Saved preset '{}' to {}", name, preset_path.display());
    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    println!("Preset Directories:");
    println!("===================");
    println!();
    println!("User presets:   {}", user_presets_dir().display());
    println!("Config dir:     {}", user_config_dir().display());

    Ok(())
}
