//! vclamp CLI - run the clamp module over WAV files and manage presets.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vclamp")]
#[command(author, version, about = "Dual-channel voltage clamp and attenuverter", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clamp a WAV file
    Process(commands::process::ProcessArgs),

    /// List the panel controls
    Params(commands::params::ParamsArgs),

    /// List, show and save presets
    Presets(commands::presets::PresetsArgs),

    /// Show WAV file metadata
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
