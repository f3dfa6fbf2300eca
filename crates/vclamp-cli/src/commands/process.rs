//! File-based clamp processing command.

use super::common::{build_preset, parse_key_val};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use vclamp_config::Settings;
use vclamp_core::{Clamp, ClampParam, count_outside, linear_to_db, peak, rms};
use vclamp_io::{
    ProcessingEngine, SUPPORTED_BIT_DEPTHS, WavSpec, read_wav_stereo, write_wav_stereo,
};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset name or file (TOML)
    #[arg(short, long)]
    preset: Option<String>,

    /// Control values in display units (e.g., "max=5", "gain=6dB", "snap4=on")
    #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
    param: Vec<(String, String)>,

    /// Treat the left input jack as empty: outputs carry the Max/Min offsets
    #[arg(long)]
    left_unpatched: bool,

    /// Processing block size [default: from settings, 512]
    #[arg(long)]
    block_size: Option<usize>,

    /// Output bit depth (16, 24, or 32) [default: from settings, 32]
    #[arg(long)]
    bit_depth: Option<u16>,

    /// Volts represented by a full-scale sample [default: from settings, 10]
    #[arg(long)]
    volts_per_unit: Option<f32>,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let settings = Settings::load_user()?;
    let block_size = args.block_size.unwrap_or(settings.block_size);
    let bit_depth = args.bit_depth.unwrap_or(settings.bit_depth);
    let volts_per_unit = args.volts_per_unit.unwrap_or(settings.volts_per_unit);

    if block_size == 0 {
        anyhow::bail!("--block-size must be at least 1");
    }
    if !SUPPORTED_BIT_DEPTHS.contains(&bit_depth) {
        anyhow::bail!("Unsupported bit depth {} (use 16, 24 or 32)", bit_depth);
    }
    if !(volts_per_unit.is_finite() && volts_per_unit > 0.0) {
        anyhow::bail!("--volts-per-unit must be a positive number");
    }

    let mut clamp = Clamp::new();
    let preset = build_preset(args.preset.as_deref(), &args.param, &clamp)?;
    preset.apply_to(&mut clamp)?;
    tracing::info!(preset = %preset.name, params = preset.len(), "controls set");

    println!("Reading {}...", args.input.display());
    let (input, spec) = read_wav_stereo(&args.input)?;
    println!(
        "  {} frames, {} Hz, {:.2}s",
        input.len(),
        spec.sample_rate,
        input.len() as f32 / spec.sample_rate as f32
    );

    let mut engine = ProcessingEngine::with_clamp(clamp, spec.sample_rate as f32);
    engine.set_volts_per_unit(volts_per_unit);
    engine.set_left_patched(!args.left_unpatched);

    println!("Processing...");
    let pb = ProgressBar::new(input.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );
    let output = engine.process_file_with_progress(&input, block_size, |done| {
        pb.set_position(done as u64);
    });
    pb.finish_with_message("done");

    let clamp = engine.clamp();
    let (readout_max, readout_min) = clamp.state().format_readouts();
    println!("\nWindow: {} V .. {} V", readout_min.trim(), readout_max.trim());
    if args.left_unpatched {
        println!("  Left input unpatched: outputs are static offsets");
    } else {
        let scale =
            volts_per_unit * clamp.get(ClampParam::Gain) * clamp.get(ClampParam::Multiplier);
        let (lo, hi) = clamp.window();
        let limited_l = count_outside(&scaled(&input.left, scale), lo, hi);
        let limited_r = count_outside(&scaled(&input.right, scale), lo, hi);
        println!("  Samples limited: L {limited_l}, R {limited_r}");
    }

    println!("\nStats:");
    for (label, left, right) in [
        ("Input: ", &input.left, &input.right),
        ("Output:", &output.left, &output.right),
    ] {
        println!(
            "  {} L RMS {:.1} dB, Peak {:.1} dB | R RMS {:.1} dB, Peak {:.1} dB",
            label,
            linear_to_db(rms(left)),
            linear_to_db(peak(left)),
            linear_to_db(rms(right)),
            linear_to_db(peak(right)),
        );
    }

    let out_spec = WavSpec {
        channels: 2,
        sample_rate: spec.sample_rate,
        bits_per_sample: bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &output, out_spec)?;
    println!("Done!");

    Ok(())
}

fn scaled(samples: &[f32], scale: f32) -> Vec<f32> {
    samples.iter().map(|s| s * scale).collect()
}
