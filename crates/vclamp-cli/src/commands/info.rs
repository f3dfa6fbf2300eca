//! Display WAV file metadata.

use super::common::format_bytes;
use clap::Args;
use vclamp_io::{WavFormat, read_wav_info};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );

    let file_size = std::fs::metadata(&args.file)?.len();
    println!("File Size:   {}", format_bytes(file_size));

    Ok(())
}
