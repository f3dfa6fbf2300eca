//! Audio file layer for vclamp.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav_stereo`] and [`write_wav_stereo`] for loading/saving audio files
//! - **Offline processing**: [`ProcessingEngine`] for running a [`Clamp`](vclamp_core::Clamp)
//!   over whole files in blocks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vclamp_io::{read_wav_stereo, write_wav_stereo, ProcessingEngine};
//!
//! let (samples, spec) = read_wav_stereo("input.wav")?;
//!
//! let mut engine = ProcessingEngine::new(spec.sample_rate as f32);
//! engine.clamp_mut().set_bounds(5.0, -5.0);
//! let processed = engine.process_file_buffers(&samples, 512);
//!
//! write_wav_stereo("output.wav", &processed, spec)?;
//! ```

mod engine;
mod wav;

pub use engine::{DEFAULT_VOLTS_PER_UNIT, ProcessingEngine};
pub use wav::{
    SUPPORTED_BIT_DEPTHS, StereoSamples, WavFormat, WavInfo, WavSpec, read_wav_info,
    read_wav_stereo, write_wav_stereo,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
