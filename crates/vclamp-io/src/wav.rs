//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Output bit depths [`write_wav_stereo`] accepts.
pub const SUPPORTED_BIT_DEPTHS: [u16; 3] = [16, 24, 32];

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

fn open_reader(path: &Path) -> Result<WavReader<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(WavReader::new(BufReader::new(file))?)
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = open_reader(path.as_ref())?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len());
    let num_frames = total_samples / u64::from(spec.channels.max(1));
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample. 32 is written as float, anything else as PCM.
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// A pair of equal-length channel buffers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StereoSamples {
    /// Left channel samples.
    pub left: Vec<f32>,
    /// Right channel samples.
    pub right: Vec<f32>,
}

impl StereoSamples {
    /// Create new stereo samples from left and right channels.
    pub fn new(left: Vec<f32>, right: Vec<f32>) -> Self {
        debug_assert_eq!(left.len(), right.len(), "Channels must have same length");
        Self { left, right }
    }

    /// Duplicate a mono buffer to both channels.
    pub fn from_mono(mono: Vec<f32>) -> Self {
        Self {
            left: mono.clone(),
            right: mono,
        }
    }

    /// Split an interleaved (L, R, L, R, ...) buffer. A trailing odd sample is dropped.
    pub fn from_interleaved(interleaved: &[f32]) -> Self {
        let (left, right) = interleaved
            .chunks_exact(2)
            .map(|frame| (frame[0], frame[1]))
            .unzip();
        Self { left, right }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Check if the buffers are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Iterate over `(left, right)` frames.
    pub fn frames(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.left.iter().copied().zip(self.right.iter().copied())
    }
}

/// Read a WAV file and return stereo samples along with the spec.
///
/// Integer samples are scaled to ±1.0 full scale. Mono files are expanded to
/// stereo by duplicating to both channels. Files with more than 2 channels
/// use only the first two channels.
///
/// # Example
/// ```ignore
/// let (samples, spec) = read_wav_stereo("input.wav")?;
/// println!("Loaded {} frames at {} Hz", samples.len(), spec.sample_rate);
/// ```
pub fn read_wav_stereo<P: AsRef<Path>>(path: P) -> Result<(StereoSamples, WavSpec)> {
    let path = path.as_ref();
    let reader = open_reader(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels as usize;

    let all_samples: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let stereo = match channels {
        0 => {
            return Err(Error::UnsupportedFormat(format!(
                "{} declares zero channels",
                path.display()
            )));
        }
        1 => StereoSamples::from_mono(all_samples),
        2 => StereoSamples::from_interleaved(&all_samples),
        _ => {
            let (left, right) = all_samples
                .chunks_exact(channels)
                .map(|chunk| (chunk[0], chunk[1]))
                .unzip();
            StereoSamples::new(left, right)
        }
    };

    tracing::debug!(
        path = %path.display(),
        frames = stereo.len(),
        channels,
        sample_rate = spec.sample_rate,
        "read_wav_stereo"
    );

    Ok((stereo, spec))
}

/// Write stereo samples to a WAV file.
///
/// The channel count in `spec` is ignored; the file is always stereo. Bit
/// depths other than 16, 24 and 32 are rejected before the file is created.
///
/// # Example
/// ```ignore
/// let samples = StereoSamples::new(vec![0.0; 48000], vec![0.0; 48000]);
/// write_wav_stereo("output.wav", &samples, WavSpec::default())?;
/// ```
pub fn write_wav_stereo<P: AsRef<Path>>(
    path: P,
    samples: &StereoSamples,
    spec: WavSpec,
) -> Result<()> {
    if !SUPPORTED_BIT_DEPTHS.contains(&spec.bits_per_sample) {
        return Err(Error::UnsupportedFormat(format!(
            "{}-bit output (expected 16, 24 or 32)",
            spec.bits_per_sample
        )));
    }

    let stereo_spec = WavSpec {
        channels: 2,
        ..spec
    };
    let mut writer = WavWriter::create(path.as_ref(), hound::WavSpec::from(stereo_spec))?;

    if spec.bits_per_sample == 32 {
        for (l, r) in samples.frames() {
            writer.write_sample(l)?;
            writer.write_sample(r)?;
        }
    } else {
        let max_val = (1i32 << (spec.bits_per_sample - 1)) as f32;
        for (l, r) in samples.frames() {
            let int_l = (l * max_val).clamp(-max_val, max_val - 1.0) as i32;
            let int_r = (r * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_l)?;
            writer.write_sample(int_r)?;
        }
    }

    writer.finalize()?;
    tracing::debug!(
        path = %path.as_ref().display(),
        frames = samples.len(),
        bits = spec.bits_per_sample,
        "write_wav_stereo"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_mono(path: &Path, samples: &[f32], sample_rate: u32) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_stereo_samples_interleaved() {
        let stereo = StereoSamples::from_interleaved(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stereo.left, vec![1.0, 3.0]);
        assert_eq!(stereo.right, vec![2.0, 4.0]);
        assert_eq!(stereo.frames().collect::<Vec<_>>(), vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn test_stereo_roundtrip_f32() {
        let left: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin() * 1.5).collect();
        let right: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).cos()).collect();
        let samples = StereoSamples::new(left.clone(), right.clone());

        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &samples, WavSpec::default()).unwrap();

        let (loaded, loaded_spec) = read_wav_stereo(file.path()).unwrap();
        assert_eq!(loaded_spec.sample_rate, 48000);
        assert_eq!(loaded_spec.channels, 2);
        // Float output keeps values above full scale.
        assert_eq!(loaded, samples);
    }

    #[test]
    fn test_stereo_roundtrip_i24() {
        let left: Vec<f32> = (0..500).map(|i| (i as f32 / 500.0) - 0.5).collect();
        let samples = StereoSamples::new(left.clone(), left.iter().map(|x| -x).collect());
        let spec = WavSpec {
            bits_per_sample: 24,
            sample_rate: 44100,
            ..WavSpec::default()
        };

        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &samples, spec).unwrap();

        let (loaded, _) = read_wav_stereo(file.path()).unwrap();
        for (a, b) in samples.frames().zip(loaded.frames()) {
            assert!((a.0 - b.0).abs() < 1e-5);
            assert!((a.1 - b.1).abs() < 1e-5);
        }
    }

    #[test]
    fn test_int_output_saturates() {
        let samples = StereoSamples::new(vec![2.0], vec![-2.0]);
        let spec = WavSpec {
            bits_per_sample: 16,
            ..WavSpec::default()
        };
        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &samples, spec).unwrap();

        let (loaded, _) = read_wav_stereo(file.path()).unwrap();
        assert!((loaded.left[0] - 32767.0 / 32768.0).abs() < 1e-6);
        assert_eq!(loaded.right[0], -1.0);
    }

    #[test]
    fn test_read_mono_as_stereo() {
        let mono: Vec<f32> = (0..100).map(|i| i as f32 / 100.0).collect();
        let file = NamedTempFile::new().unwrap();
        write_mono(file.path(), &mono, 44100);

        let (stereo, spec) = read_wav_stereo(file.path()).unwrap();
        assert_eq!(spec.channels, 1);
        assert_eq!(stereo.left, mono);
        assert_eq!(stereo.right, mono);
    }

    #[test]
    fn test_read_info() {
        let file = NamedTempFile::new().unwrap();
        write_mono(file.path(), &[0.0; 4800], 48000);

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.num_frames, 4800);
        assert_eq!(info.format, WavFormat::IeeeFloat);
        assert!((info.duration_secs - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_unsupported_bit_depth() {
        let file = NamedTempFile::new().unwrap();
        let spec = WavSpec {
            bits_per_sample: 12,
            ..WavSpec::default()
        };
        let err = write_wav_stereo(file.path(), &StereoSamples::default(), spec).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_wav_stereo("/nonexistent/vclamp/input.wav").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
