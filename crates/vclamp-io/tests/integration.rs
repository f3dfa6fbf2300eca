//! File-to-file processing through the clamp.

use tempfile::TempDir;
use vclamp_core::{ClampParam, count_outside};
use vclamp_io::{
    ProcessingEngine, StereoSamples, WavSpec, read_wav_info, read_wav_stereo, write_wav_stereo,
};

fn sine(len: usize, amplitude: f32) -> Vec<f32> {
    (0..len)
        .map(|i| (2.0 * std::f32::consts::PI * 220.0 * i as f32 / 48000.0).sin() * amplitude)
        .collect()
}

#[test]
fn clamped_file_stays_inside_window() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("in.wav");
    let output_path = dir.path().join("out.wav");

    let left = sine(4800, 0.9);
    let right: Vec<f32> = left.iter().map(|x| -x * 0.5).collect();
    write_wav_stereo(&input_path, &StereoSamples::new(left, right), WavSpec::default()).unwrap();

    let (input, spec) = read_wav_stereo(&input_path).unwrap();
    let mut engine = ProcessingEngine::new(spec.sample_rate as f32);
    engine.clamp_mut().set_bounds(3.0, -3.0);
    let output = engine.process_file_buffers(&input, 256);
    write_wav_stereo(&output_path, &output, spec).unwrap();

    let (reloaded, _) = read_wav_stereo(&output_path).unwrap();
    assert_eq!(reloaded.len(), 4800);
    assert_eq!(count_outside(&reloaded.left, -0.3, 0.3), 0);
    assert_eq!(count_outside(&reloaded.right, -0.3, 0.3), 0);
    assert!(count_outside(&input.left, -0.3, 0.3) > 0);
}

#[test]
fn ceiling_with_inverting_snap() {
    let input = StereoSamples::new(vec![2.0, 2.0, -0.5], vec![0.25, 0.25, 0.0]);
    let mut engine = ProcessingEngine::default();
    engine.clamp_mut().set_ceiling(true);
    engine.clamp_mut().set_snap(0, true);
    let out = engine.process_file_buffers(&input, 512);

    // First frame still uses the knob's multiplier of 1.
    assert!((out.left[0] - 0.994).abs() < 1e-6);
    assert!((out.right[0] - 0.25).abs() < 1e-6);
    assert!((out.left[1] + 0.994).abs() < 1e-6);
    assert!((out.right[1] + 0.25).abs() < 1e-6);
    assert!((out.left[2] - 0.5).abs() < 1e-6);
    assert_eq!(engine.clamp().get(ClampParam::Multiplier), -1.0);
}

#[test]
fn sixteen_bit_output_reports_pcm() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pcm.wav");
    let spec = WavSpec {
        bits_per_sample: 16,
        sample_rate: 44100,
        ..WavSpec::default()
    };
    write_wav_stereo(&path, &StereoSamples::from_mono(sine(441, 0.5)), spec).unwrap();

    let info = read_wav_info(&path).unwrap();
    assert_eq!(info.channels, 2);
    assert_eq!(info.bits_per_sample, 16);
    assert_eq!(info.num_frames, 441);
    assert_eq!(info.format, vclamp_io::WavFormat::Pcm);
}
