//! Offline clamp processing engine.

use crate::StereoSamples;
use vclamp_core::{Clamp, Effect, InputId};

/// Volts represented by a full-scale (±1.0) file sample.
///
/// Matches the ±10 V span of the Max/Min knobs, so a full-scale file sweeps
/// the whole panel range.
pub const DEFAULT_VOLTS_PER_UNIT: f32 = 10.0;

/// Runs a [`Clamp`] over buffered audio.
///
/// File samples are scaled to volts on the way in and back to file units on
/// the way out. The left jack can be marked unpatched, in which case the
/// output carries the Max/Min offsets instead of the signal.
#[derive(Debug, Clone)]
pub struct ProcessingEngine {
    clamp: Clamp,
    sample_rate: f32,
    volts_per_unit: f32,
}

impl ProcessingEngine {
    /// Create a new engine with a default clamp.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_clamp(Clamp::new(), sample_rate)
    }

    /// Wrap an already configured clamp.
    pub fn with_clamp(mut clamp: Clamp, sample_rate: f32) -> Self {
        clamp.set_sample_rate(sample_rate);
        Self {
            clamp,
            sample_rate,
            volts_per_unit: DEFAULT_VOLTS_PER_UNIT,
        }
    }

    /// The clamp being driven.
    pub fn clamp(&self) -> &Clamp {
        &self.clamp
    }

    /// Mutable access to the clamp, for setting controls.
    pub fn clamp_mut(&mut self) -> &mut Clamp {
        &mut self.clamp
    }

    /// Get the sample rate.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Set the sample rate.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.clamp.set_sample_rate(sample_rate);
    }

    /// Volts per full-scale file unit.
    pub fn volts_per_unit(&self) -> f32 {
        self.volts_per_unit
    }

    /// Set the file-to-volts scale. Non-positive or non-finite values are ignored.
    pub fn set_volts_per_unit(&mut self, volts: f32) {
        if volts > 0.0 && volts.is_finite() {
            self.volts_per_unit = volts;
        } else {
            tracing::warn!(volts, "ignoring invalid volts-per-unit scale");
        }
    }

    /// Mark the left input jack as patched or empty.
    pub fn set_left_patched(&mut self, patched: bool) {
        self.clamp.set_input_connected(InputId::Left, patched);
    }

    /// Whether the left input jack is patched.
    pub fn left_patched(&self) -> bool {
        self.clamp.input(InputId::Left).connected
    }

    /// Reset the clamp's link snapshot and outputs.
    pub fn reset(&mut self) {
        self.clamp.reset();
    }

    /// Process a single stereo frame given in file units.
    pub fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        let v = self.volts_per_unit;
        let (l, r) = self.clamp.process_stereo(left * v, right * v);
        (l / v, r / v)
    }

    /// Process a block of stereo samples.
    ///
    /// Output buffers must be at least as large as input buffers.
    pub fn process_block_stereo(
        &mut self,
        left_in: &[f32],
        right_in: &[f32],
        left_out: &mut [f32],
        right_out: &mut [f32],
    ) {
        debug_assert_eq!(left_in.len(), right_in.len());
        debug_assert!(left_out.len() >= left_in.len());
        debug_assert!(right_out.len() >= right_in.len());

        for i in 0..left_in.len() {
            (left_out[i], right_out[i]) = self.process_stereo(left_in[i], right_in[i]);
        }
    }

    /// Process an entire stereo file's worth of samples.
    ///
    /// A `block_size` of zero is treated as one.
    pub fn process_file_buffers(
        &mut self,
        input: &StereoSamples,
        block_size: usize,
    ) -> StereoSamples {
        self.process_file_with_progress(input, block_size, |_| {})
    }

    /// Like [`process_file_buffers`](Self::process_file_buffers), calling
    /// `progress` with the number of frames done after every block.
    pub fn process_file_with_progress<F: FnMut(usize)>(
        &mut self,
        input: &StereoSamples,
        block_size: usize,
        mut progress: F,
    ) -> StereoSamples {
        let block_size = block_size.max(1);
        let len = input.len();
        let mut left_out = vec![0.0; len];
        let mut right_out = vec![0.0; len];

        tracing::debug!(
            frames = len,
            block_size,
            left_patched = self.left_patched(),
            volts_per_unit = self.volts_per_unit,
            "processing buffers"
        );

        for start in (0..len).step_by(block_size) {
            let end = (start + block_size).min(len);
            self.process_block_stereo(
                &input.left[start..end],
                &input.right[start..end],
                &mut left_out[start..end],
                &mut right_out[start..end],
            );
            progress(end);
        }

        StereoSamples::new(left_out, right_out)
    }
}

impl Default for ProcessingEngine {
    fn default() -> Self {
        Self::new(48000.0)
    }
}
