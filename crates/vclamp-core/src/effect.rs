//! Core processing trait.
//!
//! The [`Effect`] trait is the interface every processor in the workspace
//! exposes to offline engines and tests: single-sample mono, stereo pairs,
//! and block processing with default loops.
//!
//! ## Design Decisions
//!
//! - **Stereo first-class**: rack modules usually carry a left/right pair,
//!   so [`Effect::process_stereo`] is required. Mono `process` is derived by
//!   the implementor.
//!
//! - **Object-safe**: `dyn Effect` works for runtime selection; static
//!   dispatch is preferred in hot paths.
//!
//! - **No allocations**: all methods are callable from a real-time audio
//!   thread.

/// Core trait for audio processors.
///
/// # Example
///
/// ```rust
/// use vclamp_core::Effect;
///
/// struct Invert;
///
/// impl Effect for Invert {
///     fn process(&mut self, input: f32) -> f32 {
///         -input
///     }
///
///     fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
///         (-left, -right)
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
///
/// let mut fx = Invert;
/// assert_eq!(fx.process_stereo(1.0, -2.0), (-1.0, 2.0));
/// ```
pub trait Effect {
    /// Process a single mono sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process one stereo frame.
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32);

    /// Process a block of mono samples.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of stereo frames held in separate channel buffers.
    ///
    /// # Panics
    /// Debug builds panic if the four buffers differ in length.
    fn process_block_stereo(
        &mut self,
        left_in: &[f32],
        right_in: &[f32],
        left_out: &mut [f32],
        right_out: &mut [f32],
    ) {
        debug_assert_eq!(left_in.len(), right_in.len());
        debug_assert_eq!(left_in.len(), left_out.len());
        debug_assert_eq!(left_in.len(), right_out.len());
        for i in 0..left_in.len() {
            let (l, r) = self.process_stereo(left_in[i], right_in[i]);
            left_out[i] = l;
            right_out[i] = r;
        }
    }

    /// Update the sample rate.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state without changing parameters.
    fn reset(&mut self);

    /// Processing latency in samples. Default: 0.
    fn latency_samples(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scale(f32);

    impl Effect for Scale {
        fn process(&mut self, input: f32) -> f32 {
            input * self.0
        }
        fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
            (left * self.0, right * self.0)
        }
        fn set_sample_rate(&mut self, _: f32) {}
        fn reset(&mut self) {}
    }

    #[test]
    fn test_process_block() {
        let mut fx = Scale(2.0);
        let input = [1.0, 2.0, 3.0];
        let mut output = [0.0; 3];
        fx.process_block(&input, &mut output);
        assert_eq!(output, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_process_block_stereo() {
        let mut fx = Scale(0.5);
        let (li, ri) = ([2.0, 4.0], [-2.0, -4.0]);
        let (mut lo, mut ro) = ([0.0; 2], [0.0; 2]);
        fx.process_block_stereo(&li, &ri, &mut lo, &mut ro);
        assert_eq!(lo, [1.0, 2.0]);
        assert_eq!(ro, [-1.0, -2.0]);
    }

    #[test]
    fn test_default_latency() {
        assert_eq!(Scale(1.0).latency_samples(), 0);
    }
}
