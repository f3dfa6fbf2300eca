//! Level measurement helpers.
//!
//! Used by the offline tools to report what the clamp did to a signal.
//! All functions are allocation-free and `no_std`.

use libm::{log10f, sqrtf};

/// Floor returned by [`linear_to_db`] for silence.
pub const SILENCE_DB: f32 = -120.0;

/// Convert a linear amplitude ratio to decibels.
///
/// Non-positive input maps to [`SILENCE_DB`].
///
/// ```rust
/// use vclamp_core::linear_to_db;
///
/// assert!(linear_to_db(1.0).abs() < 1e-6);
/// assert!((linear_to_db(10.0) - 20.0).abs() < 1e-4);
/// assert_eq!(linear_to_db(0.0), -120.0);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        SILENCE_DB
    } else {
        20.0 * log10f(linear)
    }
}

/// Root-mean-square level of a buffer. Empty buffers read `0.0`.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    sqrtf(sum / samples.len() as f32)
}

/// Largest absolute sample value.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

/// Number of samples lying outside `[lo, hi]`.
///
/// Reported by the CLI as "samples limited".
pub fn count_outside(samples: &[f32], lo: f32, hi: f32) -> usize {
    samples.iter().filter(|&&s| s < lo || s > hi).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_of_constant() {
        assert!((rms(&[2.0, -2.0, 2.0]) - 2.0).abs() < 1e-6);
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn peak_ignores_sign() {
        assert_eq!(peak(&[0.5, -3.0, 1.0]), 3.0);
        assert_eq!(peak(&[]), 0.0);
    }

    #[test]
    fn db_conversion() {
        assert!((linear_to_db(0.5) + 6.0206).abs() < 1e-3);
        assert_eq!(linear_to_db(-1.0), SILENCE_DB);
    }

    #[test]
    fn count_outside_window() {
        let samples = [-12.0, -5.0, 0.0, 5.0, 12.0];
        assert_eq!(count_outside(&samples, -10.0, 10.0), 2);
        assert_eq!(count_outside(&samples, -1.0, 1.0), 4);
    }
}
