//! Parameter and preset validation.
//!
//! Checks keys and values against the descriptors a module publishes through
//! [`ParameterInfo`], so the same rules apply to presets, CLI overrides and
//! anything else that writes controls from text.
//!
//! # Example
//!
//! ```rust
//! use vclamp_config::{ValidationError, validate_param};
//! use vclamp_core::Clamp;
//!
//! let clamp = Clamp::new();
//! assert_eq!(validate_param(&clamp, "clamp_max", 5.0), Ok(0));
//! assert!(matches!(
//!     validate_param(&clamp, "clamp_max", 12.0),
//!     Err(ValidationError::OutOfRange { .. })
//! ));
//! ```

use thiserror::Error;
use vclamp_core::ParameterInfo;

use crate::Preset;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Unknown parameter name.
    #[error("unknown parameter '{param}'")]
    UnknownParameter {
        /// Name of the unrecognized parameter.
        param: String,
    },

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Invalid parameter format.
    #[error("invalid format for parameter '{param}': {reason}")]
    InvalidFormat {
        /// Name of the parameter.
        param: String,
        /// Description of the format error.
        reason: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

impl ValidationError {
    /// Collapse a list of errors: none is `Ok`, one is itself, more is [`Multiple`](Self::Multiple).
    pub fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }
}

fn normalize_param_name(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Find the parameter index a key refers to.
///
/// Matches the descriptor's string id, name or short name, ignoring case
/// and treating spaces and hyphens as underscores.
pub fn resolve_param<P: ParameterInfo + ?Sized>(target: &P, key: &str) -> Option<usize> {
    let wanted = normalize_param_name(key);
    (0..target.param_count()).find(|&i| {
        target.param_info(i).is_some_and(|desc| {
            [desc.string_id, desc.name, desc.short_name]
                .iter()
                .any(|candidate| normalize_param_name(candidate) == wanted)
        })
    })
}

/// Check a stored value for `key`, returning the parameter index.
pub fn validate_param<P: ParameterInfo + ?Sized>(
    target: &P,
    key: &str,
    value: f32,
) -> ValidationResult<usize> {
    let index = resolve_param(target, key).ok_or_else(|| ValidationError::UnknownParameter {
        param: key.to_string(),
    })?;
    let Some(desc) = target.param_info(index) else {
        return Err(ValidationError::UnknownParameter {
            param: key.to_string(),
        });
    };

    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            param: key.to_string(),
            reason: format!("{value} is not a finite number"),
        });
    }
    if value < desc.min || value > desc.max {
        return Err(ValidationError::OutOfRange {
            param: key.to_string(),
            value,
            min: desc.min,
            max: desc.max,
        });
    }
    if !desc.is_on_step(value) {
        return Err(ValidationError::InvalidFormat {
            param: key.to_string(),
            reason: format!("{value} is not a multiple of step {}", desc.step),
        });
    }
    Ok(index)
}

/// Parse display text for `key` into a stored value.
///
/// Text is read in the parameter's display units: volts for the bounds,
/// decibels for the gain, `on`/`off` for buttons. Returns the index and
/// the stored value.
///
/// ```rust
/// use vclamp_config::parse_param_value;
/// use vclamp_core::Clamp;
///
/// let clamp = Clamp::new();
/// let (index, value) = parse_param_value(&clamp, "gain", "0 dB").unwrap();
/// assert_eq!(index, 5);
/// assert!((value - 1.0).abs() < 1e-6);
/// ```
pub fn parse_param_value<P: ParameterInfo + ?Sized>(
    target: &P,
    key: &str,
    text: &str,
) -> ValidationResult<(usize, f32)> {
    let index = resolve_param(target, key).ok_or_else(|| ValidationError::UnknownParameter {
        param: key.to_string(),
    })?;
    let parsed = target
        .param_info(index)
        .and_then(|desc| desc.parse_unclamped(text))
        .ok_or_else(|| ValidationError::InvalidFormat {
            param: key.to_string(),
            reason: format!("cannot parse '{}'", text.trim()),
        })?;
    validate_param(target, key, parsed).map(|index| (index, parsed))
}

/// Validate every entry of a preset, collecting all failures.
pub fn validate_preset<P: ParameterInfo + ?Sized>(preset: &Preset, target: &P) -> ValidationResult<()> {
    let errors = preset
        .params
        .iter()
        .filter_map(|(key, &value)| validate_param(target, key, value).err())
        .collect();
    ValidationError::collect(errors)
}
