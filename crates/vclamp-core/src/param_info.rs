//! Parameter introspection for the clamp module's controls.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types that
//! let a host, preset system or CLI discover and manipulate module controls at
//! runtime without knowing their concrete layout:
//!
//! - **Hosts**: enumerate knobs, switches and buttons with their ranges
//! - **Presets**: save and restore control values by stable ID
//! - **CLI**: resolve `--param max=5` style overrides by name
//!
//! # Design
//!
//! Access is index-based. Each control is described by a [`ParamDescriptor`]
//! carrying display metadata and validation bounds. Controls also carry:
//!
//! - [`ParamId`] - stable numeric ID that survives reordering
//! - [`ParamFlags`] - capability flags (automatable, stepped)
//! - [`ParamDisplay`] - how the stored value is rendered for humans
//! - `string_id` - human-readable stable ID used as the preset key
//!
//! # Example
//!
//! ```rust
//! use vclamp_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Offset {
//!     volts: f32,
//! }
//!
//! impl ParameterInfo for Offset {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::volts("Offset", "Offset", -10.0, 10.0, 0.0)
//!                 .with_id(ParamId(900), "offset_volts")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.volts,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if let (0, Some(desc)) = (index, self.param_info(index)) {
//!             self.volts = desc.clamp(value);
//!         }
//!     }
//! }
//!
//! let mut offset = Offset { volts: 0.0 };
//! offset.set_param(0, 42.0);
//! assert_eq!(offset.get_param(0), 10.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Stable parameter identifier that survives reordering.
///
/// Used for preset persistence and host automation. Once assigned, a
/// `ParamId` must never change for a given control.
///
/// # Convention
///
/// The clamp module owns the block 100–109, assigned in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// Use [`union`](Self::union) to combine.
///
/// ```rust
/// use vclamp_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// assert!(!ParamFlags::AUTOMATABLE.contains(ParamFlags::STEPPED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter (default for all params).
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (switches and buttons).
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// How a stored parameter value is presented to the user.
///
/// The stored value is always what the DSP consumes. Some knobs are shown on
/// a different scale; the input gain knob stores a linear factor in `[0, 4]`
/// but reads out in decibels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamDisplay {
    /// Show the stored value unchanged.
    #[default]
    Plain,
    /// Show `multiplier * log10(value)`.
    Log10 {
        /// Scale applied after the logarithm.
        multiplier: f32,
    },
}

impl ParamDisplay {
    /// Map a stored value to its displayed value.
    ///
    /// Non-positive values on a logarithmic display map to negative infinity.
    #[inline]
    pub fn to_display(self, value: f32) -> f32 {
        match self {
            ParamDisplay::Plain => value,
            ParamDisplay::Log10 { multiplier } => {
                if value <= 0.0 {
                    f32::NEG_INFINITY
                } else {
                    multiplier * libm::log10f(value)
                }
            }
        }
    }

    /// Map a displayed value back to the stored value.
    #[inline]
    pub fn from_display(self, shown: f32) -> f32 {
        match self {
            ParamDisplay::Plain => shown,
            ParamDisplay::Log10 { multiplier } => {
                if shown == f32::NEG_INFINITY {
                    0.0
                } else {
                    libm::powf(10.0, shown / multiplier)
                }
            }
        }
    }
}

/// Trait for modules that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of the
/// instance. Use [`param_count`](Self::param_count) to determine valid indices.
///
/// This trait does not require thread safety. A host that edits parameters
/// from another thread must provide its own synchronisation.
pub trait ParameterInfo {
    /// Returns the number of parameters exposed.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at `index`, or `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at `index`.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at `index`.
    ///
    /// Implementations clamp to the descriptor range. Out-of-range indices
    /// are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Returns the stable [`ParamId`] for the parameter at `index`.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Linear scan; meant for setup paths, not the audio callback.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Short Name
///
/// `short_name` is at most 8 characters so it fits narrow panel labels and
/// terminal tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name (e.g., "Input Gain").
    pub name: &'static str,

    /// Short name, max 8 characters (e.g., "Gain").
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed stored value.
    pub min: f32,

    /// Maximum allowed stored value.
    pub max: f32,

    /// Value at instantiation.
    pub default: f32,

    /// Recommended increment for encoder-style control.
    pub step: f32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Stable string ID used as the preset key (e.g., `"clamp_max"`).
    pub string_id: &'static str,

    /// Capability flags. Default: [`ParamFlags::AUTOMATABLE`].
    pub flags: ParamFlags,

    /// Display mapping. Default: [`ParamDisplay::Plain`].
    pub display: ParamDisplay,
}

impl ParamDescriptor {
    /// Continuous parameter with a custom name and range, no unit.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
            display: ParamDisplay::Plain,
        }
    }

    /// Voltage parameter (knob labelled in volts).
    pub const fn volts(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self::custom(name, short_name, min, max, default).with_unit(ParamUnit::Volts)
    }

    /// Two-state switch or button in `[0, 1]`.
    pub const fn toggle(name: &'static str, short_name: &'static str, default: f32) -> Self {
        let mut desc = Self::custom(name, short_name, 0.0, 1.0, default)
            .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED));
        desc.step = 1.0;
        desc
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// ```rust
    /// use vclamp_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::volts("Max", "Max", -10.0, 10.0, 10.0)
    ///     .with_id(ParamId(100), "clamp_max");
    /// assert_eq!(desc.id, ParamId(100));
    /// assert_eq!(desc.string_id, "clamp_max");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the unit.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the display mapping.
    pub const fn with_display(mut self, display: ParamDisplay) -> Self {
        self.display = display;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// Stepped parameters are also rounded to the nearest step, so a button
    /// only ever holds 0 or 1.
    ///
    /// ```rust
    /// use vclamp_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::volts("Max", "Max", -10.0, 10.0, 10.0);
    /// assert_eq!(desc.clamp(3.0), 3.0);
    /// assert_eq!(desc.clamp(-20.0), -10.0);
    /// assert_eq!(desc.clamp(20.0), 10.0);
    ///
    /// let button = ParamDescriptor::toggle("Ceiling", "Ceil", 0.0);
    /// assert_eq!(button.clamp(0.3), 0.0);
    /// assert_eq!(button.clamp(0.7), 1.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        let value = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        };
        if self.is_stepped() && self.step > 0.0 {
            let snapped = self.min + libm::roundf((value - self.min) / self.step) * self.step;
            snapped.min(self.max)
        } else {
            value
        }
    }

    /// Returns `true` if `value` sits exactly on a step of a stepped parameter.
    ///
    /// Continuous parameters accept any value.
    pub fn is_on_step(&self, value: f32) -> bool {
        if !self.is_stepped() || self.step <= 0.0 {
            return true;
        }
        let steps = (value - self.min) / self.step;
        steps == libm::roundf(steps)
    }

    /// Converts a stored value to normalized range (0.0 to 1.0).
    ///
    /// A zero-width range normalizes to `0.0`.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (value - self.min) / range
    }

    /// Converts a normalized value (0.0 to 1.0) to the stored range.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        self.min + normalized * (self.max - self.min)
    }

    /// Returns `true` for switch/button style parameters.
    #[inline]
    pub fn is_stepped(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED)
    }

    /// Format a stored value for display, applying [`ParamDisplay`] and the unit suffix.
    ///
    /// ```rust
    /// use vclamp_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::volts("Max", "Max", -10.0, 10.0, 10.0);
    /// assert_eq!(desc.format_value(9.94), "9.94 V");
    ///
    /// let button = ParamDescriptor::toggle("Ceiling", "Ceil", 0.0);
    /// assert_eq!(button.format_value(1.0), "On");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        if self.is_stepped() {
            return String::from(if value >= 0.5 { "On" } else { "Off" });
        }
        let shown = self.display.to_display(value);
        if shown.is_infinite() {
            return format!("-inf{}", self.unit.suffix());
        }
        format!("{:.2}{}", shown, self.unit.suffix())
    }

    /// Parse display text back into a stored value.
    ///
    /// Accepts the output of [`format_value`](Self::format_value), bare
    /// numbers, and `on`/`off` for stepped parameters. The result is clamped
    /// to the parameter range. Returns `None` if the text is not a number.
    ///
    /// ```rust
    /// use vclamp_core::{ParamDescriptor, ParamDisplay, ParamUnit};
    ///
    /// let gain = ParamDescriptor::custom("Input Gain", "Gain", 0.0, 4.0, 1.0)
    ///     .with_unit(ParamUnit::Decibels)
    ///     .with_display(ParamDisplay::Log10 { multiplier: 40.0 });
    /// let stored = gain.parse_value("0.00 dB").unwrap();
    /// assert!((stored - 1.0).abs() < 1e-6);
    /// ```
    pub fn parse_value(&self, text: &str) -> Option<f32> {
        self.parse_unclamped(text).map(|v| self.clamp(v))
    }

    /// Like [`parse_value`](Self::parse_value) without the final clamp, so
    /// callers can reject out-of-range input instead of silently limiting it.
    pub fn parse_unclamped(&self, text: &str) -> Option<f32> {
        let text = text.trim();
        if self.is_stepped() {
            if text.eq_ignore_ascii_case("on") {
                return Some(1.0);
            }
            if text.eq_ignore_ascii_case("off") {
                return Some(0.0);
            }
        }
        let suffix = self.unit.suffix().trim();
        let number = if suffix.is_empty() {
            text
        } else {
            text.strip_suffix(suffix).unwrap_or(text).trim_end()
        };
        let shown = if number.eq_ignore_ascii_case("-inf") {
            f32::NEG_INFINITY
        } else {
            number.parse::<f32>().ok()?
        };
        Some(self.display.from_display(shown))
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Volts (V) - for bound and offset knobs.
    Volts,

    /// Decibels (dB) - for gain shown on a log scale.
    Decibels,

    /// No unit - for multipliers, switches and buttons.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use vclamp_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Volts.suffix(), " V");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Volts => " V",
            ParamUnit::Decibels => " dB",
            ParamUnit::None => "",
        }
    }
}
