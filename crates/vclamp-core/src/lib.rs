//! vclamp Core - dual-channel voltage clamp for modular rigs
//!
//! This crate holds the signal path of the Clamp module: input gain,
//! attenuverter with snap buttons, linked Max/Min bound knobs, a fixed
//! ceiling, and the hard clamp itself. It runs allocation-free, one stereo
//! frame per call.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Object-safe processing trait (mono, stereo, blocks)
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Runtime-discoverable controls
//! - [`ParamBank`] / [`ParamStore`] - Host-owned indexed control storage
//! - [`Clamp`] - The module, generic over its parameter bank
//! - [`process_frame`] - The per-frame transform as a free function
//! - [`Input`] - Jack state (voltage + connected flag)
//!
//! # no_std Support
//!
//! Disable the default `std` feature to build without the standard library:
//!
//! ```toml
//! [dependencies]
//! vclamp-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use vclamp_core::{Clamp, ClampParam, Effect, InputId};
//!
//! let mut clamp = Clamp::new();
//! clamp.set(ClampParam::Gain, 2.0);
//! clamp.set_bounds(5.0, -5.0);
//! assert_eq!(clamp.process_stereo(4.0, -1.0), (5.0, -2.0));
//!
//! // No cable in the left jack: outputs become static offsets.
//! clamp.set_input_connected(InputId::Left, false);
//! assert_eq!(clamp.process_stereo(0.0, 0.0), (5.0, -5.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bank;
pub mod clamp;
pub mod effect;
pub mod math;
pub mod param_info;
pub mod ports;

pub use bank::{ParamBank, ParamStore};
pub use clamp::{
    CEILING_VOLTS, CLAMP_PARAMS, Clamp, ClampBank, ClampParam, ClampState, PARAM_COUNT,
    SNAP_VALUES, clamp_between, process_frame,
};
pub use effect::Effect;
pub use math::{SILENCE_DB, count_outside, linear_to_db, peak, rms};
pub use param_info::{ParamDescriptor, ParamDisplay, ParamFlags, ParamId, ParamUnit, ParameterInfo};
pub use ports::{Input, InputId, OutputId};
