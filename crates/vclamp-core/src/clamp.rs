//! Clamp: dual-channel gain, attenuverter and voltage clamp.
//!
//! Two audio/CV channels are pre-scaled by an input gain and an attenuverter,
//! then hard-limited to a window set by the Max and Min knobs. The knobs can
//! be linked so that moving one mirrors the other around 0 V, and a Ceiling
//! button pins the window to ±9.94 V regardless of the knobs.
//!
//! # Signal Flow
//!
//! ```text
//! knobs ── link resolution ── ceiling override ──┐ (lo, hi)
//!                                                 │
//! In L/R ── × gain ── × multiplier ── clamp(lo, hi) ── Out L/R
//!                          ▲
//!               snap buttons (-1, 1, -2, 2)
//! ```
//!
//! With nothing patched into the left input, both outputs turn into static
//! offsets: Out L carries the Max bound and Out R the Min bound.
//!
//! # Parameters
//!
//! | Idx | Name | Range | Default |
//! |-----|------|-------|---------|
//! | 0 | Max | -10 to +10 V | +10 |
//! | 1 | Ceiling | Off/On | Off |
//! | 2 | Min | -10 to +10 V | -10 |
//! | 3 | Link | Linked/Free | Free |
//! | 4 | Multiplier | -2 to +2 | 1 |
//! | 5 | Input Gain | 0 to 4 (shown in dB) | 1 |
//! | 6–9 | Snap 1–4 | Off/On | Off |
//!
//! # Quirks kept from the hardware panel
//!
//! - Link is engaged when the switch value is below 1 (0 = linked).
//! - Both link branches can fire in one frame; the Min branch runs last.
//! - Snap buttons are not mutually exclusive: the highest-numbered active
//!   button wins.
//! - A snap writes the multiplier after the frame's scale is read, so the
//!   new value is heard one frame later.
//! - The right output checks the *left* input's connection.

use crate::bank::{ParamBank, ParamStore};
use crate::effect::Effect;
use crate::param_info::{ParamDescriptor, ParamDisplay, ParamId, ParameterInfo, ParamUnit};
use crate::ports::{Input, InputId, OutputId};

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Bound magnitude forced by the Ceiling button (about 0.05 dB under 10 V).
pub const CEILING_VOLTS: f32 = 9.94;

/// Attenuverter value written by each snap button, in button order.
pub const SNAP_VALUES: [f32; 4] = [-1.0, 1.0, -2.0, 2.0];

/// Number of controls on the panel.
pub const PARAM_COUNT: usize = 10;

/// Panel controls in host index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClampParam {
    /// Upper bound knob.
    Max = 0,
    /// Ceiling button.
    Ceiling = 1,
    /// Lower bound knob.
    Min = 2,
    /// Link switch (0 = linked).
    Link = 3,
    /// Attenuverter knob.
    Multiplier = 4,
    /// Input gain knob.
    Gain = 5,
    /// Snap to -1.
    Snap1 = 6,
    /// Snap to +1.
    Snap2 = 7,
    /// Snap to -2.
    Snap3 = 8,
    /// Snap to +2.
    Snap4 = 9,
}

impl ClampParam {
    /// Snap buttons in evaluation order.
    pub const SNAPS: [ClampParam; 4] = [
        ClampParam::Snap1,
        ClampParam::Snap2,
        ClampParam::Snap3,
        ClampParam::Snap4,
    ];

    /// Bank index of this control.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Descriptor table for the panel, indexed by [`ClampParam`].
pub static CLAMP_PARAMS: [ParamDescriptor; PARAM_COUNT] = [
    ParamDescriptor::volts("Max", "Max", -10.0, 10.0, 10.0).with_id(ParamId(100), "clamp_max"),
    ParamDescriptor::toggle("Ceiling", "Ceil", 0.0).with_id(ParamId(101), "clamp_ceiling"),
    ParamDescriptor::volts("Min", "Min", -10.0, 10.0, -10.0).with_id(ParamId(102), "clamp_min"),
    ParamDescriptor::toggle("Link", "Link", 1.0).with_id(ParamId(103), "clamp_link"),
    ParamDescriptor::custom("Multiplier", "Mult", -2.0, 2.0, 1.0)
        .with_id(ParamId(104), "clamp_mult"),
    ParamDescriptor::custom("Input Gain", "Gain", 0.0, 4.0, 1.0)
        .with_id(ParamId(105), "clamp_gain")
        .with_unit(ParamUnit::Decibels)
        .with_display(ParamDisplay::Log10 { multiplier: 40.0 }),
    ParamDescriptor::toggle("Snap -1", "Snap1", 0.0).with_id(ParamId(106), "clamp_snap_1"),
    ParamDescriptor::toggle("Snap +1", "Snap2", 0.0).with_id(ParamId(107), "clamp_snap_2"),
    ParamDescriptor::toggle("Snap -2", "Snap3", 0.0).with_id(ParamId(108), "clamp_snap_3"),
    ParamDescriptor::toggle("Snap +2", "Snap4", 0.0).with_id(ParamId(109), "clamp_snap_4"),
];

/// Default bank type for [`Clamp`].
pub type ClampBank = ParamStore<PARAM_COUNT>;

/// Module-owned state that persists between frames.
///
/// Everything else lives in the host's [`ParamBank`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClampState {
    /// Max knob value at the last link snapshot.
    pub prev_max: f32,
    /// Min knob value at the last link snapshot.
    pub prev_min: f32,
    /// Effective upper bound shown on the top display.
    pub readout_max: f32,
    /// Effective lower bound shown on the bottom display.
    pub readout_min: f32,
}

impl ClampState {
    /// Both displays formatted the way the panel shows them (`%5.2f`).
    pub fn format_readouts(&self) -> (String, String) {
        (
            format!("{:5.2}", self.readout_max),
            format!("{:5.2}", self.readout_min),
        )
    }
}

/// Clamp `value` into the window spanned by `a` and `b`, in either order.
///
/// ```rust
/// use vclamp_core::clamp_between;
///
/// assert_eq!(clamp_between(15.0, 10.0, -10.0), 10.0);
/// assert_eq!(clamp_between(15.0, -10.0, 10.0), 10.0);
/// assert_eq!(clamp_between(-3.0, 2.0, 5.0), 2.0);
/// ```
#[inline]
pub fn clamp_between(value: f32, a: f32, b: f32) -> f32 {
    let lo = libm::fminf(a, b);
    let hi = libm::fmaxf(a, b);
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

#[inline]
fn is_linked(link: f32) -> bool {
    link < 1.0
}

/// Run one frame of the clamp transform.
///
/// Reads the controls from `bank`, writes back the knob values the panel
/// moves on its own (linked bounds, ceiling bounds, snapped multiplier),
/// updates `state`, and returns `(out_left, out_right)`.
pub fn process_frame<B: ParamBank>(
    state: &mut ClampState,
    bank: &mut B,
    left: Input,
    right: Input,
) -> (f32, f32) {
    let max_idx = ClampParam::Max.index();
    let min_idx = ClampParam::Min.index();

    // 1. Link resolution, both comparisons against the values read up front.
    let raw_max = bank.value(max_idx);
    let raw_min = bank.value(min_idx);
    let linked = is_linked(bank.value(ClampParam::Link.index()));

    if linked && raw_max != state.prev_max {
        #[cfg(feature = "tracing")]
        if bank.value(min_idx) != -raw_max {
            tracing::debug!(max = raw_max, "clamp_link: min follows max");
        }
        bank.set_value(min_idx, -raw_max);
    }
    if linked && raw_min != state.prev_min {
        #[cfg(feature = "tracing")]
        if bank.value(max_idx) != -raw_min {
            tracing::debug!(min = raw_min, "clamp_link: max follows min");
        }
        bank.set_value(max_idx, -raw_min);
        state.prev_max = raw_max;
        state.prev_min = raw_min;
    }

    // 2. Ceiling override, written back to the knobs.
    let (upper, lower) = if bank.value(ClampParam::Ceiling.index()) > 0.0 {
        (CEILING_VOLTS, -CEILING_VOLTS)
    } else {
        (bank.value(max_idx), bank.value(min_idx))
    };
    bank.set_value(max_idx, upper);
    bank.set_value(min_idx, lower);
    state.readout_max = upper;
    state.readout_min = lower;

    // 3. Snap buttons, last active wins. The scale is latched first, so a
    // newly pressed button reaches the signal on the next frame.
    let mult_idx = ClampParam::Multiplier.index();
    let scale = bank.value(ClampParam::Gain.index()) * bank.value(mult_idx);
    for (button, &snap) in ClampParam::SNAPS.iter().zip(SNAP_VALUES.iter()) {
        if bank.value(button.index()) == 1.0 {
            bank.set_value(mult_idx, snap);
        }
    }

    // 4. Pre-scale and clamp.
    let hi = bank.value(max_idx);
    let lo = bank.value(min_idx);
    let clamped_l = clamp_between(left.voltage * scale, hi, lo);
    let clamped_r = clamp_between(right.voltage * scale, hi, lo);

    // 5. Output routing. Both outputs follow the left jack.
    if left.connected {
        (clamped_l, clamped_r)
    } else {
        (hi, lo)
    }
}

/// Dual-channel clamp module.
///
/// Generic over the parameter bank so a host can inject its own storage;
/// [`Clamp::new`] uses an in-process [`ParamStore`].
///
/// Both inputs start patched, which is what offline processing and
/// [`Effect::process_stereo`] expect. Hosts report cable changes through
/// [`set_input_connected`](Self::set_input_connected).
///
/// # Example
///
/// ```rust
/// use vclamp_core::{Clamp, Effect};
///
/// let mut clamp = Clamp::new();
/// clamp.set_bounds(5.0, -5.0);
/// assert_eq!(clamp.process_stereo(12.0, -12.0), (5.0, -5.0));
/// ```
#[derive(Debug, Clone)]
pub struct Clamp<B: ParamBank = ClampBank> {
    bank: B,
    state: ClampState,
    inputs: [Input; 2],
    outputs: [f32; 2],
    sample_rate: f32,
}

impl Clamp<ClampBank> {
    /// Create a clamp with every control at its default.
    pub fn new() -> Self {
        Self::with_bank(ParamStore::new(&CLAMP_PARAMS))
    }
}

impl Default for Clamp<ClampBank> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ParamBank> Clamp<B> {
    /// Create a clamp reading its controls from `bank`.
    ///
    /// The bank must have at least [`PARAM_COUNT`] slots laid out as
    /// [`ClampParam`].
    pub fn with_bank(bank: B) -> Self {
        debug_assert!(bank.len() >= PARAM_COUNT, "bank too small for the clamp panel");
        let state = ClampState {
            readout_max: bank.value(ClampParam::Max.index()),
            readout_min: bank.value(ClampParam::Min.index()),
            ..ClampState::default()
        };
        Self {
            bank,
            state,
            inputs: [Input::patched(0.0); 2],
            outputs: [0.0; 2],
            sample_rate: 48000.0,
        }
    }

    /// The parameter bank.
    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Mutable access to the parameter bank.
    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    /// Consume the module and return its bank.
    pub fn into_bank(self) -> B {
        self.bank
    }

    /// Frame-persistent state (link snapshot and display readouts).
    pub fn state(&self) -> &ClampState {
        &self.state
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    // -- Controls --

    /// Read a control.
    #[inline]
    pub fn get(&self, param: ClampParam) -> f32 {
        self.bank.value(param.index())
    }

    /// Write a control.
    #[inline]
    pub fn set(&mut self, param: ClampParam, value: f32) {
        self.bank.set_value(param.index(), value);
    }

    /// Set both bound knobs.
    pub fn set_bounds(&mut self, max: f32, min: f32) {
        self.set(ClampParam::Max, max);
        self.set(ClampParam::Min, min);
    }

    /// Engage or release the Ceiling button.
    pub fn set_ceiling(&mut self, on: bool) {
        self.set(ClampParam::Ceiling, if on { 1.0 } else { 0.0 });
    }

    /// Whether the Ceiling button is engaged.
    pub fn ceiling(&self) -> bool {
        self.get(ClampParam::Ceiling) > 0.0
    }

    /// Engage or release knob linking.
    pub fn set_linked(&mut self, linked: bool) {
        self.set(ClampParam::Link, if linked { 0.0 } else { 1.0 });
    }

    /// Whether the bound knobs are linked.
    pub fn linked(&self) -> bool {
        is_linked(self.get(ClampParam::Link))
    }

    /// Set a snap button (`button` in `0..4`). Other indices are ignored.
    pub fn set_snap(&mut self, button: usize, on: bool) {
        if let Some(&param) = ClampParam::SNAPS.get(button) {
            self.set(param, if on { 1.0 } else { 0.0 });
        }
    }

    /// Effective `(lo, hi)` window from the current knob values.
    pub fn window(&self) -> (f32, f32) {
        let max = self.get(ClampParam::Max);
        let min = self.get(ClampParam::Min);
        (libm::fminf(max, min), libm::fmaxf(max, min))
    }

    // -- Jacks --

    /// Report whether a cable is plugged into `input`.
    pub fn set_input_connected(&mut self, input: InputId, connected: bool) {
        let jack = &mut self.inputs[input as usize];
        jack.connected = connected;
        if !connected {
            jack.voltage = 0.0;
        }
    }

    /// Current state of an input jack.
    pub fn input(&self, input: InputId) -> Input {
        self.inputs[input as usize]
    }

    /// Value written to an output jack by the last frame.
    pub fn output(&self, output: OutputId) -> f32 {
        self.outputs[output as usize]
    }

    /// Run one frame from explicit jack states, as a host callback would.
    pub fn process_inputs(&mut self, left: Input, right: Input) -> (f32, f32) {
        self.inputs = [left, right];
        let (l, r) = process_frame(&mut self.state, &mut self.bank, left, right);
        self.outputs = [l, r];
        (l, r)
    }
}

impl<B: ParamBank> Effect for Clamp<B> {
    fn process(&mut self, input: f32) -> f32 {
        self.process_stereo(input, input).0
    }

    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        let mut l = self.inputs[InputId::Left as usize];
        let mut r = self.inputs[InputId::Right as usize];
        if l.connected {
            l.voltage = left;
        }
        if r.connected {
            r.voltage = right;
        }
        self.process_inputs(l, r)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!("clamp_reset: link snapshot cleared");
        self.state = ClampState {
            readout_max: self.get(ClampParam::Max),
            readout_min: self.get(ClampParam::Min),
            ..ClampState::default()
        };
        self.outputs = [0.0; 2];
    }
}

impl<B: ParamBank> ParameterInfo for Clamp<B> {
    fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        CLAMP_PARAMS.get(index).copied()
    }

    fn get_param(&self, index: usize) -> f32 {
        if index < PARAM_COUNT {
            self.bank.value(index)
        } else {
            0.0
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if let Some(desc) = CLAMP_PARAMS.get(index) {
            self.bank.set_value(index, desc.clamp(value));
        }
    }
}
