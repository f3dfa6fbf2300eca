//! Input and output jacks.
//!
//! The host samples every cable once per frame and tells the module which
//! jacks have a cable plugged in. An unpatched input reads `0.0 V`.

/// Input jack selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputId {
    /// Left / channel 1 input.
    Left = 0,
    /// Right / channel 2 input.
    Right = 1,
}

/// Output jack selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputId {
    /// Left / channel 1 output.
    Left = 0,
    /// Right / channel 2 output.
    Right = 1,
}

/// One input jack for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Input {
    /// Voltage on the cable. `0.0` when nothing is patched.
    pub voltage: f32,
    /// Whether a cable is plugged in.
    pub connected: bool,
}

impl Input {
    /// A patched jack carrying `voltage`.
    pub const fn patched(voltage: f32) -> Self {
        Self {
            voltage,
            connected: true,
        }
    }

    /// An empty jack.
    pub const fn unpatched() -> Self {
        Self {
            voltage: 0.0,
            connected: false,
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::unpatched()
    }
}
