//! Property-based tests for the clamp transform.
//!
//! Randomises knob positions, switch states and input voltages and checks the
//! invariants the panel guarantees: the window always holds, the ceiling is
//! exact, linking mirrors, and snap buttons override the attenuverter.

use proptest::prelude::*;
use vclamp_core::{
    CEILING_VOLTS, Clamp, ClampParam, Effect, Input, InputId, SNAP_VALUES, process_frame,
    ClampState, ParamStore, CLAMP_PARAMS, ParamBank,
};

fn knob() -> impl Strategy<Value = f32> {
    -10.0f32..=10.0f32
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// With the left jack patched, both outputs stay inside the window formed
    /// by the effective bounds, whatever the gain, multiplier or input level.
    #[test]
    fn output_within_window(
        max in knob(),
        min in knob(),
        gain in 0.0f32..=4.0f32,
        mult in -2.0f32..=2.0f32,
        linked in any::<bool>(),
        ceiling in any::<bool>(),
        input in prop::array::uniform32(-50.0f32..=50.0f32),
    ) {
        let mut clamp = Clamp::new();
        clamp.set_bounds(max, min);
        clamp.set(ClampParam::Gain, gain);
        clamp.set(ClampParam::Multiplier, mult);
        clamp.set_linked(linked);
        clamp.set_ceiling(ceiling);

        for &x in &input {
            let (l, r) = clamp.process_stereo(x, -x);
            let (lo, hi) = clamp.window();
            prop_assert!(l >= lo && l <= hi, "left {} outside [{}, {}]", l, lo, hi);
            prop_assert!(r >= lo && r <= hi, "right {} outside [{}, {}]", r, lo, hi);
        }
    }

    /// Ceiling engaged means the effective bounds are exactly ±9.94 V.
    #[test]
    fn ceiling_bounds_are_exact(
        max in knob(),
        min in knob(),
        linked in any::<bool>(),
        x in -100.0f32..=100.0f32,
    ) {
        let mut clamp = Clamp::new();
        clamp.set_bounds(max, min);
        clamp.set_linked(linked);
        clamp.set_ceiling(true);
        let (l, _) = clamp.process_stereo(x, x);

        prop_assert_eq!(clamp.get(ClampParam::Max), CEILING_VOLTS);
        prop_assert_eq!(clamp.get(ClampParam::Min), -CEILING_VOLTS);
        prop_assert_eq!(clamp.state().readout_max, CEILING_VOLTS);
        prop_assert!(l.abs() <= CEILING_VOLTS);
    }

    /// Linked and settled on a symmetric window, then only the Max knob moves
    /// from a to b: Min reads -b after the next frame.
    #[test]
    fn link_mirrors_max(a in knob(), b in knob()) {
        prop_assume!(a != b);
        let mut clamp = Clamp::new();
        clamp.set_bounds(a, -a);
        clamp.set_linked(true);
        for _ in 0..4 {
            clamp.process_stereo(0.0, 0.0);
        }
        prop_assert_eq!(clamp.get(ClampParam::Min), -a);

        clamp.set(ClampParam::Max, b);
        clamp.process_stereo(0.0, 0.0);
        prop_assert_eq!(clamp.get(ClampParam::Min), -b);
    }

    /// Exactly one snap button active forces its constant, whatever the
    /// attenuverter knob held before.
    #[test]
    fn single_snap_overrides(button in 0usize..4, prior in -2.0f32..=2.0f32) {
        let mut clamp = Clamp::new();
        clamp.set(ClampParam::Multiplier, prior);
        clamp.set_snap(button, true);
        clamp.process_stereo(0.0, 0.0);
        prop_assert_eq!(clamp.get(ClampParam::Multiplier), SNAP_VALUES[button]);
    }

    /// Left jack empty: the outputs carry the bound knobs, not the signal.
    #[test]
    fn unpatched_left_is_offset(max in knob(), min in knob(), x in -20.0f32..=20.0f32) {
        let mut clamp = Clamp::new();
        clamp.set_bounds(max, min);
        clamp.set_input_connected(InputId::Left, false);
        let (l, r) = clamp.process_stereo(x, x);
        prop_assert_eq!(l, max);
        prop_assert_eq!(r, min);
    }

    /// The free-function transform and the module agree frame for frame.
    #[test]
    fn free_function_matches_module(
        max in knob(),
        min in knob(),
        input in prop::array::uniform8(-15.0f32..=15.0f32),
    ) {
        let mut clamp = Clamp::new();
        clamp.set_linked(true);
        clamp.set_bounds(max, min);

        let mut bank = ParamStore::new(&CLAMP_PARAMS);
        bank.set_value(ClampParam::Link.index(), 0.0);
        bank.set_value(ClampParam::Max.index(), max);
        bank.set_value(ClampParam::Min.index(), min);
        let mut state = ClampState::default();

        for &x in &input {
            let expected = clamp.process_inputs(Input::patched(x), Input::patched(x * 0.5));
            let got = process_frame(&mut state, &mut bank, Input::patched(x), Input::patched(x * 0.5));
            prop_assert_eq!(expected, got);
        }
    }
}
