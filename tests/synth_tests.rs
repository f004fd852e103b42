// Host-side tests for the synth parameter mapping and the transient gate.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod synth {
    include!("../src/core/synth.rs");
}

use synth::*;

#[test]
fn cutoff_rests_at_base_and_rises_with_speed() {
    assert_eq!(cutoff_hz(0.0), FILTER_BASE_HZ);
    assert_eq!(cutoff_hz(10.0), 270.0);
    assert_eq!(cutoff_hz(100.0), 1620.0);
}

#[test]
fn cutoff_saturates_past_the_speed_clamp() {
    let ceiling = cutoff_hz(FILTER_SPEED_CLAMP);
    assert_eq!(cutoff_hz(250.0), ceiling);
    assert_eq!(cutoff_hz(1e9), ceiling);
}

#[test]
fn cutoff_ignores_scroll_direction() {
    assert_eq!(cutoff_hz(-42.0), cutoff_hz(42.0));
}

#[test]
fn gate_admits_the_first_trigger() {
    let mut gate = ChirpGate::new();
    assert!(gate.admit(0.0));
}

#[test]
fn gate_drops_triggers_inside_the_cooldown_window() {
    let mut gate = ChirpGate::new();
    assert!(gate.admit(1.0));
    assert!(!gate.admit(1.0 + CHIRP_COOLDOWN_SEC * 0.5));
    assert!(gate.admit(1.0 + CHIRP_COOLDOWN_SEC * 1.5));
}

#[test]
fn rejected_triggers_do_not_rearm_the_window() {
    let mut gate = ChirpGate::new();
    assert!(gate.admit(0.0));
    // hammering inside the window keeps getting dropped
    assert!(!gate.admit(0.02));
    assert!(!gate.admit(0.04));
    // spacing is measured from the admitted trigger, not the rejected ones
    assert!(gate.admit(0.06));
}
