// Host-side tests for HUD snapshot cadence and formatting.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod hud {
    include!("../src/core/hud.rs");
}

use hud::*;

#[test]
fn snapshots_are_due_every_tenth_frame() {
    let published: Vec<u64> = (1..=40).filter(|f| due(*f)).collect();
    assert_eq!(published, vec![10, 20, 30, 40]);
}

#[test]
fn velocity_renders_as_two_decimal_magnitude() {
    assert_eq!(snapshot(16.0, -3.456, 0.0).velocity, "3.46");
    assert_eq!(snapshot(16.0, 0.0, 0.0).velocity, "0.00");
    assert_eq!(snapshot(16.0, 12.0, 0.0).velocity, "12.00");
}

#[test]
fn coordinate_rounds_to_an_integer() {
    assert_eq!(snapshot(16.0, 0.0, 123.4).coord, 123);
    assert_eq!(snapshot(16.0, 0.0, 123.6).coord, 124);
    assert_eq!(snapshot(16.0, 0.0, -77.5).coord, -78);
}

#[test]
fn fps_derives_from_the_frame_delta() {
    assert_eq!(snapshot(16.666_667, 0.0, 0.0).fps, 60);
    assert_eq!(snapshot(33.333_333, 0.0, 0.0).fps, 30);
    // degenerate first-frame delta reads as zero rather than infinity
    assert_eq!(snapshot(0.0, 0.0, 0.0).fps, 0);
}

#[test]
fn snapshots_are_replaced_wholesale() {
    let a = snapshot(16.0, 1.0, 10.0);
    let b = snapshot(16.0, 1.0, 10.0);
    assert_eq!(a, b);
    let c = snapshot(16.0, 2.0, 10.0);
    assert_ne!(a, c);
}
