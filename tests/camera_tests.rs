// Host-side tests for the virtual camera derivation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;

#[test]
fn resting_camera_is_level_at_base_perspective() {
    let cam = compute(PointerState::default(), 0.0);
    assert_eq!(cam.tilt_x_deg, 0.0);
    assert_eq!(cam.tilt_y_deg, 0.0);
    assert_eq!(cam.fov_px, BASE_FOV);
}

#[test]
fn tilt_combines_pointer_and_velocity_terms() {
    let cam = compute(PointerState { x: 0.5, y: -0.4 }, 2.0);
    // pitch: pointer pulls up, speed dips the nose
    assert!((cam.tilt_x_deg - (-0.4 * 5.0 - 2.0 * 0.5)).abs() < 1e-6);
    assert!((cam.tilt_y_deg - 2.5).abs() < 1e-6);
    assert!((cam.fov_px - 980.0).abs() < 1e-6);
}

#[test]
fn perspective_narrows_monotonically_with_speed() {
    let mut prev = compute(PointerState::default(), 0.0).fov_px;
    for v in [1.0, 5.0, 20.0, 40.0, 59.9] {
        let fov = compute(PointerState::default(), v).fov_px;
        assert!(fov < prev, "fov should shrink at speed {}", v);
        prev = fov;
    }
}

#[test]
fn perspective_floors_regardless_of_speed() {
    let floor = BASE_FOV - FOV_NARROW_MAX;
    assert_eq!(compute(PointerState::default(), 60.0).fov_px, floor);
    assert_eq!(compute(PointerState::default(), 1e6).fov_px, floor);
    assert_eq!(compute(PointerState::default(), -1e6).fov_px, floor);
}

#[test]
fn only_the_latest_pointer_position_is_seen_by_a_tick() {
    // writes between ticks overwrite, never queue
    let pointer = std::cell::RefCell::new(PointerState::default());
    *pointer.borrow_mut() = PointerState { x: 0.1, y: 0.1 };
    *pointer.borrow_mut() = PointerState { x: 0.5, y: 0.5 };
    let cam = compute(*pointer.borrow(), 0.0);
    assert!((cam.tilt_y_deg - 2.5).abs() < 1e-6);
    assert!((cam.tilt_x_deg - 2.5).abs() < 1e-6);
}
