// Virtual camera derived from pointer position and scroll speed.
//
// Platform-free; the web shell maps the result onto a rotation transform for
// the world element and a perspective distance for the viewport element.

/// Pointer tilt contribution in degrees at full deflection.
pub const TILT_POINTER_GAIN: f32 = 5.0;
/// Velocity pitch contribution (camera dips while scrolling).
pub const TILT_VELOCITY_GAIN: f32 = 0.5;
/// Resting perspective distance.
pub const BASE_FOV: f32 = 1000.0;
/// Perspective narrowing per unit of speed, capped by `FOV_NARROW_MAX`.
pub const FOV_VELOCITY_GAIN: f32 = 10.0;
pub const FOV_NARROW_MAX: f32 = 600.0;

/// Pointer position normalized to [-1, 1] on both axes. Written by the
/// pointer-move handler between ticks, read once per tick; only the most
/// recent event survives.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Per-frame camera description, recomputed from scratch every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    pub tilt_x_deg: f32,
    pub tilt_y_deg: f32,
    pub fov_px: f32,
}

/// Derive the camera for this frame.
#[inline]
pub fn compute(pointer: PointerState, smoothed_velocity: f32) -> CameraFrame {
    CameraFrame {
        tilt_x_deg: pointer.y * TILT_POINTER_GAIN - smoothed_velocity * TILT_VELOCITY_GAIN,
        tilt_y_deg: pointer.x * TILT_POINTER_GAIN,
        fov_px: BASE_FOV - (smoothed_velocity.abs() * FOV_VELOCITY_GAIN).min(FOV_NARROW_MAX),
    }
}
