/// Shell-side tuning constants (audio graph levels and scroll provider).
///
/// Field, camera, smoothing, HUD and synth-mapping constants live next to
/// their logic in `core`; everything here configures the platform adapters.
// Master output level, kept low so the summed drone cannot clip
pub const MASTER_GAIN: f32 = 0.3;
pub const DRONE_GAIN: f32 = 0.5;

// Detuned drone pair feeding the low-pass filter
pub const DRONE_SAW_HZ: f32 = 55.0;
pub const DRONE_SINE_HZ: f32 = 57.0;

// Parameter-domain smoothing of the cutoff target, independent of the
// frame-domain velocity filter
pub const FILTER_RAMP_TAU_SEC: f64 = 0.1;

// Hover chirp envelope
pub const CHIRP_START_HZ: f32 = 1200.0;
pub const CHIRP_END_HZ: f32 = 600.0;
pub const CHIRP_GAIN: f32 = 0.05;
pub const CHIRP_FLOOR: f32 = 0.001;
pub const CHIRP_DURATION_SEC: f64 = 0.1;

// Scroll provider interpolation factor per pump
pub const SCROLL_LERP: f32 = 0.08;
