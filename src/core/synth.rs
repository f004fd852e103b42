// Pure synthesis parameter mapping, shared with the WebAudio shell.

/// Resting low-pass cutoff of the drone filter.
pub const FILTER_BASE_HZ: f32 = 120.0;
/// Cutoff rise per unit of scroll speed.
pub const FILTER_HZ_PER_SPEED: f32 = 15.0;
/// Speeds beyond this stop opening the filter further.
pub const FILTER_SPEED_CLAMP: f32 = 100.0;

/// Minimum spacing between transient voices on the audio clock.
pub const CHIRP_COOLDOWN_SEC: f64 = 0.05;

/// Map smoothed scroll speed onto the drone filter cutoff target.
#[inline]
pub fn cutoff_hz(smoothed_velocity: f32) -> f32 {
    FILTER_BASE_HZ + smoothed_velocity.abs().min(FILTER_SPEED_CLAMP) * FILTER_HZ_PER_SPEED
}

/// Rate limiter for transient voices. Admitting a trigger arms the cooldown;
/// triggers inside the window are dropped.
#[derive(Clone, Copy, Debug)]
pub struct ChirpGate {
    last_admitted_at: f64,
}

impl Default for ChirpGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ChirpGate {
    pub fn new() -> Self {
        Self {
            last_admitted_at: f64::NEG_INFINITY,
        }
    }

    pub fn admit(&mut self, now_sec: f64) -> bool {
        if now_sec - self.last_admitted_at < CHIRP_COOLDOWN_SEC {
            return false;
        }
        self.last_admitted_at = now_sec;
        true
    }
}
