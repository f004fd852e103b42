// Throttled heads-up-display snapshots.

/// Publish cadence in frames; snapshots between publishes are skipped, not
/// averaged.
pub const PUBLISH_EVERY: u64 = 10;

/// Read-only display values, replaced wholesale on each publish.
#[derive(Clone, Debug, PartialEq)]
pub struct HudSnapshot {
    pub fps: u32,
    pub velocity: String,
    pub coord: i64,
}

#[inline]
pub fn due(frame_count: u64) -> bool {
    frame_count % PUBLISH_EVERY == 0
}

/// Build a fresh snapshot from the current tick's timing and motion values.
pub fn snapshot(delta_ms: f32, smoothed_velocity: f32, scroll: f32) -> HudSnapshot {
    let fps = if delta_ms > 0.0 {
        (1000.0 / delta_ms).round() as u32
    } else {
        0
    };
    HudSnapshot {
        fps,
        velocity: format!("{:.2}", smoothed_velocity.abs()),
        coord: scroll.round() as i64,
    }
}
