use crate::easing::Easing;

/// A one-shot tween toward a target position, sampled once per frame tick.
///
/// The first sampled frame time becomes the animation origin, so a tween can
/// be constructed eagerly and only starts "running" when the host's frame
/// loop reaches it.
#[derive(Debug, Clone)]
pub struct SettleTween {
    start: f32,
    end: f32,
    duration_nanos: u64,
    easing: Easing,
    start_time_nanos: Option<u64>,
}

impl SettleTween {
    pub fn new(start: f32, end: f32, duration_ms: u64) -> Self {
        Self::with_easing(start, end, duration_ms, Easing::Decelerate)
    }

    pub fn with_easing(start: f32, end: f32, duration_ms: u64, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration_nanos: duration_ms * 1_000_000,
            easing,
            start_time_nanos: None,
        }
    }

    pub fn target(&self) -> f32 {
        self.end
    }

    /// Samples the tween at the given frame time.
    ///
    /// Returns the interpolated position and whether the tween finished; a
    /// finished tween reports exactly its target.
    pub fn value_at(&mut self, frame_time_nanos: u64) -> (f32, bool) {
        let origin = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(origin);
        let duration = self.duration_nanos.max(1);
        let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
        if linear >= 1.0 {
            return (self.end, true);
        }
        let progress = self.easing.transform(linear);
        (self.start + (self.end - self.start) * progress, false)
    }
}
