//! Release-velocity estimation for the sheet drag gesture.
//!
//! Impulse-strategy 1-D tracker: velocity is derived from the kinetic energy
//! the recent samples would have imparted, which is robust against the uneven
//! sample spacing real pointer streams have.

/// Ring buffer size for position samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms contribute to the estimate.
const HORIZON_MS: i64 = 100;

/// A gap longer than this between samples means the pointer stopped moving.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1-D velocity tracker over absolute positions.
///
/// Feed it one position per pointer event and ask for the velocity at
/// release time:
///
/// ```
/// # use sheet_gesture::VelocityTracker;
/// let mut tracker = VelocityTracker::new();
/// tracker.add_sample(0, 700.0);
/// tracker.add_sample(16, 680.0);
/// tracker.add_sample(32, 660.0);
/// assert!(tracker.calculate_velocity() < 0.0); // moving up
/// ```
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records a position sample at the given time (milliseconds).
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in units/second.
    ///
    /// Returns 0.0 with fewer than two usable samples, or when the pointer
    /// held still long enough to be considered stopped.
    pub fn calculate_velocity(&self) -> f32 {
        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let mut current = self.index;
        while let Some(sample) = self.samples[current] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            // Anything older than the horizon is stale, and a pause before
            // release means the motion that preceded it no longer counts.
            if age > HORIZON_MS as f32 || age > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[count] = sample.position;
            times[count] = -age;
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
            current = if current == 0 { HISTORY_SIZE - 1 } else { current - 1 };
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions, &times, count) * 1000.0
    }

    /// Velocity in units/second, clamped to `max_velocity` magnitude.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Drops all recorded samples.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Impulse-strategy velocity over samples ordered newest-first.
///
/// Work is accumulated from the oldest pair forward; velocity falls out of
/// E = m v^2 / 2 with unit mass.
fn impulse_velocity(positions: &[f32; HISTORY_SIZE], times: &[f32; HISTORY_SIZE], count: usize) -> f32 {
    if count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let oldest = count - 1;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let delta = positions[i - 1] - positions[i];
        let v_curr = delta / (next_time - current_time);
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

#[inline]
fn energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        let tracker = VelocityTracker::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn single_sample_returns_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, 700.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_velocity_is_recovered() {
        let mut tracker = VelocityTracker::new();
        // 100px per 10ms = 10_000 px/s
        tracker.add_sample(0, 0.0);
        tracker.add_sample(10, 100.0);
        tracker.add_sample(20, 200.0);
        tracker.add_sample(30, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10_000.0).abs() < 1_000.0,
            "expected ~10000, got {velocity}"
        );
    }

    #[test]
    fn upward_motion_is_negative() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, 900.0);
        tracker.add_sample(10, 800.0);
        tracker.add_sample(20, 700.0);
        assert!(tracker.calculate_velocity() < 0.0);
    }

    #[test]
    fn velocity_is_clamped() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(1, 10_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

        tracker.reset();
        tracker.add_sample(0, 10_000.0);
        tracker.add_sample(1, 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
    }

    #[test]
    fn pause_before_release_reads_as_stopped() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(10, 100.0);
        tracker.add_sample(10 + ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn reset_drops_samples() {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(10, 100.0);
        tracker.reset();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }
}
