//! One pointer-down-to-release drag session.
//!
//! A session is created on pointer down and dropped on up/cancel. It owns the
//! velocity tracker for that gesture and the capture flag; the policy of
//! *when* to capture stays with the caller.

use crate::constants::TOUCH_SLOP;
use crate::geometry::Point;
use crate::pointer::{PointerEvent, PointerId};
use crate::velocity::VelocityTracker;

pub struct DragSession {
    pointer: PointerId,
    down: Point,
    last_y: f32,
    captured: bool,
    tracker: VelocityTracker,
}

impl DragSession {
    /// Starts a session from the pointer-down event.
    pub fn begin(event: &PointerEvent) -> Self {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(event.time_ms, event.position.y);
        Self {
            pointer: event.id,
            down: event.position,
            last_y: event.position.y,
            captured: false,
            tracker,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn down_position(&self) -> Point {
        self.down
    }

    /// Feeds an event into velocity estimation and returns the vertical
    /// delta since the previously observed event.
    ///
    /// Observing the same event twice is harmless: the second observation
    /// contributes a zero delta and a duplicate velocity sample.
    pub fn observe(&mut self, event: &PointerEvent) -> f32 {
        self.tracker.add_sample(event.time_ms, event.position.y);
        let dy = event.position.y - self.last_y;
        self.last_y = event.position.y;
        dy
    }

    /// Whether vertical movement from the down position has crossed the
    /// touch slop.
    pub fn slop_exceeded(&self, y: f32) -> bool {
        (y - self.down.y).abs() > TOUCH_SLOP
    }

    /// Marks the tracked target as captured; deltas from here on drag it.
    pub fn capture(&mut self) {
        if !self.captured {
            log::trace!("drag session captured pointer {}", self.pointer);
        }
        self.captured = true;
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Release velocity in px/sec, clamped to `max_velocity`. Negative is
    /// upward.
    pub fn vertical_velocity(&self, max_velocity: f32) -> f32 {
        self.tracker.calculate_velocity_with_max(max_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_FLING_VELOCITY;

    #[test]
    fn observe_returns_incremental_deltas() {
        let mut session = DragSession::begin(&PointerEvent::down(1, Point::new(50.0, 700.0), 0));
        assert_eq!(session.observe(&PointerEvent::moved(1, Point::new(50.0, 720.0), 10)), 20.0);
        assert_eq!(session.observe(&PointerEvent::moved(1, Point::new(50.0, 715.0), 20)), -5.0);
    }

    #[test]
    fn slop_requires_real_movement() {
        let session = DragSession::begin(&PointerEvent::down(1, Point::new(50.0, 700.0), 0));
        assert!(!session.slop_exceeded(700.0 + TOUCH_SLOP));
        assert!(session.slop_exceeded(700.0 + TOUCH_SLOP + 0.1));
        assert!(session.slop_exceeded(700.0 - TOUCH_SLOP - 0.1));
    }

    #[test]
    fn capture_is_sticky() {
        let mut session = DragSession::begin(&PointerEvent::down(1, Point::ZERO, 0));
        assert!(!session.is_captured());
        session.capture();
        session.capture();
        assert!(session.is_captured());
    }

    #[test]
    fn fling_down_reads_positive() {
        let mut session = DragSession::begin(&PointerEvent::down(1, Point::new(50.0, 600.0), 0));
        session.observe(&PointerEvent::moved(1, Point::new(50.0, 650.0), 10));
        session.observe(&PointerEvent::moved(1, Point::new(50.0, 700.0), 20));
        session.observe(&PointerEvent::up(1, Point::new(50.0, 750.0), 30));
        assert!(session.vertical_velocity(MAX_FLING_VELOCITY) > 0.0);
    }

    #[test]
    fn long_hold_before_release_has_no_fling() {
        let mut session = DragSession::begin(&PointerEvent::down(1, Point::new(50.0, 600.0), 0));
        session.observe(&PointerEvent::moved(1, Point::new(50.0, 700.0), 10));
        session.observe(&PointerEvent::up(1, Point::new(50.0, 700.0), 200));
        assert_eq!(session.vertical_velocity(MAX_FLING_VELOCITY), 0.0);
    }
}
