//! Shared gesture thresholds.
//!
//! Values are in logical pixels and match common platform conventions, so a
//! drag that starts over the sheet and a drag that starts over its scrolling
//! content escalate at the same distance.

/// Touch slop in logical pixels.
///
/// Pointer movement below this distance from the initial press position is
/// treated as jitter; crossing it escalates the gesture to a drag capture.
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum release velocity in logical pixels per second.
///
/// Velocities reported by [`crate::DragSession::vertical_velocity`] are
/// clamped to this magnitude before release policy runs.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
