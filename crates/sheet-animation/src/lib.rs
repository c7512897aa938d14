//! Frame-tick settle interpolation.
//!
//! The sheet never runs its own clock: the host's frame scheduler supplies a
//! timestamp per tick and a [`SettleTween`] answers with the interpolated
//! position until it reaches its target.

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::SettleTween;

/// Default settle duration in milliseconds.
pub const SETTLE_DURATION_MS: u64 = 300;
