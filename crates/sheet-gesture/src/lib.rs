//! Single-pointer gesture primitives: pointer events, velocity estimation,
//! and a small drag-session tracker with touch-slop detection.
//!
//! Nothing in this crate knows about sheets; it only turns raw pointer
//! samples into deltas and release velocities.

mod constants;
mod drag;
mod geometry;
mod pointer;
mod velocity;

pub use constants::{MAX_FLING_VELOCITY, TOUCH_SLOP};
pub use drag::DragSession;
pub use geometry::{Bounds, Point};
pub use pointer::{PointerEvent, PointerEventKind, PointerId};
pub use velocity::VelocityTracker;
