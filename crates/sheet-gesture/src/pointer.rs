//! Pointer event types.
//!
//! The sheet is a single-finger interaction, so an event carries exactly one
//! pointer. Timestamps are milliseconds from an arbitrary monotonic origin;
//! only differences between them matter.

use crate::geometry::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer sample delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            id,
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(id: PointerId, position: Point, time_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(id: PointerId, position: Point, time_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Move, position, time_ms)
    }

    pub fn up(id: PointerId, position: Point, time_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Up, position, time_ms)
    }

    pub fn cancel(id: PointerId, position: Point, time_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Cancel, position, time_ms)
    }
}
