//! Presentation layer on top of [`sheet_motion`].
//!
//! [`SheetPresentationCoordinator`] listens to a
//! [`sheet_motion::SheetMotionController`] and derives everything the host UI
//! shows around the sheet: padding and parallax translation for the companion
//! content (typically a map), translation for items floating above the sheet,
//! and a status-bar-style chrome color and icon-contrast transition near full
//! expansion. The host implements [`PresentationSink`] and applies the values.

mod color;
mod coordinator;
mod sink;

pub use color::Color;
pub use coordinator::{CoordinatorBuilder, SheetPresentationCoordinator};
pub use sink::{FloatingItem, PresentationSink};
