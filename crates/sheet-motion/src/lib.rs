//! The two-state bottom sheet behavior: a sheet that rests at two distinct
//! collapsed heights, can expand to fill its parent, and optionally hides
//! below the bottom edge.
//!
//! [`SheetMotionController`] is the whole state machine. It consumes pointer
//! events, nested-scroll deltas, and layout passes from the host, owns the
//! sheet's geometry, and reports state changes and slide offsets through a
//! single [`SheetCallback`] observer. Rendering, measurement, and event
//! routing stay with the host.

mod callback;
mod controller;
mod error;
mod saved;
mod state;
mod view;

pub use callback::SheetCallback;
pub use controller::{
    PeekHeight, SheetConfig, SheetMotionController, HIDE_FRICTION, HIDE_THRESHOLD,
    MIN_PEEK_HEIGHT, PEEK_HEIGHT_AUTO,
};
pub use error::SheetError;
pub use saved::SavedGeometry;
pub use state::SheetState;
pub use view::{NestedScrollChild, SheetView};
