use serde::{Deserialize, Serialize};

/// Resting and transient positions of the sheet. Exactly one is active.
///
/// `Dragging` and `Settling` are entered by the machine only; external
/// transition requests are limited to the three stable states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SheetState {
    Dragging,
    Settling,
    Expanded,
    Collapsed,
    Hidden,
}

impl SheetState {
    /// Whether this state never persists: every path into it re-enters one
    /// of the stable states.
    pub fn is_transient(self) -> bool {
        matches!(self, SheetState::Dragging | SheetState::Settling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dragging_and_settling_are_transient() {
        assert!(SheetState::Dragging.is_transient());
        assert!(SheetState::Settling.is_transient());
        assert!(!SheetState::Expanded.is_transient());
        assert!(!SheetState::Collapsed.is_transient());
        assert!(!SheetState::Hidden.is_transient());
    }
}
