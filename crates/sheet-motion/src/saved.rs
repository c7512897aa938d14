use serde::{Deserialize, Serialize};

use crate::error::SheetError;
use crate::state::SheetState;

/// The geometry that survives a destroy/recreate cycle.
///
/// `ancestor` carries the host's own saved-state blob, opaque to this crate.
/// Restoring a transient state is handled by
/// [`crate::SheetMotionController::restore_geometry`], which normalizes
/// `Dragging`/`Settling` to `Collapsed`; the blob itself round-trips all
/// fields exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGeometry {
    pub state: SheetState,
    pub peek_height_big: f32,
    pub peek_height_small: f32,
    pub initial_height: f32,
    pub ancestor: Option<String>,
}

impl SavedGeometry {
    /// Encodes into the blob handed to the host's lifecycle save.
    pub fn encode(&self) -> Result<String, SheetError> {
        Ok(ron::to_string(self)?)
    }

    /// Decodes a blob read back by the host.
    ///
    /// A blob of unexpected shape is a hard error; defaulting silently would
    /// hide corrupted host state.
    pub fn decode(blob: &str) -> Result<Self, SheetError> {
        Ok(ron::from_str(blob)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_fields() {
        let saved = SavedGeometry {
            state: SheetState::Expanded,
            peek_height_big: 300.0,
            peek_height_small: 150.0,
            initial_height: 300.0,
            ancestor: Some("host-blob".to_owned()),
        };
        let decoded = SavedGeometry::decode(&saved.encode().unwrap()).unwrap();
        assert_eq!(decoded, saved);
    }

    #[test]
    fn transient_state_round_trips_verbatim() {
        let saved = SavedGeometry {
            state: SheetState::Dragging,
            peek_height_big: 300.0,
            peek_height_small: 150.0,
            initial_height: 150.0,
            ancestor: None,
        };
        let decoded = SavedGeometry::decode(&saved.encode().unwrap()).unwrap();
        assert_eq!(decoded.state, SheetState::Dragging);
    }

    #[test]
    fn malformed_blob_is_a_decode_error() {
        let err = SavedGeometry::decode("(state: Sideways)").unwrap_err();
        assert!(matches!(err, SheetError::MalformedSavedState(_)));
    }
}
