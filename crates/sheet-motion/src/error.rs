use thiserror::Error;

/// Errors surfaced to the host.
///
/// Most misuse degrades to a deferred or logged no-op instead; these are the
/// cases where the contract requires a synchronous failure.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The persisted-state blob did not decode into [`crate::SavedGeometry`].
    #[error("malformed persisted sheet state: {0}")]
    MalformedSavedState(#[from] ron::error::SpannedError),

    /// Encoding [`crate::SavedGeometry`] failed.
    #[error("failed to encode sheet state: {0}")]
    EncodeSavedState(#[from] ron::Error),

    /// The view has no bound controller; it is not hosted as a sheet.
    #[error("view is not associated with a sheet motion controller")]
    NoController,
}
