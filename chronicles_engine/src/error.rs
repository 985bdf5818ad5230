//! Engine error types.

use chronicles_data::LocationId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The input stream ended while a prompt was waiting for a number.
    #[error("input closed while waiting for a selection")]
    InputClosed,
    #[error("terminal input failed: {0}")]
    Input(#[from] std::io::Error),
    /// Catalog guard; the compiled-in catalog makes this unreachable.
    #[error("location '{0}' is not defined in the catalog")]
    MissingLocation(LocationId),
    #[error("location '{location}' has no riddle or item in slot {slot}")]
    MissingRiddle { location: LocationId, slot: usize },
}
