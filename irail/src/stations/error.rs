//! Station resolution error types.

use std::io;

use crate::api::IrailError;

/// Errors that can occur while resolving a station name.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Station search returned nothing
    #[error("No station like {0} found.")]
    NotFound(String),

    /// Station search request failed
    #[error(transparent)]
    Api(#[from] IrailError),

    /// User closed the input while choosing
    #[error("station choice aborted")]
    Aborted,

    /// Terminal I/O failed
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}
