//! Error types for the pincite library.

use std::io;
use thiserror::Error;

/// Result type alias for pincite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during citation resolution.
///
/// Absence of a match is never an error: resolvers return `Ok(None)`
/// when no candidate clears its acceptance threshold.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading source files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parse output for a source is not valid JSON or has an unexpected shape.
    #[error("malformed parse output for source '{source_id}': {message}")]
    MalformedParseOutput {
        /// Identifier of the source whose parse output failed to load.
        source_id: String,
        /// Underlying deserialization error.
        message: String,
    },
}
