//! Error types for output compilation.

use thiserror::Error;

/// Error type for compiling an output.
///
/// Compilation is all-or-nothing: on error no output is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputError {
    /// The destination could not be parsed as a URL while embedding
    /// credentials into it.
    #[error("Malformed address '{address}': {reason}")]
    MalformedAddress {
        /// Protocol and address as concatenated, without credentials
        address: String,
        /// Reason for invalidity
        reason: String,
    },
}
