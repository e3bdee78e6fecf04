//! Error types for settings edits.

use thiserror::Error;

/// Error type for applying a field edit to a settings record.
///
/// Edits are rejected as a whole; the record the edit was applied to
/// is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// The protocol is not one of the supported schemes.
    #[error("Invalid protocol '{value}': expected http:// or https://")]
    InvalidProtocol {
        /// The rejected value
        value: String,
    },

    /// A numeric option received text that is neither empty nor a number.
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber {
        /// Name of the option
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// The value kind does not fit the field (e.g. a list for `address`).
    #[error("Unexpected value for {field}: expected {expected}")]
    UnexpectedValue {
        /// Name of the field
        field: String,
        /// Description of the accepted kind
        expected: &'static str,
    },

    /// The field name belongs to a group of fields and cannot take a value.
    #[error("Field '{field}' cannot be edited directly")]
    ReservedField {
        /// Name of the field
        field: String,
    },
}
