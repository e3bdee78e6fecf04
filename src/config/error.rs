//! Error types for configuration loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::settings::EditError;

/// Error type for configuration operations.
///
/// Covers errors from reading, parsing and applying command-line overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to read settings file '{}': {source}", path.display())]
    FileRead {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the settings file (for init command).
    #[error("Failed to write settings file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML settings.
    #[error("Failed to parse TOML settings: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to parse JSON settings.
    #[error("Failed to parse JSON settings: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Option override is not in 'key=value' format.
    #[error("Invalid option format '{value}': expected 'key=value'")]
    MalformedOverride {
        /// The invalid override string
        value: String,
    },

    /// Option override names a key outside the fixed option set.
    #[error("Unknown option '{name}'")]
    UnknownOption {
        /// The unknown key
        name: String,
    },

    /// Option override value was rejected.
    #[error("Invalid option '{value}': {source}")]
    InvalidOverride {
        /// The override string
        value: String,
        /// Underlying edit error
        #[source]
        source: EditError,
    },
}
