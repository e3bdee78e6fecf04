//! Caller-supplied partial settings.
//!
//! Defines the shape of stored settings with serde. Every field is optional
//! so that any subset can be merged over the defaults.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::Protocol;
use super::record::number_or_empty;

/// Partial top-level settings as handed over by the host.
///
/// Unknown top-level keys are kept in `extra` and passed through the merge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialSettings {
    /// Destination protocol
    pub protocol: Option<Protocol>,

    /// Host with optional port and path
    pub address: Option<String>,

    /// Username for the destination
    pub username: Option<String>,

    /// Password for the destination
    pub password: Option<String>,

    /// Muxer options
    pub options: Option<PartialOptions>,

    /// Any other top-level keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Partial muxer options.
///
/// Numeric fields are doubly optional: the outer `Option` tells whether the
/// key was present at all, the inner one whether it holds a number or the
/// empty-string sentinel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialOptions {
    /// Audio track language
    pub audio_language: Option<String>,

    /// Fragment duration in microseconds
    #[serde(default, deserialize_with = "present::frag_duration")]
    pub frag_duration: Option<Option<u64>>,

    /// Maximum fragment size in bytes
    #[serde(default, deserialize_with = "present::frag_size")]
    pub frag_size: Option<Option<u64>>,

    /// Minimum fragment duration in microseconds
    #[serde(default, deserialize_with = "present::min_frag_duration")]
    pub min_frag_duration: Option<Option<u64>>,

    /// Muxer flags
    pub movflags: Option<Vec<String>>,

    /// `write_tmcd` mode
    pub write_tmcd: Option<String>,

    /// `write_btrt` mode
    pub write_btrt: Option<String>,

    /// `write_prft` mode
    pub write_prft: Option<String>,

    /// Write empty handler names
    pub empty_hdlr_name: Option<bool>,

    /// Movie timescale
    #[serde(default, deserialize_with = "present::movie_timescale")]
    pub movie_timescale: Option<Option<u64>>,

    /// Video track timescale
    #[serde(default, deserialize_with = "present::video_track_timescale")]
    pub video_track_timescale: Option<Option<u64>>,

    /// Any other option keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PartialSettings {
    /// Parses partial settings from JSON, the host's storage format.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a known field has the
    /// wrong type.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parses partial settings from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a known field has the
    /// wrong type.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Numeric option deserializers that also record presence of the key.
mod present {
    use serde::Deserializer;

    use super::number_or_empty::field;

    macro_rules! present_fields {
        ($($name:ident),* $(,)?) => {
            $(
                pub fn $name<'de, D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Option<Option<u64>>, D::Error> {
                    field::$name(deserializer).map(Some)
                }
            )*
        };
    }

    present_fields!(
        frag_duration,
        frag_size,
        min_frag_duration,
        movie_timescale,
        video_track_timescale,
    );
}
