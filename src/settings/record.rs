//! The canonical, fully populated settings record.

use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::EditError;
use super::defaults;

/// Destination protocol of the Smooth Streaming server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// Plain HTTP
    #[serde(rename = "http://")]
    Http,
    /// HTTP over TLS
    #[serde(rename = "https://")]
    Https,
}

impl Protocol {
    /// Returns the scheme prefix, including the `://` separator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http://",
            Self::Https => "https://",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = EditError;

    /// Accepts the prefix form (`https://`) as well as the bare scheme (`https`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http://" | "http" => Ok(Self::Http),
            "https://" | "https" => Ok(Self::Https),
            _ => Err(EditError::InvalidProtocol {
                value: s.to_string(),
            }),
        }
    }
}

/// How an option value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Free text, empty means unset
    Text,
    /// Non-negative integer, `None` means unset
    Number,
    /// Ordered list of muxer flags
    Flags,
    /// Boolean switch
    Toggle,
}

/// The fixed set of option keys.
///
/// The variant order is the declaration order of the defaults template and
/// therefore the order in which arguments are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// `audio_language`
    AudioLanguage,
    /// `frag_duration`
    FragDuration,
    /// `frag_size`
    FragSize,
    /// `min_frag_duration`
    MinFragDuration,
    /// `movflags`
    Movflags,
    /// `write_tmcd`
    WriteTmcd,
    /// `write_btrt`
    WriteBtrt,
    /// `write_prft`
    WritePrft,
    /// `empty_hdlr_name`
    EmptyHdlrName,
    /// `movie_timescale`
    MovieTimescale,
    /// `video_track_timescale`
    VideoTrackTimescale,
}

impl OptionKey {
    /// All keys in declaration order.
    pub const ALL: [Self; 11] = [
        Self::AudioLanguage,
        Self::FragDuration,
        Self::FragSize,
        Self::MinFragDuration,
        Self::Movflags,
        Self::WriteTmcd,
        Self::WriteBtrt,
        Self::WritePrft,
        Self::EmptyHdlrName,
        Self::MovieTimescale,
        Self::VideoTrackTimescale,
    ];

    /// Returns the key as it appears in stored settings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AudioLanguage => "audio_language",
            Self::FragDuration => "frag_duration",
            Self::FragSize => "frag_size",
            Self::MinFragDuration => "min_frag_duration",
            Self::Movflags => "movflags",
            Self::WriteTmcd => "write_tmcd",
            Self::WriteBtrt => "write_btrt",
            Self::WritePrft => "write_prft",
            Self::EmptyHdlrName => "empty_hdlr_name",
            Self::MovieTimescale => "movie_timescale",
            Self::VideoTrackTimescale => "video_track_timescale",
        }
    }

    /// Returns how values for this key are stored.
    #[must_use]
    pub const fn kind(self) -> OptionKind {
        match self {
            Self::AudioLanguage | Self::WriteTmcd | Self::WriteBtrt | Self::WritePrft => {
                OptionKind::Text
            }
            Self::FragDuration
            | Self::FragSize
            | Self::MinFragDuration
            | Self::MovieTimescale
            | Self::VideoTrackTimescale => OptionKind::Number,
            Self::Movflags => OptionKind::Flags,
            Self::EmptyHdlrName => OptionKind::Toggle,
        }
    }

    /// Looks up a key by its stored name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed view of one option value, tagged by its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue<'a> {
    /// Text option
    Text(&'a str),
    /// Numeric option
    Number(Option<u64>),
    /// Flag list option
    Flags(&'a [String]),
    /// Boolean option
    Toggle(bool),
}

/// Muxer options with every key of the fixed set present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsGroup {
    /// Language tag written into the audio stream metadata
    pub audio_language: String,

    /// Fragment duration in microseconds
    #[serde(
        serialize_with = "number_or_empty::serialize",
        deserialize_with = "number_or_empty::field::frag_duration"
    )]
    pub frag_duration: Option<u64>,

    /// Maximum fragment size in bytes
    #[serde(
        serialize_with = "number_or_empty::serialize",
        deserialize_with = "number_or_empty::field::frag_size"
    )]
    pub frag_size: Option<u64>,

    /// Minimum fragment duration in microseconds
    #[serde(
        serialize_with = "number_or_empty::serialize",
        deserialize_with = "number_or_empty::field::min_frag_duration"
    )]
    pub min_frag_duration: Option<u64>,

    /// Muxer flags, in order
    pub movflags: Vec<String>,

    /// `write_tmcd` mode
    pub write_tmcd: String,

    /// `write_btrt` mode
    pub write_btrt: String,

    /// `write_prft` mode
    pub write_prft: String,

    /// Write empty handler names
    pub empty_hdlr_name: bool,

    /// Movie timescale
    #[serde(
        serialize_with = "number_or_empty::serialize",
        deserialize_with = "number_or_empty::field::movie_timescale"
    )]
    pub movie_timescale: Option<u64>,

    /// Video track timescale
    #[serde(
        serialize_with = "number_or_empty::serialize",
        deserialize_with = "number_or_empty::field::video_track_timescale"
    )]
    pub video_track_timescale: Option<u64>,

    /// Caller-supplied keys outside the fixed set. Kept, never serialized
    /// into arguments.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for OptionsGroup {
    fn default() -> Self {
        Self {
            audio_language: defaults::AUDIO_LANGUAGE.to_string(),
            frag_duration: Some(defaults::FRAG_DURATION),
            frag_size: None,
            min_frag_duration: None,
            movflags: defaults::movflags(),
            write_tmcd: String::new(),
            write_btrt: defaults::WRITE_BTRT.to_string(),
            write_prft: String::new(),
            empty_hdlr_name: false,
            movie_timescale: Some(defaults::MOVIE_TIMESCALE),
            video_track_timescale: Some(defaults::VIDEO_TRACK_TIMESCALE),
            extra: BTreeMap::new(),
        }
    }
}

impl OptionsGroup {
    /// Returns the value stored for `key`.
    #[must_use]
    pub fn value(&self, key: OptionKey) -> OptionValue<'_> {
        match key {
            OptionKey::AudioLanguage => OptionValue::Text(&self.audio_language),
            OptionKey::FragDuration => OptionValue::Number(self.frag_duration),
            OptionKey::FragSize => OptionValue::Number(self.frag_size),
            OptionKey::MinFragDuration => OptionValue::Number(self.min_frag_duration),
            OptionKey::Movflags => OptionValue::Flags(&self.movflags),
            OptionKey::WriteTmcd => OptionValue::Text(&self.write_tmcd),
            OptionKey::WriteBtrt => OptionValue::Text(&self.write_btrt),
            OptionKey::WritePrft => OptionValue::Text(&self.write_prft),
            OptionKey::EmptyHdlrName => OptionValue::Toggle(self.empty_hdlr_name),
            OptionKey::MovieTimescale => OptionValue::Number(self.movie_timescale),
            OptionKey::VideoTrackTimescale => OptionValue::Number(self.video_track_timescale),
        }
    }

    /// Returns a mutable reference to a text option.
    pub(super) fn text_mut(&mut self, key: OptionKey) -> Option<&mut String> {
        match key {
            OptionKey::AudioLanguage => Some(&mut self.audio_language),
            OptionKey::WriteTmcd => Some(&mut self.write_tmcd),
            OptionKey::WriteBtrt => Some(&mut self.write_btrt),
            OptionKey::WritePrft => Some(&mut self.write_prft),
            _ => None,
        }
    }

    /// Returns a mutable reference to a numeric option.
    pub(super) fn number_mut(&mut self, key: OptionKey) -> Option<&mut Option<u64>> {
        match key {
            OptionKey::FragDuration => Some(&mut self.frag_duration),
            OptionKey::FragSize => Some(&mut self.frag_size),
            OptionKey::MinFragDuration => Some(&mut self.min_frag_duration),
            OptionKey::MovieTimescale => Some(&mut self.movie_timescale),
            OptionKey::VideoTrackTimescale => Some(&mut self.video_track_timescale),
            _ => None,
        }
    }
}

/// Complete settings for one Smooth Streaming output.
///
/// Built once from caller settings via [`SettingsRecord::merge`] and then
/// replaced edit by edit via [`SettingsRecord::with_edit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// Destination protocol
    pub protocol: Protocol,

    /// Host with optional port and path, without scheme
    pub address: String,

    /// Username embedded into the address when non-empty
    pub username: String,

    /// Password embedded into the address when non-empty
    pub password: String,

    /// Muxer options
    pub options: OptionsGroup,

    /// Caller-supplied top-level keys outside the known set
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            protocol: defaults::PROTOCOL,
            address: String::new(),
            username: String::new(),
            password: String::new(),
            options: OptionsGroup::default(),
            extra: BTreeMap::new(),
        }
    }
}

impl SettingsRecord {
    /// Returns true if either credential is set.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }
}

impl fmt::Display for SettingsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let credentials = if self.has_credentials() { "set" } else { "none" };

        write!(
            f,
            "Settings {{ destination: {}{}, credentials: {}, movflags: [{}], extra: {} }}",
            self.protocol,
            self.address,
            credentials,
            self.options.movflags.join(", "),
            self.extra.len() + self.options.extra.len(),
        )
    }
}

/// Parses the text form of a numeric option.
///
/// Blank text is the unset sentinel and yields `None`.
pub(crate) fn parse_number_text(text: &str) -> Result<Option<u64>, ParseIntError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Serde adapter for numeric options.
///
/// Stored settings hold these either as numbers or as strings, with the
/// empty string meaning unset. Unset values are written back as `""`.
pub(crate) mod number_or_empty {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(u64),
        Text(String),
    }

    #[allow(clippy::ref_option)] // signature fixed by serde's `serialize_with`
    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(number) => serializer.serialize_u64(*number),
            None => serializer.serialize_str(""),
        }
    }

    /// Deserializers bound to one option each, so that errors name the key.
    pub mod field {
        use serde::Deserializer;

        macro_rules! numeric_fields {
            ($($name:ident),* $(,)?) => {
                $(
                    pub fn $name<'de, D: Deserializer<'de>>(
                        deserializer: D,
                    ) -> Result<Option<u64>, D::Error> {
                        super::parse(stringify!($name), deserializer)
                    }
                )*
            };
        }

        numeric_fields!(
            frag_duration,
            frag_size,
            min_frag_duration,
            movie_timescale,
            video_track_timescale,
        );
    }

    fn parse<'de, D: Deserializer<'de>>(
        field: &str,
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        match Option::<NumberOrText>::deserialize(deserializer)? {
            None => Ok(None),
            Some(NumberOrText::Number(number)) => Ok(Some(number)),
            Some(NumberOrText::Text(text)) => {
                super::parse_number_text(&text).map_err(|e| {
                    D::Error::custom(format!("invalid number for {field}: '{text}' ({e})"))
                })
            }
        }
    }
}
