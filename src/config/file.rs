//! Stored settings files.
//!
//! The host stores settings as JSON; TOML is accepted for hand-written files.

use std::path::Path;

use crate::settings::{PartialSettings, defaults};

use super::ConfigError;

/// Format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl SettingsFormat {
    /// Detects the format from the file extension: `.toml` is TOML,
    /// anything else JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Loads partial settings from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<PartialSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_settings(&content, SettingsFormat::from_path(path))
}

/// Parses partial settings from a string.
///
/// # Errors
///
/// Returns an error if the content is not valid in the given format.
pub fn parse_settings(content: &str, format: SettingsFormat) -> Result<PartialSettings, ConfigError> {
    match format {
        SettingsFormat::Toml => Ok(PartialSettings::from_toml(content)?),
        SettingsFormat::Json => Ok(PartialSettings::from_json(content)?),
    }
}

/// Generates a TOML settings file holding the defaults, with comments.
#[must_use]
pub fn default_settings_template() -> String {
    format!(
        r#"# Smooth Streaming output settings

# Destination protocol: "http://" or "https://"
protocol = "{protocol}"

# Host with optional port and path, without scheme
# address = "smooth.example.com/live/channel.isml"

# Credentials are embedded into the address when set
# username = ""
# password = ""

[options]
# Language written into the audio stream metadata
audio_language = "{audio_language}"

# Fragmentation (microseconds / bytes); "" leaves an option unset
frag_duration = {frag_duration}
# frag_size = 500000
# min_frag_duration = 1000000

# Muxer flags, appended after "+isml"
# Choices: {choices}
movflags = [{movflags}]

# write_tmcd = ""
write_btrt = "{write_btrt}"
# write_prft = "wallclock"

empty_hdlr_name = false
movie_timescale = {movie_timescale}
video_track_timescale = {video_track_timescale}
"#,
        protocol = defaults::PROTOCOL,
        audio_language = defaults::AUDIO_LANGUAGE,
        frag_duration = defaults::FRAG_DURATION,
        choices = defaults::MOVFLAG_CHOICES.join(", "),
        movflags = defaults::MOVFLAGS.map(|flag| format!("\"{flag}\"")).join(", "),
        write_btrt = defaults::WRITE_BTRT,
        movie_timescale = defaults::MOVIE_TIMESCALE,
        video_track_timescale = defaults::VIDEO_TRACK_TIMESCALE,
    )
}

/// Writes the default settings template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_settings(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_settings_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
