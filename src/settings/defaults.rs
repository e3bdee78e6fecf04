//! Default values for the settings record.
//!
//! Centralized constants so that the merger, the config template and the
//! tests agree on a single source.

use super::Protocol;

/// Default destination protocol.
pub const PROTOCOL: Protocol = Protocol::Https;

/// Default audio track language (ISO 639-2).
pub const AUDIO_LANGUAGE: &str = "eng";

/// Default fragment duration in microseconds.
pub const FRAG_DURATION: u64 = 2_000_000;

/// Default muxer flags, appended after the fixed `+isml` prefix.
pub const MOVFLAGS: [&str; 2] = ["frag_keyframe", "default_base_moof"];

/// Default `write_btrt` mode.
pub const WRITE_BTRT: &str = "auto";

/// Default movie timescale.
pub const MOVIE_TIMESCALE: u64 = 1000;

/// Default video track timescale.
///
/// Zero is an explicit value and is emitted, not treated as unset.
pub const VIDEO_TRACK_TIMESCALE: u64 = 0;

/// Muxer flags offered by the form's multi-select.
pub const MOVFLAG_CHOICES: [&str; 5] = [
    "frag_keyframe",
    "skip_sidx",
    "rtphint",
    "omit_tfhd_offset",
    "default_base_moof",
];

/// Default movflags as owned strings.
#[must_use]
pub fn movflags() -> Vec<String> {
    MOVFLAGS.iter().map(ToString::to_string).collect()
}
