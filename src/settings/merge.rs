//! Defaults merger.

use super::{OptionsGroup, PartialOptions, PartialSettings, SettingsRecord};

impl SettingsRecord {
    /// Builds a complete record by overlaying `partial` onto the defaults.
    ///
    /// Top-level fields and option fields are overlaid independently, so a
    /// caller providing a subset of option keys receives the rest from the
    /// defaults. Absent input is treated as an empty partial. The partial is
    /// never modified.
    #[must_use]
    pub fn merge(partial: Option<&PartialSettings>) -> Self {
        let Some(partial) = partial else {
            return Self::default();
        };

        let base = Self::default();

        Self {
            protocol: partial.protocol.unwrap_or(base.protocol),
            address: partial.address.clone().unwrap_or(base.address),
            username: partial.username.clone().unwrap_or(base.username),
            password: partial.password.clone().unwrap_or(base.password),
            options: OptionsGroup::merge(partial.options.as_ref()),
            extra: partial.extra.clone(),
        }
    }
}

impl OptionsGroup {
    /// Builds a complete options group by overlaying `partial` onto the defaults.
    #[must_use]
    pub fn merge(partial: Option<&PartialOptions>) -> Self {
        let base = Self::default();
        let Some(partial) = partial else {
            return base;
        };

        Self {
            audio_language: partial
                .audio_language
                .clone()
                .unwrap_or(base.audio_language),
            frag_duration: partial.frag_duration.unwrap_or(base.frag_duration),
            frag_size: partial.frag_size.unwrap_or(base.frag_size),
            min_frag_duration: partial.min_frag_duration.unwrap_or(base.min_frag_duration),
            movflags: partial.movflags.clone().unwrap_or(base.movflags),
            write_tmcd: partial.write_tmcd.clone().unwrap_or(base.write_tmcd),
            write_btrt: partial.write_btrt.clone().unwrap_or(base.write_btrt),
            write_prft: partial.write_prft.clone().unwrap_or(base.write_prft),
            empty_hdlr_name: partial.empty_hdlr_name.unwrap_or(base.empty_hdlr_name),
            movie_timescale: partial.movie_timescale.unwrap_or(base.movie_timescale),
            video_track_timescale: partial
                .video_track_timescale
                .unwrap_or(base.video_track_timescale),
            extra: partial.extra.clone(),
        }
    }
}
