//! Tests for resolved configuration.

use super::ConfigError;
use super::cli::{Cli, OutputFormat};
use super::file::{SettingsFormat, parse_settings};
use super::resolved::ResolvedConfig;
use crate::settings::{EditError, PartialSettings, Protocol, SettingsRecord};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["smooth-sink"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse JSON settings
fn stored(content: &str) -> PartialSettings {
    parse_settings(content, SettingsFormat::Json).unwrap()
}

mod precedence {
    use super::*;

    #[test]
    fn defaults_without_sources() {
        let config = ResolvedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(config.settings, SettingsRecord::default());
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.verbose);
    }

    #[test]
    fn stored_values_used_when_cli_silent() {
        let stored = stored(r#"{"protocol": "http://", "address": "stored/app"}"#);

        let config = ResolvedConfig::from_raw(&cli(&[]), Some(&stored)).unwrap();

        assert_eq!(config.settings.protocol, Protocol::Http);
        assert_eq!(config.settings.address, "stored/app");
    }

    #[test]
    fn cli_overrides_stored_values() {
        let stored = stored(r#"{"protocol": "http://", "address": "stored/app", "username": "alice"}"#);

        let config = ResolvedConfig::from_raw(
            &cli(&["--protocol", "https", "--address", "cli/app"]),
            Some(&stored),
        )
        .unwrap();

        assert_eq!(config.settings.protocol, Protocol::Https);
        assert_eq!(config.settings.address, "cli/app");
        assert_eq!(config.settings.username, "alice");
    }

    #[test]
    fn option_override_beats_stored_option() {
        let stored = stored(r#"{"options": {"audio_language": "fre", "frag_size": 100}}"#);

        let config = ResolvedConfig::from_raw(
            &cli(&["--option", "audio_language=ger"]),
            Some(&stored),
        )
        .unwrap();

        assert_eq!(config.settings.options.audio_language, "ger");
        assert_eq!(config.settings.options.frag_size, Some(100));
    }

    #[test]
    fn later_override_wins() {
        let config = ResolvedConfig::from_raw(
            &cli(&["--option", "frag_size=1", "--option", "frag_size=2"]),
            None,
        )
        .unwrap();

        assert_eq!(config.settings.options.frag_size, Some(2));
    }

    #[test]
    fn stored_partial_is_not_modified() {
        let stored = stored(r#"{"address": "stored/app"}"#);
        let before = stored.clone();

        let _ = ResolvedConfig::from_raw(&cli(&["--address", "cli/app"]), Some(&stored)).unwrap();

        assert_eq!(stored, before);
    }
}

mod overrides {
    use super::*;

    #[test]
    fn boolean_override_sets_explicitly() {
        let config = ResolvedConfig::from_raw(
            &cli(&["--option", "empty_hdlr_name=true", "--option", "empty_hdlr_name=true"]),
            None,
        )
        .unwrap();

        assert!(config.settings.options.empty_hdlr_name);
    }

    #[test]
    fn movflags_override_replaces_list() {
        let config = ResolvedConfig::from_raw(
            &cli(&["--option", "movflags=skip_sidx,frag_keyframe"]),
            None,
        )
        .unwrap();

        assert_eq!(
            config.settings.options.movflags,
            vec!["skip_sidx", "frag_keyframe"]
        );
    }

    #[test]
    fn empty_value_unsets_number() {
        let config =
            ResolvedConfig::from_raw(&cli(&["--option", "movie_timescale="]), None).unwrap();

        assert_eq!(config.settings.options.movie_timescale, None);
    }

    #[test]
    fn missing_equals_is_malformed() {
        let result = ResolvedConfig::from_raw(&cli(&["--option", "frag_size"]), None);

        assert!(matches!(result, Err(ConfigError::MalformedOverride { .. })));
    }

    #[test]
    fn empty_key_is_malformed() {
        let result = ResolvedConfig::from_raw(&cli(&["--option", "=5"]), None);

        assert!(matches!(result, Err(ConfigError::MalformedOverride { .. })));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = ResolvedConfig::from_raw(&cli(&["--option", "bitrate=5"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::UnknownOption { ref name }) if name == "bitrate"
        ));
    }

    #[test]
    fn top_level_key_is_not_an_option() {
        let result = ResolvedConfig::from_raw(&cli(&["--option", "address=host"]), None);

        assert!(matches!(result, Err(ConfigError::UnknownOption { .. })));
    }

    #[test]
    fn invalid_number_is_rejected() {
        let result = ResolvedConfig::from_raw(&cli(&["--option", "frag_size=big"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidOverride {
                source: EditError::InvalidNumber { .. },
                ..
            })
        ));
    }
}

mod loading {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn load_reads_settings_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"address": "file/app"}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ResolvedConfig::load(&cli(&["--settings", &path])).unwrap();

        assert_eq!(config.settings.address, "file/app");
    }

    #[test]
    fn load_without_settings_uses_defaults() {
        let config = ResolvedConfig::load(&cli(&["--address", "host/app"])).unwrap();

        assert_eq!(config.settings.address, "host/app");
    }

    #[test]
    fn load_missing_file_fails() {
        let result = ResolvedConfig::load(&cli(&["--settings", "/nonexistent/smooth.json"]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn display_hides_credentials() {
        let config = ResolvedConfig::from_raw(
            &cli(&["--address", "host/app", "--password", "secret"]),
            None,
        )
        .unwrap();

        let text = config.to_string();
        assert!(text.contains("https://host/app"));
        assert!(!text.contains("secret"));
    }
}
