//! Resolved configuration after merging CLI and settings file sources.
//!
//! This module contains the final settings record that the binary compiles.
//! All overrides are applied and validated during construction.

use std::fmt;

use crate::settings::{EditValue, Field, PartialSettings, SettingsRecord};

use super::cli::{Cli, OutputFormat};
use super::error::ConfigError;
use super::file::load_settings;

/// Fully resolved configuration ready for compilation.
///
/// # Construction
///
/// Use [`ResolvedConfig::from_raw`] to create from CLI args and optional
/// stored settings. Values are resolved with the priority
/// CLI > settings file > built-in defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Complete settings record
    pub settings: SettingsRecord,

    /// How compiled outputs are printed
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (format: {:?})", self.settings, self.format)
    }
}

impl ResolvedConfig {
    /// Creates a resolved configuration from CLI arguments and optional stored settings.
    ///
    /// Top-level CLI flags replace the stored values before merging with the
    /// defaults. `--option` overrides are then applied in command-line order,
    /// so a later override of the same key wins.
    ///
    /// # Errors
    ///
    /// Returns an error if an option override is malformed, names an
    /// unknown key, or carries an invalid value.
    pub fn from_raw(cli: &Cli, stored: Option<&PartialSettings>) -> Result<Self, ConfigError> {
        let partial = Self::overlay_cli(cli, stored);
        let mut settings = SettingsRecord::merge(Some(&partial));

        for raw in &cli.options {
            settings = apply_override(&settings, raw)?;
        }

        Ok(Self {
            settings,
            format: cli.format,
            verbose: cli.verbose,
        })
    }

    /// Loads stored settings (if `cli.settings` is set) and resolves the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file cannot be read or parsed
    /// - An option override is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let stored = if let Some(ref path) = cli.settings {
            Some(load_settings(path)?)
        } else {
            None
        };

        Self::from_raw(cli, stored.as_ref())
    }

    fn overlay_cli(cli: &Cli, stored: Option<&PartialSettings>) -> PartialSettings {
        let mut partial = stored.cloned().unwrap_or_default();

        // CLI takes precedence
        if let Some(protocol) = cli.protocol {
            partial.protocol = Some(protocol.into());
        }
        if let Some(ref address) = cli.address {
            partial.address = Some(address.clone());
        }
        if let Some(ref username) = cli.username {
            partial.username = Some(username.clone());
        }
        if let Some(ref password) = cli.password {
            partial.password = Some(password.clone());
        }

        partial
    }
}

// Helper functions

fn apply_override(settings: &SettingsRecord, raw: &str) -> Result<SettingsRecord, ConfigError> {
    let (name, value) = parse_override(raw)?;

    let field = Field::parse(name);
    if !matches!(field, Field::Option(_)) {
        return Err(ConfigError::UnknownOption {
            name: name.to_string(),
        });
    }

    settings
        .with_edit(&field, EditValue::text(value))
        .map_err(|e| ConfigError::InvalidOverride {
            value: raw.to_string(),
            source: e,
        })
}

fn parse_override(raw: &str) -> Result<(&str, &str), ConfigError> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| ConfigError::MalformedOverride {
            value: raw.to_string(),
        })
}
