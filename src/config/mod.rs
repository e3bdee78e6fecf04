//! Configuration layer for smooth-sink.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Stored settings files ([`load_settings`], [`SettingsFormat`])
//! - Resolved configuration ([`ResolvedConfig`])
//! - Settings file generation ([`write_default_settings`])
//!
//! # Priority
//!
//! Settings are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--protocol`, `--address`, `--username`,
//!    `--password` and `--option key=value`
//! 2. **Settings file** - Values from the file given with `--settings`
//! 3. **Built-in defaults** - See [`crate::settings::defaults`]
//!
//! `--option` values are applied as explicit edits: `empty_hdlr_name=true`
//! sets the flag, `movflags=frag_keyframe,skip_sidx` replaces the flag list
//! and an empty value (`frag_size=`) unsets a numeric option.

mod cli;
mod error;
mod file;
mod resolved;

#[cfg(test)]
mod resolved_tests;

pub use cli::{Cli, Command, OutputFormat, ProtocolArg};
pub use error::ConfigError;
pub use file::{
    SettingsFormat, default_settings_template, load_settings, parse_settings,
    write_default_settings,
};
pub use resolved::ResolvedConfig;
