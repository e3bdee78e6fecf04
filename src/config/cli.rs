//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::settings::Protocol;

/// Smooth Streaming output compiler
///
/// Compiles Smooth Streaming output settings into a destination address
/// and the media engine arguments for it.
#[derive(Debug, Parser)]
#[command(name = "smooth-sink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: compile)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a stored settings file (.toml, otherwise JSON)
    #[arg(long, short, global = true)]
    pub settings: Option<PathBuf>,

    /// Destination protocol
    #[arg(long, value_enum, global = true)]
    pub protocol: Option<ProtocolArg>,

    /// Destination host with optional port and path, without scheme
    #[arg(long, global = true)]
    pub address: Option<String>,

    /// Username embedded into the destination address
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password embedded into the destination address
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Muxer option in 'key=value' format (can be specified multiple times)
    #[arg(long = "option", value_name = "KEY=VALUE", global = true)]
    pub options: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for smooth-sink
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile the settings into an output specification
    Compile,

    /// Generate a settings file with the default values
    Init {
        /// Output path for the settings file
        #[arg(long, short, default_value = "smooth-sink.toml")]
        output: PathBuf,
    },

    /// Print the service descriptor as JSON
    Describe,
}

/// Protocol argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    /// Plain HTTP
    #[value(name = "http")]
    Http,
    /// HTTP over TLS
    #[value(name = "https")]
    Https,
}

impl From<ProtocolArg> for Protocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Http => Self::Http,
            ProtocolArg::Https => Self::Https,
        }
    }
}

/// How compiled outputs are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Output list as pretty-printed JSON
    #[default]
    Json,
    /// Engine arguments followed by the address, one per line
    Args,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns true if this is the describe command.
    #[must_use]
    pub const fn is_describe(&self) -> bool {
        matches!(self.command, Some(Command::Describe))
    }
}
