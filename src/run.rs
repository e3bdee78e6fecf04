//! Application execution logic.
//!
//! Compiles the resolved settings and prints the outputs in the
//! requested format.

use std::io::Write;

use thiserror::Error;

use smooth_sink::config::{OutputFormat, ResolvedConfig};
use smooth_sink::output::{OutputError, OutputSpec, compile_outputs};
use smooth_sink::service::SmoothStreaming;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The settings do not compile.
    #[error(transparent)]
    Compile(#[from] OutputError),

    /// Failed to serialize the result.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the result.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl RunError {
    /// Returns the process exit status for this error.
    ///
    /// Compile failures exit with 2, failures to produce the output with 3.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Compile(_) => 2,
            Self::Serialize(_) | Self::Write(_) => 3,
        }
    }
}

/// Compiles the configured settings and writes the outputs to `out`.
///
/// # Errors
///
/// Returns an error if the settings do not compile or the result cannot
/// be written.
pub fn execute(config: &ResolvedConfig, out: &mut impl Write) -> Result<(), RunError> {
    let outputs = compile_outputs(&config.settings)?;
    tracing::debug!(outputs = outputs.len(), "Compiled settings");

    out.write_all(render(&outputs, config.format)?.as_bytes())?;
    Ok(())
}

/// Writes the service descriptor as pretty-printed JSON to `out`.
///
/// # Errors
///
/// Returns an error if the descriptor cannot be written.
pub fn describe(out: &mut impl Write) -> Result<(), RunError> {
    let json = serde_json::to_string_pretty(SmoothStreaming::descriptor())?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Renders compiled outputs in the given format.
fn render(outputs: &[OutputSpec], format: OutputFormat) -> Result<String, RunError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outputs)? + "\n"),
        OutputFormat::Args => Ok(outputs
            .iter()
            .flat_map(OutputSpec::to_command_args)
            .map(|arg| arg + "\n")
            .collect()),
    }
}
