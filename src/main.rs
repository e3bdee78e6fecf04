//! smooth-sink: Smooth Streaming output compiler
//!
//! Entry point for the smooth-sink application.

use smooth_sink::config::{Cli, Command, ResolvedConfig, write_default_settings};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Handle describe subcommand
    if cli.is_describe() {
        return handle_describe();
    }

    // Load and resolve configuration
    let config = match ResolvedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and compile
    setup_tracing(config.verbose);
    tracing::info!("{config}");

    match run::execute(&config, &mut std::io::stdout().lock()) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Compile error: {e}");
            exit_code::runtime_error(&e)
        }
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_settings(output) {
        Ok(()) => {
            println!("Settings template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `describe` subcommand.
fn handle_describe() -> ExitCode {
    match run::describe(&mut std::io::stdout().lock()) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::runtime_error(&e)
        }
    }
}
