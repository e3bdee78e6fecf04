//! Output compiler.

use serde::Serialize;

use crate::settings::SettingsRecord;

use super::{OutputError, build_address, serialize_options};

/// Destination address and engine arguments for one output target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    /// Destination URL, with credentials embedded when set
    pub address: String,

    /// Ordered engine arguments
    pub options: Vec<String>,
}

impl OutputSpec {
    /// Returns the arguments followed by the address, the order in which
    /// the engine expects them on its command line.
    #[must_use]
    pub fn to_command_args(&self) -> Vec<String> {
        let mut args = self.options.clone();
        args.push(self.address.clone());
        args
    }
}

/// Compiles a settings record into an output specification.
///
/// # Errors
///
/// Returns [`OutputError::MalformedAddress`] if credentials are set and the
/// destination is not a valid URL.
pub fn compile(record: &SettingsRecord) -> Result<OutputSpec, OutputError> {
    let options = serialize_options(&record.options);
    let address = build_address(
        record.protocol.as_str(),
        &record.address,
        &record.username,
        &record.password,
    )?;

    tracing::debug!(
        protocol = %record.protocol,
        address = %record.address,
        credentials = record.has_credentials(),
        args = options.len(),
        "Compiled output"
    );

    Ok(OutputSpec { address, options })
}

/// Compiles the list of outputs for a settings record.
///
/// This service always produces exactly one output target.
///
/// # Errors
///
/// Returns an error under the same conditions as [`compile`].
pub fn compile_outputs(record: &SettingsRecord) -> Result<Vec<OutputSpec>, OutputError> {
    compile(record).map(|spec| vec![spec])
}
