//! Error types for the settings form.

use thiserror::Error;

use crate::output::OutputError;
use crate::settings::EditError;

/// Error type for handling a form edit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// The edit was rejected; the settings are unchanged.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// The edit was applied but the settings do not compile.
    ///
    /// No change notification is sent for such an edit.
    #[error(transparent)]
    Output(#[from] OutputError),
}
