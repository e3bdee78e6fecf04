//! Settings form controller.
//!
//! The form owns the single settings record of one output. Every edit
//! produces a new record through the pure edit functions of
//! [`crate::settings`], recompiles the output and hands both to the
//! [`ChangeNotifier`].

use std::fmt;

use crate::output::{OutputError, OutputSpec, compile, compile_outputs};
use crate::settings::{EditValue, Field, OptionKind, PartialSettings, SettingsRecord};

use super::FormError;

/// Receives the compiled outputs and the settings after every edit.
pub trait ChangeNotifier {
    /// Called once per successfully compiled edit.
    fn on_change(&mut self, outputs: &[OutputSpec], settings: &SettingsRecord);
}

impl<F> ChangeNotifier for F
where
    F: FnMut(&[OutputSpec], &SettingsRecord),
{
    fn on_change(&mut self, outputs: &[OutputSpec], settings: &SettingsRecord) {
        self(outputs, settings);
    }
}

/// A notifier that discards every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl ChangeNotifier for NoopNotifier {
    fn on_change(&mut self, _outputs: &[OutputSpec], _settings: &SettingsRecord) {}
}

/// Properties passed by the host when creating the form.
///
/// `skills`, `metadata` and `streams` describe the host's inputs; they are
/// accepted for interface compatibility and do not influence the output.
pub struct ServiceProps {
    /// Stored settings, possibly partial
    pub settings: PartialSettings,
    /// Capabilities reported by the engine
    pub skills: serde_json::Value,
    /// Host metadata
    pub metadata: serde_json::Value,
    /// Input streams
    pub streams: Vec<serde_json::Value>,
    /// Change callback
    pub on_change: Box<dyn ChangeNotifier>,
}

impl ServiceProps {
    /// Creates properties with empty settings and a no-op callback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: PartialSettings::default(),
            skills: serde_json::json!({}),
            metadata: serde_json::json!({}),
            streams: Vec::new(),
            on_change: Box::new(NoopNotifier),
        }
    }

    /// Sets the stored settings.
    #[must_use]
    pub fn with_settings(mut self, settings: PartialSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the change callback.
    #[must_use]
    pub fn with_on_change(mut self, notifier: impl ChangeNotifier + 'static) -> Self {
        self.on_change = Box::new(notifier);
        self
    }
}

impl Default for ServiceProps {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProps")
            .field("settings", &self.settings)
            .field("skills", &self.skills)
            .field("metadata", &self.metadata)
            .field("streams", &self.streams.len())
            .finish_non_exhaustive()
    }
}

/// Form controller holding the settings of one Smooth Streaming output.
pub struct SmoothForm {
    settings: SettingsRecord,
    notifier: Box<dyn ChangeNotifier>,
}

impl SmoothForm {
    /// Creates the form, merging the stored settings with the defaults.
    #[must_use]
    pub fn new(props: ServiceProps) -> Self {
        Self {
            settings: SettingsRecord::merge(Some(&props.settings)),
            notifier: props.on_change,
        }
    }

    /// Returns the current settings.
    #[must_use]
    pub const fn settings(&self) -> &SettingsRecord {
        &self.settings
    }

    /// Consumes the form and returns its settings.
    #[must_use]
    pub fn into_settings(self) -> SettingsRecord {
        self.settings
    }

    /// Compiles the current settings without notifying.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is malformed.
    pub fn output(&self) -> Result<OutputSpec, OutputError> {
        compile(&self.settings)
    }

    /// Handles one edit event from the form.
    ///
    /// Boolean options are edited through a checkbox: the payload is ignored
    /// and the current value is inverted. Any other field takes `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Edit`] if the value is rejected; the settings
    /// stay unchanged. Returns [`FormError::Output`] if the new settings do
    /// not compile; the settings are kept so editing can continue, but the
    /// notifier is not called.
    pub fn handle_change(&mut self, field: &Field, value: EditValue) -> Result<(), FormError> {
        let next = match field {
            Field::Option(key) if key.kind() == OptionKind::Toggle => {
                self.settings.with_toggled(*key)?
            }
            _ => self.settings.with_edit(field, value)?,
        };

        self.settings = next;
        tracing::debug!(field = %field, "Applied settings edit");

        let outputs = compile_outputs(&self.settings).inspect_err(|e| {
            tracing::warn!(field = %field, "Settings do not compile: {e}");
        })?;

        self.notifier.on_change(&outputs, &self.settings);
        Ok(())
    }
}

impl fmt::Debug for SmoothForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmoothForm")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
