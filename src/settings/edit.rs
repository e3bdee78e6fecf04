//! Field edits applied to a settings record.
//!
//! Edits are pure: [`SettingsRecord::with_edit`] returns a new record and
//! leaves the original untouched, so the owner decides when to commit.

use std::fmt;

use super::record::{OptionKind, parse_number_text};
use super::{EditError, OptionKey, SettingsRecord};

/// Top-level record keys that cannot be edited as a single value.
///
/// Storing one of these in `extra` would duplicate a named key once the
/// record is serialized.
const RESERVED_NAMES: [&str; 1] = ["options"];

/// A field of the settings record addressed by its stored name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// `protocol`
    Protocol,
    /// `address`
    Address,
    /// `username`
    Username,
    /// `password`
    Password,
    /// One of the fixed option keys
    Option(OptionKey),
    /// Any other top-level key, stored verbatim
    Other(String),
}

impl Field {
    /// Resolves a stored field name.
    ///
    /// Option keys take precedence over top-level names; unknown names
    /// become [`Field::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if let Some(key) = OptionKey::from_name(name) {
            return Self::Option(key);
        }

        match name {
            "protocol" => Self::Protocol,
            "address" => Self::Address,
            "username" => Self::Username,
            "password" => Self::Password,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the stored field name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Protocol => "protocol",
            Self::Address => "address",
            Self::Username => "username",
            Self::Password => "password",
            Self::Option(key) => key.name(),
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<OptionKey> for Field {
    fn from(key: OptionKey) -> Self {
        Self::Option(key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload of an edit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditValue {
    /// Text input
    Text(String),
    /// Multi-select input
    List(Vec<String>),
    /// Checkbox input
    Flag(bool),
}

impl EditValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn into_json(self) -> serde_json::Value {
        match self {
            Self::Text(text) => serde_json::Value::String(text),
            Self::List(items) => serde_json::Value::from(items),
            Self::Flag(flag) => serde_json::Value::Bool(flag),
        }
    }
}

impl SettingsRecord {
    /// Returns a copy of this record with `field` set to `value`.
    ///
    /// Boolean options take the given value; use
    /// [`SettingsRecord::with_toggled`] for checkbox semantics.
    ///
    /// # Errors
    ///
    /// Returns an error if the value kind does not fit the field, the
    /// protocol is unsupported, or numeric text is not a number.
    pub fn with_edit(&self, field: &Field, value: EditValue) -> Result<Self, EditError> {
        let mut next = self.clone();

        match field {
            Field::Protocol => next.protocol = expect_text(field, value)?.parse()?,
            Field::Address => next.address = expect_text(field, value)?,
            Field::Username => next.username = expect_text(field, value)?,
            Field::Password => next.password = expect_text(field, value)?,
            Field::Option(key) => next.set_option(*key, value)?,
            Field::Other(name) if RESERVED_NAMES.contains(&name.as_str()) => {
                return Err(EditError::ReservedField {
                    field: name.clone(),
                });
            }
            Field::Other(name) => {
                next.extra.insert(name.clone(), value.into_json());
            }
        }

        Ok(next)
    }

    /// Returns a copy of this record with the boolean option `key` inverted.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a boolean option.
    pub fn with_toggled(&self, key: OptionKey) -> Result<Self, EditError> {
        let mut next = self.clone();

        match key {
            OptionKey::EmptyHdlrName => {
                next.options.empty_hdlr_name = !next.options.empty_hdlr_name;
            }
            _ => return Err(unexpected(&Field::Option(key), "a boolean option")),
        }

        Ok(next)
    }

    fn set_option(&mut self, key: OptionKey, value: EditValue) -> Result<(), EditError> {
        let field = Field::Option(key);

        match key.kind() {
            OptionKind::Text => {
                let text = expect_text(&field, value)?;
                if let Some(slot) = self.options.text_mut(key) {
                    *slot = text;
                }
            }
            OptionKind::Number => {
                let text = expect_text(&field, value)?;
                let Ok(number) = parse_number_text(&text) else {
                    return Err(EditError::InvalidNumber {
                        field: key.name(),
                        value: text,
                    });
                };
                if let Some(slot) = self.options.number_mut(key) {
                    *slot = number;
                }
            }
            OptionKind::Flags => {
                self.options.movflags = match value {
                    EditValue::List(flags) => flags,
                    EditValue::Text(text) => split_flags(&text),
                    EditValue::Flag(_) => return Err(unexpected(&field, "a list of flags")),
                };
            }
            OptionKind::Toggle => {
                self.options.empty_hdlr_name = match value {
                    EditValue::Flag(flag) => flag,
                    EditValue::Text(text) => parse_bool_text(&text)
                        .ok_or_else(|| unexpected(&field, "true or false"))?,
                    EditValue::List(_) => return Err(unexpected(&field, "true or false")),
                };
            }
        }

        Ok(())
    }
}

// Helper functions

fn expect_text(field: &Field, value: EditValue) -> Result<String, EditError> {
    match value {
        EditValue::Text(text) => Ok(text),
        _ => Err(unexpected(field, "text")),
    }
}

fn unexpected(field: &Field, expected: &'static str) -> EditError {
    EditError::UnexpectedValue {
        field: field.name().to_string(),
        expected,
    }
}

/// Splits `frag_keyframe,skip_sidx` or `+frag_keyframe+skip_sidx` into flags.
fn split_flags(text: &str) -> Vec<String> {
    text.split([',', '+'])
        .map(str::trim)
        .filter(|flag| !flag.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_bool_text(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
