//! Option serializer.
//!
//! Turns an [`OptionsGroup`] into media engine arguments, driven by the
//! fixed key order of [`OptionKey::ALL`].

use crate::settings::{OptionKey, OptionValue, OptionsGroup};

/// Arguments emitted before any option: ISMV container, non-negative timestamps.
pub const LEADING_ARGS: [&str; 4] = ["-f", "ismv", "-avoid_negative_ts", "make_non_negative"];

/// Fixed prefix of the `-movflags` value.
pub const MOVFLAGS_PREFIX: &str = "+isml";

/// How a key turns into arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmitRule {
    /// `-metadata:s:a language=<value>`, skipped when empty
    AudioMetadata,
    /// `-movflags +isml+<flag>...`, never skipped
    Movflags,
    /// `-<key> <value>`, skipped when empty
    Named,
}

const fn emit_rule(key: OptionKey) -> EmitRule {
    match key {
        OptionKey::AudioLanguage => EmitRule::AudioMetadata,
        OptionKey::Movflags => EmitRule::Movflags,
        _ => EmitRule::Named,
    }
}

/// Serializes the options into an ordered argument list.
///
/// The result starts with [`LEADING_ARGS`], followed by one argument pair
/// per non-empty option in declaration order. `movflags` is always emitted,
/// even when it holds no flags. Keys outside the fixed set are ignored.
#[must_use]
pub fn serialize_options(options: &OptionsGroup) -> Vec<String> {
    let mut args: Vec<String> = LEADING_ARGS.iter().map(ToString::to_string).collect();

    for key in OptionKey::ALL {
        let value = options.value(key);

        match emit_rule(key) {
            EmitRule::Movflags => {
                args.push("-movflags".to_string());
                args.push(movflags_value(value));
            }
            EmitRule::AudioMetadata => {
                if let Some(language) = coerce(value) {
                    args.push("-metadata:s:a".to_string());
                    args.push(format!("language={language}"));
                }
            }
            EmitRule::Named => {
                if let Some(text) = coerce(value) {
                    args.push(format!("-{key}"));
                    args.push(text);
                }
            }
        }
    }

    args
}

fn movflags_value(value: OptionValue<'_>) -> String {
    let mut flags = MOVFLAGS_PREFIX.to_string();

    if let OptionValue::Flags(list) = value {
        for flag in list {
            flags.push('+');
            flags.push_str(flag);
        }
    }

    flags
}

/// Converts a scalar value to its argument text, or `None` when it is empty.
///
/// Booleans are written as `1`/`0`. Flag lists are only written through
/// [`movflags_value`].
fn coerce(value: OptionValue<'_>) -> Option<String> {
    match value {
        OptionValue::Text(text) => (!text.is_empty()).then(|| text.to_string()),
        OptionValue::Number(number) => number.map(|n| n.to_string()),
        OptionValue::Toggle(flag) => Some(if flag { "1" } else { "0" }.to_string()),
        OptionValue::Flags(_) => None,
    }
}
