//! Settings model for the Smooth Streaming output.
//!
//! This module provides:
//! - The canonical settings record ([`SettingsRecord`], [`OptionsGroup`], [`Protocol`])
//! - Caller-supplied partial settings ([`PartialSettings`], [`PartialOptions`])
//! - The defaults merger ([`SettingsRecord::merge`])
//! - Field edits ([`Field`], [`EditValue`], [`SettingsRecord::with_edit`])
//! - Default values ([`defaults`])
//!
//! # Merging
//!
//! Merging is shallow at both levels: a caller field replaces the default
//! for that field only. A caller providing a subset of option keys receives
//! the rest from defaults. Keys outside the fixed set are kept verbatim in
//! the `extra` maps and never reach the argument list.

pub mod defaults;
mod edit;
mod error;
mod merge;
mod partial;
mod record;

#[cfg(test)]
mod edit_tests;

pub use edit::{EditValue, Field};
pub use error::EditError;
pub use partial::{PartialOptions, PartialSettings};
pub use record::{OptionKey, OptionKind, OptionValue, OptionsGroup, Protocol, SettingsRecord};
