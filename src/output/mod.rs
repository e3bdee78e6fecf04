//! Output compilation for the Smooth Streaming target.
//!
//! This module provides:
//! - The option serializer ([`serialize_options`])
//! - The address builder ([`build_address`])
//! - The output compiler ([`compile`], [`compile_outputs`], [`OutputSpec`])
//!
//! The argument names and their order are consumed verbatim by the media
//! engine and must not change.

mod address;
mod compile;
mod error;
mod options;

#[cfg(test)]
mod compile_tests;

pub use address::build_address;
pub use compile::{OutputSpec, compile, compile_outputs};
pub use error::OutputError;
pub use options::{LEADING_ARGS, MOVFLAGS_PREFIX, serialize_options};
