//! Smooth Streaming output compiler.
//!
//! A library for turning the settings of a Smooth Streaming output into
//! the destination address and the media engine arguments for it.

pub mod config;
pub mod output;
pub mod service;
pub mod settings;
