//! The Smooth Streaming output service as seen by a host application.
//!
//! This module provides:
//! - Static service metadata ([`ServiceDescriptor`], [`SmoothStreaming::descriptor`])
//! - The settings form controller ([`SmoothForm`], [`SmoothStreaming::component`])
//! - Component properties ([`ServiceProps`])
//! - The change notification seam ([`ChangeNotifier`], [`NoopNotifier`])

mod descriptor;
mod error;
mod form;


pub use descriptor::{
    Author, Codecs, Link, Person, Requirements, RichText, ServiceDescriptor, ServiceIcon,
    SmoothStreaming,
};
pub use error::FormError;
pub use form::{ChangeNotifier, NoopNotifier, ServiceProps, SmoothForm};
