//! Static service metadata.

use serde::Serialize;

use crate::settings::defaults;

use super::{ServiceProps, SmoothForm};

/// A hyperlink inside descriptive text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Link label
    pub label: &'static str,
    /// Link target
    pub href: &'static str,
}

/// Descriptive text with an optional trailing link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RichText {
    /// Plain text
    pub text: &'static str,
    /// Link following the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// A named person or organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Display name
    pub name: &'static str,
    /// Homepage
    pub link: &'static str,
}

/// Creator and maintainer of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Original creator
    pub creator: Person,
    /// Current maintainer
    pub maintainer: Person,
}

/// Accepted codecs per stream type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Codecs {
    /// Audio codecs
    pub audio: &'static [&'static str],
    /// Video codecs
    pub video: &'static [&'static str],
}

/// Compatibility constraints used by the host to filter services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirements {
    /// Accepted destination protocols
    pub protocols: &'static [&'static str],
    /// Accepted stream formats
    pub formats: &'static [&'static str],
    /// Accepted codecs
    pub codecs: Codecs,
}

/// Icon marker for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceIcon {
    /// Icon glyph name
    pub glyph: &'static str,
    /// CSS color
    pub color: &'static str,
}

/// Static metadata describing an output service to the host registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    /// Stable registry key
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Service version
    pub version: &'static str,
    /// Where to obtain a stream key, empty if not applicable
    pub stream_key_link: &'static str,
    /// Description shown in the service list
    pub description: RichText,
    /// Notice about image rights
    pub image_copyright: RichText,
    /// Authors
    pub author: Author,
    /// Category tag
    pub category: &'static str,
    /// Compatibility constraints
    pub requires: Requirements,
    /// Icon marker
    pub icon: ServiceIcon,
    /// Muxer flags offered by the form
    pub movflag_choices: &'static [&'static str],
}

const DATARHEI: Person = Person {
    name: "datarhei",
    link: "https://github.com/datarhei",
};

const DOCUMENTATION: Link = Link {
    label: "here",
    href: "http://ffmpeg.org/ffmpeg-all.html#mov_002c-mp4_002c-ismv",
};

static DESCRIPTOR: ServiceDescriptor = ServiceDescriptor {
    id: "smooth",
    name: "Smooth Streaming",
    version: "1.0",
    stream_key_link: "",
    description: RichText {
        text: "Transmit the main source to a Smooth Streaming Server. \
               More details about the settings can be found",
        link: Some(DOCUMENTATION),
    },
    image_copyright: RichText {
        text: "Please contact the operator of the service and check what happens.",
        link: None,
    },
    author: Author {
        creator: DATARHEI,
        maintainer: DATARHEI,
    },
    category: "universal",
    requires: Requirements {
        protocols: &["http", "https"],
        formats: &["dash"],
        codecs: Codecs {
            audio: &["aac"],
            video: &["h264"],
        },
    },
    icon: ServiceIcon {
        glyph: "tools",
        color: "rgba(57, 181, 74, 1)",
    },
    movflag_choices: &defaults::MOVFLAG_CHOICES,
};

/// The Smooth Streaming output service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothStreaming;

impl SmoothStreaming {
    /// Returns the static metadata of this service.
    #[must_use]
    pub fn descriptor() -> &'static ServiceDescriptor {
        &DESCRIPTOR
    }

    /// Creates the settings form for the given properties.
    #[must_use]
    pub fn component(props: ServiceProps) -> SmoothForm {
        SmoothForm::new(props)
    }
}
