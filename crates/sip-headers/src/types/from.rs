//! # SIP From Header
//!
//! The From header field names the initiator of a request
//! ([RFC 3261 Section 20.20](https://datatracker.ietf.org/doc/html/rfc3261#section-20.20)).
//! Unlike To, the UAC always includes a `tag`.
//!
//! ```text
//! From: "A. G. Bell" <sip:agb@bell-telephone.com> ;tag=a48s
//! f: Anonymous <sip:c8oqz84zk7z@privacy.org>;tag=hyh8
//! ```

use super::address::{address_header, validate_tag, Tagged};
use super::param::ParamSpec;

address_header!(
    /// The From header field.
    From,
    "From",
    Some("f"),
    ParamSpec {
        known: &["tag"],
        allow_generic: true,
        validate: validate_tag,
    }
);

impl Tagged for From {}
