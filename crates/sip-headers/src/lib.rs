//! # rvoip-sip-headers
//!
//! Typed SIP header fields for the rvoip stack: parsing, validation and
//! serialization of the RFC 3261 header values a message model is built
//! from.
//!
//! Each header field is a plain struct implementing
//! [`HeaderField`](types::HeaderField). Parsing accepts the value with or
//! without its `Name:` prefix, in long or compact form; serializing writes
//! the canonical long name. Setters validate before they mutate, and every
//! error is a [`Error`] value.
//!
//! ## Example
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let mut via: Via = "v: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds".parse().unwrap();
//! via.set_received("192.0.2.1".parse().unwrap());
//! assert_eq!(
//!     via.to_string(),
//!     "Via: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds;received=192.0.2.1"
//! );
//!
//! let mut cseq = CSeq::new(314159, "INVITE").unwrap();
//! cseq.next();
//! assert_eq!(cseq.value_string(), "314160 INVITE");
//!
//! let err = "Max-Forwards: 256".parse::<MaxForwards>().unwrap_err();
//! assert!(err.is_parse_error());
//! ```
//!
//! ## Features
//!
//! - `lenient_parsing`: accept whitespace around the slashes of the Via
//!   sent-protocol.

pub mod defaults;
pub mod error;
pub mod grammar;
pub mod id;
pub mod parser;
pub mod types;

pub use error::{Error, ParseFailure, Result};
pub use types::{
    AuthHeaderGroup, HeaderField, HeaderFieldGroup, HeaderName, ParamSpec, Parameter,
    ParameterList, Parameterized,
};
pub use types::{
    Accept, AcceptEncoding, AcceptLanguage, AuthenticationInfo, Authorization, CSeq, CallInfo,
    ContentDisposition, ContentEncoding, ContentLanguage, ContentLength, ContentType, Date,
    MaxForwards, MimeVersion, Priority, ProxyAuthenticate, ProxyAuthorization, ReplyTo,
    RetryAfter, Timestamp, To, Via, Warning, WwwAuthenticate,
};

/// Re-export of common types for easier use
pub mod prelude {
    pub use crate::error::{Error, ParseFailure, Result};
    pub use crate::types::{
        Accept, AcceptEncoding, AcceptLanguage, Address, Addressed, AuthHeaderGroup, AuthScheme,
        AuthenticationInfo, Authorization, CSeq, CallInfo, ChallengeFields, ContentDisposition,
        ContentEncoding, ContentLanguage, ContentLength, ContentType, CredentialFields, Date, From,
        HeaderField, HeaderFieldGroup, HeaderName, MaxForwards, MediaType, MediaTyped, MimeVersion,
        ParamSpec, Parameter, ParameterList, Parameterized, Priority, PriorityLevel,
        ProxyAuthenticate, ProxyAuthorization, QValue, QualityValued, ReplyTo, RetryAfter, Scheme,
        Tagged, Timestamp, To, Transport, Uri, Via, Warning, WwwAuthenticate,
    };
}
