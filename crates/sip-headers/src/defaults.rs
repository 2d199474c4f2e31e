//! Constants shared by the header fields.
//!
//! These are the RFC 3261 defaults a freshly constructed field starts from.

/// Initial Max-Forwards value recommended by RFC 3261 Section 8.1.1.6.
pub const DEFAULT_MAX_FORWARDS: u8 = 70;

/// Content coding assumed when no Accept-Encoding is present (RFC 3261 Section 20.2).
pub const DEFAULT_ACCEPT_ENCODING: &str = "identity";

/// Media type assumed when no Accept header is present (RFC 3261 Section 20.1).
pub const DEFAULT_ACCEPT_TYPE: &str = "application";
pub const DEFAULT_ACCEPT_SUBTYPE: &str = "sdp";

/// MIME-Version carried by SIP messages.
pub const DEFAULT_MIME_MAJOR: u32 = 1;
pub const DEFAULT_MIME_MINOR: u32 = 0;

/// Authentication scheme used by RFC 3261 digest authentication.
pub const DEFAULT_AUTH_SCHEME: &str = "Digest";

/// Branch prefix marking an RFC 3261 compliant transaction identifier.
pub const MAGIC_COOKIE: &str = "z9hG4bK";

/// Via sent-protocol defaults.
pub const DEFAULT_PROTOCOL_NAME: &str = "SIP";
pub const DEFAULT_PROTOCOL_VERSION: &str = "2.0";
