use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Names of the header fields this crate types.
///
/// Header names are case-insensitive in SIP. This enum keeps the canonical
/// capitalization for the fields it knows, accepts RFC 3261 compact forms
/// when parsing, and carries anything else in `Other`.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
/// use std::str::FromStr;
///
/// assert_eq!(HeaderName::from_str("v").unwrap(), HeaderName::Via);
/// assert_eq!(HeaderName::from_str("content-LENGTH").unwrap(), HeaderName::ContentLength);
/// assert_eq!(HeaderName::Via.compact_form(), Some("v"));
///
/// // Authorization lines are never merged with commas
/// assert!(HeaderName::Authorization.allows_multiple());
/// assert!(!HeaderName::Authorization.is_comma_combinable());
///
/// let custom = HeaderName::from_str("X-Custom-Header").unwrap();
/// assert_eq!(custom, HeaderName::Other("X-Custom-Header".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderName {
    /// Accept: Media types acceptable in the response
    Accept,
    /// Accept-Encoding: Acceptable content codings
    AcceptEncoding,
    /// Accept-Language: Preferred languages for reason phrases and bodies
    AcceptLanguage,
    /// Authentication-Info: Mutual authentication data from the server
    AuthenticationInfo,
    /// Authorization: Credentials provided by a UA
    Authorization,
    /// Call-Info: Additional information about the caller or callee
    CallInfo,
    /// Content-Disposition: How the message body is to be interpreted
    ContentDisposition,
    /// Content-Encoding: Codings applied to the message body
    ContentEncoding,
    /// Content-Language: Language of the message body
    ContentLanguage,
    /// Content-Length: Size of the message body
    ContentLength,
    /// Content-Type: Media type of the message body
    ContentType,
    /// CSeq: Command sequence number
    CSeq,
    /// Date: Date and time the message was sent
    Date,
    /// From: Initiator of the request
    From,
    /// Max-Forwards: Limit on the number of hops
    MaxForwards,
    /// MIME-Version: MIME protocol version
    MimeVersion,
    /// Priority: Urgency of the request
    Priority,
    /// Proxy-Authenticate: Challenge from a proxy
    ProxyAuthenticate,
    /// Proxy-Authorization: Credentials for a proxy
    ProxyAuthorization,
    /// Reply-To: Logical return URI
    ReplyTo,
    /// Retry-After: When the service is expected to be available again
    RetryAfter,
    /// Timestamp: When the UAC sent the request
    Timestamp,
    /// To: Logical recipient of the request
    To,
    /// Via: Path taken by the request so far
    Via,
    /// Warning: Additional information about the response status
    Warning,
    /// WWW-Authenticate: Challenge from a UAS or registrar
    WwwAuthenticate,
    /// Any other header
    Other(String),
}

impl HeaderName {
    /// Returns the canonical name of the header
    pub fn as_str(&self) -> &str {
        match self {
            HeaderName::Accept => "Accept",
            HeaderName::AcceptEncoding => "Accept-Encoding",
            HeaderName::AcceptLanguage => "Accept-Language",
            HeaderName::AuthenticationInfo => "Authentication-Info",
            HeaderName::Authorization => "Authorization",
            HeaderName::CallInfo => "Call-Info",
            HeaderName::ContentDisposition => "Content-Disposition",
            HeaderName::ContentEncoding => "Content-Encoding",
            HeaderName::ContentLanguage => "Content-Language",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentType => "Content-Type",
            HeaderName::CSeq => "CSeq",
            HeaderName::Date => "Date",
            HeaderName::From => "From",
            HeaderName::MaxForwards => "Max-Forwards",
            HeaderName::MimeVersion => "MIME-Version",
            HeaderName::Priority => "Priority",
            HeaderName::ProxyAuthenticate => "Proxy-Authenticate",
            HeaderName::ProxyAuthorization => "Proxy-Authorization",
            HeaderName::ReplyTo => "Reply-To",
            HeaderName::RetryAfter => "Retry-After",
            HeaderName::Timestamp => "Timestamp",
            HeaderName::To => "To",
            HeaderName::Via => "Via",
            HeaderName::Warning => "Warning",
            HeaderName::WwwAuthenticate => "WWW-Authenticate",
            HeaderName::Other(s) => s,
        }
    }

    /// The RFC 3261 compact form, if the header has one
    pub fn compact_form(&self) -> Option<&'static str> {
        match self {
            HeaderName::ContentType => Some("c"),
            HeaderName::ContentEncoding => Some("e"),
            HeaderName::From => Some("f"),
            HeaderName::ContentLength => Some("l"),
            HeaderName::To => Some("t"),
            HeaderName::Via => Some("v"),
            _ => None,
        }
    }

    /// Whether a message may carry more than one value of this header
    pub fn allows_multiple(&self) -> bool {
        matches!(
            self,
            HeaderName::Accept
                | HeaderName::AcceptEncoding
                | HeaderName::AcceptLanguage
                | HeaderName::Authorization
                | HeaderName::CallInfo
                | HeaderName::ContentEncoding
                | HeaderName::ContentLanguage
                | HeaderName::ProxyAuthenticate
                | HeaderName::ProxyAuthorization
                | HeaderName::Via
                | HeaderName::Warning
                | HeaderName::WwwAuthenticate
        )
    }

    /// Whether several values may share one header line, separated by commas.
    ///
    /// The authentication headers repeat as separate lines only: their
    /// values contain commas of their own.
    pub fn is_comma_combinable(&self) -> bool {
        self.allows_multiple()
            && !matches!(
                self,
                HeaderName::Authorization
                    | HeaderName::ProxyAuthorization
                    | HeaderName::WwwAuthenticate
                    | HeaderName::ProxyAuthenticate
            )
    }

    /// True when `name` is this header's long or compact name, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
            || self.compact_form().map_or(false, |c| c.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::missing("header name"));
        }

        let lower_s = s.to_lowercase();
        match lower_s.as_str() {
            "accept" => Ok(HeaderName::Accept),
            "accept-encoding" => Ok(HeaderName::AcceptEncoding),
            "accept-language" => Ok(HeaderName::AcceptLanguage),
            "authentication-info" => Ok(HeaderName::AuthenticationInfo),
            "authorization" => Ok(HeaderName::Authorization),
            "call-info" => Ok(HeaderName::CallInfo),
            "content-disposition" => Ok(HeaderName::ContentDisposition),
            "content-encoding" | "e" => Ok(HeaderName::ContentEncoding),
            "content-language" => Ok(HeaderName::ContentLanguage),
            "content-length" | "l" => Ok(HeaderName::ContentLength),
            "content-type" | "c" => Ok(HeaderName::ContentType),
            "cseq" => Ok(HeaderName::CSeq),
            "date" => Ok(HeaderName::Date),
            "from" | "f" => Ok(HeaderName::From),
            "max-forwards" => Ok(HeaderName::MaxForwards),
            "mime-version" => Ok(HeaderName::MimeVersion),
            "priority" => Ok(HeaderName::Priority),
            "proxy-authenticate" => Ok(HeaderName::ProxyAuthenticate),
            "proxy-authorization" => Ok(HeaderName::ProxyAuthorization),
            "reply-to" => Ok(HeaderName::ReplyTo),
            "retry-after" => Ok(HeaderName::RetryAfter),
            "timestamp" => Ok(HeaderName::Timestamp),
            "to" | "t" => Ok(HeaderName::To),
            "via" | "v" => Ok(HeaderName::Via),
            "warning" => Ok(HeaderName::Warning),
            "www-authenticate" => Ok(HeaderName::WwwAuthenticate),
            _ if s.chars().all(crate::parser::is_token_char) => Ok(HeaderName::Other(s.to_string())),
            _ => Err(Error::format("header name", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_name_from_str() {
        assert_eq!(HeaderName::from_str("Via").unwrap(), HeaderName::Via);
        assert_eq!(HeaderName::from_str("v").unwrap(), HeaderName::Via);
        assert_eq!(HeaderName::from_str("To").unwrap(), HeaderName::To);
        assert_eq!(HeaderName::from_str("t").unwrap(), HeaderName::To);
        assert_eq!(HeaderName::from_str("cSeq").unwrap(), HeaderName::CSeq);
        assert_eq!(HeaderName::from_str("www-authenticate").unwrap(), HeaderName::WwwAuthenticate);

        // Extension header
        let custom = HeaderName::from_str("X-Custom").unwrap();
        assert!(matches!(custom, HeaderName::Other(s) if s == "X-Custom"));

        assert!(matches!(HeaderName::from_str(""), Err(Error::MissingValue { .. })));
        assert!(matches!(HeaderName::from_str("Bad Name"), Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_compact_forms_round_trip() {
        for name in [
            HeaderName::ContentType,
            HeaderName::ContentEncoding,
            HeaderName::From,
            HeaderName::ContentLength,
            HeaderName::To,
            HeaderName::Via,
        ] {
            let compact = name.compact_form().unwrap();
            assert_eq!(HeaderName::from_str(compact).unwrap(), name);
            assert!(name.matches(&compact.to_uppercase()));
        }
        assert_eq!(HeaderName::CSeq.compact_form(), None);
    }

    #[test]
    fn test_multiplicity() {
        assert!(HeaderName::Via.is_comma_combinable());
        assert!(HeaderName::Warning.is_comma_combinable());
        assert!(!HeaderName::To.allows_multiple());
        assert!(!HeaderName::To.is_comma_combinable());
        for name in [
            HeaderName::Authorization,
            HeaderName::ProxyAuthorization,
            HeaderName::WwwAuthenticate,
            HeaderName::ProxyAuthenticate,
        ] {
            assert!(name.allows_multiple());
            assert!(!name.is_comma_combinable());
        }
    }
}
