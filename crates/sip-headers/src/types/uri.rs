//! # URIs
//!
//! The URI value carried by address headers (To, From, Reply-To), Call-Info
//! and digest credentials. Only as much of RFC 3261 Section 19.1 is modelled
//! as those headers need:
//!
//! ```text
//! sip:user:password@host:port;uri-parameters?headers
//! ```
//!
//! `sip` and `sips` URIs are split into their components; `tel` and any
//! other scheme keep everything after the colon as an opaque string.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let uri: Uri = "sip:alice@Atlanta.com:5060;transport=tcp".parse().unwrap();
//! assert_eq!(uri.scheme(), &Scheme::Sip);
//! assert_eq!(uri.user(), Some("alice"));
//! assert_eq!(uri.port(), Some(5060));
//!
//! // Host comparison ignores case
//! let same = Uri::sip("atlanta.com").with_user("alice").with_port(5060)
//!     .with_param(Parameter::new("transport", "tcp").unwrap());
//! assert_eq!(uri, same);
//! ```

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, satisfy},
    combinator::{all_consuming, opt, recognize, rest},
    sequence::{pair, preceded, terminated, tuple},
};
use serde::{Deserialize, Serialize};

use super::param::{Parameter, ParameterList};
use crate::error::{Error, Result};
use crate::parser::values::hostport;
use crate::parser::ParseResult;

/// URI scheme
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Sip,
    Sips,
    Tel,
    Other(String),
}

impl Scheme {
    pub fn as_str(&self) -> &str {
        match self {
            Scheme::Sip => "sip",
            Scheme::Sips => "sips",
            Scheme::Tel => "tel",
            Scheme::Other(s) => s,
        }
    }

    fn is_sip(&self) -> bool {
        matches!(self, Scheme::Sip | Scheme::Sips)
    }
}

impl PartialEq for Scheme {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Scheme {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "sip" => Scheme::Sip,
            "sips" => Scheme::Sips,
            "tel" => Scheme::Tel,
            _ => Scheme::Other(s.to_string()),
        }
    }
}

/// A SIP, SIPS, tel or other absolute URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Uri {
    scheme: Scheme,
    user: Option<String>,
    password: Option<String>,
    host: String,
    port: Option<u16>,
    params: ParameterList,
    headers: Option<String>,
    // Everything after "scheme:" for non-SIP schemes
    opaque: Option<String>,
}

// unreserved / escaped / user-unreserved
fn is_user_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')' | '%' | '&' | '=' | '+' | '$' | ',' | ';' | '?' | '/'
        )
}

fn is_password_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')' | '%' | '&' | '=' | '+' | '$' | ',')
}

// paramchar = param-unreserved / unreserved / escaped
fn is_uri_param_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')' | '[' | ']' | '/' | ':' | '&' | '+' | '$' | '%'
        )
}

fn is_opaque_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '<' | '>' | '"')
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn scheme(input: &str) -> ParseResult<&str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
    ))(input)
}

type SipParts<'a> = (Option<(&'a str, Option<&'a str>)>, (&'a str, Option<u16>), &'a str);

fn sip_parts(input: &str) -> ParseResult<SipParts<'_>> {
    tuple((
        opt(terminated(
            pair(
                take_while1(is_user_char),
                opt(preceded(char(':'), take_while(is_password_char))),
            ),
            char('@'),
        )),
        hostport,
        rest,
    ))(input)
}

fn parse_uri_params(section: &str) -> Option<ParameterList> {
    let mut params = ParameterList::new();
    if section.is_empty() {
        return Some(params);
    }
    let body = section.strip_prefix(';')?;
    for item in body.split(';') {
        let (name, value) = match item.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (item, None),
        };
        if name.is_empty() || !name.chars().all(is_uri_param_char) {
            return None;
        }
        let value = match value {
            Some(v) if !v.is_empty() && v.chars().all(is_uri_param_char) => Some((v.to_string(), false)),
            Some(_) => return None,
            None => None,
        };
        params.set(Parameter::from_wire(name, value));
    }
    Some(params)
}

impl Uri {
    fn with_scheme(scheme: Scheme, host: impl Into<String>) -> Self {
        Uri {
            scheme,
            user: None,
            password: None,
            host: host.into(),
            port: None,
            params: ParameterList::new(),
            headers: None,
            opaque: None,
        }
    }

    /// A `sip:` URI for `host`.
    pub fn sip(host: impl Into<String>) -> Self {
        Self::with_scheme(Scheme::Sip, host)
    }

    /// A `sips:` URI for `host`.
    pub fn sips(host: impl Into<String>) -> Self {
        Self::with_scheme(Scheme::Sips, host)
    }

    pub fn tel(number: impl Into<String>) -> Self {
        let mut uri = Self::with_scheme(Scheme::Tel, "");
        uri.opaque = Some(number.into());
        uri
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.set(param);
        self
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// The host of a SIP URI; empty for opaque schemes.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn params(&self) -> &ParameterList {
        &self.params
    }

    pub fn headers(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    /// Everything after the colon for non-SIP schemes.
    pub fn opaque(&self) -> Option<&str> {
        self.opaque.as_deref()
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::missing("URI"));
        }
        let (remainder, scheme_text) =
            terminated(scheme, char(':'))(s).map_err(|_| Error::format("URI", s))?;
        let scheme = Scheme::from(scheme_text);

        if !scheme.is_sip() {
            if remainder.is_empty() || !remainder.chars().all(is_opaque_char) {
                return Err(Error::format("URI", s));
            }
            let mut uri = Self::with_scheme(scheme, "");
            uri.opaque = Some(remainder.to_string());
            return Ok(uri);
        }

        let (_, (userinfo, (host, port), tail)) =
            all_consuming(sip_parts)(remainder).map_err(|_| Error::format("URI", s))?;
        let (param_section, headers) = match tail.split_once('?') {
            Some((params, headers)) => (params, Some(headers)),
            None => (tail, None),
        };
        let params = parse_uri_params(param_section).ok_or_else(|| Error::format("URI", s))?;
        if headers.map_or(false, |h| h.is_empty() || !h.chars().all(is_opaque_char)) {
            return Err(Error::format("URI", s));
        }

        let mut uri = Self::with_scheme(scheme, host);
        if let Some((user, password)) = userinfo {
            uri.user = Some(user.to_string());
            uri.password = password.map(str::to_string);
        }
        uri.port = port;
        uri.params = params;
        uri.headers = headers.map(str::to_string);
        Ok(uri)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if let Some(opaque) = &self.opaque {
            return f.write_str(opaque);
        }
        if let Some(user) = &self.user {
            f.write_str(user)?;
            if let Some(password) = &self.password {
                write!(f, ":{}", password)?;
            }
            f.write_str("@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        write!(f, "{}", self.params)?;
        if let Some(headers) = &self.headers {
            write!(f, "?{}", headers)?;
        }
        Ok(())
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && self.user == other.user
            && self.password == other.password
            && self.host.eq_ignore_ascii_case(&other.host)
            && self.port == other.port
            && self.params == other.params
            && self.headers == other.headers
            && self.opaque == other.opaque
    }
}

impl Eq for Uri {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sip_uri() {
        let uri: Uri = "sips:bob:secret@[2001:db8::1]:5061;transport=tls;lr?subject=project".parse().unwrap();
        assert_eq!(uri.scheme(), &Scheme::Sips);
        assert_eq!(uri.user(), Some("bob"));
        assert_eq!(uri.password(), Some("secret"));
        assert_eq!(uri.host(), "[2001:db8::1]");
        assert_eq!(uri.port(), Some(5061));
        assert_eq!(uri.params().value("transport"), Some("tls"));
        assert!(uri.params().contains("lr"));
        assert_eq!(uri.headers(), Some("subject=project"));
        assert_eq!(uri.to_string(), "sips:bob:secret@[2001:db8::1]:5061;transport=tls;lr?subject=project");
    }

    #[test]
    fn test_parse_without_user() {
        let uri: Uri = "sip:atlanta.com;maddr=239.255.255.1".parse().unwrap();
        assert_eq!(uri.user(), None);
        assert_eq!(uri.host(), "atlanta.com");
        assert_eq!(uri.params().value("maddr"), Some("239.255.255.1"));
    }

    #[test]
    fn test_opaque_schemes() {
        let tel: Uri = "tel:+1-201-555-0123".parse().unwrap();
        assert_eq!(tel.scheme(), &Scheme::Tel);
        assert_eq!(tel.opaque(), Some("+1-201-555-0123"));
        assert_eq!(tel, Uri::tel("+1-201-555-0123"));

        let http: Uri = "http://www.example.com/alice/photo.jpg".parse().unwrap();
        assert_eq!(http.scheme(), &Scheme::Other("http".to_string()));
        assert_eq!(http.to_string(), "http://www.example.com/alice/photo.jpg");
    }

    #[test]
    fn test_invalid_uris() {
        assert!(matches!("".parse::<Uri>(), Err(Error::MissingValue { .. })));
        assert!("no-scheme".parse::<Uri>().is_err());
        assert!("sip:".parse::<Uri>().is_err());
        assert!("sip:alice@".parse::<Uri>().is_err());
        assert!("sip:host;=x".parse::<Uri>().is_err());
        assert!("mailto:".parse::<Uri>().is_err());
    }

    #[test]
    fn test_equality_rules() {
        let a: Uri = "SIP:carol@CHICAGO.com;Transport=TCP;lr".parse().unwrap();
        let b: Uri = "sip:carol@chicago.com;lr;transport=tcp".parse().unwrap();
        assert_eq!(a, b);

        let c: Uri = "sip:Carol@chicago.com".parse().unwrap();
        let d: Uri = "sip:carol@chicago.com".parse().unwrap();
        assert_ne!(c, d);
    }
}
