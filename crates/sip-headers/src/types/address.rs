//! # Addresses
//!
//! To, From and Reply-To carry a `name-addr` or an `addr-spec`
//! ([RFC 3261 Section 20.10](https://datatracker.ietf.org/doc/html/rfc3261#section-20.10)):
//!
//! ```text
//! name-addr    = [ display-name ] LAQUOT addr-spec RAQUOT
//! display-name = *(token LWS) / quoted-string
//! ```
//!
//! When the URI is not enclosed in angle brackets, any `;` parameters
//! belong to the header, not to the URI. Output always uses the bracketed
//! form, so a URI carrying its own parameters survives a round trip.
//!
//! Address headers compare on URI and header parameters. The display name
//! and the choice of bracketed or bare form do not take part.

use std::fmt;

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    combinator::{map, opt, recognize},
    multi::many1,
    sequence::{delimited, pair, terminated, tuple},
};
use serde::{Deserialize, Serialize};

use super::header::Parameterized;
use super::param::Parameter;
use super::uri::Uri;
use crate::error::{Error, Result};
use crate::grammar::{is_token, to_quoted_string};
use crate::id;
use crate::parser::params::semicolon_params0;
use crate::parser::quoted::{quoted_string, unescape};
use crate::parser::separators::{laquot, raquot};
use crate::parser::whitespace::sws;
use crate::parser::{parse_complete, token, ParseResult};

/// Display name and URI of an address header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    display_name: Option<String>,
    uri: Option<Uri>,
}

impl Address {
    pub fn new(uri: Uri) -> Self {
        Address {
            display_name: None,
            uri: Some(uri),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Sets or clears the display name. An empty name is rejected; pass
    /// `None` to clear it.
    pub fn set_display_name(&mut self, name: Option<&str>) -> Result<()> {
        match name {
            Some("") => Err(Error::missing("display name")),
            Some(name) if name.contains(['\r', '\n']) => Err(Error::format("display name", name)),
            Some(name) => {
                self.display_name = Some(name.to_string());
                Ok(())
            }
            None => {
                self.display_name = None;
                Ok(())
            }
        }
    }

    pub fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    pub fn set_uri(&mut self, uri: Uri) {
        self.uri = Some(uri);
    }

    pub fn clear(&mut self) {
        self.display_name = None;
        self.uri = None;
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(uri) = &self.uri else {
            return Ok(());
        };
        if let Some(name) = &self.display_name {
            write!(f, "{} ", to_quoted_string(name))?;
        }
        write!(f, "<{}>", uri)
    }
}

// display-name = *(token LWS) / quoted-string
fn display_name(input: &str) -> ParseResult<String> {
    alt((
        map(quoted_string, unescape),
        map(recognize(many1(terminated(token, sws))), |s: &str| {
            s.trim_end().to_string()
        }),
    ))(input)
}

// Contents of <...>
pub(crate) fn bracketed_uri(input: &str) -> ParseResult<&str> {
    delimited(laquot, take_while1(|c| c != '>'), raquot)(input)
}

fn name_addr(input: &str) -> ParseResult<(Option<String>, &str)> {
    pair(opt(display_name), bracketed_uri)(input)
}

fn addr_spec(input: &str) -> ParseResult<&str> {
    take_while1(|c: char| !c.is_whitespace() && !matches!(c, ';' | ',' | '<' | '>' | '"'))(input)
}

type ScannedAddress<'a> = (Option<String>, &'a str, Vec<Parameter>);

/// Scans `( name-addr / addr-spec ) *( SEMI param )`.
pub(crate) fn scan_address(value: &str) -> Option<ScannedAddress<'_>> {
    parse_complete(
        map(
            tuple((
                alt((name_addr, map(addr_spec, |uri| (None, uri)))),
                semicolon_params0,
            )),
            |((name, uri), params)| (name.filter(|n| !n.is_empty()), uri, params),
        ),
        value,
    )
}

/// Builds the address from a scanned value, validating the URI.
pub(crate) fn build_address(display_name: Option<String>, uri: &str) -> Result<Address> {
    Ok(Address {
        display_name,
        uri: Some(uri.trim().parse()?),
    })
}

/// Capability of headers whose value is an address.
pub trait Addressed: Parameterized {
    fn address(&self) -> &Address;

    fn address_mut(&mut self) -> &mut Address;

    fn uri(&self) -> Option<&Uri> {
        self.address().uri()
    }

    fn set_uri(&mut self, uri: Uri) {
        self.address_mut().set_uri(uri);
    }

    fn display_name(&self) -> Option<&str> {
        self.address().display_name()
    }

    fn set_display_name(&mut self, name: Option<&str>) -> Result<()> {
        self.address_mut().set_display_name(name)
    }
}

/// Address headers carrying the dialog-identifying `tag` parameter.
pub trait Tagged: Addressed {
    fn tag(&self) -> Option<&str> {
        self.param("tag")
    }

    fn set_tag(&mut self, tag: &str) -> Result<()> {
        let param = Parameter::new("tag", tag)?;
        if !is_token(tag) {
            return Err(Error::format("tag", tag));
        }
        self.params_mut().set(param);
        Ok(())
    }

    /// Assigns a freshly generated tag and returns it.
    fn new_tag(&mut self) -> String {
        let tag = id::new_tag();
        self.params_mut()
            .set(Parameter::from_wire("tag", Some((tag.clone(), false))));
        tag
    }
}

pub(crate) fn validate_tag(param: &Parameter) -> Result<()> {
    match param.value() {
        Some(tag) if is_token(tag) => Ok(()),
        Some(tag) => Err(Error::format("tag", tag)),
        None => Err(Error::missing("tag")),
    }
}

/// Declares an address header type: the struct and its field contract.
macro_rules! address_header {
    ($(#[$meta:meta])* $name:ident, $header:literal, $compact:expr, $spec:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            address: $crate::types::address::Address,
            params: $crate::types::param::ParameterList,
        }

        impl $name {
            pub fn new(uri: $crate::types::uri::Uri) -> Self {
                $name {
                    address: $crate::types::address::Address::new(uri),
                    params: $crate::types::param::ParameterList::new(),
                }
            }

            pub fn with_display_name(
                uri: $crate::types::uri::Uri,
                display_name: &str,
            ) -> $crate::error::Result<Self> {
                let mut field = Self::new(uri);
                field.address.set_display_name(Some(display_name))?;
                Ok(field)
            }
        }

        impl $crate::types::header::HeaderField for $name {
            const NAME: &'static str = $header;
            const COMPACT_NAME: Option<&'static str> = $compact;

            fn reset(&mut self) {
                self.address.clear();
                self.params.clear();
            }

            fn parse_value(&mut self, value: &str) -> $crate::error::Result<()> {
                ::tracing::trace!(header = $header, "parsing address");
                let Some((display_name, uri, params)) = $crate::types::address::scan_address(value) else {
                    $crate::types::header::discard($header, value);
                    return Ok(());
                };
                self.address = $crate::types::address::build_address(display_name, uri)?;
                self.params = <Self as $crate::types::header::Parameterized>::PARAMS.collect($header, params)?;
                Ok(())
            }

            fn value_string(&self) -> String {
                format!("{}{}", self.address, self.params)
            }

            fn is_valid(&self) -> bool {
                self.address.uri().is_some()
            }
        }

        impl $crate::types::header::Parameterized for $name {
            const PARAMS: $crate::types::param::ParamSpec = $spec;

            fn params(&self) -> &$crate::types::param::ParameterList {
                &self.params
            }

            fn params_mut(&mut self) -> &mut $crate::types::param::ParameterList {
                &mut self.params
            }
        }

        impl $crate::types::address::Addressed for $name {
            fn address(&self) -> &$crate::types::address::Address {
                &self.address
            }

            fn address_mut(&mut self) -> &mut $crate::types::address::Address {
                &mut self.address
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.address.uri() == other.address.uri() && self.params == other.params
            }
        }

        $crate::types::header::impl_header_conversions!($name);
    };
}

pub(crate) use address_header;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_name_addr() {
        let (name, uri, params) =
            scan_address("\"A. G. Bell\" <sip:agb@bell-telephone.com> ;tag=a48s").unwrap();
        assert_eq!(name.as_deref(), Some("A. G. Bell"));
        assert_eq!(uri, "sip:agb@bell-telephone.com");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].value(), Some("a48s"));
    }

    #[test]
    fn test_scan_token_display_name() {
        let (name, uri, _) = scan_address("Bob Smith <sip:bob@biloxi.com;transport=tcp>").unwrap();
        assert_eq!(name.as_deref(), Some("Bob Smith"));
        assert_eq!(uri, "sip:bob@biloxi.com;transport=tcp");
    }

    #[test]
    fn test_scan_addr_spec_params_belong_to_header() {
        let (name, uri, params) = scan_address("sip:+12125551212@server.phone2net.com;tag=887s").unwrap();
        assert_eq!(name, None);
        assert_eq!(uri, "sip:+12125551212@server.phone2net.com");
        assert_eq!(params[0].name(), "tag");
    }

    #[test]
    fn test_scan_rejects_garbage() {
        assert!(scan_address("<sip:unterminated@example.com").is_none());
        assert!(scan_address("two words").is_none());
    }

    #[test]
    fn test_address_display() {
        let mut address = Address::new(Uri::sip("biloxi.com").with_user("bob"));
        assert_eq!(address.to_string(), "<sip:bob@biloxi.com>");
        address.set_display_name(Some("Bob \"The Builder\"")).unwrap();
        assert_eq!(address.to_string(), "\"Bob \\\"The Builder\\\"\" <sip:bob@biloxi.com>");
        assert!(matches!(address.set_display_name(Some("")), Err(Error::MissingValue { .. })));
        assert_eq!(Address::default().to_string(), "");
    }
}
