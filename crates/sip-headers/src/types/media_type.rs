//! # Media Types
//!
//! MIME media types as used by Content-Type and Accept
//! ([RFC 3261 Section 20.1](https://datatracker.ietf.org/doc/html/rfc3261#section-20.1)):
//!
//! ```text
//! media-type  = m-type SLASH m-subtype *(SEMI m-parameter)
//! media-range = ( "*/*" / ( m-type SLASH "*" ) / ( m-type SLASH m-subtype ) ) *( SEMI m-parameter )
//! ```
//!
//! In an Accept value the media parameters end at the first `q` parameter;
//! whatever follows it is an accept-extension. [`split_media_range`] finds
//! that boundary on the scanned parameter list, so a `q` inside a quoted
//! value is never mistaken for it.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let mut text = MediaType::new("text", "plain").unwrap();
//! text.set_param(Parameter::new("charset", "utf-8").unwrap()).unwrap();
//! assert_eq!(text.to_string(), "text/plain;charset=utf-8");
//!
//! // Type and subtype compare without regard to case
//! assert_eq!(MediaType::new("Application", "SDP").unwrap(), MediaType::sdp());
//! ```

use std::fmt;

use nom::sequence::tuple;
use serde::{Deserialize, Serialize};

use super::header::HeaderField;
use super::param::{Parameter, ParameterList};
use crate::defaults::{DEFAULT_ACCEPT_SUBTYPE, DEFAULT_ACCEPT_TYPE};
use crate::error::{Error, Result};
use crate::grammar::is_token;
use crate::parser::params::semicolon_params0;
use crate::parser::separators::slash;
use crate::parser::{parse_complete, token};

/// A `type/subtype` pair with its media parameters.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct MediaType {
    media_type: String,
    subtype: String,
    params: ParameterList,
}

fn check_part(property: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing(property));
    }
    if !is_token(value) {
        return Err(Error::format(property, value));
    }
    Ok(())
}

impl MediaType {
    /// Creates a media type, or a media range when either part is `*`.
    pub fn new(media_type: impl Into<String>, subtype: impl Into<String>) -> Result<Self> {
        let mut media = MediaType::default();
        media.set_essence(media_type, subtype)?;
        Ok(media)
    }

    /// `application/sdp`
    pub fn sdp() -> Self {
        MediaType {
            media_type: DEFAULT_ACCEPT_TYPE.to_string(),
            subtype: DEFAULT_ACCEPT_SUBTYPE.to_string(),
            params: ParameterList::new(),
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Replaces type and subtype, keeping the parameters.
    pub fn set_essence(&mut self, media_type: impl Into<String>, subtype: impl Into<String>) -> Result<()> {
        let media_type = media_type.into();
        let subtype = subtype.into();
        check_part("media type", &media_type)?;
        check_part("media subtype", &subtype)?;
        if media_type == "*" && subtype != "*" {
            return Err(Error::format("media range", format!("{}/{}", media_type, subtype)));
        }
        self.media_type = media_type;
        self.subtype = subtype;
        Ok(())
    }

    pub fn params(&self) -> &ParameterList {
        &self.params
    }

    pub(crate) fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }

    /// Adds or replaces a media parameter. `q` is not a media parameter.
    pub fn set_param(&mut self, param: Parameter) -> Result<()> {
        if param.is_named("q") {
            return Err(Error::format("media parameter", param.name()));
        }
        self.params.set(param);
        Ok(())
    }

    pub fn remove_param(&mut self, name: &str) -> Option<Parameter> {
        self.params.remove(name)
    }

    /// `*/*` or `type/*`
    pub fn is_range(&self) -> bool {
        self.subtype == "*"
    }

    /// True when type and subtype are unset.
    pub fn is_empty(&self) -> bool {
        self.media_type.is_empty() && self.subtype.is_empty()
    }

    pub fn clear(&mut self) {
        self.media_type.clear();
        self.subtype.clear();
        self.params.clear();
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.media_type.eq_ignore_ascii_case(&other.media_type)
            && self.subtype.eq_ignore_ascii_case(&other.subtype)
            && self.params == other.params
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}/{}{}", self.media_type, self.subtype, self.params)
    }
}

/// A scanned media range: type, subtype, the media parameters and the
/// parameters from the first `q` onwards.
pub(crate) struct MediaRangeParts<'a> {
    pub media_type: &'a str,
    pub subtype: &'a str,
    pub media_params: Vec<Parameter>,
    pub accept_params: Vec<Parameter>,
}

/// Scans `type/subtype *(;param)` and splits the parameters at the first
/// one named `q`. Returns `None` when the value does not have that shape.
pub(crate) fn split_media_range(value: &str) -> Option<MediaRangeParts<'_>> {
    let (media_type, _, subtype, mut params) =
        parse_complete(tuple((token, slash, token, semicolon_params0)), value)?;
    let accept_params = match params.iter().position(|p| p.is_named("q")) {
        Some(at) => params.split_off(at),
        None => Vec::new(),
    };
    Some(MediaRangeParts {
        media_type,
        subtype,
        media_params: params,
        accept_params,
    })
}

impl MediaRangeParts<'_> {
    /// Validates type and subtype and attaches the media parameters.
    pub(crate) fn into_media_type(self) -> Result<(MediaType, Vec<Parameter>)> {
        let mut media = MediaType::new(self.media_type, self.subtype)?;
        media.params = self.media_params.into_iter().collect();
        Ok((media, self.accept_params))
    }
}

/// Capability of headers whose value is a media type.
///
/// The media type is only reachable mutably through the setters, so each
/// header keeps its own rules on what it accepts.
pub trait MediaTyped: HeaderField {
    fn media(&self) -> &MediaType;

    /// Replaces type and subtype, keeping the media parameters.
    fn set_media_type(&mut self, media_type: &str, subtype: &str) -> Result<()>;

    /// Adds or replaces a media parameter.
    fn set_media_param(&mut self, param: Parameter) -> Result<()>;

    fn media_type(&self) -> &str {
        self.media().media_type()
    }

    fn media_subtype(&self) -> &str {
        self.media().subtype()
    }

    fn media_param(&self, name: &str) -> Option<&str> {
        self.media().params().value(name)
    }
}
