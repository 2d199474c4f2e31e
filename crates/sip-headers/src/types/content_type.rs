//! # SIP Content-Type Header
//!
//! The Content-Type header field gives the media type of the message body
//! ([RFC 3261 Section 20.15](https://datatracker.ietf.org/doc/html/rfc3261#section-20.15)).
//!
//! ```text
//! Content-Type = ( "Content-Type" / "c" ) HCOLON media-type
//! media-type   = m-type SLASH m-subtype *(SEMI m-parameter)
//! ```
//!
//! Unlike Accept, every parameter belongs to the media type, `q` included,
//! and wildcards are not allowed.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let content_type: ContentType = "c: multipart/mixed;boundary=unique-boundary-1".parse().unwrap();
//! assert_eq!(content_type.media_type(), "multipart");
//! assert_eq!(content_type.param("boundary"), Some("unique-boundary-1"));
//! assert_eq!(content_type.to_string(), "Content-Type: multipart/mixed;boundary=unique-boundary-1");
//! ```

use nom::sequence::tuple;
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use super::media_type::{MediaType, MediaTyped};
use super::param::{ParamSpec, Parameter, ParameterList};
use crate::error::{Error, Result};
use crate::parser::params::semicolon_params0;
use crate::parser::separators::slash;
use crate::parser::{parse_complete, token};

/// The Content-Type header field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentType {
    media: MediaType,
}

impl ContentType {
    pub fn new(media_type: &str, subtype: &str) -> Result<Self> {
        let media = MediaType::new(media_type, subtype)?;
        Self::from_media(media)
    }

    /// Wraps a media type. Ranges such as `text/*` are rejected.
    pub fn from_media(media: MediaType) -> Result<Self> {
        if media.is_range() {
            return Err(Error::format("media type", media.to_string()));
        }
        Ok(ContentType { media })
    }

    pub fn sdp() -> Self {
        ContentType { media: MediaType::sdp() }
    }
}

impl HeaderField for ContentType {
    const NAME: &'static str = "Content-Type";
    const COMPACT_NAME: Option<&'static str> = Some("c");

    fn reset(&mut self) {
        self.media.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((media_type, _, subtype, params)) =
            parse_complete(tuple((token, slash, token, semicolon_params0)), value)
        else {
            discard(Self::NAME, value);
            return Ok(());
        };
        let mut media = MediaType::new(media_type, subtype)?;
        if media.is_range() {
            return Err(Error::format("media type", format!("{}/{}", media_type, subtype)));
        }
        for param in params {
            media.params_mut().set(param);
        }
        self.media = media;
        Ok(())
    }

    fn value_string(&self) -> String {
        self.media.to_string()
    }

    fn is_valid(&self) -> bool {
        !self.media.is_empty()
    }
}

impl Parameterized for ContentType {
    const PARAMS: ParamSpec = ParamSpec::GENERIC;

    fn params(&self) -> &ParameterList {
        self.media.params()
    }

    fn params_mut(&mut self) -> &mut ParameterList {
        self.media.params_mut()
    }
}

impl MediaTyped for ContentType {
    fn media(&self) -> &MediaType {
        &self.media
    }

    fn set_media_type(&mut self, media_type: &str, subtype: &str) -> Result<()> {
        if media_type == "*" || subtype == "*" {
            return Err(Error::format("media type", format!("{}/{}", media_type, subtype)));
        }
        self.media.set_essence(media_type, subtype)
    }

    // Every Content-Type parameter is a media parameter, `q` included
    fn set_media_param(&mut self, param: Parameter) -> Result<()> {
        self.media.params_mut().set(param);
        Ok(())
    }
}

impl_header_conversions!(ContentType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_param_survives() {
        let content_type = ContentType::from_value("text/plain; charset=\"utf-8\"").unwrap();
        assert_eq!(content_type.param("charset"), Some("utf-8"));
        assert_eq!(content_type.value_string(), "text/plain;charset=\"utf-8\"");
    }

    #[test]
    fn test_wildcards_rejected() {
        assert!(ContentType::from_value("text/*").unwrap_err().is_parse_error());
        assert!(ContentType::new("*", "*").is_err());

        let mut content_type = ContentType::sdp();
        assert!(content_type.set_media_type("application", "*").is_err());
        assert_eq!(content_type.media_subtype(), "sdp");
    }

    #[test]
    fn test_media_only_changes_through_checked_setters() {
        let mut content_type = ContentType::new("text", "plain").unwrap();
        assert!(content_type.set_media_type("text", "*").is_err());
        assert!(content_type.set_media_type("*", "*").is_err());
        assert!(!content_type.media().is_range());
        assert_eq!(content_type.value_string(), "text/plain");

        content_type.set_media_type("text", "html").unwrap();
        content_type.set_media_param(Parameter::new("charset", "utf-8").unwrap()).unwrap();
        assert_eq!(content_type.value_string(), "text/html;charset=utf-8");
    }

    #[test]
    fn test_add_param() {
        let mut content_type = ContentType::new("application", "pidf+xml").unwrap();
        content_type.add_param(Parameter::new("charset", "UTF-8").unwrap()).unwrap();
        assert_eq!(content_type.to_string(), "Content-Type: application/pidf+xml;charset=UTF-8");
    }

    #[test]
    fn test_reparse_resets() {
        let mut content_type = ContentType::from_value("application/sdp;x=1").unwrap();
        content_type.parse("").unwrap();
        assert!(!content_type.is_valid());
        assert!(content_type.params().is_empty());
    }
}
