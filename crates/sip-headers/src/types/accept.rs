//! # SIP Accept Header
//!
//! This module provides an implementation of the SIP Accept header as defined in
//! [RFC 3261 Section 20.1](https://datatracker.ietf.org/doc/html/rfc3261#section-20.1).
//!
//! The Accept header field lists the media types acceptable in the response
//! body, each optionally weighted by a `q` value:
//!
//! ```text
//! Accept         = "Accept" HCOLON [ accept-range *(COMMA accept-range) ]
//! accept-range   = media-range *(SEMI accept-param)
//! accept-param   = ("q" EQUAL qvalue) / generic-param
//! ```
//!
//! Parameters between the media range and the first `q` belong to the media
//! type (`level=1` below); parameters after it are accept-extensions.
//!
//! ```text
//! Accept: text/html;level=1;q=0.7;foo=bar
//! ```
//!
//! When no Accept header is present a UAS assumes `application/sdp`, which
//! is also what [`Accept::default`] holds.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let accept: Accept = "Accept: text/html;level=1;q=0.7;foo=bar".parse().unwrap();
//! assert_eq!(accept.media_type(), "text");
//! assert_eq!(accept.media_subtype(), "html");
//! assert_eq!(accept.media_param("level"), Some("1"));
//! assert_eq!(accept.q(), Some(QValue::from_thousandths(700).unwrap()));
//! assert_eq!(accept.param("foo"), Some("bar"));
//!
//! let sdp = Accept::default();
//! assert_eq!(sdp.value_string(), "application/sdp");
//! ```

use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use super::media_type::{split_media_range, MediaType, MediaTyped};
use super::param::{ParamSpec, Parameter, ParameterList};
use super::qvalue::{validate_q, AcceptParams, QualityValued};
use crate::error::Result;

/// The Accept header field: one media range with its accept-params.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accept {
    media: MediaType,
    accept: AcceptParams,
}

impl Accept {
    /// Creates an Accept entry for `media_type/subtype`; either may be `*`.
    pub fn new(media_type: &str, subtype: &str) -> Result<Self> {
        Ok(Accept {
            media: MediaType::new(media_type, subtype)?,
            accept: AcceptParams::new(),
        })
    }

    pub fn from_media(media: MediaType) -> Self {
        Accept {
            media,
            accept: AcceptParams::new(),
        }
    }
}

impl Default for Accept {
    fn default() -> Self {
        Accept::from_media(MediaType::sdp())
    }
}

impl HeaderField for Accept {
    const NAME: &'static str = "Accept";
    const ALLOW_MULTIPLE: bool = true;

    fn reset(&mut self) {
        self.media.clear();
        self.accept.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some(parts) = split_media_range(value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        let (media, accept_params) = parts.into_media_type()?;
        self.accept = AcceptParams::from_params(Self::NAME, &Self::PARAMS, accept_params)?;
        self.media = media;
        Ok(())
    }

    fn value_string(&self) -> String {
        format!("{}{}", self.media, self.accept)
    }

    fn is_valid(&self) -> bool {
        !self.media.is_empty()
    }
}

impl Parameterized for Accept {
    const PARAMS: ParamSpec = ParamSpec {
        known: &["q"],
        allow_generic: true,
        validate: validate_q,
    };

    fn params(&self) -> &ParameterList {
        self.accept.extensions()
    }

    fn params_mut(&mut self) -> &mut ParameterList {
        self.accept.extensions_mut()
    }

    fn add_param(&mut self, param: Parameter) -> Result<()> {
        self.accept.add(Self::NAME, &Self::PARAMS, param)
    }

    fn remove_param(&mut self, name: &str) -> Option<Parameter> {
        self.accept.remove(name)
    }
}

impl QualityValued for Accept {
    fn accept_params(&self) -> &AcceptParams {
        &self.accept
    }

    fn accept_params_mut(&mut self) -> &mut AcceptParams {
        &mut self.accept
    }
}

impl MediaTyped for Accept {
    fn media(&self) -> &MediaType {
        &self.media
    }

    fn set_media_type(&mut self, media_type: &str, subtype: &str) -> Result<()> {
        self.media.set_essence(media_type, subtype)
    }

    fn set_media_param(&mut self, param: Parameter) -> Result<()> {
        self.media.set_param(param)
    }
}

impl PartialEq for Accept {
    fn eq(&self, other: &Self) -> bool {
        self.media == other.media && self.accept == other.accept
    }
}

impl_header_conversions!(Accept);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::group::HeaderFieldGroup;
    use crate::types::qvalue::QValue;

    #[test]
    fn test_default_is_sdp() {
        let accept = Accept::default();
        assert_eq!(accept.media_type(), "application");
        assert_eq!(accept.media_subtype(), "sdp");
        assert_eq!(accept.q(), None);
        assert_eq!(accept.to_string(), "Accept: application/sdp");
    }

    #[test]
    fn test_media_params_end_at_q() {
        let accept = Accept::from_value("text/html;level=1;q=0.7;foo=bar").unwrap();
        assert_eq!(accept.media().params().len(), 1);
        assert_eq!(accept.params().len(), 1);
        assert_eq!(accept.value_string(), "text/html;level=1;q=0.7;foo=bar");
    }

    #[test]
    fn test_params_without_q_are_media_params() {
        let accept = Accept::from_value("application/sdp;level=1;x=y").unwrap();
        assert_eq!(accept.media().params().len(), 2);
        assert!(accept.params().is_empty());
    }

    #[test]
    fn test_q_boundaries() {
        assert_eq!(Accept::from_value("text/*;q=0").unwrap().q(), Some(QValue::MIN));
        assert_eq!(Accept::from_value("text/*;q=1").unwrap().q(), Some(QValue::MAX));

        let err = Accept::from_value("text/*;q=1.001").unwrap_err();
        assert!(matches!(err.validation_cause(), Some(Error::OutOfRange { .. })));
        let err = Accept::from_value("text/*;q=-0.001").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_add_param_routes_q() {
        let mut accept = Accept::new("application", "pidf+xml").unwrap();
        accept.add_param(Parameter::new("ext", "1").unwrap()).unwrap();
        accept.add_param(Parameter::new("q", "0.5").unwrap()).unwrap();
        assert_eq!(accept.value_string(), "application/pidf+xml;q=0.5;ext=1");
        assert!(accept.add_param(Parameter::new("q", "2").unwrap()).is_err());

        assert!(accept.remove_param("q").is_some());
        assert_eq!(accept.q(), None);
    }

    #[test]
    fn test_case_insensitive_equality() {
        let a = Accept::from_value("Application/SDP;Level=1").unwrap();
        let b = Accept::from_value("application/sdp;level=1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unmatched_value_leaves_field_empty() {
        let accept = Accept::from_value("not a media type").unwrap();
        assert!(!accept.is_valid());
        assert_eq!(accept.value_string(), "");
    }

    #[test]
    fn test_group() {
        let group = HeaderFieldGroup::<Accept>::parse("Accept: application/sdp;q=0.8, */*;q=0.1").unwrap();
        assert_eq!(group.len(), 2);
        assert!(group.get(1).unwrap().media().is_range());
        assert_eq!(group.value_string(), "application/sdp;q=0.8, */*;q=0.1");
    }
}
