//! # SIP Call-Info Header
//!
//! The Call-Info header field points to additional information about the
//! caller or callee
//! ([RFC 3261 Section 20.9](https://datatracker.ietf.org/doc/html/rfc3261#section-20.9)).
//!
//! ```text
//! Call-Info  = "Call-Info" HCOLON info *(COMMA info)
//! info       = LAQUOT absoluteURI RAQUOT *( SEMI info-param)
//! info-param = ( "purpose" EQUAL ( "icon" / "info" / "card" / token ) ) / generic-param
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let infos = HeaderFieldGroup::<CallInfo>::parse(
//!     "Call-Info: <http://wwww.example.com/alice/photo.jpg> ;purpose=icon, <http://www.example.com/alice/> ;purpose=info",
//! ).unwrap();
//! assert_eq!(infos.len(), 2);
//! assert_eq!(infos.get(0).unwrap().purpose(), Some("icon"));
//! ```

use nom::sequence::pair;
use serde::{Deserialize, Serialize};

use super::address::bracketed_uri;
use super::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use super::param::{ParamSpec, Parameter, ParameterList};
use super::uri::Uri;
use crate::error::{Error, Result};
use crate::grammar::is_token;
use crate::parser::params::semicolon_params0;
use crate::parser::parse_complete;

/// One entry of the Call-Info header field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallInfo {
    uri: Option<Uri>,
    params: ParameterList,
}

fn validate_purpose(param: &Parameter) -> Result<()> {
    match param.value() {
        Some(purpose) if is_token(purpose) => Ok(()),
        Some(purpose) => Err(Error::format("purpose", purpose)),
        None => Err(Error::missing("purpose")),
    }
}

impl CallInfo {
    pub fn new(uri: Uri) -> Self {
        CallInfo {
            uri: Some(uri),
            params: ParameterList::new(),
        }
    }

    pub fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    pub fn set_uri(&mut self, uri: Uri) {
        self.uri = Some(uri);
    }

    /// `icon`, `info`, `card` or an extension token.
    pub fn purpose(&self) -> Option<&str> {
        self.params.value("purpose")
    }

    pub fn set_purpose(&mut self, purpose: &str) -> Result<()> {
        self.add_param(Parameter::new("purpose", purpose)?)
    }
}

impl HeaderField for CallInfo {
    const NAME: &'static str = "Call-Info";
    const ALLOW_MULTIPLE: bool = true;

    fn reset(&mut self) {
        self.uri = None;
        self.params.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((uri, params)) = parse_complete(pair(bracketed_uri, semicolon_params0), value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.uri = Some(uri.trim().parse()?);
        self.params = Self::PARAMS.collect(Self::NAME, params)?;
        Ok(())
    }

    fn value_string(&self) -> String {
        match &self.uri {
            Some(uri) => format!("<{}>{}", uri, self.params),
            None => String::new(),
        }
    }

    fn is_valid(&self) -> bool {
        self.uri.is_some()
    }
}

impl Parameterized for CallInfo {
    const PARAMS: ParamSpec = ParamSpec {
        known: &["purpose"],
        allow_generic: true,
        validate: validate_purpose,
    };

    fn params(&self) -> &ParameterList {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }
}

impl PartialEq for CallInfo {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri && self.params == other.params
    }
}

impl_header_conversions!(CallInfo);
