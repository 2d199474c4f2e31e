//! # SIP Content-Disposition Header
//!
//! ([RFC 3261 Section 20.11](https://datatracker.ietf.org/doc/html/rfc3261#section-20.11))
//!
//! ```text
//! Content-Disposition = "Content-Disposition" HCOLON disp-type *( SEMI disp-param )
//! disp-type           = "render" / "session" / "icon" / "alert" / disp-extension-token
//! handling-param      = "handling" EQUAL ( "optional" / "required" / other-handling )
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let disposition: ContentDisposition = "session;handling=optional".parse().unwrap();
//! assert_eq!(disposition.disposition_type(), "session");
//! assert_eq!(disposition.handling(), Some("optional"));
//! ```

use nom::sequence::pair;
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use super::param::{ParamSpec, Parameter, ParameterList};
use crate::error::{Error, Result};
use crate::grammar::is_token;
use crate::parser::params::semicolon_params0;
use crate::parser::{parse_complete, token};

/// The Content-Disposition header field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentDisposition {
    disposition_type: String,
    params: ParameterList,
}

fn validate_handling(param: &Parameter) -> Result<()> {
    match param.value() {
        Some(handling) if is_token(handling) => Ok(()),
        Some(handling) => Err(Error::format("handling", handling)),
        None => Err(Error::missing("handling")),
    }
}

fn check_type(disposition_type: &str) -> Result<()> {
    if disposition_type.is_empty() {
        return Err(Error::missing("disposition type"));
    }
    if !is_token(disposition_type) {
        return Err(Error::format("disposition type", disposition_type));
    }
    Ok(())
}

impl ContentDisposition {
    pub fn new(disposition_type: &str) -> Result<Self> {
        check_type(disposition_type)?;
        Ok(ContentDisposition {
            disposition_type: disposition_type.to_string(),
            params: ParameterList::new(),
        })
    }

    pub fn disposition_type(&self) -> &str {
        &self.disposition_type
    }

    pub fn set_disposition_type(&mut self, disposition_type: &str) -> Result<()> {
        check_type(disposition_type)?;
        self.disposition_type = disposition_type.to_string();
        Ok(())
    }

    pub fn handling(&self) -> Option<&str> {
        self.params.value("handling")
    }

    pub fn set_handling(&mut self, handling: &str) -> Result<()> {
        self.add_param(Parameter::new("handling", handling)?)
    }
}

impl HeaderField for ContentDisposition {
    const NAME: &'static str = "Content-Disposition";

    fn reset(&mut self) {
        self.disposition_type.clear();
        self.params.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((disposition_type, params)) = parse_complete(pair(token, semicolon_params0), value)
        else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.disposition_type = disposition_type.to_string();
        self.params = Self::PARAMS.collect(Self::NAME, params)?;
        Ok(())
    }

    fn value_string(&self) -> String {
        format!("{}{}", self.disposition_type, self.params)
    }

    fn is_valid(&self) -> bool {
        !self.disposition_type.is_empty()
    }
}

impl Parameterized for ContentDisposition {
    const PARAMS: ParamSpec = ParamSpec {
        known: &["handling"],
        allow_generic: true,
        validate: validate_handling,
    };

    fn params(&self) -> &ParameterList {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }
}

impl PartialEq for ContentDisposition {
    fn eq(&self, other: &Self) -> bool {
        self.disposition_type.eq_ignore_ascii_case(&other.disposition_type) && self.params == other.params
    }
}

impl_header_conversions!(ContentDisposition);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_emit() {
        let disposition = ContentDisposition::from_value("Content-Disposition: render ; handling=required").unwrap();
        assert_eq!(disposition.to_string(), "Content-Disposition: render;handling=required");
    }

    #[test]
    fn test_handling_must_be_token() {
        let mut disposition = ContentDisposition::new("icon").unwrap();
        assert!(disposition.set_handling("not a token").is_err());
        assert_eq!(disposition.handling(), None);
        assert!(ContentDisposition::from_value("icon;handling=\"a b\"").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_equality() {
        let a = ContentDisposition::from_value("SESSION;handling=optional").unwrap();
        let b = ContentDisposition::from_value("session;handling=optional").unwrap();
        assert_eq!(a, b);
    }
}
