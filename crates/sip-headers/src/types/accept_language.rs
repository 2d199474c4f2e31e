//! # SIP Accept-Language Header
//!
//! The Accept-Language header field lists the languages preferred for
//! reason phrases, session descriptions and status responses
//! ([RFC 3261 Section 20.3](https://datatracker.ietf.org/doc/html/rfc3261#section-20.3)).
//!
//! ```text
//! Accept-Language = "Accept-Language" HCOLON [ language *(COMMA language) ]
//! language        = language-range *(SEMI accept-param)
//! language-range  = ( ( 1*8ALPHA *( "-" 1*8ALPHA ) ) / "*" )
//! ```
//!
//! A range made of token characters that is not a valid language-range
//! (`en_US`) is a parse error rather than being silently dropped.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let group = HeaderFieldGroup::<AcceptLanguage>::parse("Accept-Language: da, en-gb;q=0.8, en;q=0.7").unwrap();
//! assert_eq!(group.len(), 3);
//! assert_eq!(group.get(1).unwrap().language(), "en-gb");
//!
//! assert!("en_US".parse::<AcceptLanguage>().is_err());
//! ```

use nom::sequence::pair;
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use super::param::{ParamSpec, Parameter, ParameterList};
use super::qvalue::{validate_q, AcceptParams, QualityValued};
use crate::error::{Error, Result};
use crate::grammar::is_unreserved_language_range;
use crate::parser::params::semicolon_params0;
use crate::parser::{parse_complete, token};

/// The Accept-Language header field: one language range with its accept-params.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcceptLanguage {
    language: String,
    accept: AcceptParams,
}

fn check_range(language: &str) -> Result<()> {
    if language.is_empty() {
        return Err(Error::missing("language range"));
    }
    if !is_unreserved_language_range(language) {
        return Err(Error::format("language range", language));
    }
    Ok(())
}

impl AcceptLanguage {
    pub fn new(language: &str) -> Result<Self> {
        check_range(language)?;
        Ok(AcceptLanguage {
            language: language.to_string(),
            accept: AcceptParams::new(),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: &str) -> Result<()> {
        check_range(language)?;
        self.language = language.to_string();
        Ok(())
    }
}

impl HeaderField for AcceptLanguage {
    const NAME: &'static str = "Accept-Language";
    const ALLOW_MULTIPLE: bool = true;

    fn reset(&mut self) {
        self.language.clear();
        self.accept.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((language, params)) = parse_complete(pair(token, semicolon_params0), value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        check_range(language)?;
        self.language = language.to_string();
        self.accept = AcceptParams::from_params(Self::NAME, &Self::PARAMS, params)?;
        Ok(())
    }

    fn value_string(&self) -> String {
        format!("{}{}", self.language, self.accept)
    }

    fn is_valid(&self) -> bool {
        !self.language.is_empty()
    }
}

impl Parameterized for AcceptLanguage {
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

impl QualityValued for AcceptLanguage {
    fn accept_params(&self) -> &AcceptParams {
        &self.accept
    }

    fn accept_params_mut(&mut self) -> &mut AcceptParams {
        &mut self.accept
    }
}

impl PartialEq for AcceptLanguage {
    fn eq(&self, other: &Self) -> bool {
        self.language.eq_ignore_ascii_case(&other.language) && self.accept == other.accept
    }
}

impl_header_conversions!(AcceptLanguage);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::qvalue::QValue;

    #[test]
    fn test_parse() {
        let language = AcceptLanguage::from_value("en-gb;q=0.8").unwrap();
        assert_eq!(language.language(), "en-gb");
        assert_eq!(language.q(), Some(QValue::from_thousandths(800).unwrap()));
    }

    #[test]
    fn test_malformed_range_is_parse_error() {
        let err = AcceptLanguage::from_value("en_US").unwrap_err();
        assert!(err.is_parse_error());
        assert!(matches!(err.validation_cause(), Some(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_default_is_empty() {
        let language = AcceptLanguage::default();
        assert_eq!(language.language(), "");
        assert!(!language.is_valid());
    }

    #[test]
    fn test_setter_rejects_bad_range() {
        let mut language = AcceptLanguage::new("fr").unwrap();
        assert!(language.set_language("toolonglanguage").is_err());
        assert!(matches!(language.set_language(""), Err(Error::MissingValue { .. })));
        assert_eq!(language.language(), "fr");
        language.set_language("*").unwrap();
        assert_eq!(language.to_string(), "Accept-Language: *");
    }

    #[test]
    fn test_equality_ignores_case() {
        assert_eq!(AcceptLanguage::new("EN-GB").unwrap(), AcceptLanguage::new("en-gb").unwrap());
    }
}
