//! # SIP Accept-Encoding Header
//!
//! The Accept-Encoding header field restricts the content codings acceptable
//! in the response ([RFC 3261 Section 20.2](https://datatracker.ietf.org/doc/html/rfc3261#section-20.2)).
//!
//! ```text
//! Accept-Encoding = "Accept-Encoding" HCOLON [ encoding *(COMMA encoding) ]
//! encoding        = codings *(SEMI accept-param)
//! codings         = content-coding / "*"
//! ```
//!
//! A missing header means only `identity` is acceptable, which is the
//! default value here.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let encoding: AcceptEncoding = "gzip".parse().unwrap();
//! assert_eq!(encoding.encoding(), "gzip");
//! assert_eq!(encoding.to_string(), "Accept-Encoding: gzip");
//!
//! assert_eq!(AcceptEncoding::default().encoding(), "identity");
//! ```

use nom::sequence::pair;
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use super::param::{ParamSpec, Parameter, ParameterList};
use super::qvalue::{validate_q, AcceptParams, QualityValued};
use crate::defaults::DEFAULT_ACCEPT_ENCODING;
use crate::error::{Error, Result};
use crate::grammar::is_token;
use crate::parser::params::semicolon_params0;
use crate::parser::{parse_complete, token};

/// The Accept-Encoding header field: one coding with its accept-params.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptEncoding {
    encoding: String,
    accept: AcceptParams,
}

fn check_coding(encoding: &str) -> Result<()> {
    if encoding.is_empty() {
        return Err(Error::missing("encoding"));
    }
    if !is_token(encoding) {
        return Err(Error::format("encoding", encoding));
    }
    Ok(())
}

impl AcceptEncoding {
    pub fn new(encoding: &str) -> Result<Self> {
        check_coding(encoding)?;
        Ok(AcceptEncoding {
            encoding: encoding.to_string(),
            accept: AcceptParams::new(),
        })
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn set_encoding(&mut self, encoding: &str) -> Result<()> {
        check_coding(encoding)?;
        self.encoding = encoding.to_string();
        Ok(())
    }
}

impl Default for AcceptEncoding {
    fn default() -> Self {
        AcceptEncoding {
            encoding: DEFAULT_ACCEPT_ENCODING.to_string(),
            accept: AcceptParams::new(),
        }
    }
}

impl HeaderField for AcceptEncoding {
    const NAME: &'static str = "Accept-Encoding";
    const ALLOW_MULTIPLE: bool = true;

    fn reset(&mut self) {
        self.encoding.clear();
        self.accept.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((encoding, params)) = parse_complete(pair(token, semicolon_params0), value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.encoding = encoding.to_string();
        self.accept = AcceptParams::from_params(Self::NAME, &Self::PARAMS, params)?;
        Ok(())
    }

    fn value_string(&self) -> String {
        format!("{}{}", self.encoding, self.accept)
    }

    fn is_valid(&self) -> bool {
        !self.encoding.is_empty()
    }
}

impl Parameterized for AcceptEncoding {
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

impl QualityValued for AcceptEncoding {
    fn accept_params(&self) -> &AcceptParams {
        &self.accept
    }

    fn accept_params_mut(&mut self) -> &mut AcceptParams {
        &mut self.accept
    }
}

impl PartialEq for AcceptEncoding {
    fn eq(&self, other: &Self) -> bool {
        self.encoding.eq_ignore_ascii_case(&other.encoding) && self.accept == other.accept
    }
}

impl_header_conversions!(AcceptEncoding);
