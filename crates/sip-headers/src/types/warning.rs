//! # SIP Warning Header
//!
//! This module provides an implementation of the SIP Warning header as defined in
//! [RFC 3261 Section 20.43](https://datatracker.ietf.org/doc/html/rfc3261#section-20.43).
//!
//! The Warning header field carries additional information about the status
//! of a response:
//!
//! ```text
//! Warning        = "Warning" HCOLON warning-value *(COMMA warning-value)
//! warning-value  = warn-code SP warn-agent SP warn-text
//! warn-code      = 3DIGIT
//! warn-agent     = hostport / pseudonym
//! warn-text      = quoted-string
//! ```
//!
//! ## Warning Codes
//!
//! RFC 3261 defines several standard warning codes, including:
//!
//! - 300: Incompatible network protocol
//! - 301: Incompatible network address formats
//! - 302: Incompatible transport protocol
//! - 303: Incompatible bandwidth units
//! - 305: Incompatible media format
//! - 306: Attribute not understood
//! - 307: Session description parameter not understood
//! - 330: Multicast not available
//! - 331: Unicast not available
//! - 370: Insufficient bandwidth
//! - 399: Miscellaneous warning
//!
//! The agent compares without regard to case; the text does not.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let warning: Warning = r#"Warning: 307 isi.edu "Session parameter 'foo' not understood""#.parse().unwrap();
//! assert_eq!(warning.code(), Some(307));
//! assert_eq!(warning.agent(), "isi.edu");
//! assert_eq!(warning.text(), "Session parameter 'foo' not understood");
//!
//! let warning = Warning::new(370, "example.com", "Insufficient bandwidth").unwrap();
//! assert_eq!(warning.value_string(), "370 example.com \"Insufficient bandwidth\"");
//! ```

use nom::{
    bytes::complete::{take_while1, take_while_m_n},
    sequence::tuple,
};
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::error::{Error, Result};
use crate::grammar::{is_token, to_quoted_string};
use crate::parser::quoted::{quoted_string, unescape};
use crate::parser::values::hostport;
use crate::parser::whitespace::lws;
use crate::parser::parse_complete;

pub const MIN_WARN_CODE: u16 = 100;
pub const MAX_WARN_CODE: u16 = 999;

/// One warning-value of the Warning header field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Warning {
    code: Option<u16>,
    agent: String,
    text: String,
}

fn check_code(code: u16) -> Result<u16> {
    if (MIN_WARN_CODE..=MAX_WARN_CODE).contains(&code) {
        Ok(code)
    } else {
        Err(Error::range("warn-code", code, MIN_WARN_CODE, MAX_WARN_CODE))
    }
}

// warn-agent = hostport / pseudonym
fn check_agent(agent: &str) -> Result<()> {
    if agent.is_empty() {
        return Err(Error::missing("warn-agent"));
    }
    if parse_complete(hostport, agent).is_some() || is_token(agent) {
        Ok(())
    } else {
        Err(Error::format("warn-agent", agent))
    }
}

fn check_text(text: &str) -> Result<()> {
    if text.contains(['\r', '\n']) {
        return Err(Error::format("warn-text", text));
    }
    Ok(())
}

impl Warning {
    pub fn new(code: u16, agent: &str, text: &str) -> Result<Self> {
        check_agent(agent)?;
        check_text(text)?;
        Ok(Warning {
            code: Some(check_code(code)?),
            agent: agent.to_string(),
            text: text.to_string(),
        })
    }

    pub fn code(&self) -> Option<u16> {
        self.code
    }

    pub fn set_code(&mut self, code: u16) -> Result<()> {
        self.code = Some(check_code(code)?);
        Ok(())
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn set_agent(&mut self, agent: &str) -> Result<()> {
        check_agent(agent)?;
        self.agent = agent.to_string();
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the warning text. It may be empty; it is written quoted.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        check_text(text)?;
        self.text = text.to_string();
        Ok(())
    }
}

impl HeaderField for Warning {
    const NAME: &'static str = "Warning";
    const ALLOW_MULTIPLE: bool = true;

    fn reset(&mut self) {
        self.code = None;
        self.agent.clear();
        self.text.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((code, _, agent, _, text)) = parse_complete(
            tuple((
                take_while_m_n(3, 3, |c: char| c.is_ascii_digit()),
                lws,
                take_while1(|c: char| !c.is_whitespace() && c != '"'),
                lws,
                quoted_string,
            )),
            value,
        ) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        let code: u16 = code.parse().map_err(|_| Error::format("warn-code", code))?;
        self.code = Some(check_code(code)?);
        check_agent(agent)?;
        self.agent = agent.to_string();
        self.text = unescape(text);
        Ok(())
    }

    fn value_string(&self) -> String {
        match self.code {
            Some(code) => format!("{} {} {}", code, self.agent, to_quoted_string(&self.text)),
            None => String::new(),
        }
    }

    fn is_valid(&self) -> bool {
        self.code.is_some() && !self.agent.is_empty()
    }
}

impl PartialEq for Warning {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.agent.eq_ignore_ascii_case(&other.agent) && self.text == other.text
    }
}

impl_header_conversions!(Warning);
