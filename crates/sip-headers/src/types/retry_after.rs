//! # SIP Retry-After Header
//!
//! The Retry-After header field tells the client how long the service is
//! expected to be unavailable
//! ([RFC 3261 Section 20.33](https://datatracker.ietf.org/doc/html/rfc3261#section-20.33)).
//!
//! ```text
//! Retry-After = "Retry-After" HCOLON delta-seconds [ comment ] *( SEMI retry-param )
//! retry-param = ("duration" EQUAL delta-seconds) / generic-param
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let retry: RetryAfter = "Retry-After: 18000;duration=3600".parse().unwrap();
//! assert_eq!(retry.delay(), Some(18000));
//! assert_eq!(retry.duration(), Some(3600));
//!
//! let retry: RetryAfter = "120 (I'm in a meeting)".parse().unwrap();
//! assert_eq!(retry.comment(), Some("I'm in a meeting"));
//! assert_eq!(retry.to_string(), "Retry-After: 120 (I'm in a meeting)");
//! ```

use nom::{
    character::complete::digit1,
    combinator::opt,
    sequence::{preceded, tuple},
};
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use super::param::{ParamSpec, Parameter, ParameterList};
use crate::error::{Error, Result};
use crate::grammar::to_comment;
use crate::parser::params::semicolon_params0;
use crate::parser::quoted::{comment, unescape};
use crate::parser::whitespace::sws;
use crate::parser::parse_complete;

/// The Retry-After header field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryAfter {
    delay: Option<u32>,
    comment: Option<String>,
    params: ParameterList,
}

fn delta_seconds(property: &'static str, digits: &str) -> Result<u32> {
    digits.parse().map_err(|_| Error::range(property, digits, 0, u32::MAX))
}

fn validate_duration(param: &Parameter) -> Result<()> {
    match param.value() {
        Some(value) if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) => {
            delta_seconds("duration", value).map(|_| ())
        }
        Some(value) => Err(Error::format("duration", value)),
        None => Err(Error::missing("duration")),
    }
}

impl RetryAfter {
    pub fn new(delay: u32) -> Self {
        RetryAfter {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn delay(&self) -> Option<u32> {
        self.delay
    }

    pub fn set_delay(&mut self, delay: u32) {
        self.delay = Some(delay);
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Sets or clears the free-text comment. It is written in parentheses.
    pub fn set_comment(&mut self, comment: Option<&str>) -> Result<()> {
        match comment {
            Some("") => return Err(Error::missing("comment")),
            Some(text) if text.contains(['\r', '\n']) => return Err(Error::format("comment", text)),
            _ => {}
        }
        self.comment = comment.map(str::to_string);
        Ok(())
    }

    pub fn duration(&self) -> Option<u32> {
        self.params.value("duration").and_then(|d| d.parse().ok())
    }

    pub fn set_duration(&mut self, duration: u32) -> Result<()> {
        self.add_param(Parameter::new("duration", duration.to_string())?)
    }
}

impl HeaderField for RetryAfter {
    const NAME: &'static str = "Retry-After";

    fn reset(&mut self) {
        self.delay = None;
        self.comment = None;
        self.params.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((digits, comment, params)) = parse_complete(
            tuple((digit1, opt(preceded(sws, comment)), semicolon_params0)),
            value,
        ) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.delay = Some(delta_seconds("delay", digits)?);
        self.comment = comment.map(unescape);
        self.params = Self::PARAMS.collect(Self::NAME, params)?;
        Ok(())
    }

    fn value_string(&self) -> String {
        let Some(delay) = self.delay else {
            return String::new();
        };
        match &self.comment {
            Some(comment) => format!("{} {}{}", delay, to_comment(comment), self.params),
            None => format!("{}{}", delay, self.params),
        }
    }

    fn is_valid(&self) -> bool {
        self.delay.is_some()
    }
}

impl Parameterized for RetryAfter {
    const PARAMS: ParamSpec = ParamSpec {
        known: &["duration"],
        allow_generic: true,
        validate: validate_duration,
    };

    fn params(&self) -> &ParameterList {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }
}

impl PartialEq for RetryAfter {
    fn eq(&self, other: &Self) -> bool {
        self.delay == other.delay && self.comment == other.comment && self.params == other.params
    }
}

impl_header_conversions!(RetryAfter);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_form() {
        let retry = RetryAfter::from_value("18000 (back at six) ;duration=3600;x").unwrap();
        assert_eq!(retry.delay(), Some(18000));
        assert_eq!(retry.comment(), Some("back at six"));
        assert_eq!(retry.duration(), Some(3600));
        assert!(retry.params().contains("x"));
        assert_eq!(retry.value_string(), "18000 (back at six);duration=3600;x");
    }

    #[test]
    fn test_bad_duration() {
        let err = RetryAfter::from_value("10;duration=soon").unwrap_err();
        assert!(matches!(err.validation_cause(), Some(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_comment_escaping() {
        let mut retry = RetryAfter::new(5);
        retry.set_comment(Some("closed (holiday)")).unwrap();
        assert_eq!(retry.value_string(), "5 (closed \\(holiday\\))");
        let parsed = RetryAfter::from_value(&retry.value_string()).unwrap();
        assert_eq!(parsed.comment(), Some("closed (holiday)"));
    }

    #[test]
    fn test_unmatched() {
        assert!(!RetryAfter::from_value("tomorrow").unwrap().is_valid());
    }

    #[test]
    fn test_deeply_nested_comment_is_dropped() {
        let value = format!("120 {}{}", "(".repeat(100_000), ")".repeat(100_000));
        let retry = RetryAfter::from_value(&value).unwrap();
        assert!(!retry.is_valid());
        assert_eq!(retry.comment(), None);
    }
}
