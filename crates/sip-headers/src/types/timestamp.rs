//! # SIP Timestamp Header
//!
//! ([RFC 3261 Section 20.38](https://datatracker.ietf.org/doc/html/rfc3261#section-20.38))
//!
//! ```text
//! Timestamp = "Timestamp" HCOLON 1*(DIGIT) [ "." *(DIGIT) ] [ LWS delay ]
//! delay     = *(DIGIT) [ "." *(DIGIT) ]
//! ```
//!
//! Both numbers are kept as non-NaN floats so the field stays `Eq`.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let stamp: Timestamp = "Timestamp: 54.21 1.5".parse().unwrap();
//! assert_eq!(stamp.time(), Some(54.21));
//! assert_eq!(stamp.delay(), Some(1.5));
//! assert_eq!(stamp.value_string(), "54.21 1.5");
//! ```

use nom::{
    character::complete::{char, digit0, digit1},
    combinator::{opt, recognize, verify},
    sequence::{pair, preceded},
};
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::error::{Error, Result};
use crate::parser::whitespace::lws;
use crate::parser::{parse_complete, ParseResult};

/// The Timestamp header field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    time: Option<NotNan<f64>>,
    delay: Option<NotNan<f64>>,
}

fn to_seconds(property: &'static str, value: f64) -> Result<NotNan<f64>> {
    let seconds = NotNan::new(value).map_err(|_| Error::format(property, value.to_string()))?;
    if !seconds.is_finite() || *seconds < 0.0 {
        return Err(Error::range(property, value, 0, f64::MAX));
    }
    Ok(seconds)
}

// 1*(DIGIT) [ "." *(DIGIT) ]
fn time_text(input: &str) -> ParseResult<&str> {
    recognize(pair(digit1, opt(pair(char('.'), digit0))))(input)
}

// *(DIGIT) [ "." *(DIGIT) ], non-empty
fn delay_text(input: &str) -> ParseResult<&str> {
    verify(recognize(pair(digit0, opt(pair(char('.'), digit0)))), |s: &str| {
        s.chars().any(|c| c.is_ascii_digit())
    })(input)
}

fn read_seconds(property: &'static str, text: &str) -> Result<NotNan<f64>> {
    let value: f64 = text.parse().map_err(|_| Error::format(property, text))?;
    to_seconds(property, value)
}

impl Timestamp {
    pub fn new(time: f64) -> Result<Self> {
        Ok(Timestamp {
            time: Some(to_seconds("timestamp", time)?),
            delay: None,
        })
    }

    pub fn with_delay(time: f64, delay: f64) -> Result<Self> {
        Ok(Timestamp {
            time: Some(to_seconds("timestamp", time)?),
            delay: Some(to_seconds("delay", delay)?),
        })
    }

    pub fn time(&self) -> Option<f64> {
        self.time.map(NotNan::into_inner)
    }

    pub fn delay(&self) -> Option<f64> {
        self.delay.map(NotNan::into_inner)
    }

    pub fn set_time(&mut self, time: f64) -> Result<()> {
        self.time = Some(to_seconds("timestamp", time)?);
        Ok(())
    }

    pub fn set_delay(&mut self, delay: Option<f64>) -> Result<()> {
        self.delay = delay.map(|d| to_seconds("delay", d)).transpose()?;
        Ok(())
    }
}

impl HeaderField for Timestamp {
    const NAME: &'static str = "Timestamp";

    fn reset(&mut self) {
        self.time = None;
        self.delay = None;
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((time, delay)) = parse_complete(pair(time_text, opt(preceded(lws, delay_text))), value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.time = Some(read_seconds("timestamp", time)?);
        self.delay = delay.map(|d| read_seconds("delay", d)).transpose()?;
        Ok(())
    }

    fn value_string(&self) -> String {
        match (self.time, self.delay) {
            (Some(time), Some(delay)) => format!("{} {}", time, delay),
            (Some(time), None) => time.to_string(),
            _ => String::new(),
        }
    }

    fn is_valid(&self) -> bool {
        self.time.is_some()
    }
}

impl_header_conversions!(Timestamp);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_only() {
        let stamp = Timestamp::from_value("54").unwrap();
        assert_eq!(stamp.time(), Some(54.0));
        assert_eq!(stamp.delay(), None);
        assert_eq!(stamp.value_string(), "54");
    }

    #[test]
    fn test_delay_forms() {
        assert_eq!(Timestamp::from_value("1. .5").unwrap().delay(), Some(0.5));
        assert!(!Timestamp::from_value("1 .").unwrap().is_valid());
        assert!(!Timestamp::from_value(".5").unwrap().is_valid());
    }

    #[test]
    fn test_setters_reject_negative_and_nan() {
        assert!(matches!(Timestamp::new(-1.0), Err(Error::OutOfRange { .. })));
        assert!(matches!(Timestamp::new(f64::NAN), Err(Error::InvalidFormat { .. })));
        let mut stamp = Timestamp::new(3.0).unwrap();
        assert!(stamp.set_delay(Some(f64::INFINITY)).is_err());
        assert_eq!(stamp.delay(), None);
    }
}
