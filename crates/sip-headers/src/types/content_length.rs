//! # SIP Content-Length Header
//!
//! The Content-Length header field gives the size of the message body in
//! octets ([RFC 3261 Section 20.14](https://datatracker.ietf.org/doc/html/rfc3261#section-20.14)).
//!
//! ```text
//! Content-Length = ( "Content-Length" / "l" ) HCOLON 1*DIGIT
//! ```
//!
//! Anything that is not a run of digits (`-5`, `twelve`) leaves the length
//! unset. A run of digits too large for 32 bits is a range error.

use nom::character::complete::digit1;
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::error::{Error, Result};
use crate::parser::parse_complete;

/// The Content-Length header field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLength {
    length: Option<u32>,
}

impl ContentLength {
    pub fn new(length: u32) -> Self {
        ContentLength { length: Some(length) }
    }

    pub fn length(&self) -> Option<u32> {
        self.length
    }

    pub fn set_length(&mut self, length: u32) {
        self.length = Some(length);
    }
}

impl HeaderField for ContentLength {
    const NAME: &'static str = "Content-Length";
    const COMPACT_NAME: Option<&'static str> = Some("l");

    fn reset(&mut self) {
        self.length = None;
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some(digits) = parse_complete(digit1, value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        let length = digits
            .parse::<u32>()
            .map_err(|_| Error::range("Content-Length", digits, 0, u32::MAX))?;
        self.length = Some(length);
        Ok(())
    }

    fn value_string(&self) -> String {
        self.length.map(|l| l.to_string()).unwrap_or_default()
    }

    fn is_valid(&self) -> bool {
        self.length.is_some()
    }
}

impl_header_conversions!(ContentLength);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let length: ContentLength = "Content-Length: 349".parse().unwrap();
        assert_eq!(length.length(), Some(349));
        assert_eq!(length.to_string(), "Content-Length: 349");

        let compact: ContentLength = "l: 0".parse().unwrap();
        assert_eq!(compact.length(), Some(0));
    }

    #[test]
    fn test_non_digits_leave_length_unset() {
        for input in ["-5", "twelve", "12 bytes"] {
            let length = ContentLength::from_value(input).unwrap();
            assert_eq!(length.length(), None, "input {input}");
            assert!(!length.is_valid());
        }
    }

    #[test]
    fn test_overflow_is_range_error() {
        let err = ContentLength::from_value("4294967296").unwrap_err();
        assert!(matches!(err.validation_cause(), Some(Error::OutOfRange { .. })));
        assert_eq!(ContentLength::from_value("4294967295").unwrap().length(), Some(u32::MAX));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = ContentLength::new(10);
        let mut copy = original.clone();
        copy.set_length(20);
        assert_eq!(original.length(), Some(10));
    }
}
