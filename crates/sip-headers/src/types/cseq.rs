//! # SIP CSeq Header
//!
//! The CSeq header field orders transactions within a dialog
//! ([RFC 3261 Section 20.16](https://datatracker.ietf.org/doc/html/rfc3261#section-20.16)).
//!
//! ```text
//! CSeq = "CSeq" HCOLON 1*DIGIT LWS Method
//! ```
//!
//! The sequence number is a 32-bit unsigned value. A new [`CSeq`] starts
//! from a random number below 2**31 so that later requests have room to
//! count upwards.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let mut cseq: CSeq = "CSeq: 4711 INVITE".parse().unwrap();
//! assert_eq!(cseq.sequence(), 4711);
//! assert_eq!(cseq.method(), "INVITE");
//!
//! cseq.next();
//! cseq.set_method("ACK").unwrap();
//! assert_eq!(cseq.to_string(), "CSeq: 4712 ACK");
//! ```

use nom::{character::complete::digit1, sequence::tuple};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::error::{Error, Result};
use crate::grammar::is_token;
use crate::id;
use crate::parser::whitespace::lws;
use crate::parser::{parse_complete, token};

/// The CSeq header field: sequence number and request method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CSeq {
    sequence: u32,
    method: String,
}

impl CSeq {
    pub fn new(sequence: u32, method: &str) -> Result<Self> {
        let mut cseq = CSeq {
            sequence,
            method: String::new(),
        };
        cseq.set_method(method)?;
        Ok(cseq)
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn set_sequence(&mut self, sequence: u32) {
        self.sequence = sequence;
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn set_method(&mut self, method: &str) -> Result<()> {
        if method.is_empty() {
            return Err(Error::missing("method"));
        }
        if !is_token(method) {
            return Err(Error::format("method", method));
        }
        self.method = method.to_string();
        Ok(())
    }

    /// Advances to the next sequence number. Wraps to a fresh random
    /// value when the counter is exhausted.
    pub fn next(&mut self) -> u32 {
        self.sequence = match self.sequence.checked_add(1) {
            Some(next) => next,
            None => {
                debug!("CSeq sequence exhausted, reseeding");
                id::new_sequence()
            }
        };
        self.sequence
    }

    /// Replaces the sequence number with a fresh random value.
    pub fn recreate_sequence(&mut self) -> u32 {
        self.sequence = id::new_sequence();
        self.sequence
    }
}

impl Default for CSeq {
    fn default() -> Self {
        CSeq {
            sequence: id::new_sequence(),
            method: String::new(),
        }
    }
}

impl HeaderField for CSeq {
    const NAME: &'static str = "CSeq";

    fn reset(&mut self) {
        self.sequence = 0;
        self.method.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((digits, _, method)) = parse_complete(tuple((digit1, lws, token)), value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.sequence = digits
            .parse()
            .map_err(|_| Error::range("sequence", digits, 0, u32::MAX))?;
        self.method = method.to_string();
        Ok(())
    }

    fn value_string(&self) -> String {
        if self.method.is_empty() {
            return String::new();
        }
        format!("{} {}", self.sequence, self.method)
    }

    fn is_valid(&self) -> bool {
        !self.method.is_empty()
    }
}

// The method compares ignoring case, like the other token values in this
// crate, although RFC 3261 section 7.1 makes methods case-sensitive. The
// spelling as parsed is what gets written back.
impl PartialEq for CSeq {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence && self.method.eq_ignore_ascii_case(&other.method)
    }
}

impl_header_conversions!(CSeq);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let cseq = CSeq::from_value("4711 INVITE").unwrap();
        assert_eq!(cseq.sequence(), 4711);
        assert_eq!(cseq.method(), "INVITE");
        assert_eq!(cseq.value_string(), "4711 INVITE");
    }

    #[test]
    fn test_bounds() {
        assert_eq!(CSeq::from_value("4294967295 BYE").unwrap().sequence(), u32::MAX);
        let err = CSeq::from_value("4294967296 BYE").unwrap_err();
        assert!(matches!(err.validation_cause(), Some(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_no_match() {
        let cseq = CSeq::from_value("INVITE 1").unwrap();
        assert!(!cseq.is_valid());
        assert_eq!(cseq.sequence(), 0);
    }

    #[test]
    fn test_default_seeds_sequence() {
        let cseq = CSeq::default();
        assert!(cseq.sequence() >= 1 && cseq.sequence() <= i32::MAX as u32);
        assert_eq!(cseq.method(), "");
    }

    #[test]
    fn test_next_wraps() {
        let mut cseq = CSeq::new(u32::MAX, "OPTIONS").unwrap();
        let next = cseq.next();
        assert!(next >= 1 && next <= i32::MAX as u32);

        let mut cseq = CSeq::new(1, "OPTIONS").unwrap();
        assert_eq!(cseq.next(), 2);
    }

    #[test]
    fn test_method_validation() {
        let mut cseq = CSeq::new(1, "INVITE").unwrap();
        assert!(matches!(cseq.set_method(""), Err(Error::MissingValue { .. })));
        assert!(matches!(cseq.set_method("IN VITE"), Err(Error::InvalidFormat { .. })));
        assert_eq!(cseq.method(), "INVITE");
    }

    #[test]
    fn test_method_case_insensitive_equality() {
        assert_eq!(CSeq::new(7, "invite").unwrap(), CSeq::new(7, "INVITE").unwrap());
        assert_ne!(CSeq::new(7, "INVITE").unwrap(), CSeq::new(8, "INVITE").unwrap());

        let lower = CSeq::from_value("7 invite").unwrap();
        assert_eq!(lower.method(), "invite");
        assert_eq!(lower.value_string(), "7 invite");
    }
}
