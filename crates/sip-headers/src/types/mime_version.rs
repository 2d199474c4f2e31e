//! # SIP MIME-Version Header
//!
//! ([RFC 3261 Section 20.24](https://datatracker.ietf.org/doc/html/rfc3261#section-20.24))
//!
//! ```text
//! MIME-Version = "MIME-Version" HCOLON 1*DIGIT "." 1*DIGIT
//! ```

use nom::{
    character::complete::{char, digit1},
    sequence::separated_pair,
};
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::defaults::{DEFAULT_MIME_MAJOR, DEFAULT_MIME_MINOR};
use crate::error::{Error, Result};
use crate::parser::parse_complete;

/// The MIME-Version header field. Defaults to `1.0`.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// let version = MimeVersion::default();
/// assert_eq!(version.to_string(), "MIME-Version: 1.0");
///
/// let parsed: MimeVersion = "MIME-Version: 2.1".parse().unwrap();
/// assert_eq!(parsed.major_version(), Some(2));
/// assert_eq!(parsed.minor_version(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeVersion {
    major: Option<u32>,
    minor: Option<u32>,
}

impl MimeVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        MimeVersion {
            major: Some(major),
            minor: Some(minor),
        }
    }

    pub fn major_version(&self) -> Option<u32> {
        self.major
    }

    pub fn minor_version(&self) -> Option<u32> {
        self.minor
    }

    pub fn set_version(&mut self, major: u32, minor: u32) {
        self.major = Some(major);
        self.minor = Some(minor);
    }
}

impl Default for MimeVersion {
    fn default() -> Self {
        MimeVersion::new(DEFAULT_MIME_MAJOR, DEFAULT_MIME_MINOR)
    }
}

fn version_number(property: &'static str, digits: &str) -> Result<u32> {
    digits.parse().map_err(|_| Error::range(property, digits, 0, u32::MAX))
}

impl HeaderField for MimeVersion {
    const NAME: &'static str = "MIME-Version";

    fn reset(&mut self) {
        self.major = None;
        self.minor = None;
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((major, minor)) = parse_complete(separated_pair(digit1, char('.'), digit1), value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.major = Some(version_number("major version", major)?);
        self.minor = Some(version_number("minor version", minor)?);
        Ok(())
    }

    fn value_string(&self) -> String {
        match (self.major, self.minor) {
            (Some(major), Some(minor)) => format!("{}.{}", major, minor),
            _ => String::new(),
        }
    }

    fn is_valid(&self) -> bool {
        self.major.is_some() && self.minor.is_some()
    }
}

impl_header_conversions!(MimeVersion);
