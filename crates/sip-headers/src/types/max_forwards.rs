//! # SIP Max-Forwards Header
//!
//! The Max-Forwards header field limits the number of hops a request may
//! take ([RFC 3261 Section 20.22](https://datatracker.ietf.org/doc/html/rfc3261#section-20.22)).
//!
//! ```text
//! Max-Forwards = "Max-Forwards" HCOLON 1*DIGIT
//! ```
//!
//! Values are held in a byte, so anything above 255 is a range error
//! rather than being clamped.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let mut hops = MaxForwards::default();
//! assert_eq!(hops.hops(), Some(70));
//! assert_eq!(hops.decrement().unwrap(), 69);
//!
//! assert!("Max-Forwards: 256".parse::<MaxForwards>().is_err());
//! ```

use nom::character::complete::digit1;
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::defaults::DEFAULT_MAX_FORWARDS;
use crate::error::{Error, Result};
use crate::parser::parse_complete;

/// The Max-Forwards header field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxForwards {
    hops: Option<u8>,
}

fn to_hops(value: u32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::range("Max-Forwards", value, u8::MIN, u8::MAX))
}

impl MaxForwards {
    pub fn new(hops: u32) -> Result<Self> {
        Ok(MaxForwards {
            hops: Some(to_hops(hops)?),
        })
    }

    pub fn hops(&self) -> Option<u8> {
        self.hops
    }

    pub fn set_hops(&mut self, hops: u32) -> Result<()> {
        self.hops = Some(to_hops(hops)?);
        Ok(())
    }

    /// Takes one hop off the counter and returns what is left. Fails when
    /// the counter is unset or already zero.
    pub fn decrement(&mut self) -> Result<u8> {
        let hops = self.hops.ok_or(Error::missing("Max-Forwards"))?;
        let left = hops
            .checked_sub(1)
            .ok_or_else(|| Error::range("Max-Forwards", -1, u8::MIN, u8::MAX))?;
        self.hops = Some(left);
        Ok(left)
    }
}

impl Default for MaxForwards {
    fn default() -> Self {
        MaxForwards {
            hops: Some(DEFAULT_MAX_FORWARDS),
        }
    }
}

impl HeaderField for MaxForwards {
    const NAME: &'static str = "Max-Forwards";

    fn reset(&mut self) {
        self.hops = None;
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some(digits) = parse_complete(digit1, value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        // Any run of digits beyond u32 is out of range as well
        let hops = digits
            .parse::<u32>()
            .map_err(|_| Error::range("Max-Forwards", digits, u8::MIN, u8::MAX))?;
        self.hops = Some(to_hops(hops)?);
        Ok(())
    }

    fn value_string(&self) -> String {
        self.hops.map(|h| h.to_string()).unwrap_or_default()
    }

    fn is_valid(&self) -> bool {
        self.hops.is_some()
    }
}

impl_header_conversions!(MaxForwards);
