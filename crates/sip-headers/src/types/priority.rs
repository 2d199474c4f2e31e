//! # SIP Priority Header
//!
//! The Priority header field indicates the urgency of a request as
//! perceived by the client
//! ([RFC 3261 Section 20.26](https://datatracker.ietf.org/doc/html/rfc3261#section-20.26)).
//!
//! ```text
//! Priority        = "Priority" HCOLON priority-value
//! priority-value  = "emergency" / "urgent" / "normal" / "non-urgent" / other-priority
//! other-priority  = token
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let priority: Priority = "Priority: Emergency".parse().unwrap();
//! assert_eq!(priority.level(), Some(&PriorityLevel::Emergency));
//! assert!(PriorityLevel::Emergency.is_higher_than(&PriorityLevel::Normal));
//!
//! assert_eq!(Priority::default().to_string(), "Priority: normal");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::error::{Error, Result};
use crate::grammar::is_token;
use crate::parser::{parse_complete, token};

/// A priority value. The four RFC 3261 levels are matched without regard
/// to case; any other token is kept as written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PriorityLevel {
    Emergency,
    Urgent,
    Normal,
    NonUrgent,
    Other(String),
}

impl PriorityLevel {
    /// Rank used for ordering. Lower is more urgent; extension tokens
    /// rank below every standard level.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Emergency => 0,
            Self::Urgent => 1,
            Self::Normal => 2,
            Self::NonUrgent => 3,
            Self::Other(_) => 99,
        }
    }

    pub fn is_higher_than(&self, other: &PriorityLevel) -> bool {
        self.rank() < other.rank()
    }

    fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "emergency" => Self::Emergency,
            "urgent" => Self::Urgent,
            "normal" => Self::Normal,
            "non-urgent" => Self::NonUrgent,
            _ => Self::Other(token.to_string()),
        }
    }
}

impl Default for PriorityLevel {
    fn default() -> Self {
        Self::Normal
    }
}

impl PartialEq for PriorityLevel {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Other(a), Self::Other(b)) => a.eq_ignore_ascii_case(b),
            _ => self.rank() == other.rank(),
        }
    }
}

impl Eq for PriorityLevel {}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emergency => f.write_str("emergency"),
            Self::Urgent => f.write_str("urgent"),
            Self::Normal => f.write_str("normal"),
            Self::NonUrgent => f.write_str("non-urgent"),
            Self::Other(token) => f.write_str(token),
        }
    }
}

impl FromStr for PriorityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::missing("priority"));
        }
        if !is_token(s) {
            return Err(Error::format("priority", s));
        }
        Ok(Self::from_token(s))
    }
}

/// The Priority header field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    level: Option<PriorityLevel>,
}

impl Priority {
    pub fn new(level: PriorityLevel) -> Result<Self> {
        let mut priority = Priority { level: None };
        priority.set_level(level)?;
        Ok(priority)
    }

    pub fn level(&self) -> Option<&PriorityLevel> {
        self.level.as_ref()
    }

    /// Sets the level. An extension level must be a non-empty token.
    pub fn set_level(&mut self, level: PriorityLevel) -> Result<()> {
        if let PriorityLevel::Other(token) = &level {
            token.parse::<PriorityLevel>()?;
        }
        self.level = Some(level);
        Ok(())
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority {
            level: Some(PriorityLevel::Normal),
        }
    }
}

impl HeaderField for Priority {
    const NAME: &'static str = "Priority";

    fn reset(&mut self) {
        self.level = None;
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        match parse_complete(token, value) {
            Some(level) => self.level = Some(PriorityLevel::from_token(level)),
            None => discard(Self::NAME, value),
        }
        Ok(())
    }

    fn value_string(&self) -> String {
        self.level.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    fn is_valid(&self) -> bool {
        self.level.is_some()
    }
}

impl_header_conversions!(Priority);
