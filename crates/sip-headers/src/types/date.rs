//! # SIP Date Header
//!
//! The Date header field carries the date and time the message was
//! originated ([RFC 3261 Section 20.17](https://datatracker.ietf.org/doc/html/rfc3261#section-20.17)).
//! SIP restricts the RFC 1123 date to the `GMT` zone:
//!
//! ```text
//! Date = "Date" HCOLON SIP-date
//! Date: Sat, 13 Nov 2010 23:29:00 GMT
//! ```
//!
//! A value chrono cannot read as an RFC 2822 date leaves the field unset.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//! use chrono::{Datelike, TimeZone, Utc};
//!
//! let date: Date = "Date: Sat, 13 Nov 2010 23:29:00 GMT".parse().unwrap();
//! assert_eq!(date.date().unwrap().year(), 2010);
//!
//! let stamped = Date::new(Utc.with_ymd_and_hms(2023, 11, 15, 8, 12, 31).unwrap());
//! assert_eq!(stamped.to_string(), "Date: Wed, 15 Nov 2023 08:12:31 GMT");
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::error::Result;

const SIP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// The Date header field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    date: Option<DateTime<Utc>>,
}

impl Date {
    pub fn new(date: DateTime<Utc>) -> Self {
        Date { date: Some(date) }
    }

    /// The current time, truncated to whole seconds as it would be on the wire.
    pub fn now() -> Self {
        let now = Utc::now();
        Date {
            date: DateTime::from_timestamp(now.timestamp(), 0).or(Some(now)),
        }
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        self.date = Some(date);
    }
}

fn parse_sip_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, SIP_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

impl HeaderField for Date {
    const NAME: &'static str = "Date";

    fn reset(&mut self) {
        self.date = None;
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        match parse_sip_date(value) {
            Some(date) => self.date = Some(date),
            None => discard(Self::NAME, value),
        }
        Ok(())
    }

    fn value_string(&self) -> String {
        self.date
            .map(|date| date.format(SIP_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    fn is_valid(&self) -> bool {
        self.date.is_some()
    }
}

impl_header_conversions!(Date);
