//! # Repeated Headers
//!
//! A header whose grammar allows repetition can show up as several values
//! on one line (`Via: a, b`) or as several lines. [`HeaderFieldGroup`] holds
//! all values of one such header in order.
//!
//! Authorization, Proxy-Authorization, WWW-Authenticate and
//! Proxy-Authenticate repeat as separate lines only, since their values
//! carry commas of their own. [`AuthHeaderGroup`] keeps those entries and
//! always emits one line per entry.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let vias = HeaderFieldGroup::<Via>::parse(
//!     "Via: SIP/2.0/UDP first.example.com;branch=z9hG4bK1, SIP/2.0/TCP second.example.com;branch=z9hG4bK2",
//! ).unwrap();
//! assert_eq!(vias.len(), 2);
//! assert_eq!(vias.get(1).unwrap().host(), "second.example.com");
//!
//! // A group holding a single value compares equal to that value
//! let single = HeaderFieldGroup::<ContentEncoding>::parse("gzip").unwrap();
//! assert_eq!(single, ContentEncoding::new("gzip").unwrap());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::header::{strip_header_name, HeaderField};
use crate::error::{Error, Result};
use crate::parser::split_top_level;
use crate::parser::whitespace::unfold;

/// All values of one header, in message order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderFieldGroup<T> {
    entries: Vec<T>,
}

impl<T> Default for HeaderFieldGroup<T> {
    fn default() -> Self {
        HeaderFieldGroup { entries: Vec::new() }
    }
}

impl<T: HeaderField> HeaderFieldGroup<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one header line, splitting comma-separated values when the
    /// header allows it.
    pub fn parse(raw: &str) -> Result<Self> {
        let value = unfold(strip_header_name(T::NAME, T::COMPACT_NAME, raw));
        let mut group = Self::new();
        if T::COMMA_COMBINABLE {
            for part in split_top_level(&value, ',') {
                group.entries.push(T::from_value(part)?);
            }
        } else if !value.trim().is_empty() {
            group.entries.push(T::from_value(value.trim())?);
        }
        Ok(group)
    }

    /// Appends a value. Headers that do not repeat take a single value only.
    pub fn push(&mut self, entry: T) -> Result<()> {
        if !T::ALLOW_MULTIPLE && !self.entries.is_empty() {
            return Err(Error::format(T::NAME, entry.value_string()));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Parses `raw` as an additional header line and appends its values.
    pub fn extend_from_line(&mut self, raw: &str) -> Result<()> {
        for entry in Self::parse(raw)?.entries {
            self.push(entry)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }

    /// Values joined by `", "`, without the header name.
    pub fn value_string(&self) -> String {
        self.entries
            .iter()
            .map(HeaderField::value_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_valid(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(HeaderField::is_valid)
    }

    /// True when the group holds exactly one value, equal to `other`.
    pub fn is_single(&self, other: &T) -> bool {
        matches!(self.entries.as_slice(), [only] if only == other)
    }
}

impl<T: HeaderField> fmt::Display for HeaderFieldGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", T::NAME, self.value_string())
    }
}

impl<T: HeaderField> From<T> for HeaderFieldGroup<T> {
    fn from(entry: T) -> Self {
        HeaderFieldGroup { entries: vec![entry] }
    }
}

impl<'a, T> IntoIterator for &'a HeaderFieldGroup<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Repeated authentication headers. Each entry stays on its own line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthHeaderGroup<T> {
    entries: Vec<T>,
}

impl<T> Default for AuthHeaderGroup<T> {
    fn default() -> Self {
        AuthHeaderGroup { entries: Vec::new() }
    }
}

impl<T: HeaderField> AuthHeaderGroup<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Parses a single header line as one entry. Commas inside the line
    /// belong to that entry.
    pub fn push_line(&mut self, raw: &str) -> Result<()> {
        let entry = T::from_value(raw)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Parses a block of header lines, one entry per line. Lines starting
    /// with whitespace continue the previous line.
    pub fn parse_lines(text: &str) -> Result<Self> {
        let mut logical: Vec<String> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with([' ', '\t']) {
                if let Some(last) = logical.last_mut() {
                    last.push(' ');
                    last.push_str(line.trim());
                    continue;
                }
            }
            logical.push(line.trim().to_string());
        }
        let mut group = Self::new();
        for line in logical {
            group.push_line(&line)?;
        }
        Ok(group)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// One `Name: value` line per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(HeaderField::field_string).collect()
    }

    pub fn is_valid(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(HeaderField::is_valid)
    }

    /// True when the group holds exactly one entry, equal to `other`.
    pub fn is_single(&self, other: &T) -> bool {
        matches!(self.entries.as_slice(), [only] if only == other)
    }
}

impl<T: HeaderField> fmt::Display for AuthHeaderGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\r\n"))
    }
}

impl<T: HeaderField> From<T> for AuthHeaderGroup<T> {
    fn from(entry: T) -> Self {
        AuthHeaderGroup { entries: vec![entry] }
    }
}

impl<'a, T> IntoIterator for &'a AuthHeaderGroup<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Authorization, ContentLength, CredentialFields, Warning};

    #[test]
    fn test_parse_splits_combinable_values() {
        let warnings = HeaderFieldGroup::<Warning>::parse(
            r#"Warning: 307 isi.edu "Session parameter 'foo', not understood", 301 isi.edu "Incompatible network address type 'E.164'""#,
        )
        .unwrap();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings.get(0).unwrap().code(), Some(307));
        assert_eq!(warnings.get(1).unwrap().code(), Some(301));
        assert!(warnings.is_valid());
    }

    #[test]
    fn test_single_valued_header_rejects_second_value() {
        let mut group = HeaderFieldGroup::<ContentLength>::parse("Content-Length: 12").unwrap();
        assert_eq!(group.len(), 1);
        assert!(group.push(ContentLength::new(13)).is_err());
        assert_eq!(group.to_string(), "Content-Length: 12");
    }

    #[test]
    fn test_equality_with_single_value() {
        let group = HeaderFieldGroup::<ContentLength>::from(ContentLength::new(5));
        assert!(group == ContentLength::new(5));
        assert!(ContentLength::new(5) == group);
        assert!(group != ContentLength::new(6));
        assert!(HeaderFieldGroup::<ContentLength>::new() != ContentLength::new(5));
    }

    #[test]
    fn test_auth_group_keeps_lines_apart() {
        let text = "Authorization: Digest username=\"bob\", realm=\"atlanta.example.com\",\r\n nonce=\"ea9c8e88df84f1cec4341ae6cbe5a359\"\r\n\
                    Authorization: Digest username=\"bob\", realm=\"biloxi.example.com\"\r\n";
        let group = AuthHeaderGroup::<Authorization>::parse_lines(text).unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group.get(0).unwrap().realm(), Some("atlanta.example.com"));
        assert_eq!(group.get(0).unwrap().nonce(), Some("ea9c8e88df84f1cec4341ae6cbe5a359"));
        assert_eq!(group.get(1).unwrap().realm(), Some("biloxi.example.com"));

        let lines = group.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.starts_with("Authorization: Digest ")));
        assert_eq!(group.to_string().matches("\r\n").count(), 1);
    }
}
