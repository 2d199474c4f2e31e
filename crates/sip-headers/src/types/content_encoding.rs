//! # SIP Content-Encoding Header
//!
//! The Content-Encoding header field names the codings applied to the
//! message body ([RFC 3261 Section 20.12](https://datatracker.ietf.org/doc/html/rfc3261#section-20.12)).
//!
//! ```text
//! Content-Encoding = ( "Content-Encoding" / "e" ) HCOLON content-coding *(COMMA content-coding)
//! ```

use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::error::{Error, Result};
use crate::grammar::is_token;
use crate::parser::{parse_complete, token};

/// One content-coding of the Content-Encoding header.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// let encodings = HeaderFieldGroup::<ContentEncoding>::parse("e: gzip, deflate").unwrap();
/// assert_eq!(encodings.get(1).unwrap().encoding(), "deflate");
/// assert_eq!(encodings.to_string(), "Content-Encoding: gzip, deflate");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentEncoding {
    encoding: String,
}

impl ContentEncoding {
    pub fn new(encoding: &str) -> Result<Self> {
        let mut field = ContentEncoding::default();
        field.set_encoding(encoding)?;
        Ok(field)
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn set_encoding(&mut self, encoding: &str) -> Result<()> {
        if encoding.is_empty() {
            return Err(Error::missing("content coding"));
        }
        if !is_token(encoding) {
            return Err(Error::format("content coding", encoding));
        }
        self.encoding = encoding.to_string();
        Ok(())
    }
}

impl HeaderField for ContentEncoding {
    const NAME: &'static str = "Content-Encoding";
    const COMPACT_NAME: Option<&'static str> = Some("e");
    const ALLOW_MULTIPLE: bool = true;

    fn reset(&mut self) {
        self.encoding.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        match parse_complete(token, value) {
            Some(encoding) => self.encoding = encoding.to_string(),
            None => discard(Self::NAME, value),
        }
        Ok(())
    }

    fn value_string(&self) -> String {
        self.encoding.clone()
    }

    fn is_valid(&self) -> bool {
        !self.encoding.is_empty()
    }
}

impl PartialEq for ContentEncoding {
    fn eq(&self, other: &Self) -> bool {
        self.encoding.eq_ignore_ascii_case(&other.encoding)
    }
}

impl_header_conversions!(ContentEncoding);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact() {
        let encoding: ContentEncoding = "e: gzip".parse().unwrap();
        assert_eq!(encoding.encoding(), "gzip");
        assert_eq!(encoding.to_string(), "Content-Encoding: gzip");
    }

    #[test]
    fn test_parameters_are_not_a_coding() {
        let encoding = ContentEncoding::from_value("gzip;level=9").unwrap();
        assert!(!encoding.is_valid());
    }

    #[test]
    fn test_validation() {
        assert!(matches!(ContentEncoding::new(""), Err(Error::MissingValue { .. })));
        assert!(matches!(ContentEncoding::new("g/zip"), Err(Error::InvalidFormat { .. })));
        assert_eq!(ContentEncoding::new("GZIP").unwrap(), ContentEncoding::new("gzip").unwrap());
    }
}
