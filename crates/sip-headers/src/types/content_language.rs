//! # SIP Content-Language Header
//!
//! ([RFC 3261 Section 20.13](https://datatracker.ietf.org/doc/html/rfc3261#section-20.13))
//!
//! ```text
//! Content-Language = "Content-Language" HCOLON language-tag *(COMMA language-tag)
//! language-tag     = primary-tag *( "-" subtag )
//! ```
//!
//! A token that is not a well-formed language tag is a parse error.

use serde::{Deserialize, Serialize};

use super::header::{discard, impl_header_conversions, HeaderField};
use crate::error::{Error, Result};
use crate::grammar::is_language_tag;
use crate::parser::{parse_complete, token};

/// One language tag of the Content-Language header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentLanguage {
    language: String,
}

fn check_tag(language: &str) -> Result<()> {
    if language.is_empty() {
        return Err(Error::missing("language tag"));
    }
    if !is_language_tag(language) {
        return Err(Error::format("language tag", language));
    }
    Ok(())
}

impl ContentLanguage {
    pub fn new(language: &str) -> Result<Self> {
        check_tag(language)?;
        Ok(ContentLanguage {
            language: language.to_string(),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: &str) -> Result<()> {
        check_tag(language)?;
        self.language = language.to_string();
        Ok(())
    }
}

impl HeaderField for ContentLanguage {
    const NAME: &'static str = "Content-Language";
    const ALLOW_MULTIPLE: bool = true;

    fn reset(&mut self) {
        self.language.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some(language) = parse_complete(token, value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        check_tag(language)?;
        self.language = language.to_string();
        Ok(())
    }

    fn value_string(&self) -> String {
        self.language.clone()
    }

    fn is_valid(&self) -> bool {
        !self.language.is_empty()
    }
}

impl PartialEq for ContentLanguage {
    fn eq(&self, other: &Self) -> bool {
        self.language.eq_ignore_ascii_case(&other.language)
    }
}

impl_header_conversions!(ContentLanguage);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::group::HeaderFieldGroup;

    #[test]
    fn test_parse_list() {
        let languages = HeaderFieldGroup::<ContentLanguage>::parse("Content-Language: fr, en-US").unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages.get(1).unwrap().language(), "en-US");
    }

    #[test]
    fn test_malformed_tag() {
        assert!(ContentLanguage::from_value("en_US").unwrap_err().is_parse_error());
        assert!(ContentLanguage::new("*").is_err());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(ContentLanguage::new("EN-us").unwrap(), ContentLanguage::new("en-US").unwrap());
    }
}
