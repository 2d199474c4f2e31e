//! # SIP To Header
//!
//! The To header field names the logical recipient of a request
//! ([RFC 3261 Section 20.39](https://datatracker.ietf.org/doc/html/rfc3261#section-20.39)).
//! Its `tag` parameter is added by the UAS and, together with the From tag
//! and Call-ID, identifies the dialog.
//!
//! ```text
//! To: The Operator <sip:operator@cs.columbia.edu>;tag=287447
//! t: sip:+12125551212@server.phone2net.com
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let to: To = "t: Bob <sip:bob@biloxi.com>;tag=a6c85cf".parse().unwrap();
//! assert_eq!(to.display_name(), Some("Bob"));
//! assert_eq!(to.tag(), Some("a6c85cf"));
//! assert_eq!(to.value_string(), "\"Bob\" <sip:bob@biloxi.com>;tag=a6c85cf");
//!
//! // The display name does not take part in equality
//! let bare: To = "sip:bob@biloxi.com;tag=a6c85cf".parse().unwrap();
//! assert_eq!(to, bare);
//! ```

use super::address::{address_header, validate_tag, Tagged};
use super::param::ParamSpec;

address_header!(
    /// The To header field.
    To,
    "To",
    Some("t"),
    ParamSpec {
        known: &["tag"],
        allow_generic: true,
        validate: validate_tag,
    }
);

impl Tagged for To {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::address::Addressed;
    use crate::types::header::{HeaderField, Parameterized};
    use crate::types::param::Parameter;
    use crate::types::uri::Uri;

    #[test]
    fn test_parse_with_tag() {
        let to = To::from_value("To: The Operator <sip:operator@cs.columbia.edu>;tag=287447").unwrap();
        assert_eq!(to.display_name(), Some("The Operator"));
        assert_eq!(to.uri().unwrap().user(), Some("operator"));
        assert_eq!(to.tag(), Some("287447"));
        assert!(to.is_valid());
    }

    #[test]
    fn test_tag_management() {
        let mut to = To::new(Uri::sip("biloxi.com").with_user("bob"));
        assert_eq!(to.tag(), None);
        let tag = to.new_tag();
        assert_eq!(to.tag(), Some(tag.as_str()));

        assert!(matches!(to.set_tag(""), Err(Error::MissingValue { .. })));
        assert!(matches!(to.set_tag("bad tag"), Err(Error::InvalidFormat { .. })));
        assert_eq!(to.tag(), Some(tag.as_str()));
    }

    #[test]
    fn test_equality_uses_tag() {
        let a = To::from_value("<sip:bob@biloxi.com>;tag=1").unwrap();
        let b = To::from_value("<sip:bob@BILOXI.com>;TAG=1").unwrap();
        let c = To::from_value("<sip:bob@biloxi.com>;tag=2").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_tag_is_parse_error() {
        let err = To::from_value("<sip:bob@biloxi.com>;tag").unwrap_err();
        assert!(err.is_parse_error());
        assert!(matches!(err.validation_cause(), Some(Error::MissingValue { .. })));
    }

    #[test]
    fn test_generic_params_accepted() {
        let mut to = To::from_value("<sip:bob@biloxi.com>;x-info=1").unwrap();
        assert_eq!(to.param("x-info"), Some("1"));
        to.add_param(Parameter::flag("lr").unwrap()).unwrap();
        assert_eq!(to.value_string(), "<sip:bob@biloxi.com>;x-info=1;lr");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = To::from_value("<sip:bob@biloxi.com>;tag=1").unwrap();
        let mut copy = original.clone();
        copy.set_tag("2").unwrap();
        copy.set_display_name(Some("Robert")).unwrap();
        assert_eq!(original.tag(), Some("1"));
        assert_eq!(original.display_name(), None);
    }
}
