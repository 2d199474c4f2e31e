//! # SIP Reply-To Header
//!
//! Reply-To carries a logical return URI that may differ from the From
//! header ([RFC 3261 Section 20.31](https://datatracker.ietf.org/doc/html/rfc3261#section-20.31)).
//! It defines no parameters of its own but accepts generic ones.
//!
//! ```text
//! Reply-To: Bob <sip:bob@biloxi.com>
//! ```

use super::address::address_header;
use super::param::ParamSpec;

address_header!(
    /// The Reply-To header field.
    ReplyTo,
    "Reply-To",
    None,
    ParamSpec::GENERIC
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::address::Addressed;
    use crate::types::header::{HeaderField, Parameterized};
    use crate::types::uri::Uri;

    #[test]
    fn test_round_trip() {
        let reply_to = ReplyTo::from_value("Reply-To: Bob <sip:bob@biloxi.com>;x=1").unwrap();
        assert_eq!(reply_to.uri(), Some(&Uri::sip("biloxi.com").with_user("bob")));
        assert_eq!(reply_to.param("x"), Some("1"));
        let again = ReplyTo::from_value(&reply_to.to_string()).unwrap();
        assert_eq!(reply_to, again);
    }

    #[test]
    fn test_with_display_name() {
        let reply_to = ReplyTo::with_display_name(Uri::sip("biloxi.com").with_user("bob"), "Bob").unwrap();
        assert_eq!(reply_to.value_string(), "\"Bob\" <sip:bob@biloxi.com>");
        assert!(ReplyTo::with_display_name(Uri::sip("biloxi.com"), "").is_err());
    }
}
