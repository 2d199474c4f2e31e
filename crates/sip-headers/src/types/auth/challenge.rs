//! # SIP WWW-Authenticate and Proxy-Authenticate Headers
//!
//! Challenges sent in 401 and 407 responses
//! ([RFC 3261 Sections 20.44 and 20.27](https://datatracker.ietf.org/doc/html/rfc3261#section-20.44)).
//!
//! ```text
//! digest-cln = realm / domain / nonce / opaque / stale / algorithm / qop-options / auth-param
//! ```
//!
//! `stale` and `algorithm` are written bare, every other known parameter
//! as a quoted-string (`qop="auth,auth-int"`).
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let challenge: ProxyAuthenticate = r#"Proxy-Authenticate: Digest realm="atlanta.com", domain="sip:ss1.carrier.com", qop="auth", nonce="f84f1cec41e6cbe5aea9c8e88d359", opaque="", stale=FALSE, algorithm=MD5"#
//!     .parse()
//!     .unwrap();
//! assert_eq!(challenge.scheme(), "Digest");
//! assert_eq!(challenge.realm(), Some("atlanta.com"));
//! assert_eq!(challenge.stale(), Some(false));
//! assert_eq!(challenge.algorithm(), Some("MD5"));
//!
//! let mut challenge = WwwAuthenticate::default();
//! challenge.set_realm("biloxi.com").unwrap();
//! challenge.set_nonce("dcd98b7102dd2f0e8b11d0f600bfb0c093").unwrap();
//! assert_eq!(
//!     challenge.to_string(),
//!     "WWW-Authenticate: Digest realm=\"biloxi.com\", nonce=\"dcd98b7102dd2f0e8b11d0f600bfb0c093\""
//! );
//! ```

use super::params::{shaped_param, CHALLENGE_PARAMS, CHALLENGE_UNQUOTED};
use super::{auth_header, AuthScheme};
use crate::error::Result;

auth_header!(
    /// The WWW-Authenticate header field, sent by a UAS or registrar.
    WwwAuthenticate,
    "WWW-Authenticate",
    CHALLENGE_PARAMS
);

auth_header!(
    /// The Proxy-Authenticate header field, sent by a proxy.
    ProxyAuthenticate,
    "Proxy-Authenticate",
    CHALLENGE_PARAMS
);

/// Typed access to the known parameters of a challenge.
pub trait ChallengeFields: AuthScheme {
    fn realm(&self) -> Option<&str> {
        self.param("realm")
    }

    fn set_realm(&mut self, realm: &str) -> Result<()> {
        self.add_param(shaped_param("realm", realm, CHALLENGE_UNQUOTED)?)
    }

    /// Space-separated URIs defining the protection space.
    fn domain(&self) -> Option<&str> {
        self.param("domain")
    }

    fn set_domain(&mut self, domain: &str) -> Result<()> {
        self.add_param(shaped_param("domain", domain, CHALLENGE_UNQUOTED)?)
    }

    fn nonce(&self) -> Option<&str> {
        self.param("nonce")
    }

    fn set_nonce(&mut self, nonce: &str) -> Result<()> {
        self.add_param(shaped_param("nonce", nonce, CHALLENGE_UNQUOTED)?)
    }

    fn opaque(&self) -> Option<&str> {
        self.param("opaque")
    }

    fn set_opaque(&mut self, opaque: &str) -> Result<()> {
        self.add_param(shaped_param("opaque", opaque, CHALLENGE_UNQUOTED)?)
    }

    fn stale(&self) -> Option<bool> {
        self.param("stale").map(|stale| stale.eq_ignore_ascii_case("true"))
    }

    fn set_stale(&mut self, stale: bool) -> Result<()> {
        let value = if stale { "true" } else { "false" };
        self.add_param(shaped_param("stale", value, CHALLENGE_UNQUOTED)?)
    }

    fn algorithm(&self) -> Option<&str> {
        self.param("algorithm")
    }

    fn set_algorithm(&mut self, algorithm: &str) -> Result<()> {
        self.add_param(shaped_param("algorithm", algorithm, CHALLENGE_UNQUOTED)?)
    }

    /// The offered qop-options, e.g. `auth,auth-int`.
    fn qop(&self) -> Option<&str> {
        self.param("qop")
    }

    fn set_qop(&mut self, qop: &str) -> Result<()> {
        self.add_param(shaped_param("qop", qop, CHALLENGE_UNQUOTED)?)
    }
}

impl ChallengeFields for WwwAuthenticate {}
impl ChallengeFields for ProxyAuthenticate {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::group::AuthHeaderGroup;
    use crate::types::header::{HeaderField, Parameterized};

    #[test]
    fn test_parse_digest_challenge() {
        let challenge = WwwAuthenticate::from_value(
            "Digest realm=\"biloxi.com\", qop=\"auth,auth-int\", nonce=\"dcd98b7102dd2f0e8b11d0f600bfb0c093\", opaque=\"5ccc069c403ebaf9f0171e9517f40e41\"",
        )
        .unwrap();
        assert!(challenge.is_digest());
        assert_eq!(challenge.qop(), Some("auth,auth-int"));
        assert_eq!(challenge.opaque(), Some("5ccc069c403ebaf9f0171e9517f40e41"));
        assert_eq!(challenge.params().len(), 4);
    }

    #[test]
    fn test_invalid_known_values() {
        let err = WwwAuthenticate::from_value("Digest nonce=\"NOT-HEX\"").unwrap_err();
        assert!(matches!(err.validation_cause(), Some(Error::InvalidFormat { .. })));
        assert!(WwwAuthenticate::from_value("Digest stale=perhaps").is_err());

        let mut challenge = WwwAuthenticate::default();
        assert!(challenge.set_nonce("zz").is_err());
        assert!(challenge.set_domain("not a uri").is_err());
        assert_eq!(challenge.nonce(), None);
    }

    #[test]
    fn test_stale_setter() {
        let mut challenge = ProxyAuthenticate::default();
        challenge.set_realm("atlanta.com").unwrap();
        challenge.set_stale(true).unwrap();
        assert_eq!(challenge.stale(), Some(true));
        assert_eq!(challenge.value_string(), "Digest realm=\"atlanta.com\", stale=true");
    }

    #[test]
    fn test_scheme_handling() {
        let basic = WwwAuthenticate::from_value("Basic realm=\"WallyWorld\"").unwrap();
        assert_eq!(basic.scheme(), "Basic");
        assert!(!basic.is_digest());

        let mut challenge = WwwAuthenticate::default();
        assert!(challenge.set_scheme("").is_err());
        assert!(challenge.set_scheme("Di gest").is_err());
        assert_eq!(challenge.scheme(), "Digest");

        challenge.parse("").unwrap();
        assert_eq!(challenge.scheme(), "");
        assert!(!challenge.is_valid());
    }

    #[test]
    fn test_group_keeps_commas_inside_entry() {
        let mut group = AuthHeaderGroup::<ProxyAuthenticate>::new();
        group.push_line("Proxy-Authenticate: Digest realm=\"a.com\", nonce=\"01\"").unwrap();
        group.push_line("Proxy-Authenticate: Digest realm=\"b.com\", nonce=\"02\"").unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group.get(1).unwrap().realm(), Some("b.com"));
    }
}
