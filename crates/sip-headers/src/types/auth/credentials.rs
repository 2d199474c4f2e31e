//! # SIP Authorization and Proxy-Authorization Headers
//!
//! Credentials sent by a UAC in answer to a challenge
//! ([RFC 3261 Sections 20.7 and 20.28](https://datatracker.ietf.org/doc/html/rfc3261#section-20.7)).
//!
//! ```text
//! dig-resp = username / realm / nonce / digest-uri / dresponse / algorithm
//!            / cnonce / opaque / message-qop / nonce-count / auth-param
//! ```
//!
//! `algorithm`, `qop` and `nc` are written bare; the rest are quoted.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let credentials: Authorization = r#"Authorization: Digest username="bob", realm="biloxi.com", nonce="dcd98b7102dd2f0e8b11d0f600bfb0c093", uri="sip:bob@biloxi.com", qop=auth, nc=00000001, cnonce="0a4f113b", response="6629fae49393a05397450978507c4ef1", opaque="5ccc069c403ebaf9f0171e9517f40e41""#
//!     .parse()
//!     .unwrap();
//! assert_eq!(credentials.username(), Some("bob"));
//! assert_eq!(credentials.nc(), Some("00000001"));
//! assert_eq!(credentials.qop(), Some("auth"));
//! ```

use super::params::{shaped_param, CREDENTIAL_PARAMS, CREDENTIAL_UNQUOTED};
use super::{auth_header, AuthScheme};
use crate::error::Result;

auth_header!(
    /// The Authorization header field, answering a WWW-Authenticate challenge.
    Authorization,
    "Authorization",
    CREDENTIAL_PARAMS
);

auth_header!(
    /// The Proxy-Authorization header field, answering a Proxy-Authenticate challenge.
    ProxyAuthorization,
    "Proxy-Authorization",
    CREDENTIAL_PARAMS
);

/// Typed access to the known parameters of a credential.
pub trait CredentialFields: AuthScheme {
    fn username(&self) -> Option<&str> {
        self.param("username")
    }

    fn set_username(&mut self, username: &str) -> Result<()> {
        self.add_param(shaped_param("username", username, CREDENTIAL_UNQUOTED)?)
    }

    fn realm(&self) -> Option<&str> {
        self.param("realm")
    }

    fn set_realm(&mut self, realm: &str) -> Result<()> {
        self.add_param(shaped_param("realm", realm, CREDENTIAL_UNQUOTED)?)
    }

    fn nonce(&self) -> Option<&str> {
        self.param("nonce")
    }

    fn set_nonce(&mut self, nonce: &str) -> Result<()> {
        self.add_param(shaped_param("nonce", nonce, CREDENTIAL_UNQUOTED)?)
    }

    /// The digest-uri, i.e. the Request-URI the credentials were computed for.
    fn uri(&self) -> Option<&str> {
        self.param("uri")
    }

    fn set_uri(&mut self, uri: &str) -> Result<()> {
        self.add_param(shaped_param("uri", uri, CREDENTIAL_UNQUOTED)?)
    }

    fn response(&self) -> Option<&str> {
        self.param("response")
    }

    fn set_response(&mut self, response: &str) -> Result<()> {
        self.add_param(shaped_param("response", response, CREDENTIAL_UNQUOTED)?)
    }

    fn algorithm(&self) -> Option<&str> {
        self.param("algorithm")
    }

    fn set_algorithm(&mut self, algorithm: &str) -> Result<()> {
        self.add_param(shaped_param("algorithm", algorithm, CREDENTIAL_UNQUOTED)?)
    }

    fn cnonce(&self) -> Option<&str> {
        self.param("cnonce")
    }

    fn set_cnonce(&mut self, cnonce: &str) -> Result<()> {
        self.add_param(shaped_param("cnonce", cnonce, CREDENTIAL_UNQUOTED)?)
    }

    fn opaque(&self) -> Option<&str> {
        self.param("opaque")
    }

    fn set_opaque(&mut self, opaque: &str) -> Result<()> {
        self.add_param(shaped_param("opaque", opaque, CREDENTIAL_UNQUOTED)?)
    }

    fn qop(&self) -> Option<&str> {
        self.param("qop")
    }

    fn set_qop(&mut self, qop: &str) -> Result<()> {
        self.add_param(shaped_param("qop", qop, CREDENTIAL_UNQUOTED)?)
    }

    /// nonce-count, eight lowercase hex digits.
    fn nc(&self) -> Option<&str> {
        self.param("nc")
    }

    fn set_nc(&mut self, nc: &str) -> Result<()> {
        self.add_param(shaped_param("nc", nc, CREDENTIAL_UNQUOTED)?)
    }

    /// Formats `count` as a nonce-count and sets it.
    fn set_nonce_count(&mut self, count: u32) -> Result<()> {
        self.set_nc(&format!("{:08x}", count))
    }
}

impl CredentialFields for Authorization {}
impl CredentialFields for ProxyAuthorization {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::header::{HeaderField, Parameterized};
    use crate::types::param::Parameter;

    fn build() -> Authorization {
        let mut credentials = Authorization::default();
        credentials.set_username("bob").unwrap();
        credentials.set_realm("biloxi.com").unwrap();
        credentials.set_nonce("dcd98b7102dd2f0e8b11d0f600bfb0c093").unwrap();
        credentials.set_uri("sip:bob@biloxi.com").unwrap();
        credentials.set_qop("auth").unwrap();
        credentials.set_nonce_count(1).unwrap();
        credentials
    }

    #[test]
    fn test_emission_quoting() {
        assert_eq!(
            build().value_string(),
            "Digest username=\"bob\", realm=\"biloxi.com\", nonce=\"dcd98b7102dd2f0e8b11d0f600bfb0c093\", uri=\"sip:bob@biloxi.com\", qop=auth, nc=00000001"
        );
    }

    #[test]
    fn test_reparse_equals_original() {
        let credentials = build();
        let parsed = Authorization::from_value(&credentials.to_string()).unwrap();
        assert_eq!(parsed, credentials);
    }

    #[test]
    fn test_quoted_values_are_case_sensitive() {
        let lower = Authorization::from_value("Digest username=\"bob\"").unwrap();
        let upper = Authorization::from_value("Digest username=\"BOB\"").unwrap();
        assert_ne!(lower, upper);
        let a = Authorization::from_value("digest algorithm=md5").unwrap();
        let b = Authorization::from_value("Digest algorithm=MD5").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_validation() {
        let mut credentials = ProxyAuthorization::default();
        assert!(matches!(credentials.set_nc("1"), Err(Error::InvalidFormat { .. })));
        assert!(matches!(credentials.set_username(""), Err(Error::MissingValue { .. })));
        assert!(credentials.set_response("6629FAE4").is_err());
        assert!(credentials.set_uri("no uri").is_err());
        assert!(credentials.params().is_empty());

        assert!(ProxyAuthorization::from_value("Digest nc=1").unwrap_err().is_parse_error());
    }

    #[test]
    fn test_generic_params_accepted() {
        let mut credentials = Authorization::new("Digest").unwrap();
        credentials.add_param(Parameter::quoted("x-token", "abc").unwrap()).unwrap();
        assert_eq!(credentials.param("x-token"), Some("abc"));
    }
}
