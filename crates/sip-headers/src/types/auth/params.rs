//! Known parameter sets of the authentication headers, their value checks
//! and how each one is quoted on output (RFC 3261 Section 25.1).

use crate::error::{Error, Result};
use crate::grammar::{is_lhex, is_token};
use crate::types::param::Parameter;
use crate::types::uri::Uri;

pub(crate) const CHALLENGE_PARAMS: &[&str] =
    &["realm", "domain", "nonce", "opaque", "stale", "algorithm", "qop"];

pub(crate) const CREDENTIAL_PARAMS: &[&str] = &[
    "username", "realm", "nonce", "uri", "response", "algorithm", "cnonce", "opaque", "qop", "nc",
];

pub(crate) const AUTH_INFO_PARAMS: &[&str] = &["nextnonce", "qop", "rspauth", "cnonce", "nc"];

// Everything else is written as a quoted-string
pub(crate) const CHALLENGE_UNQUOTED: &[&str] = &["stale", "algorithm"];
pub(crate) const CREDENTIAL_UNQUOTED: &[&str] = &["algorithm", "qop", "nc"];
pub(crate) const AUTH_INFO_UNQUOTED: &[&str] = &["qop", "nc"];

/// nonce-count = "nc" EQUAL 8LHEX
fn is_nonce_count(value: &str) -> bool {
    value.len() == 8 && is_lhex(value)
}

// domain = "domain" EQUAL LDQUOT URI *( 1*SP URI ) RDQUOT, URI = absoluteURI / abs-path
fn is_domain_list(value: &str) -> bool {
    let mut any = false;
    for entry in value.split_whitespace() {
        any = true;
        if !(entry.starts_with('/') || entry.parse::<Uri>().is_ok()) {
            return false;
        }
    }
    any
}

fn check(property: &'static str, value: &str, valid: bool) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(Error::format(property, value))
    }
}

/// Value check shared by every authentication header for its known
/// parameters.
pub(crate) fn validate_auth_param(param: &Parameter) -> Result<()> {
    let name = param.name().to_ascii_lowercase();
    let Some(value) = param.value() else {
        return Err(Error::missing("auth-param value"));
    };
    match name.as_str() {
        "nonce" => check("nonce", value, is_lhex(value)),
        "response" => check("response", value, is_lhex(value)),
        "rspauth" => check("rspauth", value, is_lhex(value)),
        "nextnonce" => check("nextnonce", value, is_lhex(value)),
        "nc" => check("nc", value, is_nonce_count(value)),
        "stale" => check(
            "stale",
            value,
            value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false"),
        ),
        "uri" => value.parse::<Uri>().map(|_| ()),
        "domain" => check("domain", value, is_domain_list(value)),
        "algorithm" => check("algorithm", value, is_token(value)),
        _ => Ok(()),
    }
}

/// Builds a parameter quoted the way its header writes it. Names listed in
/// `unquoted` must carry a token value.
pub(crate) fn shaped_param(name: &'static str, value: &str, unquoted: &[&str]) -> Result<Parameter> {
    if unquoted.iter().any(|u| u.eq_ignore_ascii_case(name)) {
        if value.is_empty() {
            return Err(Error::missing(name));
        }
        if !is_token(value) {
            return Err(Error::format(name, value));
        }
        Parameter::new(name, value)
    } else {
        Parameter::quoted(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, value: &str) -> Parameter {
        Parameter::from_wire(name, Some((value.to_string(), true)))
    }

    #[test]
    fn test_lhex_values() {
        assert!(validate_auth_param(&param("nonce", "84a4cc6f3082121f32b42a2187831a9e")).is_ok());
        assert!(validate_auth_param(&param("nonce", "84A4CC")).is_err());
        assert!(validate_auth_param(&param("response", "xyz")).is_err());
    }

    #[test]
    fn test_nonce_count() {
        assert!(validate_auth_param(&param("nc", "00000001")).is_ok());
        assert!(validate_auth_param(&param("nc", "0001")).is_err());
    }

    #[test]
    fn test_stale_and_domain() {
        assert!(validate_auth_param(&param("stale", "FALSE")).is_ok());
        assert!(validate_auth_param(&param("stale", "maybe")).is_err());
        assert!(validate_auth_param(&param("domain", "sip:ss1.carrier.com /private")).is_ok());
        assert!(validate_auth_param(&param("domain", "")).is_err());
        assert!(validate_auth_param(&param("uri", "sip:bob@biloxi.com")).is_ok());
        assert!(validate_auth_param(&param("uri", "not a uri")).is_err());
    }

    #[test]
    fn test_shaped_param_quoting() {
        let realm = shaped_param("realm", "atlanta.com", CHALLENGE_UNQUOTED).unwrap();
        assert_eq!(realm.to_string(), "realm=\"atlanta.com\"");
        let algorithm = shaped_param("algorithm", "MD5", CHALLENGE_UNQUOTED).unwrap();
        assert_eq!(algorithm.to_string(), "algorithm=MD5");
        let qop = shaped_param("qop", "auth", CREDENTIAL_UNQUOTED).unwrap();
        assert_eq!(qop.to_string(), "qop=auth");
        assert!(shaped_param("qop", "auth,auth-int", CREDENTIAL_UNQUOTED).is_err());
        assert_eq!(
            shaped_param("qop", "auth,auth-int", CHALLENGE_UNQUOTED).unwrap().to_string(),
            "qop=\"auth,auth-int\""
        );
    }
}
