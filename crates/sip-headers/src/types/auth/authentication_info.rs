//! # SIP Authentication-Info Header
//!
//! Sent in a 2xx response after successful Digest authentication
//! ([RFC 3261 Section 20.6](https://datatracker.ietf.org/doc/html/rfc3261#section-20.6)).
//!
//! ```text
//! Authentication-Info = "Authentication-Info" HCOLON ainfo *(COMMA ainfo)
//! ainfo               = nextnonce / message-qop / response-auth / cnonce / nonce-count
//! ```
//!
//! Unlike the challenge and credential headers there is no scheme and no
//! extension parameters.

use serde::{Deserialize, Serialize};

use super::params::{shaped_param, validate_auth_param, AUTH_INFO_PARAMS, AUTH_INFO_UNQUOTED};
use super::join_auth_params;
use crate::error::Result;
use crate::parser::params::auth_params;
use crate::parser::parse_complete;
use crate::types::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use crate::types::param::{ParamSpec, ParameterList};

/// The Authentication-Info header field.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// let info: AuthenticationInfo = "Authentication-Info: nextnonce=\"47364c23432d2e131a5fb210812c\", qop=auth".parse().unwrap();
/// assert_eq!(info.next_nonce(), Some("47364c23432d2e131a5fb210812c"));
///
/// assert!("Authentication-Info: realm=\"x\"".parse::<AuthenticationInfo>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationInfo {
    params: ParameterList,
}

impl AuthenticationInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_nonce(&self) -> Option<&str> {
        self.params.value("nextnonce")
    }

    pub fn set_next_nonce(&mut self, nonce: &str) -> Result<()> {
        self.add_param(shaped_param("nextnonce", nonce, AUTH_INFO_UNQUOTED)?)
    }

    pub fn qop(&self) -> Option<&str> {
        self.params.value("qop")
    }

    pub fn set_qop(&mut self, qop: &str) -> Result<()> {
        self.add_param(shaped_param("qop", qop, AUTH_INFO_UNQUOTED)?)
    }

    pub fn rspauth(&self) -> Option<&str> {
        self.params.value("rspauth")
    }

    pub fn set_rspauth(&mut self, rspauth: &str) -> Result<()> {
        self.add_param(shaped_param("rspauth", rspauth, AUTH_INFO_UNQUOTED)?)
    }

    pub fn cnonce(&self) -> Option<&str> {
        self.params.value("cnonce")
    }

    pub fn set_cnonce(&mut self, cnonce: &str) -> Result<()> {
        self.add_param(shaped_param("cnonce", cnonce, AUTH_INFO_UNQUOTED)?)
    }

    pub fn nc(&self) -> Option<&str> {
        self.params.value("nc")
    }

    pub fn set_nc(&mut self, nc: &str) -> Result<()> {
        self.add_param(shaped_param("nc", nc, AUTH_INFO_UNQUOTED)?)
    }
}

impl HeaderField for AuthenticationInfo {
    const NAME: &'static str = "Authentication-Info";

    fn reset(&mut self) {
        self.params.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some(params) = parse_complete(auth_params, value) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.params = Self::PARAMS.collect(Self::NAME, params)?;
        Ok(())
    }

    fn value_string(&self) -> String {
        join_auth_params(&self.params)
    }

    fn is_valid(&self) -> bool {
        !self.params.is_empty()
    }
}

impl Parameterized for AuthenticationInfo {
    const PARAMS: ParamSpec = ParamSpec {
        known: AUTH_INFO_PARAMS,
        allow_generic: false,
        validate: validate_auth_param,
    };

    fn params(&self) -> &ParameterList {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }
}

impl_header_conversions!(AuthenticationInfo);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::param::Parameter;

    #[test]
    fn test_round_trip_shape() {
        let mut info = AuthenticationInfo::new();
        info.set_next_nonce("47364c23432d2e131a5fb210812c").unwrap();
        info.set_qop("auth").unwrap();
        info.set_rspauth("6629fae49393a05397450978507c4ef1").unwrap();
        info.set_nc("00000001").unwrap();
        assert_eq!(
            info.value_string(),
            "nextnonce=\"47364c23432d2e131a5fb210812c\", qop=auth, rspauth=\"6629fae49393a05397450978507c4ef1\", nc=00000001"
        );
        assert_eq!(AuthenticationInfo::from_value(&info.to_string()).unwrap(), info);
    }

    #[test]
    fn test_generic_params_rejected() {
        let mut info = AuthenticationInfo::new();
        let err = info.add_param(Parameter::new("realm", "x").unwrap()).unwrap_err();
        assert!(matches!(err, Error::UnknownParameter { .. }));

        let err = AuthenticationInfo::from_value("realm=\"x\"").unwrap_err();
        assert!(matches!(err.validation_cause(), Some(Error::UnknownParameter { .. })));
    }

    #[test]
    fn test_no_match() {
        let info = AuthenticationInfo::from_value("Digest").unwrap();
        assert!(!info.is_valid());
    }
}
