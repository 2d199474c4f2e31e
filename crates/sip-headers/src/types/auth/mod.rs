//! # Authentication Headers
//!
//! HTTP Digest authentication as carried by SIP
//! ([RFC 3261 Section 22](https://datatracker.ietf.org/doc/html/rfc3261#section-22)):
//!
//! - [`WwwAuthenticate`] and [`ProxyAuthenticate`] carry challenges
//! - [`Authorization`] and [`ProxyAuthorization`] carry credentials
//! - [`AuthenticationInfo`] carries the server's mutual-authentication data
//!
//! ```text
//! challenge    = ("Digest" LWS digest-cln *(COMMA digest-cln)) / other-challenge
//! credentials  = ("Digest" LWS digest-response) / other-response
//! ```
//!
//! The parameters of a challenge or credential are separated by commas, so
//! these headers are never comma-combined; several of them are kept as
//! separate lines in an [`AuthHeaderGroup`](crate::types::group::AuthHeaderGroup).

use nom::{
    combinator::opt,
    sequence::{pair, preceded},
};

use super::header::Parameterized;
use super::param::{ParamSpec, ParameterList};
use crate::error::Result;
use crate::parser::params::auth_params;
use crate::parser::whitespace::lws;
use crate::parser::{parse_complete, token};

pub mod authentication_info;
pub mod challenge;
pub mod credentials;
pub(crate) mod params;

pub use authentication_info::AuthenticationInfo;
pub use challenge::{ChallengeFields, ProxyAuthenticate, WwwAuthenticate};
pub use credentials::{Authorization, CredentialFields, ProxyAuthorization};

/// Headers whose value starts with an authentication scheme.
pub trait AuthScheme: Parameterized {
    fn scheme(&self) -> &str;

    /// Replaces the scheme. It must be a non-empty token.
    fn set_scheme(&mut self, scheme: &str) -> Result<()>;

    fn is_digest(&self) -> bool {
        self.scheme().eq_ignore_ascii_case("Digest")
    }
}

/// Scans `scheme [LWS auth-param *(COMMA auth-param)]` and checks the
/// parameters against `spec`. `None` when the value does not have that shape.
pub(crate) fn parse_scheme_value(
    header: &'static str,
    spec: &ParamSpec,
    value: &str,
) -> Result<Option<(String, ParameterList)>> {
    let Some((scheme, params)) = parse_complete(pair(token, opt(preceded(lws, auth_params))), value) else {
        return Ok(None);
    };
    let params = spec.collect(header, params.unwrap_or_default())?;
    Ok(Some((scheme.to_string(), params)))
}

/// `a=1, b="2"`
pub(crate) fn join_auth_params(params: &ParameterList) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Declares a scheme-led authentication header: the struct and its field
/// contract.
macro_rules! auth_header {
    ($(#[$meta:meta])* $name:ident, $header:literal, $known:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            scheme: String,
            params: $crate::types::param::ParameterList,
        }

        impl $name {
            /// Creates an entry for `scheme` with no parameters.
            pub fn new(scheme: &str) -> $crate::error::Result<Self> {
                let mut field = Self::default();
                $crate::types::auth::AuthScheme::set_scheme(&mut field, scheme)?;
                Ok(field)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name {
                    scheme: $crate::defaults::DEFAULT_AUTH_SCHEME.to_string(),
                    params: $crate::types::param::ParameterList::new(),
                }
            }
        }

        impl $crate::types::header::HeaderField for $name {
            const NAME: &'static str = $header;
            const ALLOW_MULTIPLE: bool = true;
            const COMMA_COMBINABLE: bool = false;

            fn reset(&mut self) {
                self.scheme.clear();
                self.params.clear();
            }

            fn parse_value(&mut self, value: &str) -> $crate::error::Result<()> {
                let spec = <Self as $crate::types::header::Parameterized>::PARAMS;
                match $crate::types::auth::parse_scheme_value($header, &spec, value)? {
                    Some((scheme, params)) => {
                        self.scheme = scheme;
                        self.params = params;
                    }
                    None => $crate::types::header::discard($header, value),
                }
                Ok(())
            }

            fn value_string(&self) -> String {
                if self.params.is_empty() {
                    return self.scheme.clone();
                }
                format!("{} {}", self.scheme, $crate::types::auth::join_auth_params(&self.params))
            }

            fn is_valid(&self) -> bool {
                !self.scheme.is_empty()
            }
        }

        impl $crate::types::header::Parameterized for $name {
            const PARAMS: $crate::types::param::ParamSpec = $crate::types::param::ParamSpec {
                known: $known,
                allow_generic: true,
                validate: $crate::types::auth::params::validate_auth_param,
            };

            fn params(&self) -> &$crate::types::param::ParameterList {
                &self.params
            }

            fn params_mut(&mut self) -> &mut $crate::types::param::ParameterList {
                &mut self.params
            }
        }

        impl $crate::types::auth::AuthScheme for $name {
            fn scheme(&self) -> &str {
                &self.scheme
            }

            fn set_scheme(&mut self, scheme: &str) -> $crate::error::Result<()> {
                if scheme.is_empty() {
                    return Err($crate::error::Error::missing("auth-scheme"));
                }
                if !$crate::grammar::is_token(scheme) {
                    return Err($crate::error::Error::format("auth-scheme", scheme));
                }
                self.scheme = scheme.to_string();
                Ok(())
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.scheme.eq_ignore_ascii_case(&other.scheme) && self.params == other.params
            }
        }

        $crate::types::header::impl_header_conversions!($name, AuthHeaderGroup);
    };
}

pub(crate) use auth_header;
