//! # Header Field Contract
//!
//! Every typed header implements [`HeaderField`]: a fixed long name, an
//! optional compact name, whether the header may repeat, and four
//! operations the rest of the contract is built from:
//!
//! - `reset` returns the field to its empty state
//! - `parse_value` fills an empty field from a header value
//! - `value_string` renders the value without the header name
//! - `is_valid` tells whether every mandatory part is present
//!
//! [`HeaderField::parse`] is the single text entry point. It strips an
//! optional `Name:` prefix (long or compact form, any case), resets the
//! field and re-derives it, so calling it twice with the same input gives
//! the same result. An empty value leaves the field empty and is not an
//! error.
//!
//! Headers with trailing `;name=value` parameters additionally implement
//! [`Parameterized`], which carries the static [`ParamSpec`] of the names
//! they know and whether generic parameters are accepted.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let mut length = ContentLength::default();
//! length.parse("l: 349").unwrap();
//! assert_eq!(length.length(), Some(349));
//! assert_eq!(length.to_string(), "Content-Length: 349");
//!
//! // Parsing again starts from scratch
//! length.parse("").unwrap();
//! assert_eq!(length.length(), None);
//! assert!(!length.is_valid());
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::header_name::HeaderName;
use super::param::{ParamSpec, Parameter, ParameterList};
use crate::error::Result;
use crate::parser::whitespace::unfold;

/// Returns the value part of `raw`, dropping a leading `name:` or
/// `compact:` prefix if present.
pub(crate) fn strip_header_name<'a>(name: &str, compact: Option<&str>, raw: &'a str) -> &'a str {
    if let Some((candidate, rest)) = raw.split_once(':') {
        let candidate = candidate.trim();
        if candidate.eq_ignore_ascii_case(name)
            || compact.map_or(false, |c| candidate.eq_ignore_ascii_case(c))
        {
            return rest;
        }
    }
    raw
}

/// The contract shared by all typed header fields.
pub trait HeaderField: Clone + fmt::Debug + Default + PartialEq {
    /// Canonical long name, e.g. `Content-Length`
    const NAME: &'static str;
    /// RFC 3261 compact form, e.g. `l`
    const COMPACT_NAME: Option<&'static str> = None;
    /// Whether a message may carry several values of this header
    const ALLOW_MULTIPLE: bool = false;
    /// Whether several values may share one line separated by commas
    const COMMA_COMBINABLE: bool = Self::ALLOW_MULTIPLE;

    /// Clears every owned value and parameter.
    fn reset(&mut self);

    /// Interprets a non-empty header value. Called on a freshly reset field.
    fn parse_value(&mut self, value: &str) -> Result<()>;

    /// The header value without the header name.
    fn value_string(&self) -> String;

    /// True when every mandatory part of the value is present.
    fn is_valid(&self) -> bool;

    fn header_name() -> HeaderName {
        HeaderName::from_str(Self::NAME).unwrap_or_else(|_| HeaderName::Other(Self::NAME.to_string()))
    }

    /// Replaces the state of this field with the one described by `raw`.
    ///
    /// `raw` may carry a leading `Name:` in long or compact form. Errors are
    /// always [`Error::Parse`](crate::error::Error::Parse) and name the header
    /// and the offending input.
    fn parse(&mut self, raw: &str) -> Result<()> {
        let value = unfold(strip_header_name(Self::NAME, Self::COMPACT_NAME, raw));
        let value = value.trim();
        trace!(header = Self::NAME, value, "parsing header value");
        self.reset();
        if value.is_empty() {
            return Ok(());
        }
        self.parse_value(value).map_err(|err| {
            let err = err.in_header(Self::NAME, raw);
            debug!(header = Self::NAME, error = %err, "rejected header value");
            err
        })
    }

    /// Builds a field from `raw`, see [`HeaderField::parse`].
    fn from_value(raw: &str) -> Result<Self> {
        let mut field = Self::default();
        field.parse(raw)?;
        Ok(field)
    }

    /// `Name: value`
    fn field_string(&self) -> String {
        format!("{}: {}", Self::NAME, self.value_string())
    }
}

/// A header field with a trailing `;name=value` parameter list.
pub trait Parameterized: HeaderField {
    const PARAMS: ParamSpec;

    fn params(&self) -> &ParameterList;

    fn params_mut(&mut self) -> &mut ParameterList;

    fn param(&self, name: &str) -> Option<&str> {
        self.params().value(name)
    }

    /// Adds or replaces a parameter after checking it against
    /// [`Parameterized::PARAMS`].
    fn add_param(&mut self, param: Parameter) -> Result<()> {
        Self::PARAMS.check(Self::NAME, &param)?;
        self.params_mut().set(param);
        Ok(())
    }

    fn remove_param(&mut self, name: &str) -> Option<Parameter> {
        self.params_mut().remove(name)
    }
}

/// Logs a value that did not match the header's production and was dropped.
pub(crate) fn discard(header: &'static str, value: &str) {
    debug!(header, value, "value does not match the header grammar, leaving it empty");
}

/// Implements the string conversions and group comparisons of a header type.
macro_rules! impl_header_conversions {
    ($ty:ty) => {
        $crate::types::header::impl_header_conversions!($ty, HeaderFieldGroup);
    };
    ($ty:ty, $group:ident) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::types::header::HeaderField::field_string(self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <$ty as $crate::types::header::HeaderField>::from_value(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = $crate::error::Error;

            fn try_from(s: &str) -> $crate::error::Result<Self> {
                <$ty as $crate::types::header::HeaderField>::from_value(s)
            }
        }

        impl PartialEq<$crate::types::group::$group<$ty>> for $ty {
            fn eq(&self, other: &$crate::types::group::$group<$ty>) -> bool {
                other.is_single(self)
            }
        }

        impl PartialEq<$ty> for $crate::types::group::$group<$ty> {
            fn eq(&self, other: &$ty) -> bool {
                self.is_single(other)
            }
        }
    };
}

pub(crate) use impl_header_conversions;
