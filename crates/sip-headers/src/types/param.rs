//! # Header Parameters
//!
//! Parameters are the `;name=value` pairs that trail most SIP header values
//! (RFC 3261 Section 7.3.1), e.g. the `branch` of a Via or the `tag` of a To.
//!
//! - [`Parameter`] is one `name[=value]` pair. Names compare case-insensitively;
//!   values compare case-insensitively unless the parameter is marked
//!   case-sensitive, which is the default for quoted values.
//! - [`ParameterList`] is the ordered collection a header owns. Setting a name
//!   that is already present replaces its value in place.
//! - [`ParamSpec`] is the static description of which names a header knows,
//!   how their values are validated and whether anything else is accepted.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let mut params = ParameterList::new();
//! params.set(Parameter::new("handling", "optional").unwrap());
//! params.set(Parameter::flag("lr").unwrap());
//! params.set(Parameter::new("handling", "required").unwrap());
//!
//! assert_eq!(params.len(), 2);
//! assert_eq!(params.to_string(), ";handling=required;lr");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grammar::{is_token, to_quoted_string};
use crate::parser::token::is_token_char;

/// A single `name[=value]` header parameter.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    value: Option<String>,
    quoted: bool,
    case_sensitive: bool,
}

// Characters a gen-value may carry without quoting (token plus IPv6 references)
fn is_bare_value(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| is_token_char(c) || matches!(c, '[' | ']' | ':'))
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::missing("parameter name"));
    }
    if !is_token(name) {
        return Err(Error::format("parameter name", name));
    }
    Ok(())
}

fn check_value(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing("parameter value"));
    }
    if value.contains(['\r', '\n']) {
        return Err(Error::format("parameter value", value));
    }
    Ok(())
}

impl Parameter {
    /// Creates a `name=value` parameter.
    ///
    /// A value that cannot be sent bare (anything beyond token characters
    /// and an IPv6 reference) is quoted on output and compared
    /// case-sensitively.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        check_name(&name)?;
        check_value(&value)?;
        let quoted = !is_bare_value(&value);
        Ok(Parameter {
            name,
            value: Some(value),
            quoted,
            case_sensitive: quoted,
        })
    }

    /// Creates a valueless parameter such as `lr` or `rport`.
    pub fn flag(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        Ok(Parameter {
            name,
            value: None,
            quoted: false,
            case_sensitive: false,
        })
    }

    /// Creates a parameter whose value is always sent as a quoted-string.
    pub fn quoted(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let value = value.into();
        check_name(&name)?;
        check_value(&value)?;
        Ok(Parameter {
            name,
            value: Some(value),
            quoted: true,
            case_sensitive: true,
        })
    }

    // Values coming out of the scanner are already grammar-checked
    pub(crate) fn from_wire(name: &str, value: Option<(String, bool)>) -> Self {
        let (value, quoted) = match value {
            Some((value, quoted)) => (Some(value), quoted),
            None => (None, false),
        };
        Parameter {
            name: name.to_string(),
            value,
            quoted,
            case_sensitive: quoted,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Overrides how the value takes part in equality.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// True when the name matches `name`, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        if !self.name.eq_ignore_ascii_case(&other.name) {
            return false;
        }
        match (&self.value, &other.value) {
            (None, None) => true,
            (Some(a), Some(b)) if self.case_sensitive || other.case_sensitive => a == b,
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => write!(f, "{}", self.name),
            Some(value) if self.quoted => write!(f, "{}={}", self.name, to_quoted_string(value)),
            Some(value) => write!(f, "{}={}", self.name, value),
        }
    }
}

/// The ordered parameter collection owned by one header field.
///
/// Insertion order is kept for serialization; lookups ignore case; names are
/// unique. Two lists are equal when they hold equal parameters, regardless of
/// order.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct ParameterList(Vec<Parameter>);

impl ParameterList {
    pub fn new() -> Self {
        ParameterList(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.is_named(name))
    }

    /// The value of `name`, or `None` when it is absent or a flag.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Parameter::value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Replaces the parameter with the same name in place, or appends it.
    pub fn set(&mut self, param: Parameter) {
        match self.0.iter_mut().find(|p| p.is_named(&param.name)) {
            Some(existing) => *existing = param,
            None => self.0.push(param),
        }
    }

    /// Removes `name`, returning it. Absent names are ignored.
    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        let index = self.0.iter().position(|p| p.is_named(name))?;
        Some(self.0.remove(index))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl PartialEq for ParameterList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|p| other.get(&p.name).map_or(false, |q| p == q))
    }
}

impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in &self.0 {
            write!(f, ";{}", param)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Parameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut list = ParameterList::new();
        for param in iter {
            list.set(param);
        }
        list
    }
}

/// Static description of the parameters a header field accepts.
#[derive(Clone, Copy)]
pub struct ParamSpec {
    /// Names the field defines itself, compared case-insensitively
    pub known: &'static [&'static str],
    /// Whether names outside `known` are accepted as generic parameters
    pub allow_generic: bool,
    /// Value check applied to known parameters
    pub validate: fn(&Parameter) -> Result<()>,
}

fn accept_any(_: &Parameter) -> Result<()> {
    Ok(())
}

impl ParamSpec {
    /// No parameters at all.
    pub const NONE: ParamSpec = ParamSpec {
        known: &[],
        allow_generic: false,
        validate: accept_any,
    };

    /// Generic parameters only.
    pub const GENERIC: ParamSpec = ParamSpec {
        known: &[],
        allow_generic: true,
        validate: accept_any,
    };

    pub fn is_known(&self, name: &str) -> bool {
        self.known.iter().any(|known| known.eq_ignore_ascii_case(name))
    }

    /// Checks `param` against this description on behalf of `header`.
    pub fn check(&self, header: &'static str, param: &Parameter) -> Result<()> {
        if self.is_known(param.name()) {
            (self.validate)(param)
        } else if self.allow_generic {
            Ok(())
        } else {
            Err(Error::UnknownParameter {
                header,
                name: param.name().to_string(),
            })
        }
    }

    /// Checks every scanned parameter and collects them, later duplicates
    /// replacing earlier ones.
    pub(crate) fn collect(
        &self,
        header: &'static str,
        params: Vec<Parameter>,
    ) -> Result<ParameterList> {
        let mut list = ParameterList::new();
        for param in params {
            self.check(header, &param)?;
            list.set(param);
        }
        Ok(list)
    }
}

impl fmt::Debug for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamSpec")
            .field("known", &self.known)
            .field("allow_generic", &self.allow_generic)
            .finish()
    }
}
