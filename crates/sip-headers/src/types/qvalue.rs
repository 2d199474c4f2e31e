//! # Quality Values
//!
//! Accept-family headers rank their entries with a `q` parameter
//! (RFC 3261 Section 20.1):
//!
//! ```text
//! qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )
//! ```
//!
//! [`QValue`] stores the weight in thousandths so that equality and ordering
//! are exact. [`AcceptParams`] is the `q` plus any accept-extension
//! parameters, shared by Accept, Accept-Encoding and Accept-Language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::header::Parameterized;
use super::param::{ParamSpec, Parameter, ParameterList};
use crate::error::{Error, Result};
use crate::parser::{parse_complete, values::qvalue_text};

/// A preference weight between 0 and 1 with at most three decimals.
///
/// # Examples
///
/// ```rust
/// use rvoip_sip_headers::prelude::*;
///
/// let q: QValue = "0.50".parse().unwrap();
/// assert_eq!(q.to_string(), "0.5");
/// assert_eq!(q, QValue::from_thousandths(500).unwrap());
///
/// assert!("1.001".parse::<QValue>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QValue(u16);

impl QValue {
    pub const MIN: QValue = QValue(0);
    pub const MAX: QValue = QValue(1000);

    pub fn from_thousandths(thousandths: u16) -> Result<Self> {
        if thousandths > 1000 {
            return Err(Error::range("q", format!("{}.{:03}", thousandths / 1000, thousandths % 1000), 0, 1));
        }
        Ok(QValue(thousandths))
    }

    /// Converts a float, rejecting values outside 0..=1 and values with
    /// more than three decimals.
    pub fn new(value: f32) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::format("q", value.to_string()));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::range("q", value, 0, 1));
        }
        let scaled = f64::from(value) * 1000.0;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > 1e-3 {
            return Err(Error::format("q", value.to_string()));
        }
        Ok(QValue(rounded as u16))
    }

    pub fn thousandths(&self) -> u16 {
        self.0
    }

    pub fn as_f32(&self) -> f32 {
        f32::from(self.0) / 1000.0
    }
}

impl Default for QValue {
    fn default() -> Self {
        QValue::MAX
    }
}

impl fmt::Display for QValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 1000;
        let fraction = self.0 % 1000;
        if fraction == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:03}", fraction);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl FromStr for QValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::missing("q"));
        }
        if let Some(text) = parse_complete(qvalue_text, s) {
            let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
            let whole: u16 = if whole == "1" { 1000 } else { 0 };
            let fraction = format!("{:0<3}", fraction);
            let fraction: u16 = fraction.parse().map_err(|_| Error::format("q", s))?;
            return QValue::from_thousandths(whole + fraction);
        }
        // Distinguish a number outside [0, 1] from plain garbage
        match s.parse::<f64>() {
            Ok(number) if number.is_finite() && !(0.0..=1.0).contains(&number) => {
                Err(Error::range("q", s, 0, 1))
            }
            _ => Err(Error::format("q", s)),
        }
    }
}

/// Parses a qvalue, answering `None` when it is malformed or out of range.
pub fn parse_qvalue(raw: &str) -> Option<f32> {
    raw.parse::<QValue>().ok().map(|q| q.as_f32())
}

pub(crate) fn validate_q(param: &Parameter) -> Result<()> {
    match param.value() {
        Some(value) => value.parse::<QValue>().map(|_| ()),
        None => Err(Error::missing("q")),
    }
}

/// The accept-params of an Accept-family entry: an optional `q` weight,
/// always written first, followed by accept-extension parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptParams {
    q: Option<QValue>,
    extensions: ParameterList,
}

impl AcceptParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn q(&self) -> Option<QValue> {
        self.q
    }

    pub fn set_q(&mut self, q: Option<QValue>) {
        self.q = q;
    }

    pub fn extensions(&self) -> &ParameterList {
        &self.extensions
    }

    pub fn extensions_mut(&mut self) -> &mut ParameterList {
        &mut self.extensions
    }

    /// Adds a parameter, routing `q` into the weight.
    pub fn add(&mut self, header: &'static str, spec: &ParamSpec, param: Parameter) -> Result<()> {
        spec.check(header, &param)?;
        if param.is_named("q") {
            self.q = Some(param.value().unwrap_or_default().parse()?);
        } else {
            self.extensions.set(param);
        }
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        if name.eq_ignore_ascii_case("q") {
            let q = self.q.take()?;
            return Parameter::new("q", q.to_string()).ok();
        }
        self.extensions.remove(name)
    }

    pub(crate) fn from_params(
        header: &'static str,
        spec: &ParamSpec,
        params: Vec<Parameter>,
    ) -> Result<Self> {
        let mut accept = AcceptParams::new();
        for param in params {
            accept.add(header, spec, param)?;
        }
        Ok(accept)
    }

    pub fn clear(&mut self) {
        self.q = None;
        self.extensions.clear();
    }
}

impl fmt::Display for AcceptParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(q) = self.q {
            write!(f, ";q={}", q)?;
        }
        write!(f, "{}", self.extensions)
    }
}

/// Capability of Accept-family headers: a `q` weight plus accept-extensions.
///
/// The extensions are what [`Parameterized::params`] returns; `q` is kept
/// apart so it is always written first.
pub trait QualityValued: Parameterized {
    fn accept_params(&self) -> &AcceptParams;

    fn accept_params_mut(&mut self) -> &mut AcceptParams;

    fn q(&self) -> Option<QValue> {
        self.accept_params().q()
    }

    fn set_q(&mut self, q: Option<QValue>) {
        self.accept_params_mut().set_q(q);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!("0".parse::<QValue>().unwrap(), QValue::MIN);
        assert_eq!("1".parse::<QValue>().unwrap(), QValue::MAX);
        assert_eq!("1.000".parse::<QValue>().unwrap(), QValue::MAX);
        assert!(matches!("1.001".parse::<QValue>(), Err(Error::OutOfRange { .. })));
        assert!(matches!("-0.001".parse::<QValue>(), Err(Error::OutOfRange { .. })));
        assert!(matches!("0.1234".parse::<QValue>(), Err(Error::InvalidFormat { .. })));
        assert!(matches!("high".parse::<QValue>(), Err(Error::InvalidFormat { .. })));
        assert!(matches!("".parse::<QValue>(), Err(Error::MissingValue { .. })));
    }

    #[test]
    fn test_from_float() {
        assert_eq!(QValue::new(0.7).unwrap().thousandths(), 700);
        assert_eq!(QValue::new(0.123).unwrap().thousandths(), 123);
        assert!(matches!(QValue::new(1.5), Err(Error::OutOfRange { .. })));
        assert!(matches!(QValue::new(-0.001), Err(Error::OutOfRange { .. })));
        assert!(matches!(QValue::new(0.1234), Err(Error::InvalidFormat { .. })));
        assert!(QValue::from_thousandths(1001).is_err());
    }

    #[test]
    fn test_display_trims_zeros() {
        assert_eq!(QValue::from_thousandths(0).unwrap().to_string(), "0");
        assert_eq!(QValue::from_thousandths(1000).unwrap().to_string(), "1");
        assert_eq!(QValue::from_thousandths(500).unwrap().to_string(), "0.5");
        assert_eq!(QValue::from_thousandths(25).unwrap().to_string(), "0.025");
    }

    #[test]
    fn test_parse_qvalue() {
        assert_eq!(parse_qvalue("0.8"), Some(0.8));
        assert_eq!(parse_qvalue("2"), None);
    }

    #[test]
    fn test_accept_params_put_q_first() {
        let spec = ParamSpec {
            known: &["q"],
            allow_generic: true,
            validate: validate_q,
        };
        let params = vec![
            Parameter::new("level", "1").unwrap(),
            Parameter::new("q", "0.3").unwrap(),
        ];
        let accept = AcceptParams::from_params("Accept-Encoding", &spec, params).unwrap();
        assert_eq!(accept.to_string(), ";q=0.3;level=1");
        assert_eq!(accept.q(), Some(QValue::from_thousandths(300).unwrap()));

        let bad = vec![Parameter::new("q", "5").unwrap()];
        assert!(AcceptParams::from_params("Accept-Encoding", &spec, bad).is_err());
    }
}
