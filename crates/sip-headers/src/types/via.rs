//! # SIP Via Header
//!
//! This module provides an implementation of the SIP Via header as defined in
//! [RFC 3261 Section 20.42](https://datatracker.ietf.org/doc/html/rfc3261#section-20.42).
//!
//! The Via header traces the path taken by a request so that responses can
//! be routed back along it:
//!
//! ```text
//! Via          = ( "Via" / "v" ) HCOLON via-parm *(COMMA via-parm)
//! via-parm     = sent-protocol LWS sent-by *( SEMI via-params )
//! sent-protocol = protocol-name SLASH protocol-version SLASH transport
//! via-params   = via-ttl / via-maddr / via-received / via-branch / via-extension
//! ```
//!
//! ## Common parameters
//!
//! - `branch`: transaction identifier, starting with `z9hG4bK` when generated here
//! - `received`: IP address the request was received from
//! - `rport`: symmetric response routing through NAT (RFC 3581)
//! - `maddr`: multicast address
//! - `ttl`: time-to-live for multicast, 0 to 255
//!
//! Branches from older peers that lack the magic cookie are accepted.
//!
//! With the `lenient_parsing` feature whitespace is tolerated around the
//! slashes of the sent-protocol, as seen in the RFC 4475 torture tests.
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_headers::prelude::*;
//!
//! let via: Via = "Via: SIP/2.0/UDP erlang.bell-telephone.com:5060;branch=z9hG4bK87asdks7".parse().unwrap();
//! assert_eq!(via.protocol_name(), "SIP");
//! assert_eq!(via.transport(), Some(&Transport::Udp));
//! assert_eq!(via.sent_by(), "erlang.bell-telephone.com:5060");
//! assert_eq!(via.branch(), Some("z9hG4bK87asdks7"));
//!
//! let mut via = Via::new(Transport::Tcp, "pc33.atlanta.com", None).unwrap();
//! assert!(via.branch().unwrap().starts_with("z9hG4bK"));
//! via.enable_rport();
//! assert!(via.has_rport());
//! ```

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use nom::sequence::tuple;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::header::{discard, impl_header_conversions, HeaderField, Parameterized};
use super::param::{ParamSpec, Parameter, ParameterList};
use crate::defaults::{DEFAULT_PROTOCOL_NAME, DEFAULT_PROTOCOL_VERSION};
use crate::error::{Error, Result};
use crate::grammar::{is_host, is_ip_literal, is_token};
use crate::id;
use crate::parser::params::semicolon_params0;
use crate::parser::values::hostport;
use crate::parser::whitespace::lws;
use crate::parser::{parse_complete, token, ParseResult};

/// Transport named in the sent-protocol of a Via entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Transport {
    Udp,
    Tcp,
    Tls,
    Sctp,
    Ws,
    Wss,
    Other(String),
}

impl Transport {
    pub fn as_str(&self) -> &str {
        match self {
            Transport::Udp => "UDP",
            Transport::Tcp => "TCP",
            Transport::Tls => "TLS",
            Transport::Sctp => "SCTP",
            Transport::Ws => "WS",
            Transport::Wss => "WSS",
            Transport::Other(other) => other,
        }
    }

    fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "UDP" => Transport::Udp,
            "TCP" => Transport::Tcp,
            "TLS" => Transport::Tls,
            "SCTP" => Transport::Sctp,
            "WS" => Transport::Ws,
            "WSS" => Transport::Wss,
            _ => {
                debug!(transport = token, "unknown Via transport");
                Transport::Other(token.to_string())
            }
        }
    }
}

impl PartialEq for Transport {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Eq for Transport {}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::missing("transport"));
        }
        if !is_token(s) {
            return Err(Error::format("transport", s));
        }
        Ok(Transport::from_token(s))
    }
}

/// One entry of the Via header field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Via {
    protocol_name: String,
    protocol_version: String,
    transport: Option<Transport>,
    host: String,
    port: Option<u16>,
    params: ParameterList,
}

fn check_token(property: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing(property));
    }
    if !is_token(value) {
        return Err(Error::format(property, value));
    }
    Ok(())
}

fn check_host(host: &str) -> Result<()> {
    if host.is_empty() {
        return Err(Error::missing("sent-by host"));
    }
    if !is_host(host) {
        return Err(Error::format("sent-by host", host));
    }
    Ok(())
}

fn required_value<'a>(param: &'a Parameter, property: &'static str) -> Result<&'a str> {
    param.value().ok_or(Error::missing(property))
}

fn validate_via_param(param: &Parameter) -> Result<()> {
    let name = param.name().to_ascii_lowercase();
    match name.as_str() {
        "ttl" => {
            let ttl = required_value(param, "ttl")?;
            if !ttl.chars().all(|c| c.is_ascii_digit()) {
                return Err(Error::format("ttl", ttl));
            }
            match ttl.parse::<u32>() {
                Ok(value) if value <= 255 => Ok(()),
                _ => Err(Error::range("ttl", ttl, 0, 255)),
            }
        }
        "maddr" => {
            let maddr = required_value(param, "maddr")?;
            if is_host(maddr) {
                Ok(())
            } else {
                Err(Error::format("maddr", maddr))
            }
        }
        "received" => {
            let received = required_value(param, "received")?;
            if is_ip_literal(received) {
                Ok(())
            } else {
                Err(Error::format("received", received))
            }
        }
        "branch" => {
            let branch = required_value(param, "branch")?;
            if is_token(branch) {
                Ok(())
            } else {
                Err(Error::format("branch", branch))
            }
        }
        "rport" => match param.value() {
            None => Ok(()),
            Some(port) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => port
                .parse::<u16>()
                .map(|_| ())
                .map_err(|_| Error::range("rport", port, 0, u16::MAX)),
            Some(port) => Err(Error::format("rport", port)),
        },
        _ => Ok(()),
    }
}

#[cfg(not(feature = "lenient_parsing"))]
fn protocol_slash(input: &str) -> ParseResult<char> {
    nom::character::complete::char('/')(input)
}

#[cfg(feature = "lenient_parsing")]
fn protocol_slash(input: &str) -> ParseResult<char> {
    nom::combinator::map(crate::parser::separators::slash, |_| '/')(input)
}

impl Via {
    /// Creates a `SIP/2.0` entry for the given transport and sent-by,
    /// carrying a freshly generated branch.
    pub fn new(transport: Transport, host: &str, port: Option<u16>) -> Result<Self> {
        let mut via = Via::default();
        via.set_transport(transport)?;
        via.set_sent_by(host, port)?;
        Ok(via)
    }

    /// A branch value carrying the RFC 3261 magic cookie.
    pub fn new_branch() -> String {
        id::new_branch()
    }

    pub fn protocol_name(&self) -> &str {
        &self.protocol_name
    }

    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    pub fn set_protocol(&mut self, name: &str, version: &str) -> Result<()> {
        check_token("protocol name", name)?;
        check_token("protocol version", version)?;
        self.protocol_name = name.to_string();
        self.protocol_version = version.to_string();
        Ok(())
    }

    pub fn transport(&self) -> Option<&Transport> {
        self.transport.as_ref()
    }

    pub fn set_transport(&mut self, transport: Transport) -> Result<()> {
        if let Transport::Other(other) = &transport {
            check_token("transport", other)?;
        }
        self.transport = Some(transport);
        Ok(())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// `host[:port]`
    pub fn sent_by(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    pub fn set_sent_by(&mut self, host: &str, port: Option<u16>) -> Result<()> {
        check_host(host)?;
        self.host = host.to_string();
        self.port = port;
        Ok(())
    }

    pub fn branch(&self) -> Option<&str> {
        self.params.value("branch")
    }

    pub fn set_branch(&mut self, branch: &str) -> Result<()> {
        self.add_param(Parameter::new("branch", branch)?)
    }

    pub fn received(&self) -> Option<IpAddr> {
        let received = self.params.value("received")?;
        let bare = received
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(received);
        bare.parse().ok()
    }

    pub fn set_received(&mut self, addr: IpAddr) {
        self.params
            .set(Parameter::from_wire("received", Some((addr.to_string(), false))));
    }

    pub fn maddr(&self) -> Option<&str> {
        self.params.value("maddr")
    }

    pub fn set_maddr(&mut self, maddr: &str) -> Result<()> {
        self.add_param(Parameter::new("maddr", maddr)?)
    }

    pub fn ttl(&self) -> Option<u8> {
        self.params.value("ttl").and_then(|ttl| ttl.parse().ok())
    }

    pub fn set_ttl(&mut self, ttl: u8) {
        self.params
            .set(Parameter::from_wire("ttl", Some((ttl.to_string(), false))));
    }

    /// `None` when there is no rport parameter, `Some(None)` for the bare
    /// flag and `Some(Some(port))` once a port has been filled in.
    pub fn rport(&self) -> Option<Option<u16>> {
        let rport = self.params.get("rport")?;
        Some(rport.value().and_then(|port| port.parse().ok()))
    }

    pub fn has_rport(&self) -> bool {
        self.params.contains("rport")
    }

    /// Adds the bare `rport` flag asking for a symmetric response.
    pub fn enable_rport(&mut self) {
        self.set_rport(None);
    }

    pub fn set_rport(&mut self, port: Option<u16>) {
        let value = port.map(|p| (p.to_string(), false));
        self.params.set(Parameter::from_wire("rport", value));
    }
}

impl Default for Via {
    fn default() -> Self {
        let mut params = ParameterList::new();
        params.set(Parameter::from_wire("branch", Some((Via::new_branch(), false))));
        Via {
            protocol_name: DEFAULT_PROTOCOL_NAME.to_string(),
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
            transport: Some(Transport::Udp),
            host: String::new(),
            port: None,
            params,
        }
    }
}

impl HeaderField for Via {
    const NAME: &'static str = "Via";
    const COMPACT_NAME: Option<&'static str> = Some("v");
    const ALLOW_MULTIPLE: bool = true;

    fn reset(&mut self) {
        self.protocol_name.clear();
        self.protocol_version.clear();
        self.transport = None;
        self.host.clear();
        self.port = None;
        self.params.clear();
    }

    fn parse_value(&mut self, value: &str) -> Result<()> {
        let Some((name, _, version, _, transport, _, (host, port), params)) = parse_complete(
            tuple((
                token,
                protocol_slash,
                token,
                protocol_slash,
                token,
                lws,
                hostport,
                semicolon_params0,
            )),
            value,
        ) else {
            discard(Self::NAME, value);
            return Ok(());
        };
        self.protocol_name = name.to_string();
        self.protocol_version = version.to_string();
        self.transport = Some(Transport::from_token(transport));
        self.host = host.to_string();
        self.port = port;
        self.params = Self::PARAMS.collect(Self::NAME, params)?;
        Ok(())
    }

    fn value_string(&self) -> String {
        let Some(transport) = &self.transport else {
            return String::new();
        };
        if self.host.is_empty() {
            return String::new();
        }
        format!(
            "{}/{}/{} {}{}",
            self.protocol_name,
            self.protocol_version,
            transport,
            self.sent_by(),
            self.params
        )
    }

    fn is_valid(&self) -> bool {
        !self.protocol_name.is_empty()
            && !self.protocol_version.is_empty()
            && self.transport.is_some()
            && !self.host.is_empty()
    }
}

impl Parameterized for Via {
    const PARAMS: ParamSpec = ParamSpec {
        known: &["ttl", "maddr", "received", "branch", "rport"],
        allow_generic: true,
        validate: validate_via_param,
    };

    fn params(&self) -> &ParameterList {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }
}

impl PartialEq for Via {
    fn eq(&self, other: &Self) -> bool {
        self.protocol_name.eq_ignore_ascii_case(&other.protocol_name)
            && self.protocol_version.eq_ignore_ascii_case(&other.protocol_version)
            && self.transport == other.transport
            && self.host.eq_ignore_ascii_case(&other.host)
            && self.port == other.port
            && self.params == other.params
    }
}

impl_header_conversions!(Via);
