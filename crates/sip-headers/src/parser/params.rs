// Parsers for generic parameters (generic-param) and auth parameters (auth-param)

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    combinator::{map, opt},
    multi::{many0, separated_list1},
    sequence::{pair, preceded, separated_pair},
};

use super::quoted::{quoted_string, unescape};
use super::separators::{comma, equal, semi};
use super::token::{is_token_char, token};
use super::ParseResult;
use crate::types::param::Parameter;

// host adds the IPv6 reference characters to the token set
fn is_gen_value_char(c: char) -> bool {
    is_token_char(c) || matches!(c, '[' | ']' | ':')
}

// gen-value = token / host / quoted-string
// Yields the unescaped value and whether it was quoted on the wire
fn gen_value(input: &str) -> ParseResult<(String, bool)> {
    alt((
        map(quoted_string, |raw| (unescape(raw), true)),
        map(take_while1(is_gen_value_char), |v: &str| (v.to_string(), false)),
    ))(input)
}

/// generic-param = token [ EQUAL gen-value ]
pub fn generic_param(input: &str) -> ParseResult<Parameter> {
    map(
        pair(token, opt(preceded(equal, gen_value))),
        |(name, value)| Parameter::from_wire(name, value),
    )(input)
}

/// Parses zero or more semicolon-preceded generic parameters.
/// Input: ";name1=value1;name2;name3=\"value3\""
pub fn semicolon_params0(input: &str) -> ParseResult<Vec<Parameter>> {
    many0(preceded(semi, generic_param))(input)
}

// Some peers send unquoted URIs or hex strings; accept anything up to the next comma
fn is_loose_auth_char(c: char) -> bool {
    c != ',' && c != '"' && !c.is_whitespace()
}

// auth-value = token / quoted-string
fn auth_value(input: &str) -> ParseResult<(String, bool)> {
    alt((
        map(quoted_string, |raw| (unescape(raw), true)),
        map(take_while1(is_loose_auth_char), |v: &str| (v.to_string(), false)),
    ))(input)
}

/// auth-param = auth-param-name EQUAL auth-value
pub fn auth_param(input: &str) -> ParseResult<Parameter> {
    map(separated_pair(token, equal, auth_value), |(name, value)| {
        Parameter::from_wire(name, Some(value))
    })(input)
}

/// auth-param *(COMMA auth-param)
pub fn auth_params(input: &str) -> ParseResult<Vec<Parameter>> {
    separated_list1(comma, auth_param)(input)
}
