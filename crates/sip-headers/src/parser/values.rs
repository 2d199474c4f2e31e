use std::net::Ipv6Addr;

use nom::{
    branch::alt,
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize, verify},
    sequence::{delimited, pair, preceded},
};

use super::ParseResult;

/// qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )
pub fn qvalue_text(input: &str) -> ParseResult<&str> {
    recognize(alt((
        pair(
            char('0'),
            opt(pair(char('.'), take_while_m_n(0, 3, |c: char| c.is_ascii_digit()))),
        ),
        pair(
            char('1'),
            opt(pair(char('.'), take_while_m_n(0, 3, |c: char| c == '0'))),
        ),
    )))(input)
}

/// delta-seconds = 1*DIGIT
pub fn delta_seconds(input: &str) -> ParseResult<u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

pub fn port(input: &str) -> ParseResult<u16> {
    map_res(digit1, |s: &str| s.parse::<u16>())(input)
}

fn is_hostname_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

fn is_valid_hostname(host: &str) -> bool {
    let trimmed = host.strip_suffix('.').unwrap_or(host);
    !trimmed.is_empty()
        && trimmed.split('.').all(|label| {
            !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
        })
}

/// hostname = *( domainlabel "." ) toplabel [ "." ], also covering IPv4address
pub fn hostname(input: &str) -> ParseResult<&str> {
    verify(take_while1(is_hostname_char), |h: &str| is_valid_hostname(h))(input)
}

/// IPv6reference = "[" IPv6address "]"
pub fn ipv6_reference(input: &str) -> ParseResult<&str> {
    recognize(delimited(
        char('['),
        verify(
            take_while1(|c: char| c.is_ascii_hexdigit() || c == ':' || c == '.'),
            |addr: &str| addr.parse::<Ipv6Addr>().is_ok(),
        ),
        char(']'),
    ))(input)
}

/// host = hostname / IPv4address / IPv6reference
pub fn host(input: &str) -> ParseResult<&str> {
    alt((ipv6_reference, hostname))(input)
}

/// hostport = host [ ":" port ]
pub fn hostport(input: &str) -> ParseResult<(&str, Option<u16>)> {
    pair(host, opt(preceded(char(':'), port)))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_complete;

    #[test]
    fn test_qvalue_text() {
        for ok in ["0", "1", "0.5", "0.123", "1.000", "0.", "1."] {
            assert_eq!(parse_complete(qvalue_text, ok), Some(ok), "{ok}");
        }
        for bad in ["1.001", "0.1234", "2", "-0.1", ".5"] {
            assert_eq!(parse_complete(qvalue_text, bad), None, "{bad}");
        }
    }

    #[test]
    fn test_host() {
        assert_eq!(host("atlanta.example.com:5060").unwrap(), (":5060", "atlanta.example.com"));
        assert_eq!(host("192.0.2.1;x").unwrap(), (";x", "192.0.2.1"));
        assert_eq!(host("[2001:db8::9:1]:5061").unwrap(), (":5061", "[2001:db8::9:1]"));
        assert!(host("-bad.example.com").is_err());
        assert!(host("[not-ipv6]").is_err());
    }

    #[test]
    fn test_hostport() {
        assert_eq!(
            parse_complete(hostport, "erlang.bell-telephone.com:5060"),
            Some(("erlang.bell-telephone.com", Some(5060)))
        );
        assert_eq!(parse_complete(hostport, "pc33.atlanta.com"), Some(("pc33.atlanta.com", None)));
        assert_eq!(parse_complete(hostport, "host:99999"), None);
    }

    #[test]
    fn test_delta_seconds() {
        assert_eq!(delta_seconds("3600 (x)").unwrap(), (" (x)", 3600));
        assert!(delta_seconds("-1").is_err());
    }
}
