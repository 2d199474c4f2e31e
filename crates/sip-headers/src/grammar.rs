//! Character-class predicates and quoting helpers for header values.
//!
//! None of these functions fail: predicates answer `false`, and the
//! unquoting helpers hand back their input unchanged when it is not in the
//! expected form. Setters check a predicate first and raise
//! [`Error::InvalidFormat`](crate::error::Error::InvalidFormat) themselves.

use std::net::IpAddr;

use nom::combinator::all_consuming;

use crate::parser::quoted::{comment, quoted_string, unescape};
use crate::parser::token::is_token_char;
use crate::parser::values::host;

/// token = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// True when every character may appear in a host without escaping:
/// alphanumerics, `-` and `.`, plus `[`, `]` and `:` for IPv6 references.
pub fn is_unreserved_host(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '[' | ']' | ':'))
}

/// host = hostname / IPv4address / IPv6reference
pub fn is_host(s: &str) -> bool {
    all_consuming(host)(s).is_ok()
}

/// An IPv4 address, or an IPv6 address with or without brackets.
pub fn is_ip_literal(s: &str) -> bool {
    let bare = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);
    bare.parse::<IpAddr>().is_ok()
}

pub fn is_alpha_with_dash(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

/// LHEX = DIGIT / %x61-66 ; lowercase a-f
pub fn is_lhex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

/// LHex content optionally wrapped in one pair of double quotes.
pub fn is_lhex_with_quotes(s: &str) -> bool {
    match s.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => is_lhex(inner),
        None => is_lhex(s),
    }
}

/// language-range = ( ( 1*8ALPHA *( "-" 1*8ALPHA ) ) / "*" )
pub fn is_unreserved_language_range(s: &str) -> bool {
    s == "*" || is_language_tag(s)
}

/// language-tag = primary-tag *( "-" subtag ), each 1*8ALPHA
pub fn is_language_tag(s: &str) -> bool {
    !s.is_empty()
        && s
            .split('-')
            .all(|part| (1..=8).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic()))
}

fn escape_into(out: &mut String, s: &str, special: &[char]) {
    for c in s.chars() {
        if c == '\\' || special.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
}

/// Wraps `s` in double quotes, escaping `"` and `\` as quoted-pairs.
pub fn to_quoted_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    escape_into(&mut out, s, &['"']);
    out.push('"');
    out
}

/// Inverse of [`to_quoted_string`]. Input that is not a single well-formed
/// quoted-string is returned unchanged.
pub fn unquote_string(s: &str) -> String {
    match all_consuming(quoted_string)(s) {
        Ok((_, raw)) => unescape(raw),
        Err(_) => s.to_string(),
    }
}

/// Wraps `s` in parentheses, escaping `(`, `)` and `\` as quoted-pairs.
pub fn to_comment(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('(');
    escape_into(&mut out, s, &['(', ')']);
    out.push(')');
    out
}

/// Inverse of [`to_comment`]. Input that is not a single well-formed
/// comment is returned unchanged.
pub fn uncomment_string(s: &str) -> String {
    match all_consuming(comment)(s) {
        Ok((_, raw)) => unescape(raw),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_token() {
        assert!(is_token("INVITE"));
        assert!(is_token("z9hG4bK-74bf9.~'`%*_+!"));
        assert!(!is_token(""));
        assert!(!is_token("two words"));
        assert!(!is_token("semi;colon"));
        assert!(!is_token("\"quoted\""));
    }

    #[test]
    fn test_hosts() {
        assert!(is_host("atlanta.example.com"));
        assert!(is_host("192.0.2.4"));
        assert!(is_host("[2001:db8::10]"));
        assert!(!is_host("atlanta.example.com:5060"));
        assert!(!is_host("bad_host"));
        assert!(!is_host(""));

        assert!(is_unreserved_host("[::1]"));
        assert!(!is_unreserved_host("a b"));
    }

    #[test]
    fn test_ip_literal() {
        assert!(is_ip_literal("192.0.2.1"));
        assert!(is_ip_literal("[2001:db8::1]"));
        assert!(is_ip_literal("2001:db8::1"));
        assert!(!is_ip_literal("atlanta.com"));
        assert!(!is_ip_literal("192.0.2.256"));
    }

    #[test]
    fn test_lhex() {
        assert!(is_lhex("dcd98b7102dd2f0e8b11d0f600bfb0c093"));
        assert!(!is_lhex("DCD98B"));
        assert!(!is_lhex("xyz"));
        assert!(!is_lhex(""));
        assert!(is_lhex_with_quotes("\"0a4f113b\""));
        assert!(is_lhex_with_quotes("0a4f113b"));
        assert!(!is_lhex_with_quotes("\"0a4f113b"));
    }

    #[test]
    fn test_language_ranges() {
        assert!(is_unreserved_language_range("*"));
        assert!(is_unreserved_language_range("en"));
        assert!(is_unreserved_language_range("en-GB"));
        assert!(!is_unreserved_language_range("en_US"));
        assert!(!is_unreserved_language_range("abcdefghi"));
        assert!(!is_unreserved_language_range("en-"));
        assert!(!is_language_tag("*"));
        assert!(is_alpha_with_dash("fr-ca"));
        assert!(!is_alpha_with_dash("fr1"));
    }

    #[test]
    fn test_quoting() {
        assert_eq!(to_quoted_string(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
        assert_eq!(unquote_string(r#""say \"hi\" \\o/""#), r#"say "hi" \o/"#);
        assert_eq!(unquote_string("plain"), "plain");
        assert_eq!(unquote_string("\"unterminated"), "\"unterminated");
    }

    #[test]
    fn test_comments() {
        assert_eq!(to_comment("in a meeting (sorry)"), r"(in a meeting \(sorry\))");
        assert_eq!(uncomment_string(r"(in a meeting \(sorry\))"), "in a meeting (sorry)");
        assert_eq!(uncomment_string("(nested (ok))"), "nested (ok)");
        assert_eq!(uncomment_string("no parens"), "no parens");

        let deep = format!("{}{}", "(".repeat(100_000), ")".repeat(100_000));
        assert_eq!(uncomment_string(&deep), deep);
    }
}
