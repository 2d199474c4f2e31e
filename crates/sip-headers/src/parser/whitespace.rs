use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{opt, recognize},
    multi::{many0, many1},
    sequence::pair,
};

use super::ParseResult;

/// Parses a single whitespace character (SP or HTAB)
pub fn wsp(input: &str) -> ParseResult<&str> {
    recognize(alt((tag(" "), tag("\t"))))(input)
}

/// Parses optional whitespace (0 or more SP or HTAB)
pub fn owsp(input: &str) -> ParseResult<&str> {
    recognize(many0(wsp))(input)
}

/// Parses CRLF (accepts \r\n or just \n)
pub fn crlf(input: &str) -> ParseResult<&str> {
    recognize(alt((tag("\r\n"), tag("\n"))))(input)
}

/// LWS = [*WSP CRLF] 1*WSP
///
/// A CRLF is only accepted when it is followed by whitespace, i.e. when it
/// folds the value onto a continuation line.
pub fn lws(input: &str) -> ParseResult<&str> {
    alt((
        recognize(pair(pair(owsp, crlf), many1(wsp))),
        recognize(many1(wsp)),
    ))(input)
}

/// SWS = [LWS]
pub fn sws(input: &str) -> ParseResult<&str> {
    opt(lws)(input).map(|(rem, val)| (rem, val.unwrap_or("")))
}

/// Replaces every folded line break (CRLF followed by whitespace) with a single space.
pub fn unfold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                while matches!(chars.peek(), Some(' ') | Some('\t')) {
                    chars.next();
                }
                out.push(' ');
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wsp() {
        let (rem, val) = wsp(" rest").unwrap();
        assert_eq!(rem, "rest");
        assert_eq!(val, " ");

        let (rem, val) = wsp("\trest").unwrap();
        assert_eq!(rem, "rest");
        assert_eq!(val, "\t");

        assert!(wsp("").is_err());
        assert!(wsp("a").is_err());
    }

    #[test]
    fn test_lws_folding() {
        let (rem, val) = lws(" \r\n\tvalue").unwrap();
        assert_eq!(rem, "value");
        assert_eq!(val, " \r\n\t");

        // A bare line break is the end of the header, not LWS
        assert!(lws("\r\nvalue").is_err());
    }

    #[test]
    fn test_sws_is_optional() {
        let (rem, val) = sws("value").unwrap();
        assert_eq!(rem, "value");
        assert_eq!(val, "");
    }

    #[test]
    fn test_unfold() {
        assert_eq!(unfold("0009\r\n INVITE"), "0009 INVITE");
        assert_eq!(unfold("a\n\t\tb"), "a b");
        assert_eq!(unfold("plain"), "plain");
    }
}
