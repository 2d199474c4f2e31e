use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, satisfy},
    combinator::recognize,
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded},
};

use super::separators::dquote;
use super::whitespace::{lws, sws, unfold};
use super::ParseResult;

// qdtext = LWS / %x21 / %x23-5B / %x5D-7E / UTF8-NONASCII
fn is_qdtext(c: char) -> bool {
    !matches!(c, '"' | '\\' | '\r' | '\n')
}

/// Deepest comment nesting the scanner accepts.
pub const MAX_COMMENT_DEPTH: usize = 32;

// quoted-pair = "\" (%x00-09 / %x0B-0C / %x0E-7F)
pub fn quoted_pair(input: &str) -> ParseResult<&str> {
    recognize(pair(char('\\'), satisfy(|c| c != '\r' && c != '\n')))(input)
}

/// quoted-string = SWS DQUOTE *(qdtext / quoted-pair ) DQUOTE
///
/// Returns the raw content between the quotes, escapes still in place.
pub fn quoted_string(input: &str) -> ParseResult<&str> {
    preceded(
        sws,
        delimited(
            dquote,
            recognize(many0(alt((take_while1(is_qdtext), quoted_pair, lws)))),
            dquote,
        ),
    )(input)
}

/// comment = LPAREN *(ctext / quoted-pair / comment) RPAREN
///
/// Returns the raw content inside the outermost parentheses. Nesting is
/// tracked with a counter; comments nested deeper than
/// [`MAX_COMMENT_DEPTH`] are rejected.
pub fn comment(input: &str) -> ParseResult<&str> {
    let fail = |kind| Err(nom::Err::Error(Error::new(input, kind)));
    let mut chars = input.char_indices().peekable();
    if !matches!(chars.next(), Some((_, '('))) {
        return fail(ErrorKind::Char);
    }
    let mut depth = 1usize;
    while let Some((i, c)) = chars.next() {
        match c {
            // quoted-pair
            '\\' => {
                if matches!(chars.next(), None | Some((_, '\r' | '\n'))) {
                    return fail(ErrorKind::Escaped);
                }
            }
            '(' => {
                depth += 1;
                if depth > MAX_COMMENT_DEPTH {
                    return fail(ErrorKind::TooLarge);
                }
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], &input[1..i]));
                }
            }
            // A line break is only allowed as folding: CRLF followed by whitespace
            '\r' | '\n' => {
                if c == '\r' && !matches!(chars.next(), Some((_, '\n'))) {
                    return fail(ErrorKind::CrLf);
                }
                if !matches!(chars.peek(), Some((_, ' ' | '\t'))) {
                    return fail(ErrorKind::CrLf);
                }
            }
            _ => {}
        }
    }
    fail(ErrorKind::Char)
}

/// Resolves quoted-pairs and line folding in raw quoted-string or comment content.
pub fn unescape(raw: &str) -> String {
    let unfolded = unfold(raw);
    let mut out = String::with_capacity(unfolded.len());
    let mut chars = unfolded.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_string() {
        let (rem, val) = quoted_string(" \"Session parameter 'foo' not understood\" rest").unwrap();
        assert_eq!(rem, " rest");
        assert_eq!(val, "Session parameter 'foo' not understood");
    }

    #[test]
    fn test_quoted_string_escapes() {
        let (rem, val) = quoted_string(r#""J Rosenberg \\\"" <sip:a@b>"#).unwrap();
        assert_eq!(rem, " <sip:a@b>");
        assert_eq!(val, r#"J Rosenberg \\\""#);
        assert_eq!(unescape(val), r#"J Rosenberg \""#);
    }

    #[test]
    fn test_quoted_string_unterminated() {
        assert!(quoted_string("\"no end").is_err());
        assert!(quoted_string("no start\"").is_err());
    }

    #[test]
    fn test_empty_quoted_string() {
        assert_eq!(quoted_string("\"\"").unwrap(), ("", ""));
    }

    #[test]
    fn test_nested_comment() {
        let (rem, val) = comment("(outer (inner) text) ;duration=10").unwrap();
        assert_eq!(rem, " ;duration=10");
        assert_eq!(val, "outer (inner) text");
        assert!(comment("(unbalanced").is_err());
    }

    #[test]
    fn test_comment_escapes_and_folding() {
        assert_eq!(comment(r"(a \) b)").unwrap(), ("", r"a \) b"));
        assert_eq!(comment("(folded\r\n line)").unwrap(), ("", "folded\r\n line"));
        assert!(comment("(broken\r\nline)").is_err());
        assert!(comment("(trailing \\").is_err());
    }

    #[test]
    fn test_comment_depth_limit() {
        let nested = |n: usize| format!("{}x{}", "(".repeat(n), ")".repeat(n));
        let at_limit = nested(MAX_COMMENT_DEPTH);
        assert_eq!(comment(&at_limit).unwrap().0, "");

        assert!(comment(&nested(MAX_COMMENT_DEPTH + 1)).is_err());
        assert!(comment(&nested(100_000)).is_err());
    }
}
