use nom::bytes::complete::take_while1;

use super::ParseResult;

pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '.' | '!' | '%' | '*' | '_' | '+' | '`' | '\'' | '~')
}

pub fn token(input: &str) -> ParseResult<&str> {
    // token = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
    take_while1(is_token_char)(input)
}

fn is_word_char(c: char) -> bool {
    is_token_char(c)
        || matches!(
            c,
            '(' | ')' | '<' | '>' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '{' | '}'
        )
}

pub fn word(input: &str) -> ParseResult<&str> {
    take_while1(is_word_char)(input)
}
