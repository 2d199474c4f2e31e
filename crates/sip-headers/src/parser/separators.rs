use nom::{
    character::complete::char,
    combinator::recognize,
    sequence::{pair, tuple},
};

use super::whitespace::sws;
use super::ParseResult;

pub fn dquote(input: &str) -> ParseResult<char> {
    char('"')(input)
}

// Separator wrappers with SWS
pub fn slash(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, char('/'), sws)))(input)
}

pub fn equal(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, char('='), sws)))(input)
}

pub fn comma(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, char(','), sws)))(input)
}

pub fn semi(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, char(';'), sws)))(input)
}

pub fn colon(input: &str) -> ParseResult<&str> {
    recognize(tuple((sws, char(':'), sws)))(input)
}

pub fn laquot(input: &str) -> ParseResult<&str> {
    // LAQUOT = SWS "<"
    recognize(pair(sws, char('<')))(input)
}

pub fn raquot(input: &str) -> ParseResult<&str> {
    // RAQUOT = ">" SWS
    recognize(pair(char('>'), sws))(input)
}

pub fn ldquot(input: &str) -> ParseResult<&str> {
    // LDQUOT = SWS DQUOTE
    recognize(pair(sws, dquote))(input)
}

pub fn rdquot(input: &str) -> ParseResult<&str> {
    // RDQUOT = DQUOTE SWS
    recognize(pair(dquote, sws))(input)
}
