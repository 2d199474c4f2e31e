//! Grammar scanner for header values.
//!
//! Every production is an anchored `nom` combinator over `&str`; none of
//! them backtrack more than one alternative deep, so matching time is
//! linear in the input length.

pub mod list;
pub mod params;
pub mod quoted;
pub mod separators;
pub mod token;
pub mod values;
pub mod whitespace;

use nom::combinator::all_consuming;
use nom::IResult;

// Type alias for parser result
pub type ParseResult<'a, O> = IResult<&'a str, O>;

/// Runs `parser` against the whole of `input`, ignoring leading and
/// trailing whitespace. Returns `None` unless every character is consumed.
pub fn parse_complete<'a, O, F>(parser: F, input: &'a str) -> Option<O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    all_consuming(parser)(input.trim())
        .ok()
        .map(|(_, output)| output)
}

pub use list::split_top_level;
pub use quoted::{comment, quoted_string};
pub use token::{is_token_char, token};
