//! Whitespace parsers for label selectors.
//!
//! Whitespace includes spaces, tabs, newlines and carriage returns. It is
//! allowed around every selector token and required between a label key
//! and the `in` / `notin` keywords.
//!
//! # Examples
//!
//! ```rust
//! use rusty_nrql_query::lexer::whitespace::{ws_opt, ws_req};
//!
//! let (rest, _) = ws_opt("  \n  app").unwrap();
//! assert_eq!(rest, "app");
//!
//! assert!(ws_req("in").is_err());
//! ```

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    combinator::value,
};

/// Check if a character is whitespace (space, tab, newline, or carriage return).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

/// Parse zero or more whitespace characters.
pub fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(is_whitespace)(input)
}

/// Parse one or more whitespace characters.
pub fn whitespace1(input: &str) -> IResult<&str, &str> {
    take_while1(is_whitespace)(input)
}

/// Skip optional whitespace.
pub fn ws_opt(input: &str) -> IResult<&str, ()> {
    value((), whitespace0).parse(input)
}

/// Skip required whitespace, at least one character must be present.
pub fn ws_req(input: &str) -> IResult<&str, ()> {
    value((), whitespace1).parse(input)
}

/// Wrapper combinator that consumes optional leading whitespace before a parser.
///
/// Example:
/// ```
/// use rusty_nrql_query::lexer::ws;
/// use nom::character::complete::char;
///
/// let mut parser = ws(char(','));
/// assert_eq!(parser("  ,b"), Ok(("b", ',')));
/// ```
pub fn ws<'a, O, F>(mut parser: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    move |input: &'a str| {
        let (input, _) = ws_opt(input)?;
        parser.parse(input)
    }
}
