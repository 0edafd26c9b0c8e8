//! Identifier parsing for label selectors
//!
//! Label selectors use Kubernetes label syntax:
//! - **Label names**: `[A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?`, at most 63 characters
//! - **Label keys**: an optional DNS subdomain prefix followed by `/` and a
//!   label name, e.g. `app.kubernetes.io/name`
//! - **Label values**: same character rules as names, but may be empty

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize, verify},
    sequence::{pair, terminated},
};

/// Maximum length of a label name or label value
pub const MAX_NAME_LENGTH: usize = 63;

/// Maximum length of the DNS subdomain prefix of a label key
pub const MAX_PREFIX_LENGTH: usize = 253;

/// Check if a character may appear inside a label name or value
#[inline]
fn is_label_char(c: char) -> bool {
    c == '-' || c == '_' || c == '.' || c.is_ascii_alphanumeric()
}

/// Check if a character may appear in a DNS subdomain prefix
#[inline]
fn is_prefix_char(c: char) -> bool {
    c == '-' || c == '.' || c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Names must begin and end with an alphanumeric character
fn is_qualified(s: &str, max_len: usize) -> bool {
    !s.is_empty()
        && s.len() <= max_len
        && s.starts_with(|c: char| c.is_ascii_alphanumeric())
        && s.ends_with(|c: char| c.is_ascii_alphanumeric())
}

/// Parse a label name: `[A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?`
///
/// # Examples
///
/// ```
/// use rusty_nrql_query::lexer::identifier::label_name;
///
/// let (rest, name) = label_name("app").unwrap();
/// assert_eq!(name, "app");
/// assert!(rest.is_empty());
///
/// let (rest, name) = label_name("kube-state.v1 in").unwrap();
/// assert_eq!(name, "kube-state.v1");
/// assert_eq!(rest, " in");
/// ```
pub fn label_name(input: &str) -> IResult<&str, &str> {
    verify(take_while1(is_label_char), |s: &str| {
        is_qualified(s, MAX_NAME_LENGTH)
    })
    .parse(input)
}

/// Parse a DNS subdomain prefix: `example.com`, `app.kubernetes.io`
fn dns_prefix(input: &str) -> IResult<&str, &str> {
    verify(take_while1(is_prefix_char), |s: &str| {
        is_qualified(s, MAX_PREFIX_LENGTH) && s.split('.').all(|part| is_qualified(part, 63))
    })
    .parse(input)
}

/// Parse a label key: `[prefix/]name`
///
/// # Examples
///
/// ```
/// use rusty_nrql_query::lexer::identifier::label_key;
///
/// let (_, key) = label_key("app.kubernetes.io/name=api").unwrap();
/// assert_eq!(key, "app.kubernetes.io/name");
///
/// let (_, key) = label_key("tier").unwrap();
/// assert_eq!(key, "tier");
/// ```
pub fn label_key(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(terminated(dns_prefix, char('/'))), label_name)).parse(input)
}

/// Parse a label value, which may be empty
///
/// # Examples
///
/// ```
/// use rusty_nrql_query::lexer::identifier::label_value;
///
/// let (rest, value) = label_value("api,tier=web").unwrap();
/// assert_eq!(value, "api");
/// assert_eq!(rest, ",tier=web");
///
/// let (_, value) = label_value(")").unwrap();
/// assert_eq!(value, "");
/// ```
pub fn label_value(input: &str) -> IResult<&str, &str> {
    verify(take_while(is_label_char), |s: &str| {
        s.is_empty() || is_qualified(s, MAX_NAME_LENGTH)
    })
    .parse(input)
}

/// Parse an optionally negative base-10 integer, as required by the
/// `>` and `<` selector operators
///
/// ```
/// use rusty_nrql_query::lexer::identifier::integer_value;
///
/// assert_eq!(integer_value("-5,"), Ok((",", "-5")));
/// assert!(integer_value("abc").is_err());
/// ```
pub fn integer_value(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1)).parse(input)
}
