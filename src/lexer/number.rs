// Float literal recognizer used to classify selector values
//
// Accepts the syntax of a 64-bit float as the New Relic client library
// parses it:
// - Decimal integers and floats: 42, 3.14, .5, 5.
// - Scientific notation: 1e10, 2.5E-3
// - Hexadecimal floats with a binary exponent: 0x1p-2, 0X1.8P3
// - Special values: inf, infinity, nan (case-insensitive, inf may be signed)
// - Signed numbers: +42, -3.14
// - Digit separators: 1_000, 0x_1_2p3 (an underscore must sit between two
//   digits, or between the 0x prefix and a digit)
//
// Literals that are well formed but overflow to infinity (1e400) are
// rejected, so they fall back to string quoting.

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, value, verify},
    multi::many0,
    sequence::{pair, preceded},
};

/// Parse a float literal and return its f64 value.
///
/// The parser stops at the first character that cannot continue the
/// literal; use [`is_numeric`] to test a whole value.
///
/// # Examples
///
/// ```
/// use rusty_nrql_query::lexer::number::float_literal;
///
/// let (rest, v) = float_literal("2.5e3 rest").unwrap();
/// assert_eq!(v, 2500.0);
/// assert_eq!(rest, " rest");
/// ```
pub fn float_literal(input: &str) -> IResult<&str, f64> {
    alt((special_float, hex_float, decimal_float)).parse(input)
}

/// Check whether the whole value is a float literal.
///
/// This is the rule that decides whether a selector value is rendered as a
/// bare number or as a quoted string.
///
/// ```
/// use rusty_nrql_query::lexer::number::is_numeric;
///
/// assert!(is_numeric("42"));
/// assert!(is_numeric("-0.5"));
/// assert!(!is_numeric("42a"));
/// assert!(!is_numeric("1e400"));
/// ```
pub fn is_numeric(value: &str) -> bool {
    all_consuming(float_literal).parse(value).is_ok()
}

/// Parse special float values: inf, infinity, +Inf, -Infinity, NaN
fn special_float(input: &str) -> IResult<&str, f64> {
    alt((
        map(
            pair(
                opt(one_of("+-")),
                alt((tag_no_case("infinity"), tag_no_case("inf"))),
            ),
            |(sign, _)| match sign {
                Some('-') => f64::NEG_INFINITY,
                _ => f64::INFINITY,
            },
        ),
        // NaN takes no sign
        value(f64::NAN, tag_no_case("nan")),
    ))
    .parse(input)
}

/// Parse a signed decimal float, rejecting values out of f64 range
fn decimal_float(input: &str) -> IResult<&str, f64> {
    verify(
        map_res(
            recognize(pair(opt(one_of("+-")), decimal_float_inner)),
            |s: &str| strip_separators(s).parse::<f64>(),
        ),
        |v: &f64| v.is_finite(),
    )
    .parse(input)
}

/// Inner recognizer for decimal floats - captures the string representation
fn decimal_float_inner(input: &str) -> IResult<&str, &str> {
    alt((
        // Case 1: .42 or .42e10
        recognize((char('.'), decimal_digits, opt(exponent))),
        // Case 2: 42e10 or 42.42e10 (exponent required)
        recognize((
            decimal_digits,
            opt(pair(char('.'), opt(decimal_digits))),
            exponent,
        )),
        // Case 3: 42. or 42.42 (no exponent)
        recognize((decimal_digits, char('.'), opt(decimal_digits))),
        // Case 4: plain integer
        recognize(decimal_digits),
    ))
    .parse(input)
}

/// Parse a hexadecimal float: 0x1p-2, -0x1.8p3, 0x.8p1
///
/// The binary exponent is mandatory, a bare `0x1F` is not a float literal.
fn hex_float(input: &str) -> IResult<&str, f64> {
    let (rest, sign) = opt(one_of("+-")).parse(input)?;
    let (rest, _) = tag_no_case("0x").parse(rest)?;
    let (rest, int_digits) = opt(preceded(opt(char('_')), hex_digits)).parse(rest)?;
    let int_digits = int_digits.unwrap_or("");
    let (rest, frac_digits) = opt(preceded(char('.'), opt(hex_digits))).parse(rest)?;
    let frac_digits = frac_digits.flatten().unwrap_or("");

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::HexDigit,
        )));
    }

    let (rest, exp) = preceded(one_of("pP"), binary_exponent).parse(rest)?;

    let mantissa = int_digits
        .chars()
        .chain(frac_digits.chars())
        .filter_map(|c| c.to_digit(16))
        .fold(0.0_f64, |acc, d| acc * 16.0 + f64::from(d));
    let sign = if sign == Some('-') { -1.0 } else { 1.0 };

    // Zero stays zero for any exponent
    if mantissa == 0.0 {
        return Ok((rest, sign * 0.0));
    }

    let frac_len = frac_digits.chars().filter(|c| is_hex_digit(*c)).count();
    let frac_bits = i32::try_from(frac_len)
        .unwrap_or(i32::MAX)
        .saturating_mul(4);
    let magnitude = mantissa * 2f64.powi(exp.saturating_sub(frac_bits));
    if !magnitude.is_finite() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }

    Ok((rest, sign * magnitude))
}

/// Parse the signed decimal power of two after `p`
///
/// Exponents beyond the `i32` range saturate; they overflow or underflow
/// the float either way.
fn binary_exponent(input: &str) -> IResult<&str, i32> {
    let (rest, (sign, digits)) = pair(opt(one_of("+-")), decimal_digits).parse(input)?;
    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0_i32, |acc, d| {
            acc.saturating_mul(10).saturating_add(d as i32)
        });
    let exp = if sign == Some('-') { -magnitude } else { magnitude };
    Ok((rest, exp))
}

#[inline]
fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Parse decimal digits (one or more), with `_` allowed between digits
fn decimal_digits(input: &str) -> IResult<&str, &str> {
    separated_digits(input, |c: char| c.is_ascii_digit())
}

/// Parse hexadecimal digits (one or more), with `_` allowed between digits
fn hex_digits(input: &str) -> IResult<&str, &str> {
    separated_digits(input, is_hex_digit)
}

fn separated_digits(input: &str, is_digit: fn(char) -> bool) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(is_digit),
        many0(pair(char('_'), take_while1(is_digit))),
    ))
    .parse(input)
}

fn strip_separators(s: &str) -> String {
    s.replace('_', "")
}

/// Parse the exponent part: e10, E-3, e+5
fn exponent(input: &str) -> IResult<&str, &str> {
    recognize((one_of("eE"), opt(one_of("+-")), decimal_digits)).parse(input)
}
