//! Value literals and their NRQL quoting.

use crate::lexer::number::is_numeric;

/// A value rendered into an NRQL condition
///
/// Numbers are emitted bare, everything else inside single quotes. Quotes
/// inside the value are not escaped: selector values come from the
/// metrics API caller and are used as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// A value that parses as a float: `42`, `-1.5`, `1e3`
    Number(String),
    /// Any other value: `'api'`
    Text(String),
}

impl Literal {
    /// Classify a value by whether it parses as a float
    ///
    /// Some attributes are numeric but stored as strings in NRDB; callers
    /// that need those compared as text should build [`Literal::Text`]
    /// directly.
    ///
    /// ```
    /// use rusty_nrql_query::Literal;
    ///
    /// assert_eq!(Literal::classify("1.5").to_string(), "1.5");
    /// assert_eq!(Literal::classify("api").to_string(), "'api'");
    /// ```
    pub fn classify(value: impl Into<String>) -> Self {
        let value = value.into();
        if is_numeric(&value) {
            Literal::Number(value)
        } else {
            Literal::Text(value)
        }
    }

    /// A literal that is always quoted
    pub fn text(value: impl Into<String>) -> Self {
        Literal::Text(value.into())
    }

    /// Get the raw value without quotes
    pub fn as_str(&self) -> &str {
        match self {
            Literal::Number(s) | Literal::Text(s) => s,
        }
    }

    /// Check if this literal renders bare
    pub fn is_number(&self) -> bool {
        matches!(self, Literal::Number(_))
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(s) => write!(f, "{}", s),
            Literal::Text(s) => write!(f, "'{}'", s),
        }
    }
}
