//! Selector operator to NRQL operator translation.

use crate::parser::selector::Operator;

impl Operator {
    /// Get the NRQL token for this operator
    ///
    /// | Operator       | NRQL          |
    /// |----------------|---------------|
    /// | `=`, `==`      | `=`           |
    /// | `!=`           | `!=`          |
    /// | `gt`           | `>`           |
    /// | `lt`           | `<`           |
    /// | `exists`       | `IS NOT NULL` |
    /// | `!`            | `IS NULL`     |
    /// | `in`           | `IN`          |
    /// | `notin`        | `NOT IN`      |
    pub fn nrql_token(&self) -> &'static str {
        match self {
            Operator::Equals | Operator::DoubleEquals => "=",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::Exists => "IS NOT NULL",
            Operator::DoesNotExist => "IS NULL",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        }
    }
}

/// Translate an operator kind spelling (`=`, `gt`, `notin`, ...) to its NRQL
/// token.
///
/// Unknown kinds translate to the empty string instead of failing.
///
/// ```
/// use rusty_nrql_query::query::operator::operator_token;
///
/// assert_eq!(operator_token("notin"), "NOT IN");
/// assert_eq!(operator_token("=~"), "");
/// ```
pub fn operator_token(kind: &str) -> &'static str {
    Operator::from_kind(kind).map_or("", |op| op.nrql_token())
}
