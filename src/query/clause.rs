//! NRQL conditions built from selector requirements.
//!
//! Each [`Clause`] renders one condition of a `WHERE` clause:
//!
//! ```text
//! app = 'api'                 simple comparison
//! tier IN ('web', 1)          set membership
//! legacy IS NULL              existence
//! clusterName='prod-1'        cluster restriction
//! ```
//!
//! Joining with `and` and the leading `where` keyword belong to
//! [`Query`](crate::Query).

use crate::parser::selector::{Operator, Requirement};
use crate::query::literal::Literal;

/// NRQL attribute that holds the Kubernetes cluster name
pub const CLUSTER_NAME_ATTRIBUTE: &str = "clusterName";

/// One condition of an NRQL `WHERE` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `key op value`
    Compare {
        key: String,
        op: Operator,
        value: Literal,
    },
    /// `key IN (v1, v2)` or `key NOT IN (v1, v2)`
    Set {
        key: String,
        op: Operator,
        values: Vec<Literal>,
    },
    /// `key IS NOT NULL` or `key IS NULL`
    Presence { key: String, op: Operator },
    /// `clusterName='name'`
    Cluster { name: String },
}

impl Clause {
    /// Build a comparison, quoting the value unless it is numeric
    ///
    /// Outside the crate, comparisons come from validated requirements via
    /// [`Clause::from_requirement`].
    pub(crate) fn simple(key: impl Into<String>, op: Operator, value: &str) -> Self {
        debug_assert!(op.is_single_value(), "'{}' is not a comparison", op);
        Clause::Compare {
            key: key.into(),
            op,
            value: Literal::classify(value),
        }
    }

    /// Build a set clause, classifying each value on its own
    pub(crate) fn set<S: AsRef<str>>(key: impl Into<String>, op: Operator, values: &[S]) -> Self {
        debug_assert!(op.is_set(), "'{}' is not a set operator", op);
        debug_assert!(!values.is_empty(), "set clause without values");
        Clause::Set {
            key: key.into(),
            op,
            values: values.iter().map(|v| Literal::classify(v.as_ref())).collect(),
        }
    }

    /// Build an existence check
    pub(crate) fn presence(key: impl Into<String>, op: Operator) -> Self {
        debug_assert!(op.is_existence(), "'{}' is not an existence check", op);
        Clause::Presence { key: key.into(), op }
    }

    /// Restrict results to one cluster; the name is always quoted
    pub fn cluster(name: impl Into<String>) -> Self {
        Clause::Cluster { name: name.into() }
    }

    /// Build the clause for a requirement, dispatching on its operator
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_nrql_query::{Clause, Operator, Requirement};
    ///
    /// let req = Requirement::new("app", Operator::In, ["a", "1"]).unwrap();
    /// assert_eq!(Clause::from_requirement(&req).to_string(), "app IN ('a', 1)");
    /// ```
    pub fn from_requirement(requirement: &Requirement) -> Self {
        let key = requirement.key();
        let op = requirement.operator();
        match op {
            Operator::Equals
            | Operator::DoubleEquals
            | Operator::NotEquals
            | Operator::GreaterThan
            | Operator::LessThan => {
                let value = requirement.values().first().map_or("", String::as_str);
                Clause::simple(key, op, value)
            }
            Operator::In | Operator::NotIn => Clause::set(key, op, requirement.values()),
            Operator::Exists | Operator::DoesNotExist => Clause::presence(key, op),
        }
    }
}

impl From<&Requirement> for Clause {
    fn from(requirement: &Requirement) -> Self {
        Clause::from_requirement(requirement)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Clause::Compare { key, op, value } => {
                write!(f, "{} {} {}", key, op.nrql_token(), value)
            }
            Clause::Set { key, op, values } => {
                write!(f, "{} {} (", key, op.nrql_token())?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
            Clause::Presence { key, op } => write!(f, "{} {}", key, op.nrql_token()),
            Clause::Cluster { name } => {
                write!(f, "{}={}", CLUSTER_NAME_ATTRIBUTE, Literal::text(name.as_str()))
            }
        }
    }
}
