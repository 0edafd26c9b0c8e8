//! Label selector model and parsing
//!
//! A selector is an ordered list of requirements that all have to hold for
//! a series to match. External metrics requests carry selectors in the
//! Kubernetes label selector syntax:
//!
//! ```text
//! app=api
//! app==api,env!=dev
//! tier in (web, api),track notin (canary)
//! replicas>2,replicas<10
//! partition
//! !legacy
//! ```
//!
//! Operators:
//! - `=`, `==` : equality
//! - `!=`      : inequality
//! - `>`, `<`  : integer comparison (kinds `gt` and `lt`)
//! - `in`      : set membership
//! - `notin`   : set exclusion
//! - `key`     : label exists
//! - `!key`    : label does not exist

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{all_consuming, map, opt},
    multi::separated_list1,
    sequence::{delimited, preceded},
};

use crate::error::{Result, SelectorError};
use crate::lexer::{
    identifier::{integer_value, label_key, label_value},
    whitespace::{ws, ws_opt, ws_req},
};

/// Selector requirement operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=` - Equality
    Equals,
    /// `==` - Equality, alternate spelling
    DoubleEquals,
    /// `!=` - Inequality
    NotEquals,
    /// `gt` - Greater than an integer
    GreaterThan,
    /// `lt` - Less than an integer
    LessThan,
    /// `exists` - Label is present
    Exists,
    /// `!` - Label is absent
    DoesNotExist,
    /// `in` - Value is one of a set
    In,
    /// `notin` - Value is none of a set
    NotIn,
}

impl Operator {
    /// All operators, in declaration order
    pub const ALL: [Operator; 9] = [
        Operator::Equals,
        Operator::DoubleEquals,
        Operator::NotEquals,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::Exists,
        Operator::DoesNotExist,
        Operator::In,
        Operator::NotIn,
    ];

    /// Get the operator kind as spelled by selector requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::DoubleEquals => "==",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => "gt",
            Operator::LessThan => "lt",
            Operator::Exists => "exists",
            Operator::DoesNotExist => "!",
            Operator::In => "in",
            Operator::NotIn => "notin",
        }
    }

    /// Look up an operator by its kind spelling
    pub fn from_kind(kind: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.as_str() == kind)
    }

    /// Check if this operator compares against exactly one value
    pub fn is_single_value(&self) -> bool {
        matches!(
            self,
            Operator::Equals
                | Operator::DoubleEquals
                | Operator::NotEquals
                | Operator::GreaterThan
                | Operator::LessThan
        )
    }

    /// Check if this is a set operator (in, notin)
    pub fn is_set(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Check if this is an existence operator (exists, !)
    pub fn is_existence(&self) -> bool {
        matches!(self, Operator::Exists | Operator::DoesNotExist)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Operator {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        Operator::from_kind(s).ok_or_else(|| SelectorError::UnknownOperator(s.to_string()))
    }
}

/// A single selector requirement: `key op values`
///
/// Values keep the order they were given in; repeated values are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    key: String,
    op: Operator,
    values: Vec<String>,
}

impl Requirement {
    /// Create a validated requirement
    ///
    /// - the key must not be empty
    /// - `=`, `==`, `!=`, `gt`, `lt` take exactly one value
    /// - `in`, `notin` take at least one value
    /// - `exists`, `!` take no values
    /// - `gt`, `lt` values must be integers
    ///
    /// # Examples
    ///
    /// ```
    /// use rusty_nrql_query::{Operator, Requirement};
    ///
    /// let req = Requirement::new("tier", Operator::In, ["web", "api", "web"]).unwrap();
    /// assert_eq!(req.values(), ["web", "api"]);
    ///
    /// assert!(Requirement::new("tier", Operator::Equals, ["a", "b"]).is_err());
    /// assert!(Requirement::new("replicas", Operator::GreaterThan, ["two"]).is_err());
    /// ```
    pub fn new<K, I, V>(key: K, op: Operator, values: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = key.into();
        if key.is_empty() {
            return Err(SelectorError::EmptyKey);
        }

        let mut unique: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !unique.contains(&value) {
                unique.push(value);
            }
        }

        let (count_ok, expected) = if op.is_single_value() {
            (unique.len() == 1, "exactly one")
        } else if op.is_set() {
            (!unique.is_empty(), "at least one")
        } else {
            (unique.is_empty(), "no")
        };
        if !count_ok {
            return Err(SelectorError::ValueCount {
                op: op.as_str(),
                expected,
                found: unique.len(),
            });
        }

        if matches!(op, Operator::GreaterThan | Operator::LessThan)
            && unique[0].parse::<i64>().is_err()
        {
            return Err(SelectorError::NotAnInteger {
                op: op.as_str(),
                value: unique[0].clone(),
            });
        }

        Ok(Self {
            key,
            op,
            values: unique,
        })
    }

    /// Requirement that the label exists
    pub fn exists(key: impl Into<String>) -> Result<Self> {
        Self::new(key, Operator::Exists, std::iter::empty::<String>())
    }

    /// Requirement that the label does not exist
    pub fn does_not_exist(key: impl Into<String>) -> Result<Self> {
        Self::new(key, Operator::DoesNotExist, std::iter::empty::<String>())
    }

    /// Requirement that the label equals `value`
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::new(key, Operator::Equals, [value.into()])
    }

    /// Get the label key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.op
    }

    /// Get the values, in insertion order
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.op {
            Operator::Exists => write!(f, "{}", self.key),
            Operator::DoesNotExist => write!(f, "!{}", self.key),
            Operator::GreaterThan => write!(f, "{}>{}", self.key, self.values[0]),
            Operator::LessThan => write!(f, "{}<{}", self.key, self.values[0]),
            Operator::Equals | Operator::DoubleEquals | Operator::NotEquals => {
                write!(f, "{}{}{}", self.key, self.op, self.values[0])
            }
            Operator::In | Operator::NotIn => {
                write!(f, "{} {} ({})", self.key, self.op, self.values.join(","))
            }
        }
    }
}

/// An ordered list of requirements, all of which must hold
///
/// An empty selector matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    requirements: Vec<Requirement>,
}

impl Selector {
    /// Create a selector from requirements, keeping their order
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Self { requirements }
    }

    /// A selector without requirements
    pub fn everything() -> Self {
        Self::default()
    }

    /// Append a requirement
    #[must_use]
    pub fn with(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Get the requirements, in order
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Check if this selector has no requirements
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Number of requirements
    pub fn len(&self) -> usize {
        self.requirements.len()
    }
}

impl<'a> IntoIterator for &'a Selector {
    type Item = &'a Requirement;
    type IntoIter = std::slice::Iter<'a, Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.requirements.iter()
    }
}

impl FromIterator<Requirement> for Selector {
    fn from_iter<T: IntoIterator<Item = Requirement>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, r) in self.requirements.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", r)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_selector(s)
    }
}

/// Parse a complete selector string
///
/// The whole input must be consumed. Empty or blank input yields an empty
/// selector.
///
/// # Examples
///
/// ```
/// use rusty_nrql_query::parser::selector::parse_selector;
///
/// let sel = parse_selector("app=api, tier in (web, 1)").unwrap();
/// assert_eq!(sel.len(), 2);
/// assert_eq!(sel.to_string(), "app=api,tier in (web,1)");
///
/// assert!(parse_selector("").unwrap().is_empty());
/// assert!(parse_selector("app=").is_ok());
/// assert!(parse_selector("app in ()x").is_err());
/// ```
pub fn parse_selector(input: &str) -> Result<Selector> {
    match all_consuming(selector).parse(input) {
        Ok((_, sel)) => Ok(sel),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(SelectorError::Syntax {
            input: input.to_string(),
            position: input.len() - e.input.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(SelectorError::Syntax {
            input: input.to_string(),
            position: input.len(),
        }),
    }
}

/// Parse a selector: comma separated requirements, possibly none
pub fn selector(input: &str) -> IResult<&str, Selector> {
    let (rest, _) = ws_opt(input)?;
    let (rest, requirements) =
        opt(separated_list1(ws(char(',')), ws(requirement))).parse(rest)?;
    let (rest, _) = ws_opt(rest)?;
    Ok((rest, Selector::new(requirements.unwrap_or_default())))
}

/// Parse a single requirement
pub fn requirement(input: &str) -> IResult<&str, Requirement> {
    alt((absent_requirement, keyed_requirement)).parse(input)
}

/// Parse `!key`
fn absent_requirement(input: &str) -> IResult<&str, Requirement> {
    let (rest, key) = preceded((char('!'), ws_opt), label_key).parse(input)?;
    validated(input, rest, Requirement::does_not_exist(key))
}

/// Parse `key`, `key op value` or `key in (values)`
fn keyed_requirement(input: &str) -> IResult<&str, Requirement> {
    let (rest, key) = label_key(input)?;
    let (rest, tail) = opt(alt((comparison, set_membership))).parse(rest)?;

    let requirement = match tail {
        Some((op, values)) => Requirement::new(key, op, values),
        None => Requirement::exists(key),
    };
    validated(input, rest, requirement)
}

/// Parse `= value`, `== value`, `!= value`, `> int`, `< int`
fn comparison(input: &str) -> IResult<&str, (Operator, Vec<&str>)> {
    let (rest, _) = ws_opt(input)?;
    let (rest, op) = alt((
        map(tag("=="), |_| Operator::DoubleEquals),
        map(tag("!="), |_| Operator::NotEquals),
        map(tag("="), |_| Operator::Equals),
        map(tag(">"), |_| Operator::GreaterThan),
        map(tag("<"), |_| Operator::LessThan),
    ))
    .parse(rest)?;
    let (rest, _) = ws_opt(rest)?;
    let (rest, value) = if matches!(op, Operator::GreaterThan | Operator::LessThan) {
        integer_value(rest)?
    } else {
        label_value(rest)?
    };
    Ok((rest, (op, vec![value])))
}

/// Parse `in (a, b)` or `notin (a, b)`
fn set_membership(input: &str) -> IResult<&str, (Operator, Vec<&str>)> {
    let (rest, _) = ws_req(input)?;
    let (rest, op) = alt((
        map(tag("notin"), |_| Operator::NotIn),
        map(tag("in"), |_| Operator::In),
    ))
    .parse(rest)?;
    let (rest, values) = delimited(
        ws(char('(')),
        separated_list1(ws(char(',')), ws(label_value)),
        ws(char(')')),
    )
    .parse(rest)?;
    Ok((rest, (op, values)))
}

/// Turn a failed requirement validation into a parse error at `start`
fn validated<'a>(
    start: &'a str,
    rest: &'a str,
    requirement: Result<Requirement>,
) -> IResult<&'a str, Requirement> {
    match requirement {
        Ok(r) => Ok((rest, r)),
        Err(_) => Err(nom::Err::Failure(nom::error::Error::new(
            start,
            nom::error::ErrorKind::Verify,
        ))),
    }
}
