//! NRQL query assembly.
//!
//! A [`Query`] starts from the query text configured for an external metric
//! and is extended with a result limit, a cluster restriction, and the
//! conditions of a label selector. Each step returns a new `Query`; the
//! text is produced when the query is displayed:
//!
//! ```text
//! <base> [limit 1] [where <cond> [and <cond>]...]
//! ```
//!
//! All conditions share a single `where` keyword and the limit always comes
//! before it, whatever order the steps were applied in.
//!
//! # Submodules
//!
//! - [`operator`] - Selector operator to NRQL token translation
//! - [`literal`] - Numeric vs. string value quoting
//! - [`clause`] - Conditions built from selector requirements
//!
//! # Example
//!
//! ```rust
//! use rusty_nrql_query::{Query, parse_selector};
//!
//! let selector = parse_selector("app=api").unwrap();
//! let query = Query::new("SELECT average(cpu) FROM Metric")
//!     .add_limit()
//!     .add_cluster_filter("prod-1", true)
//!     .add_match_filter(Some(&selector));
//!
//! assert_eq!(
//!     query.to_string(),
//!     "SELECT average(cpu) FROM Metric limit 1 where clusterName='prod-1' and app = 'api'"
//! );
//! ```

pub mod clause;
pub mod literal;
pub mod operator;

use tracing::trace;

use crate::parser::selector::Selector;
use clause::Clause;

/// Substring that marks a base query as already limited (compared lowercase)
const LIMIT_CLAUSE: &str = " limit ";

/// Limit appended when the base query has none
const DEFAULT_LIMIT: &str = "limit 1";

/// An NRQL query under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    base: String,
    limit: bool,
    clauses: Vec<Clause>,
}

impl Query {
    /// Wrap a base query as configured by the user
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            limit: false,
            clauses: Vec::new(),
        }
    }

    /// Get the base query text
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Check if the query limits its results, either in the base text or
    /// through [`Query::add_limit`]
    pub fn has_limit(&self) -> bool {
        self.limit || base_has_limit(&self.base)
    }

    /// Get the conditions added so far, in order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Limit the query to a single result
    ///
    /// Does nothing if the base query already contains a limit, in any case.
    ///
    /// ```
    /// use rusty_nrql_query::Query;
    ///
    /// let q = Query::new("SELECT count(*) FROM Metric").add_limit();
    /// assert_eq!(q.to_string(), "SELECT count(*) FROM Metric limit 1");
    ///
    /// let q = Query::new("SELECT count(*) FROM Metric LIMIT 10").add_limit();
    /// assert_eq!(q.to_string(), "SELECT count(*) FROM Metric LIMIT 10");
    /// ```
    #[must_use]
    pub fn add_limit(mut self) -> Self {
        if self.has_limit() {
            trace!(query = %self.base, "query already limited");
            return self;
        }
        self.limit = true;
        self
    }

    /// Restrict the query to rows from `cluster_name`
    ///
    /// Does nothing unless `enabled` is set.
    #[must_use]
    pub fn add_cluster_filter(mut self, cluster_name: &str, enabled: bool) -> Self {
        if !enabled {
            return self;
        }
        self.clauses.push(Clause::cluster(cluster_name));
        self
    }

    /// Add one condition per selector requirement, in selector order
    ///
    /// Does nothing for a missing or empty selector.
    #[must_use]
    pub fn add_match_filter(mut self, selector: Option<&Selector>) -> Self {
        let Some(selector) = selector else {
            return self;
        };
        self.clauses
            .extend(selector.requirements().iter().map(Clause::from_requirement));
        self
    }

    /// Add an arbitrary condition
    #[must_use]
    pub fn add_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Render the `where` fragment, or `None` without conditions
    pub fn where_clause(&self) -> Option<String> {
        if self.clauses.is_empty() {
            return None;
        }
        let conditions: Vec<String> = self.clauses.iter().map(Clause::to_string).collect();
        Some(format!("where {}", conditions.join(" and ")))
    }

    /// Render the final NRQL text
    pub fn to_nrql(&self) -> String {
        self.to_string()
    }
}

fn base_has_limit(base: &str) -> bool {
    base.to_lowercase().contains(LIMIT_CLAUSE)
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base)?;
        if self.limit {
            write!(f, " {}", DEFAULT_LIMIT)?;
        }
        if let Some(where_clause) = self.where_clause() {
            write!(f, " {}", where_clause)?;
        }
        Ok(())
    }
}

impl From<&str> for Query {
    fn from(base: &str) -> Self {
        Query::new(base)
    }
}

impl From<String> for Query {
    fn from(base: String) -> Self {
        Query::new(base)
    }
}
