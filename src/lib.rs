//! # Rusty NRQL Query
//!
//! Translate Kubernetes label selectors into NRQL queries for an external
//! metrics adapter backed by New Relic.
//!
//! Each external metric is configured with a base NRQL query. When the
//! metrics API asks for a value, the request's label selector is turned into
//! `WHERE` conditions on that query, the result is limited to a single row,
//! and optionally restricted to the current cluster.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_nrql_query::{Query, parse_selector};
//!
//! let selector = parse_selector("app=api,tier in (web, 1),!legacy").unwrap();
//! let query = Query::new("SELECT average(cpuPercent) FROM SystemSample")
//!     .add_limit()
//!     .add_cluster_filter("prod-1", true)
//!     .add_match_filter(Some(&selector));
//!
//! assert_eq!(
//!     query.to_string(),
//!     "SELECT average(cpuPercent) FROM SystemSample limit 1 \
//!      where clusterName='prod-1' and app = 'api' and tier IN ('web', 1) and legacy IS NULL"
//! );
//! ```
//!
//! ## Selector to NRQL
//!
//! | Selector            | NRQL                     |
//! |---------------------|--------------------------|
//! | `app=api`           | `app = 'api'`            |
//! | `app==api`          | `app = 'api'`            |
//! | `code!=500`         | `code != 500`            |
//! | `replicas>2`        | `replicas > 2`           |
//! | `replicas<10`       | `replicas < 10`          |
//! | `tier in (web, 1)`  | `tier IN ('web', 1)`     |
//! | `tier notin (web)`  | `tier NOT IN ('web')`    |
//! | `partition`         | `partition IS NOT NULL`  |
//! | `!legacy`           | `legacy IS NULL`         |
//!
//! Values that parse as a float are emitted bare, everything else is put in
//! single quotes.
//!
//! ## Modules
//!
//! - [`lexer`] - Token parsers (label keys and values, float literals)
//! - [`parser`] - Selector model and selector text parser
//! - [`query`] - NRQL query assembly
//! - [`config`] - External metric configuration
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod query;

// Re-export commonly used types and parsers
pub use config::{MetricConfig, ProviderConfig};
pub use error::{ConfigError, SelectorError};
pub use parser::selector::{Operator, Requirement, Selector, parse_selector};
pub use query::Query;
pub use query::clause::Clause;
pub use query::literal::Literal;
pub use query::operator::operator_token;
