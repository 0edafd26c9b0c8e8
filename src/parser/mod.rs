//! Label selector parser.
//!
//! # Submodules
//!
//! - [`selector`] - Selector, requirement and operator types, and the
//!   parser for the textual selector syntax
//!
//! # Example
//!
//! ```rust
//! use rusty_nrql_query::parser::selector::parse_selector;
//!
//! let sel = parse_selector("app=api,tier in (web,worker),!legacy").unwrap();
//! assert_eq!(sel.len(), 3);
//! ```

pub mod selector;

pub use selector::{parse_selector, selector};
