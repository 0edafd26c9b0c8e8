//! Error types for selector construction and provider configuration.
//!
//! Query assembly itself never fails; errors only come from building or
//! parsing a [`Selector`](crate::Selector) and from loading configuration.

use thiserror::Error;

/// Errors raised while building or parsing a label selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A requirement was created with an empty key.
    #[error("requirement key must not be empty")]
    EmptyKey,

    /// The operator spelling is not one of the known selector operators.
    #[error("unknown selector operator '{0}'")]
    UnknownOperator(String),

    /// The operator received the wrong number of values.
    #[error("operator '{op}' expects {expected} value(s), found {found}")]
    ValueCount {
        op: &'static str,
        expected: &'static str,
        found: usize,
    },

    /// `gt` and `lt` only compare against integers.
    #[error("operator '{op}' requires an integer value, found '{value}'")]
    NotAnInteger { op: &'static str, value: String },

    /// Selector text could not be parsed.
    #[error("invalid selector '{input}': unexpected input at position {position}")]
    Syntax { input: String, position: usize },
}

/// Errors raised while loading provider configuration or resolving a metric.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("no query configured for external metric '{0}'")]
    UnknownMetric(String),
}

/// Result type for selector operations.
pub type Result<T, E = SelectorError> = std::result::Result<T, E>;
