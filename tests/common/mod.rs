// Test helper macros and utilities for selector and query tests
// These macros provide consistent patterns for testing parse results

/// Assert that a selector string parses successfully
#[macro_export]
macro_rules! assert_selector_parses {
    ($input:expr) => {{
        let result = rusty_nrql_query::parse_selector($input);
        assert!(
            result.is_ok(),
            "Expected '{}' to parse successfully, got error: {:?}",
            $input,
            result.as_ref().err()
        );
        result.unwrap()
    }};
}

/// Assert that a selector string fails to parse
#[macro_export]
macro_rules! assert_selector_error {
    ($input:expr) => {{
        let result = rusty_nrql_query::parse_selector($input);
        assert!(
            result.is_err(),
            "Expected '{}' to fail parsing, but got: {:?}",
            $input,
            result.as_ref().ok()
        );
        result.unwrap_err()
    }};
}

/// Assert that a query renders to the expected NRQL text
#[macro_export]
macro_rules! assert_nrql {
    ($query:expr, $expected:expr) => {{
        let output = $query.to_string();
        assert_eq!(
            output, $expected,
            "NRQL mismatch\n  got:      '{}'\n  expected: '{}'",
            output, $expected
        );
    }};
}
