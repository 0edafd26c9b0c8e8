// Lexer test module
// Test cases for value classification and label identifiers

pub mod identifier_tests;
pub mod number_tests;

// Re-export all test data for convenience
pub use identifier_tests::*;
pub use number_tests::*;
