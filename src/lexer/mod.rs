// Lexer module for label selectors and selector values
// Contains parsers for individual tokens/lexemes

pub mod identifier;
pub mod number;
pub mod whitespace;

pub use identifier::*;
pub use number::*;
pub use whitespace::*;
