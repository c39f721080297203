/// Parsing errors.
///
/// Defines every error that can occur while tokenizing or evaluating a line.
/// Lexical mistakes, unexpected tokens and unbalanced parentheses all end up
/// here, each carrying the byte offset where the problem was detected.
pub mod parse_error;

pub use parse_error::{ParseError, ParseResult};
