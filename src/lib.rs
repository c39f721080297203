//! # linecalc
//!
//! linecalc is a single-line arithmetic evaluator written in Rust.
//! It tokenizes and evaluates integers and decimals combined with `+`, `-`,
//! `*`, `/`, unary minus and parentheses, producing an `f64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::ParseResult;

/// Provides the error type for tokenizing and parsing.
///
/// This module defines every error that can be raised while a line is
/// evaluated. Errors carry the byte offset where they were detected and render
/// a human-readable message.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes (lexer and parser).
/// - Attaches source offsets and detailed messages for context.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Turns a line of text into a number.
///
/// This module ties together the tokenizer and the recursive-descent
/// evaluator. It exposes the reusable objects that callers keep around between
/// lines.
///
/// # Responsibilities
/// - Coordinates the lexer and the parser.
/// - Provides entry points for evaluating a line.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;
/// Line-oriented interactive session.
///
/// Reads one expression per line, prints `= <value>` or `Error: <message>`, and
/// stops on end of input or the `exit` command.
pub mod repl;

pub use error::ParseError;
pub use interpreter::{
    lexer::{Token, TokenKind, Tokenizer},
    parser::core::Parser,
};

/// Evaluates one line of arithmetic and returns its value.
///
/// A fresh parser is used for the call and the whole line must form a single
/// expression; trailing tokens are rejected. Reuse a [`Parser`] when
/// evaluating many lines.
///
/// # Errors
/// Returns an error if the line contains an invalid character, a malformed
/// numeral, an unexpected token, or an unclosed parenthesis.
///
/// # Examples
/// ```
/// use linecalc::evaluate;
///
/// assert_eq!(evaluate("1 + 2").unwrap(), 3.0);
/// assert_eq!(evaluate("- ( -1 - 2 )").unwrap(), 3.0);
///
/// // Unclosed parenthesis.
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(line: &str) -> ParseResult<f64> {
    Parser::new().parse_complete(line)
}
