/// Parser state and entry points.
///
/// Holds the [`core::Parser`] type with its tokenizer and one-token
/// lookahead, plus the top-level `parse` calls.
pub mod core;

/// Primary expressions.
///
/// Handles numbers, unary negation and parenthesized sub-expressions.
pub mod unary;

/// Binary operator levels.
///
/// Implements the additive and multiplicative precedence levels, folding
/// operands left to right.
pub mod binary;
