use crate::{
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::TokenKind,
        parser::{binary::parse_expression, core::Parser},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - a numeric literal
/// - a parenthesized expression
///
/// either of which may be preceded by a single unary `-`. Negation is not
/// repeatable, so `--1` is rejected.
///
/// Grammar:
/// ```text
///     primary := "-"? (number | "(" expression ")")
/// ```
/// # Parameters
/// - `parser`: Parser positioned at the start of a primary expression.
///
/// # Returns
/// The value of the primary expression.
///
/// # Errors
/// - `UnmatchedParen` if a `(` is not closed where `)` is required.
/// - `Syntax` if the expression starts with anything but a number, `(` or one
///   leading `-`.
/// - Propagates any errors from the nested expression.
pub fn parse_primary(parser: &mut Parser) -> ParseResult<f64> {
    let mut token = parser.next_token()?;

    let negate = token.kind() == TokenKind::Sub;
    if negate {
        token = parser.next_token()?;
    }

    let value = match token.kind() {
        TokenKind::Number => token.value(),
        TokenKind::LParen => parse_grouping(parser)?,
        _ => {
            return Err(ParseError::Syntax { token:    token.describe(),
                                            position: token.offset(), });
        },
    };

    Ok(if negate { -value } else { value })
}

/// Parses the inside of a parenthesized expression, after the opening `(`.
///
/// # Errors
/// Returns `UnmatchedParen` pointing at whatever token stands where the `)`
/// should be.
fn parse_grouping(parser: &mut Parser) -> ParseResult<f64> {
    let value = parse_expression(parser)?;

    let close = parser.next_token()?;
    if close.kind() != TokenKind::RParen {
        return Err(ParseError::UnmatchedParen { position: close.offset() });
    }

    Ok(value)
}
