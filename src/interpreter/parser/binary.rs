use crate::{
    error::ParseResult,
    interpreter::{
        lexer::TokenKind,
        parser::{core::Parser, unary::parse_primary},
    },
};

/// Parses addition and subtraction.
///
/// Handles the left-associative binary operators `+` and `-`. This is the
/// entry point of the grammar and the lowest precedence level.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the start of an expression.
///
/// # Returns
/// The value of the expression. The token that ended it is pushed back.
pub fn parse_expression(parser: &mut Parser) -> ParseResult<f64> {
    let mut left = parse_term(parser)?;
    loop {
        let token = parser.next_token()?;
        let Some(op) = token_to_binary_operator(token.kind())
                       .filter(|op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))
        else {
            parser.back_token(token);
            break;
        };

        let right = parse_term(parser)?;
        left = op.apply(left, right);
    }
    Ok(left)
}

/// Parses multiplication and division.
///
/// Handles the left-associative binary operators `*` and `/`. Division by
/// zero is not an error; it yields an infinity or NaN.
///
/// The rule is: `term := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the start of a term.
///
/// # Returns
/// The value of the term. The token that ended it is pushed back.
pub fn parse_term(parser: &mut Parser) -> ParseResult<f64> {
    let mut left = parse_primary(parser)?;
    loop {
        let token = parser.next_token()?;
        let Some(op) = token_to_binary_operator(token.kind())
                       .filter(|op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div))
        else {
            parser.back_token(token);
            break;
        };

        let right = parse_primary(parser)?;
        left = op.apply(left, right);
    }
    Ok(left)
}

/// The four arithmetic operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    /// Folds one binary operation.
    fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// Maps a token kind to its binary operator, or `None` for non-operators.
const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Add => Some(BinaryOperator::Add),
        TokenKind::Sub => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        TokenKind::Number
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::EndOfLine
        | TokenKind::EndOfInput => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryOperator, token_to_binary_operator};
    use crate::interpreter::lexer::TokenKind;

    #[test]
    fn division_follows_ieee() {
        assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(BinaryOperator::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn only_operator_tokens_map_to_operators() {
        assert_eq!(token_to_binary_operator(TokenKind::Sub), Some(BinaryOperator::Sub));
        assert_eq!(token_to_binary_operator(TokenKind::Mul), Some(BinaryOperator::Mul));
        for kind in [TokenKind::Number,
                     TokenKind::LParen,
                     TokenKind::RParen,
                     TokenKind::EndOfLine,
                     TokenKind::EndOfInput]
        {
            assert_eq!(token_to_binary_operator(kind), None);
        }
    }
}
