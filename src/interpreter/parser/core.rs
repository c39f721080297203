use crate::{
    error::{ParseError, ParseResult},
    interpreter::{
        lexer::{Token, Tokenizer},
        parser::binary::parse_expression,
    },
};

/// Recursive-descent evaluator for a single line of arithmetic.
///
/// A `Parser` owns its [`Tokenizer`] and a single-token lookahead buffer. It
/// is created once and reused; every call to [`Parser::parse`] clears the
/// lookahead and re-arms the tokenizer, so nothing leaks between lines.
///
/// # Example
/// ```
/// use linecalc::interpreter::parser::core::Parser;
///
/// let mut parser = Parser::new();
/// assert_eq!(parser.parse("1 + 2 * 3").unwrap(), 7.0);
/// assert_eq!(parser.parse("(1 + 2) * 3").unwrap(), 9.0);
/// assert!(parser.parse("(1 + 2").is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Parser {
    tokenizer: Tokenizer,
    lookahead: Option<Token>,
}

impl Parser {
    /// Creates a parser with an empty tokenizer and no lookahead.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `line` and returns its value.
    ///
    /// Parsing stops at the first token the grammar does not recognize. That
    /// token is left in the lookahead, where [`Parser::next_token`] returns it;
    /// use [`Parser::parse_complete`] to reject trailing input instead.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error encountered. No partial
    /// result is produced.
    pub fn parse(&mut self, line: &str) -> ParseResult<f64> {
        log::debug!("parsing {line:?}");
        self.lookahead = None;
        self.tokenizer.set_line(line);

        let result = parse_expression(self);
        match &result {
            Ok(value) => log::debug!("evaluated {line:?} to {value}"),
            Err(e) => log::debug!("rejected {line:?}: {e}"),
        }
        result
    }

    /// Evaluates `line` and requires the expression to span all of it.
    ///
    /// After the expression, only an end-of-line or end-of-input token may
    /// follow. Anything after an embedded `\n` is ignored.
    ///
    /// # Errors
    /// Returns any error from [`Parser::parse`], or [`ParseError::Syntax`]
    /// naming the first trailing token.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::parser::core::Parser;
    ///
    /// let mut parser = Parser::new();
    /// assert_eq!(parser.parse("1 2").unwrap(), 1.0);
    /// assert!(parser.parse_complete("1 2").is_err());
    /// ```
    pub fn parse_complete(&mut self, line: &str) -> ParseResult<f64> {
        let value = self.parse(line)?;

        let trailing = self.next_token()?;
        if trailing.is_terminator() {
            Ok(value)
        } else {
            Err(ParseError::Syntax { token:    trailing.describe(),
                                     position: trailing.offset(), })
        }
    }

    /// Returns the pushed-back token if there is one, otherwise pulls the
    /// next token from the tokenizer.
    ///
    /// # Errors
    /// Propagates lexical errors from the tokenizer.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.tokenizer.next_token(),
        }
    }

    /// Pushes `token` back so the next [`Parser::next_token`] call replays it.
    ///
    /// At most one token may be pending at a time.
    pub(crate) fn back_token(&mut self, token: Token) {
        debug_assert!(self.lookahead.is_none(), "lookahead already holds a token");
        self.lookahead = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::Parser;
    use crate::interpreter::lexer::TokenKind;

    #[test]
    fn pushed_back_token_is_replayed_once() {
        let mut parser = Parser::new();
        parser.tokenizer.set_line("1 +");

        let first = parser.next_token().unwrap();
        parser.back_token(first.clone());
        assert_eq!(parser.next_token().unwrap(), first);
        assert_eq!(parser.next_token().unwrap().kind(), TokenKind::Add);
        assert_eq!(parser.next_token().unwrap().kind(), TokenKind::EndOfInput);
    }

    #[test]
    fn parse_leaves_the_stopping_token_pending() {
        let mut parser = Parser::new();
        assert_eq!(parser.parse("4 ) 5").unwrap(), 4.0);
        assert_eq!(parser.next_token().unwrap().kind(), TokenKind::RParen);
    }

    #[test]
    fn reparse_discards_stale_lookahead() {
        let mut parser = Parser::new();
        assert!(parser.parse("(1 + 2").is_err());
        assert_eq!(parser.parse("3 * 4").unwrap(), 12.0);
        assert_eq!(parser.next_token().unwrap().kind(), TokenKind::EndOfInput);
    }
}
