use logos::Logos;

use crate::error::{ParseError, ParseResult};

/// Raw lexemes recognized inside a line.
///
/// This is the low-level scanner used by [`Tokenizer`]. A numeral is a run of
/// digits optionally followed by one `.` and more digits, so `2.` is accepted
/// while `.5` and `1..2` fail at the offending dot. Whitespace other than a
/// newline is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\x0B\x0C]+")]
enum Lexeme {
    /// Numeric literals such as `42`, `2.` or `3.25`.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Numeral,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A newline terminates the expression early.
    #[token("\n")]
    NewLine,
}

/// Classifies a [`Token`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// A numeric literal; the only kind carrying a meaningful value.
    Number,
    /// `+`
    Add,
    /// `-`, either binary subtraction or unary negation.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// An explicit `\n` in the line.
    EndOfLine,
    /// The end of the line buffer.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::EndOfLine => "EndOfLine",
            Self::EndOfInput => "EndOfInput",
        };
        f.write_str(name)
    }
}

/// A lexical token produced by the [`Tokenizer`].
///
/// Tokens own the exact substring they were lexed from. Only `Number` tokens
/// carry a value; every other kind reports `0.0`. Two tokens are equal when
/// kind, text and value agree; the offset is for diagnostics only.
#[derive(Debug, Clone)]
pub struct Token {
    kind:   TokenKind,
    text:   String,
    value:  f64,
    offset: usize,
}

impl Token {
    /// Creates a non-numeric token.
    #[must_use]
    pub fn new(kind: TokenKind, text: &str, offset: usize) -> Self {
        Self { kind,
               text: text.to_string(),
               value: 0.0,
               offset }
    }

    /// Creates a `Number` token holding `value`.
    #[must_use]
    pub fn number(text: &str, value: f64, offset: usize) -> Self {
        Self { kind: TokenKind::Number,
               text: text.to_string(),
               value,
               offset }
    }

    /// The lexical category of the token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text of the token. Empty for line and input terminators.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The numeric value; `0.0` for every kind other than `Number`.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Byte offset of the token's first character in the line.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` for `EndOfLine` and `EndOfInput`.
    #[must_use]
    pub const fn is_terminator(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfLine | TokenKind::EndOfInput)
    }

    /// Human-readable description used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfLine => "end of line".to_string(),
            TokenKind::EndOfInput => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
        && self.text == other.text
        && self.value.to_bits() == other.value.to_bits()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Token{{kind: {}, text: {:?}, value: {}}}",
               self.kind, self.text, self.value)
    }
}

/// Turns a line of text into [`Token`]s, one per call.
///
/// The tokenizer owns a copy of the line and a byte cursor into it. It is
/// created once and re-armed with [`Tokenizer::set_line`] for every new line.
/// Once the buffer is exhausted every further call yields `EndOfInput`.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.set_line("2. * 3");
///
/// let first = tokenizer.next_token().unwrap();
/// assert_eq!(first.kind(), TokenKind::Number);
/// assert_eq!(first.value(), 2.0);
/// assert_eq!(tokenizer.next_token().unwrap().kind(), TokenKind::Mul);
/// assert_eq!(tokenizer.next_token().unwrap().value(), 3.0);
/// assert_eq!(tokenizer.next_token().unwrap().kind(), TokenKind::EndOfInput);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Tokenizer {
    line:     String,
    position: usize,
}

impl Tokenizer {
    /// Creates a tokenizer over an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arms the tokenizer with `line` and rewinds the cursor.
    pub fn set_line(&mut self, line: &str) {
        self.line.clear();
        self.line.push_str(line);
        self.position = 0;
    }

    /// Current cursor position, as a byte offset into the line.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    /// Returns [`ParseError::Lex`] for a character that cannot start a token,
    /// a misplaced `.`, or a numeral that does not parse as a finite `f64`.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        let rest = &self.line[self.position..];
        let mut lexer = Lexeme::lexer(rest);

        let Some(lexeme) = lexer.next() else {
            self.position = self.line.len();
            return Ok(Token::new(TokenKind::EndOfInput, "", self.position));
        };

        let span = lexer.span();
        let start = self.position + span.start;

        let Ok(lexeme) = lexeme else {
            let found = rest[span.start..].chars().next().unwrap_or_default();
            return Err(ParseError::Lex { message:  format!("unexpected character '{}'",
                                                           found.escape_debug()),
                                         position: start, });
        };

        let token = match lexeme {
            Lexeme::Numeral => {
                let text = lexer.slice();
                let value = text.parse::<f64>()
                                .map_err(|e| ParseError::Lex { message:  format!("invalid numeral '{text}': {e}"),
                                                               position: start, })?;
                if !value.is_finite() {
                    return Err(ParseError::Lex { message:  format!("numeral '{text}' is out of range"),
                                                 position: start, });
                }
                Token::number(text, value, start)
            },
            Lexeme::NewLine => Token::new(TokenKind::EndOfLine, "", start),
            Lexeme::Plus => Token::new(TokenKind::Add, lexer.slice(), start),
            Lexeme::Minus => Token::new(TokenKind::Sub, lexer.slice(), start),
            Lexeme::Star => Token::new(TokenKind::Mul, lexer.slice(), start),
            Lexeme::Slash => Token::new(TokenKind::Div, lexer.slice(), start),
            Lexeme::LParen => Token::new(TokenKind::LParen, lexer.slice(), start),
            Lexeme::RParen => Token::new(TokenKind::RParen, lexer.slice(), start),
        };

        self.position += span.end;
        log::trace!("lexed {token}");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::{Lexeme, TokenKind, Tokenizer};
    use logos::Logos;

    #[test]
    fn numerals_stop_at_a_second_dot() {
        let mut lexer = Lexeme::lexer("1..2");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Numeral)));
        assert_eq!(lexer.slice(), "1.");
        assert_eq!(lexer.next(), Some(Err(())));
    }

    #[test]
    fn whitespace_other_than_newline_is_skipped() {
        let mut lexer = Lexeme::lexer(" \t\r\x0B\x0C+\n");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Plus)));
        assert_eq!(lexer.next(), Some(Ok(Lexeme::NewLine)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn cursor_advances_past_each_token() {
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_line(" 12 +");
        assert_eq!(tokenizer.position(), 0);

        let number = tokenizer.next_token().unwrap();
        assert_eq!(number.offset(), 1);
        assert_eq!(tokenizer.position(), 3);

        let plus = tokenizer.next_token().unwrap();
        assert_eq!(plus.kind(), TokenKind::Add);
        assert_eq!(plus.offset(), 4);
        assert_eq!(tokenizer.position(), 5);
    }
}
