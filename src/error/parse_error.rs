#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// An unrecognized character or a malformed numeral.
    Lex {
        /// What the tokenizer choked on.
        message:  String,
        /// Byte offset of the offending character.
        position: usize,
    },
    /// A token showed up where the grammar cannot accept it.
    Syntax {
        /// Description of the unexpected token.
        token:    String,
        /// Byte offset of the unexpected token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    UnmatchedParen {
        /// Byte offset of the token found in place of `)`.
        position: usize,
    },
}

/// Result type shared by the tokenizer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Byte offset in the line where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex { position, .. }
            | Self::Syntax { position, .. }
            | Self::UnmatchedParen { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex { message, position } => {
                write!(f, "syntax error at offset {position}: {message}")
            },
            Self::Syntax { token, position } => {
                write!(f, "syntax error at offset {position}: unexpected {token}")
            },
            Self::UnmatchedParen { position } => write!(f, "missing ')' at offset {position}"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::ParseError;

    #[test]
    fn messages_name_the_problem() {
        let err = ParseError::UnmatchedParen { position: 6 };
        assert_eq!(err.to_string(), "missing ')' at offset 6");

        let err = ParseError::Syntax { token:    "end of input".to_string(),
                                       position: 4, };
        assert_eq!(err.to_string(), "syntax error at offset 4: unexpected end of input");
        assert_eq!(err.position(), 4);
    }
}
