/// The lexer module tokenizes a line of input for the parser.
///
/// The tokenizer reads the raw line and produces one token per call: numbers,
/// the four arithmetic operators, parentheses, and the end-of-line and
/// end-of-input terminators. It is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source text
///   and byte offset.
/// - Parses numerals into `f64` values.
/// - Reports lexical errors for invalid characters or malformed numerals.
pub mod lexer;
/// The parser module evaluates the token stream.
///
/// The parser is a recursive-descent evaluator over a three-level precedence
/// grammar. It computes the numeric result while it parses, without building
/// an intermediate syntax tree.
///
/// # Responsibilities
/// - Applies operator precedence and left-to-right folding.
/// - Disambiguates unary minus from subtraction.
/// - Reports syntax errors and unbalanced parentheses with location info.
pub mod parser;
