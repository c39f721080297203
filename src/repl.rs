use std::io::{self, BufRead, Write};

use crate::interpreter::parser::core::Parser;

/// Number of fractional digits printed when nothing else is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Input that ends the session.
pub const EXIT_COMMAND: &str = "exit";

const BANNER: &str = "\
simple calculator:
    - type 'exit' to exit
    - support integer and floating number
    - support '+', '-', '*', '/' and parentheses
    - the result is double float value
    - example: '1.5 + 2 * (-1 - 2.2) / 10', the result is 0.860000";

const PROMPT: &str = "> ";

/// What the session should do after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this line and keep reading.
    Print(String),
    /// Nothing to print; the line was blank.
    Skip,
    /// The user asked to leave.
    Exit,
}

/// An interactive calculator session.
///
/// Owns one [`Parser`] that is reused for every line. Each line is trimmed,
/// checked for the `exit` command and otherwise evaluated in full; results are
/// printed as `= <value>` and failures as `Error: <message>`.
///
/// # Example
/// ```
/// use linecalc::repl::{Outcome, Repl};
///
/// let mut repl = Repl::new(2);
/// assert_eq!(repl.eval_line("1 / 4\n"), Outcome::Print("= 0.25".to_string()));
/// assert_eq!(repl.eval_line("   "), Outcome::Skip);
/// assert_eq!(repl.eval_line("exit"), Outcome::Exit);
/// ```
#[derive(Debug, Clone)]
pub struct Repl {
    parser:    Parser,
    precision: usize,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl Repl {
    /// Creates a session printing results with `precision` fractional digits.
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self { parser: Parser::new(),
               precision }
    }

    /// Handles a single line of input.
    pub fn eval_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line == EXIT_COMMAND {
            return Outcome::Exit;
        }
        if line.is_empty() {
            return Outcome::Skip;
        }

        match self.parser.parse_complete(line) {
            Ok(value) => Outcome::Print(format!("= {value:.prec$}", prec = self.precision)),
            Err(e) => Outcome::Print(format!("Error: {e}")),
        }
    }

    /// Reads lines from `input` until end of file or `exit`, writing every
    /// result to `output`.
    ///
    /// In interactive mode the banner is printed once and a prompt precedes
    /// each read.
    ///
    /// # Errors
    /// Returns any I/O error raised while reading or writing.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W, interactive: bool) -> io::Result<()>
        where R: BufRead,
              W: Write
    {
        if interactive {
            writeln!(output, "{BANNER}")?;
        }

        let mut line = String::new();
        loop {
            if interactive {
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                log::debug!("input closed");
                break;
            }

            match self.eval_line(&line) {
                Outcome::Print(text) => writeln!(output, "{text}")?,
                Outcome::Skip => {},
                Outcome::Exit => break,
            }
        }

        output.flush()
    }
}
