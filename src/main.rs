use std::{
    fs,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use linecalc::{
    evaluate,
    repl::{DEFAULT_PRECISION, Repl},
};

/// linecalc is a small calculator for one-line arithmetic expressions with
/// `+`, `-`, `*`, `/`, unary minus and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from a file, one per line, instead of stdin.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Number of fractional digits printed for each result.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Suppresses the banner and the prompt in interactive mode.
    #[arg(short, long)]
    quiet: bool,

    /// Evaluates this expression once and exits.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if let Some(expression) = &args.expression {
        return match evaluate(expression) {
            Ok(value) => {
                println!("= {value:.prec$}", prec = args.precision);
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let mut repl = Repl::new(args.precision);
    let result = if let Some(path) = &args.file {
        match fs::File::open(path) {
            Ok(file) => repl.run(BufReader::new(file), io::stdout().lock(), false),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        }
    } else {
        repl.run(io::stdin().lock(), io::stdout().lock(), !args.quiet)
    };

    if let Err(e) = result {
        eprintln!("I/O error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
