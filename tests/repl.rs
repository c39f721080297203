use std::io::Cursor;

use linecalc::repl::{Outcome, Repl};

fn run_session(input: &str, interactive: bool) -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut output = Vec::new();
    Repl::default().run(Cursor::new(input), &mut output, interactive)
                   .expect("in-memory session should not fail");
    String::from_utf8(output).expect("output is utf-8")
}

#[test]
fn prints_results_with_six_digits() {
    assert_eq!(run_session("1.5 + 2 * (-1 - 2.2) / 10\n", false), "= 0.860000\n");
}

#[test]
fn errors_do_not_end_the_session() {
    let output = run_session("(1 + 2\n1 +\n3 * 3\n", false);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Error: missing ')'"));
    assert!(lines[1].starts_with("Error: syntax error"));
    assert_eq!(lines[2], "= 9.000000");
}

#[test]
fn exit_stops_reading() {
    assert_eq!(run_session("1\n  exit  \n2\n", false), "= 1.000000\n");
}

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(run_session("\n   \n4 / 2", false), "= 2.000000\n");
}

#[test]
fn interactive_mode_prints_banner_and_prompts() {
    let output = run_session("1 + 1\n", true);
    assert!(output.starts_with("simple calculator:\n"));
    assert!(output.contains("> = 2.000000\n"));
    assert!(output.ends_with("> "));
}

#[test]
fn precision_is_configurable() {
    let mut repl = Repl::new(0);
    assert_eq!(repl.eval_line("9 / 4"), Outcome::Print("= 2".to_string()));
    let mut repl = Repl::new(3);
    assert_eq!(repl.eval_line("1 / 8"), Outcome::Print("= 0.125".to_string()));
}

#[test]
fn trailing_input_is_reported() {
    let mut repl = Repl::default();
    assert_eq!(repl.eval_line("1 2"),
               Outcome::Print("Error: syntax error at offset 2: unexpected '2'".to_string()));
}
