use assert_cmd::Command;

#[test]
fn expression_argument_prints_result() {
    Command::cargo_bin("linecalc").unwrap()
                                  .arg("1.5 + 2. * (-1 - 2.2) / 10")
                                  .assert()
                                  .success()
                                  .stdout("= 0.860000\n");
}

#[test]
fn precision_flag_applies_to_expression() {
    Command::cargo_bin("linecalc").unwrap()
                                  .args(["--precision", "2", "10 / 4"])
                                  .assert()
                                  .success()
                                  .stdout("= 2.50\n");
}

#[test]
fn invalid_expression_fails() {
    Command::cargo_bin("linecalc").unwrap()
                                  .env_remove("RUST_LOG")
                                  .arg("(1 + 2")
                                  .assert()
                                  .failure()
                                  .code(1)
                                  .stdout("")
                                  .stderr("Error: missing ')' at offset 6\n");
}

#[test]
fn stdin_session_without_banner() {
    Command::cargo_bin("linecalc").unwrap()
                                  .arg("--quiet")
                                  .write_stdin("1+2\n1 +\nexit\n4\n")
                                  .assert()
                                  .success()
                                  .stdout("= 3.000000\nError: syntax error at offset 3: unexpected end of input\n");
}
