use std::time::Duration;

// Utilities
fn make_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("brainfog").expect("brainfog binary")
}

#[test]
fn repl_empty_stdin_exits_cleanly() {
    let mut cmd = make_cmd();
    // With piped (non-TTY) stdin there is no banner and no prompt.
    cmd.timeout(Duration::from_secs(5))
        .arg("repl")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::is_empty());
}

#[test]
fn repl_valid_program_outputs_and_exits() {
    let mut cmd = make_cmd();
    // Print 'A' (65)
    let program = format!("{}.", "+".repeat(65));

    cmd.timeout(Duration::from_secs(5))
        .env("BRAINFOG_REPL_ONCE", "1")
        .arg("repl")
        .write_stdin(program)
        .assert()
        .success()
        .stdout(predicates::str::contains("A\n"))
        .stderr(predicates::str::is_empty());
}

#[test]
fn repl_stray_bracket_reports_error() {
    let mut cmd = make_cmd();

    cmd.timeout(Duration::from_secs(5))
        .env("BRAINFOG_REPL_ONCE", "1")
        .arg("repl")
        .write_stdin("]")
        .assert()
        // The REPL session itself still exits cleanly.
        .success()
        .stderr(predicates::str::contains("unmatched ']'"))
        // Trailing newline on stdout after each execution for readability
        .stdout(predicates::str::contains("\n"));
}

#[test]
fn repl_input_instruction_reports_closed_channel() {
    let mut cmd = make_cmd();

    // The REPL supplies no input producer, so ',' fails fast instead of
    // hanging the session.
    cmd.timeout(Duration::from_secs(5))
        .env("BRAINFOG_REPL_ONCE", "1")
        .arg("repl")
        .write_stdin(",")
        .assert()
        .success()
        .stderr(predicates::str::contains("input channel closed"));
}

#[test]
fn repl_non_persistent_state_across_runs() {
    let program = format!("{}.", "+".repeat(65));

    // Run 1
    let assert1 = make_cmd()
        .timeout(Duration::from_secs(5))
        .env("BRAINFOG_REPL_ONCE", "1")
        .arg("repl")
        .write_stdin(program.clone())
        .assert()
        .success();
    let out1 = String::from_utf8(assert1.get_output().stdout.clone()).expect("utf8");

    // Run 2 (fresh process)
    let assert2 = make_cmd()
        .timeout(Duration::from_secs(5))
        .env("BRAINFOG_REPL_ONCE", "1")
        .arg("repl")
        .write_stdin(program)
        .assert()
        .success();
    let out2 = String::from_utf8(assert2.get_output().stdout.clone()).expect("utf8");

    assert!(out1.contains("A\n"), "first run should print A\\n, got: {out1:?}");
    assert!(out2.contains("A\n"), "second run should print A\\n, got: {out2:?}");
    assert_eq!(out1, out2, "stdout should be identical across runs");
}
