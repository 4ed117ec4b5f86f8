use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("brainfog").unwrap()
}

#[test]
fn test_cell_pointer_underflow() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .args(["run", "<"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cell pointer underflow"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cell_pointer_overflow() {
    cargo_bin()
        .timeout(Duration::from_secs(5))
        .args(["run", &">".repeat(30_000)])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cell pointer overflow"));
}

#[test]
fn test_unmatched_open_bracket() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .args(["run", "[[]"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no matching ']'"));
}

#[test]
fn test_unmatched_close_bracket() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .args(["run", "[]]"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unmatched ']'"));
}

#[test]
fn test_error_shows_caret_context() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .args(["run", "+++<"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("+++<"))
        .stderr(predicate::str::contains("^"));
}

#[test]
fn test_output_before_failure_is_delivered() {
    // One byte makes it out before the '<' aborts the run.
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .args(["run", "+.<"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty().not())
        .stderr(predicate::str::contains("cell pointer underflow"));
}
