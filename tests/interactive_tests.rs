use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::isolated;

#[test]
fn test_interactive_single_session() {
    isolated("interactive_single")
        .write_stdin("C\nN\nN\nN\n")
        .assert()
        .success()
        .stdout(contains("Chicago selected"))
        .stdout(contains("No filter selected"))
        .stdout(contains("*** A: January"))
        .stdout(contains("Would you like to restart?"));
}

#[test]
fn test_interactive_reprompts_invalid_input() {
    isolated("interactive_reprompt")
        .arg("interactive")
        .write_stdin("Boston\nW\nX\nM\n8\n3\nN\nN\n")
        .assert()
        .success()
        .stdout(contains("Your input is not valid."))
        .stdout(contains("Washington selected"))
        .stdout(contains("March selected"))
        .stdout(contains("in March?"));
}

#[test]
fn test_interactive_raw_rows_and_restart() {
    isolated("interactive_restart")
        .write_stdin("W\nN\nY\nY\nC\nD\n1\n1\nN\nN\n")
        .assert()
        .success()
        .stdout(contains("15th & P St NW"))
        .stdout(contains("No more trips to show (2 in total)."))
        .stdout(contains("at 1st of January?"));
}

#[test]
fn test_interactive_closed_input() {
    isolated("interactive_eof")
        .write_stdin("C\n")
        .assert()
        .failure()
        .stdout(contains("Chicago selected"))
        .stderr(contains("input closed"))
        .stdout(contains("*** Q:").not());
}
