use predicates::prelude::*;

use crate::common::csv_aggregate;

#[test]
fn shows_help() {
    csv_aggregate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("csv_aggregate"))
        .stdout(predicate::str::contains("--sum"))
        .stdout(predicate::str::contains("--sort"));
}

#[test]
fn shows_version() {
    csv_aggregate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn empty_input_writes_nothing() {
    csv_aggregate().write_stdin("").assert().success().stdout("");
}

#[test]
fn verbose_run_logs_to_stderr_only() {
    csv_aggregate()
        .args(["-v", "--sum=n"])
        .write_stdin("k,n\na,1\n")
        .assert()
        .success()
        .stdout("k,n\na,1.0\n")
        .stderr(predicate::str::contains("read 1 records"));
}

#[test]
fn quiet_run_is_silent_on_stderr() {
    csv_aggregate()
        .args(["-q", "--sum=n"])
        .write_stdin("k,n\na,1\n")
        .assert()
        .success()
        .stderr("");
}
