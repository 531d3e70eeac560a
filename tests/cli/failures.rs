use predicates::prelude::*;

use crate::common::{SAMPLE, csv_aggregate};

#[test]
fn field_in_two_roles_is_rejected() {
    csv_aggregate()
        .args(["--sum=FieldName1", "--min=FieldName1"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("configuration error"))
        .stderr(predicate::str::contains("FieldName1"));
}

#[test]
fn unknown_aggregate_field_is_rejected() {
    csv_aggregate()
        .args(["--sum=NoSuchField"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unknown field name 'NoSuchField' given to --sum"));
}

#[test]
fn unknown_sort_field_is_rejected() {
    csv_aggregate()
        .args(["--sum=FieldName1", "--sort=Nope"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unknown sort field"))
        .stderr(predicate::str::contains("'Nope'"));
}

#[test]
fn non_numeric_aggregate_value_names_the_line() {
    csv_aggregate()
        .args(["--sum=n"])
        .write_stdin("k,n\na,1\nb,oops\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("parse error"))
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn ragged_row_is_malformed_input() {
    csv_aggregate()
        .args(["--sum=n"])
        .write_stdin("k,n\na,1\nb\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn duplicate_header_column_is_rejected() {
    csv_aggregate()
        .write_stdin("a,a\n1,2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("appears more than once"));
}

#[test]
fn bad_delimiter_is_a_usage_error() {
    csv_aggregate()
        .args(["--delimiter", "ab"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid delimiter"));
}
