use predicates::prelude::*;

use crate::common::{SAMPLE, csv_aggregate};

#[test]
fn sums_and_sorts_the_documented_example() {
    csv_aggregate()
        .args(["--sum=FieldName1", "--sum=FieldName2", "--sort=Key2"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("FieldName1,FieldName2,Key1,Key2\n40.0,80.0,foo,bar\n20.0,40.0,foo,zig\n");
}

#[test]
fn groups_keep_first_appearance_order_without_sort() {
    csv_aggregate()
        .args(["--sum=n"])
        .write_stdin("k,n\nz,1\na,2\nz,3\n")
        .assert()
        .success()
        .stdout("k,n\nz,4.0\na,2.0\n");
}

#[test]
fn min_and_max_on_different_columns() {
    csv_aggregate()
        .args(["--min=lo", "--max=hi"])
        .write_stdin("k,lo,hi\na,5,5\na,-1.5,9\nb,2,2\n")
        .assert()
        .success()
        .stdout("k,lo,hi\na,-1.5,9.0\nb,2.0,2.0\n");
}

#[test]
fn earlier_sort_keys_take_precedence() {
    csv_aggregate()
        .args(["--sort=b", "--sort=a"])
        .write_stdin("a,b\n2,x\n1,y\n1,x\n")
        .assert()
        .success()
        .stdout("a,b\n1,x\n2,x\n1,y\n");
}

#[test]
fn sorting_on_an_aggregate_is_numeric() {
    csv_aggregate()
        .args(["--sum=n", "--sort=n"])
        .write_stdin("k,n\na,10\nb,9\nc,100\n")
        .assert()
        .success()
        .stdout("k,n\nb,9.0\na,10.0\nc,100.0\n");
}

#[test]
fn header_only_input_echoes_the_header() {
    csv_aggregate()
        .args(["--sum=n"])
        .write_stdin("k,n\n")
        .assert()
        .success()
        .stdout("k,n\n");
}

#[test]
fn custom_delimiter_applies_to_input_and_output() {
    csv_aggregate()
        .args(["--delimiter", "tab", "--max=v"])
        .write_stdin("k\tv\na\t1\na\t7\n")
        .assert()
        .success()
        .stdout("k\tv\na\t7.0\n");
}

#[test]
fn crlf_line_endings_on_request() {
    csv_aggregate()
        .args(["--crlf", "--sum=v"])
        .write_stdin("k,v\na,1\n")
        .assert()
        .success()
        .stdout("k,v\r\na,1.0\r\n");
}

#[test]
fn json_lines_output_keeps_column_order() {
    let assert = csv_aggregate()
        .args(["--format=jsonl", "--sum=FieldName1", "--sum=FieldName2", "--sort=Key2"])
        .write_stdin(SAMPLE)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        r#"{"FieldName1":40.0,"FieldName2":80.0,"Key1":"foo","Key2":"bar"}"#
    );
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["Key2"], "zig");
    assert_eq!(second["FieldName1"], 20.0);
}

#[test]
fn quoted_fields_are_requoted_on_output() {
    csv_aggregate()
        .args(["--sum=n"])
        .write_stdin("label,n\n\"x, y\",1\n\"x, y\",2\n")
        .assert()
        .success()
        .stdout(predicate::eq("label,n\n\"x, y\",3.0\n"));
}
