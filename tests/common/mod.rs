//! Shared helpers for the binary-level test suites.
#![allow(dead_code)]

use assert_cmd::Command;

pub const SAMPLE: &str = "\
FieldName1,FieldName2,Key1,Key2
10,20,foo,bar
20,40,foo,zig
30,60,foo,bar
";

/// Command for the built binary with logging silenced unless a test opts in.
pub fn csv_aggregate() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_csv_aggregate"));
    cmd.env_remove("RUST_LOG");
    cmd
}
