// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod tabular;

pub use tabular::{CsvFormat, CsvFormatBuilder, CsvRecordSink, CsvRecordSource, JsonLinesSink, OutputFormat};
