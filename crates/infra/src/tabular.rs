pub mod csv_sink;
pub mod csv_source;
pub mod format;
pub mod jsonl_sink;

use std::io::Write;

use csv_aggregate_ports::RecordSink;
use csv_aggregate_shared_kernel::InfrastructureError;

pub use csv_sink::CsvRecordSink;
pub use csv_source::CsvRecordSource;
pub use format::{CsvFormat, CsvFormatBuilder};
pub use jsonl_sink::JsonLinesSink;

/// Encoding of the aggregated output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    JsonLines,
}

impl OutputFormat {
    /// Build the sink matching this format on top of `out`.
    pub fn sink<'w, W: Write + 'w>(self, out: W, format: &CsvFormat) -> Box<dyn RecordSink + 'w> {
        match self {
            Self::Csv => Box::new(CsvRecordSink::new(out, format)),
            Self::JsonLines => Box::new(JsonLinesSink::new(out)),
        }
    }
}

fn write_error(err: csv::Error) -> InfrastructureError {
    InfrastructureError::OutputError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}
