use std::io::Write;

use csv_aggregate_ports::RecordSink;
use csv_aggregate_shared_kernel::{CellValue, InfrastructureError, Result};

use super::{CsvFormat, write_error};

/// Writes the header and aggregated rows as delimited text.
pub struct CsvRecordSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvRecordSink<W> {
    pub fn new(out: W, format: &CsvFormat) -> Self {
        Self { writer: format.writer_builder().from_writer(out) }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|err| {
            InfrastructureError::OutputError { message: err.error().to_string(), source: None }.into()
        })
    }
}

impl<W: Write> RecordSink for CsvRecordSink<W> {
    fn write_header(&mut self, columns: &[String]) -> Result<()> {
        self.writer.write_record(columns).map_err(write_error)?;
        Ok(())
    }

    fn write_row(&mut self, cells: &[CellValue]) -> Result<()> {
        self.writer
            .write_record(cells.iter().map(ToString::to_string))
            .map_err(write_error)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
