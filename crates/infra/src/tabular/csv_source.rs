use std::io::Read;

use csv_aggregate_ports::{RecordDto, RecordSource};
use csv_aggregate_shared_kernel::{InfrastructureError, Result};
use log::trace;

use super::CsvFormat;

/// Reads a header and data rows from delimited text.
///
/// Row width is not checked here; a ragged row is delivered as-is so the
/// aggregator can report it against the header.
pub struct CsvRecordSource<R: Read> {
    reader: csv::Reader<R>,
    record: csv::StringRecord,
}

impl<R: Read> CsvRecordSource<R> {
    pub fn new(input: R, format: &CsvFormat) -> Self {
        Self {
            reader: format.reader_builder().from_reader(input),
            record: csv::StringRecord::new(),
        }
    }

    fn read_next(&mut self) -> Result<Option<(u64, Vec<String>)>> {
        let more = self.reader.read_record(&mut self.record).map_err(read_error)?;
        if !more {
            return Ok(None);
        }
        let line = self.record.position().map_or(0, csv::Position::line);
        Ok(Some((line, self.record.iter().map(str::to_string).collect())))
    }
}

impl<R: Read> RecordSource for CsvRecordSource<R> {
    fn header(&mut self) -> Result<Option<Vec<String>>> {
        Ok(self.read_next()?.map(|(_, names)| names))
    }

    fn next_record(&mut self) -> Result<Option<RecordDto>> {
        let next = self.read_next()?;
        if let Some((line, fields)) = &next {
            trace!("line {line}: {} fields", fields.len());
        }
        Ok(next.map(|(line, fields)| RecordDto { line, fields }))
    }
}

fn read_error(err: csv::Error) -> InfrastructureError {
    InfrastructureError::InputRead {
        line: err.position().map(csv::Position::line),
        details: err.to_string(),
        source: Some(Box::new(err)),
    }
}
