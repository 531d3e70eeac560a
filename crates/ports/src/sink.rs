// crates/ports/src/sink.rs
use csv_aggregate_shared_kernel::{CellValue, Result};

/// Port for emitting aggregated rows.
pub trait RecordSink {
    fn write_header(&mut self, columns: &[String]) -> Result<()>;
    fn write_row(&mut self, cells: &[CellValue]) -> Result<()>;
    /// Flush buffered output. Called once after the last row.
    fn finish(&mut self) -> Result<()>;
}
