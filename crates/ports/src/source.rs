// crates/ports/src/source.rs
use csv_aggregate_shared_kernel::Result;

/// DTO representing one data row delivered by an input port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDto {
    /// 1-based physical line where the row starts.
    pub line: u64,
    pub fields: Vec<String>,
}

/// Port for reading a header followed by data rows, exactly once.
pub trait RecordSource {
    /// Column names from the first record, or `None` when the input is empty.
    fn header(&mut self) -> Result<Option<Vec<String>>>;

    /// Next data row, or `None` once the input is exhausted.
    fn next_record(&mut self) -> Result<Option<RecordDto>>;
}
