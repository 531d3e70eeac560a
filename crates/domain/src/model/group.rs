// crates/domain/src/model/group.rs
use csv_aggregate_shared_kernel::{CellValue, Number};

use super::Record;

/// Values of the key-role columns, in header order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    pub fn from_record(record: &Record, key_indices: &[usize]) -> Self {
        Self(key_indices.iter().map(|&idx| record.values[idx].clone()).collect())
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }
}

/// Running aggregate for one group, one cell per header column.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRecord {
    cells: Vec<CellValue>,
}

impl AggregateRecord {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn get(&self, idx: usize) -> Option<&CellValue> {
        self.cells.get(idx)
    }

    /// Mutable access to an aggregate-role cell; `None` for key-role cells.
    pub fn number_mut(&mut self, idx: usize) -> Option<&mut Number> {
        match self.cells.get_mut(idx) {
            Some(CellValue::Number(n)) => Some(n),
            _ => None,
        }
    }
}
