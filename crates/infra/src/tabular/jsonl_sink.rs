use std::io::{BufWriter, Write};

use csv_aggregate_ports::RecordSink;
use csv_aggregate_shared_kernel::{CellValue, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One JSON object per group, keys in header order.
pub struct JsonLinesSink<W: Write> {
    out: BufWriter<W>,
    columns: Vec<String>,
}

struct OrderedRow<'a> {
    columns: &'a [String],
    cells: &'a [CellValue],
}

impl Serialize for OrderedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out), columns: Vec::new() }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out.into_inner().map_err(|err| err.into_error().into())
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn write_header(&mut self, columns: &[String]) -> Result<()> {
        self.columns = columns.to_vec();
        Ok(())
    }

    fn write_row(&mut self, cells: &[CellValue]) -> Result<()> {
        let row = OrderedRow { columns: &self.columns, cells };
        serde_json::to_writer(&mut self.out, &row)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
