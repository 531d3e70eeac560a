use csv_aggregate_domain::{AggregationConfig, Aggregator, ColumnSet, Record};
use csv_aggregate_ports::{RecordDto, RecordSink, RecordSource};
use csv_aggregate_shared_kernel::{ErrorContext, Result};
use log::debug;

use crate::dto::AggregateSummary;

pub struct AggregateRecords<'a> {
    source: &'a mut dyn RecordSource,
    sink: &'a mut dyn RecordSink,
}

impl<'a> AggregateRecords<'a> {
    pub fn new(source: &'a mut dyn RecordSource, sink: &'a mut dyn RecordSink) -> Self {
        Self { source, sink }
    }

    /// Consume the whole source, then write the header and every group.
    /// Nothing reaches the sink unless the entire input aggregated cleanly.
    pub fn run(&mut self, config: &AggregationConfig) -> Result<AggregateSummary> {
        let Some(header) = self.source.header()? else {
            debug!("input is empty; nothing to aggregate");
            config.resolve(ColumnSet::default())?;
            return Ok(AggregateSummary::default());
        };

        let plan = config.resolve(ColumnSet::try_new(header)?)?;
        let mut aggregator = Aggregator::new(plan);
        while let Some(dto) = self.source.next_record()? {
            aggregator.push(port_to_domain_record(dto))?;
        }
        let output = aggregator.finish();

        self.sink.write_header(&output.columns).context("writing header")?;
        for row in &output.rows {
            self.sink.write_row(row.cells()).context("writing aggregated row")?;
        }
        self.sink.finish().context("flushing output")?;

        Ok(AggregateSummary {
            records_read: output.records_read,
            groups_written: output.rows.len(),
        })
    }
}

fn port_to_domain_record(dto: RecordDto) -> Record {
    Record { line: dto.line, values: dto.fields }
}
