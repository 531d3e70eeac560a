use std::io::{self, Read, Write};

use anyhow::Result;
use csv_aggregate_infra::CsvRecordSource;
use csv_aggregate_usecase::{AggregateRecords, AggregateSummary};
use log::info;

use crate::{cli::Args, config::RunConfig};

/// Aggregate standard input to standard output.
pub fn run(args: Args) -> Result<AggregateSummary> {
    let config = RunConfig::try_from(args)?;
    run_with(&config, io::stdin().lock(), io::stdout().lock())
}

/// Same as [`run`] but over arbitrary streams.
pub fn run_with<R: Read, W: Write>(config: &RunConfig, input: R, output: W) -> Result<AggregateSummary> {
    let mut source = CsvRecordSource::new(input, &config.csv);
    let mut sink = config.output.sink(output, &config.csv);

    let summary = AggregateRecords::new(&mut source, sink.as_mut()).run(&config.aggregation)?;
    info!("read {} records, wrote {} groups", summary.records_read, summary.groups_written);
    Ok(summary)
}
