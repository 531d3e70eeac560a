use anyhow::{Context, Result};
use csv_aggregate_domain::AggregationConfig;
use csv_aggregate_infra::{CsvFormat, CsvFormatBuilder, OutputFormat};
use csv_aggregate_shared_kernel::AggregateError;

use crate::cli::Args;

/// Everything one invocation needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub aggregation: AggregationConfig,
    pub csv: CsvFormat,
    pub output: OutputFormat,
}

impl TryFrom<Args> for RunConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let aggregation =
            AggregationConfig::new(args.sum, args.min, args.max, args.sort).map_err(AggregateError::from)?;
        let csv = CsvFormatBuilder::default()
            .delimiter(args.delimiter.0)
            .crlf(args.crlf)
            .build()
            .context("invalid delimited-text settings")?;

        Ok(Self { aggregation, csv, output: args.format.into() })
    }
}
