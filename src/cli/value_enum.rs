use clap::ValueEnum;
use csv_aggregate_infra::OutputFormat;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    #[default]
    Csv,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Csv => Self::Csv,
            CliOutputFormat::Jsonl => Self::JsonLines,
        }
    }
}
