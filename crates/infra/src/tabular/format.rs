use derive_builder::Builder;

/// Delimited-text dialect shared by the reader and the writer.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct CsvFormat {
    #[builder(default = "b','")]
    pub delimiter: u8,
    #[builder(default = "b'\"'")]
    pub quote: u8,
    /// Terminate written records with RFC 4180 `\r\n` instead of `\n`.
    #[builder(default)]
    pub crlf: bool,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self { delimiter: b',', quote: b'"', crlf: false }
    }
}

impl CsvFormat {
    pub(crate) fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(false)
            .flexible(true);
        builder
    }

    pub(crate) fn writer_builder(&self) -> csv::WriterBuilder {
        let terminator = if self.crlf { csv::Terminator::CRLF } else { csv::Terminator::Any(b'\n') };
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote(self.quote)
            .terminator(terminator)
            .has_headers(false);
        builder
    }
}
