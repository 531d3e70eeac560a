// crates/domain/src/model/record.rs

/// One data row, values aligned with the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line of the row in the input, used for diagnostics.
    pub line: u64,
    pub values: Vec<String>,
}

impl Record {
    pub fn new<I, S>(line: u64, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { line, values: values.into_iter().map(Into::into).collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
