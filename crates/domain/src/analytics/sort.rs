use std::cmp::Ordering;

use crate::model::AggregateRecord;

/// One sort key: header position and column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    column: usize,
    name: String,
}

impl SortSpec {
    pub fn new(column: usize, name: impl Into<String>) -> Self {
        Self { column, name: name.into() }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compare on this column only: text by code point, numbers numerically.
    #[inline]
    pub fn compare(&self, a: &AggregateRecord, b: &AggregateRecord) -> Ordering {
        match (a.get(self.column), b.get(self.column)) {
            (Some(x), Some(y)) => x.compare(y),
            _ => Ordering::Equal,
        }
    }
}

/// Stable multi-key sort. The first key is most significant; later keys only break ties.
#[derive(Debug, Clone, Default)]
pub struct SortStrategy {
    specs: Vec<SortSpec>,
}

impl SortStrategy {
    pub fn new(specs: Vec<SortSpec>) -> Self {
        Self { specs }
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[SortSpec] {
        &self.specs
    }

    /// Sort in place. `sort_by` is stable, so tied rows keep their incoming order.
    pub fn apply(&self, rows: &mut [AggregateRecord]) {
        if rows.len() < 2 || self.specs.is_empty() {
            return;
        }
        rows.sort_by(|a, b| self.compare(a, b));
    }

    pub fn sorted(&self, mut rows: Vec<AggregateRecord>) -> Vec<AggregateRecord> {
        self.apply(&mut rows);
        rows
    }

    fn compare(&self, a: &AggregateRecord, b: &AggregateRecord) -> Ordering {
        for spec in &self.specs {
            let cmp = spec.compare(a, b);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        Ordering::Equal
    }
}
