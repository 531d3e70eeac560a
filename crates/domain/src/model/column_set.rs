// crates/domain/src/model/column_set.rs
use csv_aggregate_shared_kernel::{DomainError, DomainResult};
use hashbrown::HashMap;

/// Ordered, duplicate-free list of column names taken from the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ColumnSet {
    pub fn try_new<I, S>(names: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), idx).is_some() {
                return Err(DomainError::DuplicateColumn { name: name.clone() });
            }
        }
        Ok(Self { names, positions })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Name at `idx`. Panics if out of range, like slice indexing.
    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}
