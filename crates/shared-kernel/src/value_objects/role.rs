// crates/shared-kernel/src/value_objects/role.rs
use std::fmt;

/// Role a column plays during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Part of the group key; passed through unchanged.
    Key,
    Sum,
    Min,
    Max,
}

impl FieldRole {
    /// Aggregate roles in the order they are reported.
    pub const AGGREGATES: [Self; 3] = [Self::Sum, Self::Min, Self::Max];

    #[inline]
    pub const fn is_aggregate(self) -> bool {
        !matches!(self, Self::Key)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
