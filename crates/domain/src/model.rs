pub mod column_set;
pub mod group;
pub mod record;

pub use column_set::ColumnSet;
pub use group::{AggregateRecord, GroupKey};
pub use record::Record;
