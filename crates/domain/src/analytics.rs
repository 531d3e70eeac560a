pub mod aggregate;
pub mod sort;

pub use aggregate::{AggregationOutput, Aggregator};
pub use sort::{SortSpec, SortStrategy};
