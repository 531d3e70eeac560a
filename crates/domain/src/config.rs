pub mod aggregation;
pub mod plan;

pub use aggregation::AggregationConfig;
pub use plan::AggregationPlan;
