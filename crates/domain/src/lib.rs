//! # Domain
//!
//! Pure aggregation logic, free of any I/O:
//!
//! - [`config`]: role assignment and its resolution against a header
//! - [`model`]: column sets, input records and aggregate records
//! - [`analytics`]: the grouping table and multi-key sorting

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;

pub use analytics::{AggregationOutput, Aggregator, SortStrategy};
pub use config::{AggregationConfig, AggregationPlan};
pub use model::{AggregateRecord, ColumnSet, GroupKey, Record};
