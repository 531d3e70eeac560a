//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and port adapters:
//!
//! - [`orchestrator`]: read, aggregate, sort and emit in one pass
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::AggregateSummary;
pub use orchestrator::AggregateRecords;
