//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract the two streams the tool touches:
//!
//! - [`source`]: the tabular input (header plus data rows)
//! - [`sink`]: the aggregated output
//!
//! These ports allow the domain and application layers to remain
//! independent of the concrete text encoding.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod sink;
pub mod source;

pub use sink::RecordSink;
pub use source::{RecordDto, RecordSource};
