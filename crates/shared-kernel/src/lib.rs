// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    AggregateError, DomainError, DomainResult, ErrorContext, ErrorKind, InfraResult, InfrastructureError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CellValue, FieldRole, Number, ParseNumberError};
