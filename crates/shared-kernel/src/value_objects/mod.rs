// crates/shared-kernel/src/value_objects/mod.rs
pub mod cell;
pub mod number;
pub mod role;

pub use cell::CellValue;
pub use number::{Number, ParseNumberError};
pub use role::FieldRole;
