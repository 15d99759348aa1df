// crates/shared-kernel/src/domain/mod.rs

pub mod entities;
pub mod transaction;
pub mod value_objects;
