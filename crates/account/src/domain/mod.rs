// crates/account/src/domain/mod.rs

pub mod builders;
pub mod entities;
pub mod ports;
pub mod repositories;
pub mod value_objects;
