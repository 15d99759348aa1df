// crates/feed/src/domain/mod.rs

pub mod entities;
pub mod ports;
pub mod repositories;
pub mod value_objects;
