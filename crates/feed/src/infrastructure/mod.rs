// crates/feed/src/infrastructure/mod.rs

pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;
