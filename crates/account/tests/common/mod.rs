// crates/account/tests/common/mod.rs
#![allow(dead_code)]

mod memory_world;
pub use memory_world::{command, MemoryWorld};

#[cfg(feature = "integration")]
mod setup_postgres_test_db;
#[cfg(feature = "integration")]
pub use setup_postgres_test_db::setup_postgres_test_db;
