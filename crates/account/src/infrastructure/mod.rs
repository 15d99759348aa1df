// crates/account/src/infrastructure/mod.rs

pub mod identity_toolkit;
pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;
