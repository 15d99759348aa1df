// crates/shared-kernel/src/infrastructure/bootstrap/mod.rs

mod tracing;

pub use self::tracing::init_tracing;
