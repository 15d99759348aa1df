// crates/shared-kernel/src/infrastructure/postgres/utils/mod.rs

mod postgres_test_utils;

pub use postgres_test_utils::setup_test_postgres;
