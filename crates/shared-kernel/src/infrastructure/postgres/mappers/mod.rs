// crates/shared-kernel/src/infrastructure/postgres/mappers/mod.rs

mod postgres_error_mapper;

pub use postgres_error_mapper::{classify_sqlx_error, SqlxErrorExt};
