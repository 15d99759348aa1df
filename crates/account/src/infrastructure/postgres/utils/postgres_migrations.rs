// crates/account/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::errors::{DomainError, Result};

pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> Result<()> {
    sqlx::migrate!("./migrations/postgres")
        .set_ignore_missing(true)
        .run(pool)
        .await
        .map_err(|e| DomainError::Infrastructure(format!("Account migrations failed: {}", e)))
}
