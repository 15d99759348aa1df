// crates/account/tests/common/setup_postgres_test_db.rs

use account::infrastructure::postgres::utils::run_postgres_migrations;
use shared_kernel::infrastructure::postgres::utils::setup_test_postgres;
use sqlx::PgPool;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres as PostgresImage;

pub async fn setup_postgres_test_db() -> (PgPool, ContainerAsync<PostgresImage>) {
    let (pool, container) = setup_test_postgres().await;
    run_postgres_migrations(&pool).await.expect("Account migrations failed");
    (pool, container)
}
