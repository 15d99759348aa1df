// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction_manager.rs

use sqlx::{Pool, Postgres};
use crate::domain::transaction::{TransactionFuture, TransactionManager, TransactionUnit};
use crate::errors::DomainError;
use crate::infrastructure::postgres::mappers::{classify_sqlx_error, SqlxErrorExt};
use crate::infrastructure::postgres::transactions::PostgresTransaction;

pub struct PostgresTransactionManager {
    pool: Pool<Postgres>,
}

impl PostgresTransactionManager {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

impl TransactionManager for PostgresTransactionManager {
    fn in_transaction<'a>(&'a self, f: TransactionUnit<'a>) -> TransactionFuture<'a> {
        Box::pin(async move {
            let tx = self.pool.begin().await.map_domain_infra("Failed to begin transaction")?;
            let handle = PostgresTransaction::new(tx);
            let shared = handle.clone();

            let outcome = f(Box::new(handle)).await;

            let Some(tx) = shared.take().await else {
                return Err(DomainError::Internal("Transaction consumed before commit".into()));
            };

            match outcome {
                Ok(()) => tx
                    .commit()
                    .await
                    .map_err(|e| classify_sqlx_error(e, "Transaction", |_| "unique_constraint")),
                Err(err) => {
                    if let Err(rollback_err) = tx.rollback().await {
                        tracing::warn!(error = %rollback_err, "⚠️ Rollback failed after aborted unit");
                    }
                    Err(err)
                }
            }
        })
    }
}
