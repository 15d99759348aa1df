// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction.rs

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use sqlx::{PgConnection, PgPool, Postgres, Transaction as PostgresTx};
use tokio::sync::Mutex;
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};

/// Poignée partagée sur une transaction sqlx.
/// Le manager conserve un clone pour le commit/rollback final.
#[derive(Clone)]
pub struct PostgresTransaction {
    inner: Arc<Mutex<Option<PostgresTx<'static, Postgres>>>>,
}

impl PostgresTransaction {
    pub fn new(tx: PostgresTx<'static, Postgres>) -> Self {
        Self { inner: Arc::new(Mutex::new(Some(tx))) }
    }

    /// Récupère la transaction sqlx (une seule fois)
    pub async fn take(&self) -> Option<PostgresTx<'static, Postgres>> {
        self.inner.lock().await.take()
    }
}

impl Transaction for PostgresTransaction {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

pub trait TransactionExt {
    fn downcast_postgres(&mut self) -> Result<&mut PostgresTransaction>;
}

impl TransactionExt for dyn Transaction + '_ {
    fn downcast_postgres(&mut self) -> Result<&mut PostgresTransaction> {
        self.as_any_mut()
            .downcast_mut::<PostgresTransaction>()
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected PostgresTransaction".into()))
    }
}

impl dyn Transaction + '_ {
    /// Exécute `f` sur la transaction fournie, sinon sur une connexion du pool
    pub async fn execute_on<'a, F, T>(
        pool: &PgPool,
        tx: Option<&'a mut dyn Transaction>,
        f: F,
    ) -> Result<T>
    where
        F: for<'b> FnOnce(&'b mut PgConnection) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'b>> + Send,
    {
        match tx {
            Some(t) => {
                let handle = t.downcast_postgres()?;
                let mut guard = handle.inner.lock().await;
                let sqlx_tx = guard
                    .as_mut()
                    .ok_or_else(|| DomainError::Internal("Transaction already completed".into()))?;
                f(&mut **sqlx_tx).await
            }
            None => {
                let mut conn = pool.acquire().await
                    .map_err(|e| DomainError::Infrastructure(format!("Pool acquisition failed: {}", e)))?;
                f(&mut *conn).await
            }
        }
    }
}
