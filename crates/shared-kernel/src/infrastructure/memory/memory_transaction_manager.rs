// crates/shared-kernel/src/infrastructure/memory/memory_transaction_manager.rs

use std::sync::Arc;
use crate::domain::transaction::{TransactionFuture, TransactionManager, TransactionUnit};
use crate::infrastructure::memory::{MemoryDocumentStore, MemoryTransaction};

pub struct MemoryTransactionManager {
    store: Arc<MemoryDocumentStore>,
}

impl MemoryTransactionManager {
    pub fn new(store: Arc<MemoryDocumentStore>) -> Self {
        Self { store }
    }
}

impl TransactionManager for MemoryTransactionManager {
    fn in_transaction<'a>(&'a self, f: TransactionUnit<'a>) -> TransactionFuture<'a> {
        Box::pin(async move {
            let tx = MemoryTransaction::new();
            let handle = tx.clone();

            // Erreur métier : on abandonne simplement le buffer d'écritures
            f(Box::new(tx)).await?;

            self.store.commit(handle.take_state()?)
        })
    }
}
