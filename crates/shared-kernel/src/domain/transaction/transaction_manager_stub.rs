// crates/shared-kernel/src/domain/transaction/transaction_manager_stub.rs

use std::sync::Mutex;
use crate::domain::transaction::transaction_stub::FakeTransaction;
use crate::domain::transaction::{TransactionFuture, TransactionManager, TransactionUnit};
use crate::errors::DomainError;

/// Exécute l'unité sans isolation ; peut simuler un échec de commit.
#[derive(Default)]
pub struct StubTxManager {
    pub commit_error: Mutex<Option<DomainError>>,
}

impl StubTxManager {
    pub fn failing_commit(error: DomainError) -> Self {
        Self { commit_error: Mutex::new(Some(error)) }
    }
}

impl TransactionManager for StubTxManager {
    fn in_transaction<'a>(&'a self, f: TransactionUnit<'a>) -> TransactionFuture<'a> {
        Box::pin(async move {
            f(Box::new(FakeTransaction)).await?;
            match self.commit_error.lock().unwrap().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        })
    }
}
