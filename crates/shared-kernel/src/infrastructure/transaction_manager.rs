// crates/shared-kernel/src/infrastructure/transaction_manager.rs

use std::future::Future;
use crate::domain::transaction::{Transaction, TransactionFuture, TransactionManager};
use crate::errors::Result;

/// Évite le `Box::new(move |tx| Box::pin(...))` à chaque appel
pub trait TransactionManagerExt: TransactionManager {
    fn run_in_transaction<'a, F, Fut>(&'a self, f: F) -> TransactionFuture<'a>
    where
        F: FnOnce(Box<dyn Transaction>) -> Fut + Send + 'a,
        Fut: Future<Output = Result<()>> + Send + 'a,
    {
        self.in_transaction(Box::new(move |tx| Box::pin(f(tx))))
    }
}

impl<T: TransactionManager + ?Sized> TransactionManagerExt for T {}
