// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use std::future::Future;
use std::pin::Pin;
use crate::domain::transaction::Transaction;
use crate::errors::Result;

pub type TransactionFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

pub type TransactionUnit<'a> =
    Box<dyn FnOnce(Box<dyn Transaction>) -> TransactionFuture<'a> + Send + 'a>;

/// Unité atomique : toutes les lectures/écritures faites via la transaction
/// sont validées ensemble si l'unité renvoie `Ok`, abandonnées sinon.
/// Un conflit détecté au commit remonte en `DomainError::ConcurrencyConflict`.
pub trait TransactionManager: Send + Sync {
    fn in_transaction<'a>(&'a self, f: TransactionUnit<'a>) -> TransactionFuture<'a>;
}
