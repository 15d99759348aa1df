// crates/shared-kernel/src/domain/transaction/mod.rs

mod transaction;
mod transaction_manager;

pub use transaction::Transaction;
pub use transaction_manager::{TransactionFuture, TransactionManager, TransactionUnit};

#[cfg(any(test, feature = "test-utils"))]
mod transaction_stub;
#[cfg(any(test, feature = "test-utils"))]
mod transaction_manager_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use transaction_stub::FakeTransaction;
#[cfg(any(test, feature = "test-utils"))]
pub use transaction_manager_stub::StubTxManager;
