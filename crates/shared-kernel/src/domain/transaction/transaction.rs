// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;

/// Poignée opaque sur une transaction ouverte par un `TransactionManager`.
/// Les repositories la retrouvent par downcast vers leur type concret.
pub trait Transaction: Send + Sync + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
