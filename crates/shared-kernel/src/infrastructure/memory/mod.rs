// crates/shared-kernel/src/infrastructure/memory/mod.rs

mod document_path;
mod memory_document_store;
mod memory_transaction;
mod memory_transaction_manager;

pub use document_path::DocumentPath;
pub use memory_document_store::MemoryDocumentStore;
pub use memory_transaction::MemoryTransaction;
pub use memory_transaction_manager::MemoryTransactionManager;
