// crates/shared-kernel/src/infrastructure/memory/memory_transaction.rs

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use serde_json::Value;

use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};
use crate::infrastructure::memory::DocumentPath;

#[derive(Debug, Default)]
pub(crate) struct TxState {
    /// Version observée pour chaque document lu (0 = absent jamais écrit)
    pub(crate) reads: HashMap<DocumentPath, u64>,
    /// Écritures bufferisées, appliquées dans l'ordre au commit (`None` = suppression)
    pub(crate) writes: Vec<(DocumentPath, Option<Value>)>,
}

/// Poignée partagée : le manager garde un clone pour committer
/// une fois l'unité terminée.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransaction {
    state: Arc<Mutex<TxState>>,
}

impl MemoryTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&mut TxState) -> R) -> Result<R> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| DomainError::Internal("Memory transaction lock poisoned".into()))?;
        Ok(f(&mut guard))
    }

    pub(crate) fn take_state(&self) -> Result<TxState> {
        self.with_state(std::mem::take)
    }
}

impl Transaction for MemoryTransaction {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub(crate) trait MemoryTransactionExt {
    fn downcast_memory(&mut self) -> Result<&mut MemoryTransaction>;
}

impl MemoryTransactionExt for dyn Transaction + '_ {
    fn downcast_memory(&mut self) -> Result<&mut MemoryTransaction> {
        self.as_any_mut()
            .downcast_mut::<MemoryTransaction>()
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected MemoryTransaction".into()))
    }
}
