// crates/shared-kernel/src/infrastructure/memory/memory_document_store.rs

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};
use crate::infrastructure::memory::memory_transaction::{MemoryTransactionExt, TxState};
use crate::infrastructure::memory::DocumentPath;

#[derive(Debug)]
struct Slot {
    version: u64,
    data: Option<Value>,
}

#[derive(Debug, Default)]
struct StoreState {
    /// Horloge logique : chaque écriture committée reçoit une version unique
    clock: u64,
    slots: HashMap<DocumentPath, Slot>,
    #[cfg(any(test, feature = "test-utils"))]
    injected_commit_failure: Option<DomainError>,
}

impl StoreState {
    fn version_of(&self, path: &DocumentPath) -> u64 {
        self.slots.get(path).map(|s| s.version).unwrap_or(0)
    }

    fn apply(&mut self, path: DocumentPath, data: Option<Value>) {
        self.clock += 1;
        let version = self.clock;
        self.slots.insert(path, Slot { version, data });
    }
}

/// Store documentaire en mémoire avec transactions optimistes :
/// les versions lues dans une transaction sont revalidées au commit,
/// toute divergence annule le commit en `ConcurrencyConflict`.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    state: RwLock<StoreState>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| DomainError::Internal("Memory store lock poisoned".into()))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| DomainError::Internal("Memory store lock poisoned".into()))
    }

    // --- LECTURES ---

    pub fn get(&self, path: &DocumentPath, tx: Option<&mut dyn Transaction>) -> Result<Option<Value>> {
        let state = self.read_state()?;
        let slot = state.slots.get(path);

        if let Some(tx) = tx {
            let version = slot.map(|s| s.version).unwrap_or(0);
            tx.downcast_memory()?.with_state(|tx_state| {
                if !tx_state.writes.is_empty() {
                    return Err(DomainError::Internal(
                        "Transactional reads must be executed before all writes".into(),
                    ));
                }
                tx_state.reads.entry(path.clone()).or_insert(version);
                Ok(())
            })??;
        }

        Ok(slot.and_then(|s| s.data.clone()))
    }

    pub fn get_as<T: DeserializeOwned>(
        &self,
        path: &DocumentPath,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<T>> {
        self.get(path, tx)?
            .map(|value| {
                serde_json::from_value(value).map_err(|e| {
                    DomainError::Internal(format!("Corrupted document {path}: {e}"))
                })
            })
            .transpose()
    }

    /// Documents présents d'une collection, triés par id
    pub fn list(&self, collection: &str) -> Result<Vec<(String, Value)>> {
        let state = self.read_state()?;
        let mut docs: Vec<(String, Value)> = state
            .slots
            .iter()
            .filter(|(path, _)| path.collection() == collection)
            .filter_map(|(path, slot)| slot.data.clone().map(|d| (path.id().to_string(), d)))
            .collect();
        docs.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(docs)
    }

    pub fn list_as<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        self.list(collection)?
            .into_iter()
            .map(|(id, value)| {
                serde_json::from_value(value).map_err(|e| {
                    DomainError::Internal(format!("Corrupted document {collection}/{id}: {e}"))
                })
            })
            .collect()
    }

    pub fn count(&self, collection: &str) -> Result<usize> {
        Ok(self.list(collection)?.len())
    }

    // --- ÉCRITURES ---

    pub fn set(&self, path: DocumentPath, value: Value, tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.write(path, Some(value), tx)
    }

    pub fn set_as<T: Serialize>(
        &self,
        path: DocumentPath,
        document: &T,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<()> {
        let value = serde_json::to_value(document)
            .map_err(|e| DomainError::Internal(format!("Unserializable document {path}: {e}")))?;
        self.set(path, value, tx)
    }

    pub fn delete(&self, path: DocumentPath, tx: Option<&mut dyn Transaction>) -> Result<()> {
        self.write(path, None, tx)
    }

    fn write(&self, path: DocumentPath, data: Option<Value>, tx: Option<&mut dyn Transaction>) -> Result<()> {
        match tx {
            // Bufferisée jusqu'au commit
            Some(tx) => tx.downcast_memory()?.with_state(|s| s.writes.push((path, data))),
            None => {
                self.write_state()?.apply(path, data);
                Ok(())
            }
        }
    }

    // --- COMMIT ---

    pub(crate) fn commit(&self, tx_state: TxState) -> Result<()> {
        let mut state = self.write_state()?;

        #[cfg(any(test, feature = "test-utils"))]
        if let Some(err) = state.injected_commit_failure.take() {
            return Err(err);
        }

        for (path, seen) in &tx_state.reads {
            let current = state.version_of(path);
            if current != *seen {
                return Err(DomainError::ConcurrencyConflict {
                    reason: format!("{path} changed during transaction (read v{seen}, now v{current})"),
                });
            }
        }

        for (path, data) in tx_state.writes {
            state.apply(path, data);
        }

        Ok(())
    }

    /// Le prochain commit échouera avec `error` (injection de panne)
    #[cfg(any(test, feature = "test-utils"))]
    pub fn fail_next_commit(&self, error: DomainError) {
        if let Ok(mut state) = self.state.write() {
            state.injected_commit_failure = Some(error);
        }
    }
}
