//! Ledger storage trait and in-memory implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DEFAULT_CAPACITY, Ledger, LedgerEntry};
use crate::error::Result;

/// Storage interface for a single ledger
///
/// Implementations own the durable form of the ledger. Writes merge by key and
/// prune to capacity before persisting. Concurrent writers to the same key are
/// last-writer-wins; no versioning is attempted.
#[async_trait]
pub trait LedgerStore<R: LedgerEntry>: Send + Sync {
    /// Read the whole ledger, newest first. A store that does not exist yet
    /// reads as empty.
    async fn fetch_ledger(&self) -> Result<Vec<R>>;

    /// Insert or replace the record with the same key, then prune
    async fn upsert_record(&self, record: R) -> Result<()>;

    /// Delete a record by id, returning whether anything was removed
    async fn delete_by_id(&self, id: &str) -> Result<bool>;

    /// Remove every record
    async fn clear_all(&self) -> Result<()>;
}

/// In-memory implementation for testing and ephemeral use
#[derive(Debug)]
pub struct InMemoryLedgerStore<R> {
    ledger: RwLock<Ledger<R>>,
}

impl<R: LedgerEntry> InMemoryLedgerStore<R> {
    pub fn new(capacity: usize) -> Self {
        Self {
            ledger: RwLock::new(Ledger::new(capacity)),
        }
    }

    /// Seed the store with existing records
    pub fn with_records(records: Vec<R>, capacity: usize) -> Self {
        Self {
            ledger: RwLock::new(Ledger::from_records(records, capacity)),
        }
    }

    pub async fn len(&self) -> usize {
        self.ledger.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ledger.read().await.is_empty()
    }
}

impl<R: LedgerEntry> Default for InMemoryLedgerStore<R> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl<R: LedgerEntry> LedgerStore<R> for InMemoryLedgerStore<R> {
    async fn fetch_ledger(&self) -> Result<Vec<R>> {
        Ok(self.ledger.read().await.records().to_vec())
    }

    async fn upsert_record(&self, record: R) -> Result<()> {
        self.ledger.write().await.upsert(record);
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        Ok(self.ledger.write().await.remove(id))
    }

    async fn clear_all(&self) -> Result<()> {
        self.ledger.write().await.clear();
        Ok(())
    }
}
