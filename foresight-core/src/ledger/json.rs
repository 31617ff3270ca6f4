//! JSON file ledger store
//!
//! Each ledger is one pretty-printed JSON array on disk. Every write is a
//! read-modify-write of the whole file, serialized through a mutex so writes
//! from this process never interleave.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{Ledger, LedgerEntry, LedgerStore};
use crate::error::{ForesightError, Result};

/// File-backed ledger store
pub struct JsonLedgerStore<R> {
    path: PathBuf,
    capacity: usize,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: LedgerEntry> JsonLedgerStore<R> {
    /// Create a store for the ledger file at `path`
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// Get the path to the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Load the ledger from disk; a missing or unparseable file is an empty ledger
    async fn load(&self) -> Result<Ledger<R>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Ledger::new(self.capacity));
            }
            Err(e) => {
                return Err(ForesightError::Storage(format!(
                    "failed to read ledger {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(Ledger::new(self.capacity));
        }

        // An unparseable file (e.g. a truncated write) is replaced on the next write
        match serde_json::from_str::<Vec<R>>(&content) {
            Ok(records) => Ok(Ledger::from_records(records, self.capacity)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Unreadable ledger file, treating as empty"
                );
                Ok(Ledger::new(self.capacity))
            }
        }
    }

    /// Persist the ledger to disk
    async fn persist(&self, ledger: &Ledger<R>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                ForesightError::Storage(format!("failed to create ledger dir: {}", e))
            })?;
        }

        let content = serde_json::to_string_pretty(ledger.records()).map_err(|e| {
            ForesightError::Serialization(format!("failed to serialize ledger: {}", e))
        })?;

        fs::write(&self.path, content).await.map_err(|e| {
            ForesightError::Storage(format!(
                "failed to write ledger {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), records = ledger.len(), "Ledger persisted");
        Ok(())
    }
}

#[async_trait]
impl<R: LedgerEntry> LedgerStore<R> for JsonLedgerStore<R> {
    async fn fetch_ledger(&self) -> Result<Vec<R>> {
        Ok(self.load().await?.into_records())
    }

    async fn upsert_record(&self, record: R) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut ledger = self.load().await?;
        let outcome = ledger.upsert(record);
        debug!(path = %self.path.display(), ?outcome, "Upserted ledger record");
        self.persist(&ledger).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut ledger = self.load().await?;
        let removed = ledger.remove(id);
        if removed {
            self.persist(&ledger).await?;
        }
        Ok(removed)
    }

    async fn clear_all(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ForesightError::Storage(format!(
                "failed to remove ledger {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
