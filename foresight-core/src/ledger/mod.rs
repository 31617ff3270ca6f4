//! Bounded, key-ordered ledgers and their stores
//!
//! A ledger holds at most one record per key, ordered newest first, and never
//! grows past its capacity: every write is insert-or-replace by key followed by
//! pruning the oldest records.

mod json;
mod store;

pub use json::JsonLedgerStore;
pub use store::{InMemoryLedgerStore, LedgerStore};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Default ledger capacity (most recent records kept)
pub const DEFAULT_CAPACITY: usize = 90;

/// A record that can live in a ledger
pub trait LedgerEntry: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Upsert key; the ledger keeps one record per key, largest key first
    type Key: Ord + Clone + Send + Sync + std::fmt::Debug;

    fn key(&self) -> Self::Key;

    /// Identifier used by delete operations
    fn id(&self) -> String;
}

/// Result of writing a record into a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new key was added
    Inserted,
    /// An existing record with the same key was replaced in place
    Replaced,
}

/// In-memory ledger snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger<R> {
    records: Vec<R>,
    capacity: usize,
}

impl<R: LedgerEntry> Ledger<R> {
    /// Create an empty ledger
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Build a ledger from records in any order
    ///
    /// Records are sorted newest first; when a key appears more than once the
    /// first occurrence wins. Anything past capacity is dropped.
    pub fn from_records(mut records: Vec<R>, capacity: usize) -> Self {
        records.sort_by_key(|r| std::cmp::Reverse(r.key()));
        records.dedup_by(|later, earlier| later.key() == earlier.key());
        let mut ledger = Self { records, capacity };
        ledger.prune();
        ledger
    }

    /// Insert a record, replacing any record with the same key, then prune
    pub fn upsert(&mut self, record: R) -> Upsert {
        let key = record.key();
        let outcome = match self
            .records
            .binary_search_by(|existing| key.cmp(&existing.key()))
        {
            Ok(idx) => {
                self.records[idx] = record;
                Upsert::Replaced
            }
            Err(idx) => {
                self.records.insert(idx, record);
                Upsert::Inserted
            }
        };
        self.prune();
        outcome
    }

    /// Remove the record with the given id
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Find a record by id
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Records, newest first
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop the oldest records beyond capacity
    fn prune(&mut self) {
        self.records.truncate(self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutcomeRating, OutcomeRecord};
    use chrono::{Duration, NaiveDate};

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Duration::days(offset)
    }

    fn record(offset: i64, rating: OutcomeRating) -> OutcomeRecord {
        OutcomeRecord::new(day(offset), 70.0, rating)
    }

    #[test]
    fn test_upsert_keeps_newest_first() {
        let mut ledger = Ledger::new(10);
        ledger.upsert(record(1, OutcomeRating::Good));
        ledger.upsert(record(5, OutcomeRating::Good));
        ledger.upsert(record(3, OutcomeRating::Good));

        let dates: Vec<_> = ledger.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(5), day(3), day(1)]);
    }

    #[test]
    fn test_upsert_same_date_replaces_in_place() {
        let mut ledger = Ledger::new(10);
        ledger.upsert(record(19, OutcomeRating::Excellent).with_deals(1));
        ledger.upsert(record(18, OutcomeRating::Poor));

        let outcome = ledger.upsert(record(19, OutcomeRating::Good).with_deals(2));

        assert_eq!(outcome, Upsert::Replaced);
        assert_eq!(ledger.len(), 2);
        let replaced = ledger.get("2026-01-20").unwrap();
        assert_eq!(replaced.rating, OutcomeRating::Good);
        assert_eq!(replaced.deals_closed, Some(2));
    }

    #[test]
    fn test_prunes_oldest_beyond_capacity() {
        let mut ledger = Ledger::new(3);
        for offset in 0..5 {
            ledger.upsert(record(offset, OutcomeRating::Neutral));
        }

        assert_eq!(ledger.len(), 3);
        let dates: Vec<_> = ledger.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(4), day(3), day(2)]);
    }

    #[test]
    fn test_backfilled_record_older_than_window_is_dropped() {
        let mut ledger = Ledger::new(2);
        ledger.upsert(record(10, OutcomeRating::Good));
        ledger.upsert(record(11, OutcomeRating::Good));
        ledger.upsert(record(1, OutcomeRating::Good));

        assert_eq!(ledger.len(), 2);
        assert!(ledger.get("2026-01-02").is_none());
    }

    #[test]
    fn test_from_records_sorts_and_dedups() {
        let records = vec![
            record(1, OutcomeRating::Good),
            record(4, OutcomeRating::Poor),
            record(1, OutcomeRating::Terrible),
            record(2, OutcomeRating::Neutral),
        ];
        let ledger = Ledger::from_records(records, 90);

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.records()[0].date, day(4));
        assert_eq!(ledger.records()[2].rating, OutcomeRating::Good);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut ledger = Ledger::new(10);
        ledger.upsert(record(0, OutcomeRating::Good));
        ledger.upsert(record(1, OutcomeRating::Good));

        assert!(ledger.remove("2026-01-01"));
        assert!(!ledger.remove("2026-01-01"));
        assert_eq!(ledger.len(), 1);

        ledger.clear();
        assert!(ledger.is_empty());
    }
}
