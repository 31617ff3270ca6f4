//! Ledger-backed trackers
//!
//! A [`Tracker`] wraps an injected [`LedgerStore`] and never surfaces store
//! failures to the analysis APIs: a failed read is logged and treated as an
//! empty ledger, a failed write is logged and dropped.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, error, warn};

use crate::config::ForesightConfig;
use crate::engine::{
    AnalysisResult, MetricsSummary, TrendDirection, analyze_outcomes, summarize_metrics,
};
use crate::error::{ForesightError, Result};
use crate::insights::{
    CorrelationReport, EngagementStats, correlation_reports, energy_trend, engagement_stats,
};
use crate::ledger::{InMemoryLedgerStore, JsonLedgerStore, LedgerEntry, LedgerStore};
use crate::types::{BiometricRecord, NotificationRecord, OutcomeRecord};

/// Logs records into one ledger and reads snapshots back for analysis
pub struct Tracker<R: LedgerEntry> {
    name: &'static str,
    store: Arc<dyn LedgerStore<R>>,
}

impl<R: LedgerEntry> Clone for Tracker<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: LedgerEntry> Tracker<R> {
    /// Create a tracker over an existing store
    ///
    /// `name` only labels log events.
    pub fn new(name: &'static str, store: Arc<dyn LedgerStore<R>>) -> Self {
        Self { name, store }
    }

    /// Tracker over a JSON ledger file
    pub fn open_json(name: &'static str, path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self::new(name, Arc::new(JsonLedgerStore::new(path, capacity)))
    }

    /// Tracker over an in-memory ledger
    pub fn in_memory(name: &'static str, capacity: usize) -> Self {
        Self::new(name, Arc::new(InMemoryLedgerStore::new(capacity)))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn store(&self) -> &Arc<dyn LedgerStore<R>> {
        &self.store
    }

    /// Current ledger, newest first; empty if the store cannot be read
    pub async fn ledger(&self) -> Vec<R> {
        match self.store.fetch_ledger().await {
            Ok(records) => records,
            Err(e) => {
                warn!(ledger = self.name, error = %e, "Failed to read ledger, using empty ledger");
                Vec::new()
            }
        }
    }

    /// Insert or replace a record, returning whether the write landed
    pub async fn log(&self, record: R) -> bool {
        let id = record.id();
        match self.store.upsert_record(record).await {
            Ok(()) => {
                debug!(ledger = self.name, id = %id, "Logged record");
                true
            }
            Err(e) => {
                error!(ledger = self.name, id = %id, error = %e, "Failed to log record");
                false
            }
        }
    }

    /// Delete a record by id, returning whether one was removed
    pub async fn delete(&self, id: &str) -> bool {
        match self.store.delete_by_id(id).await {
            Ok(removed) => removed,
            Err(e) => {
                warn!(ledger = self.name, id, error = %e, "Failed to delete record");
                false
            }
        }
    }

    /// Remove every record
    pub async fn reset(&self) {
        if let Err(e) = self.store.clear_all().await {
            warn!(ledger = self.name, error = %e, "Failed to clear ledger");
        }
    }
}

impl Tracker<OutcomeRecord> {
    /// Analyze the current outcome ledger
    pub async fn analyze(&self) -> AnalysisResult {
        analyze_outcomes(&self.ledger().await)
    }

    /// Metrics relative to the current UTC date
    pub async fn metrics(&self) -> MetricsSummary {
        self.metrics_as_of(Utc::now().date_naive()).await
    }

    /// Metrics relative to an explicit date
    pub async fn metrics_as_of(&self, today: NaiveDate) -> MetricsSummary {
        summarize_metrics(&self.ledger().await, today)
    }
}

impl Tracker<BiometricRecord> {
    /// Biometric correlations against the energy score
    pub async fn correlations(&self, min_samples: usize) -> Vec<CorrelationReport> {
        correlation_reports(&self.ledger().await, min_samples)
    }

    pub async fn energy_trend(&self) -> TrendDirection {
        energy_trend(&self.ledger().await)
    }
}

impl Tracker<NotificationRecord> {
    pub async fn engagement(&self) -> EngagementStats {
        engagement_stats(&self.ledger().await)
    }

    /// Mark a logged notification as opened
    ///
    /// Fails with [`ForesightError::NotFound`] when no notification has `id`, and with
    /// [`ForesightError::Storage`] when the updated record could not be written.
    pub async fn mark_opened(&self, id: &str, at: DateTime<Utc>) -> Result<()> {
        let mut record = self
            .ledger()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ForesightError::NotFound(id.to_string()))?;
        record.mark_opened(at);
        if !self.log(record).await {
            return Err(ForesightError::Storage(format!(
                "failed to mark notification {} opened",
                id
            )));
        }
        Ok(())
    }
}

/// The three trackers an application works with, built from configuration
#[derive(Clone)]
pub struct Ledgers {
    pub outcomes: Tracker<OutcomeRecord>,
    pub biometrics: Tracker<BiometricRecord>,
    pub notifications: Tracker<NotificationRecord>,
    min_samples: usize,
}

impl Ledgers {
    /// JSON-backed ledgers under the configured data directory
    pub fn open(config: &ForesightConfig) -> Self {
        let file = |name| foresight_paths::ledger_file(&config.data_dir, name);
        debug!(data_dir = %config.data_dir.display(), "Opening ledgers");
        Self {
            outcomes: Tracker::open_json("outcomes", file("outcomes"), config.ledgers.outcomes),
            biometrics: Tracker::open_json(
                "biometrics",
                file("biometrics"),
                config.ledgers.biometrics,
            ),
            notifications: Tracker::open_json(
                "notifications",
                file("notifications"),
                config.ledgers.notifications,
            ),
            min_samples: config.correlation.min_samples,
        }
    }

    /// In-memory ledgers with the configured capacities
    pub fn in_memory(config: &ForesightConfig) -> Self {
        Self {
            outcomes: Tracker::in_memory("outcomes", config.ledgers.outcomes),
            biometrics: Tracker::in_memory("biometrics", config.ledgers.biometrics),
            notifications: Tracker::in_memory("notifications", config.ledgers.notifications),
            min_samples: config.correlation.min_samples,
        }
    }

    /// Biometric correlations using the configured sample floor
    pub async fn biometric_correlations(&self) -> Vec<CorrelationReport> {
        self.biometrics.correlations(self.min_samples).await
    }

    /// Clear every ledger
    pub async fn reset_all(&self) {
        self.outcomes.reset().await;
        self.biometrics.reset().await;
        self.notifications.reset().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CohortStats;
    use crate::types::{BiometricMetric, OutcomeRating};
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};

    struct FailingStore;

    #[async_trait]
    impl LedgerStore<OutcomeRecord> for FailingStore {
        async fn fetch_ledger(&self) -> Result<Vec<OutcomeRecord>> {
            Err(ForesightError::Storage("disk unavailable".into()))
        }

        async fn upsert_record(&self, _record: OutcomeRecord) -> Result<()> {
            Err(ForesightError::Storage("disk unavailable".into()))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<bool> {
            Err(ForesightError::Storage("disk unavailable".into()))
        }

        async fn clear_all(&self) -> Result<()> {
            Err(ForesightError::Storage("disk unavailable".into()))
        }
    }

    /// Serves a fixed set of notifications but rejects every write
    struct ReadOnlyNotifications(Vec<NotificationRecord>);

    #[async_trait]
    impl LedgerStore<NotificationRecord> for ReadOnlyNotifications {
        async fn fetch_ledger(&self) -> Result<Vec<NotificationRecord>> {
            Ok(self.0.clone())
        }

        async fn upsert_record(&self, _record: NotificationRecord) -> Result<()> {
            Err(ForesightError::Storage("read-only filesystem".into()))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<bool> {
            Err(ForesightError::Storage("read-only filesystem".into()))
        }

        async fn clear_all(&self) -> Result<()> {
            Err(ForesightError::Storage("read-only filesystem".into()))
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[tokio::test]
    async fn test_upsert_same_date_replaces() {
        let tracker = Tracker::<OutcomeRecord>::in_memory("outcomes", 90);

        tracker
            .log(OutcomeRecord::new(date(20), 80.0, OutcomeRating::Excellent).with_deals(1))
            .await;
        tracker
            .log(OutcomeRecord::new(date(20), 80.0, OutcomeRating::Good).with_deals(2))
            .await;

        let ledger = tracker.ledger().await;
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].rating, OutcomeRating::Good);
        assert_eq!(ledger[0].deals_closed, Some(2));
    }

    #[tokio::test]
    async fn test_failing_store_degrades_to_empty_analysis() {
        let tracker: Tracker<OutcomeRecord> = Tracker::new("outcomes", Arc::new(FailingStore));

        assert!(tracker.ledger().await.is_empty());
        assert!(!tracker.log(OutcomeRecord::new(date(1), 50.0, OutcomeRating::Good)).await);
        assert!(!tracker.delete("2026-01-01").await);
        tracker.reset().await;

        let analysis = tracker.analyze().await;
        assert_eq!(analysis.days_logged, 0);
        assert_eq!(analysis.guidance.followed, CohortStats::default());
        assert_eq!(analysis.trend, TrendDirection::Stable);

        let metrics = tracker.metrics_as_of(date(31)).await;
        assert_eq!(metrics.days_logged, 0);
        assert!(metrics.best_day.is_none());
    }

    #[tokio::test]
    async fn test_delete_and_reset() {
        let tracker = Tracker::<OutcomeRecord>::in_memory("outcomes", 90);
        tracker
            .log(OutcomeRecord::new(date(1), 60.0, OutcomeRating::Neutral))
            .await;
        tracker
            .log(OutcomeRecord::new(date(2), 70.0, OutcomeRating::Good))
            .await;

        assert!(tracker.delete("2026-01-01").await);
        assert!(!tracker.delete("2026-01-01").await);
        assert_eq!(tracker.ledger().await.len(), 1);

        tracker.reset().await;
        assert!(tracker.ledger().await.is_empty());
    }

    #[tokio::test]
    async fn test_outcome_metrics_as_of() {
        let tracker = Tracker::<OutcomeRecord>::in_memory("outcomes", 90);
        tracker
            .log(
                OutcomeRecord::new(date(30), 88.0, OutcomeRating::Excellent)
                    .with_deals(3)
                    .with_revenue(900.0),
            )
            .await;
        tracker
            .log(OutcomeRecord::new(date(2), 40.0, OutcomeRating::Poor).with_deals(1))
            .await;

        let metrics = tracker.metrics_as_of(date(31)).await;
        assert_eq!(metrics.total_deals, 4);
        assert_eq!(metrics.last_7_days.days, 1);
        assert_eq!(metrics.last_30_days.days, 2);
        assert_eq!(metrics.best_day.map(|r| r.date), Some(date(30)));
    }

    #[tokio::test]
    async fn test_mark_opened() {
        let tracker = Tracker::<NotificationRecord>::in_memory("notifications", 500);
        let sent = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let record = NotificationRecord::sent_at("peak_window", 90.0, sent);
        let id = record.id.clone();
        tracker.log(record).await;

        tracker
            .mark_opened(&id, sent + Duration::minutes(4))
            .await
            .unwrap();

        let ledger = tracker.ledger().await;
        assert_eq!(ledger.len(), 1);
        assert!(ledger[0].opened);

        let stats = tracker.engagement().await;
        assert_eq!(stats.open_rate, 100);
        assert_eq!(stats.median_time_to_open_secs, Some(240));
    }

    #[tokio::test]
    async fn test_mark_opened_unknown_id() {
        let tracker = Tracker::<NotificationRecord>::in_memory("notifications", 500);
        let result = tracker.mark_opened("missing", Utc::now()).await;
        assert!(matches!(result, Err(ForesightError::NotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_mark_opened_reports_failed_write() {
        let sent = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let record = NotificationRecord::sent_at("peak_window", 90.0, sent);
        let id = record.id.clone();
        let tracker: Tracker<NotificationRecord> =
            Tracker::new("notifications", Arc::new(ReadOnlyNotifications(vec![record])));

        let result = tracker.mark_opened(&id, sent + Duration::minutes(2)).await;

        assert!(matches!(result, Err(ForesightError::Storage(_))));
        assert!(!tracker.ledger().await[0].opened);
    }

    #[tokio::test]
    async fn test_ledgers_use_configured_sample_floor() {
        let mut config = ForesightConfig::default();
        config.correlation.min_samples = 5;
        let ledgers = Ledgers::in_memory(&config);

        for (i, (sleep, energy)) in [(5.0, 40.0), (6.0, 55.0), (7.0, 65.0), (8.0, 80.0)]
            .into_iter()
            .enumerate()
        {
            ledgers
                .biometrics
                .log(
                    BiometricRecord::new(date(i as u32 + 1), energy)
                        .with(BiometricMetric::SleepHours, sleep),
                )
                .await;
        }

        assert!(ledgers.biometric_correlations().await.is_empty());
        assert_eq!(ledgers.biometrics.correlations(3).await.len(), 1);

        ledgers.reset_all().await;
        assert!(ledgers.biometrics.ledger().await.is_empty());
    }
}
