//! foresight-core: score-outcome correlation and pattern discovery
//!
//! This crate provides:
//!
//! - **Records** - [`OutcomeRecord`], [`BiometricRecord`] and [`NotificationRecord`]
//! - **Ledgers** - bounded, key-ordered [`Ledger`]s behind the [`LedgerStore`] trait, with
//!   [`InMemoryLedgerStore`] and [`JsonLedgerStore`] implementations
//! - **Engine** - pure analyzers over a [`engine::Series`]: score ranges, tags, binary split,
//!   Pearson correlation, trend and metrics
//! - **Insights** - biometric correlation reports and notification engagement stats
//! - **Trackers** - [`Tracker`] services that log records and degrade gracefully when the
//!   store fails
//!
//! # Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use foresight_core::{ConfigLoader, Ledgers, OutcomeRating, OutcomeRecord};
//!
//! async fn example() -> foresight_core::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let ledgers = Ledgers::open(&config);
//!
//!     let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap_or_default();
//!     let record = OutcomeRecord::new(today, 82.0, OutcomeRating::Good)
//!         .with_tags(["meeting"])
//!         .with_deals(2);
//!     ledgers.outcomes.log(record).await;
//!
//!     let analysis = ledgers.outcomes.analyze().await;
//!     println!("correlation: {}", analysis.correlation);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! LedgerStore ──fetch──▶ Tracker ──snapshot──▶ Series::build ──▶ analyzers ──▶ AnalysisResult
//!      ▲                    │
//!      └──────upsert────────┘
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod insights;
pub mod ledger;
pub mod tracker;
pub mod types;

// Re-export key types for convenience
pub use config::{ConfigLoader, ForesightConfig};
pub use engine::{
    AnalysisResult, BinarySplit, CohortStats, MetricsSummary, RangeBucket, TagAggregate,
    TrendDirection, WindowMetrics, analyze, analyze_outcomes, summarize_metrics,
};
pub use error::{ForesightError, Result};
pub use insights::{
    CorrelationDirection, CorrelationReport, CorrelationStrength, EngagementStats,
    correlation_reports, energy_trend, engagement_stats,
};
pub use ledger::{InMemoryLedgerStore, JsonLedgerStore, Ledger, LedgerEntry, LedgerStore};
pub use tracker::{Ledgers, Tracker};
pub use types::{BiometricMetric, BiometricRecord, NotificationRecord, OutcomeRating, OutcomeRecord};
