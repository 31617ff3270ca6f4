//! Score-outcome correlation and pattern discovery
//!
//! Every analyzer is a pure function over a [`Series`], which is built once
//! from an in-memory ledger snapshot. Analyzers never mutate the snapshot and
//! never perform I/O; the only asynchronous boundary is the ledger store.

mod analysis;
mod buckets;
mod correlation;
mod metrics;
mod series;
mod split;
pub mod stats;
mod tags;
mod trend;

pub use analysis::{AnalysisResult, analyze, analyze_outcomes};
pub use buckets::{RangeBucket, SCORE_RANGES, ScoreRange, range_buckets, range_index};
pub use correlation::{correlation, pearson};
pub use metrics::{MetricsSummary, WindowMetrics, best_record, summarize_metrics};
pub use series::{Observation, Series, SeriesSource};
pub use split::{BinarySplit, CohortStats, binary_split};
pub use tags::{TagAggregate, tag_aggregates};
pub use trend::{TREND_THRESHOLD, TREND_WINDOW, TrendDirection, classify_delta, trend};
