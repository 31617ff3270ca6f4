//! Composite analysis over one ledger snapshot

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::buckets::{RangeBucket, range_buckets};
use super::correlation::correlation;
use super::series::{Series, SeriesSource};
use super::split::{BinarySplit, binary_split};
use super::tags::{TagAggregate, tag_aggregates};
use super::trend::{TrendDirection, trend};
use crate::types::OutcomeRecord;

/// Every analyzer's output for one snapshot
///
/// Recomputed on every call; never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Records in the ledger snapshot
    pub total_records: usize,
    /// Records that made it into the series
    pub days_logged: usize,
    pub score_ranges: Vec<RangeBucket>,
    pub tags: Vec<TagAggregate>,
    pub guidance: BinarySplit,
    /// Pearson's r between predictor and outcome, two decimals
    pub correlation: f64,
    pub trend: TrendDirection,
}

/// Run every analyzer over the same snapshot
///
/// An empty series yields the zero state: no ranges, no tags, empty cohorts,
/// zero correlation and a stable trend.
pub fn analyze<R, F>(records: &[R], is_success: F) -> AnalysisResult
where
    R: SeriesSource,
    F: Fn(&R) -> bool,
{
    let series = Series::build(records, is_success);
    debug!(
        records = records.len(),
        observations = series.len(),
        "Analyzing ledger snapshot"
    );

    if series.is_empty() {
        return AnalysisResult {
            total_records: records.len(),
            ..Default::default()
        };
    }

    AnalysisResult {
        total_records: records.len(),
        days_logged: series.len(),
        score_ranges: range_buckets(&series),
        tags: tag_aggregates(&series),
        guidance: binary_split(&series),
        correlation: correlation(&series),
        trend: trend(&series),
    }
}

/// Analyze an outcome ledger, counting excellent and good days as wins
pub fn analyze_outcomes(records: &[OutcomeRecord]) -> AnalysisResult {
    analyze(records, |r| r.rating.is_success())
}
