//! Notification engagement analytics

use std::collections::BTreeMap;

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::stats::{fraction, median, success_rate_pct};
use crate::engine::{
    RangeBucket, Series, TagAggregate, TrendDirection, range_buckets, tag_aggregates, trend,
};
use crate::types::NotificationRecord;

/// Open and action rates across the notification history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementStats {
    pub total_sent: usize,
    pub total_opened: usize,
    /// Whole percentage of sent notifications that were opened
    pub open_rate: u32,
    /// Whole percentage of sent notifications that were acted on
    pub acted_rate: u32,
    /// Open rate per notification kind
    pub by_kind: Vec<TagAggregate>,
    /// Open rate per score range at send time
    pub by_score_range: Vec<RangeBucket>,
    /// UTC hour of day with the best open rate
    pub best_hour: Option<u32>,
    pub median_time_to_open_secs: Option<i64>,
    pub trend: TrendDirection,
}

/// UTC send hour with the highest open rate; ties go to the earlier hour
fn best_hour(records: &[NotificationRecord]) -> Option<u32> {
    let mut by_hour: BTreeMap<u32, (usize, usize)> = BTreeMap::new();
    for record in records {
        let (sent, opened) = by_hour.entry(record.sent_at.hour()).or_default();
        *sent += 1;
        if record.opened {
            *opened += 1;
        }
    }

    let mut best: Option<(u32, f64)> = None;
    for (hour, (sent, opened)) in by_hour {
        let rate = fraction(opened, sent);
        if best.is_none_or(|(_, top)| rate > top) {
            best = Some((hour, rate));
        }
    }
    best.map(|(hour, _)| hour)
}

/// Summarize engagement over a notification ledger
///
/// An opened notification counts as a success. An empty history yields
/// zero counts, empty breakdowns and a stable trend.
pub fn engagement_stats(records: &[NotificationRecord]) -> EngagementStats {
    if records.is_empty() {
        return EngagementStats::default();
    }

    let series = Series::build(records, |r| r.opened);
    let total_sent = records.len();
    let total_opened = records.iter().filter(|r| r.opened).count();
    let acted = records.iter().filter(|r| r.acted_on).count();
    let open_times: Vec<i64> = records
        .iter()
        .filter_map(NotificationRecord::seconds_to_open)
        .collect();

    debug!(
        total_sent,
        total_opened,
        acted,
        "Computed notification engagement"
    );

    EngagementStats {
        total_sent,
        total_opened,
        open_rate: success_rate_pct(total_opened, total_sent),
        acted_rate: success_rate_pct(acted, total_sent),
        by_kind: tag_aggregates(&series),
        by_score_range: range_buckets(&series),
        best_hour: best_hour(records),
        median_time_to_open_secs: median(&open_times),
        trend: trend(&series),
    }
}
