//! Running totals, trailing windows and the best logged day

use std::cmp::Ordering;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::stats::mean;
use crate::types::OutcomeRecord;

/// Totals for a trailing window of days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowMetrics {
    /// Records inside the window
    pub days: usize,
    pub deals: u64,
    pub revenue: f64,
    /// Mean predictor score, 0 for an empty window
    pub average_score: f64,
}

/// Totals over the whole outcome ledger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub days_logged: usize,
    pub total_deals: u64,
    pub total_revenue: f64,
    pub average_score: f64,
    pub last_7_days: WindowMetrics,
    pub last_30_days: WindowMetrics,
    pub best_day: Option<OutcomeRecord>,
}

fn window<'a, I>(records: I) -> WindowMetrics
where
    I: IntoIterator<Item = &'a OutcomeRecord>,
{
    let mut metrics = WindowMetrics::default();
    let mut scores = Vec::new();
    for record in records {
        metrics.days += 1;
        metrics.deals += u64::from(record.deals_closed.unwrap_or(0));
        metrics.revenue += record.revenue.unwrap_or(0.0);
        if record.predictor_score.is_finite() {
            scores.push(record.predictor_score);
        }
    }
    metrics.average_score = mean(&scores).unwrap_or(0.0);
    metrics
}

fn trailing(records: &[OutcomeRecord], today: NaiveDate, days: i64) -> WindowMetrics {
    let cutoff = today - Duration::days(days);
    window(records.iter().filter(|r| r.date >= cutoff))
}

/// Ordering used to pick the best day: rating, then deals, then revenue, then
/// the more recent date
fn compare_best(a: &OutcomeRecord, b: &OutcomeRecord) -> Ordering {
    a.rating
        .ordinal()
        .cmp(&b.rating.ordinal())
        .then_with(|| a.deals_closed.unwrap_or(0).cmp(&b.deals_closed.unwrap_or(0)))
        .then_with(|| {
            a.revenue
                .unwrap_or(0.0)
                .total_cmp(&b.revenue.unwrap_or(0.0))
        })
        .then_with(|| a.date.cmp(&b.date))
}

/// The single best record, independent of ledger order
pub fn best_record(records: &[OutcomeRecord]) -> Option<&OutcomeRecord> {
    records.iter().max_by(|a, b| compare_best(a, b))
}

/// Summarize the ledger relative to `today`
///
/// Windows include every record dated on or after `today - 7` and
/// `today - 30` days respectively.
pub fn summarize_metrics(records: &[OutcomeRecord], today: NaiveDate) -> MetricsSummary {
    let all = window(records);
    MetricsSummary {
        days_logged: all.days,
        total_deals: all.deals,
        total_revenue: all.revenue,
        average_score: all.average_score,
        last_7_days: trailing(records, today, 7),
        last_30_days: trailing(records, today, 30),
        best_day: best_record(records).cloned(),
    }
}
