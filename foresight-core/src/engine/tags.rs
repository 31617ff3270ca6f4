//! Per-tag averages and success rates

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::series::Series;
use super::stats::success_rate_pct;

/// Aggregate for every record carrying one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAggregate {
    pub tag: String,
    /// Mean predictor score, rounded to a whole number
    pub avg_predictor_score: i64,
    /// Whole percentage of successful records
    pub success_rate: u32,
    pub total_attempts: usize,
}

#[derive(Default)]
struct TagAccumulator {
    score_sum: f64,
    successes: usize,
    total: usize,
}

/// Aggregate a series by tag
///
/// Sorted by success rate descending; ties go to the tag with more attempts,
/// then to the alphabetically first tag.
pub fn tag_aggregates(series: &Series) -> Vec<TagAggregate> {
    let mut by_tag: BTreeMap<&str, TagAccumulator> = BTreeMap::new();
    for observation in series.observations() {
        for tag in &observation.tags {
            let acc = by_tag.entry(tag.as_str()).or_default();
            acc.score_sum += observation.predictor;
            acc.total += 1;
            if observation.success {
                acc.successes += 1;
            }
        }
    }

    let mut aggregates: Vec<TagAggregate> = by_tag
        .into_iter()
        .map(|(tag, acc)| TagAggregate {
            tag: tag.to_string(),
            avg_predictor_score: (acc.score_sum / acc.total as f64).round() as i64,
            success_rate: success_rate_pct(acc.successes, acc.total),
            total_attempts: acc.total,
        })
        .collect();

    aggregates.sort_by(|a, b| {
        b.success_rate
            .cmp(&a.success_rate)
            .then_with(|| b.total_attempts.cmp(&a.total_attempts))
            .then_with(|| a.tag.cmp(&b.tag))
    });
    aggregates
}
