//! Success rate by predictor score range

use serde::{Deserialize, Serialize};

use super::series::Series;
use super::stats::success_rate_pct;

/// A fixed predictor score range, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

/// The four score ranges, highest first
pub const SCORE_RANGES: [ScoreRange; 4] = [
    ScoreRange {
        label: "85-100",
        min: 85.0,
        max: 100.0,
    },
    ScoreRange {
        label: "70-84",
        min: 70.0,
        max: 84.0,
    },
    ScoreRange {
        label: "50-69",
        min: 50.0,
        max: 69.0,
    },
    ScoreRange {
        label: "0-49",
        min: 0.0,
        max: 49.0,
    },
];

/// Count and success rate for one score range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBucket {
    pub range: String,
    pub count: usize,
    /// Whole percentage, 0 for an empty range
    pub success_rate: u32,
}

/// Index into [`SCORE_RANGES`] for a score
///
/// Ranges are matched by lower bound, so fractional scores between two listed
/// ranges (e.g. 84.5) fall into the lower one, scores above 100 fall into the
/// top range and scores below 0 into the bottom range.
pub fn range_index(score: f64) -> usize {
    SCORE_RANGES
        .iter()
        .position(|range| score >= range.min)
        .unwrap_or(SCORE_RANGES.len() - 1)
}

/// Partition a series into the fixed score ranges
///
/// Always returns all four ranges, highest first. Every observation lands in
/// exactly one range.
pub fn range_buckets(series: &Series) -> Vec<RangeBucket> {
    let mut counts = [(0usize, 0usize); SCORE_RANGES.len()];
    for observation in series.observations() {
        let (count, successes) = &mut counts[range_index(observation.predictor)];
        *count += 1;
        if observation.success {
            *successes += 1;
        }
    }

    SCORE_RANGES
        .iter()
        .zip(counts)
        .map(|(range, (count, successes))| RangeBucket {
            range: range.label.to_string(),
            count,
            success_rate: success_rate_pct(successes, count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutcomeRating, OutcomeRecord};
    use chrono::{Duration, NaiveDate};

    fn series(entries: &[(f64, OutcomeRating)]) -> Series {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let records: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, (score, rating))| {
                OutcomeRecord::new(start + Duration::days(i as i64), *score, *rating)
            })
            .collect();
        Series::build(&records, |r| r.rating.is_success())
    }

    fn bucket<'a>(buckets: &'a [RangeBucket], label: &str) -> &'a RangeBucket {
        buckets.iter().find(|b| b.range == label).unwrap()
    }

    #[test]
    fn test_ranges_by_score() {
        let buckets = range_buckets(&series(&[
            (90.0, OutcomeRating::Excellent),
            (85.0, OutcomeRating::Good),
            (45.0, OutcomeRating::Poor),
        ]));

        let top = bucket(&buckets, "85-100");
        assert_eq!(top.count, 2);
        assert_eq!(top.success_rate, 100);

        let bottom = bucket(&buckets, "0-49");
        assert_eq!(bottom.count, 1);
        assert_eq!(bottom.success_rate, 0);
    }

    #[test]
    fn test_empty_ranges_have_zero_rate() {
        let buckets = range_buckets(&series(&[(90.0, OutcomeRating::Excellent)]));
        assert_eq!(buckets.len(), 4);
        let middle = bucket(&buckets, "50-69");
        assert_eq!(middle.count, 0);
        assert_eq!(middle.success_rate, 0);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(range_index(100.0), 0);
        assert_eq!(range_index(85.0), 0);
        assert_eq!(range_index(84.0), 1);
        assert_eq!(range_index(70.0), 1);
        assert_eq!(range_index(69.0), 2);
        assert_eq!(range_index(50.0), 2);
        assert_eq!(range_index(49.0), 3);
        assert_eq!(range_index(0.0), 3);
    }

    #[test]
    fn test_out_of_range_scores_land_in_end_ranges() {
        assert_eq!(range_index(130.0), 0);
        assert_eq!(range_index(84.5), 1);
        assert_eq!(range_index(-5.0), 3);
    }

    #[test]
    fn test_counts_cover_every_observation() {
        let entries: Vec<_> = (0..=100)
            .map(|score| {
                let rating = OutcomeRating::ALL[score as usize % 5];
                (score as f64, rating)
            })
            .collect();
        let s = series(&entries);
        let buckets = range_buckets(&s);

        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, s.len());
        assert_eq!(bucket(&buckets, "85-100").count, 16);
        assert_eq!(bucket(&buckets, "70-84").count, 15);
        assert_eq!(bucket(&buckets, "50-69").count, 20);
        assert_eq!(bucket(&buckets, "0-49").count, 50);
    }

    #[test]
    fn test_mixed_success_rate_rounds() {
        let buckets = range_buckets(&series(&[
            (75.0, OutcomeRating::Good),
            (72.0, OutcomeRating::Neutral),
            (80.0, OutcomeRating::Excellent),
        ]));
        assert_eq!(bucket(&buckets, "70-84").success_rate, 67);
    }
}
