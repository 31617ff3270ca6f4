//! Projection of ledger records into paired analysis series

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A record that can be projected into an analysis series
pub trait SeriesSource {
    /// Calendar day the record belongs to
    fn date(&self) -> NaiveDate;

    /// Ordering key within the series; defaults to midnight UTC of [`date`](Self::date)
    fn timestamp(&self) -> DateTime<Utc> {
        self.date().and_time(NaiveTime::MIN).and_utc()
    }

    /// Predictor value (nominally 0-100)
    fn predictor(&self) -> f64;

    /// Numeric projection of the outcome, used for correlation
    fn outcome_value(&self) -> f64;

    /// Category labels attached to the record
    fn tags(&self) -> Vec<String> {
        Vec::new()
    }

    /// Binary cohort flag
    fn flag(&self) -> bool {
        false
    }
}

/// One record as seen by the analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub predictor: f64,
    pub outcome: f64,
    /// Result of the success predicate for this record
    pub success: bool,
    /// Sorted, de-duplicated labels
    pub tags: Vec<String>,
    pub flag: bool,
}

/// Observations ordered by timestamp, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    observations: Vec<Observation>,
    skipped: usize,
}

impl Series {
    /// Build a series from ledger records and a success predicate
    ///
    /// Records whose predictor is not a finite number are skipped. Scores
    /// outside 0-100 are kept as-is.
    pub fn build<R, F>(records: &[R], is_success: F) -> Self
    where
        R: SeriesSource,
        F: Fn(&R) -> bool,
    {
        let mut skipped = 0;
        let mut keyed: Vec<(DateTime<Utc>, Observation)> = records
            .iter()
            .filter_map(|record| {
                let predictor = record.predictor();
                if !predictor.is_finite() {
                    skipped += 1;
                    return None;
                }
                let mut tags = record.tags();
                tags.sort();
                tags.dedup();
                Some((
                    record.timestamp(),
                    Observation {
                        date: record.date(),
                        predictor,
                        outcome: record.outcome_value(),
                        success: is_success(record),
                        tags,
                        flag: record.flag(),
                    },
                ))
            })
            .collect();

        if skipped > 0 {
            warn!(skipped, "Skipped records with non-finite predictor scores");
        }

        // Stable: records sharing a timestamp keep their ledger order
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        let observations = keyed.into_iter().map(|(_, o)| o).collect();

        Self {
            observations,
            skipped,
        }
    }

    /// Observations, newest first
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Number of records left out of the series
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Predictor values in series order
    pub fn predictors(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.predictor).collect()
    }

    /// Outcome values in series order
    pub fn outcomes(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.outcome).collect()
    }

    /// Count of successful observations
    pub fn successes(&self) -> usize {
        self.observations.iter().filter(|o| o.success).count()
    }
}
