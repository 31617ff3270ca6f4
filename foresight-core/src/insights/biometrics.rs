//! Which biometric readings move with the energy score

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::engine::stats::round_to;
use crate::engine::{Series, TrendDirection, pearson, trend};
use crate::types::{BiometricMetric, BiometricRecord};

/// Energy score at or above which a day counts as a high-energy day
pub const HIGH_ENERGY_THRESHOLD: f64 = 70.0;

/// Default number of paired days before a metric is reported
pub const DEFAULT_MIN_SAMPLES: usize = 3;

/// Magnitude class of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    Negligible,
}

impl CorrelationStrength {
    pub fn classify(r: f64) -> Self {
        let magnitude = r.abs();
        if magnitude >= 0.7 {
            Self::Strong
        } else if magnitude >= 0.4 {
            Self::Moderate
        } else if magnitude >= 0.2 {
            Self::Weak
        } else {
            Self::Negligible
        }
    }
}

/// Sign of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationDirection {
    Positive,
    Negative,
    None,
}

impl CorrelationDirection {
    pub fn classify(r: f64) -> Self {
        if r > 0.0 {
            Self::Positive
        } else if r < 0.0 {
            Self::Negative
        } else {
            Self::None
        }
    }
}

/// Correlation of one biometric reading against the energy score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub metric: BiometricMetric,
    pub label: String,
    /// Pearson's r, two decimals
    pub coefficient: f64,
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
    /// Days with both the reading and a finite energy score
    pub sample_size: usize,
}

fn paired(records: &[BiometricRecord], metric: BiometricMetric) -> (Vec<f64>, Vec<f64>) {
    records
        .iter()
        .filter_map(|record| {
            let value = record.metric(metric)?;
            (value.is_finite() && record.energy_score.is_finite())
                .then_some((value, record.energy_score))
        })
        .unzip()
}

/// Correlate every biometric metric with the energy score
///
/// Metrics with fewer than `min_samples` paired days are left out. Reports are
/// ordered by coefficient magnitude, strongest first.
pub fn correlation_reports(
    records: &[BiometricRecord],
    min_samples: usize,
) -> Vec<CorrelationReport> {
    let mut reports: Vec<CorrelationReport> = BiometricMetric::ALL
        .into_iter()
        .filter_map(|metric| {
            let (values, energy) = paired(records, metric);
            if values.len() < min_samples.max(2) {
                return None;
            }
            let coefficient = round_to(pearson(&values, &energy), 2);
            Some(CorrelationReport {
                metric,
                label: metric.label().to_string(),
                coefficient,
                strength: CorrelationStrength::classify(coefficient),
                direction: CorrelationDirection::classify(coefficient),
                sample_size: values.len(),
            })
        })
        .collect();

    reports.sort_by(|a, b| {
        b.coefficient
            .abs()
            .partial_cmp(&a.coefficient.abs())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.metric.cmp(&b.metric))
    });
    reports
}

/// Direction of high-energy days over the two most recent weeks of records
pub fn energy_trend(records: &[BiometricRecord]) -> TrendDirection {
    let series = Series::build(records, |r| r.energy_score >= HIGH_ENERGY_THRESHOLD);
    trend(&series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn day(i: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap() + Duration::days(i)
    }

    fn sleep_days() -> Vec<BiometricRecord> {
        [(5.0, 40.0), (6.0, 55.0), (7.0, 65.0), (8.0, 80.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (sleep, energy))| {
                BiometricRecord::new(day(i as i64), energy).with(BiometricMetric::SleepHours, sleep)
            })
            .collect()
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(CorrelationStrength::classify(0.7), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::classify(-0.69), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::classify(0.4), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::classify(0.2), CorrelationStrength::Weak);
        assert_eq!(CorrelationStrength::classify(0.19), CorrelationStrength::Negligible);
    }

    #[test]
    fn test_direction() {
        assert_eq!(CorrelationDirection::classify(0.3), CorrelationDirection::Positive);
        assert_eq!(CorrelationDirection::classify(-0.3), CorrelationDirection::Negative);
        assert_eq!(CorrelationDirection::classify(0.0), CorrelationDirection::None);
    }

    #[test]
    fn test_sleep_tracks_energy() {
        let reports = correlation_reports(&sleep_days(), DEFAULT_MIN_SAMPLES);

        assert_eq!(reports.len(), 1);
        let sleep = &reports[0];
        assert_eq!(sleep.metric, BiometricMetric::SleepHours);
        assert_eq!(sleep.sample_size, 4);
        assert!(sleep.coefficient > 0.9);
        assert_eq!(sleep.strength, CorrelationStrength::Strong);
        assert_eq!(sleep.direction, CorrelationDirection::Positive);
    }

    #[test]
    fn test_below_min_samples_is_skipped() {
        let records = sleep_days();
        assert!(correlation_reports(&records[..2], 3).is_empty());
        assert_eq!(correlation_reports(&records[..3], 3).len(), 1);
    }

    #[test]
    fn test_single_sample_never_reported() {
        let records = sleep_days();
        assert!(correlation_reports(&records[..1], 0).is_empty());
    }

    #[test]
    fn test_sorted_by_magnitude() {
        let records: Vec<_> = sleep_days()
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                // Resting heart rate falls as energy rises; steps barely vary
                let rhr = 70.0 - record.energy_score / 10.0;
                let steps = [5000.0, 5100.0, 4900.0, 5000.0][i];
                record
                    .with(BiometricMetric::RestingHeartRate, rhr)
                    .with(BiometricMetric::Steps, steps)
            })
            .collect();
        let reports = correlation_reports(&records, 3);

        let metrics: Vec<_> = reports.iter().map(|r| r.metric).collect();
        // Sleep rounds to 1.00 and heart rate to -1.00; equal magnitudes keep metric order
        assert_eq!(
            metrics,
            vec![
                BiometricMetric::SleepHours,
                BiometricMetric::RestingHeartRate,
                BiometricMetric::Steps,
            ]
        );
        assert_eq!(reports[1].direction, CorrelationDirection::Negative);
        assert_eq!(reports[2].strength, CorrelationStrength::Weak);
    }

    #[test]
    fn test_constant_metric_has_no_direction() {
        let records: Vec<_> = sleep_days()
            .into_iter()
            .map(|r| r.with(BiometricMetric::Hrv, 55.0))
            .collect();
        let reports = correlation_reports(&records, 3);
        let hrv = reports
            .iter()
            .find(|r| r.metric == BiometricMetric::Hrv)
            .unwrap();
        assert_eq!(hrv.coefficient, 0.0);
        assert_eq!(hrv.strength, CorrelationStrength::Negligible);
        assert_eq!(hrv.direction, CorrelationDirection::None);
    }

    #[test]
    fn test_energy_trend_improving() {
        let records: Vec<_> = (0..14)
            .map(|i| BiometricRecord::new(day(i), if i >= 7 { 85.0 } else { 40.0 }))
            .collect();
        assert_eq!(energy_trend(&records), TrendDirection::Improving);
    }

    #[test]
    fn test_energy_trend_needs_two_weeks() {
        let records: Vec<_> = (0..13)
            .map(|i| BiometricRecord::new(day(i), if i >= 6 { 85.0 } else { 40.0 }))
            .collect();
        assert_eq!(energy_trend(&records), TrendDirection::Stable);
    }
}
