//! Daily biometric readings paired with the day's energy score

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::SeriesSource;
use crate::ledger::LedgerEntry;

/// Biometric readings for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricRecord {
    /// Calendar day (upsert key)
    pub date: NaiveDate,
    /// Energy score produced for the day, nominally 0-100
    pub energy_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Heart rate variability in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hrv_ms: Option<f64>,
    /// Resting heart rate in beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_minutes: Option<u32>,
    pub logged_at: DateTime<Utc>,
}

impl BiometricRecord {
    /// Create a record with only the energy score set
    pub fn new(date: NaiveDate, energy_score: f64) -> Self {
        Self {
            date,
            energy_score,
            sleep_hours: None,
            hrv_ms: None,
            resting_heart_rate: None,
            steps: None,
            active_minutes: None,
            logged_at: Utc::now(),
        }
    }

    /// Set a metric by kind
    pub fn with(mut self, metric: BiometricMetric, value: f64) -> Self {
        match metric {
            BiometricMetric::SleepHours => self.sleep_hours = Some(value),
            BiometricMetric::Hrv => self.hrv_ms = Some(value),
            BiometricMetric::RestingHeartRate => self.resting_heart_rate = Some(value),
            BiometricMetric::Steps => self.steps = Some(value.max(0.0).round() as u32),
            BiometricMetric::ActiveMinutes => {
                self.active_minutes = Some(value.max(0.0).round() as u32)
            }
        }
        self
    }

    /// Reading for a metric, if one was recorded
    pub fn metric(&self, metric: BiometricMetric) -> Option<f64> {
        match metric {
            BiometricMetric::SleepHours => self.sleep_hours,
            BiometricMetric::Hrv => self.hrv_ms,
            BiometricMetric::RestingHeartRate => self.resting_heart_rate,
            BiometricMetric::Steps => self.steps.map(f64::from),
            BiometricMetric::ActiveMinutes => self.active_minutes.map(f64::from),
        }
    }
}

/// Biometric readings that can be correlated against the energy score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiometricMetric {
    SleepHours,
    Hrv,
    RestingHeartRate,
    Steps,
    ActiveMinutes,
}

impl BiometricMetric {
    pub const ALL: [BiometricMetric; 5] = [
        Self::SleepHours,
        Self::Hrv,
        Self::RestingHeartRate,
        Self::Steps,
        Self::ActiveMinutes,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::SleepHours => "Sleep duration",
            Self::Hrv => "Heart rate variability",
            Self::RestingHeartRate => "Resting heart rate",
            Self::Steps => "Steps",
            Self::ActiveMinutes => "Active minutes",
        }
    }
}

impl LedgerEntry for BiometricRecord {
    type Key = NaiveDate;

    fn key(&self) -> NaiveDate {
        self.date
    }

    fn id(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl SeriesSource for BiometricRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn predictor(&self) -> f64 {
        self.energy_score
    }

    fn outcome_value(&self) -> f64 {
        self.energy_score
    }
}
