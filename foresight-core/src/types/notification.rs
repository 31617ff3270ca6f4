//! Notification history: what was sent, at which score, and whether it landed

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::SeriesSource;
use crate::ledger::LedgerEntry;

/// A single delivered notification and its engagement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    /// Unique identifier for this notification
    pub id: String,
    /// Notification category (e.g. "peak_window", "recovery_nudge")
    pub kind: String,
    /// When the notification was delivered
    pub sent_at: DateTime<Utc>,
    /// Predictor score that triggered the notification
    pub score_at_send: f64,
    #[serde(default)]
    pub opened: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<DateTime<Utc>>,
    /// Whether the suggested action was taken after opening
    #[serde(default)]
    pub acted_on: bool,
}

impl NotificationRecord {
    /// Create a notification sent now
    pub fn new(kind: impl Into<String>, score_at_send: f64) -> Self {
        Self::sent_at(kind, score_at_send, Utc::now())
    }

    /// Create a notification with an explicit send time
    pub fn sent_at(kind: impl Into<String>, score_at_send: f64, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: kind.into(),
            sent_at,
            score_at_send,
            opened: false,
            opened_at: None,
            acted_on: false,
        }
    }

    /// Record that the notification was opened
    pub fn mark_opened(&mut self, at: DateTime<Utc>) {
        self.opened = true;
        self.opened_at = Some(at);
    }

    /// Seconds between delivery and open, when the open time is consistent
    pub fn seconds_to_open(&self) -> Option<i64> {
        let opened_at = self.opened_at.filter(|_| self.opened)?;
        let elapsed = opened_at.signed_duration_since(self.sent_at).num_seconds();
        (elapsed >= 0).then_some(elapsed)
    }
}

impl LedgerEntry for NotificationRecord {
    type Key = (DateTime<Utc>, String);

    fn key(&self) -> Self::Key {
        (self.sent_at, self.id.clone())
    }

    fn id(&self) -> String {
        self.id.clone()
    }
}

impl SeriesSource for NotificationRecord {
    fn date(&self) -> NaiveDate {
        self.sent_at.date_naive()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.sent_at
    }

    fn predictor(&self) -> f64 {
        self.score_at_send
    }

    fn outcome_value(&self) -> f64 {
        if self.opened { 100.0 } else { 0.0 }
    }

    fn tags(&self) -> Vec<String> {
        vec![self.kind.clone()]
    }

    fn flag(&self) -> bool {
        self.acted_on
    }
}
