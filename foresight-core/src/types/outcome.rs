//! Daily outcome records: a predicted score next to what actually happened

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::SeriesSource;
use crate::ledger::LedgerEntry;

/// User-reported outcome on a fixed five-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeRating {
    Excellent,
    Good,
    Neutral,
    Poor,
    Terrible,
}

impl OutcomeRating {
    /// All ratings, best first
    pub const ALL: [OutcomeRating; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Neutral,
        Self::Poor,
        Self::Terrible,
    ];

    /// Numeric equivalent used when correlating against predictor scores
    pub fn numeric(self) -> f64 {
        match self {
            Self::Excellent => 100.0,
            Self::Good => 75.0,
            Self::Neutral => 50.0,
            Self::Poor => 25.0,
            Self::Terrible => 0.0,
        }
    }

    /// Ordinal rank, 5 for excellent down to 1 for terrible
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Neutral => 3,
            Self::Poor => 2,
            Self::Terrible => 1,
        }
    }

    /// Excellent and good days count as wins
    pub fn is_success(self) -> bool {
        matches!(self, Self::Excellent | Self::Good)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Poor => "poor",
            Self::Terrible => "terrible",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rating| rating.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for OutcomeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged day in the outcome ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Calendar day this record describes (upsert key)
    pub date: NaiveDate,
    /// Score the predictor produced for this day, nominally 0-100
    pub predictor_score: f64,
    /// How the day actually went
    pub rating: OutcomeRating,
    /// What happened that day (activity types)
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Whether the day's guidance was followed
    #[serde(default)]
    pub followed_guidance: bool,
    /// Successful outcomes closed that day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deals_closed: Option<u32>,
    /// Monetary amount attributed to the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the record was written
    pub logged_at: DateTime<Utc>,
}

impl OutcomeRecord {
    /// Create a record with no tags, guidance not followed and no auxiliary metrics
    pub fn new(date: NaiveDate, predictor_score: f64, rating: OutcomeRating) -> Self {
        Self {
            date,
            predictor_score,
            rating,
            tags: BTreeSet::new(),
            followed_guidance: false,
            deals_closed: None,
            revenue: None,
            notes: None,
            logged_at: Utc::now(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_guidance(mut self, followed: bool) -> Self {
        self.followed_guidance = followed;
        self
    }

    pub fn with_deals(mut self, deals: u32) -> Self {
        self.deals_closed = Some(deals);
        self
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl LedgerEntry for OutcomeRecord {
    type Key = NaiveDate;

    fn key(&self) -> NaiveDate {
        self.date
    }

    fn id(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl SeriesSource for OutcomeRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn predictor(&self) -> f64 {
        self.predictor_score
    }

    fn outcome_value(&self) -> f64 {
        self.rating.numeric()
    }

    fn tags(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }

    fn flag(&self) -> bool {
        self.followed_guidance
    }
}
