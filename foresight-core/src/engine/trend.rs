//! Recent-versus-previous window trend classification

use serde::{Deserialize, Serialize};

use super::series::{Observation, Series};
use super::stats::fraction;

/// Number of records in each comparison window
pub const TREND_WINDOW: usize = 7;

/// Minimum change in success fraction (10 percentage points) that counts as a trend
pub const TREND_THRESHOLD: f64 = 0.1;

/// Direction of the success rate over the two most recent windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    #[default]
    Stable,
    Declining,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a change in success fraction
pub fn classify_delta(delta: f64) -> TrendDirection {
    if delta > TREND_THRESHOLD {
        TrendDirection::Improving
    } else if delta < -TREND_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

/// Compare the newest window against the one before it
///
/// Needs two full windows; anything shorter is stable.
pub fn trend(series: &Series) -> TrendDirection {
    let observations = series.observations();
    if observations.len() < TREND_WINDOW * 2 {
        return TrendDirection::Stable;
    }

    let window_rate = |window: &[Observation]| {
        fraction(window.iter().filter(|o| o.success).count(), window.len())
    };
    let recent = window_rate(&observations[..TREND_WINDOW]);
    let previous = window_rate(&observations[TREND_WINDOW..TREND_WINDOW * 2]);

    classify_delta(recent - previous)
}
