//! Success rates for the two cohorts of a binary flag

use serde::{Deserialize, Serialize};

use super::series::Series;
use super::stats::success_rate_pct;

/// Size and success rate of one cohort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortStats {
    pub count: usize,
    /// Whole percentage, 0 for an empty cohort
    pub success_rate: u32,
}

impl CohortStats {
    fn from_counts(successes: usize, count: usize) -> Self {
        Self {
            count,
            success_rate: success_rate_pct(successes, count),
        }
    }
}

/// Records where the flag was set versus not set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySplit {
    pub followed: CohortStats,
    pub ignored: CohortStats,
}

/// Split a series by its binary flag
///
/// Both cohorts are always returned, even when one is empty.
pub fn binary_split(series: &Series) -> BinarySplit {
    let (mut followed, mut followed_wins) = (0, 0);
    let (mut ignored, mut ignored_wins) = (0, 0);
    for observation in series.observations() {
        if observation.flag {
            followed += 1;
            followed_wins += usize::from(observation.success);
        } else {
            ignored += 1;
            ignored_wins += usize::from(observation.success);
        }
    }

    BinarySplit {
        followed: CohortStats::from_counts(followed_wins, followed),
        ignored: CohortStats::from_counts(ignored_wins, ignored),
    }
}
