//! Analyses specific to the biometric and notification ledgers

mod biometrics;
mod engagement;

pub use biometrics::{
    CorrelationDirection, CorrelationReport, CorrelationStrength, DEFAULT_MIN_SAMPLES,
    HIGH_ENERGY_THRESHOLD, correlation_reports, energy_trend,
};
pub use engagement::{EngagementStats, engagement_stats};
