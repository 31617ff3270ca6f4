use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::insights::DEFAULT_MIN_SAMPLES;
use crate::ledger::DEFAULT_CAPACITY;

/// Default capacity of the notification history
pub const DEFAULT_NOTIFICATION_CAPACITY: usize = 500;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawForesightConfig {
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub ledgers: RawLedgerConfig,

    #[serde(default)]
    pub correlation: RawCorrelationConfig,
}

/// Ledger capacities as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawLedgerConfig {
    pub outcomes: Option<usize>,
    pub biometrics: Option<usize>,
    pub notifications: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCorrelationConfig {
    pub min_samples: Option<usize>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForesightConfig {
    /// Directory holding one JSON file per ledger
    pub data_dir: PathBuf,

    #[serde(default)]
    pub ledgers: LedgerConfig,

    #[serde(default)]
    pub correlation: CorrelationConfig,
}

impl Default for ForesightConfig {
    fn default() -> Self {
        Self {
            data_dir: foresight_paths::data_dir(),
            ledgers: LedgerConfig::default(),
            correlation: CorrelationConfig::default(),
        }
    }
}

/// Maximum number of records each ledger keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub outcomes: usize,
    pub biometrics: usize,
    pub notifications: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            outcomes: DEFAULT_CAPACITY,
            biometrics: DEFAULT_CAPACITY,
            notifications: DEFAULT_NOTIFICATION_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Paired days required before a biometric metric is reported
    pub min_samples: usize,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
        }
    }
}
