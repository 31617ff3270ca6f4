//! Layered configuration (user config plus project overlay)

mod loader;
mod types;

pub use loader::{ConfigLoader, PROJECT_CONFIG_DIR_ENV};
pub use types::{
    CorrelationConfig, DEFAULT_NOTIFICATION_CAPACITY, ForesightConfig, LedgerConfig,
    RawCorrelationConfig, RawForesightConfig, RawLedgerConfig,
};
