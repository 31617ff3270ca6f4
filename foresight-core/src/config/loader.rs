use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::{
    CorrelationConfig, ForesightConfig, LedgerConfig, RawCorrelationConfig, RawForesightConfig,
    RawLedgerConfig,
};
use crate::error::{ForesightError, Result};

/// Environment variable overriding the project config directory
pub const PROJECT_CONFIG_DIR_ENV: &str = "FORESIGHT_PROJECT_CONFIG_DIR";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<ForesightConfig> {
        Self::load_layers(&Self::user_config_path(), &Self::project_config_path())
    }

    /// Load a single config file, applying defaults
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_path(path: &Path) -> Result<ForesightConfig> {
        let raw = Self::read_raw(path)?.unwrap_or_default();
        Ok(Self::finalize(raw))
    }

    /// Load a user config and a project overlay from explicit paths
    pub fn load_layers(user_path: &Path, project_path: &Path) -> Result<ForesightConfig> {
        let mut raw = RawForesightConfig::default();

        // Layer 1: User config
        if let Some(user_config) = Self::read_raw(user_path)? {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        if let Some(project_config) = Self::read_raw(project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        Ok(Self::finalize(raw))
    }

    /// User config path (`$XDG_CONFIG_HOME/foresight/config.toml`)
    pub fn user_config_path() -> PathBuf {
        foresight_paths::config_file()
    }

    /// Get project config path
    /// Can be overridden with FORESIGHT_PROJECT_CONFIG_DIR
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var(PROJECT_CONFIG_DIR_ENV) {
            PathBuf::from(dir).join(foresight_paths::CONFIG_FILE)
        } else {
            PathBuf::from(".foresight").join(foresight_paths::CONFIG_FILE)
        }
    }

    fn read_raw(path: &Path) -> Result<Option<RawForesightConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        let raw = toml::from_str(&contents)
            .map_err(|e| ForesightError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Loaded config layer");
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawForesightConfig, overlay: RawForesightConfig) -> RawForesightConfig {
        RawForesightConfig {
            data_dir: overlay.data_dir.or(base.data_dir),
            ledgers: RawLedgerConfig {
                outcomes: overlay.ledgers.outcomes.or(base.ledgers.outcomes),
                biometrics: overlay.ledgers.biometrics.or(base.ledgers.biometrics),
                notifications: overlay.ledgers.notifications.or(base.ledgers.notifications),
            },
            correlation: RawCorrelationConfig {
                min_samples: overlay
                    .correlation
                    .min_samples
                    .or(base.correlation.min_samples),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawForesightConfig) -> ForesightConfig {
        let ledgers = LedgerConfig::default();
        let correlation = CorrelationConfig::default();
        ForesightConfig {
            data_dir: raw.data_dir.unwrap_or_else(foresight_paths::data_dir),
            ledgers: LedgerConfig {
                outcomes: raw.ledgers.outcomes.unwrap_or(ledgers.outcomes),
                biometrics: raw.ledgers.biometrics.unwrap_or(ledgers.biometrics),
                notifications: raw.ledgers.notifications.unwrap_or(ledgers.notifications),
            },
            correlation: CorrelationConfig {
                min_samples: raw.correlation.min_samples.unwrap_or(correlation.min_samples),
            },
        }
    }
}
