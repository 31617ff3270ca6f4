//! XDG Base Directory paths for foresight.
//!
//! Ledgers and config files live under XDG paths on every platform so that a
//! single device keeps one predictable location per ledger.

use std::path::PathBuf;

/// Name of the user-level configuration file inside [`config_dir`].
pub const CONFIG_FILE: &str = "config.toml";

/// Get the foresight config directory.
///
/// Returns `$XDG_CONFIG_HOME/foresight` if set, otherwise `~/.config/foresight`.
///
/// # Examples
///
/// ```
/// use foresight_paths::config_dir;
///
/// let config = config_dir();
/// let file = config.join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("foresight")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/foresight")
    } else {
        PathBuf::from(".config/foresight")
    }
}

/// Get the foresight data directory.
///
/// Returns `$XDG_DATA_HOME/foresight` if set, otherwise `~/.local/share/foresight`.
/// This is where the ledger files are stored.
///
/// # Examples
///
/// ```
/// use foresight_paths::data_dir;
///
/// let data = data_dir();
/// let outcomes = data.join("outcomes.json");
/// ```
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("foresight")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share/foresight")
    } else {
        PathBuf::from(".local/share/foresight")
    }
}

/// Path of the user-level config file.
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Path of a named ledger file (`<name>.json`) inside `base`.
pub fn ledger_file(base: &std::path::Path, name: &str) -> PathBuf {
    base.join(format!("{name}.json"))
}
