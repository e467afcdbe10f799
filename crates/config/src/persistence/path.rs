//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the default configuration file path from the home directory.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::loader::{ConfigError, Environment};

/// Returns the default path to the configuration file.
///
/// This path is the **documented** config location on every platform:
/// `~/.config/claude-launcher/config.json`. `directories::ProjectDirs` is not
/// used because it would move the file to `Library/Application Support` on
/// macOS and `AppData` on Windows.
pub fn default_config_path(env: &dyn Environment) -> Result<PathBuf, ConfigError> {
    let home = env.home_dir().ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("home directory could not be determined".to_string())
    })?;

    Ok(home.join(".config").join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
