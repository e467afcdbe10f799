//! Configuration file representation and reading.
//!
//! Responsibilities:
//! - Define the on-disk JSON shape (`ConfigFile`, `AccountEntry`).
//! - Read and parse the file, mapping failures to `SourceError`.
//! - Inspect the file without parsing it, for display.
//!
//! Does NOT handle:
//! - Validating or expanding entries (see `loader::source`).
//!
//! Invariants:
//! - Keys are camelCase; unknown keys are ignored.
//! - `configDir` is accepted as an alias of `profileDir` for files written
//!   by older launchers.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loader::SourceError;

/// Parsed contents of `config.json`.
///
/// Both fields are optional; which one is required depends on the chain
/// reading the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Directories the launcher may run in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_dirs: Option<Vec<String>>,
    /// Named account profiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<AccountEntry>>,
}

/// One account object in the `accounts` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "configDir")]
    pub profile_dir: String,
}

/// Reads and parses the config file from disk.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| SourceError::FileRead {
        path: path.to_path_buf(),
        io: e,
    })?;

    serde_json::from_str(&content).map_err(|e| SourceError::FileParse {
        path: path.to_path_buf(),
        json: e,
    })
}

/// What `--show-config` found at the configuration path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFileStatus {
    /// The file exists; raw contents are included verbatim.
    Present(String),
    /// Nothing exists at the path.
    Missing,
    /// The file exists but could not be read.
    Unreadable(String),
}

/// Inspect the configuration file without interpreting it.
pub fn inspect_config_file(path: &Path) -> ConfigFileStatus {
    match std::fs::read_to_string(path) {
        Ok(contents) => ConfigFileStatus::Present(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => ConfigFileStatus::Missing,
        Err(e) => ConfigFileStatus::Unreadable(e.to_string()),
    }
}
