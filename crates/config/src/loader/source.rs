//! Configuration sources for the allow-list and account chains.
//!
//! Responsibilities:
//! - Define the `ConfigSource` capability shared by every source.
//! - Parse the allowed-directory list from an environment variable or the config file.
//! - Parse account profiles from an environment variable or the config file.
//!
//! Does NOT handle:
//! - Ordering or fallback between sources (see chain.rs).
//! - Canonicalizing directories (see the gate crate).
//!
//! Invariants:
//! - Sources only read; they never mutate the environment or the filesystem.
//! - A source that would yield zero entries fails instead.
//! - Directory entries are trimmed and blank ones dropped, in both sources.
//! - Every configured directory passes through `expand_tilde` exactly once.

use std::path::{Path, PathBuf};

use super::env::{Environment, env_var_or_none};
use super::error::SourceError;
use super::expand::expand_tilde;
use crate::constants::{ACCOUNT_LIST_DELIMITER, ACCOUNT_PAIR_DELIMITER, DIR_LIST_DELIMITER};
use crate::persistence::read_config_file;
use crate::types::{AccountProfile, AccountSnapshot, AllowList};

/// Something that can produce a validated configuration value or fail.
pub trait ConfigSource {
    type Output;

    /// Short description used in logs and aggregated errors.
    fn label(&self) -> String;

    fn load(&self, env: &dyn Environment) -> Result<Self::Output, SourceError>;
}

/// Where an allow-list can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowListSource {
    /// Delimiter-separated directories in an environment variable.
    Environment { var: String },
    /// The `allowedDirs` array of a configuration file.
    File { path: PathBuf },
}

impl ConfigSource for AllowListSource {
    type Output = AllowList;

    fn label(&self) -> String {
        match self {
            AllowListSource::Environment { var } => var.clone(),
            AllowListSource::File { path } => path.display().to_string(),
        }
    }

    fn load(&self, env: &dyn Environment) -> Result<AllowList, SourceError> {
        match self {
            AllowListSource::Environment { var } => load_allow_list_env(env, var),
            AllowListSource::File { path } => load_allow_list_file(env, path),
        }
    }
}

/// Where account profiles can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSource {
    /// Comma-separated `Name:Directory` pairs in an environment variable.
    Environment { var: String },
    /// The `accounts` array of a configuration file.
    File { path: PathBuf },
}

impl ConfigSource for AccountSource {
    type Output = AccountSnapshot;

    fn label(&self) -> String {
        match self {
            AccountSource::Environment { var } => var.clone(),
            AccountSource::File { path } => path.display().to_string(),
        }
    }

    fn load(&self, env: &dyn Environment) -> Result<AccountSnapshot, SourceError> {
        match self {
            AccountSource::Environment { var } => load_accounts_env(env, var),
            AccountSource::File { path } => load_accounts_file(env, path),
        }
    }
}

fn load_allow_list_env(env: &dyn Environment, var: &str) -> Result<AllowList, SourceError> {
    let value = env_var_or_none(env, var).ok_or_else(|| SourceError::Unset {
        var: var.to_string(),
    })?;
    let home = env.home_dir();

    let dirs = value
        .split(DIR_LIST_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| expand_tilde(segment, home.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;

    AllowList::new(dirs).ok_or_else(|| SourceError::NoEntries {
        var: var.to_string(),
    })
}

fn load_allow_list_file(env: &dyn Environment, path: &Path) -> Result<AllowList, SourceError> {
    let file = read_config_file(path)?;
    let entries = file
        .allowed_dirs
        .ok_or_else(|| SourceError::missing_allowed_dirs(path.to_path_buf()))?;
    let home = env.home_dir();

    let dirs = entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| expand_tilde(entry, home.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;

    AllowList::new(dirs).ok_or_else(|| SourceError::missing_allowed_dirs(path.to_path_buf()))
}

fn load_accounts_env(env: &dyn Environment, var: &str) -> Result<AccountSnapshot, SourceError> {
    let value = env_var_or_none(env, var).ok_or_else(|| SourceError::Unset {
        var: var.to_string(),
    })?;

    let profiles = parse_account_pairs(&value, env.home_dir().as_deref())?;
    AccountSnapshot::new(profiles).ok_or_else(|| SourceError::NoEntries {
        var: var.to_string(),
    })
}

/// Parse `Name:Directory` pairs, splitting each pair on its first colon only.
fn parse_account_pairs(
    value: &str,
    home: Option<&Path>,
) -> Result<Vec<AccountProfile>, SourceError> {
    let mut profiles = Vec::new();

    for entry in value.split(ACCOUNT_LIST_DELIMITER) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (name, dir) = entry.split_once(ACCOUNT_PAIR_DELIMITER).ok_or_else(|| {
            SourceError::InvalidAccountEntry {
                entry: entry.to_string(),
                reason: "expected format Name:Directory",
            }
        })?;

        let invalid = || SourceError::InvalidAccountEntry {
            entry: entry.to_string(),
            reason: "name and directory cannot be empty",
        };
        let (name, dir) = (name.trim(), dir.trim());
        if name.is_empty() || dir.is_empty() {
            return Err(invalid());
        }

        let profile_dir = expand_tilde(dir, home)?;
        profiles.push(AccountProfile::new(name, profile_dir).ok_or_else(invalid)?);
    }

    Ok(profiles)
}

fn load_accounts_file(env: &dyn Environment, path: &Path) -> Result<AccountSnapshot, SourceError> {
    let file = read_config_file(path)?;
    let entries = file
        .accounts
        .filter(|accounts| !accounts.is_empty())
        .ok_or_else(|| SourceError::missing_accounts(path.to_path_buf()))?;
    let home = env.home_dir();

    let mut profiles = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let empty = || SourceError::EmptyAccountField {
            path: path.to_path_buf(),
            index,
        };
        if entry.name.trim().is_empty() || entry.profile_dir.trim().is_empty() {
            return Err(empty());
        }

        let profile_dir = expand_tilde(&entry.profile_dir, home.as_deref())?;
        profiles.push(AccountProfile::new(entry.name, profile_dir).ok_or_else(empty)?);
    }

    AccountSnapshot::new(profiles).ok_or_else(|| SourceError::missing_accounts(path.to_path_buf()))
}
