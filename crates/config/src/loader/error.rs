//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define source-level failures (`SourceError`), which the chain absorbs.
//! - Define chain-level failures (`ChainError`).
//! - Define the crate's public error (`ConfigError`).
//!
//! Does NOT handle:
//! - Directory gate errors (see the gate crate).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - `ConfigurationMissing` keeps every source failure in evaluation order.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::accounts::SelectionError;
use crate::constants::{ACCOUNTS_FIELD, ALLOWED_DIRS_FIELD};

/// Why a single configuration source did not produce a result.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{var} is not set")]
    Unset { var: String },

    #[error("{var} contains no entries")]
    NoEntries { var: String },

    #[error("invalid account entry {entry:?}: {reason}")]
    InvalidAccountEntry { entry: String, reason: &'static str },

    #[error("failed to read config file at {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        io: std::io::Error,
    },

    #[error("failed to parse config file at {}", .path.display())]
    FileParse {
        path: PathBuf,
        #[source]
        json: serde_json::Error,
    },

    #[error("no {field} found in config file at {}", .path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("account #{index} in {} has an empty name or profileDir", .path.display())]
    EmptyAccountField { path: PathBuf, index: usize },

    #[error("cannot expand {raw:?}: home directory is unavailable")]
    HomeDirUnavailable { raw: String },
}

impl SourceError {
    pub(crate) fn missing_allowed_dirs(path: PathBuf) -> Self {
        SourceError::MissingField {
            path,
            field: ALLOWED_DIRS_FIELD,
        }
    }

    pub(crate) fn missing_accounts(path: PathBuf) -> Self {
        SourceError::MissingField {
            path,
            field: ACCOUNTS_FIELD,
        }
    }
}

/// A failed attempt recorded by the chain.
#[derive(Debug)]
pub struct SourceFailure {
    /// Human-readable source description, e.g. the variable name or file path.
    pub label: String,
    pub error: SourceError,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.error)
    }
}

/// Outcome of a chain in which no source succeeded.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("no configuration sources registered")]
    NoSources,

    #[error("all configuration sources failed: {}", render_failures(.0))]
    Exhausted(Vec<SourceFailure>),
}

/// Errors surfaced by the configuration layer.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No allowed directories configured ({})", render_failures(.attempts))]
    ConfigurationMissing { attempts: Vec<SourceFailure> },

    /// The account chain had no sources to evaluate. `ConfigLoader` always
    /// registers the environment source, so its chains never produce this.
    #[error("Failed to load account configuration: {0}")]
    AccountLookup(String),

    #[error("Account selection failed: {0}")]
    Selection(#[from] SelectionError),

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),
}

impl ConfigError {
    /// Source failures behind a `ConfigurationMissing`, in evaluation order.
    pub fn attempts(&self) -> &[SourceFailure] {
        match self {
            ConfigError::ConfigurationMissing { attempts } => attempts,
            _ => &[],
        }
    }
}

fn render_failures(failures: &[SourceFailure]) -> String {
    if failures.is_empty() {
        return "no sources were tried".to_string();
    }
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
