//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` holding the environment and config path.
//! - Assemble the allow-list and account chains in precedence order.
//! - Apply the per-chain exhaustion policy.
//!
//! Does NOT handle:
//! - Parsing individual sources (delegated to source.rs).
//! - Interactive account selection (see `accounts` module).
//!
//! Invariants / Assumptions:
//! - The environment source is always evaluated before the file source.
//! - An explicit config path beats `CLAUDE_LAUNCHER_CONFIG`, which beats the default.
//! - Chains are rebuilt on every load; nothing is cached.

use std::path::PathBuf;
use std::sync::Arc;

use super::chain::PrecedenceChain;
use super::env::{Environment, ProcessEnvironment, env_var_or_none};
use super::error::{ChainError, ConfigError};
use super::expand::expand_tilde;
use super::source::{AccountSource, AllowListSource};
use crate::constants::{ACCOUNTS_ENV, CONFIG_PATH_ENV, SAFE_DIRS_ENV};
use crate::persistence::default_config_path;
use crate::types::{AccountSnapshot, AllowList};

/// Configuration loader that resolves the allow-list and accounts.
#[derive(Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    environment: Arc<dyn Environment>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_path", &self.config_path)
            .finish_non_exhaustive()
    }
}

impl ConfigLoader {
    /// Create a loader reading the real process environment.
    pub fn new() -> Self {
        Self {
            config_path: None,
            environment: Arc::new(ProcessEnvironment),
        }
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Replace the environment the sources read from.
    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> &dyn Environment {
        self.environment.as_ref()
    }

    /// Effective configuration file path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirUnavailable` if no override is set and
    /// the home directory cannot be determined.
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.config_path {
            return Ok(path.clone());
        }

        let env = self.environment();
        if let Some(raw) = env_var_or_none(env, CONFIG_PATH_ENV) {
            return expand_tilde(&raw, env.home_dir().as_deref())
                .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()));
        }

        default_config_path(env)
    }

    /// Allow-list sources: `CLAUDE_SAFE_DIRS`, then the config file.
    pub fn allow_list_chain(&self) -> PrecedenceChain<AllowListSource> {
        let mut sources = vec![AllowListSource::Environment {
            var: SAFE_DIRS_ENV.to_string(),
        }];
        if let Some(path) = self.file_source_path() {
            sources.push(AllowListSource::File { path });
        }
        PrecedenceChain::new(sources)
    }

    /// Account sources: `CLAUDE_ACCOUNTS`, then the config file.
    pub fn account_chain(&self) -> PrecedenceChain<AccountSource> {
        let mut sources = vec![AccountSource::Environment {
            var: ACCOUNTS_ENV.to_string(),
        }];
        if let Some(path) = self.file_source_path() {
            sources.push(AccountSource::File { path });
        }
        PrecedenceChain::new(sources)
    }

    /// Load the allowed directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigurationMissing` if no source succeeds; the
    /// launcher cannot run safely without an allow-list.
    pub fn load_allow_list(&self) -> Result<AllowList, ConfigError> {
        match self.allow_list_chain().load(self.environment()) {
            Ok(list) => {
                tracing::info!(entries = list.len(), "Loaded allowed directories");
                Ok(list)
            }
            Err(ChainError::Exhausted(attempts)) => {
                Err(ConfigError::ConfigurationMissing { attempts })
            }
            Err(ChainError::NoSources) => Err(ConfigError::ConfigurationMissing {
                attempts: Vec::new(),
            }),
        }
    }

    /// Load the configured accounts.
    ///
    /// `Ok(None)` means no accounts are configured and the tool's default
    /// profile applies; it is not an error.
    pub fn load_accounts(&self) -> Result<Option<AccountSnapshot>, ConfigError> {
        let snapshot = self
            .account_chain()
            .load_optional(self.environment())
            .map_err(|e| ConfigError::AccountLookup(e.to_string()))?;

        match &snapshot {
            Some(accounts) => tracing::info!(accounts = accounts.len(), "Loaded accounts"),
            None => tracing::debug!("No accounts configured"),
        }
        Ok(snapshot)
    }

    fn file_source_path(&self) -> Option<PathBuf> {
        match self.config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping config file source");
                None
            }
        }
    }
}
