//! Account lookup and selection.
//!
//! Responsibilities:
//! - Find a configured account by exact name.
//! - Pick an account through an injected `AccountSelector` when several exist.
//!
//! Does NOT handle:
//! - Rendering the selection prompt (the CLI supplies a terminal selector).
//! - Deciding what to do when a named account is missing; the caller falls
//!   back to interactive selection.
//!
//! Invariants:
//! - Every operation loads a fresh snapshot through `ConfigLoader`.
//! - "No accounts configured" is `Ok(None)`, never an error.
//! - The selector is only consulted when two or more accounts exist.

use thiserror::Error;

use crate::loader::{ConfigError, ConfigLoader};
use crate::types::AccountProfile;

/// Failure of the interactive selection mechanism.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("interactive selection is unavailable: {0}")]
    Unavailable(String),

    #[error("selection was cancelled")]
    Cancelled,

    #[error("selector returned index {index} for {len} accounts")]
    OutOfRange { index: usize, len: usize },
}

/// Single-choice selection over an ordered list of accounts.
#[cfg_attr(test, mockall::automock)]
pub trait AccountSelector {
    /// Return the index of the chosen account within `accounts`.
    fn select(&self, accounts: &[AccountProfile]) -> Result<usize, SelectionError>;
}

/// Account operations backed by a [`ConfigLoader`].
#[derive(Debug, Clone, Copy)]
pub struct AccountRegistry<'a> {
    loader: &'a ConfigLoader,
}

impl<'a> AccountRegistry<'a> {
    pub fn new(loader: &'a ConfigLoader) -> Self {
        Self { loader }
    }

    /// Look up an account by exact, case-sensitive name.
    ///
    /// Returns `Ok(None)` when no accounts are configured, when `name` is
    /// empty, or when nothing matches. The first matching entry wins.
    pub fn find_by_name(&self, name: &str) -> Result<Option<AccountProfile>, ConfigError> {
        let Some(snapshot) = self.loader.load_accounts()? else {
            return Ok(None);
        };
        if name.is_empty() {
            return Ok(None);
        }

        let found = snapshot.find(name).cloned();
        if found.is_none() {
            tracing::debug!(account = name, "Account not found");
        }
        Ok(found)
    }

    /// Choose an account, prompting only when there is a real choice.
    ///
    /// Returns `Ok(None)` when no accounts are configured and the sole entry
    /// when exactly one is.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Selection` if the selector fails or picks an
    /// index outside the list.
    pub fn select_interactively(
        &self,
        selector: &dyn AccountSelector,
    ) -> Result<Option<AccountProfile>, ConfigError> {
        let Some(snapshot) = self.loader.load_accounts()? else {
            return Ok(None);
        };

        let mut profiles = snapshot.into_profiles();
        if profiles.len() == 1 {
            tracing::debug!("Single account configured, selecting it");
            return Ok(profiles.pop());
        }

        let index = selector.select(&profiles)?;
        let len = profiles.len();
        if index >= len {
            return Err(SelectionError::OutOfRange { index, len }.into());
        }
        Ok(Some(profiles.swap_remove(index)))
    }
}
