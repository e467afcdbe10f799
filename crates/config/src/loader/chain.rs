//! Ordered fallback across configuration sources.
//!
//! Responsibilities:
//! - Try sources in their declared order and return the first success.
//! - Record every failure so an exhausted chain can explain itself.
//!
//! Does NOT handle:
//! - Deciding whether exhaustion is fatal; that policy belongs to the caller
//!   (see `ConfigLoader::load_allow_list` and `ConfigLoader::load_accounts`).
//!
//! Invariants:
//! - Evaluation stops at the first source that succeeds.
//! - Individual source failures never escape; only `ChainError` does.
//! - Nothing is retried.

use super::env::Environment;
use super::error::{ChainError, SourceFailure};
use super::source::ConfigSource;

/// An ordered list of alternative sources; first success wins.
#[derive(Debug, Clone)]
pub struct PrecedenceChain<S> {
    sources: Vec<S>,
}

impl<S: ConfigSource> PrecedenceChain<S> {
    pub fn new(sources: Vec<S>) -> Self {
        Self { sources }
    }

    /// Sources in evaluation order.
    pub fn sources(&self) -> &[S] {
        &self.sources
    }

    /// Return the output of the first source that loads successfully.
    pub fn load(&self, env: &dyn Environment) -> Result<S::Output, ChainError> {
        if self.sources.is_empty() {
            return Err(ChainError::NoSources);
        }

        let mut failures = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let label = source.label();
            match source.load(env) {
                Ok(output) => {
                    tracing::debug!(source = %label, "Configuration source loaded");
                    return Ok(output);
                }
                Err(error) => {
                    tracing::debug!(source = %label, error = %error, "Configuration source failed");
                    failures.push(SourceFailure { label, error });
                }
            }
        }

        Err(ChainError::Exhausted(failures))
    }

    /// Like [`load`](Self::load), but an exhausted chain is `Ok(None)`.
    ///
    /// Only a chain with no sources at all is an error.
    pub fn load_optional(&self, env: &dyn Environment) -> Result<Option<S::Output>, ChainError> {
        match self.load(env) {
            Ok(output) => Ok(Some(output)),
            Err(ChainError::Exhausted(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
