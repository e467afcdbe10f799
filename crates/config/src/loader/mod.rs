//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Expose the `ConfigSource` capability and its allow-list/account implementations.
//! - Try sources in declared order through a `PrecedenceChain`.
//! - Provide a builder-pattern `ConfigLoader` that wires the chains together.
//!
//! Does NOT handle:
//! - Choosing between multiple accounts (see `accounts` module).
//! - Directory containment checks (see the gate crate).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over the configuration file.
//! - A source either yields a non-empty, fully valid result or fails; there is
//!   no partial success.
//! - Source failures never escape the chain individually.

mod builder;
mod chain;
mod env;
mod error;
mod expand;
mod source;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use chain::PrecedenceChain;
pub use env::{Environment, MapEnvironment, ProcessEnvironment, env_var_or_none};
pub use error::{ChainError, ConfigError, SourceError, SourceFailure};
pub use expand::expand_tilde;
pub use source::{AccountSource, AllowListSource, ConfigSource};
