//! Configuration management for Claude Launcher.
//!
//! This crate provides the allow-list and account loaders, the precedence
//! chain they share, and account lookup/selection on top of them.

pub mod accounts;
pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use accounts::{AccountRegistry, AccountSelector, SelectionError};
pub use loader::{
    AccountSource, AllowListSource, ChainError, ConfigError, ConfigLoader, ConfigSource,
    Environment, MapEnvironment, PrecedenceChain, ProcessEnvironment, SourceError, SourceFailure,
    env_var_or_none, expand_tilde,
};
pub use persistence::{ConfigFile, ConfigFileStatus, inspect_config_file};
pub use types::{AccountProfile, AccountSnapshot, AllowList};
