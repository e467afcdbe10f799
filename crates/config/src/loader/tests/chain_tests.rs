//! Precedence chain tests.
//!
//! Responsibilities:
//! - Test first-success-wins ordering.
//! - Test failure aggregation and the optional-load policy.

use std::cell::Cell;

use crate::loader::{
    ChainError, ConfigError, ConfigSource, Environment, MapEnvironment, PrecedenceChain,
    SourceError,
};

use super::{loader, write_config_file};
use tempfile::TempDir;

/// Source with a fixed outcome that counts how often it was asked.
struct Scripted {
    name: &'static str,
    value: Option<u32>,
    calls: Cell<u32>,
}

impl Scripted {
    fn ok(name: &'static str, value: u32) -> Self {
        Self {
            name,
            value: Some(value),
            calls: Cell::new(0),
        }
    }

    fn failing(name: &'static str) -> Self {
        Self {
            name,
            value: None,
            calls: Cell::new(0),
        }
    }
}

impl ConfigSource for Scripted {
    type Output = u32;

    fn label(&self) -> String {
        self.name.to_string()
    }

    fn load(&self, _env: &dyn Environment) -> Result<u32, SourceError> {
        self.calls.set(self.calls.get() + 1);
        self.value.ok_or_else(|| SourceError::Unset {
            var: self.name.to_string(),
        })
    }
}

#[test]
fn test_first_success_wins_and_stops_evaluation() {
    let chain = PrecedenceChain::new(vec![
        Scripted::failing("a"),
        Scripted::ok("b", 2),
        Scripted::ok("c", 3),
    ]);

    assert_eq!(chain.load(&MapEnvironment::new()).unwrap(), 2);
    let calls: Vec<u32> = chain.sources().iter().map(|s| s.calls.get()).collect();
    assert_eq!(calls, vec![1, 1, 0]);
}

#[test]
fn test_exhausted_chain_reports_failures_in_order() {
    let chain = PrecedenceChain::new(vec![Scripted::failing("a"), Scripted::failing("b")]);

    match chain.load(&MapEnvironment::new()) {
        Err(ChainError::Exhausted(failures)) => {
            let labels: Vec<&str> = failures.iter().map(|f| f.label.as_str()).collect();
            assert_eq!(labels, vec!["a", "b"]);
        }
        other => panic!("expected exhausted chain, got {other:?}"),
    }
}

#[test]
fn test_empty_chain_is_distinct_from_exhausted() {
    let chain: PrecedenceChain<Scripted> = PrecedenceChain::new(Vec::new());
    assert!(matches!(
        chain.load(&MapEnvironment::new()),
        Err(ChainError::NoSources)
    ));
    assert!(matches!(
        chain.load_optional(&MapEnvironment::new()),
        Err(ChainError::NoSources)
    ));
}

#[test]
fn test_load_optional_masks_exhaustion() {
    let chain = PrecedenceChain::new(vec![Scripted::failing("a")]);
    assert!(chain.load_optional(&MapEnvironment::new()).unwrap().is_none());
}

#[test]
fn test_environment_beats_file_for_both_chains() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config_file(
        temp_dir.path(),
        serde_json::json!({
            "allowedDirs": ["/from/file"],
            "accounts": [{"name": "FromFile", "profileDir": "/file"}]
        }),
    );
    let env = MapEnvironment::new()
        .with_var("CLAUDE_SAFE_DIRS", "/from/env")
        .with_var("CLAUDE_ACCOUNTS", "FromEnv:/env");
    let loader = loader(env, config_path);

    let dirs = loader.load_allow_list().unwrap();
    assert_eq!(dirs.dirs(), [std::path::PathBuf::from("/from/env")]);

    let accounts = loader.load_accounts().unwrap().unwrap();
    assert_eq!(accounts.profiles()[0].name(), "FromEnv");
}

#[test]
fn test_file_used_when_environment_is_unset() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config_file(
        temp_dir.path(),
        serde_json::json!({
            "allowedDirs": ["/from/file"],
            "accounts": [{"name": "FromFile", "profileDir": "/file"}]
        }),
    );
    let loader = loader(MapEnvironment::new(), config_path);

    assert_eq!(
        loader.load_allow_list().unwrap().dirs(),
        [std::path::PathBuf::from("/from/file")]
    );
    assert_eq!(
        loader.load_accounts().unwrap().unwrap().profiles()[0].name(),
        "FromFile"
    );
}

#[test]
fn test_malformed_environment_falls_through_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config_file(
        temp_dir.path(),
        serde_json::json!({"accounts": [{"name": "FromFile", "profileDir": "/file"}]}),
    );
    let env = MapEnvironment::new().with_var("CLAUDE_ACCOUNTS", "not-a-pair");
    let loader = loader(env, config_path);

    assert_eq!(
        loader.load_accounts().unwrap().unwrap().profiles()[0].name(),
        "FromFile"
    );
}

#[test]
fn test_neither_source_valid() {
    let temp_dir = TempDir::new().unwrap();
    let env = MapEnvironment::new().with_var("CLAUDE_SAFE_DIRS", "");
    let loader = loader(env, temp_dir.path().join("missing.json"));

    let err = loader.load_allow_list().unwrap_err();
    assert!(matches!(err, ConfigError::ConfigurationMissing { .. }));
    assert_eq!(err.attempts().len(), 2);

    assert!(loader.load_accounts().unwrap().is_none());
}
