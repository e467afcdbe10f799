//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test precedence between environment and file sources.
//! - Test allow-list and account parsing through the public loader.
//! - Test the process-environment path with real variables.
//!
//! Invariants:
//! - Tests that touch the real process environment use `serial_test` and
//!   `global_test_lock()`.
//! - All other tests inject a `MapEnvironment`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::loader::{ConfigLoader, MapEnvironment};

pub mod chain_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

pub const TEST_HOME: &str = "/home/tester";

/// Writes `config` as `config.json` inside `dir`.
pub fn write_config_file(dir: &Path, config: serde_json::Value) -> PathBuf {
    let config_path = dir.join("config.json");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "{}", config).unwrap();
    config_path
}

/// Loader over `env` reading the config file at `config_path`.
pub fn loader(env: MapEnvironment, config_path: PathBuf) -> ConfigLoader {
    ConfigLoader::new()
        .with_environment(Arc::new(env.with_home(TEST_HOME)))
        .with_config_path(config_path)
}
