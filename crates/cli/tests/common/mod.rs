//! Shared test utilities for claude-launcher integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory isolated from the host's
//!   `CLAUDE_*` variables and home directory.
//! - Write fixture config files.
//!
//! Invariants / Assumptions:
//! - Every command gets its own temporary `HOME`, so the default config
//!   file never exists unless a test writes it.
//! - Colors are disabled so output can be matched literally.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment for one launcher invocation.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    /// Default config file location inside the sandbox home.
    pub fn default_config_path(&self) -> PathBuf {
        self.home
            .path()
            .join(".config")
            .join("claude-launcher")
            .join("config.json")
    }

    /// Write `config` to the default config file location.
    pub fn write_config(&self, config: serde_json::Value) -> PathBuf {
        let path = self.default_config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, config.to_string()).unwrap();
        path
    }

    /// Returns a hermetic `claude-launcher` command running in `cwd`.
    ///
    /// It ensures:
    /// - `HOME` points at the sandbox.
    /// - `CLAUDE_*` variables from the host are cleared.
    /// - `NO_COLOR=1` is set.
    pub fn cmd(&self, cwd: &Path) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("claude-launcher");
        cmd.current_dir(cwd)
            .env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("CLAUDE_SAFE_DIRS")
            .env_remove("CLAUDE_ACCOUNTS")
            .env_remove("CLAUDE_LAUNCHER_CONFIG")
            .env_remove("CLAUDE_LAUNCHER_BIN")
            .env_remove("CLAUDE_CONFIG_DIR")
            .env_remove("RUST_LOG");
        cmd
    }
}
