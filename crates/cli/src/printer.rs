//! Colored user-facing messages.
//!
//! Responsibilities:
//! - Render every message the launcher shows a user.
//! - Mark success in green, errors in red and warnings in bold yellow.
//!
//! Does NOT handle:
//! - Diagnostics; those go through `tracing`.
//!
//! Invariants:
//! - Write failures are ignored; output is best effort.
//! - Coloring follows `colored`'s global switches (`NO_COLOR`, `CLICOLOR_FORCE`).

use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use launcher_config::constants::DIR_LIST_DELIMITER;
use launcher_config::{AccountProfile, ConfigFileStatus, SourceFailure};

/// Message printer over any writer, stderr in production.
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn success(&mut self, msg: impl Display) {
        let _ = write!(self.out, "{}", msg.to_string().green());
    }

    pub fn error(&mut self, msg: impl Display) {
        let _ = write!(self.out, "{}", msg.to_string().red());
    }

    pub fn warning(&mut self, msg: impl Display) {
        let _ = write!(self.out, "{}", msg.to_string().yellow().bold());
    }

    pub fn print(&mut self, msg: impl Display) {
        let _ = write!(self.out, "{msg}");
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }

    pub fn show_allowed_dirs(&mut self, dirs: &[PathBuf]) {
        self.print("Allowed directories:\n");
        for dir in dirs {
            self.print(format_args!("  - {}\n", dir.display()));
        }
    }

    /// Explain a denial using the resolved candidate and resolved allow-list.
    pub fn show_access_denied(&mut self, candidate: &Path, allow_list: &[PathBuf], skipped: &[PathBuf]) {
        self.error("✗ Access denied\n");
        self.print("\n");
        self.print(format_args!("Current directory: {}\n", candidate.display()));
        self.print("\n");
        self.print("Claude Code is not allowed to run in this directory.\n");
        self.show_allowed_dirs(allow_list);
        if !skipped.is_empty() {
            self.warning("Skipped (directory does not exist):\n");
            for dir in skipped {
                self.print(format_args!("  - {}\n", dir.display()));
            }
        }
        self.print("\n");
    }

    /// Guidance for a launcher with no usable allow-list.
    pub fn show_config_error(&mut self, attempts: &[SourceFailure]) {
        self.error("Error: No allowed directories configured\n");
        self.print("\n");
        if !attempts.is_empty() {
            self.print("Checked:\n");
            for attempt in attempts {
                self.print(format_args!("  - {attempt}\n"));
            }
            self.print("\n");
        }
        self.print("Please set allowed directories using one of these methods:\n");
        self.print("\n");
        self.print("1. Environment variable:\n");
        self.print(format_args!(
            "   export CLAUDE_SAFE_DIRS=\"$HOME/projects{DIR_LIST_DELIMITER}$HOME/work\"\n"
        ));
        self.print("\n");
        self.print("2. Create ~/.config/claude-launcher/config.json:\n");
        self.print("   {\"allowedDirs\": [\"/home/user/projects\"]}\n");
        self.print("\n");
    }

    pub fn show_directory_allowed(&mut self) {
        self.success("✓");
        self.print(" Directory allowed\n");
        self.print("\n");
    }

    pub fn show_account_not_found(&mut self, name: &str) {
        self.warning(format_args!("⚠ Account '{name}' not found\n"));
    }

    pub fn show_account_selected(&mut self, account: &AccountProfile) {
        self.success("✓");
        self.print(format_args!(" Account: {account}\n"));
        self.print("\n");
    }

    pub fn show_no_accounts_configured(&mut self) {
        self.print("Using default Claude configuration\n");
        self.print("\n");
    }

    pub fn show_continue_prompt(&mut self) {
        self.warning("Continue previous Claude session?\n");
        self.print("  [Y/n] (default: y): ");
        self.flush();
    }

    pub fn show_continuing_session(&mut self) {
        self.success("→");
        self.print(" Continuing previous session...\n");
    }

    pub fn show_starting_new_session(&mut self) {
        self.success("→");
        self.print(" Starting new session...\n");
    }

    /// `--show-config` output: path, then contents or a creation hint.
    pub fn show_config_file(&mut self, path: &Path, status: &ConfigFileStatus) {
        self.print(format_args!("Config file: {}\n\n", path.display()));
        match status {
            ConfigFileStatus::Present(contents) => {
                self.print("Contents:\n");
                self.print(contents);
                if !contents.ends_with('\n') {
                    self.print("\n");
                }
            }
            ConfigFileStatus::Missing => {
                self.print("(file does not exist)\n");
                self.print("\nCreate it with:\n");
                if let Some(dir) = path.parent() {
                    self.print(format_args!("  mkdir -p {}\n", dir.display()));
                }
                self.print(format_args!(
                    "  echo '{{\"allowedDirs\": []}}' > {}\n",
                    path.display()
                ));
            }
            ConfigFileStatus::Unreadable(reason) => {
                self.error(format_args!("Error reading file: {reason}\n"));
            }
        }
    }
}
