//! Centralized constants for the Claude Launcher workspace.
//!
//! Environment variable names and file locations live here so the CLI help
//! text, the loaders and the tests all agree on them.

// =============================================================================
// Environment Variables
// =============================================================================

/// Delimiter-separated list of allowed directories.
pub const SAFE_DIRS_ENV: &str = "CLAUDE_SAFE_DIRS";

/// Comma-separated list of `Name:Directory` account pairs.
pub const ACCOUNTS_ENV: &str = "CLAUDE_ACCOUNTS";

/// Overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "CLAUDE_LAUNCHER_CONFIG";

/// Set on the launched tool when an account profile was resolved.
pub const PROFILE_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

// =============================================================================
// List Parsing
// =============================================================================

/// Separator between entries of [`SAFE_DIRS_ENV`], matching the platform's
/// `PATH` convention.
#[cfg(windows)]
pub const DIR_LIST_DELIMITER: char = ';';

/// Separator between entries of [`SAFE_DIRS_ENV`], matching the platform's
/// `PATH` convention.
#[cfg(not(windows))]
pub const DIR_LIST_DELIMITER: char = ':';

/// Separator between entries of [`ACCOUNTS_ENV`].
pub const ACCOUNT_LIST_DELIMITER: char = ',';

/// Separator between the name and directory of one account entry.
/// Only the first occurrence is significant.
pub const ACCOUNT_PAIR_DELIMITER: char = ':';

// =============================================================================
// Configuration File
// =============================================================================

/// Application directory name under `~/.config`.
pub const APP_DIR_NAME: &str = "claude-launcher";

/// Configuration file name inside [`APP_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// JSON key holding the allowed directories.
pub const ALLOWED_DIRS_FIELD: &str = "allowedDirs";

/// JSON key holding the account profiles.
pub const ACCOUNTS_FIELD: &str = "accounts";
